
// ------------------------------------------------------------------------------------------------
// ListingConfig
// ------------------------------------------------------------------------------------------------

/// Switches that change what goes into a listing. Set these up before rendering; the renderer
/// only ever reads them.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct ListingConfig {
	/// Leave out the `0x1234: ` address column.
	pub skip_addresses:      bool,
	/// Leave out the trailing `; .word` comment with the raw value(s).
	pub skip_values:         bool,
	/// Print mnemonics in lowercase, whatever case the decoder gave them.
	pub lowercase_mnemonics: bool,
}

impl ListingConfig {
	/// Everything on.
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_skip_addresses(mut self, skip: bool) -> Self {
		self.skip_addresses = skip;
		self
	}

	pub fn with_skip_values(mut self, skip: bool) -> Self {
		self.skip_values = skip;
		self
	}

	pub fn with_lowercase_mnemonics(mut self, lower: bool) -> Self {
		self.lowercase_mnemonics = lower;
		self
	}
}
