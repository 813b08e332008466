//! Turns decoded [`Record`]s into lines of an assembly listing.
//!
//! A line looks like this (address column and trailing comment are optional):
//!
//! ```text
//! 0x0010:            start:  LW    r1, [r2+0x0100]                 ; .word 0x4250, 0x0100
//! ```

use std::io::{ self, Write as IoWrite };

use crate::config::{ ListingConfig };
use crate::program::{ Image, Record, Shape };
use crate::text::{ TextCursor, TextResult };

// ------------------------------------------------------------------------------------------------
// Sub-modules
// ------------------------------------------------------------------------------------------------


// ------------------------------------------------------------------------------------------------
// Layout constants
// ------------------------------------------------------------------------------------------------

/// Column where the trailing `; .word` comment goes. Lines already this long don't get one.
pub const MAX_LINE: usize = 50;

/// Width of the (right-justified) label field, not counting the colon.
pub const LABEL_WIDTH: usize = 15;

/// Width of the (left-justified) mnemonic field.
pub const MNEMONIC_WIDTH: usize = 5;

/// Capacity of the text cursor used for each line.
pub const LINE_CAPACITY: usize = 256;

/// BLC tests the high byte of r0, so its byte operand really means `byte << 8`.
const BLC_MASK:    u16 = 0xFF00;
const BLC_PATTERN: u16 = 0xE400;

// ------------------------------------------------------------------------------------------------
// render_record
// ------------------------------------------------------------------------------------------------

/// Writes the listing line for the record at `addr` into `cursor` (no newline), and returns
/// how many addresses it covered (1, or 2 for addressing-mode operands with a trailing word).
///
/// The cursor is expected to be at the start of a line; the trailing comment is aligned using
/// its column.
pub fn render_record(image: &Image, addr: usize, cursor: &mut TextCursor, config: &ListingConfig)
-> usize {
	let rec = &image[addr];

	if !config.skip_addresses {
		cursor.append_formatted(format_args!("0x{:04x}: ", addr));
	}

	match &rec.label {
		Some(label) => cursor.append_formatted(format_args!("{:>w$}:  ", label, w = LABEL_WIDTH)),
		None        => cursor.append_formatted(format_args!("{:w$}", "", w = LABEL_WIDTH + 3)),
	};

	render_body(image, addr, rec, cursor, config);

	// data with no symbolic name already shows its value.
	let annotate = rec.shape != Shape::Data || rec.argname.is_some();

	if !config.skip_values && annotate && cursor.column() < MAX_LINE {
		cursor.pad_to_column(MAX_LINE);
		cursor.append_formatted(format_args!(" ; .word 0x{:04x}", rec.value()));

		if rec.size() == 2 {
			cursor.append_formatted(format_args!(", 0x{:04x}", next_word(image, addr)));
		}
	}

	rec.size()
}

fn render_body(image: &Image, addr: usize, rec: &Record, cursor: &mut TextCursor,
config: &ListingConfig) {
	let w = rec.word;

	match rec.shape {
		Shape::Data => {
			cursor.append_formatted(format_args!(".word "));

			match &rec.argname {
				Some(name) => cursor.append_formatted(format_args!("{}", name)),
				None       => cursor.append_formatted(format_args!("0x{:04x}", rec.value())),
			};
		}

		Shape::NoOperand => {
			mnemonic(rec, cursor, config);
		}

		Shape::Reg => {
			mnemonic(rec, cursor, config);
			cursor.append_formatted(format_args!(" r{}", w.a()));
		}

		Shape::RegImm => {
			mnemonic(rec, cursor, config);

			match &rec.argname {
				Some(name) => cursor.append_formatted(format_args!(" r{}, {}", w.a(), name)),
				None       => cursor.append_formatted(format_args!(" r{}, {}", w.a(), w.imm())),
			};
		}

		Shape::Imm => {
			mnemonic(rec, cursor, config);

			match &rec.argname {
				Some(name) => {
					cursor.append_formatted(format_args!(" {}", name));
				}
				None if rec.is_relative() => {
					// not wrapped; a target before address 0 prints as -0xNNNN.
					let target = addr as i64 + 1 + w.imm() as i64;
					let sign = if target < 0 { "-" } else { "" };
					cursor.append_formatted(format_args!(" {} ; -> {}0x{:04x}", w.imm(), sign,
						target.abs()));
				}
				None => {
					cursor.append_formatted(format_args!(" {}", w.imm()));
				}
			}
		}

		Shape::BranchDisp => {
			mnemonic(rec, cursor, config);

			let disp = if rec.value() & BLC_MASK == BLC_PATTERN {
				(w.byte() as u16) << 8
			} else {
				w.byte() as u16
			};

			cursor.append_formatted(format_args!(" {}", disp));
		}

		Shape::RegShortImm => {
			mnemonic(rec, cursor, config);
			cursor.append_formatted(format_args!(" r{}, {}", w.a(), w.short_imm()));
		}

		Shape::RegAddrMode => {
			mnemonic(rec, cursor, config);
			cursor.append_formatted(format_args!(" r{}, ", w.a()));
			addr_mode(image, addr, rec, cursor);
		}

		Shape::AddrMode => {
			mnemonic(rec, cursor, config);
			cursor.append_formatted(format_args!(" "));
			addr_mode(image, addr, rec, cursor);
		}
	}
}

/// The mnemonic, padded to `MNEMONIC_WIDTH`.
fn mnemonic(rec: &Record, cursor: &mut TextCursor, config: &ListingConfig) {
	let mnem = rec.mnemonic.as_deref().unwrap_or("???");
	let before = cursor.pos();
	cursor.append_formatted(format_args!("{:<w$}", mnem, w = MNEMONIC_WIDTH));

	if config.lowercase_mnemonics {
		// only what was actually stored, in case the line got cut off.
		cursor.lowercase_last(cursor.pos() - before);
	}
}

/// An addressing-mode operand: `rC`, `rC+rB`, `rB+0xNNNN`, `0xNNNN` or a name, in brackets if
/// it's indirect.
fn addr_mode(image: &Image, addr: usize, rec: &Record, cursor: &mut TextCursor) {
	let w = rec.word;

	if w.d() {
		cursor.append_char('[');
	}

	if w.c() != 0 {
		cursor.append_formatted(format_args!("r{}", w.c()));

		if w.b() != 0 {
			cursor.append_formatted(format_args!("+r{}", w.b()));
		}
	} else if w.b() != 0 {
		cursor.append_formatted(format_args!("r{}+0x{:04x}", w.b(), next_word(image, addr)));
	} else {
		match &rec.argname {
			Some(name) => cursor.append_formatted(format_args!("{}", name)),
			None       => cursor.append_formatted(format_args!("0x{:04x}", next_word(image, addr))),
		};
	}

	if w.d() {
		cursor.append_char(']');
	}
}

/// The operand word following a two-word instruction.
fn next_word(image: &Image, addr: usize) -> u16 {
	match image.get(addr + 1) {
		Some(rec) => rec.value(),
		None => {
			log::warn!("instruction at 0x{:04x} is missing its second word", addr);
			0
		}
	}
}

// ------------------------------------------------------------------------------------------------
// Listing
// ------------------------------------------------------------------------------------------------

/// Renders a whole image, one line at a time, reusing a single text cursor.
pub struct Listing<'img> {
	image:  &'img Image,
	config: ListingConfig,
	cursor: TextCursor,
}

impl<'img> Listing<'img> {
	/// Ctor.
	pub fn new(image: &'img Image, config: ListingConfig) -> TextResult<Self> {
		Ok(Self { image, config, cursor: TextCursor::new(LINE_CAPACITY)? })
	}

	/// Renders the line at `addr` and returns it along with how many addresses it covered.
	pub fn render_line(&mut self, addr: usize) -> (String, usize) {
		let size = self.render_into_cursor(addr);
		(self.cursor.text().into_owned(), size)
	}

	/// Iterator over `(address, line)` for the whole image, starting at its start address.
	pub fn lines<'l>(&'l mut self) -> Lines<'l, 'img> {
		let addr = self.image.start();
		Lines { listing: self, addr }
	}

	/// Writes every line, each ending in a newline, to `out`.
	pub fn write_to(&mut self, out: &mut dyn IoWrite) -> io::Result<()> {
		let (start, end) = (self.image.start(), self.image.end());
		log::debug!("listing 0x{:04x}..0x{:04x}", start, end);

		let mut addr = start;

		while addr < end {
			addr += self.render_into_cursor(addr);

			if self.cursor.append_newline() == 0 {
				out.write_all(self.cursor.as_bytes())?;
				out.write_all(b"\n")?;
			} else {
				out.write_all(self.cursor.as_bytes())?;
			}
		}

		out.flush()
	}

	// ---------------------------------------------------------------------------------------------
	// private

	fn render_into_cursor(&mut self, addr: usize) -> usize {
		self.cursor.reset();
		let size = render_record(self.image, addr, &mut self.cursor, &self.config);

		if self.cursor.column() > self.cursor.pos() {
			log::warn!("line for 0x{:04x} was truncated to {} bytes", addr, self.cursor.pos());
		}

		size
	}
}

/// Iterator returned by [`Listing::lines`].
pub struct Lines<'l, 'img> {
	listing: &'l mut Listing<'img>,
	addr:    usize,
}

impl Iterator for Lines<'_, '_> {
	type Item = (usize, String);

	fn next(&mut self) -> Option<Self::Item> {
		if self.addr >= self.listing.image.end() {
			None
		} else {
			let addr = self.addr;
			let (line, size) = self.listing.render_line(addr);
			self.addr += size;
			Some((addr, line))
		}
	}
}

// ------------------------------------------------------------------------------------------------
// write_listing
// ------------------------------------------------------------------------------------------------

/// Writes the listing of all of `image` to `out`.
pub fn write_listing(image: &Image, config: &ListingConfig, out: &mut dyn IoWrite)
-> io::Result<()> {
	let mut listing = Listing::new(image, *config)
		.map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
	listing.write_to(out)
}
