
use std::error::Error;
use std::io;

use parse_display::Display;

// ------------------------------------------------------------------------------------------------
// ContainerError
// ------------------------------------------------------------------------------------------------

/// Why a stream isn't a valid container. When loading with fallback, any of these just means
/// "try the raw format instead".
#[derive(Debug, Display, PartialEq, Eq, Copy, Clone)]
pub enum ContainerError {
	#[display("bad magic number")]
	BadMagic,

	#[display("unsupported version {version}")]
	BadVersion { version: u8 },

	#[display("truncated (expected {expected} bytes, got {got})")]
	Truncated { expected: usize, got: usize },
}

// ------------------------------------------------------------------------------------------------
// LoadErrorKind
// ------------------------------------------------------------------------------------------------

/// The kinds of load errors.
#[derive(Debug, Display, PartialEq, Eq, Clone)]
pub enum LoadErrorKind {
	/// The stream isn't a valid container.
	#[display("invalid container: {0}")]
	Container(ContainerError),

	/// Reading the stream failed.
	#[display("I/O error: {msg}")]
	Io { msg: String },

	/// Couldn't allocate the record array.
	#[display("out of memory allocating {slots} records")]
	OutOfMemory { slots: usize },
}

// ------------------------------------------------------------------------------------------------
// LoadError
// ------------------------------------------------------------------------------------------------

/// The load error type.
#[derive(Debug, Display, PartialEq, Eq, Clone)]
#[display("load error: {kind}")]
pub struct LoadError {
	pub kind: LoadErrorKind,
}

impl Error for LoadError {}

impl LoadError {
	/// Shorthand constructors.
	pub fn container(err: ContainerError) -> LoadError {
		LoadError { kind: LoadErrorKind::Container(err) }
	}

	/// Ditto.
	pub fn out_of_memory(slots: usize) -> LoadError {
		LoadError { kind: LoadErrorKind::OutOfMemory { slots } }
	}

	/// Is this just "that wasn't a container"?
	pub fn is_container(&self) -> bool {
		matches!(self.kind, LoadErrorKind::Container(..))
	}
}

impl From<ContainerError> for LoadError {
	fn from(err: ContainerError) -> Self {
		LoadError::container(err)
	}
}

impl From<io::Error> for LoadError {
	fn from(err: io::Error) -> Self {
		LoadError { kind: LoadErrorKind::Io { msg: err.to_string() } }
	}
}

// ------------------------------------------------------------------------------------------------
// LoadResult
// ------------------------------------------------------------------------------------------------

/// Alias for a `Result` with a `LoadError` as its error type.
pub type LoadResult<T> = Result<T, LoadError>;
