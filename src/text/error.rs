
use std::error::Error;

use parse_display::Display;

// ------------------------------------------------------------------------------------------------
// TextError
// ------------------------------------------------------------------------------------------------

/// Reasons a [`TextCursor`](super::TextCursor) can't be created.
#[derive(Debug, Display, PartialEq, Eq, Copy, Clone)]
pub enum TextError {
	/// Capacity must be at least 1.
	#[display("text cursor capacity must be at least 1")]
	ZeroCapacity,

	/// Couldn't reserve the backing storage.
	#[display("out of memory allocating {capacity} bytes for text cursor")]
	OutOfMemory { capacity: usize },
}

impl Error for TextError {}

// ------------------------------------------------------------------------------------------------
// TextResult
// ------------------------------------------------------------------------------------------------

/// Alias for a `Result` with a `TextError` as its error type.
pub type TextResult<T> = Result<T, TextError>;
