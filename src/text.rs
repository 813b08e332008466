//! A fixed-capacity text buffer that knows what column it's on.
//!
//! Listing lines are composed into a [`TextCursor`] piece by piece. Each piece can be padded
//! out to a column first, so fields line up no matter how long the previous field turned out.
//! Writes past the capacity are silently dropped (but still counted, see
//! [`TextCursor::append_formatted`]).

use std::fmt::{
	self,
	Write as FmtWrite,
	Arguments as FmtArguments,
};
use std::borrow::Cow;

// ------------------------------------------------------------------------------------------------
// Sub-modules
// ------------------------------------------------------------------------------------------------

mod error;

pub use error::*;

// ------------------------------------------------------------------------------------------------
// TextCursor
// ------------------------------------------------------------------------------------------------

/// A bounded character sink with an absolute write position and a column position.
///
/// The backing storage is one byte longer than the capacity and always has a NUL at the write
/// position, so the write position can never exceed the capacity.
#[derive(Debug, Clone)]
pub struct TextCursor {
	buf:  Vec<u8>,
	cap:  usize,
	pos:  usize,
	lpos: usize,
}

impl TextCursor {
	/// Ctor. Fails if `capacity` is 0 or if the storage can't be allocated.
	pub fn new(capacity: usize) -> TextResult<Self> {
		if capacity < 1 {
			return Err(TextError::ZeroCapacity);
		}

		let size = capacity.checked_add(1).ok_or(TextError::OutOfMemory { capacity })?;
		let mut buf = Vec::new();
		buf.try_reserve_exact(size).map_err(|_| TextError::OutOfMemory { capacity })?;
		buf.resize(size, 0);

		let mut ret = Self { buf, cap: capacity, pos: 0, lpos: 0 };
		ret.reset();
		Ok(ret)
	}

	// --------------------------------------------------------------------------------------------
	// Getters

	/// How many bytes this can hold (not counting the terminator).
	#[inline] pub fn capacity(&self) -> usize { self.cap }

	/// Absolute write position.
	#[inline] pub fn pos(&self) -> usize { self.pos }

	/// Column on the current line. This counts *logical* characters, so it can run ahead of
	/// what's actually stored once the buffer fills up.
	#[inline] pub fn column(&self) -> usize { self.lpos }

	/// How many more bytes fit.
	#[inline] pub fn remaining(&self) -> usize { self.cap - self.pos }

	/// Everything written since the last reset.
	#[inline] pub fn as_bytes(&self) -> &[u8] {
		&self.buf[.. self.pos]
	}

	/// Everything written since the last reset, as text.
	pub fn text(&self) -> Cow<'_, str> {
		String::from_utf8_lossy(self.as_bytes())
	}

	/// Whether the terminator is where it's supposed to be.
	pub fn is_terminated(&self) -> bool {
		self.pos <= self.cap && self.buf[self.pos] == 0
	}

	// --------------------------------------------------------------------------------------------
	// Writing

	/// Empties the buffer and goes back to column 0.
	pub fn reset(&mut self) {
		self.pos = 0;
		self.lpos = 0;
		self.terminate();
	}

	/// Appends one character if there's room for it. Returns how many characters were written
	/// (0 or 1).
	pub fn append_char(&mut self, c: char) -> usize {
		let mut tmp = [0u8; 4];
		let enc = c.encode_utf8(&mut tmp);

		let clen = if enc.len() <= self.remaining() {
			self.store(enc);
			self.lpos += 1;
			1
		} else {
			0
		};

		self.terminate();
		clen
	}

	/// Appends a newline. The column only goes back to 0 if the newline actually fit.
	pub fn append_newline(&mut self) -> usize {
		let clen = self.append_char('\n');

		if clen != 0 {
			self.lpos = 0;
		}

		clen
	}

	/// Appends formatted text, truncating it to whatever room is left.
	///
	/// Like `snprintf`, the return value is the length the text *would* have had, and the
	/// column advances by that much too. The write position only moves past what was stored,
	/// so don't assume the buffer grew by the returned amount when it's nearly full.
	pub fn append_formatted(&mut self, args: FmtArguments<'_>) -> usize {
		let mut sink = Bounded { cursor: &mut *self, logical: 0, full: false };
		// Bounded never fails; a Display impl that does just cuts the text short.
		let _ = fmt::write(&mut sink, args);
		let clen = sink.logical;

		self.lpos += clen;
		self.terminate();
		clen
	}

	/// Pads with spaces up to column `target`.
	///
	/// If the cursor is already at or past `target`, a single space is written instead, so that
	/// adjacent fields never run together. At the start of a line that case writes nothing. The
	/// number of spaces is clipped to the room left. Returns how many were written.
	pub fn pad_to_column(&mut self, target: usize) -> usize {
		let want = if target <= self.lpos {
			if self.lpos != 0 {
				1
			} else {
				return 0;
			}
		} else {
			target - self.lpos
		};

		let clen = want.min(self.remaining());

		for b in &mut self.buf[self.pos .. self.pos + clen] {
			*b = b' ';
		}

		self.pos += clen;
		self.lpos += clen;
		self.terminate();
		clen
	}

	/// Lowercases the last `n` bytes written, in place. `n` is clamped to what's been written
	/// since the last reset. Returns how many bytes were looked at.
	pub fn lowercase_last(&mut self, n: usize) -> usize {
		let n = n.min(self.pos);
		self.buf[self.pos - n .. self.pos].make_ascii_lowercase();
		n
	}

	// ---------------------------------------------------------------------------------------------
	// private

	fn terminate(&mut self) {
		self.buf[self.pos] = 0;
	}

	/// Copies as much of `s` as fits, stopping on a char boundary. Doesn't touch the column.
	fn store(&mut self, s: &str) -> usize {
		let mut take = s.len().min(self.remaining());

		while !s.is_char_boundary(take) {
			take -= 1;
		}

		self.buf[self.pos .. self.pos + take].copy_from_slice(&s.as_bytes()[.. take]);
		self.pos += take;
		take
	}
}

impl FmtWrite for TextCursor {
	/// Lets you `write!()` into a cursor. Never fails; overflow is truncated.
	fn write_str(&mut self, s: &str) -> fmt::Result {
		self.append_formatted(format_args!("{}", s));
		Ok(())
	}
}

// ------------------------------------------------------------------------------------------------
// Bounded
// ------------------------------------------------------------------------------------------------

/// Adapter used by `append_formatted` to count the whole output while only storing what fits.
/// Once one piece gets cut off, nothing after it is stored, so there are no gaps.
struct Bounded<'c> {
	cursor:  &'c mut TextCursor,
	logical: usize,
	full:    bool,
}

impl FmtWrite for Bounded<'_> {
	fn write_str(&mut self, s: &str) -> fmt::Result {
		self.logical += s.len();

		if !self.full && self.cursor.store(s) < s.len() {
			self.full = true;
		}

		Ok(())
	}
}
