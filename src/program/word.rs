use std::fmt::{ Formatter, LowerHex, UpperHex, Result as FmtResult };

use parse_display::Display;

// ------------------------------------------------------------------------------------------------
// InstWord
// ------------------------------------------------------------------------------------------------

/// A raw 16-bit instruction (or data) word, with accessors for its bit-fields.
///
/// Bit 15 is the most significant bit. The layout of a normal instruction is:
///
/// ```text
///  15     10   9  8   6  5   3  2   0
/// [ opcode ] [D] [ A ] [ B ] [ C ]
/// ```
#[derive(Debug, Display, Default, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
#[display("0x{0:04x}")]
pub struct InstWord(pub u16);

impl InstWord {
	/// The raw value.
	#[inline] pub fn value(&self) -> u16 { self.0 }

	/// Bits 15..10: primary opcode.
	#[inline] pub fn opcode(&self) -> u8 {
		((self.0 >> 10) & 0b11_1111) as u8
	}

	/// Bit 9: the D flag. For addressing-mode operands it means "indirect"; for `imm` and
	/// `short_imm` it's the sign.
	#[inline] pub fn d(&self) -> bool {
		(self.0 & 0b10_0000_0000) != 0
	}

	/// Bits 8..6: register A.
	#[inline] pub fn a(&self) -> u8 {
		((self.0 >> 6) & 0b111) as u8
	}

	/// Bits 5..3: register B, the base register in addressing-mode operands.
	#[inline] pub fn b(&self) -> u8 {
		((self.0 >> 3) & 0b111) as u8
	}

	/// Bits 2..0: register C, the index register in addressing-mode operands.
	#[inline] pub fn c(&self) -> u8 {
		(self.0 & 0b111) as u8
	}

	/// Short immediate (T). Sign-magnitude: bits 5..0 are the magnitude, and it's negative
	/// when D is set. Range is -63..=63.
	#[inline] pub fn imm(&self) -> i16 {
		let mag = (self.0 & 0b11_1111) as i16;
		if self.d() { -mag } else { mag }
	}

	/// Shorter immediate (t). Sign-magnitude: bits 2..0 are the magnitude, and it's negative
	/// when D is set. Range is -7..=7.
	#[inline] pub fn short_imm(&self) -> i16 {
		let mag = (self.0 & 0b111) as i16;
		if self.d() { -mag } else { mag }
	}

	/// Bits 7..0: unsigned byte displacement (b).
	#[inline] pub fn byte(&self) -> u8 {
		(self.0 & 0xFF) as u8
	}
}

impl From<u16> for InstWord {
	fn from(v: u16) -> Self { Self(v) }
}

impl LowerHex for InstWord {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		LowerHex::fmt(&self.0, f)
	}
}

impl UpperHex for InstWord {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		UpperHex::fmt(&self.0, f)
	}
}
