use bitflags::bitflags;
use parse_display::Display;

use crate::program::{ InstWord };

// ------------------------------------------------------------------------------------------------
// Shape
// ------------------------------------------------------------------------------------------------

/// What operands an instruction has, and so how it's printed.
#[derive(Debug, Display, PartialEq, Eq, Copy, Clone)]
pub enum Shape {
	/// Not an instruction, printed as `.word`.
	#[display("data")]
	Data,
	/// Just a mnemonic.
	#[display("none")]
	NoOperand,
	/// Register A.
	#[display("reg")]
	Reg,
	/// Register A and the short immediate.
	#[display("reg+imm")]
	RegImm,
	/// The short immediate alone. Can be a relative branch.
	#[display("imm")]
	Imm,
	/// The byte displacement.
	#[display("byte")]
	BranchDisp,
	/// Register A and the shorter immediate.
	#[display("reg+short")]
	RegShortImm,
	/// Register A and an addressing-mode operand.
	#[display("reg+norm")]
	RegAddrMode,
	/// An addressing-mode operand alone.
	#[display("norm")]
	AddrMode,
}

impl Default for Shape {
	fn default() -> Shape { Shape::Data }
}

impl Shape {
	/// Does this shape take an addressing-mode operand?
	pub fn has_addr_mode(&self) -> bool {
		matches!(self, Shape::RegAddrMode | Shape::AddrMode)
	}
}

// ------------------------------------------------------------------------------------------------
// RecordFlags
// ------------------------------------------------------------------------------------------------

bitflags! {
	/// Extra facts the decoder found out about a record.
	#[derive(Default)]
	pub struct RecordFlags: u8 {
		/// The immediate is an offset from the next address.
		const RELATIVE = 0b0000_0001;
	}
}

// ------------------------------------------------------------------------------------------------
// Record
// ------------------------------------------------------------------------------------------------

/// One address slot of an [`Image`](crate::program::Image): the raw word plus whatever the
/// decoder figured out about it.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct Record {
	/// The raw word.
	pub word:     InstWord,
	/// How to print it.
	pub shape:    Shape,
	/// Name of a symbol at this address, if any.
	pub label:    Option<String>,
	/// Instruction mnemonic. Meaningless for `Shape::Data`.
	pub mnemonic: Option<String>,
	/// Symbolic name for the operand. When present it's printed instead of the number.
	pub argname:  Option<String>,
	pub flags:    RecordFlags,
}

impl Record {
	/// A bare data record.
	pub fn data(value: u16) -> Self {
		Self { word: InstWord(value), ..Self::default() }
	}

	/// An instruction record with the given shape and mnemonic.
	pub fn inst(value: u16, shape: Shape, mnemonic: &str) -> Self {
		Self {
			word:     InstWord(value),
			shape,
			mnemonic: Some(mnemonic.into()),
			..Self::default()
		}
	}

	/// Builder-ish: set the label.
	pub fn with_label(mut self, label: &str) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Builder-ish: set the argument name.
	pub fn with_argname(mut self, argname: &str) -> Self {
		self.argname = Some(argname.into());
		self
	}

	/// Builder-ish: add flags.
	pub fn with_flags(mut self, flags: RecordFlags) -> Self {
		self.flags |= flags;
		self
	}

	#[inline] pub fn value(&self) -> u16 {
		self.word.value()
	}

	#[inline] pub fn is_relative(&self) -> bool {
		self.flags.contains(RecordFlags::RELATIVE)
	}

	/// How many slots this takes up. Addressing-mode operands with no index register carry
	/// their address (or displacement) in the next word.
	pub fn size(&self) -> usize {
		if self.shape.has_addr_mode() && self.word.c() == 0 {
			2
		} else {
			1
		}
	}
}
