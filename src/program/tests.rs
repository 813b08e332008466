use super::*;

#[test]
fn word_fields() {
	// opcode 0b010011, D=1, A=5, B=2, C=7
	let w = InstWord(0b010011_1_101_010_111);
	assert_eq!(w.opcode(), 0b010011);
	assert!(w.d());
	assert_eq!(w.a(), 5);
	assert_eq!(w.b(), 2);
	assert_eq!(w.c(), 7);
	assert_eq!(w.byte(), 0b0101_0111);
	assert_eq!(w.to_string(), "0x4f57");
}

#[test]
fn immediates_are_sign_magnitude() {
	assert_eq!(InstWord(0b000000_0_000_000_101).imm(),  5);
	assert_eq!(InstWord(0b000000_1_000_000_101).imm(), -5);
	assert_eq!(InstWord(0b000000_0_000_111_111).imm(),  63);
	assert_eq!(InstWord(0b000000_1_000_111_111).imm(), -63);

	assert_eq!(InstWord(0b000000_0_000_111_011).short_imm(),  3);
	assert_eq!(InstWord(0b000000_1_000_111_011).short_imm(), -3);
}

#[test]
fn record_size() {
	// C = 0: address comes from the next word.
	assert_eq!(Record::inst(0x4000, Shape::AddrMode, "LW").size(), 2);
	assert_eq!(Record::inst(0x4008, Shape::RegAddrMode, "LW").size(), 2);
	// C != 0: index register, one word.
	assert_eq!(Record::inst(0x4001, Shape::RegAddrMode, "LW").size(), 1);
	assert_eq!(Record::inst(0x4000, Shape::Reg, "LW").size(), 1);
	assert_eq!(Record::data(0).size(), 1);
}

#[test]
fn record_defaults() {
	let r = Record::default();
	assert_eq!(r.shape, Shape::Data);
	assert_eq!(r.value(), 0);
	assert!(r.flags.is_empty());
	assert!(!r.is_relative());

	let r = Record::inst(0, Shape::Imm, "UJ").with_flags(RecordFlags::RELATIVE);
	assert!(r.is_relative());
}

#[test]
fn image_layout() {
	let img = Image::from_words(4, &[0x1111, 0x2222, 0x3333]).unwrap();
	assert_eq!(img.start(), 4);
	assert_eq!(img.len(), 7);
	assert_eq!(img.num_words(), 3);

	for addr in 0 .. 4 {
		assert_eq!(img[addr], Record::default());
	}

	assert_eq!(img[4].value(), 0x1111);
	assert_eq!(img[6].value(), 0x3333);
	assert_eq!(img.value_at(7), 0);
}

#[test]
fn image_from_records() {
	let img = Image::from_records(2, vec![Record::default(); 2]).unwrap();
	assert_eq!(img.start(), 2);
	assert_eq!(img.num_words(), 0);

	assert_eq!(Image::from_records(3, vec![Record::default(); 2]), None);
}
