use super::*;

use crate::program::{ Record };

#[test]
fn data_decoder() {
	let mut img = Image::from_words(2, &[0x4040, 0x0100]).unwrap();
	img[3] = Record::inst(0x0100, Shape::Reg, "RPC");

	let dec: Decoder = DataDecoder.into();
	dec.decode_image(&mut img, 2);

	assert_eq!(img.len(), 4);
	assert_eq!(img[0].label, None);
	assert_eq!(img[2].label.as_deref(), Some("start"));
	assert_eq!(img[3].shape, Shape::Data);
	assert_eq!(img[3].mnemonic, None);
	assert_eq!(img[3].value(), 0x0100);
}

#[test]
fn data_decoder_keeps_existing_label() {
	let mut img = Image::from_words(0, &[1]).unwrap();
	img[0].label = Some("entry".into());
	DataDecoder.decode_image(&mut img, 0);
	assert_eq!(img[0].label.as_deref(), Some("entry"));

	// past the end is fine.
	let mut img = Image::from_words(0, &[]).unwrap();
	DataDecoder.decode_image(&mut img, 0);
	assert_eq!(img.len(), 0);
}
