//! The boundary with instruction decoders.
//!
//! A decoder's job is to look at the raw words of an [`Image`] and fill in each record's
//! shape, mnemonic, label and argument name. The listing code only ever reads what a decoder
//! left behind.

use enum_dispatch::enum_dispatch;

use crate::program::{ Image, Shape };

#[cfg(test)]
mod tests;

// ------------------------------------------------------------------------------------------------
// IDecoder
// ------------------------------------------------------------------------------------------------

#[enum_dispatch]
pub enum Decoder {
	DataDecoder,
}

/// Trait for decoders.
#[enum_dispatch(Decoder)]
pub trait IDecoder {
	/// Fill in the records of `image`, starting at `start`.
	///
	/// Implementations must not resize the image. Any record they mark as a two-word
	/// addressing-mode form must have a second slot after it, or the listing will read 0 there.
	fn decode_image(&self, image: &mut Image, start: usize);
}

// ------------------------------------------------------------------------------------------------
// DataDecoder
// ------------------------------------------------------------------------------------------------

/// A decoder that doesn't know any instructions: everything is a `.word`. The first word gets
/// the label `start` so there's something to anchor the listing.
#[derive(Debug, Default, Copy, Clone)]
pub struct DataDecoder;

impl IDecoder for DataDecoder {
	fn decode_image(&self, image: &mut Image, start: usize) {
		log::debug!("data decoder: 0x{:04x}..0x{:04x}", start, image.end());

		for rec in image.iter_mut().skip(start) {
			rec.shape = Shape::Data;
			rec.mnemonic = None;
		}

		if let Some(rec) = image.get_mut(start) {
			if rec.label.is_none() {
				rec.label = Some("start".into());
			}
		}
	}
}
