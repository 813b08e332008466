use std::io::{ Read };

use crate::loader::{ ILoader, ReadSeek, LoadResult, MAX_IMAGE };

// ------------------------------------------------------------------------------------------------
// RawLoader
// ------------------------------------------------------------------------------------------------

/// No header, just big-endian words. Anything past `MAX_IMAGE` words is ignored, and so is an
/// odd byte at the end.
pub struct RawLoader;

impl ILoader for RawLoader {
	fn name(&self) -> &'static str {
		"raw"
	}

	fn load_words(&self, stream: &mut dyn ReadSeek) -> LoadResult<Vec<u16>> {
		let mut data = Vec::new();
		(&mut *stream).take((MAX_IMAGE * 2) as u64).read_to_end(&mut data)?;

		if data.len() % 2 != 0 {
			log::warn!("raw image has an odd number of bytes, ignoring the last one");
		}

		let words: Vec<u16> = data.chunks_exact(2)
			.map(|w| u16::from_be_bytes([w[0], w[1]]))
			.collect();

		log::debug!("raw: {} words", words.len());
		Ok(words)
	}
}
