//! Getting an [`Image`] out of a file.
//!
//! Files are either EMELF containers or headerless dumps of big-endian words. The container is
//! tried first; if it doesn't parse, the stream is rewound and read raw.

use std::io::{ Read, Seek, SeekFrom };

use enum_dispatch::enum_dispatch;

use crate::program::{ Image };

// ------------------------------------------------------------------------------------------------
// Sub-modules
// ------------------------------------------------------------------------------------------------

mod emelf;
mod error;
mod raw;
#[cfg(test)]
mod tests;

pub use emelf::*;
pub use error::*;
pub use raw::*;

/// Most words a raw image can have.
pub const MAX_IMAGE: usize = 0x10000;

// ------------------------------------------------------------------------------------------------
// ReadSeek
// ------------------------------------------------------------------------------------------------

/// Anything loaders can read from. Rewinding is needed for the raw fallback.
pub trait ReadSeek: Read + Seek {}

impl<T: Read + Seek + ?Sized> ReadSeek for T {}

// ------------------------------------------------------------------------------------------------
// ILoader
// ------------------------------------------------------------------------------------------------

#[enum_dispatch]
pub enum Loader {
	EmelfLoader,
	RawLoader,
}

/// Trait for image formats.
#[enum_dispatch(Loader)]
pub trait ILoader {
	/// Short name for messages.
	fn name(&self) -> &'static str;

	/// Reads the image words, in host order, from the current position of `stream`.
	fn load_words(&self, stream: &mut dyn ReadSeek) -> LoadResult<Vec<u16>>;
}

// ------------------------------------------------------------------------------------------------
// Loading
// ------------------------------------------------------------------------------------------------

/// Reads words as a container if possible, otherwise rewinds and reads them raw.
pub fn load_words(stream: &mut dyn ReadSeek) -> LoadResult<Vec<u16>> {
	EmelfLoader.load_words(stream).or_else(|err| {
		log::debug!("not loading as {} ({}), trying {}", EmelfLoader.name(), err, RawLoader.name());
		stream.seek(SeekFrom::Start(0))?;
		RawLoader.load_words(stream)
	})
}

/// Loads an image from `stream`, placing the first word at address `start`. Tries the
/// container format first and falls back to raw words.
///
/// The image's `end()` is `start` plus the number of words read.
pub fn load_image<R: Read + Seek>(stream: &mut R, start: usize) -> LoadResult<Image> {
	let words = load_words(stream)?;
	place_words(start, &words)
}

/// Like [`load_image`], but only tries the one format.
pub fn load_image_as<R: Read + Seek>(loader: &Loader, stream: &mut R, start: usize)
-> LoadResult<Image> {
	let words = loader.load_words(stream)?;
	place_words(start, &words)
}

fn place_words(start: usize, words: &[u16]) -> LoadResult<Image> {
	let image = Image::from_words(start, words)
		.ok_or_else(|| LoadError::out_of_memory(start.saturating_add(words.len())))?;

	log::debug!("loaded {} words at 0x{:04x}..0x{:04x}", words.len(), start, image.end());
	Ok(image)
}
