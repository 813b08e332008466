//! The EMELF object container: a small header followed by the image words.
//!
//! ```text
//! offset  size  field
//!      0     5  magic, "EMELF"
//!      5     1  version, must be 1
//!      6     2  flags (reserved)
//!      8     2  entry address
//!     10     2  image size in words
//!     12   2*n  image words
//! ```
//!
//! Everything is big-endian.

use std::io::{ Read };

use crate::loader::{ ILoader, ReadSeek, ContainerError, LoadResult };

pub const MAGIC: &[u8; 5] = b"EMELF";
pub const VERSION: u8 = 1;
pub const HEADER_SIZE: usize = 12;

// ------------------------------------------------------------------------------------------------
// EmelfHeader
// ------------------------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct EmelfHeader {
	pub version:    u8,
	pub flags:      u16,
	pub entry:      u16,
	pub image_size: usize,
}

impl EmelfHeader {
	pub fn parse(hdr: &[u8; HEADER_SIZE]) -> Result<Self, ContainerError> {
		if &hdr[0 .. 5] != MAGIC {
			return Err(ContainerError::BadMagic);
		}

		let version = hdr[5];

		if version != VERSION {
			return Err(ContainerError::BadVersion { version });
		}

		let flags      = u16::from_be_bytes([hdr[6],  hdr[7]]);
		let entry      = u16::from_be_bytes([hdr[8],  hdr[9]]);
		// 16 bits, so never more than MAX_IMAGE.
		let image_size = u16::from_be_bytes([hdr[10], hdr[11]]) as usize;

		Ok(Self { version, flags, entry, image_size })
	}

	/// Inverse of `parse`.
	pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
		let mut ret = [0u8; HEADER_SIZE];
		ret[0 .. 5].copy_from_slice(MAGIC);
		ret[5] = self.version;
		ret[6 .. 8].copy_from_slice(&self.flags.to_be_bytes());
		ret[8 .. 10].copy_from_slice(&self.entry.to_be_bytes());
		ret[10 .. 12].copy_from_slice(&(self.image_size as u16).to_be_bytes());
		ret
	}
}

// ------------------------------------------------------------------------------------------------
// Emelf
// ------------------------------------------------------------------------------------------------

/// A loaded container.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Emelf {
	pub header: EmelfHeader,
	pub image:  Vec<u16>,
}

impl Emelf {
	/// A version-1 container around `image`, which can't be longer than `0xFFFF` words.
	pub fn new(entry: u16, image: Vec<u16>) -> Self {
		assert!(image.len() <= u16::MAX as usize, "image too large for an emelf container");
		let header = EmelfHeader { version: VERSION, flags: 0, entry, image_size: image.len() };
		Self { header, image }
	}

	/// Strictly parses a container from `stream`. Anything off is an error.
	pub fn load(stream: &mut dyn ReadSeek) -> LoadResult<Self> {
		let data = read_up_to(stream, HEADER_SIZE)?;
		let mut hdr = [0u8; HEADER_SIZE];
		hdr.copy_from_slice(&data);
		let header = EmelfHeader::parse(&hdr)?;

		let data = read_up_to(stream, header.image_size * 2)?;
		let image = data.chunks_exact(2)
			.map(|w| u16::from_be_bytes([w[0], w[1]]))
			.collect();

		Ok(Self { header, image })
	}

	pub fn to_bytes(&self) -> Vec<u8> {
		let mut ret = Vec::with_capacity(HEADER_SIZE + self.image.len() * 2);
		ret.extend_from_slice(&self.header.to_bytes());

		for w in &self.image {
			ret.extend_from_slice(&w.to_be_bytes());
		}

		ret
	}
}

/// Reads exactly `len` bytes, or says how many it got.
fn read_up_to(stream: &mut dyn ReadSeek, len: usize) -> LoadResult<Vec<u8>> {
	let mut data = Vec::with_capacity(len);
	(&mut *stream).take(len as u64).read_to_end(&mut data)?;

	if data.len() < len {
		Err(ContainerError::Truncated { expected: len, got: data.len() }.into())
	} else {
		Ok(data)
	}
}

// ------------------------------------------------------------------------------------------------
// EmelfLoader
// ------------------------------------------------------------------------------------------------

pub struct EmelfLoader;

impl ILoader for EmelfLoader {
	fn name(&self) -> &'static str {
		"emelf"
	}

	fn load_words(&self, stream: &mut dyn ReadSeek) -> LoadResult<Vec<u16>> {
		let e = Emelf::load(stream)?;
		log::debug!("emelf: {} words, entry 0x{:04x}", e.header.image_size, e.header.entry);
		Ok(e.image)
	}
}
