use std::io::{ self, Cursor, Read, Seek, SeekFrom };

use super::*;

fn be_bytes(words: &[u16]) -> Vec<u8> {
	words.iter().flat_map(|w| w.to_be_bytes().to_vec()).collect()
}

#[test]
fn header_parse() {
	let e = Emelf::new(0x0040, vec![1, 2, 3]);
	let bytes = e.to_bytes();
	assert_eq!(&bytes[0 .. 5], b"EMELF");
	assert_eq!(bytes.len(), HEADER_SIZE + 6);

	let mut hdr = [0u8; HEADER_SIZE];
	hdr.copy_from_slice(&bytes[.. HEADER_SIZE]);
	assert_eq!(EmelfHeader::parse(&hdr), Ok(e.header));

	hdr[0] = b'X';
	assert_eq!(EmelfHeader::parse(&hdr), Err(ContainerError::BadMagic));

	hdr[0] = b'E';
	hdr[5] = 7;
	assert_eq!(EmelfHeader::parse(&hdr), Err(ContainerError::BadVersion { version: 7 }));
}

#[test]
fn container_is_strict() {
	let mut bytes = Emelf::new(0, vec![0x1234, 0x5678]).to_bytes();
	bytes.pop();

	let err = EmelfLoader.load_words(&mut Cursor::new(bytes)).unwrap_err();
	assert_eq!(err, LoadError::container(ContainerError::Truncated { expected: 4, got: 3 }));
	assert!(err.is_container());

	let err = EmelfLoader.load_words(&mut Cursor::new(b"EMEL".to_vec())).unwrap_err();
	assert_eq!(err, ContainerError::Truncated { expected: HEADER_SIZE, got: 4 }.into());
}

#[test]
fn container_words_copied_verbatim() {
	let words = vec![0xF000, 0x0001, 0x8421, 0xBEEF];
	let bytes = Emelf::new(0x0010, words.clone()).to_bytes();

	let img = load_image(&mut Cursor::new(bytes), 0x10).unwrap();
	assert_eq!(img.len(), 0x10 + words.len());
	assert_eq!(img.start(), 0x10);

	for (i, w) in words.iter().enumerate() {
		assert_eq!(img[0x10 + i].value(), *w);
	}

	assert_eq!(img[0].value(), 0);
}

#[test]
fn container_ignores_trailing_bytes() {
	let mut bytes = Emelf::new(0, vec![0x0102]).to_bytes();
	bytes.extend_from_slice(&[0xAA, 0xBB, 0xCC, 0xDD]);

	let img = load_image(&mut Cursor::new(bytes), 0).unwrap();
	assert_eq!(img.len(), 1);
	assert_eq!(img[0].value(), 0x0102);
}

#[test]
fn raw_fallback() {
	let words = [0x4040, 0x0100, 0xE401];
	let img = load_image(&mut Cursor::new(be_bytes(&words)), 5).unwrap();

	assert_eq!(img.end(), 5 + words.len());
	assert_eq!(img.num_words(), 3);
	assert_eq!(img[5].value(), 0x4040);
	assert_eq!(img[6].value(), 0x0100);
	assert_eq!(img[7].value(), 0xE401);
}

#[test]
fn raw_fallback_rewinds() {
	// starts like a container but is cut off in the header; must be read from the top.
	let mut bytes = b"EMELF".to_vec();
	bytes.push(0x01);
	let img = load_image(&mut Cursor::new(bytes), 0).unwrap();

	assert_eq!(img.len(), 3);
	assert_eq!(img[0].value(), u16::from_be_bytes([b'E', b'M']));
	assert_eq!(img[2].value(), u16::from_be_bytes([b'F', 0x01]));
}

#[test]
fn raw_odd_byte_and_empty() {
	let img = load_image(&mut Cursor::new(vec![0x12, 0x34, 0x56]), 0).unwrap();
	assert_eq!(img.len(), 1);
	assert_eq!(img[0].value(), 0x1234);

	let img = load_image(&mut Cursor::new(Vec::new()), 4).unwrap();
	assert_eq!(img.len(), 4);
	assert_eq!(img.num_words(), 0);
}

#[test]
fn raw_is_capped() {
	let bytes = vec![0u8; (MAX_IMAGE + 10) * 2];
	let words = RawLoader.load_words(&mut Cursor::new(bytes)).unwrap();
	assert_eq!(words.len(), MAX_IMAGE);
}

#[test]
fn forced_format() {
	let bytes = Emelf::new(0, vec![0x1111]).to_bytes();

	// as raw, the header is just more words.
	let loader: Loader = RawLoader.into();
	let img = load_image_as(&loader, &mut Cursor::new(bytes.clone()), 0).unwrap();
	assert_eq!(img.len(), (HEADER_SIZE + 2) / 2);

	let loader: Loader = EmelfLoader.into();
	let img = load_image_as(&loader, &mut Cursor::new(bytes), 0).unwrap();
	assert_eq!(img.len(), 1);

	let err = load_image_as(&loader, &mut Cursor::new(vec![0u8; 20]), 0).unwrap_err();
	assert_eq!(err, ContainerError::BadMagic.into());
}

#[test]
fn loads_from_current_position_then_rewinds_to_start() {
	let mut cur = Cursor::new(be_bytes(&[0xAAAA, 0xBBBB]));
	cur.seek(SeekFrom::Start(2)).unwrap();
	let words = load_words(&mut cur).unwrap();
	assert_eq!(words, vec![0xAAAA, 0xBBBB]);
}

/// A stream that gives out its first `limit` bytes and then fails every read.
struct FailingStream {
	inner: Cursor<Vec<u8>>,
	limit: u64,
}

impl Read for FailingStream {
	fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
		let left = self.limit.saturating_sub(self.inner.position()) as usize;

		if left == 0 {
			Err(io::Error::new(io::ErrorKind::Other, "device gone"))
		} else {
			let n = left.min(buf.len());
			self.inner.read(&mut buf[.. n])
		}
	}
}

impl Seek for FailingStream {
	fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
		self.inner.seek(pos)
	}
}

#[test]
fn read_failure_is_fatal() {
	// fails inside the header, then again partway through the raw words after the rewind.
	let mut stream = FailingStream { inner: Cursor::new(vec![0u8; 20]), limit: 4 };
	let err = load_image(&mut stream, 0).unwrap_err();

	assert_eq!(err.kind, LoadErrorKind::Io { msg: "device gone".into() });
	assert!(!err.is_container());
	assert_eq!(err.to_string(), "load error: I/O error: device gone");

	// a forced container load reports the I/O error too, not a truncation.
	let mut stream = FailingStream { inner: Cursor::new(vec![0u8; 20]), limit: 4 };
	let err = load_image_as(&EmelfLoader.into(), &mut stream, 0).unwrap_err();
	assert!(matches!(err.kind, LoadErrorKind::Io { .. }));
}

#[test]
fn error_display() {
	let err = LoadError::container(ContainerError::BadVersion { version: 3 });
	assert_eq!(err.to_string(), "load error: invalid container: unsupported version 3");
	assert_eq!(LoadError::out_of_memory(9).to_string(),
		"load error: out of memory allocating 9 records");
}
