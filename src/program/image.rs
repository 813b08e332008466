use std::ops::{ Index, IndexMut };
use std::slice::{ IterMut };

use crate::program::{ Record };

// ------------------------------------------------------------------------------------------------
// Image
// ------------------------------------------------------------------------------------------------

/// An address-indexed sequence of [`Record`]s. Slot `i` is the word at address `i`.
///
/// Loaded images usually don't start at 0; slots below the start address exist but are
/// just zeroed data.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct Image {
	records: Vec<Record>,
	start:   usize,
}

#[allow(clippy::len_without_is_empty)]
impl Image {
	/// Ctor. Fails (returning `None`) if `start + words.len()` slots can't be allocated.
	pub fn from_words(start: usize, words: &[u16]) -> Option<Self> {
		let len = start.checked_add(words.len())?;
		let mut records = Vec::new();
		records.try_reserve_exact(len).ok()?;
		records.resize_with(len, Record::default);

		for (rec, &w) in records[start ..].iter_mut().zip(words) {
			*rec = Record::data(w);
		}

		Some(Self { records, start })
	}

	/// Ctor from already-built records. Fails (returning `None`) if `start` is past the end.
	pub fn from_records(start: usize, records: Vec<Record>) -> Option<Self> {
		if start <= records.len() {
			Some(Self { records, start })
		} else {
			None
		}
	}

	/// First populated address.
	#[inline] pub fn start(&self) -> usize { self.start }

	/// Number of slots. Also one past the highest populated address.
	#[inline] pub fn len(&self) -> usize { self.records.len() }

	/// Same as `len`, but reads better when you mean an address.
	#[inline] pub fn end(&self) -> usize { self.records.len() }

	/// How many words were actually loaded.
	#[inline] pub fn num_words(&self) -> usize { self.records.len() - self.start }

	#[inline] pub fn get(&self, addr: usize) -> Option<&Record> {
		self.records.get(addr)
	}

	#[inline] pub fn get_mut(&mut self, addr: usize) -> Option<&mut Record> {
		self.records.get_mut(addr)
	}

	/// The raw value at `addr`, or 0 if that's past the end.
	pub fn value_at(&self, addr: usize) -> u16 {
		self.get(addr).map(Record::value).unwrap_or(0)
	}

	pub fn iter_mut(&mut self) -> IterMut<'_, Record> {
		self.records.iter_mut()
	}
}

impl Index<usize> for Image {
	type Output = Record;
	fn index(&self, addr: usize) -> &Self::Output {
		&self.records[addr]
	}
}

impl IndexMut<usize> for Image {
	fn index_mut(&mut self, addr: usize) -> &mut Self::Output {
		&mut self.records[addr]
	}
}
