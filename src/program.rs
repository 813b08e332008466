//! The data the listing is made from: raw words, the records describing them, and the image
//! holding all the records.

// ------------------------------------------------------------------------------------------------
// Sub-modules
// ------------------------------------------------------------------------------------------------

mod image;
mod record;
mod word;
#[cfg(test)]
mod tests;

pub use image::*;
pub use record::*;
pub use word::*;
