//! Listings for 16-bit word-addressed machine code.
//!
//! The pipeline is: [`load_image`] reads words into an [`Image`]; an [`IDecoder`] fills in
//! what each word means; [`write_listing`] turns the result into text.

pub mod config;
pub mod decode;
pub mod listing;
pub mod loader;
pub mod program;
pub mod text;

pub use config::*;
pub use decode::*;
pub use listing::*;
pub use loader::*;
pub use program::*;
pub use text::*;
