//! Conversion of unsigned 64-bit integers between base 10 and any base from 2
//! up to the size of the `0-9a-zA-Z` alphabet.
//!
//! Encoding goes through [`digits::from_base10`] then [`alphabet::to_string`];
//! decoding goes through [`alphabet::from_string`] then [`digits::to_base10`].

pub mod alphabet;
pub mod digits;
pub mod error;

pub use error::{ConvError, ConvResult};
