//! A library for generating XCompose rules that type the styled letters of the Mathematical
//! Alphanumeric Symbols block, as well as Greek letters.
//!
//! Rules look like `<Multi_key> <f> <b> <A> : "𝐀"`: the `<f>` key, a key selecting the font,
//! then the letter being styled. Greek letters are selected with an extra `<g>` or `<G>` key.

pub mod emit;
pub mod generate;
pub mod names;
pub mod resolve;
pub mod sequence;
pub mod tables;

pub use generate::{GenerateOptions, Generator, Summary};
pub use names::{CharacterNames, UcdNames};
pub use resolve::{resolve, ResolutionRequest};
pub use tables::Tables;
