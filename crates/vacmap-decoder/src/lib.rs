#![warn(clippy::pedantic)]

pub mod classifier;
pub mod decoder;
pub mod error;
pub mod grid;
pub mod path;
pub mod rooms;

mod decompression;

pub use classifier::Classification;
pub use decoder::{decode_base64, decode_bytes, peel_compression};
pub use error::DecodeError;
pub use grid::GridBitmap;
