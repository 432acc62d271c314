//! bpx - Minimal in-memory binary file patcher
//!
//! This library provides shared functionality for the bpx CLI tool:
//! a byte store that loads a file into memory, hex-addressed reads and
//! writes against it, and whole-buffer persistence.

pub mod buffer;
pub mod editor;
pub mod hex;

pub use buffer::{BufferError, ByteStore, GrowthPolicy};
pub use editor::BinaryEditor;
pub use hex::{HexError, HexLike};
