//! A resizable encoding buffer that converts streams of wide characters
//! (fixed-width `u32` code units) into UTF-8 bytes, carrying encoder state
//! across calls so a logically continuous stream can be fed in chunks.
//!
//! The single entry point is [`EncodingBuffer`]: it owns a growable byte
//! region sized for the worst-case expansion of the characters it has been
//! asked to hold, plus the [`EncodeState`] that remembers a surrogate half
//! left dangling at a chunk boundary.
//!
//! ```rust
//! use widecode::EncodingBuffer;
//!
//! let mut buf = EncodingBuffer::with_capacity(8)?;
//! let written = buf.encode(&[0x48, 0x69, 0x4E16])?;
//! assert_eq!(&buf.as_bytes()[..written], "Hi世".as_bytes());
//! # Ok::<(), widecode::EncodeError>(())
//! ```

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod buffer;
mod encoder;
mod error;

#[cfg(test)]
mod tests;

pub use buffer::EncodingBuffer;
pub use encoder::{EncodeState, WIDE_WIDTH, WideChar};
pub use error::{AllocationError, EncodeError};
