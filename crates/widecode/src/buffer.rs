//! The growable encode buffer.
//!
//! [`EncodingBuffer`] owns a contiguous byte region sized
//! `(capacity_chars + 1) * WIDE_WIDTH` and the [`EncodeState`] for the
//! stream flowing through it. Growth is lazy: an encode call that brings
//! more units than the buffer has ever held reallocates before converting.
//! Capacity never shrinks.

use alloc::vec::Vec;
use core::fmt;

use bstr::BStr;

use crate::{
    encoder::{self, EncodeState, WIDE_WIDTH, WideChar},
    error::{AllocationError, EncodeError},
};

/// A resizable buffer that encodes wide-character chunks into UTF-8,
/// preserving conversion state from one call to the next.
pub struct EncodingBuffer {
    storage: Vec<u8>,
    capacity_chars: usize,
    state: EncodeState,
}

impl EncodingBuffer {
    /// Creates a buffer guaranteeing room for a worst-case encode of
    /// `capacity_chars` wide characters.
    ///
    /// # Errors
    ///
    /// [`AllocationError`] if the backing storage cannot be allocated.
    pub fn with_capacity(capacity_chars: usize) -> Result<Self, AllocationError> {
        let storage = alloc_zeroed(byte_size(capacity_chars)?)?;
        Ok(Self {
            storage,
            capacity_chars,
            state: EncodeState::default(),
        })
    }

    /// Returns the encoder to its initial, stateless condition: the first
    /// [`WIDE_WIDTH`] bytes of storage are zeroed and any held-over
    /// surrogate half is discarded.
    ///
    /// Capacity is unchanged. Call this before reusing the buffer for an
    /// unrelated stream, and after any failed encode.
    pub fn reset(&mut self) {
        self.storage[..WIDE_WIDTH].fill(0);
        self.state = EncodeState::default();
    }

    /// Grows the backing storage to fit a worst-case encode of `chars` wide
    /// characters. A request at or below the current capacity is a no-op.
    ///
    /// Growth replaces the allocation only after the new one succeeds: on
    /// error the existing storage, contents, and capacity are untouched.
    /// The conversion state is never affected.
    ///
    /// # Errors
    ///
    /// [`AllocationError`] if the new storage cannot be allocated or its
    /// size overflows `usize`.
    pub fn reserve(&mut self, chars: usize) -> Result<(), AllocationError> {
        if chars <= self.capacity_chars {
            return Ok(());
        }
        let mut next = alloc_zeroed(byte_size(chars)?)?;
        next[..self.storage.len()].copy_from_slice(&self.storage);
        self.storage = next;
        self.capacity_chars = chars;
        Ok(())
    }

    /// Encodes `wide` into the buffer from offset zero, continuing the
    /// stream the conversion state describes, and returns the number of
    /// bytes written. Zero is a valid result: an empty chunk, or a chunk
    /// ending on the high half of a surrogate pair.
    ///
    /// The call is atomic from the caller's perspective: every unit is
    /// converted or the whole call reports an error.
    ///
    /// # Errors
    ///
    /// - [`EncodeError::OutOfMemory`] if growth was needed and failed; the
    ///   buffer is still valid at its previous capacity.
    /// - [`EncodeError::InvalidCodePoint`] / [`EncodeError::UnpairedSurrogate`]
    ///   if a unit cannot be represented. Storage contents and conversion
    ///   state are then unspecified until [`EncodingBuffer::reset`].
    pub fn encode(&mut self, wide: &[WideChar]) -> Result<usize, EncodeError> {
        self.reserve(wide.len())?;
        let mut written = 0;
        for &unit in wide {
            written += encoder::encode_unit(&mut self.state, unit, &mut self.storage[written..])?;
        }
        Ok(written)
    }

    /// Current backing storage size in bytes:
    /// `(capacity_chars + 1) * WIDE_WIDTH`.
    pub fn buffer_size(&self) -> usize {
        self.storage.len()
    }

    /// The number of wide characters a worst-case encode is guaranteed to
    /// fit without growing.
    pub fn capacity_chars(&self) -> usize {
        self.capacity_chars
    }

    /// Whether a high surrogate from a previous chunk is waiting for its
    /// partner. A cleanly terminated stream leaves this `false`.
    pub fn is_pending(&self) -> bool {
        self.state.is_pending()
    }

    /// The full backing storage. Bytes `[0, written)` from the last
    /// successful [`EncodingBuffer::encode`] are the encoded output; bytes
    /// beyond that are unspecified.
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage
    }

    /// Mutable view of the backing storage.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.storage
    }
}

impl fmt::Debug for EncodingBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodingBuffer")
            .field("capacity_chars", &self.capacity_chars)
            .field("state", &self.state)
            .field("storage", &BStr::new(&self.storage))
            .finish()
    }
}

fn byte_size(chars: usize) -> Result<usize, AllocationError> {
    chars
        .checked_add(1)
        .and_then(|n| n.checked_mul(WIDE_WIDTH))
        .ok_or(AllocationError::SizeOverflow { chars })
}

fn alloc_zeroed(bytes: usize) -> Result<Vec<u8>, AllocationError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(bytes)
        .map_err(|source| AllocationError::Exhausted { bytes, source })?;
    buf.resize(bytes, 0);
    Ok(buf)
}
