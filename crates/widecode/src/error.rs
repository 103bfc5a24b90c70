use alloc::collections::TryReserveError;

use thiserror::Error;

/// Failure to obtain backing memory for an encoding buffer.
///
/// Raised by construction and by the growth path of an encode call. In the
/// growth case the buffer keeps its previous storage and capacity and stays
/// fully usable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AllocationError {
    /// The allocator could not provide the requested storage.
    #[error("failed to allocate {bytes} bytes of encode storage")]
    Exhausted {
        /// Requested backing size in bytes.
        bytes: usize,
        /// The allocator's report.
        source: TryReserveError,
    },
    /// The byte size for the requested character capacity does not fit in
    /// `usize`.
    #[error("storage size for {chars} wide characters overflows usize")]
    SizeOverflow {
        /// Requested capacity in wide characters.
        chars: usize,
    },
}

/// Failure of a single encode call.
///
/// Except for [`EncodeError::OutOfMemory`], an error leaves the buffer
/// contents and the conversion state unspecified; the caller must reset the
/// buffer before encoding an unrelated stream through it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Growing the backing storage failed. The buffer is unchanged and still
    /// valid at its prior capacity.
    #[error("encode buffer growth failed: {0}")]
    OutOfMemory(#[from] AllocationError),
    /// A code unit above U+10FFFF has no representation in any Unicode
    /// encoding form.
    #[error("code unit {0:#X} is outside the Unicode code space")]
    InvalidCodePoint(u32),
    /// A surrogate half arrived without its partner: a low half with no high
    /// half pending, or a pending high half followed by anything other than
    /// a low half.
    #[error("unpaired surrogate {0:#06X} in wide-character stream")]
    UnpairedSurrogate(u32),
}
