//! Stateful conversion of wide code units into UTF-8.
//!
//! One code unit goes in per step; zero to four bytes come out. Most units
//! are Unicode scalar values and encode directly. Streams recoded from a
//! UTF-16 source may instead carry surrogate halves as individual units, and
//! a chunk boundary can fall between the two halves of a pair — the high
//! half is then parked in [`EncodeState`] until the low half arrives in a
//! later call.

use crate::error::EncodeError;

/// A fixed-width wide code unit: either a Unicode scalar value or one half
/// of a surrogate pair.
pub type WideChar = u32;

/// Width in bytes of a wide code unit.
///
/// Also the worst-case UTF-8 expansion of a single unit, which is what makes
/// the buffer's `(capacity + 1) * WIDE_WIDTH` sizing sufficient.
pub const WIDE_WIDTH: usize = size_of::<WideChar>();

const HIGH_SURROGATES: core::ops::RangeInclusive<u32> = 0xD800..=0xDBFF;
const LOW_SURROGATES: core::ops::RangeInclusive<u32> = 0xDC00..=0xDFFF;

/// Conversion state carried between encode calls.
///
/// `None` pending ➜ the stream is at a scalar boundary (the initial state).
/// `Some` pending ➜ the previous unit was a high surrogate whose partner has
/// not arrived yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeState {
    pending_high: Option<u32>,
}

impl EncodeState {
    /// Whether a high surrogate is held over from an earlier unit.
    pub fn is_pending(&self) -> bool {
        self.pending_high.is_some()
    }
}

/// Feed one wide code unit into the converter, writing any completed scalar
/// into `dest` and returning the number of bytes written.
///
/// `dest` must hold at least [`WIDE_WIDTH`] bytes; the buffer's sizing
/// invariant guarantees this at every call site.
pub(crate) fn encode_unit(
    state: &mut EncodeState,
    unit: WideChar,
    dest: &mut [u8],
) -> Result<usize, EncodeError> {
    if let Some(high) = state.pending_high.take() {
        if !LOW_SURROGATES.contains(&unit) {
            return Err(EncodeError::UnpairedSurrogate(high));
        }
        let scalar = 0x1_0000 + ((high - 0xD800) << 10) + (unit - 0xDC00);
        // Supplementary scalars are always four bytes.
        dest[0] = 0xF0 | (scalar >> 18) as u8;
        dest[1] = 0x80 | ((scalar >> 12) & 0x3F) as u8;
        dest[2] = 0x80 | ((scalar >> 6) & 0x3F) as u8;
        dest[3] = 0x80 | (scalar & 0x3F) as u8;
        return Ok(4);
    }

    match char::from_u32(unit) {
        Some(c) => Ok(c.encode_utf8(dest).len()),
        None if HIGH_SURROGATES.contains(&unit) => {
            state.pending_high = Some(unit);
            Ok(0)
        }
        None if LOW_SURROGATES.contains(&unit) => Err(EncodeError::UnpairedSurrogate(unit)),
        None => Err(EncodeError::InvalidCodePoint(unit)),
    }
}
