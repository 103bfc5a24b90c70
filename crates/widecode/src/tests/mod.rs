mod encode_bad;

use alloc::vec::Vec;

/// Recode a string into wide code units, one scalar per unit.
pub(crate) fn units(s: &str) -> Vec<u32> {
    s.chars().map(|c| c as u32).collect()
}
