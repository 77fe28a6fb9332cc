//! Low-level hex scanning shared by the lenient and strict parsers.

use regex::Regex;
use std::sync::LazyLock;

/// Any character in a Unicode Symbol category (`Sm`, `Sc`, `Sk`, `So`).
pub(crate) static SYMBOL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\p{S}").unwrap());

/// A successfully scanned hex integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Scanned {
    pub value: u32,
    /// Number of hex digits read, leading zeros included.
    pub digits: usize,
}

/// Scan `input` as an unsigned hex integer.
///
/// Every `#` and every symbol character is dropped first, and an optional
/// `0x` prefix is accepted. Whatever remains must be one or more hex digits.
/// Values too wide for a `u32` saturate at `u32::MAX`.
pub(super) fn scan_hex(input: &str) -> Option<Scanned> {
    let no_hash = input.replace('#', "");
    let cleaned = SYMBOL_RE.replace_all(&no_hash, "");
    let digits = cleaned
        .strip_prefix("0x")
        .or_else(|| cleaned.strip_prefix("0X"))
        .unwrap_or(&cleaned);

    if digits.is_empty() {
        return None;
    }

    let mut value: u32 = 0;
    for c in digits.chars() {
        let d = c.to_digit(16)?;
        value = value
            .checked_mul(16)
            .and_then(|v| v.checked_add(d))
            .unwrap_or(u32::MAX);
    }

    Some(Scanned {
        value,
        digits: digits.len(),
    })
}
