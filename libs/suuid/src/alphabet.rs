//! The fixed character set used for random fill.

/// Characters drawn for the random portion of an identifier.
///
/// 63 distinct printable characters: lower and upper Latin letters, digits,
/// and underscore, in keyboard order.
pub const ALPHABET: &[u8; 63] = b"qwertyuiopasdfghjklzxcvbnmQWERTYUIOPASDFGHJKLZXCVBNM0123456789_";

/// Maps a random byte onto the alphabet with `byte mod 63`.
///
/// 256 is not a multiple of 63, so the first four characters (`q`, `w`, `e`,
/// `r`) come up slightly more often. Existing identifiers were produced with
/// this mapping, so it is kept as is.
#[inline]
pub fn from_byte(byte: u8) -> char {
    ALPHABET[byte as usize % ALPHABET.len()] as char
}

/// Maps a uniform sample in `[0, 1)` onto the alphabet with
/// `floor(u * (63 - 1))`.
///
/// The range stops one short of the alphabet, so `_` is never produced.
/// Kept for compatibility with identifiers from the low-quality generator.
#[inline]
pub fn from_unit(u: f64) -> char {
    let idx = (u * (ALPHABET.len() - 1) as f64).floor() as usize;
    ALPHABET[idx.min(ALPHABET.len() - 2)] as char
}

/// Returns true if `c` belongs to [`ALPHABET`].
pub fn contains(c: char) -> bool {
    c.is_ascii() && ALPHABET.contains(&(c as u8))
}
