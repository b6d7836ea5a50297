//! The sort-preserving 64-symbol alphabet and its lookup tables.
//!
//! Every symbol's byte value is strictly greater than the one before it, so a
//! byte-wise comparison of two encoded strings agrees with a comparison of the
//! numbers they encode.
//!
//! ```
//! use sortid::alphabet::{self, ALPHABET};
//!
//! assert_eq!(ALPHABET[0], b'0');
//! assert_eq!(ALPHABET[63], b'~');
//! assert_eq!(alphabet::index_of(b'_'), Some(36));
//! assert_eq!(alphabet::index_of(b'-'), None);
//! ```

/// The 64 symbols in ascending byte order: digits, uppercase letters,
/// underscore, lowercase letters, tilde.
pub const ALPHABET: &[u8; 64] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz~";

/// Sentinel stored in [`LOOKUP`] for bytes outside the alphabet.
pub const NO_VALUE: u8 = 255;

/// Number of bits carried by one symbol.
pub const BITS_PER_SYMBOL: u32 = 6;

pub(crate) const SYMBOL_MASK: u32 = 0x3F;
pub(crate) const PAIR_MASK: u32 = 0xFFF;

/// Reverse lookup table: byte value to alphabet index, or [`NO_VALUE`].
pub const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0;
    while i < 64 {
        lut[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    lut
};

/// Two-symbol table indexed by a 12-bit value.
///
/// Entry `v` holds the symbol for the low 6 bits of `v` followed by the symbol
/// for its high 6 bits, so a single lookup emits two symbols.
pub const PAIRS: [[u8; 2]; 4096] = {
    let mut table = [[0_u8; 2]; 4096];
    let mut v = 0;
    while v < 4096 {
        table[v] = [ALPHABET[v & 0x3F], ALPHABET[v >> 6]];
        v += 1;
    }
    table
};

/// Returns the symbol for the low 6 bits of `index`.
#[inline(always)]
#[allow(clippy::inline_always)]
#[must_use]
pub const fn symbol(index: u32) -> u8 {
    ALPHABET[(index & SYMBOL_MASK) as usize]
}

/// Returns the two symbols for the low 12 bits of `value`, low 6 bits first.
#[inline(always)]
#[allow(clippy::inline_always)]
#[must_use]
pub const fn pair(value: u32) -> [u8; 2] {
    PAIRS[(value & PAIR_MASK) as usize]
}

/// Returns the alphabet index of `byte`, or `None` if it is not a symbol.
#[inline(always)]
#[allow(clippy::inline_always)]
#[must_use]
pub const fn index_of(byte: u8) -> Option<u8> {
    match LOOKUP[byte as usize] {
        NO_VALUE => None,
        i => Some(i),
    }
}

/// Returns `true` if `byte` belongs to the alphabet.
#[must_use]
pub const fn is_symbol(byte: u8) -> bool {
    LOOKUP[byte as usize] != NO_VALUE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_is_strictly_increasing() {
        for w in ALPHABET.windows(2) {
            assert!(w[0] < w[1], "{} !< {}", w[0] as char, w[1] as char);
        }
    }

    #[test]
    fn alphabet_has_exact_order() {
        assert_eq!(&ALPHABET[..10], b"0123456789");
        assert_eq!(&ALPHABET[10..36], b"ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        assert_eq!(ALPHABET[36], b'_');
        assert_eq!(&ALPHABET[37..63], b"abcdefghijklmnopqrstuvwxyz");
        assert_eq!(ALPHABET[63], b'~');
    }

    #[test]
    fn lookup_inverts_alphabet() {
        for (i, &c) in ALPHABET.iter().enumerate() {
            assert_eq!(index_of(c), Some(i as u8));
            assert!(is_symbol(c));
        }
    }

    #[test]
    fn lookup_rejects_everything_else() {
        let mut rejected = 0;
        for b in 0..=255_u8 {
            if !ALPHABET.contains(&b) {
                assert_eq!(LOOKUP[b as usize], NO_VALUE);
                assert_eq!(index_of(b), None);
                rejected += 1;
            }
        }
        assert_eq!(rejected, 256 - 64);
    }

    #[test]
    fn pair_matches_single_symbol_lookups() {
        for v in 0..4096_u32 {
            assert_eq!(pair(v), [symbol(v), symbol(v >> 6)]);
        }
    }

    #[test]
    fn symbol_and_pair_mask_their_input() {
        assert_eq!(symbol(64), b'0');
        assert_eq!(symbol(u32::MAX), b'~');
        assert_eq!(pair(0x1000), pair(0));
        assert_eq!(pair(u32::MAX), [b'~', b'~']);
    }
}
