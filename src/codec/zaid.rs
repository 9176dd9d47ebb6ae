use crate::error::{Rev1Error, Result};

//=====================================================================
// Codec for the packed ZA identifiers found in Rev-1 files.
//
// Each character of the identifier is stored as its 7-bit ASCII code,
// with the last character occupying the most significant bits. For
// example "poly" is packed as
//
//     'y' 1111001 | 'l' 1101100 | 'o' 1101111 | 'p' 1110000
//
// which reads as 255539184 in decimal.
//=====================================================================

const BITS_PER_CHAR: u32 = 7;
const CHAR_MASK: u64 = (1 << BITS_PER_CHAR) - 1;

// Nine 7-bit groups are the most that fit in a u64
pub const MAX_ENCODED_LEN: usize = (u64::BITS / BITS_PER_CHAR) as usize;

/// Pack an ASCII identifier into a single integer.
///
/// The empty string encodes to 0. Characters outside of 7-bit ASCII, or
/// identifiers longer than [`MAX_ENCODED_LEN`], are rejected.
pub fn encode(identifier: &str) -> Result<u64> {
    if let Some(c) = identifier.chars().find(|c| !c.is_ascii()) {
        return Err(Rev1Error::Range(format!(
            "character {:?} in identifier {:?} is not 7-bit ASCII",
            c, identifier
        )));
    }
    if identifier.len() > MAX_ENCODED_LEN {
        return Err(Rev1Error::Range(format!(
            "identifier {:?} has {} characters, at most {} can be packed",
            identifier,
            identifier.len(),
            MAX_ENCODED_LEN
        )));
    }

    // Walk the identifier backwards so that the last character ends up
    // in the most significant bits
    Ok(identifier
        .bytes()
        .rev()
        .fold(0u64, |packed, byte| (packed << BITS_PER_CHAR) | u64::from(byte)))
}

/// Unpack an integer produced by [`encode`] back into its identifier.
///
/// Decoding 0 yields the empty string. Trailing NUL characters of the
/// original identifier occupy the (zero) high bits and are not recovered.
pub fn decode(encoded: u64) -> String {
    let mut remaining = encoded;
    let mut identifier = String::new();
    while remaining != 0 {
        // Lowest group is the first character
        identifier.push(char::from((remaining & CHAR_MASK) as u8));
        remaining >>= BITS_PER_CHAR;
    }
    identifier
}
