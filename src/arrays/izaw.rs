use crate::error::Result;
use crate::utils::{self, Rev1Lines};

//=====================================================================
// Represents the IZAW array from a Rev-1 file. This holds four
// (ZA, atomic weight ratio) pairs written over lines 2-5, consumed
// pairwise in token order.
//=====================================================================

const IZAW_LINES: (usize, usize) = (2, 6);
pub const IZAW_PAIRS: usize = 4;

#[derive(Clone, Debug, PartialEq)]
pub struct IzawArray {
    pub pairs: Vec<IzawPair>,
}

impl IzawArray {
    pub fn from_lines(lines: &Rev1Lines) -> Result<Self> {
        let tokens = lines.tokens_in_line_range(IZAW_LINES.0, Some(IZAW_LINES.1))?;
        let tokens = utils::require_tokens(&tokens, 2 * IZAW_PAIRS, "IZAW")?;
        let pairs = tokens
            .chunks_exact(2)
            .map(|chunk| -> Result<IzawPair> {
                Ok(IzawPair::new(
                    utils::parse_i64(chunk[0], "IZAW za")?,
                    utils::parse_f64(chunk[1], "IZAW awr")?,
                ))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { pairs })
    }
}

// Pair of values used in S alpha beta calculations
#[derive(Debug, Clone, PartialEq)]
pub struct IzawPair {
    pub za: i64,    // ZA of isotope
    pub iz: f64,    // Atomic weight ratio
}

impl IzawPair {
    pub fn new(za: i64, iz: f64) -> Self {
        Self { za, iz }
    }
}
