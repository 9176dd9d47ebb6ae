use crate::codec;
use crate::error::{Rev1Error, Result};
use crate::utils;

//=====================================================================
// Descriptor of a single covariance sub-matrix. Seven values identify
// the pair of (ZA, MT) quantities the matrix covers and where its rows
// begin in the covariance data block.
//
// The values are written as floating point text in the file and are
// truncated to integers.
//=====================================================================

pub const COV_INFO_LEN: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CovInfo {
    pub za1: i64,     // Packed identifier of the first quantity
    pub mt1: i64,     // Reaction of the first quantity
    pub za2: i64,     // Packed identifier of the second quantity
    pub mt2: i64,     // Reaction of the second quantity
    pub fcv: i64,     // Scale flag
    pub isparce: i64, // Sparsity flag, 1 in all known files
    pub ix_dat: i64,  // XSS coordinate of the first matrix row
}

impl CovInfo {
    pub fn from_tokens(tokens: &[&str]) -> Result<Self> {
        if tokens.len() != COV_INFO_LEN {
            return Err(Rev1Error::Arity {
                record: "covariance descriptor",
                expected: format!("exactly {}", COV_INFO_LEN),
                found: tokens.len(),
            });
        }
        Ok(Self {
            za1: utils::parse_truncated_i64(tokens[0], "COV za1")?,
            mt1: utils::parse_truncated_i64(tokens[1], "COV mt1")?,
            za2: utils::parse_truncated_i64(tokens[2], "COV za2")?,
            mt2: utils::parse_truncated_i64(tokens[3], "COV mt2")?,
            fcv: utils::parse_truncated_i64(tokens[4], "COV fcv")?,
            isparce: utils::parse_truncated_i64(tokens[5], "COV isparce")?,
            ix_dat: utils::parse_truncated_i64(tokens[6], "COV ix_dat")?,
        })
    }

    pub fn za1_name(&self) -> Result<String> {
        decode_za(self.za1)
    }

    pub fn za2_name(&self) -> Result<String> {
        decode_za(self.za2)
    }
}

fn decode_za(za: i64) -> Result<String> {
    let packed = u64::try_from(za)
        .map_err(|_| Rev1Error::Range(format!("negative packed identifier {}", za)))?;
    Ok(codec::decode(packed))
}

impl std::fmt::Display for CovInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CovInfo({}/{} x {}/{} at {})",
            self.za1, self.mt1, self.za2, self.mt2, self.ix_dat
        )
    }
}
