use crate::blocks::BlockType;
use crate::error::Result;
use crate::utils::{self, Rev1Lines};

//=====================================================================
// Represents the JXS array from a Rev-1 file. This array contains the
// 1-indexed starting positions of all data blocks in the XSS array,
// written over lines 8-11 of the file. Blocks are laid out back to
// back in the order of `BlockType`.
//=====================================================================

const JXS_LINES: (usize, usize) = (8, 12);
const JXS_LEN: usize = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct JxsArray {
    pub ix_erg: usize,      // Energy grid
    pub ix_xs_zamt: usize,  // Cross section ZA/MT identifiers
    pub ix_xs_data: usize,  // Cross section data
    pub ix_cov: usize,      // Covariance descriptors
    pub ix_cov_data: usize, // Covariance data
}

impl JxsArray {
    pub fn from_lines(lines: &Rev1Lines) -> Result<Self> {
        let tokens = lines.tokens_in_line_range(JXS_LINES.0, Some(JXS_LINES.1))?;
        Self::from_tokens(&tokens)
    }

    pub fn from_tokens(tokens: &[&str]) -> Result<Self> {
        let tokens = utils::require_tokens(tokens, JXS_LEN, "JXS")?;
        let jxs_array = tokens
            .iter()
            .map(|token| utils::parse_usize(token, "JXS"))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            ix_erg: jxs_array[0],
            ix_xs_zamt: jxs_array[1],
            ix_xs_data: jxs_array[2],
            ix_cov: jxs_array[3],
            ix_cov_data: jxs_array[4],
        })
    }

    // Starting index of a block in the XSS array
    pub fn get(&self, block_type: &BlockType) -> usize {
        match block_type {
            BlockType::ERG => self.ix_erg,
            BlockType::ZAMT => self.ix_xs_zamt,
            BlockType::XSDATA => self.ix_xs_data,
            BlockType::COV => self.ix_cov,
            BlockType::COVDATA => self.ix_cov_data,
        }
    }
}

impl std::fmt::Display for JxsArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "JXS({}, {}, {}, {}, {})",
            self.ix_erg, self.ix_xs_zamt, self.ix_xs_data, self.ix_cov, self.ix_cov_data
        )
    }
}
