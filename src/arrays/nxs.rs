use crate::error::Result;
use crate::utils::{self, Rev1Lines};

//=====================================================================
// Represents the NXS array from a Rev-1 file. The NXS array holds the
// sizes needed to interpret the XSS data array that follows. It is
// written over lines 6-7 of the file.
//=====================================================================

const NXS_LINES: (usize, usize) = (6, 8);
const NXS_LEN: usize = 7;

#[derive(Clone, Debug, PartialEq)]
pub struct NxsArray {
    pub xss_len: usize, // Number of entries in XSS array
    pub za: usize,      // ZA of isotope
    pub f: usize,       // Format flag
    pub ng: usize,      // Number of energy groups
    pub nxsec: usize,   // Number of cross sections
    pub ncov: usize,    // Number of covariance blocks
    pub covtype: usize, // Covariance type flag
}

impl NxsArray {
    pub fn from_lines(lines: &Rev1Lines) -> Result<Self> {
        let tokens = lines.tokens_in_line_range(NXS_LINES.0, Some(NXS_LINES.1))?;
        Self::from_tokens(&tokens)
    }

    pub fn from_tokens(tokens: &[&str]) -> Result<Self> {
        let tokens = utils::require_tokens(tokens, NXS_LEN, "NXS")?;
        let nxs_array = tokens
            .iter()
            .map(|token| utils::parse_usize(token, "NXS"))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            xss_len: nxs_array[0],
            za: nxs_array[1],
            f: nxs_array[2],
            ng: nxs_array[3],
            nxsec: nxs_array[4],
            ncov: nxs_array[5],
            covtype: nxs_array[6],
        })
    }
}

impl std::fmt::Display for NxsArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "NXS(za {}, {} groups, {} cross sections, {} covariance blocks)",
            self.za, self.ng, self.nxsec, self.ncov
        )
    }
}
