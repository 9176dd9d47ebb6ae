use std::ops::Deref;

use log::{debug, warn};

use crate::arrays::Arrays;
use crate::blocks::{BlockType, CovInfo};
use crate::blocks::block_traits::{Process, PullFromXss};
use crate::blocks::cov_info::COV_INFO_LEN;
use crate::error::{Rev1Error, Result};

//=====================================================================
// COV data block
//
// Covariance descriptors starting at JXS(4), seven values each. The
// block must hold a whole number of descriptors.
//=====================================================================
#[derive(Debug, Clone, PartialEq)]
pub struct COV( pub Vec<CovInfo> );

impl Deref for COV {
    type Target = Vec<CovInfo>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PullFromXss for COV {
    const BLOCK_TYPE: BlockType = BlockType::COV;
}

impl Process for COV {
    fn process(data: &[&str], arrays: &Arrays) -> Result<Self> {
        if data.len() % COV_INFO_LEN != 0 {
            return Err(Rev1Error::Arity {
                record: "COV block",
                expected: format!("a multiple of {}", COV_INFO_LEN),
                found: data.len(),
            });
        }

        let cov_infos = data
            .chunks_exact(COV_INFO_LEN)
            .map(CovInfo::from_tokens)
            .collect::<Result<Vec<_>>>()?;
        for cov_info in &cov_infos {
            debug!("{}", cov_info);
        }

        if cov_infos.len() != arrays.nxs.ncov {
            warn!(
                "COV block holds {} descriptors but NXS lists {}",
                cov_infos.len(),
                arrays.nxs.ncov
            );
        }
        Ok(Self(cov_infos))
    }
}

impl std::fmt::Display for COV {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "COV({} descriptors)", self.len())
    }
}
