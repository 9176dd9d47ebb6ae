use std::ops::Deref;

use log::debug;

use crate::arrays::Arrays;
use crate::blocks::BlockType;
use crate::blocks::block_traits::{Process, PullFromXss};
use crate::error::Result;
use crate::utils;

//=====================================================================
// ERG data block
//
// The energy grid of the covariance data, starting at JXS(1). Group
// boundaries are listed, so a file with NXS(4) groups normally has
// NXS(4) + 1 energies.
//=====================================================================
#[derive(Debug, Clone, PartialEq)]
pub struct ERG( pub Vec<f64> );

impl Deref for ERG {
    type Target = Vec<f64>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PullFromXss for ERG {
    const BLOCK_TYPE: BlockType = BlockType::ERG;
}

impl Process for ERG {
    fn process(data: &[&str], arrays: &Arrays) -> Result<Self> {
        let energy = data
            .iter()
            .map(|token| utils::parse_f64(token, "ERG"))
            .collect::<Result<Vec<_>>>()?;
        if energy.len().checked_sub(1) != Some(arrays.nxs.ng) {
            debug!("ERG has {} energies for {} groups", energy.len(), arrays.nxs.ng);
        }
        Ok(Self(energy))
    }
}

impl std::fmt::Display for ERG {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ERG({} energies)", self.len())
    }
}
