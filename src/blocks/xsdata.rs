use std::ops::Deref;

use crate::arrays::Arrays;
use crate::blocks::BlockType;
use crate::blocks::block_traits::{Process, PullFromXss};
use crate::error::Result;

//=====================================================================
// XSDATA data block
//
// Cross section values starting at JXS(3), kept as raw tokens.
//=====================================================================
#[derive(Debug, Clone, PartialEq)]
pub struct XSDATA( pub Vec<String> );

impl Deref for XSDATA {
    type Target = Vec<String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PullFromXss for XSDATA {
    const BLOCK_TYPE: BlockType = BlockType::XSDATA;
}

impl Process for XSDATA {
    fn process(data: &[&str], _arrays: &Arrays) -> Result<Self> {
        Ok(Self(data.iter().map(|token| token.to_string()).collect()))
    }
}

impl std::fmt::Display for XSDATA {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "XSDATA({} values)", self.len())
    }
}
