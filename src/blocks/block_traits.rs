use std::ops::Range;

use crate::arrays::Arrays;
use crate::blocks::BlockType;
use crate::error::{Rev1Error, Result};
use crate::utils;

//=====================================================================
// Every block in the XSS array needs to implement the following traits:
// - PullFromXss:
//     - Pull the raw tokens of the block from the XSS array. By default
//       the block runs from its JXS entry up to the JXS entry of the
//       following block (or the end of the XSS array for the last one).
// - Process:
//     - Convert the tokens produced by PullFromXss into the final data
//       structure.
//
// If both of these traits are implemented, we automatically implement
// the Parse trait, which calls the two other traits in order.
//=====================================================================

pub trait PullFromXss {
    const BLOCK_TYPE: BlockType;

    fn pull_from_xss_array<'a>(arrays: &Arrays<'a>) -> Result<&'a [&'a str]> {
        let range = block_range(&Self::BLOCK_TYPE, arrays)?;
        Ok(&arrays.xss[range])
    }
}

pub trait Process {
    fn process(data: &[&str], arrays: &Arrays) -> Result<Self>
    where
        Self: Sized;
}

pub trait Parse: PullFromXss + Process {
    fn parse(arrays: &Arrays) -> Result<Self>
    where
        Self: Sized,
    {
        let data = Self::pull_from_xss_array(arrays)?;
        Self::process(data, arrays)
    }
}

impl<T> Parse for T where T: PullFromXss + Process {}

//=====================================================================
// Helper functions to make working with the XSS array easier.
//=====================================================================

// 0-indexed range of a block within the XSS token array. JXS entries
// are 1-indexed, so every boundary is shifted down by one.
pub fn block_range(block_type: &BlockType, arrays: &Arrays) -> Result<Range<usize>> {
    let start = arrays.jxs.get(block_type);
    let end = match block_type.next() {
        Some(next_block) => arrays.jxs.get(&next_block),
        None => arrays.xss.len() + 1,
    };

    let block_start = utils::to_zero_based(start, 1).map_err(|_| {
        Rev1Error::Range(format!("{} block has an invalid JXS start of {}", block_type, start))
    })?;
    let block_end = utils::to_zero_based(end, 1).map_err(|_| {
        Rev1Error::Range(format!("{} block has an invalid JXS end of {}", block_type, end))
    })?;

    if block_start > block_end {
        return Err(Rev1Error::Range(format!(
            "{} block starts at {} but the following block starts at {}",
            block_type, start, end
        )));
    }
    if block_end > arrays.xss.len() {
        return Err(Rev1Error::Range(format!(
            "{} block ends at {} but the XSS array only has {} entries",
            block_type,
            end,
            arrays.xss.len()
        )));
    }
    Ok(block_start..block_end)
}
