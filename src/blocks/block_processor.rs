use std::time::Instant;

use log::{debug, warn};
use strum::IntoEnumIterator;

use crate::arrays::{Arrays, JxsArray, NxsArray, XssArray};
use crate::blocks::block_traits::Parse;
use crate::blocks::{BlockType, COV, COVDATA, COV_INFO_LEN, ERG, XSDATA, ZAMT};
use crate::error::Result;

//=====================================================================
// The parsed XSS array: every data block of a Rev-1 file. Blocks are
// sliced out of the token stream using the JXS array.
//=====================================================================
#[derive(Clone, Debug, PartialEq)]
pub struct Xss {
    pub ix_erg: ERG,
    pub ix_xs_zamt: ZAMT,
    pub ix_xs_data: XSDATA,
    pub ix_cov: COV,
    pub ix_cov_data: COVDATA,
}

impl Xss {
    pub fn from_tokens(xss_array: &XssArray, nxs_array: &NxsArray, jxs_array: &JxsArray) -> Result<Self> {
        // Construct the Arrays struct
        let arrays = Arrays {
            nxs: nxs_array,
            jxs: jxs_array,
            xss: xss_array,
        };

        // Energy grid
        let mut start = Instant::now();
        let erg = ERG::parse(&arrays)?;
        debug!("⚛️  {} time ⚛️ : {} us", erg, start.elapsed().as_micros());

        // Cross section identifiers
        start = Instant::now();
        let zamt = ZAMT::parse(&arrays)?;
        debug!("⚛️  {} time ⚛️ : {} us", zamt, start.elapsed().as_micros());

        // Cross section values
        start = Instant::now();
        let xsdata = XSDATA::parse(&arrays)?;
        debug!("⚛️  {} time ⚛️ : {} us", xsdata, start.elapsed().as_micros());

        // Covariance descriptors
        start = Instant::now();
        let cov = COV::parse(&arrays)?;
        debug!("⚛️  {} time ⚛️ : {} us", cov, start.elapsed().as_micros());

        // Covariance data
        start = Instant::now();
        let covdata = COVDATA::parse(&arrays)?;
        debug!("⚛️  {} time ⚛️ : {} us", covdata, start.elapsed().as_micros());

        let xss = Self {
            ix_erg: erg,
            ix_xs_zamt: zamt,
            ix_xs_data: xsdata,
            ix_cov: cov,
            ix_cov_data: covdata,
        };

        // NXS(1) is informational only
        let parsed_len = xss.parsed_len();
        if parsed_len != nxs_array.xss_len {
            warn!(
                "XSS blocks hold {} of {} entries but NXS lists {}",
                parsed_len,
                xss_array.len(),
                nxs_array.xss_len
            );
        }

        Ok(xss)
    }

    // Number of entries a block contributed to the XSS array
    pub fn block_len(&self, block_type: &BlockType) -> usize {
        match block_type {
            BlockType::ERG => self.ix_erg.len(),
            BlockType::ZAMT => self.ix_xs_zamt.len(),
            BlockType::XSDATA => self.ix_xs_data.len(),
            BlockType::COV => self.ix_cov.len() * COV_INFO_LEN,
            BlockType::COVDATA => self.ix_cov_data.len(),
        }
    }

    // Number of XSS entries covered by all blocks together
    pub fn parsed_len(&self) -> usize {
        BlockType::iter().map(|block_type| self.block_len(&block_type)).sum()
    }
}

impl std::fmt::Display for Xss {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "XSS[{}, {}, {}, {}, {}]",
            self.ix_erg, self.ix_xs_zamt, self.ix_xs_data, self.ix_cov, self.ix_cov_data
        )
    }
}
