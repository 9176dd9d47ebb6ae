use std::ops::Deref;

use crate::arrays::Arrays;
use crate::blocks::BlockType;
use crate::blocks::block_traits::{Process, PullFromXss};
use crate::error::Result;
use crate::utils;

//=====================================================================
// COVDATA data block
//
// Flat covariance matrix data from JXS(5) to the end of the XSS array.
// Stored 0-indexed: the value at XSS coordinate `k` lives at index
// `k - JXS(5)`. Use `Rev1::ix_cov_data_slice` to address it with file
// coordinates.
//=====================================================================
#[derive(Debug, Clone, PartialEq)]
pub struct COVDATA( pub Vec<f64> );

impl Deref for COVDATA {
    type Target = Vec<f64>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PullFromXss for COVDATA {
    const BLOCK_TYPE: BlockType = BlockType::COVDATA;
}

impl Process for COVDATA {
    fn process(data: &[&str], _arrays: &Arrays) -> Result<Self> {
        let values = data
            .iter()
            .map(|token| utils::parse_f64(token, "COVDATA"))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self(values))
    }
}

impl std::fmt::Display for COVDATA {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "COVDATA({} values)", self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::arrays::{JxsArray, NxsArray};
    use crate::blocks::block_traits::Parse;
    use crate::error::Rev1Error;
    use crate::utils::get_parsed_test_file;

    #[test]
    fn test_covdata_parsing() {
        let parsed_rev1 = get_parsed_test_file();

        let covdata = parsed_rev1.xss.ix_cov_data;
        assert_eq!(*covdata, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn test_malformed_covdata() {
        let nxs = NxsArray::from_tokens(&["2", "1001", "0", "1", "0", "0", "1"]).unwrap();
        let jxs = JxsArray::from_tokens(&["1", "1", "1", "1", "1"]).unwrap();
        let xss = ["0.5", "nope"];
        let arrays = Arrays { nxs: &nxs, jxs: &jxs, xss: &xss };
        let result = COVDATA::parse(&arrays);
        assert!(matches!(result, Err(Rev1Error::MalformedToken { field: "COVDATA", .. })));
    }
}
