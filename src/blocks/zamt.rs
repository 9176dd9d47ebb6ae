use std::ops::Deref;

use crate::arrays::Arrays;
use crate::blocks::BlockType;
use crate::blocks::block_traits::{Process, PullFromXss};
use crate::error::Result;

//=====================================================================
// ZAMT data block
//
// ZA/MT identifiers of the cross sections, starting at JXS(2). These
// are kept as raw tokens, interpreting them is left to the caller.
//=====================================================================
#[derive(Debug, Clone, PartialEq)]
pub struct ZAMT( pub Vec<String> );

impl Deref for ZAMT {
    type Target = Vec<String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PullFromXss for ZAMT {
    const BLOCK_TYPE: BlockType = BlockType::ZAMT;
}

impl Process for ZAMT {
    fn process(data: &[&str], _arrays: &Arrays) -> Result<Self> {
        Ok(Self(data.iter().map(|token| token.to_string()).collect()))
    }
}

impl std::fmt::Display for ZAMT {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ZAMT({} identifiers)", self.len())
    }
}

#[cfg(test)]
mod tests {
    use crate::utils::get_parsed_test_file;

    #[test]
    fn test_zamt_parsing() {
        let parsed_rev1 = get_parsed_test_file();

        let zamt = parsed_rev1.xss.ix_xs_zamt;
        assert_eq!(*zamt, vec!["13533748281".to_string(), "18".to_string()]);
    }
}
