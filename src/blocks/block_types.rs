use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

//=====================================================================
// Enum of all block types in the XSS array of a Rev-1 file, in the
// order in which they are laid out.
//=====================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum BlockType {
    ERG,     // Energy grid
    ZAMT,    // Cross section ZA/MT identifiers
    XSDATA,  // Cross section data
    COV,     // Covariance descriptors
    COVDATA, // Covariance data
}

impl BlockType {
    // The block laid out directly after this one, if any
    pub fn next(&self) -> Option<BlockType> {
        BlockType::iter()
            .skip_while(|block_type| block_type != self)
            .nth(1)
    }
}
