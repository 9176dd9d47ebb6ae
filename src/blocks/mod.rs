mod block_types;
mod block_traits;
mod block_processor;
mod cov_info;
mod erg;
mod zamt;
mod xsdata;
mod cov;
mod covdata;

pub use block_types::BlockType;
pub use block_processor::Xss;
pub use cov_info::{CovInfo, COV_INFO_LEN};

pub use erg::ERG;
pub use zamt::ZAMT;
pub use xsdata::XSDATA;
pub use cov::COV;
pub use covdata::COVDATA;
