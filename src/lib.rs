#![allow(non_snake_case, clippy::upper_case_acronyms)]

pub mod api;
pub mod arrays;
pub mod blocks;
pub mod codec;
pub mod error;
pub mod header;
mod rev1_data;
mod utils;

pub use error::{Rev1Error, Result};
pub use rev1_data::Rev1;
pub use utils::Rev1Lines;

/// Parse the complete text of a Rev-1 file.
pub fn parse(text: &str) -> Result<Rev1> {
    Rev1::from_text(text)
}
