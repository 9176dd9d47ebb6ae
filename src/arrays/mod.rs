mod izaw;
mod nxs;
mod jxs;

pub use izaw::{IzawArray, IzawPair};
pub use nxs::NxsArray;
pub use jxs::JxsArray;

// Tokens of the XSS array, 0-indexed. XSS coordinate `k` from the file
// lives at index `k - 1`.
pub type XssArray<'a> = [&'a str];

pub struct Arrays<'a> {
    pub nxs: &'a NxsArray,
    pub jxs: &'a JxsArray,
    pub xss: &'a XssArray<'a>,
}
