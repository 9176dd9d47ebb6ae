#[allow(clippy::module_inception)]
mod header;

pub use header::Header;
