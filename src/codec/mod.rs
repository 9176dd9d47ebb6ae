mod zaid;

pub use zaid::{decode, encode, MAX_ENCODED_LEN};
