use thiserror::Error;

//=====================================================================
// Errors raised while parsing a Rev-1 file. Every error aborts the
// parse, there is no partial-record recovery.
//=====================================================================
#[derive(Debug, Error)]
pub enum Rev1Error {
    /// A token which should hold a number could not be converted.
    #[error("Malformed token '{token}' in {field}: expected {expected}")]
    MalformedToken {
        token: String,
        field: &'static str,
        expected: &'static str,
    },

    /// A fixed-arity record or region holds the wrong number of tokens.
    #[error("Arity mismatch in {record}: expected {expected} tokens, found {found}")]
    Arity {
        record: &'static str,
        expected: String,
        found: usize,
    },

    /// A line range, region offset, or slice falls outside the available data.
    #[error("Out of range: {0}")]
    Range(String),

    /// The Rev-1 file could not be read.
    #[error("Failed to read Rev-1 file: {0}")]
    Resource(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Rev1Error>;
