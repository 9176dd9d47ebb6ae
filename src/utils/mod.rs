mod helper_functions;
mod rev1_lines;
#[cfg(test)]
mod testing;

pub use helper_functions::{
    compute_temperature_from_kT,
    parse_f64,
    parse_i64,
    parse_truncated_i64,
    parse_usize,
    require_tokens,
    to_zero_based,
};
pub use rev1_lines::Rev1Lines;

#[cfg(test)]
pub use testing::{get_parsed_test_file, uncommented_test_file};
