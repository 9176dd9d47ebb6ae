use log::warn;

use crate::error::{Rev1Error, Result};

//====================================================================
// Assorted helper functions.
//====================================================================

// Provided a temperature in MeV, convert to K
#[inline]
pub fn compute_temperature_from_kT(kT: f64) -> f64 {
    kT * 1e6 / 8.617333262e-5
}

// Rev-1 arrays are addressed with 1-indexed file coordinates measured
// from some base offset (1 for the XSS token stream, JXS entries for the
// blocks within it). All conversions to 0-indexed storage go through here.
#[inline]
pub fn to_zero_based(coordinate: usize, base: usize) -> Result<usize> {
    coordinate.checked_sub(base).ok_or_else(|| {
        Rev1Error::Range(format!(
            "file coordinate {} lies before the start of its block at {}",
            coordinate, base
        ))
    })
}

pub fn parse_usize(token: &str, field: &'static str) -> Result<usize> {
    token.parse::<usize>().map_err(|_| Rev1Error::MalformedToken {
        token: token.to_string(),
        field,
        expected: "a non-negative integer",
    })
}

pub fn parse_i64(token: &str, field: &'static str) -> Result<i64> {
    token.parse::<i64>().map_err(|_| Rev1Error::MalformedToken {
        token: token.to_string(),
        field,
        expected: "an integer",
    })
}

pub fn parse_f64(token: &str, field: &'static str) -> Result<f64> {
    fast_float::parse::<f64, _>(token).map_err(|_| Rev1Error::MalformedToken {
        token: token.to_string(),
        field,
        expected: "a floating point number",
    })
}

// Some integer fields are written as floating point text ("2.4E+01").
// These are truncated toward zero, and any discarded fraction is reported.
pub fn parse_truncated_i64(token: &str, field: &'static str) -> Result<i64> {
    let value = parse_f64(token, field)?;
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
    if !value.is_finite() || value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return Err(Rev1Error::MalformedToken {
            token: token.to_string(),
            field,
            expected: "a whole number representable as a 64-bit integer",
        });
    }
    let truncated = value.trunc();
    if truncated != value {
        warn!("Truncating fractional value {} in {} to {}", token, field, truncated);
    }
    Ok(truncated as i64)
}

// Fixed-arity records consume their leading tokens and ignore the rest
pub fn require_tokens<'a, 'b>(
    tokens: &'b [&'a str],
    arity: usize,
    record: &'static str,
) -> Result<&'b [&'a str]> {
    if tokens.len() < arity {
        return Err(Rev1Error::Arity {
            record,
            expected: format!("at least {}", arity),
            found: tokens.len(),
        });
    }
    if tokens.len() > arity {
        log::debug!("{}: ignoring {} trailing tokens", record, tokens.len() - arity);
    }
    Ok(&tokens[..arity])
}
