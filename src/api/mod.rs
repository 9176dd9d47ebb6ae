mod covariance_record;

pub use covariance_record::{to_json, write_json, CovarianceKey, CovarianceRecord};
