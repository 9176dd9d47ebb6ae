use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

use crate::Rev1;

//=====================================================================
// Helper structs to represent a covariance matrix keyed by the pair of
// quantities it relates. This is the shape written out as JSON:
//
//     [{"covinfo": {"za1": "98252", "mt1": "18", ...},
//       "covmat": [[...], [...]]}, ...]
//=====================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CovarianceKey {
    pub za1: String,
    pub mt1: String,
    pub za2: String,
    pub mt2: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CovarianceRecord {
    pub covinfo: CovarianceKey,
    pub covmat: Vec<Vec<f64>>,
}

impl CovarianceRecord {
    // Build one record per covariance descriptor, in file order
    pub fn from_Rev1(rev1: &Rev1) -> Result<Vec<Self>> {
        rev1.xss
            .ix_cov
            .iter()
            .map(|cov_info| -> Result<Self> {
                let covinfo = CovarianceKey {
                    za1: cov_info.za1_name()?,
                    mt1: cov_info.mt1.to_string(),
                    za2: cov_info.za2_name()?,
                    mt2: cov_info.mt2.to_string(),
                };
                let covmat = rev1
                    .covariance_matrix(cov_info)
                    .with_context(|| format!("Failed to build covariance matrix for {}", cov_info))?;
                Ok(Self { covinfo, covmat })
            })
            .collect()
    }
}

pub fn to_json(records: &[CovarianceRecord], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(records)?
    } else {
        serde_json::to_string(records)?
    };
    Ok(json)
}

pub fn write_json<P: AsRef<Path>>(records: &[CovarianceRecord], file_path: P, pretty: bool) -> Result<()> {
    let path = file_path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    if pretty {
        serde_json::to_writer_pretty(&mut writer, records)?;
    } else {
        serde_json::to_writer(&mut writer, records)?;
    }
    writer.flush()?;
    info!("Wrote {} covariance matrices to {}", records.len(), path.display());
    Ok(())
}
