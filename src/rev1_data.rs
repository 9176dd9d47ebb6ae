use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::info;

use crate::arrays::{IzawArray, JxsArray, NxsArray};
use crate::blocks::{CovInfo, Xss};
use crate::error::{Rev1Error, Result};
use crate::header::Header;
use crate::utils::{self, Rev1Lines};

// The XSS array starts on the thirteenth line of the file
const XSS_FIRST_LINE: usize = 12;

//=====================================================================
// A fully parsed Rev-1 file. Built once from the complete text of the
// file and never modified afterwards.
//
// See https://mcnp.lanl.gov/pdf_files/la-ur-17-20098.pdf for the
// meaning of the individual arrays.
//=====================================================================
#[derive(Clone, Debug, PartialEq)]
pub struct Rev1 {
    pub header: Header,
    pub aziz: IzawArray,
    pub nxs: NxsArray,
    pub jxs: JxsArray,
    pub xss: Xss,
}

impl Rev1 {
    pub fn from_REV1<P: AsRef<Path>>(file_path: P) -> Result<Self> {
        let path = file_path.as_ref();
        info!("Reading Rev-1 file {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::from_text(&text)
    }

    pub fn from_text(text: &str) -> Result<Self> {
        let lines = Rev1Lines::new(text);

        // Process the header
        let header = Header::from_lines(&lines)?;

        // Process the IZAW array
        let aziz = IzawArray::from_lines(&lines)?;

        // Process the NXS array
        let nxs = NxsArray::from_lines(&lines)?;

        // Process the JXS array
        let jxs = JxsArray::from_lines(&lines)?;

        // Process the blocks out of the XSS array
        let xss_array = lines.tokens_in_line_range(XSS_FIRST_LINE, None)?;
        let xss = Xss::from_tokens(&xss_array, &nxs, &jxs)?;

        info!("Parsed {}: {} {}", header, nxs, xss);
        Ok(Self { header, aziz, nxs, jxs, xss })
    }

    /// Covariance data between two XSS coordinates, `end_ex` excluded.
    ///
    /// Both bounds are 1-indexed positions in the file (as stored in
    /// `CovInfo::ix_dat`), not indices into the covariance data block.
    pub fn ix_cov_data_slice(&self, start: usize, end_ex: usize) -> Result<&[f64]> {
        let base = self.jxs.ix_cov_data;
        let lo = utils::to_zero_based(start, base)?;
        let hi = utils::to_zero_based(end_ex, base)?;
        if lo > hi || hi > self.xss.ix_cov_data.len() {
            return Err(Rev1Error::Range(format!(
                "covariance data slice {}..{} outside of block {}..{}",
                start,
                end_ex,
                base,
                base.saturating_add(self.xss.ix_cov_data.len())
            )));
        }
        Ok(&self.xss.ix_cov_data[lo..hi])
    }

    /// The NG x NG covariance matrix described by `cov_info`, row by row.
    pub fn covariance_matrix(&self, cov_info: &CovInfo) -> Result<Vec<Vec<f64>>> {
        let base = usize::try_from(cov_info.ix_dat).map_err(|_| {
            Rev1Error::Range(format!("negative covariance data location {}", cov_info.ix_dat))
        })?;
        let row_len = self.nxs.ng;
        (0..row_len)
            .map(|row| -> Result<Vec<f64>> {
                let (row_start, row_end) = row
                    .checked_mul(row_len)
                    .and_then(|offset| base.checked_add(offset))
                    .and_then(|row_start| Some((row_start, row_start.checked_add(row_len)?)))
                    .ok_or_else(|| {
                        Rev1Error::Range(format!(
                            "row {} of a {} group matrix at {} overflows the file coordinates",
                            row, row_len, base
                        ))
                    })?;
                self.ix_cov_data_slice(row_start, row_end).map(|values| values.to_vec())
            })
            .collect()
    }

    /// Every covariance matrix in the file, in descriptor order.
    pub fn covariance_matrices(&self) -> Result<Vec<(CovInfo, Vec<Vec<f64>>)>> {
        self.xss
            .ix_cov
            .iter()
            .map(|cov_info| -> Result<(CovInfo, Vec<Vec<f64>>)> {
                Ok((*cov_info, self.covariance_matrix(cov_info)?))
            })
            .collect()
    }
}

impl FromStr for Rev1 {
    type Err = Rev1Error;

    fn from_str(text: &str) -> Result<Self> {
        Self::from_text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use tempfile::NamedTempFile;

    use crate::utils::{get_parsed_test_file, uncommented_test_file};

    #[test]
    fn test_parse_test_file() {
        let parsed_rev1 = get_parsed_test_file();
        assert_eq!(parsed_rev1.header.zaid, "98252.01v");
        assert_eq!(parsed_rev1.xss.ix_cov.len(), parsed_rev1.nxs.ncov);
    }

    #[test]
    fn test_from_REV1() {
        let mut test_file = NamedTempFile::new().unwrap();
        write!(test_file, "{}", uncommented_test_file()).unwrap();
        let parsed_rev1 = Rev1::from_REV1(test_file.path()).unwrap();
        assert_eq!(parsed_rev1, get_parsed_test_file());
    }

    #[test]
    fn test_from_str() {
        let parsed_rev1: Rev1 = uncommented_test_file().parse().unwrap();
        assert_eq!(parsed_rev1.jxs.ix_cov_data, 24);
    }

    #[test]
    fn test_missing_file() {
        let result = Rev1::from_REV1("test_nuclear_data_files/does_not_exist");
        assert!(matches!(result, Err(Rev1Error::Resource(_))));
    }

    #[test]
    fn test_truncated_file() {
        let text: String = uncommented_test_file().lines().take(9).map(|line| format!("{}\n", line)).collect();
        let result = Rev1::from_text(&text);
        assert!(matches!(result, Err(Rev1Error::Range(_))));
    }

    #[test]
    fn test_ix_cov_data_slice() {
        let parsed_rev1 = get_parsed_test_file();
        assert_eq!(parsed_rev1.ix_cov_data_slice(24, 26).unwrap(), &[1.0, 2.0]);
        assert_eq!(parsed_rev1.ix_cov_data_slice(28, 32).unwrap(), &[5.0, 6.0, 7.0, 8.0]);
        assert!(parsed_rev1.ix_cov_data_slice(30, 30).unwrap().is_empty());
    }

    #[test]
    fn test_ix_cov_data_slice_out_of_range() {
        let parsed_rev1 = get_parsed_test_file();
        // Before the covariance data block
        assert!(matches!(parsed_rev1.ix_cov_data_slice(23, 25), Err(Rev1Error::Range(_))));
        // Past the end of the XSS array
        assert!(matches!(parsed_rev1.ix_cov_data_slice(30, 33), Err(Rev1Error::Range(_))));
        // Reversed bounds
        assert!(matches!(parsed_rev1.ix_cov_data_slice(26, 25), Err(Rev1Error::Range(_))));
    }

    #[test]
    fn test_descriptors_point_into_cov_data() {
        let parsed_rev1 = get_parsed_test_file();
        let ng = parsed_rev1.nxs.ng;
        for cov_info in parsed_rev1.xss.ix_cov.iter() {
            let ix_dat = cov_info.ix_dat as usize;
            assert!(ix_dat >= parsed_rev1.jxs.ix_cov_data);
            assert_eq!(parsed_rev1.ix_cov_data_slice(ix_dat, ix_dat + ng).unwrap().len(), ng);
        }
    }

    #[test]
    fn test_covariance_matrix() {
        let parsed_rev1 = get_parsed_test_file();
        let matrices = parsed_rev1.covariance_matrices().unwrap();
        assert_eq!(matrices.len(), 2);
        assert_eq!(matrices[0].1, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(matrices[1].1, vec![vec![5.0, 6.0], vec![7.0, 8.0]]);
        for (_, matrix) in &matrices {
            assert_eq!(matrix.len(), parsed_rev1.nxs.ng);
            assert!(matrix.iter().all(|row| row.len() == parsed_rev1.nxs.ng));
        }
    }

    #[test]
    fn test_covariance_matrix_out_of_range() {
        let parsed_rev1 = get_parsed_test_file();
        let mut cov_info = parsed_rev1.xss.ix_cov[1];
        cov_info.ix_dat = 30;
        assert!(matches!(parsed_rev1.covariance_matrix(&cov_info), Err(Rev1Error::Range(_))));
        cov_info.ix_dat = -1;
        assert!(matches!(parsed_rev1.covariance_matrix(&cov_info), Err(Rev1Error::Range(_))));
    }

    #[test]
    fn test_covariance_matrix_huge_group_count() {
        let mut parsed_rev1 = get_parsed_test_file();
        let cov_info = parsed_rev1.xss.ix_cov[0];
        for ng in [usize::MAX, usize::MAX - 1, 1 << (usize::BITS / 2)] {
            parsed_rev1.nxs.ng = ng;
            assert!(matches!(parsed_rev1.covariance_matrix(&cov_info), Err(Rev1Error::Range(_))));
        }
    }
}
