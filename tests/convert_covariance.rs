use rev1_cov::api::{self, CovarianceRecord};
use rev1_cov::{codec, parse, Rev1Error};

// Minimal Rev-1 file with two energy groups, one covariance descriptor
// and a 2 x 2 covariance matrix.
fn synthetic_file(cov_line: &str, ix_cov_data: &str) -> String {
    let za = codec::encode("1001").unwrap();
    let cov_line = cov_line.replace("ZA", &za.to_string());
    [
        "  1001.01v  0.999167  2.5301E-08  01/01/20",
        "synthetic covariance file",
        "      0   0.000000",
        "      0   0.000000",
        "      0   0.000000",
        "      0   0.000000",
        "     14   1001      0      2",
        "      0      1      1",
        "      1      4",
        "      4",
        "      4",
        ix_cov_data,
        "  1.0E-05  1.0E+00  2.0E+07",
        cov_line.as_str(),
        "  1.0  2.0  3.0  4.0",
        "",
    ]
    .join("\n")
}

#[test]
fn test_end_to_end_conversion() {
    let rev1 = parse(&synthetic_file("ZA 2 ZA 102 1.0 1.0 11", "11")).unwrap();
    assert_eq!(rev1.nxs.ng, 2);
    assert_eq!(rev1.xss.ix_cov.len(), 1);
    assert_eq!(rev1.xss.ix_cov[0].ix_dat as usize, rev1.jxs.ix_cov_data);

    let records = CovarianceRecord::from_Rev1(&rev1).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].covinfo.za1, "1001");
    assert_eq!(records[0].covinfo.mt1, "2");
    assert_eq!(records[0].covinfo.za2, "1001");
    assert_eq!(records[0].covinfo.mt2, "102");
    assert_eq!(records[0].covmat, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);

    let json = api::to_json(&records, false).unwrap();
    assert_eq!(
        json,
        r#"[{"covinfo":{"za1":"1001","mt1":"2","za2":"1001","mt2":"102"},"covmat":[[1.0,2.0],[3.0,4.0]]}]"#
    );
}

#[test]
fn test_slice_uses_file_coordinates() {
    let rev1 = parse(&synthetic_file("ZA 2 ZA 102 1.0 1.0 11", "11")).unwrap();
    assert_eq!(rev1.ix_cov_data_slice(11, 13).unwrap(), &[1.0, 2.0]);
    assert_eq!(rev1.ix_cov_data_slice(13, 15).unwrap(), &[3.0, 4.0]);
    assert!(matches!(rev1.ix_cov_data_slice(10, 12), Err(Rev1Error::Range(_))));
}

#[test]
fn test_descriptor_region_not_multiple_of_seven() {
    // JXS puts the covariance data one token early, leaving six tokens
    // in the descriptor region
    let result = parse(&synthetic_file("ZA 2 ZA 102 1.0 1.0 11", "10"));
    assert!(matches!(result, Err(Rev1Error::Arity { .. })));
}

#[test]
fn test_non_numeric_descriptor() {
    let result = parse(&synthetic_file("ZA 2 ZA MT 1.0 1.0 11", "11"));
    assert!(matches!(result, Err(Rev1Error::MalformedToken { .. })));
}

#[test]
fn test_descriptor_outside_covariance_data() {
    let rev1 = parse(&synthetic_file("ZA 2 ZA 102 1.0 1.0 13", "11")).unwrap();
    assert!(CovarianceRecord::from_Rev1(&rev1).is_err());
}

#[test]
fn test_group_count_near_usize_max() {
    for ng in [usize::MAX, usize::MAX - 1] {
        let text = synthetic_file("ZA 2 ZA 102 1.0 1.0 11", "11")
            .replacen("     14   1001      0      2", &format!("     14   1001      0 {}", ng), 1);
        let rev1 = parse(&text).unwrap();
        assert_eq!(rev1.nxs.ng, ng);

        let cov_info = rev1.xss.ix_cov[0];
        assert!(matches!(rev1.covariance_matrix(&cov_info), Err(Rev1Error::Range(_))));
        assert!(CovarianceRecord::from_Rev1(&rev1).is_err());
    }
}
