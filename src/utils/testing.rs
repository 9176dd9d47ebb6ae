//=====================================================================
// Utility functions to aid in accelerating testing
//=====================================================================

use std::fs;
use std::path::Path;
use std::sync::Mutex;
use std::time::Instant;

use lazy_static::lazy_static;

use crate::Rev1;

// These variables are used to hold the test file in a way where it is
// accesible to all tests in all files, and where it can be parsed once
// and reused in all tests.
lazy_static! {
    pub static ref TEST_REV1_DATA: Mutex<Option<Rev1>> = Mutex::new(None);
    pub static ref TEST_REV1_COMMENTED: &'static str = "test_nuclear_data_files/test_rev1";
}

// The test file carries `//` comment lines describing its layout, which
// have to be removed before it is a valid Rev-1 file.
pub fn uncommented_test_file() -> String {
    let commented = fs::read_to_string(Path::new(*TEST_REV1_COMMENTED)).unwrap();
    commented
        .lines()
        .filter(|line| !line.starts_with("//"))
        .map(|line| format!("{}\n", line))
        .collect()
}

pub fn get_parsed_test_file() -> Rev1 {
    // In effect, this acts as a sloppy integration test as it involves
    // the parsing of an actual Rev-1 file.
    let mut data = TEST_REV1_DATA.lock().unwrap();

    // Only parse the test file if it is not already parsed
    if data.is_none() {
        let start = Instant::now();
        let parsed = Rev1::from_text(&uncommented_test_file()).unwrap();
        println!("⚛️  Time to parse Rev-1 test file ⚛️ : {:?}", start.elapsed());
        *data = Some(parsed);
    }
    // Otherwise, return the already parsed data
    data.as_ref().unwrap().clone()
}
