#![allow(unused)] // Ignore due to all constants not being utilized across all environments

use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

pub static COMPANY_DATASET_JSON_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("data", "companies.json"));

pub static COMPRESSED_COMPANY_DATASET_FILE_NAME: &str = "companies.json.gz";
