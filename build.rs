#[path = "shared/lib.rs"]
mod shared;
use shared::constants::{COMPANY_DATASET_JSON_FILE_PATH, COMPRESSED_COMPANY_DATASET_FILE_NAME};

use flate2::write::GzEncoder;
use flate2::Compression;
use std::env;
use std::fs::File;
use std::io::{self};
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Ensure that Cargo re-runs the build script if the input file changes
    println!(
        "cargo:rerun-if-changed={}",
        COMPANY_DATASET_JSON_FILE_PATH.display()
    );

    // Nothing to embed unless the `embed-bytes` feature is active
    if env::var_os("CARGO_FEATURE_EMBED_BYTES").is_none() {
        return Ok(());
    }

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let output_path = PathBuf::from(env::var("OUT_DIR")?).join(COMPRESSED_COMPANY_DATASET_FILE_NAME);

    // Open the input JSON file
    let mut input_file = File::open(manifest_dir.join(&*COMPANY_DATASET_JSON_FILE_PATH))?;

    // Compress straight into the output file
    let output_file = File::create(&output_path)?;
    let mut encoder = GzEncoder::new(output_file, Compression::default());
    io::copy(&mut input_file, &mut encoder)?;
    encoder.finish()?;

    Ok(())
}
