use clv::input::csv_reader_builder;
use clv::Result;

use std::{fs::File, path::PathBuf};

use csv::Reader;

pub fn build_csv_reader(filepath: PathBuf) -> Result<Reader<File>> {
    let reader = csv_reader_builder().from_path(filepath)?;

    return Ok(reader);
}
