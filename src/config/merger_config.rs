use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub start_index: u32,
    pub end_index: u32,
    pub output_file: String,
    pub source_dir: String,
}

impl Config {
    pub fn read_from_file(file: &str) -> Result<Config> {
        let f = std::fs::File::open(file)
            .context(format!("Tried to read merger config from {file}"))?;
        serde_yaml::from_reader(f).map_err(Into::into)
    }

    pub fn source_file_path(&self, index: u32) -> PathBuf {
        PathBuf::from(&self.source_dir).join(format!("{index}.json"))
    }
}
