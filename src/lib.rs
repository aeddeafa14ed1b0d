mod config;
mod process;
mod types;
mod util;

use anyhow::Result;
use log::info;
use process::merge_question_files::merge_question_files;

pub use config::merger_config::Config;
pub use types::merge_summary::MergeSummary;

pub fn run(config_path: &str) -> Result<MergeSummary> {
    info!("Reading config from file: {}", config_path);
    let config = Config::read_from_file(config_path)?;
    merge(&config)
}

pub fn merge(config: &Config) -> Result<MergeSummary> {
    info!(
        "Merging {}.json through {}.json from {}",
        config.start_index, config.end_index, config.source_dir
    );
    let summary = merge_question_files(config)?;

    info!(
        "Done, merged {} records from {} files into {}",
        summary.records_written, summary.files_written, config.output_file
    );

    Ok(summary)
}
