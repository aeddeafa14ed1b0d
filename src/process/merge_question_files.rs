use crate::config::merger_config::Config;
use crate::types::merge_summary::MergeSummary;
use crate::types::question_record::QuestionRecord;
use crate::util::{create_new_file, read_to_string_without_bom};
use anyhow::{bail, Context, Result};
use log::{error, info, warn};
use serde_json::Value;
use std::io::{BufWriter, Write};
use std::path::Path;

const SECTION_MARKER: &str = "====================";
const RECORD_SEPARATOR_WIDTH: usize = 40;

pub fn merge_question_files(config: &Config) -> Result<MergeSummary> {
    let mut output = BufWriter::new(create_new_file(Path::new(&config.output_file))?);
    let mut summary = MergeSummary::default();

    for index in config.start_index..=config.end_index {
        let source_path = config.source_file_path(index);

        if !source_path.exists() {
            warn!("Skipping {:?}: file does not exist", source_path);
            continue;
        }

        match append_question_file(&source_path, &mut output) {
            Ok(records_written) => {
                info!("{:?}: wrote {} records", source_path, records_written);
                summary.files_written += 1;
                summary.records_written += records_written;
            }
            Err(err) => error!("Failed to merge {:?}: {:#}", source_path, err),
        }
    }

    output
        .flush()
        .context(format!("Failed to flush {:?}", config.output_file))?;

    Ok(summary)
}

// Parses the whole file before writing anything, so a file that fails here
// leaves no partial section in the output.
fn append_question_file<W: Write>(source_path: &Path, output: &mut W) -> Result<usize> {
    let text = read_to_string_without_bom(source_path)?;
    let parsed: Value = serde_json::from_str(&text)
        .context(format!("Failed to parse {source_path:?} as JSON"))?;
    let Some(records) = parsed.as_array() else {
        bail!("Expected a JSON array of records in {source_path:?}");
    };

    write_section_header(output, source_path)?;

    let mut records_written = 0;
    for value in records {
        let record = QuestionRecord::from_value(value);
        if !record.has_question() {
            continue;
        }
        write_record(output, &record)?;
        records_written += 1;
    }

    Ok(records_written)
}

fn write_section_header<W: Write>(output: &mut W, source_path: &Path) -> Result<()> {
    writeln!(output)?;
    writeln!(output)?;
    writeln!(
        output,
        "{SECTION_MARKER} Source file: {} {SECTION_MARKER}",
        source_path.display()
    )?;
    writeln!(output)?;
    Ok(())
}

fn write_record<W: Write>(output: &mut W, record: &QuestionRecord) -> Result<()> {
    writeln!(output, "Question: {}", record.question)?;
    writeln!(output, "Answer: {}", record.answer)?;
    if !record.tag.is_empty() {
        writeln!(output, "Tag: {}", record.tag)?;
    }
    writeln!(output, "{}", "-".repeat(RECORD_SEPARATOR_WIDTH))?;
    Ok(())
}
