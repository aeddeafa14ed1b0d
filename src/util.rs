use anyhow::Context;
use anyhow::Result;
use std::fs::File;
use std::path::Path;

pub fn create_new_file(path: &Path) -> Result<File> {
    File::create(path).with_context(|| format!("Failed to create file: {:?}", path))
}

// Question files saved on Windows may start with a UTF-8 byte-order mark,
// which serde_json rejects as garbage before the opening bracket.
pub fn read_to_string_without_bom(path: &Path) -> Result<String> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {:?}", path))?;
    match text.strip_prefix('\u{feff}') {
        Some(stripped) => Ok(stripped.to_string()),
        None => Ok(text),
    }
}
