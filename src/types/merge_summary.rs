#[derive(Debug, Default, PartialEq, Eq)]
pub struct MergeSummary {
    pub files_written: usize,
    pub records_written: usize,
}
