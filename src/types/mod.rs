pub mod merge_summary;
pub mod question_record;
