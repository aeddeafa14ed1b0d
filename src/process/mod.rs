pub mod merge_question_files;
