use serde_json::Value;

#[derive(Debug, PartialEq, Eq)]
pub struct QuestionRecord {
    pub question: String,
    pub answer: String,
    pub tag: String,
}

impl QuestionRecord {
    // Absent keys, non-object entries and non-string values all read as
    // empty text. The tag is kept verbatim; question and answer are trimmed.
    pub fn from_value(value: &Value) -> Self {
        QuestionRecord {
            question: text_field(value, "q").trim().to_string(),
            answer: text_field(value, "a").trim().to_string(),
            tag: text_field(value, "tag").to_string(),
        }
    }

    pub fn has_question(&self) -> bool {
        !self.question.is_empty()
    }
}

fn text_field<'a>(value: &'a Value, key: &str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn given_all_fields_then_question_and_answer_are_trimmed() {
        let record = QuestionRecord::from_value(&json!({
            "q": "  What is overfitting?  ",
            "a": "\tMemorizing noise instead of signal.\n",
            "tag": "basics"
        }));

        assert_eq!(
            record,
            QuestionRecord {
                question: "What is overfitting?".to_string(),
                answer: "Memorizing noise instead of signal.".to_string(),
                tag: "basics".to_string(),
            }
        );
        assert!(record.has_question());
    }

    #[test]
    fn given_missing_keys_then_fields_default_to_empty() {
        let record = QuestionRecord::from_value(&json!({"q": "What is X?"}));

        assert_eq!(record.question, "What is X?");
        assert_eq!(record.answer, "");
        assert_eq!(record.tag, "");
    }

    #[test]
    fn given_non_string_values_then_fields_read_as_empty() {
        let record = QuestionRecord::from_value(&json!({
            "q": 42,
            "a": ["not", "text"],
            "tag": null
        }));

        assert_eq!(
            record,
            QuestionRecord {
                question: String::new(),
                answer: String::new(),
                tag: String::new(),
            }
        );
        assert!(!record.has_question());
    }

    #[test]
    fn given_non_object_entry_then_record_is_blank() {
        let record = QuestionRecord::from_value(&json!("just a string"));

        assert!(!record.has_question());
    }

    #[test]
    fn given_whitespace_question_then_has_question_is_false() {
        let record = QuestionRecord::from_value(&json!({"q": "   ", "a": "ignored"}));

        assert!(!record.has_question());
    }

    #[test]
    fn given_whitespace_tag_then_tag_is_preserved_verbatim() {
        let record = QuestionRecord::from_value(&json!({"q": "Q", "tag": "  "}));

        assert_eq!(record.tag, "  ");
    }
}
