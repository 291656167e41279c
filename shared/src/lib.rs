use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Opaque survey identifier as issued by the backend
pub type SurveyId = String;

/// A survey tracked by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Survey {
    /// Backend identifier; numeric ids are kept as their decimal string
    #[serde(deserialize_with = "string_or_number")]
    pub id: SurveyId,
    /// Display name, when the backend provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Survey {
    /// Name to show in lists, falling back to the id
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// Kind of answer a question expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QuestionType {
    /// Free text answer
    Text,
    /// Exactly one answer option
    Single,
    /// Any number of answer options
    Multiple,
}

impl QuestionType {
    /// Whether answers are recorded as answer option codes
    pub fn is_choice(&self) -> bool {
        matches!(self, QuestionType::Single | QuestionType::Multiple)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Text => "TEXT",
            QuestionType::Single => "SINGLE",
            QuestionType::Multiple => "MULTIPLE",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A question belonging to a survey
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub survey_id: SurveyId,
    /// Short variable-style name (e.g. "Q1")
    pub name: String,
    /// Full question wording
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
}

/// One selectable value for a choice question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: String,
    pub question_id: String,
    /// Numeric code recorded in responses
    pub code: i64,
    /// Human-readable label for the code
    pub label: String,
}

/// Answer options grouped by question id, each group ordered by code
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerOptionsByQuestion(pub HashMap<String, Vec<AnswerOption>>);

impl AnswerOptionsByQuestion {
    pub fn options_for(&self, question_id: &str) -> &[AnswerOption] {
        self.0.get(question_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Label for a recorded code, used for tooltips
    pub fn label_for(&self, question_id: &str, code: i64) -> Option<&str> {
        self.options_for(question_id)
            .iter()
            .find(|option| option.code == code)
            .map(|option| option.label.as_str())
    }
}

/// Request body naming a subset of a survey's questions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionSelection {
    pub survey_id: SurveyId,
    pub question_ids: Vec<String>,
}

impl QuestionSelection {
    pub fn new(survey_id: &str, question_ids: &[String]) -> Self {
        Self {
            survey_id: survey_id.to_string(),
            question_ids: question_ids.to_vec(),
        }
    }
}

/// Body of `POST /surveys/validate-questions`
pub type ValidateQuestionsRequest = QuestionSelection;

/// Body of `POST /surveys/responses`
pub type GetResponsesRequest = QuestionSelection;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidateQuestionsResponse {
    pub valid: bool,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Recorded answer: free text, or the ordered codes of chosen options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseValue {
    Text(String),
    Codes(Vec<i64>),
}

impl ResponseValue {
    /// The backend fills unanswered questions with `""` or `[]`
    pub fn is_empty(&self) -> bool {
        match self {
            ResponseValue::Text(text) => text.is_empty(),
            ResponseValue::Codes(codes) => codes.is_empty(),
        }
    }
}

/// One respondent's answer to one question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseData {
    pub question_id: String,
    pub question_name: String,
    pub question_type: QuestionType,
    pub value: ResponseValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RespondentResponseData {
    pub respondent_id: String,
    pub responses: Vec<ResponseData>,
}

impl RespondentResponseData {
    pub fn response_for(&self, question_id: &str) -> Option<&ResponseData> {
        self.responses.iter().find(|r| r.question_id == question_id)
    }
}

/// Body returned by both response endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetResponsesResponse {
    pub respondents: Vec<RespondentResponseData>,
}

impl GetResponsesResponse {
    pub fn respondent_count(&self) -> usize {
        self.respondents.len()
    }
}

/// Comma-joined question ids as used in the answer options path
pub fn join_question_ids(question_ids: &[String]) -> String {
    question_ids.join(",")
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Int(n) => n.to_string(),
        RawId::Float(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_survey_accepts_numeric_and_string_ids() {
        let surveys: Vec<Survey> = serde_json::from_value(json!([
            {"id": 1, "name": "Q1"},
            {"id": "survey-2"}
        ]))
        .unwrap();

        assert_eq!(surveys[0].id, "1");
        assert_eq!(surveys[0].display_name(), "Q1");
        assert_eq!(surveys[1].id, "survey-2");
        assert_eq!(surveys[1].name, None);
        assert_eq!(surveys[1].display_name(), "survey-2");
    }

    #[test]
    fn test_survey_ignores_unknown_fields() {
        let survey: Survey =
            serde_json::from_value(json!({"id": "s1", "created_at": "2024-01-01"})).unwrap();
        assert_eq!(survey.id, "s1");
    }

    #[test]
    fn test_question_type_field_name() {
        let question: Question = serde_json::from_value(json!({
            "id": "q1",
            "survey_id": "s1",
            "name": "Q1",
            "text": "How satisfied are you?",
            "type": "SINGLE"
        }))
        .unwrap();

        assert_eq!(question.question_type, QuestionType::Single);
        assert!(question.question_type.is_choice());
        assert!(!QuestionType::Text.is_choice());
        assert_eq!(QuestionType::Multiple.to_string(), "MULTIPLE");
    }

    #[test]
    fn test_unknown_question_type_is_rejected() {
        let result: Result<Question, _> = serde_json::from_value(json!({
            "id": "q1",
            "survey_id": "s1",
            "name": "Q1",
            "text": "?",
            "type": "RATING"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_question_selection_wire_format() {
        let ids = vec!["q1".to_string(), "q2".to_string()];
        let body = serde_json::to_value(QuestionSelection::new("s1", &ids)).unwrap();
        assert_eq!(body, json!({"survey_id": "s1", "question_ids": ["q1", "q2"]}));
    }

    #[test]
    fn test_validate_response_errors_default_to_empty() {
        let response: ValidateQuestionsResponse =
            serde_json::from_value(json!({"valid": true})).unwrap();
        assert!(response.valid);
        assert!(response.errors.is_empty());
    }

    #[test]
    fn test_response_values_decode_text_and_codes() {
        let response: GetResponsesResponse = serde_json::from_value(json!({
            "respondents": [{
                "respondent_id": "r1",
                "responses": [
                    {"question_id": "q1", "question_name": "Q1", "question_type": "TEXT", "value": "great"},
                    {"question_id": "q2", "question_name": "Q2", "question_type": "MULTIPLE", "value": [3, 1]},
                    {"question_id": "q3", "question_name": "Q3", "question_type": "SINGLE", "value": []}
                ]
            }]
        }))
        .unwrap();

        assert_eq!(response.respondent_count(), 1);
        let respondent = &response.respondents[0];
        assert_eq!(
            respondent.response_for("q1").unwrap().value,
            ResponseValue::Text("great".to_string())
        );
        assert_eq!(
            respondent.response_for("q2").unwrap().value,
            ResponseValue::Codes(vec![3, 1])
        );
        assert!(respondent.response_for("q3").unwrap().value.is_empty());
        assert!(respondent.response_for("missing").is_none());
    }

    #[test]
    fn test_answer_options_lookup() {
        let options: AnswerOptionsByQuestion = serde_json::from_value(json!({
            "q1": [
                {"id": "a1", "question_id": "q1", "code": 1, "label": "Yes"},
                {"id": "a2", "question_id": "q1", "code": 2, "label": "No"}
            ]
        }))
        .unwrap();

        assert_eq!(options.options_for("q1").len(), 2);
        assert_eq!(options.label_for("q1", 2), Some("No"));
        assert_eq!(options.label_for("q1", 9), None);
        assert!(options.options_for("q2").is_empty());
    }

    #[test]
    fn test_join_question_ids() {
        let ids = vec!["q1".to_string(), "q2".to_string(), "q3".to_string()];
        assert_eq!(join_question_ids(&ids), "q1,q2,q3");
        assert_eq!(join_question_ids(&[]), "");
    }
}
