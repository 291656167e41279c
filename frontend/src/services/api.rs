use async_trait::async_trait;
use gloo::net::http::Request;
use serde::de::DeserializeOwned;
use shared::{
    join_question_ids, AnswerOption, AnswerOptionsByQuestion, GetResponsesResponse, Question,
    QuestionSelection, Survey, ValidateQuestionsResponse,
};
use std::fmt;
use thiserror::Error;

use crate::config::AppConfig;
use crate::services::logging::Logger;

/// Failure of a single API call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to serialize request: {0}")]
    Serialize(String),

    #[error("Server error {status}: {message}")]
    Status { status: u16, message: String },

    /// The server answered 2xx but the body does not match the expected shape
    #[error("Failed to parse response: {0}")]
    Schema(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
        }
    }
}

/// A backend endpoint together with its request body
#[derive(Debug, Clone, PartialEq)]
pub enum Endpoint {
    ListSurveys,
    SurveyQuestions { survey_id: String },
    ValidateQuestions(QuestionSelection),
    Responses(QuestionSelection),
    AllResponses { survey_id: String },
    AnswerOptions { question_ids: Vec<String> },
    QuestionAnswerOptions { question_id: String },
}

impl Endpoint {
    pub fn method(&self) -> HttpMethod {
        match self {
            Endpoint::ValidateQuestions(_) | Endpoint::Responses(_) => HttpMethod::Post,
            _ => HttpMethod::Get,
        }
    }

    /// Path relative to the API base URL
    pub fn path(&self) -> String {
        match self {
            Endpoint::ListSurveys => "/surveys/".to_string(),
            Endpoint::SurveyQuestions { survey_id } => format!("/surveys/{}/questions", survey_id),
            Endpoint::ValidateQuestions(_) => "/surveys/validate-questions".to_string(),
            Endpoint::Responses(_) => "/surveys/responses".to_string(),
            Endpoint::AllResponses { survey_id } => {
                format!("/surveys/{}/all-responses", survey_id)
            }
            Endpoint::AnswerOptions { question_ids } => {
                format!("/answer-options/questions/{}", join_question_ids(question_ids))
            }
            Endpoint::QuestionAnswerOptions { question_id } => {
                format!("/answer-options/question/{}", question_id)
            }
        }
    }

    pub fn body(&self) -> Option<&QuestionSelection> {
        match self {
            Endpoint::ValidateQuestions(selection) | Endpoint::Responses(selection) => {
                Some(selection)
            }
            _ => None,
        }
    }
}

/// Classify a finished HTTP exchange and decode its JSON body
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, RequestError> {
    if !(200..300).contains(&status) {
        return Err(RequestError::Status {
            status,
            message: error_detail(body),
        });
    }

    serde_json::from_str(body).map_err(|e| RequestError::Schema(e.to_string()))
}

/// Extract the backend's `detail` message, falling back to the raw body
fn error_detail(body: &str) -> String {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| match value.get("detail") {
            Some(serde_json::Value::String(detail)) => Some(detail.clone()),
            Some(other) => Some(other.to_string()),
            None => None,
        });

    match detail {
        Some(detail) if !detail.trim().is_empty() => detail,
        _ if !body.trim().is_empty() => body.trim().to_string(),
        _ => "empty response body".to_string(),
    }
}

/// Operations the survey backend offers
#[async_trait(?Send)]
pub trait SurveyApi {
    async fn get_surveys(&self) -> Result<Vec<Survey>, RequestError>;

    async fn get_survey_questions(&self, survey_id: &str) -> Result<Vec<Question>, RequestError>;

    async fn validate_questions(
        &self,
        survey_id: &str,
        question_ids: &[String],
    ) -> Result<ValidateQuestionsResponse, RequestError>;

    async fn get_responses(
        &self,
        survey_id: &str,
        question_ids: &[String],
    ) -> Result<GetResponsesResponse, RequestError>;

    async fn get_all_responses(&self, survey_id: &str)
        -> Result<GetResponsesResponse, RequestError>;

    async fn get_answer_options(
        &self,
        question_ids: &[String],
    ) -> Result<AnswerOptionsByQuestion, RequestError>;

    async fn get_question_answer_options(
        &self,
        question_id: &str,
    ) -> Result<Vec<AnswerOption>, RequestError>;
}

/// API client for communicating with the survey backend
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client using the configured base URL
    pub fn new() -> Self {
        Self::with_base_url(AppConfig::from_build_env().api_base_url)
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url_for(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    async fn send<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, RequestError> {
        let url = self.url_for(&endpoint);
        let method = endpoint.method();
        Logger::debug_with_component("api", &format!("{} {}", method, url));

        let builder = match method {
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Get => Request::get(&url),
        }
        .header("Accept", "application/json");

        let request = match endpoint.body() {
            Some(body) => builder
                .json(body)
                .map_err(|e| RequestError::Serialize(e.to_string()))?,
            None => builder
                .build()
                .map_err(|e| RequestError::Network(e.to_string()))?,
        };

        let response = request
            .send()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;

        decode_response(status, &body)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl SurveyApi for ApiClient {
    async fn get_surveys(&self) -> Result<Vec<Survey>, RequestError> {
        self.send(Endpoint::ListSurveys).await
    }

    async fn get_survey_questions(&self, survey_id: &str) -> Result<Vec<Question>, RequestError> {
        self.send(Endpoint::SurveyQuestions {
            survey_id: survey_id.to_string(),
        })
        .await
    }

    async fn validate_questions(
        &self,
        survey_id: &str,
        question_ids: &[String],
    ) -> Result<ValidateQuestionsResponse, RequestError> {
        self.send(Endpoint::ValidateQuestions(QuestionSelection::new(
            survey_id,
            question_ids,
        )))
        .await
    }

    async fn get_responses(
        &self,
        survey_id: &str,
        question_ids: &[String],
    ) -> Result<GetResponsesResponse, RequestError> {
        self.send(Endpoint::Responses(QuestionSelection::new(
            survey_id,
            question_ids,
        )))
        .await
    }

    async fn get_all_responses(
        &self,
        survey_id: &str,
    ) -> Result<GetResponsesResponse, RequestError> {
        self.send(Endpoint::AllResponses {
            survey_id: survey_id.to_string(),
        })
        .await
    }

    async fn get_answer_options(
        &self,
        question_ids: &[String],
    ) -> Result<AnswerOptionsByQuestion, RequestError> {
        self.send(Endpoint::AnswerOptions {
            question_ids: question_ids.to_vec(),
        })
        .await
    }

    async fn get_question_answer_options(
        &self,
        question_id: &str,
    ) -> Result<Vec<AnswerOption>, RequestError> {
        self.send(Endpoint::QuestionAnswerOptions {
            question_id: question_id.to_string(),
        })
        .await
    }
}
