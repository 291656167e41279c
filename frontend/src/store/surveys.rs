use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use shared::{Question, Survey, SurveyId};
use yew::Reducible;

use crate::services::api::{RequestError, SurveyApi};
use crate::services::logging::Logger;

const COMPONENT: &str = "survey-store";

/// Store action a status slot belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StoreOperation {
    FetchSurveys,
    FetchSurveyQuestions(SurveyId),
}

/// Progress of one operation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchStatus {
    pub loading: bool,
    pub error: Option<String>,
}

/// Fetched survey data plus a status slot per operation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurveysState {
    pub surveys: Vec<Survey>,
    pub questions: HashMap<SurveyId, Vec<Question>>,
    // one slot per survey ever requested; slots are overwritten, never evicted
    statuses: BTreeMap<StoreOperation, FetchStatus>,
}

impl SurveysState {
    /// Status of an operation; operations never started report idle
    pub fn status(&self, operation: &StoreOperation) -> FetchStatus {
        self.statuses.get(operation).cloned().unwrap_or_default()
    }

    pub fn questions_for(&self, survey_id: &str) -> Option<&[Question]> {
        self.questions.get(survey_id).map(Vec::as_slice)
    }

    /// True while any operation is in flight
    pub fn is_loading(&self) -> bool {
        self.statuses.values().any(|status| status.loading)
    }

    /// First recorded error, `FetchSurveys` before any question slot
    pub fn first_error(&self) -> Option<&str> {
        self.statuses
            .values()
            .find_map(|status| status.error.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SurveysAction {
    Started(StoreOperation),
    SurveysLoaded(Vec<Survey>),
    QuestionsLoaded {
        survey_id: SurveyId,
        questions: Vec<Question>,
    },
    Failed {
        operation: StoreOperation,
        message: String,
    },
}

impl Reducible for SurveysState {
    type Action = SurveysAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            SurveysAction::Started(operation) => {
                next.statuses.insert(
                    operation,
                    FetchStatus {
                        loading: true,
                        error: None,
                    },
                );
            }
            SurveysAction::SurveysLoaded(surveys) => {
                next.surveys = surveys;
                next.statuses
                    .insert(StoreOperation::FetchSurveys, FetchStatus::default());
            }
            SurveysAction::QuestionsLoaded {
                survey_id,
                questions,
            } => {
                next.statuses.insert(
                    StoreOperation::FetchSurveyQuestions(survey_id.clone()),
                    FetchStatus::default(),
                );
                next.questions.insert(survey_id, questions);
            }
            SurveysAction::Failed { operation, message } => {
                next.statuses.insert(
                    operation,
                    FetchStatus {
                        loading: false,
                        error: Some(message),
                    },
                );
            }
        }

        Rc::new(next)
    }
}

/// Runs fetch actions against an API and reports state changes through `dispatch`
pub struct SurveyStore<A> {
    api: A,
    dispatch: Rc<dyn Fn(SurveysAction)>,
}

impl<A> Clone for SurveyStore<A>
where
    A: Clone,
{
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            dispatch: Rc::clone(&self.dispatch),
        }
    }
}

impl<A: SurveyApi> SurveyStore<A> {
    pub fn new(api: A, dispatch: impl Fn(SurveysAction) + 'static) -> Self {
        Self {
            api,
            dispatch: Rc::new(dispatch),
        }
    }

    /// Replace the survey list with the backend's.
    ///
    /// Failures are not returned: the list is left as it was and the error is
    /// recorded in the `FetchSurveys` slot. Returns the new list on success.
    pub async fn fetch_surveys(&self) -> Option<Vec<Survey>> {
        let operation = StoreOperation::FetchSurveys;
        (self.dispatch)(SurveysAction::Started(operation.clone()));

        match self.api.get_surveys().await {
            Ok(surveys) => {
                (self.dispatch)(SurveysAction::SurveysLoaded(surveys.clone()));
                Some(surveys)
            }
            Err(e) => {
                Logger::error_with_component(COMPONENT, &format!("Error fetching surveys: {}", e));
                (self.dispatch)(SurveysAction::Failed {
                    operation,
                    message: e.to_string(),
                });
                None
            }
        }
    }

    /// Fetch and cache the questions of one survey
    pub async fn fetch_survey_questions(
        &self,
        survey_id: &str,
    ) -> Result<Vec<Question>, RequestError> {
        let operation = StoreOperation::FetchSurveyQuestions(survey_id.to_string());
        (self.dispatch)(SurveysAction::Started(operation.clone()));

        match self.api.get_survey_questions(survey_id).await {
            Ok(questions) => {
                (self.dispatch)(SurveysAction::QuestionsLoaded {
                    survey_id: survey_id.to_string(),
                    questions: questions.clone(),
                });
                Ok(questions)
            }
            Err(e) => {
                Logger::error_with_component(
                    COMPONENT,
                    &format!("Error fetching questions for survey {}: {}", survey_id, e),
                );
                (self.dispatch)(SurveysAction::Failed {
                    operation,
                    message: e.to_string(),
                });
                Err(e)
            }
        }
    }
}
