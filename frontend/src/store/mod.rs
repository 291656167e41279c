pub mod surveys;

pub use surveys::{FetchStatus, StoreOperation, SurveyStore, SurveysAction, SurveysState};
