use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::store::{SurveyStore, SurveysState};

pub struct UseSurveysResult {
    pub state: SurveysState,
    pub actions: UseSurveysActions,
}

#[derive(Clone, PartialEq)]
pub struct UseSurveysActions {
    pub refresh_surveys: Callback<()>,
    pub load_questions: Callback<String>,
}

#[hook]
pub fn use_surveys(api_client: &ApiClient) -> UseSurveysResult {
    let state = use_reducer(SurveysState::default);

    let refresh_surveys = {
        let api_client = api_client.clone();
        let dispatcher = state.dispatcher();

        use_callback((), move |_, _| {
            let dispatcher = dispatcher.clone();
            let store = SurveyStore::new(api_client.clone(), move |action| {
                dispatcher.dispatch(action)
            });

            spawn_local(async move {
                if let Some(surveys) = store.fetch_surveys().await {
                    Logger::debug_with_component(
                        "survey-store",
                        &format!("loaded {} surveys", surveys.len()),
                    );
                }
            });
        })
    };

    let load_questions = {
        let api_client = api_client.clone();
        let dispatcher = state.dispatcher();

        use_callback((), move |survey_id: String, _| {
            let dispatcher = dispatcher.clone();
            let store = SurveyStore::new(api_client.clone(), move |action| {
                dispatcher.dispatch(action)
            });

            spawn_local(async move {
                if let Ok(questions) = store.fetch_survey_questions(&survey_id).await {
                    Logger::debug_with_component(
                        "survey-store",
                        &format!("loaded {} questions for survey {}", questions.len(), survey_id),
                    );
                }
            });
        })
    };

    UseSurveysResult {
        state: (*state).clone(),
        actions: UseSurveysActions {
            refresh_surveys,
            load_questions,
        },
    }
}
