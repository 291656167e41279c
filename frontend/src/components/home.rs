use yew::prelude::*;

use super::link::Link;
use crate::hooks::use_surveys::UseSurveysActions;
use crate::router::Route;
use crate::store::{StoreOperation, SurveysState};

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub state: SurveysState,
    pub actions: UseSurveysActions,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    // Fetch surveys on mount
    use_effect_with((), {
        let refresh_surveys = props.actions.refresh_surveys.clone();
        move |_| {
            refresh_surveys.emit(());
            || ()
        }
    });

    let status = props.state.status(&StoreOperation::FetchSurveys);
    let on_retry = {
        let refresh_surveys = props.actions.refresh_surveys.clone();
        Callback::from(move |_: MouseEvent| refresh_surveys.emit(()))
    };

    html! {
        <section class="home">
            <h1>{"Surveys"}</h1>
            {if status.loading {
                html! { <p class="loading">{"Loading surveys..."}</p> }
            } else if let Some(error) = &status.error {
                html! {
                    <div class="error">
                        <p>{format!("Could not load surveys: {}", error)}</p>
                        <button onclick={on_retry}>{"Retry"}</button>
                    </div>
                }
            } else if props.state.surveys.is_empty() {
                html! { <p class="empty">{"No surveys available."}</p> }
            } else {
                html! {}
            }}
            <ul class="survey-list">
                {for props.state.surveys.iter().map(|survey| {
                    let to = Route::Survey { survey_id: survey.id.clone() };
                    html! {
                        <li key={survey.id.clone()}>
                            <Link {to} class="survey-link">{survey.display_name().to_string()}</Link>
                        </li>
                    }
                })}
            </ul>
        </section>
    }
}
