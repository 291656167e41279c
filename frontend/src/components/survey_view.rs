use yew::prelude::*;

use super::link::Link;
use crate::hooks::use_surveys::UseSurveysActions;
use crate::router::Route;
use crate::store::{StoreOperation, SurveysState};

#[derive(Properties, PartialEq)]
pub struct SurveyViewProps {
    pub survey_id: String,
    pub state: SurveysState,
    pub actions: UseSurveysActions,
}

#[function_component(SurveyView)]
pub fn survey_view(props: &SurveyViewProps) -> Html {
    // Reload whenever the route points at a different survey
    use_effect_with(props.survey_id.clone(), {
        let load_questions = props.actions.load_questions.clone();
        move |survey_id: &String| {
            load_questions.emit(survey_id.clone());
            || ()
        }
    });

    let status = props
        .state
        .status(&StoreOperation::FetchSurveyQuestions(props.survey_id.clone()));
    let questions = props.state.questions_for(&props.survey_id);

    html! {
        <section class="survey-view">
            <Link to={Route::Home} class="back-link">{"← All surveys"}</Link>
            <h1>{format!("Survey {}", props.survey_id)}</h1>
            {if status.loading {
                html! { <p class="loading">{"Loading questions..."}</p> }
            } else if let Some(error) = &status.error {
                html! { <p class="error">{format!("Could not load questions: {}", error)}</p> }
            } else {
                html! {}
            }}
            {match questions {
                Some([]) => html! { <p class="empty">{"This survey has no questions."}</p> },
                Some(questions) => html! {
                    <table class="question-table">
                        <thead>
                            <tr>
                                <th>{"Name"}</th>
                                <th>{"Question"}</th>
                                <th>{"Type"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for questions.iter().map(|question| html! {
                                <tr key={question.id.clone()}>
                                    <td>{&question.name}</td>
                                    <td>{&question.text}</td>
                                    <td class={if question.question_type.is_choice() { "choice" } else { "text" }}>
                                        {question.question_type.as_str()}
                                    </td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                },
                None => html! {},
            }}
        </section>
    }
}
