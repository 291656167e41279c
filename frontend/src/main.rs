use yew::prelude::*;

use survey_analytics_frontend::components::home::Home;
use survey_analytics_frontend::components::link::Link;
use survey_analytics_frontend::components::survey_view::SurveyView;
use survey_analytics_frontend::config::AppConfig;
use survey_analytics_frontend::hooks::use_route::use_route;
use survey_analytics_frontend::hooks::use_surveys::use_surveys;
use survey_analytics_frontend::router::Route;
use survey_analytics_frontend::services::api::ApiClient;
use survey_analytics_frontend::services::logging;

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());
    let surveys = use_surveys(&api_client);
    let route = use_route();

    let state = surveys.state;
    let actions = surveys.actions;

    html! {
        <main class="container">
            {match route {
                Some(Route::Home) => html! {
                    <Home {state} {actions} />
                },
                Some(Route::Survey { survey_id }) => html! {
                    <SurveyView {survey_id} {state} {actions} />
                },
                None => html! {
                    <div class="not-found">
                        <h1>{"Page not found"}</h1>
                        <Link to={Route::Home}>{"Back to surveys"}</Link>
                    </div>
                },
            }}
        </main>
    }
}

fn main() {
    let config = AppConfig::from_build_env();
    logging::init(config.log_level);
    logging::Logger::info_with_component(
        "app",
        &format!("survey dashboard starting, api at {}", config.api_base_url),
    );

    yew::Renderer::<App>::new().render();
}
