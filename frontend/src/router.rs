use gloo::history::{BrowserHistory, History};
use shared::SurveyId;

use crate::services::logging::Logger;

/// Views reachable by URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Home,
    /// `/survey/:surveyId`
    Survey { survey_id: SurveyId },
}

impl Route {
    /// Match a location path against the route table.
    ///
    /// A single trailing slash is ignored. Paths that match no route yield `None`.
    pub fn recognize(path: &str) -> Option<Route> {
        let path = path.strip_suffix('/').unwrap_or(path);
        if path.is_empty() {
            return Some(Route::Home);
        }

        let mut segments = path.strip_prefix('/')?.split('/');
        match (segments.next(), segments.next(), segments.next()) {
            (Some("survey"), Some(survey_id), None) if !survey_id.is_empty() => {
                Some(Route::Survey {
                    survey_id: survey_id.to_string(),
                })
            }
            _ => None,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Survey { survey_id } => format!("/survey/{}", survey_id),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Survey { .. } => "SurveyView",
        }
    }
}

/// Push a route onto the browser history; `use_route` subscribers re-render
pub fn navigate(route: &Route) {
    Logger::debug_with_component(
        "router",
        &format!("navigating to {} ({})", route.name(), route.to_path()),
    );
    BrowserHistory::new().push(route.to_path());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_home() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize(""), Some(Route::Home));
    }

    #[test]
    fn test_survey_route_passes_id() {
        assert_eq!(
            Route::recognize("/survey/42"),
            Some(Route::Survey {
                survey_id: "42".to_string()
            })
        );
        assert_eq!(
            Route::recognize("/survey/abc-123/"),
            Some(Route::Survey {
                survey_id: "abc-123".to_string()
            })
        );
    }

    #[test]
    fn test_unknown_paths_match_nothing() {
        for path in [
            "/survey",
            "/survey/",
            "/survey/42/questions",
            "/surveys/42",
            "/home",
            "survey/42",
            "/#/survey/42",
        ] {
            assert_eq!(Route::recognize(path), None, "path {path}");
        }
    }

    #[test]
    fn test_to_path_round_trips() {
        let route = Route::Survey {
            survey_id: "42".to_string(),
        };
        assert_eq!(route.to_path(), "/survey/42");
        assert_eq!(Route::recognize(&route.to_path()), Some(route));
        assert_eq!(Route::recognize(&Route::Home.to_path()), Some(Route::Home));
    }

    #[test]
    fn test_route_names() {
        assert_eq!(Route::Home.name(), "Home");
        assert_eq!(
            Route::Survey {
                survey_id: "1".to_string()
            }
            .name(),
            "SurveyView"
        );
    }
}
