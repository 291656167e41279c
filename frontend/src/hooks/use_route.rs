use gloo::history::{BrowserHistory, History};
use yew::prelude::*;

use crate::router::Route;

fn current_path() -> String {
    BrowserHistory::new().location().path().to_string()
}

/// Current route, re-evaluated whenever the browser history changes
#[hook]
pub fn use_route() -> Option<Route> {
    let path = use_state(current_path);

    {
        let path = path.clone();
        use_effect_with((), move |_| {
            let listener = BrowserHistory::new().listen(move || path.set(current_path()));
            move || drop(listener)
        });
    }

    Route::recognize(&path)
}
