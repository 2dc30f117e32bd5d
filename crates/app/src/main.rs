use dioxus::prelude::*;

mod auth;
mod routes;
use auth::{restore_session, AuthState, SessionContext};
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(client::config::load_config);

    use_context_provider(|| config.features.clone());
    let session = use_context_provider(|| SessionContext::open(config));
    let auth = use_context_provider(AuthState::new);

    use_hook(move || restore_session(session, auth));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
