use dioxus::prelude::*;

mod auth;
mod components;
mod routes;
use auth::AuthState;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // Dioxus owns the tracing subscriber.
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let auth = use_context_provider(AuthState::new);
    use_hook(move || auth.start());

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
