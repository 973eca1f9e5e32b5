use crate::components::status_card::StatusCard;
use crate::routes::Route;
use access::NavIcon;
use dioxus::prelude::*;

/// Catch-all for locations outside the router. Reachable signed out, so it
/// sits outside the guarded layout and links back through the guard.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let location = format!("/{}", route.join("/"));
    tracing::debug!(%location, "No route for location");

    rsx! {
        div { class: "status-page",
            StatusCard {
                code: "404",
                title: "Page Not Found",
                icon: NavIcon::Search,
                location: Some(location),
                p { "There is no back-office page at this address." }
                Link { to: Route::Dashboard {}, class: "status-card-link", "Back to Dashboard" }
            }
        }
    }
}
