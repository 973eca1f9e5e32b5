use crate::auth::use_auth;
use crate::components::status_card::StatusCard;
use crate::routes::Route;
use access::NavIcon;
use dioxus::prelude::*;

/// Shown when the signed-in role may not open the requested location.
#[component]
pub fn Unauthorized(from: Option<String>) -> Element {
    let auth = use_auth();
    let role = auth
        .role()
        .map(|role| role.label())
        .unwrap_or("Signed out");

    rsx! {
        div { class: "status-page",
            StatusCard {
                code: "403",
                title: "Access Denied",
                icon: NavIcon::Shield,
                location: from,
                p { "Your role ({role}) does not include this section. Ask an administrator if you need access." }
                Link { to: Route::Dashboard {}, class: "status-card-link", "Back to Dashboard" }
            }
        }
    }
}
