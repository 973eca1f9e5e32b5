use crate::auth::use_auth;
use dioxus::prelude::*;

/// Account details for the signed-in user. Read-only: roles are managed in
/// the profile store.
#[component]
pub fn Settings() -> Element {
    let auth = use_auth();
    let Some(identity) = auth.current_identity() else {
        return rsx! {};
    };

    rsx! {
        div { class: "settings-page",
            section { class: "settings-section",
                h2 { "Profile" }
                dl { class: "settings-list",
                    dt { "Name" }
                    dd { "{identity.display_name}" }
                    dt { "Email" }
                    dd { "{identity.email}" }
                    dt { "Role" }
                    dd { "{identity.role.label()}" }
                    dt { "User ID" }
                    dd { code { "{identity.id}" } }
                }
            }
        }
    }
}
