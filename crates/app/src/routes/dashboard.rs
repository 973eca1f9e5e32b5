use crate::auth::use_auth;
use crate::components::icons::NavIconView;
use crate::components::sidebar::NavLink;
use access::{compute_visibility, nav};
use dioxus::prelude::*;

/// Landing page: a greeting and one card per section the role can reach.
#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let Some(identity) = auth.current_identity() else {
        return rsx! {};
    };
    let visibility = compute_visibility(nav::roots(), identity.role, "/");
    let sections: Vec<_> = visibility
        .nodes
        .into_iter()
        .filter(|node| node.is_branch)
        .collect();

    rsx! {
        div { class: "dashboard-page",
            h2 { class: "dashboard-greeting", "Welcome back, {identity.display_name}" }
            p { class: "dashboard-role", "Signed in as {identity.role.label()}" }
            div { class: "hub-grid",
                for section in sections {
                    div { key: "{section.name}", class: "hub-card",
                        NavIconView { icon: section.icon, size: 22 }
                        if let Some(prefix) = section.prefix.clone() {
                            NavLink { path: prefix,
                                span { class: "hub-card-title", "{section.name}" }
                            }
                        } else {
                            span { class: "hub-card-title", "{section.name}" }
                        }
                        span { class: "hub-card-count", "{section.children.len()} pages" }
                    }
                }
            }
        }
    }
}
