use crate::components::icons::NavIconView;
use access::NavIcon;
use dioxus::prelude::*;

/// Centered card for pages that stand in for content the user cannot reach:
/// unknown locations, denied sections, unregistered section pages.
#[component]
pub fn StatusCard(
    code: &'static str,
    title: &'static str,
    #[props(default)] icon: NavIcon,
    #[props(!optional)] location: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "status-card",
            div { class: "status-card-header",
                NavIconView { icon, size: 28 }
                span { class: "status-card-code", "{code}" }
            }
            h2 { class: "status-card-title", "{title}" }
            if let Some(location) = location {
                p { class: "status-card-location",
                    code { "{location}" }
                }
            }
            div { class: "status-card-body", {children} }
        }
    }
}
