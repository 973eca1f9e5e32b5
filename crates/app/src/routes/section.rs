use crate::components::icons::NavIconView;
use crate::components::status_card::StatusCard;
use access::nav::{self, NavigationNode, NodeKind};
use access::NavIcon;
use dioxus::prelude::*;

/// Find the leaf registered for `location`, with the name of the section
/// that contains it.
fn lookup<'a>(
    nodes: &'a [NavigationNode],
    parent: Option<&'a str>,
    location: &str,
) -> Option<(Option<&'a str>, &'a NavigationNode)> {
    nodes.iter().find_map(|node| match &node.kind {
        NodeKind::Leaf { path } if path == location => Some((parent, node)),
        NodeKind::Branch { children, .. } => lookup(children, Some(node.name.as_str()), location),
        _ => None,
    })
}

/// Navbar title for a section page.
pub fn title_for(location: &str) -> String {
    match lookup(nav::roots(), None, location) {
        Some((Some(section), leaf)) => format!("{section} / {}", leaf.name),
        Some((None, leaf)) => leaf.name.clone(),
        None => "Not Found".to_string(),
    }
}

/// Body of a registered section page. The route guard has already checked
/// the role; unregistered pairs render a not-found message.
#[component]
pub fn Section(hub: String, page: String) -> Element {
    let location = format!("/{hub}/{page}");
    let Some((section, leaf)) = lookup(nav::roots(), None, &location) else {
        return rsx! {
            StatusCard {
                code: "404",
                title: "Page Not Found",
                icon: NavIcon::Search,
                location: Some(location),
                p { "This section has no page by that name." }
            }
        };
    };
    let icon: NavIcon = leaf.icon;
    let section = section.unwrap_or_default();

    rsx! {
        div { class: "section-page",
            div { class: "section-header",
                NavIconView { icon, size: 24 }
                div {
                    h2 { class: "section-title", "{leaf.name}" }
                    p { class: "section-breadcrumb", "{section}" }
                }
            }
            div { class: "section-empty",
                p { "No records yet." }
            }
        }
    }
}
