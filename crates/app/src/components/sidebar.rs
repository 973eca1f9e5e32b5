use crate::components::icons::NavIconView;
use crate::routes::Route;
use access::{compute_visibility, nav, ExpansionState, VisibleNode};
use dioxus::prelude::*;
use shared_types::Role;

/// Link to a path from the navigation tree. Paths the router knows become
/// client-side links; anything else is a plain anchor.
#[component]
pub fn NavLink(path: String, #[props(default, into)] class: String, children: Element) -> Element {
    match path.parse::<Route>() {
        Ok(route) => rsx! {
            Link { to: route, class, {children} }
        },
        Err(_) => rsx! {
            a { href: "{path}", class, {children} }
        },
    }
}

/// Role-filtered sidebar. Sections containing the current location open on
/// navigation; the user may collapse them again until the location changes.
#[component]
pub fn Sidebar(role: Role, location: String) -> Element {
    let visibility = compute_visibility(nav::roots(), role, &location);

    let mut expansion = use_signal(|| {
        let mut state = ExpansionState::new();
        state.sync(&visibility, &location);
        state
    });

    use_effect(use_reactive((&location, &role), move |(location, role)| {
        let visibility = compute_visibility(nav::roots(), role, &location);
        expansion.write().sync(&visibility, &location);
    }));

    rsx! {
        aside { class: "sidebar",
            div { class: "sidebar-brand",
                span { class: "sidebar-brand-name", "Back Office" }
            }
            nav { class: "sidebar-content",
                ul { class: "sidebar-menu",
                    for node in visibility.nodes {
                        NavEntry { key: "{node.name}", node, location: location.clone(), expansion }
                    }
                }
            }
        }
    }
}

#[component]
fn NavEntry(node: VisibleNode, location: String, expansion: Signal<ExpansionState>) -> Element {
    let mut expansion = expansion;

    if node.is_branch {
        let open = expansion.read().is_open(&node.name);
        let name = node.name.clone();
        let overview_active = node.prefix.as_deref() == Some(location.as_str());
        return rsx! {
            li { class: "sidebar-item sidebar-branch",
                button {
                    class: if node.active { "sidebar-button active" } else { "sidebar-button" },
                    r#type: "button",
                    aria_expanded: "{open}",
                    onclick: move |_| {
                        expansion.write().toggle(&name);
                    },
                    NavIconView { icon: node.icon }
                    span { class: "sidebar-label", "{node.name}" }
                    span { class: "sidebar-chevron", if open { "▾" } else { "▸" } }
                }
                if open {
                    ul { class: "sidebar-submenu",
                        if let Some(prefix) = node.prefix.clone() {
                            li { class: "sidebar-item",
                                NavLink {
                                    path: prefix,
                                    class: if overview_active { "sidebar-button active" } else { "sidebar-button" },
                                    span { class: "sidebar-label", "Overview" }
                                }
                            }
                        }
                        for child in node.children.clone() {
                            NavEntry { key: "{child.name}", node: child, location: location.clone(), expansion }
                        }
                    }
                }
            }
        };
    }

    let class = if node.active { "sidebar-button active" } else { "sidebar-button" };
    match node.path.clone() {
        Some(path) => rsx! {
            li { class: "sidebar-item",
                NavLink { path, class,
                    NavIconView { icon: node.icon }
                    span { class: "sidebar-label", "{node.name}" }
                }
            }
        },
        None => rsx! {
            li { class: "sidebar-item sidebar-inert",
                NavIconView { icon: node.icon }
                span { class: "sidebar-label", "{node.name}" }
            }
        },
    }
}
