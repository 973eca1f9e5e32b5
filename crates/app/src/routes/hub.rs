use crate::auth::use_role;
use crate::components::icons::NavIconView;
use crate::components::sidebar::NavLink;
use access::{hub_entries, nav, VisibleNode};
use dioxus::prelude::*;

/// Landing page of a top-level section: the child pages the current role
/// may open.
#[component]
fn HubPage(hub: &'static str, description: &'static str) -> Element {
    let entries: Vec<VisibleNode> = use_role()
        .map(|role| hub_entries(nav::roots(), role, hub))
        .unwrap_or_default();

    rsx! {
        div { class: "hub-page",
            p { class: "hub-description", "{description}" }
            if entries.is_empty() {
                p { class: "hub-empty", "Nothing in {hub} is available to your role." }
            }
            div { class: "hub-grid",
                for entry in entries {
                    HubCard { key: "{entry.name}", entry }
                }
            }
        }
    }
}

#[component]
fn HubCard(entry: VisibleNode) -> Element {
    let Some(path) = entry.path.clone() else {
        return rsx! {
            div { class: "hub-card hub-card-inert",
                NavIconView { icon: entry.icon, size: 22 }
                span { "{entry.name}" }
            }
        };
    };

    rsx! {
        NavLink { path,
            div { class: "hub-card",
                NavIconView { icon: entry.icon, size: 22 }
                span { class: "hub-card-title", "{entry.name}" }
            }
        }
    }
}

#[component]
pub fn ClientsHub() -> Element {
    rsx! { HubPage { hub: nav::CLIENTS, description: "Client accounts and onboarding." } }
}

#[component]
pub fn EmployeesHub() -> Element {
    rsx! { HubPage { hub: nav::EMPLOYEES, description: "Staff directory and attendance." } }
}

#[component]
pub fn UsersHub() -> Element {
    rsx! { HubPage { hub: nav::PLATFORM_USERS, description: "Platform accounts and role assignments." } }
}

#[component]
pub fn PropertiesHub() -> Element {
    rsx! { HubPage { hub: nav::PROPERTIES, description: "Listings and verification." } }
}

#[component]
pub fn FinanceHub() -> Element {
    rsx! { HubPage { hub: nav::FINANCE, description: "Invoices, payments and reports." } }
}

#[component]
pub fn CrmHub() -> Element {
    rsx! { HubPage { hub: nav::CRM, description: "Leads and follow-ups." } }
}
