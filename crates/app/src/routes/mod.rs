pub mod dashboard;
pub mod hub;
pub mod login;
pub mod not_found;
pub mod section;
pub mod settings;
pub mod unauthorized;

use crate::auth::use_auth;
use crate::components::sidebar::Sidebar;
use access::{evaluate, nav, required_roles, RouteGuardDecision};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdLock;
use dioxus_free_icons::Icon;

use dashboard::Dashboard;
use hub::{ClientsHub, CrmHub, EmployeesHub, FinanceHub, PropertiesHub, UsersHub};
use login::Login;
use not_found::NotFound;
use section::Section;
use settings::Settings;
use unauthorized::Unauthorized;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login?:redirect")]
    Login { redirect: Option<String> },
    #[route("/unauthorized?:from")]
    Unauthorized { from: Option<String> },
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/")]
    Dashboard {},
    #[route("/clients")]
    ClientsHub {},
    #[route("/employees")]
    EmployeesHub {},
    #[route("/users")]
    UsersHub {},
    #[route("/properties")]
    PropertiesHub {},
    #[route("/finance")]
    FinanceHub {},
    #[route("/crm")]
    CrmHub {},
    #[route("/settings")]
    Settings {},
    #[route("/:hub/:page")]
    Section { hub: String, page: String },
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// Resolve an internal path, falling back to the dashboard. Never
    /// resolves back to the login page.
    pub fn internal_or_dashboard(path: &str) -> Route {
        match path.parse::<Route>() {
            Ok(Route::Login { .. }) | Err(_) => {
                tracing::warn!(path, "Ignoring unusable redirect target");
                Route::Dashboard {}
            }
            Ok(route) => route,
        }
    }
}

/// Auth guard layout: renders the outlet only once the session has settled
/// on an identity whose role the location permits.
#[component]
fn AuthGuard() -> Element {
    let auth = use_auth();
    let route: Route = use_route();
    let location = route.to_string();
    let snapshot = auth.snapshot.read().clone();
    let required = required_roles(nav::roots(), &location);

    match evaluate(&required, &snapshot, &location) {
        Some(RouteGuardDecision::Allow) => rsx! { Outlet::<Route> {} },
        Some(RouteGuardDecision::RedirectLogin { from }) => {
            tracing::debug!(%from, "Navigating to sign-in");
            navigator().replace(Route::Login { redirect: Some(from) });
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting to sign in..." }
                }
            }
        }
        Some(RouteGuardDecision::RedirectUnauthorized { from }) => {
            tracing::debug!(%from, "Navigating to unauthorized");
            navigator().replace(Route::Unauthorized { from: Some(from) });
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting..." }
                }
            }
        }
        None => rsx! {
            div { class: "auth-guard-loading",
                p { "Checking session..." }
            }
        },
    }
}

/// Main app layout with sidebar and top navbar.
#[component]
fn AppLayout() -> Element {
    let mut auth = use_auth();
    let route: Route = use_route();
    let snapshot = auth.snapshot.read().clone();

    let Some(identity) = snapshot.identity else {
        return rsx! {};
    };
    let user_id = identity.id.clone();

    let page_title = match &route {
        Route::Dashboard {} => nav::DASHBOARD.to_string(),
        Route::ClientsHub {} => nav::CLIENTS.to_string(),
        Route::EmployeesHub {} => nav::EMPLOYEES.to_string(),
        Route::UsersHub {} => nav::PLATFORM_USERS.to_string(),
        Route::PropertiesHub {} => nav::PROPERTIES.to_string(),
        Route::FinanceHub {} => nav::FINANCE.to_string(),
        Route::CrmHub {} => nav::CRM.to_string(),
        Route::Settings {} => nav::SETTINGS.to_string(),
        Route::Section { .. } => section::title_for(&route.to_string()),
        Route::Login { .. } | Route::Unauthorized { .. } | Route::NotFound { .. } => {
            String::new()
        }
    };

    rsx! {
        div { class: "app-shell",
            Sidebar { role: identity.role, location: route.to_string() }

            div { class: "app-main",
                header { class: "navbar",
                    h1 { class: "navbar-title", "{page_title}" }
                    div { class: "navbar-user",
                        if let Some(url) = identity.avatar_url.clone() {
                            img { class: "avatar", src: "{url}", alt: "{identity.display_name}" }
                        } else {
                            span { class: "avatar avatar-fallback", "{identity.initials()}" }
                        }
                        div { class: "navbar-user-text",
                            span { class: "navbar-user-name", "{identity.display_name}" }
                            span { class: "navbar-user-role", "{identity.role.label()}" }
                        }
                        button {
                            class: "navbar-signout",
                            r#type: "button",
                            onclick: move |_| {
                                tracing::info!(%user_id, "Sign-out requested from navbar");
                                auth.logout();
                                navigator().replace(Route::Login { redirect: None });
                            },
                            Icon::<LdLock> { icon: LdLock, width: 16, height: 16 }
                            "Sign out"
                        }
                    }
                }

                if let Some(notice) = snapshot.notice {
                    div { class: "notice-banner", "{notice.user_message()}" }
                }

                div { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
