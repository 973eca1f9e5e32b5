use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::LoginRequest;

/// Email/password sign-in. Accepts an optional `redirect` query param: the
/// location the guard turned the user away from.
#[component]
pub fn Login(redirect: Option<String>) -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    // Store redirect in a signal so closures can read it without moving ownership
    let redirect_target = use_signal(move || redirect);

    let go_to_destination = move || {
        let target = match redirect_target.read().as_deref() {
            Some(path) => Route::internal_or_dashboard(path),
            None => Route::Dashboard {},
        };
        navigator().replace(target);
    };

    // Already signed in (e.g. restored session): skip the form.
    if auth.is_authenticated() && !submitting() {
        go_to_destination();
    }

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        submitting.set(true);
        error_msg.set(None);

        let request = LoginRequest {
            email: email(),
            password: password(),
        };
        let session = auth.session();
        let result = session
            .login(request.normalized_email(), &request.password)
            .await;
        auth.refresh();

        match result {
            Ok(identity) => {
                tracing::info!(user_id = %identity.id, "Sign-in form accepted");
                go_to_destination();
            }
            Err(err) => {
                tracing::warn!(kind = err.kind(), "Sign-in form rejected");
                error_msg.set(Some(err.user_message().to_string()));
            }
        }
        submitting.set(false);
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h2 { class: "auth-title", "Sign In" }
                p { class: "auth-description", "Enter your credentials to access the back office" }

                if let Some(err) = error_msg() {
                    div { class: "auth-error", "{err}" }
                }

                form { class: "auth-form", onsubmit: handle_login,
                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        r#type: "email",
                        autocomplete: "username",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        r#type: "password",
                        autocomplete: "current-password",
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                    }
                    button {
                        class: "auth-submit",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Signing in..." } else { "Sign In" }
                    }
                }
            }
        }
    }
}
