//! Login form.

use crate::frontend::services::central::CentralClient;
use crate::frontend::services::context::use_stores;
use crate::utils::config::DashboardConfig;
use dioxus::prelude::*;

#[component]
pub fn Login() -> Element {
    let stores = use_stores();
    let config = use_context::<DashboardConfig>();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut pending = use_signal(|| false);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        if pending() {
            return;
        }

        let username_value = username.read().trim().to_string();
        let password_value = password.read().clone();
        let authorization = stores.authorization.clone();
        let central_url = config.central_url.clone();
        let session_dir = config.session_dir();

        error.set(None);
        pending.set(true);
        spawn(async move {
            let result = match CentralClient::new(&central_url) {
                Ok(client) => client.get_authorization(&username_value, &password_value).await,
                Err(e) => Err(e),
            };

            match result {
                Ok(session) => {
                    if let Err(e) = session.save(&session_dir).await {
                        log::error!("Failed to save session: {e}");
                    }
                    password.set(String::new());
                    pending.set(false);
                    // The authorization listener takes it from here.
                    authorization.login(session);
                }
                Err(e) => {
                    log::warn!("Login failed for {username_value}: {e}");
                    error.set(Some(e.to_string()));
                    pending.set(false);
                }
            }
        });
    };

    rsx! {
        form {
            class: "login-form",
            onsubmit: on_submit,
            h1 { class: "login-title", "Log in" }
            input {
                class: "login-input",
                r#type: "text",
                placeholder: "Username",
                value: "{username}",
                autofocus: true,
                oninput: move |e| {
                    username.set(e.value());
                    error.set(None);
                },
            }
            input {
                class: "login-input",
                r#type: "password",
                placeholder: "Password",
                value: "{password}",
                oninput: move |e| {
                    password.set(e.value());
                    error.set(None);
                },
            }
            button {
                class: "login-submit",
                r#type: "submit",
                disabled: pending(),
                if pending() { "Logging in..." } else { "Log in" }
            }
            if let Some(message) = error() {
                div { class: "error-message error-visible", "{message}" }
            }
        }
    }
}
