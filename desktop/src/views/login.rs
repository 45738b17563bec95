//! Login view backed by the fixed two-account credential gate.

use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let session = ui::use_session();
    let settings = ui::use_settings();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    // Already signed in: straight to the dashboard.
    if !session().loading && session().user.is_some() {
        nav.replace(Route::Dashboard {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            match api::authenticate(username().trim(), &password()) {
                Ok(user) => {
                    ui::sign_in(session, user).await;
                    nav.replace(Route::Dashboard {});
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "login-screen",
            div {
                class: "login-card",
                div { class: "login-mark", "PV" }
                h1 { class: "login-title", "{settings().system_name}" }
                p { class: "login-sub", "Staff sign-in portal" }

                form {
                    class: "login-form",
                    onsubmit: handle_login,

                    if let Some(err) = error() {
                        div { class: "error-banner", "{err}" }
                    }

                    Input {
                        r#type: "text",
                        placeholder: "Username",
                        value: username(),
                        oninput: move |evt: FormEvent| username.set(evt.value()),
                    }

                    Input {
                        r#type: "password",
                        placeholder: "Password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        class: "login-submit",
                        "Sign in"
                    }
                }
            }
        }
    }
}
