//! Login page: themed credential form calling the portal API.
//!
//! ARCHITECTURE
//! ============
//! The page owns a small explicit submit machine (`Idle -> Pending ->
//! {Idle, Failed}`) so at most one request is in flight per view and the
//! error line always reflects the latest settled attempt. Success stores the
//! session token and navigates to the dashboard; failure keeps the inputs
//! and renders the error in place.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::theme_toggle::ThemeToggle;
use crate::config::ApiConfig;
use crate::net::api;
use crate::state::theme::ThemeVariant;
use crate::util::session;

/// Submission lifecycle for the login form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    /// Editing; no request in flight.
    #[default]
    Idle,
    /// One request in flight; the trigger is disabled.
    Pending,
    /// The last attempt settled with a displayable error.
    Failed(String),
}

impl SubmitState {
    /// Whether a new submission may begin.
    pub fn accepts_submit(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Error text to render, if the last attempt failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message.as_str()),
            Self::Idle | Self::Pending => None,
        }
    }
}

/// Trim both credential fields and require them to be non-empty.
///
/// The inputs carry native `required` attributes; this also guards
/// programmatic submission.
fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    let password = password.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Login page — credential form, theme toggle, and error line.
#[component]
pub fn LoginPage() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeVariant>>();
    let config = expect_context::<ApiConfig>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submit = RwSignal::new(SubmitState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !submit.get().accepts_submit() {
            return;
        }
        let (email_value, password_value) =
            match validate_credentials(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    submit.set(SubmitState::Failed(message.to_owned()));
                    return;
                }
            };
        submit.set(SubmitState::Pending);

        let config = config.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::login(&config, &email_value, &password_value).await {
                Ok(token) => {
                    session::store_token(&token);
                    submit.set(SubmitState::Idle);
                    navigate("/dashboard", NavigateOptions::default());
                }
                Err(err) => submit.set(SubmitState::Failed(err.to_string())),
            }
        });
    };

    let tokens = move || theme.get().tokens();
    let error_message = move || match submit.get() {
        SubmitState::Failed(message) => message,
        SubmitState::Idle | SubmitState::Pending => String::new(),
    };

    view! {
        <div
            class="login-page"
            style:background-color=move || tokens().body_background
            style:color=move || tokens().text
        >
            <div class="login-page__toggle">
                <ThemeToggle/>
            </div>
            <form
                class="login-form"
                style:background-color=move || tokens().surface_background
                on:submit=on_submit
            >
                <h2 class="login-form__title" style:color=move || tokens().text>
                    "Login"
                </h2>
                <label class="login-form__label" style:color=move || tokens().text>
                    "Email"
                    <input
                        class="login-form__input"
                        type="email"
                        required
                        style:border-color=move || tokens().input_border
                        style:background-color=move || tokens().body_background
                        style:color=move || tokens().text
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="login-form__label" style:color=move || tokens().text>
                    "Password"
                    <input
                        class="login-form__input"
                        type="password"
                        required
                        style:border-color=move || tokens().input_border
                        style:background-color=move || tokens().body_background
                        style:color=move || tokens().text
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || !error_message().is_empty()>
                    <p class="login-form__error">{error_message}</p>
                </Show>
                <button
                    class="login-form__button"
                    type="submit"
                    disabled=move || !submit.get().accepts_submit()
                    style:background-color=move || tokens().button_background
                    style=("--button-hover", move || tokens().button_hover)
                >
                    "Login"
                </button>
            </form>
        </div>
    }
}
