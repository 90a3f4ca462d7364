//! Login page: exchanges credentials for a token pair and opens the session.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::{ApiClient, ApiError};
use crate::state::auth::AuthSession;
use crate::state::session::SessionError;
use crate::util::validation::validate_login;

/// Why a sign-in attempt did not open a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LoginFailure {
    Api(ApiError),
    Session(SessionError),
}

pub(crate) fn login_failure_message(failure: &LoginFailure) -> String {
    match failure {
        LoginFailure::Api(ApiError::Unauthorized | ApiError::Status(400)) => "Invalid username or password.".to_owned(),
        LoginFailure::Api(e) => format!("Sign-in failed: {e}"),
        LoginFailure::Session(SessionError::StorageUnavailable(_)) => {
            "This browser refused to save the session. Enable site storage and sign in again.".to_owned()
        }
        LoginFailure::Session(SessionError::InvalidTokenPair(_)) => {
            "The server returned an unusable session. Please try again.".to_owned()
        }
    }
}

#[component]
pub fn LoginPage(session: AuthSession, api: ApiClient) -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    // Signed in, either just now or recovered from storage: leave the form
    // without keeping it in history.
    let current = session.clone();
    Effect::new(move || {
        if !current.loading() && current.is_authenticated() {
            navigate(current.home_path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login(&username.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        let session = session.clone();
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let outcome = match api.obtain_token(&credentials).await {
                Ok(pair) => session.login(&pair).map_err(LoginFailure::Session),
                Err(e) => Err(LoginFailure::Api(e)),
            };
            match outcome {
                Ok(()) => password.set(String::new()),
                Err(failure) => {
                    log::warn!("login: {failure:?}");
                    info.set(login_failure_message(&failure));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Houses"</h1>
                <p class="login-card__subtitle">"Sign in"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "No account? "
                    <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
