//! Top navigation bar for protected pages.

use leptos::prelude::*;

use crate::state::auth::AuthSession;

/// Header with the app title, a dashboard link and the logout action.
///
/// Logging out only clears the session; the surrounding `ProtectedRoute`
/// performs the redirect.
#[component]
pub fn NavBar(session: AuthSession) -> impl IntoView {
    let home_href = session.home_path().to_owned();
    let on_logout = move |_| {
        if let Err(e) = session.logout() {
            log::warn!("nav: logout could not clear stored tokens: {e}");
        }
    };

    view! {
        <header class="nav-bar toolbar">
            <a class="nav-bar__title" href=home_href>"Houses"</a>
            <span class="toolbar__spacer"></span>
            <button class="btn nav-bar__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </header>
    }
}
