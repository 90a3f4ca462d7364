//! Route wrapper that renders its children only for a signed-in user.
//!
//! DESIGN
//! ======
//! The session is a required prop, so a protected view cannot be built
//! without one. The component re-runs [`AuthSession::guard`] whenever the
//! session changes and never mutates it.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::state::auth::AuthSession;
use crate::util::guard::GuardDecision;

#[component]
pub fn ProtectedRoute(session: AuthSession, children: ChildrenFn) -> impl IntoView {
    move || match session.guard() {
        GuardDecision::Placeholder => view! {
            <div class="route-placeholder" aria-busy="true">
                <p>"Loading..."</p>
            </div>
        }
        .into_any(),
        GuardDecision::Redirect { to, replace } => {
            let options = NavigateOptions { replace, ..NavigateOptions::default() };
            view! { <Redirect path=to options=options/> }.into_any()
        }
        GuardDecision::PassThrough => children().into_any(),
    }
}
