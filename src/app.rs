//! Root application component with routing and session wiring.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::config::{AppConfig, HOME_SEGMENT, LOGIN_SEGMENT};
use crate::net::api::ApiClient;
use crate::pages::{dashboard::DashboardPage, house::HousePage, login::LoginPage, register::RegisterPage};
use crate::state::auth::AuthSession;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the one session for this page load and hands it to every route
/// that needs it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::default();
    let session = AuthSession::browser(&config);
    let api = ApiClient::new(&config.api_base);

    // Effects only run in the browser, so SSR always renders the placeholder
    // and recovery happens once after hydration.
    let startup = session.clone();
    Effect::new(move || {
        startup.initialize();
    });

    let login_view = {
        let session = session.clone();
        let api = api.clone();
        move || view! { <LoginPage session=session.clone() api=api.clone()/> }
    };
    let register_view = {
        let api = api.clone();
        let login_path = config.login_path.clone();
        move || view! { <RegisterPage api=api.clone() login_path=login_path.clone()/> }
    };
    let dashboard_view = {
        let session = session.clone();
        let api = api.clone();
        move || {
            let guard = session.clone();
            let page = session.clone();
            let api = api.clone();
            view! {
                <ProtectedRoute session=guard>
                    <DashboardPage session=page.clone() api=api.clone()/>
                </ProtectedRoute>
            }
        }
    };
    let house_view = move || {
        let guard = session.clone();
        let page = session.clone();
        let api = api.clone();
        view! {
            <ProtectedRoute session=guard>
                <HousePage session=page.clone() api=api.clone()/>
            </ProtectedRoute>
        }
    };

    view! {
        <Stylesheet id="leptos" href="/pkg/house-dashboard.css"/>
        <Title text="Houses"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment(LOGIN_SEGMENT) view=login_view/>
                <Route path=StaticSegment("register") view=register_view/>
                <Route path=StaticSegment(HOME_SEGMENT) view=dashboard_view/>
                <Route path=(StaticSegment("house"), ParamSegment("id")) view=house_view/>
            </Routes>
        </Router>
    }
}
