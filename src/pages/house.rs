//! House detail page with measurements and the box visualization.

#[cfg(test)]
#[path = "house_test.rs"]
mod house_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::box_scene::BoxScene;
use crate::components::nav_bar::NavBar;
use crate::net::api::ApiClient;
use crate::net::types::House;
use crate::state::auth::AuthSession;
use crate::util::auth::{handle_api_error, require_token};
use crate::util::units::{format_area, format_length, format_volume};

/// Load state of the detail page.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum HouseView {
    Loading,
    Loaded(House),
    Failed(String),
}

/// Route ids are backend integer keys; anything else is a bad link.
pub(crate) fn parse_house_id(raw: Option<&str>) -> Result<i64, String> {
    let raw = raw.unwrap_or_default().trim();
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| format!("Unknown house \"{raw}\"."))
}

/// Whether a response fetched for `requested` still belongs to the route.
pub(crate) fn is_current_house(requested: i64, route_id: Option<&str>) -> bool {
    parse_house_id(route_id) == Ok(requested)
}

#[component]
pub fn HousePage(session: AuthSession, api: ApiClient) -> impl IntoView {
    let params = use_params_map();
    let state = RwSignal::new(HouseView::Loading);

    {
        let session = session.clone();
        Effect::new(move || {
            let id = match parse_house_id(params.read().get("id").as_deref()) {
                Ok(id) => id,
                Err(message) => {
                    state.set(HouseView::Failed(message));
                    return;
                }
            };
            state.set(HouseView::Loading);
            let session = session.clone();
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let Some(token) = require_token(&session) else {
                    return;
                };
                let result = api.get_house(&token, id).await;
                if !is_current_house(id, params.read_untracked().get("id").as_deref()) {
                    log::debug!("house: dropping stale response for {id}");
                    return;
                }
                match result {
                    Ok(house) => state.set(HouseView::Loaded(house)),
                    Err(e) => {
                        if let Some(message) = handle_api_error(&session, &e) {
                            state.set(HouseView::Failed(message));
                        }
                    }
                }
            });
        });
    }

    let home_href = session.home_path().to_owned();
    view! {
        <div class="house-page">
            <NavBar session=session/>
            <a class="house-page__back" href=home_href>"← All houses"</a>
            {move || match state.get() {
                HouseView::Loading => view! { <p>"Loading house..."</p> }.into_any(),
                HouseView::Failed(message) => view! { <p class="house-page__error">{message}</p> }.into_any(),
                HouseView::Loaded(house) => view! { <HouseDetail house=house/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn HouseDetail(house: House) -> impl IntoView {
    let area = format_area(house.area());
    let volume = format_volume(house.volume());
    let rows = [
        ("Length", format_length(house.length)),
        ("Width", format_length(house.width)),
        ("Height", format_length(house.height)),
        ("Floor area", area),
        ("Volume", volume),
    ];

    view! {
        <section class="house-detail">
            <h1 class="house-detail__name">{house.name.clone()}</h1>
            <p class="house-detail__address">{house.address.clone()}</p>
            <div class="house-detail__body">
                <BoxScene length=house.length width=house.width height=house.height/>
                <dl class="house-detail__metrics">
                    {rows
                        .into_iter()
                        .map(|(label, value)| view! {
                            <dt>{label}</dt>
                            <dd>{value}</dd>
                        })
                        .collect::<Vec<_>>()}
                </dl>
            </div>
        </section>
    }
}
