//! Dashboard page listing the user's houses with create, edit and delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It is mounted inside a
//! `ProtectedRoute`, so it only renders with a session; a 401 from the backend
//! drops that session and hands control back to the guard.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::house_card::HouseCard;
use crate::components::house_form_dialog::HouseFormDialog;
use crate::components::nav_bar::NavBar;
use crate::net::api::ApiClient;
use crate::state::auth::AuthSession;
use crate::state::houses::HousesState;
use crate::util::auth::{handle_api_error, require_token};
use crate::util::units::format_area;
use crate::util::validation::{HouseFormInput, validate_house};

/// Whether the house dialog creates a new house or edits an existing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum HouseFormMode {
    Create,
    Edit(i64),
}

pub(crate) fn dialog_title(mode: HouseFormMode) -> &'static str {
    match mode {
        HouseFormMode::Create => "New House",
        HouseFormMode::Edit(_) => "Edit House",
    }
}

/// Initial form contents for `mode`; an unknown id yields an empty form.
pub(crate) fn initial_form_input(mode: HouseFormMode, houses: &HousesState) -> HouseFormInput {
    match mode {
        HouseFormMode::Create => HouseFormInput::default(),
        HouseFormMode::Edit(id) => houses
            .find(id)
            .map(|h| HouseFormInput::from_draft(&h.to_draft()))
            .unwrap_or_default(),
    }
}

#[component]
pub fn DashboardPage(session: AuthSession, api: ApiClient) -> impl IntoView {
    let houses = RwSignal::new(HousesState { loading: true, ..HousesState::default() });

    // Initial fetch. Reads happen inside the task, so the effect has no
    // dependencies and runs once per mount.
    {
        let session = session.clone();
        let api = api.clone();
        Effect::new(move || {
            let session = session.clone();
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let Some(token) = require_token(&session) else {
                    return;
                };
                match api.list_houses(&token).await {
                    Ok(items) => houses.update(|s| s.replace_all(items)),
                    Err(e) => match handle_api_error(&session, &e) {
                        Some(message) => houses.update(|s| s.fail(message)),
                        None => houses.update(|s| s.loading = false),
                    },
                }
            });
        });
    }

    // House dialog state.
    let form_mode = RwSignal::new(None::<HouseFormMode>);
    let form_input = RwSignal::new(HouseFormInput::default());
    let form_error = RwSignal::new(None::<String>);
    let form_busy = RwSignal::new(false);
    let delete_id = RwSignal::new(None::<i64>);

    let open_form = move |mode: HouseFormMode| {
        form_input.set(initial_form_input(mode, &houses.get_untracked()));
        form_error.set(None);
        form_busy.set(false);
        form_mode.set(Some(mode));
    };
    let on_create = move |_| open_form(HouseFormMode::Create);
    let on_edit = Callback::new(move |id: i64| open_form(HouseFormMode::Edit(id)));
    let on_delete_request = Callback::new(move |id: i64| delete_id.set(Some(id)));
    let on_form_cancel = Callback::new(move |()| form_mode.set(None));
    let on_delete_cancel = Callback::new(move |()| delete_id.set(None));

    let on_form_submit = {
        let session = session.clone();
        let api = api.clone();
        Callback::new(move |()| {
            let Some(mode) = form_mode.get_untracked() else {
                return;
            };
            let draft = match validate_house(&form_input.get_untracked()) {
                Ok(draft) => draft,
                Err(message) => {
                    form_error.set(Some(message.to_owned()));
                    return;
                }
            };
            let Some(token) = require_token(&session) else {
                return;
            };
            form_busy.set(true);
            let session = session.clone();
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let result = match mode {
                    HouseFormMode::Create => api.create_house(&token, &draft).await,
                    HouseFormMode::Edit(id) => api.update_house(&token, id, &draft).await,
                };
                match result {
                    Ok(house) => {
                        houses.update(|s| match mode {
                            HouseFormMode::Create => s.apply_created(house),
                            HouseFormMode::Edit(_) => s.apply_updated(house),
                        });
                        form_mode.set(None);
                    }
                    Err(e) => {
                        form_error.set(handle_api_error(&session, &e));
                        form_busy.set(false);
                    }
                }
            });
        })
    };

    let on_delete_confirm = {
        let session = session.clone();
        let api = api.clone();
        Callback::new(move |()| {
            let Some(id) = delete_id.get_untracked() else {
                return;
            };
            delete_id.set(None);
            let Some(token) = require_token(&session) else {
                return;
            };
            let session = session.clone();
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.delete_house(&token, id).await {
                    Ok(()) => houses.update(|s| s.apply_removed(id)),
                    Err(e) => {
                        if let Some(message) = handle_api_error(&session, &e) {
                            houses.update(|s| s.error = Some(message));
                        }
                    }
                }
            });
        })
    };

    view! {
        <div class="dashboard-page">
            <NavBar session=session/>
            <header class="dashboard-page__header toolbar">
                <span class="toolbar__board-name">"My Houses"</span>
                <span class="toolbar__divider" aria-hidden="true"></span>
                <span class="dashboard-page__summary">
                    {move || {
                        let state = houses.get();
                        format!("{} houses, {} total", state.items.len(), format_area(state.total_area()))
                    }}
                </span>
                <span class="toolbar__spacer"></span>
                <button class="btn btn--primary" on:click=on_create>
                    "+ New House"
                </button>
            </header>

            <div class="dashboard-page__grid">
                <Show when=move || houses.get().error.is_some()>
                    <p class="dashboard-page__error">{move || houses.get().error.unwrap_or_default()}</p>
                </Show>
                <Show when=move || !houses.get().loading fallback=move || view! { <p>"Loading houses..."</p> }>
                    <Show
                        when=move || !houses.get().items.is_empty()
                        fallback=move || view! { <p class="dashboard-page__empty">"No houses yet."</p> }
                    >
                        <div class="dashboard-page__cards">
                            {move || {
                                houses
                                    .get()
                                    .items
                                    .into_iter()
                                    .map(|house| {
                                        view! {
                                            <HouseCard house=house on_edit=on_edit on_delete=on_delete_request/>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </Show>
            </div>

            <Show when=move || form_mode.get().is_some()>
                <HouseFormDialog
                    title=dialog_title(form_mode.get_untracked().unwrap_or(HouseFormMode::Create))
                    input=form_input
                    error=form_error
                    busy=form_busy
                    on_submit=on_form_submit
                    on_cancel=on_form_cancel
                />
            </Show>
            <Show when=move || delete_id.get().is_some()>
                <DeleteHouseDialog on_confirm=on_delete_confirm on_cancel=on_delete_cancel/>
            </Show>
        </div>
    }
}

#[component]
fn DeleteHouseDialog(on_confirm: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete House"</h2>
                <p class="dialog__danger">"This will permanently delete this house."</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
