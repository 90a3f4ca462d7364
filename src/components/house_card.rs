//! Card for a house on the dashboard list.

use leptos::prelude::*;

use crate::net::types::House;
use crate::util::units::{format_area, format_dimensions};

/// A house summary with a detail link and edit/delete actions.
#[component]
pub fn HouseCard(house: House, on_edit: Callback<i64>, on_delete: Callback<i64>) -> impl IntoView {
    let id = house.id;
    let href = format!("/house/{id}");
    let dimensions = format_dimensions(house.length, house.width, house.height);
    let area = format_area(house.area());

    view! {
        <div class="house-card">
            <a class="house-card__link" href=href>
                <span class="house-card__name">{house.name}</span>
                <span class="house-card__address">{house.address}</span>
                <span class="house-card__meta">{dimensions}</span>
                <span class="house-card__meta">{area}</span>
            </a>
            <div class="house-card__actions">
                <button class="btn" on:click=move |_| on_edit.run(id) title="Edit house">
                    "Edit"
                </button>
                <button
                    class="btn btn--danger"
                    on:click=move |_| on_delete.run(id)
                    title="Delete house"
                    aria-label="Delete house"
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
