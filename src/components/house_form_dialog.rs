//! Modal dialog for creating or editing a house.

use leptos::prelude::*;

use crate::util::validation::HouseFormInput;

#[component]
pub fn HouseFormDialog(
    title: &'static str,
    input: RwSignal<HouseFormInput>,
    error: RwSignal<Option<String>>,
    busy: RwSignal<bool>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let field = move |label: &'static str,
                      kind: &'static str,
                      get: fn(&HouseFormInput) -> String,
                      set: fn(&mut HouseFormInput, String)| {
        view! {
            <label class="dialog__label">
                {label}
                <input
                    class="dialog__input"
                    type=kind
                    step=if kind == "number" { Some("any") } else { None }
                    prop:value=move || input.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        input.update(|i| set(i, value));
                    }
                />
            </label>
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <form
                    class="dialog__form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        if !busy.get() {
                            on_submit.run(());
                        }
                    }
                >
                    {field("Name", "text", |i| i.name.clone(), |i, v| i.name = v)}
                    {field("Address", "text", |i| i.address.clone(), |i, v| i.address = v)}
                    {field("Length (m)", "number", |i| i.length.clone(), |i, v| i.length = v)}
                    {field("Width (m)", "number", |i| i.width.clone(), |i, v| i.width = v)}
                    {field("Height (m)", "number", |i| i.height.clone(), |i, v| i.height = v)}
                    <Show when=move || error.get().is_some()>
                        <p class="dialog__danger">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            "Save"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
