//! Toggle switch backed by a checkbox input.

use leptos::prelude::*;

/// On/off switch. Reports the new checked value through `on_change`.
#[component]
pub fn Switch(#[prop(into)] checked: Signal<bool>, on_change: Callback<bool>) -> impl IntoView {
    view! {
        <label class="switch">
            <input
                class="switch__input"
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <span class="switch__slider"></span>
        </label>
    }
}
