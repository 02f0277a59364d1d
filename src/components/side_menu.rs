//! Dashboard side menu.

use leptos::prelude::*;

use crate::state::ui::SideMenuItem;

/// Vertical menu of [`SideMenuItem`] entries; clicking one emits it.
#[component]
pub fn SideMenu(#[prop(into)] selected: Signal<SideMenuItem>, on_item_selected: Callback<SideMenuItem>) -> impl IntoView {
    view! {
        <nav class="side-menu">
            {SideMenuItem::ALL
                .into_iter()
                .map(|item| {
                    view! {
                        <button
                            class="side-menu__item"
                            class:side-menu__item--active=move || selected.get() == item
                            on:click=move |_| on_item_selected.run(item)
                        >
                            {item.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
