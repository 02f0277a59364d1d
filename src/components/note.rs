use leptos::prelude::*;

/// Highlighted callout with a bold title line.
#[component]
pub fn Note(#[prop(into)] title: String, #[prop(into)] text: String) -> impl IntoView {
    view! {
        <div class="note">
            <span class="note__title">{title}</span>
            <span class="note__text">{text}</span>
        </div>
    }
}
