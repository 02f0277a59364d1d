//! Reusable card component for project list items on the dashboard.

use leptos::prelude::*;

/// A clickable card representing a project in the dashboard list.
#[component]
pub fn ProjectCard(id: String, name: String, updated_at: Option<String>) -> impl IntoView {
    let href = format!("/project/{id}");

    view! {
        <a class="project-card" href=href>
            <span class="project-card__name">{name}</span>
            {updated_at.map(|ts| view! { <span class="project-card__updated">{ts}</span> })}
        </a>
    }
}
