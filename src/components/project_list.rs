//! Titled grid of project cards.

use leptos::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::net::types::ProjectListItem;

#[component]
pub fn ProjectList(
    #[prop(into)] list_name: Signal<&'static str>,
    #[prop(into)] list: Signal<Vec<ProjectListItem>>,
) -> impl IntoView {
    view! {
        <section class="project-list">
            <h2 class="project-list__title">{move || list_name.get()}</h2>
            <Show
                when=move || list.with(|items| !items.is_empty())
                fallback=|| view! { <p class="project-list__empty">"No projects yet."</p> }
            >
                <div class="project-list__cards">
                    <For
                        each=move || list.get()
                        key=|p| p.id.clone()
                        children=|p| view! { <ProjectCard id=p.id name=p.name updated_at=p.updated_at/> }
                    />
                </div>
            </Show>
        </section>
    }
}
