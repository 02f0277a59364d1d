//! Project page: editor shell hosting the top bar for one project.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::top_bar::TopBar;
use crate::state::ui::UiState;

/// Reads the project id from the route and renders the top bar for it.
/// The save dialog never survives a project switch.
#[component]
pub fn ProjectPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let params = use_params_map();
    let project_id = Memo::new(move |_| params.read().get("id"));

    Effect::new(move || {
        project_id.track();
        ui.update(UiState::close_save_dialog);
    });

    on_cleanup(move || {
        let _ = ui.try_update(UiState::close_save_dialog);
    });

    view! {
        <div class="project-page">
            {move || view! { <TopBar project_id=project_id.get().unwrap_or_default()/> }}
            <main class="project-page__workspace"></main>
        </div>
    }
}
