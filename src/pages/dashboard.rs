//! Dashboard page listing the user's projects.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. It requests the project list from the backend
//! on mount and refreshes it on a timer while mounted. Whether the list or
//! the sign-in prompt is shown depends only on the session flag in
//! `AuthState`.

use leptos::prelude::*;

use crate::components::project_list::ProjectList;
use crate::components::side_menu::SideMenu;
use crate::components::top_bar::TopBar;
use crate::config::StudioConfig;
use crate::net::backend::BackendHandle;
use crate::state::auth::AuthState;
use crate::state::projects::ProjectsState;
use crate::state::ui::{SideMenuItem, UiState};

/// Dashboard page showing the side menu and project list, or a sign-in prompt
/// for anonymous visitors.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let projects = expect_context::<RwSignal<ProjectsState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let backend = expect_context::<BackendHandle>();
    let config = use_context::<StudioConfig>().unwrap_or_default();

    #[cfg(feature = "hydrate")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        let poll_secs = config.project_poll_secs;
        leptos::task::spawn_local(async move {
            loop {
                let _ = projects.try_update(ProjectsState::begin_load);
                let result = backend.project_list().await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                let _ = projects.try_update(|p| p.finish_load(result));
                if poll_secs == 0 {
                    break;
                }
                gloo_timers::future::sleep(std::time::Duration::from_secs(u64::from(poll_secs))).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (&backend, &config);
    }

    let on_side_menu_item_selected = Callback::new(move |item: SideMenuItem| {
        log::debug!("side menu selected: {item:?}");
        ui.update(|u| u.side_menu_item = item);
    });

    let selected_item = Signal::derive(move || ui.with(|u| u.side_menu_item));
    let list_name = Signal::derive(move || selected_item.get().list_name());
    let project_items = Signal::derive(move || projects.with(|p| p.items.clone()));

    view! {
        <div class="dashboard-page">
            <TopBar/>
            <Show
                when=move || auth.with(AuthState::is_authenticated)
                fallback=move || {
                    view! {
                        <div class="dashboard-page__anonymous">
                            {move || {
                                if auth.get().loading {
                                    "Checking your session..."
                                } else {
                                    "Sign in to see your projects or create a new one."
                                }
                            }}
                        </div>
                    }
                }
            >
                <div class="dashboard-page__body">
                    <SideMenu selected=selected_item on_item_selected=on_side_menu_item_selected/>
                    <div class="dashboard-page__content">
                        <Show when=move || projects.with(|p| p.loading && !p.loaded)>
                            <p class="dashboard-page__status">"Loading projects..."</p>
                        </Show>
                        {move || {
                            projects
                                .get()
                                .error
                                .map(|e| view! { <p class="dashboard-page__status dashboard-page__status--error">{e}</p> })
                        }}
                        <ProjectList list_name=list_name list=project_items/>
                    </div>
                </div>
            </Show>
        </div>
    }
}
