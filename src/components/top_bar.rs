//! Top navigation bar with the project switcher and the IPFS share entry.
//!
//! The switcher closes on any click outside it. The window listener that
//! implements this exists only while the menu is open and is removed on
//! close and on unmount.

use leptos::prelude::*;

use crate::components::save_dialog::SaveDialog;
use crate::state::projects::ProjectsState;
use crate::state::ui::UiState;

/// Studio top bar. When `project_id` is set, the bar names that project and
/// offers the IPFS share dialog for it.
#[component]
pub fn TopBar(#[prop(optional)] project_id: Option<String>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let projects = expect_context::<RwSignal<ProjectsState>>();
    let outside_click = StoredValue::new(None::<WindowListenerHandle>);

    let release_listener = move || {
        if let Some(handle) = outside_click.try_update_value(Option::take).flatten() {
            handle.remove();
        }
    };

    let close_menu = move || {
        release_listener();
        let _ = ui.try_update(UiState::close_project_menu);
    };

    on_cleanup(close_menu);

    let on_project_click = move |ev: leptos::ev::MouseEvent| {
        // While open, clicks (including menu links) bubble to the window
        // listener, which closes the menu and lets the router navigate.
        if ui.get_untracked().project_menu_open {
            return;
        }
        ev.stop_propagation();
        ui.update(UiState::toggle_project_menu);
        release_listener();
        let handle = window_event_listener(leptos::ev::click, move |_| close_menu());
        outside_click.set_value(Some(handle));
    };

    let current_id = project_id.clone();
    let project_name = move || {
        let Some(id) = current_id.as_deref() else {
            return "Select a project".to_owned();
        };
        projects.with(|p| p.find(id).map_or_else(|| "Untitled project".to_owned(), |item| item.name.clone()))
    };

    let on_close_dialog = Callback::new(move |()| ui.update(UiState::close_save_dialog));
    let dialog_open = Memo::new(move |_| ui.with(|u| u.save_dialog_open));
    let menu_open = Memo::new(move |_| ui.with(|u| u.project_menu_open));
    let share_project_id = project_id.clone();

    view! {
        <div class="topbar">
            <a href="/" class="topbar__logo" title="Back to dashboard">
                <img src="/static/img/img-studio-logo.svg" alt="Studio logo"/>
            </a>
            <span class="topbar__tools">
                <span class="topbar__tool">"Transactions"</span>
                <span class="topbar__tool">"Collaborate"</span>
            </span>
            <span class="topbar__project" on:click=on_project_click>
                <span class="topbar__project-text">{project_name}</span>
                <span class="topbar__dropdown">"\u{25BE}"</span>
                <Show when=move || menu_open.get()>
                    <div class="topbar__menu">
                        {move || {
                            projects
                                .get()
                                .items
                                .into_iter()
                                .map(|p| {
                                    let href = format!("/project/{}", p.id);
                                    view! {
                                        <a class="topbar__menu-item" href=href>
                                            {p.name}
                                        </a>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                        <a class="topbar__menu-item topbar__menu-item--all" href="/">
                            "All projects"
                        </a>
                    </div>
                </Show>
            </span>
            <span class="topbar__spacer"></span>
            {project_id
                .is_some()
                .then(|| {
                    view! {
                        <button class="btn btn--primary topbar__share" on:click=move |_| ui.update(UiState::open_save_dialog)>
                            "Share"
                        </button>
                    }
                })}
            <span class="topbar__help">"Help"</span>
        </div>
        {move || {
            let id = share_project_id.clone()?;
            dialog_open.get().then(|| view! { <SaveDialog project_id=id on_close=on_close_dialog/> })
        }}
    }
}
