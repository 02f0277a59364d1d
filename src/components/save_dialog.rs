//! Modal dialog for uploading a project snapshot to IPFS.
//!
//! ARCHITECTURE
//! ============
//! `SaveDialogState` owns every transition; this component only maps user
//! events onto it and runs the backend call. The pending call holds the
//! ticket it was issued with and checks a liveness flag before writing back,
//! so closing the dialog mid-upload lets the request finish silently.

#[cfg(test)]
#[path = "save_dialog_test.rs"]
mod save_dialog_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::components::note::Note;
use crate::components::upload_settings::UploadSettingsPanel;
use crate::config::StudioConfig;
use crate::net::backend::BackendHandle;
use crate::state::upload::{DialogView, SaveDialogState, SharedUpload, UploadSettings};
use crate::util::notify::NotifierHandle;
use crate::util::time::{last_update_label, now_ms};

const IPFS_LOGO: &str = "/static/img/img-ipfs-logo.svg";
#[cfg(feature = "hydrate")]
const LAST_UPDATE_TICK_SECS: u64 = 5;

/// Owned snapshot of the sub-view to render.
#[derive(Clone, Debug, PartialEq)]
enum Screen {
    Prompt,
    Uploading { previous_url: Option<String> },
    Share(SharedUpload),
    Settings(UploadSettings),
}

fn screen_for(dialog: &SaveDialogState) -> Screen {
    match dialog.view() {
        DialogView::Prompt => Screen::Prompt,
        DialogView::Uploading { previous } => Screen::Uploading {
            previous_url: previous.map(|p| p.share_url.clone()),
        },
        DialogView::Share(shared) => Screen::Share(shared.clone()),
        DialogView::Settings => Screen::Settings(dialog.settings()),
    }
}

fn closes_dialog(key: &str) -> bool {
    key == "Escape"
}

/// IPFS save dialog for `project_id`.
///
/// Starts at the upload prompt on every mount. `keep_state` is forwarded to
/// the backend with each upload.
#[component]
pub fn SaveDialog(
    #[prop(into)] project_id: String,
    #[prop(optional)] keep_state: bool,
    on_close: Callback<()>,
) -> impl IntoView {
    let backend = expect_context::<BackendHandle>();
    let notifier = use_context::<NotifierHandle>().unwrap_or_default();
    let config = use_context::<StudioConfig>().unwrap_or_default();

    let dialog = RwSignal::new(SaveDialogState::new(project_id, keep_state));
    let copied = RwSignal::new(false);
    let now = RwSignal::new(now_ms());
    let alive = Arc::new(AtomicBool::new(true));

    let screen = Memo::new(move |_| dialog.with(screen_for));
    let uploading = Signal::derive(move || dialog.with(SaveDialogState::is_uploading));

    #[cfg(feature = "hydrate")]
    {
        let alive_tick = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(LAST_UPDATE_TICK_SECS)).await;
                if !alive_tick.load(Ordering::Relaxed) {
                    break;
                }
                let _ = now.try_set(now_ms());
            }
        });
    }
    let alive_cleanup = alive.clone();
    on_cleanup(move || alive_cleanup.store(false, Ordering::Relaxed));

    let start_upload = Callback::new(move |()| {
        let Some(request) = dialog.try_update(SaveDialogState::start_upload).flatten() else {
            return;
        };
        copied.set(false);

        #[cfg(feature = "hydrate")]
        {
            let backend = backend.clone();
            let notifier = notifier.clone();
            let alive = alive.clone();
            let timeout = config.upload_timeout();
            leptos::task::spawn_local(async move {
                let result = crate::net::backend::run_upload(&*backend, &request, timeout).await;
                if !alive.load(Ordering::Relaxed) {
                    log::debug!("save dialog closed before upload {} finished", request.ticket);
                    return;
                }
                let location = crate::util::location::current_href();
                let _ = dialog.try_update(|d| {
                    d.finish_upload(request.ticket, result, &location, now_ms(), &notifier);
                });
                let _ = now.try_set(now_ms());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&backend, &notifier, &config, &alive, request);
        }
    });

    let open_settings = Callback::new(move |()| dialog.update(SaveDialogState::open_settings));
    let close_settings = Callback::new(move |()| dialog.update(SaveDialogState::close_settings));
    let settings_changed = Callback::new(move |settings: UploadSettings| {
        dialog.update(|d| d.update_settings(settings));
    });

    let on_copy = Callback::new(move |()| {
        let Some(url) = dialog.with_untracked(|d| d.share_url().map(str::to_owned)) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if crate::util::clipboard::copy_text(&url).await {
                let _ = copied.try_set(true);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = url;
    });

    let dialog_ref = NodeRef::<leptos::html::Div>::new();
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let Some(el) = dialog_ref.get() else {
            return;
        };
        if el.focus().is_err() {
            log::debug!("save dialog could not take focus");
        }
    });

    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if closes_dialog(&ev.key()) {
            ev.prevent_default();
            on_close.run(());
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                node_ref=dialog_ref
                class="dialog save-dialog"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <button class="save-dialog__close" on:click=move |_| on_close.run(()) title="Close">
                    "\u{2715}"
                </button>
                {move || match screen.get() {
                    Screen::Prompt => {
                        view! { <PromptView uploading=uploading on_upload=start_upload on_settings=open_settings/> }
                            .into_any()
                    }
                    Screen::Uploading { previous_url } => view! { <UploadingView previous_url=previous_url/> }.into_any(),
                    Screen::Share(shared) => {
                        view! {
                            <ShareView
                                shared=shared
                                now=now
                                copied=copied
                                uploading=uploading
                                on_copy=on_copy
                                on_upload=start_upload
                                on_settings=open_settings
                            />
                        }
                            .into_any()
                    }
                    Screen::Settings(settings) => {
                        view! {
                            <UploadSettingsPanel
                                initial=settings
                                on_change=settings_changed
                                on_back=close_settings
                            />
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn SettingsButton(on_settings: Callback<()>) -> impl IntoView {
    view! {
        <button
            class="btn btn--no-bg save-dialog__settings"
            on:click=move |_| on_settings.run(())
            title="Upload Settings"
        >
            "\u{2699}"
        </button>
    }
}

#[component]
fn PromptView(uploading: Signal<bool>, on_upload: Callback<()>, on_settings: Callback<()>) -> impl IntoView {
    view! {
        <div class="save-dialog__content">
            <img src=IPFS_LOGO class="save-dialog__logo" alt="IPFS"/>
            <h3>"Upload project to IPFS"</h3>
            <div class="save-dialog__description">
                "Backup and share your project by uploading to IPFS. Remember to not include any personal data, and enjoy decentralization!"
            </div>
            <div class="save-dialog__actions">
                <button class="btn btn--primary" disabled=move || uploading.get() on:click=move |_| on_upload.run(())>
                    "Upload Project"
                </button>
                <SettingsButton on_settings=on_settings/>
            </div>
            <Note
                title="Warning"
                text="Due to the nature of IPFS, it might not be possible to delete your project from the network."
            />
        </div>
    }
}

#[component]
fn UploadingView(previous_url: Option<String>) -> impl IntoView {
    view! {
        <div class="save-dialog__content">
            <img src=IPFS_LOGO class="save-dialog__logo" alt="IPFS"/>
            <div class="save-dialog__uploading">"Uploading..."</div>
            {previous_url
                .map(|url| {
                    view! { <div class="save-dialog__previous" title="Previous upload">{url}</div> }
                })}
        </div>
    }
}

#[component]
fn ShareView(
    shared: SharedUpload,
    now: RwSignal<f64>,
    copied: RwSignal<bool>,
    uploading: Signal<bool>,
    on_copy: Callback<()>,
    on_upload: Callback<()>,
    on_settings: Callback<()>,
) -> impl IntoView {
    let uploaded_at = shared.uploaded_at_ms;

    view! {
        <div class="save-dialog__content">
            <img src=IPFS_LOGO class="save-dialog__logo" alt="IPFS"/>
            <div class="save-dialog__share">
                <label class="dialog__label">
                    "Share your project"
                    <input class="dialog__input" type="text" readonly=true prop:value=shared.share_url/>
                </label>
                <button class="btn btn--no-bg" on:click=move |_| on_copy.run(()) title="Copy URL">
                    {move || if copied.get() { "Copied" } else { "Copy" }}
                </button>
            </div>
            <div class="save-dialog__last-update">{move || last_update_label(uploaded_at, now.get())}</div>
            <div class="save-dialog__actions">
                <button class="btn btn--primary" disabled=move || uploading.get() on:click=move |_| on_upload.run(())>
                    "New Upload"
                </button>
                <SettingsButton on_settings=on_settings/>
            </div>
        </div>
    }
}
