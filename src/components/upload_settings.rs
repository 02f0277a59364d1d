//! Upload settings sub-view of the save dialog.

#[cfg(test)]
#[path = "upload_settings_test.rs"]
mod upload_settings_test;

use leptos::prelude::*;

use crate::components::switch::Switch;
use crate::state::upload::UploadSettings;

/// Settings form over [`UploadSettings`].
///
/// Every toggle reports the full updated settings through `on_change`; the
/// panel keeps only a local echo and forgets it on unmount.
#[component]
pub fn UploadSettingsPanel(
    initial: UploadSettings,
    on_change: Callback<UploadSettings>,
    on_back: Callback<()>,
) -> impl IntoView {
    let settings = RwSignal::new(initial);

    let on_include_build_change = Callback::new(move |checked: bool| {
        let next = toggle_include_build(settings.get_untracked(), checked, |s| on_change.run(s));
        settings.set(next);
    });

    view! {
        <div class="upload-settings">
            <div class="upload-settings__header">
                <button class="btn btn--no-bg" on:click=move |_| on_back.run(()) title="Back">
                    "\u{2190}"
                </button>
                <div class="upload-settings__title">"Upload Settings"</div>
            </div>
            <div class="upload-settings__build-info">
                <div class="upload-settings__label">"Include build information"</div>
                <div class="upload-settings__desc">
                    <div>"This will upload the content of your build folder"</div>
                    <Switch
                        checked=Signal::derive(move || settings.get().include_build_info)
                        on_change=on_include_build_change
                    />
                </div>
            </div>
        </div>
    }
}

/// Apply the build-info switch to `current` and report the full result.
fn toggle_include_build(
    current: UploadSettings,
    checked: bool,
    on_change: impl Fn(UploadSettings),
) -> UploadSettings {
    let next = current.with_include_build_info(checked);
    on_change(next);
    next
}
