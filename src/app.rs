//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{META_API_BASE, META_PROJECT_POLL_SECS, META_UPLOAD_TIMEOUT_MS, StudioConfig};
use crate::net::backend::BackendHandle;
use crate::pages::{dashboard::DashboardPage, project::ProjectPage};
use crate::state::{auth::AuthState, projects::ProjectsState, ui::UiState};
use crate::util::notify::NotifierHandle;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `config` is written into `<meta name="studio:*">` tags that the browser
/// reads back through [`StudioConfig::from_document`].
pub fn shell(options: LeptosOptions, config: StudioConfig) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=META_API_BASE content=config.api_base.clone()/>
                <meta name=META_UPLOAD_TIMEOUT_MS content=config.upload_timeout_ms.to_string()/>
                <meta name=META_PROJECT_POLL_SECS content=config.project_poll_secs.to_string()/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts plus the backend and notifier
/// collaborators, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = StudioConfig::from_document();
    log::debug!("studio config: {config:?}");

    let auth = RwSignal::new(AuthState::default());
    let projects = RwSignal::new(ProjectsState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(projects);
    provide_context(ui);
    provide_context(BackendHandle::http(config.api_base.clone()));
    provide_context(NotifierHandle::default());
    provide_context(config.clone());

    #[cfg(feature = "hydrate")]
    {
        let api_base = config.api_base.clone();
        auth.update(|a| a.loading = true);
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user(&api_base).await;
            auth.update(|a| {
                a.user = user;
                a.loading = false;
            });
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/studio-ui.css"/>
        <Title text="Studio"/>
        <Meta name="description" content="Smart-contract studio"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=(StaticSegment("project"), ParamSegment("id")) view=ProjectPage/>
            </Routes>
        </Router>
    }
}
