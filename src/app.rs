//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};
use leptos_router::hooks::use_navigate;

use crate::pages::{
    bookshelf::BookshelfPage, calendar::CalendarPage, diary::DiaryPage,
    family_setup::FamilySetupPage, family_tree::FamilyTreePage, home::HomePage, login::LoginPage,
    memory_detail::MemoryDetailPage, memory_new::MemoryNewPage,
};
use crate::state::{
    auth::AuthState, family::FamilyState, memories::MemoriesState,
    memory_detail::MemoryDetailState, ui::UiState,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
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
/// Provides all shared state contexts, sets up client-side routing, and
/// runs the session bootstrap once on entry.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let auth = RwSignal::new(AuthState::default());
    let family = RwSignal::new(FamilyState::default());
    let memories = RwSignal::new(MemoriesState::default());
    let memory_detail = RwSignal::new(MemoryDetailState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(family);
    provide_context(memories);
    provide_context(memory_detail);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/hearthbook.css"/>
        <Title text="Hearthbook"/>

        <Router>
            <AppBoot/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("home") view=HomePage/>
                <Route path=(StaticSegment("memory"), ParamSegment("id")) view=MemoryDetailPage/>
                <Route path=(StaticSegment("memories"), StaticSegment("new")) view=MemoryNewPage/>
                <Route path=StaticSegment("calendar") view=CalendarPage/>
                <Route path=StaticSegment("bookshelf") view=BookshelfPage/>
                <Route path=StaticSegment("family-setup") view=FamilySetupPage/>
                <Route path=StaticSegment("family") view=FamilyTreePage/>
                <Route path=StaticSegment("diary") view=DiaryPage/>
            </Routes>
        </Router>
    }
}

/// Invisible child of the router that initializes the theme and spawns the
/// session bootstrap exactly once per app entry.
///
/// It lives inside `Router` because the bootstrap flow's one navigation
/// goes through the router's navigate handle.
#[component]
fn AppBoot() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let family = expect_context::<RwSignal<FamilyState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let started = RwSignal::new(false);
    Effect::new(move || {
        if started.get() {
            return;
        }
        started.set(true);

        let dark = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            crate::net::bootstrap::spawn_bootstrap(auth, family, move |path| {
                navigate(path, leptos_router::NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, auth, family);
        }
    });
}
