mod about;
mod contact;
mod footer;
mod hero;
mod icon;
mod image;
mod nav;
mod projects;
mod skills;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Html, MetaTags, Title};
use leptos_router::{components::*, path};

use crate::profile::{profile, Profile};
use crate::ui::{Theme, UiState};

use about::About;
use contact::Contact;
use footer::Footer;
use hero::Hero;
use nav::NavBar;
use projects::Projects;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let profile = profile();
    let ui = RwSignal::new(UiState::default());
    let theme = Memo::new(move |_| ui.get().theme);
    let menu = Memo::new(move |_| ui.get().menu);

    let toggle_theme = Callback::new(move |_: ()| {
        ui.update(UiState::toggle_theme);
        log::debug!("theme set to {:?}", ui.get_untracked().theme);
    });
    let toggle_menu = Callback::new(move |_: ()| ui.update(UiState::toggle_menu));
    let follow_link = Callback::new(move |_: ()| ui.update(UiState::follow_link));

    let home = move || {
        view! { <HomePage profile theme=theme /> }
    };

    view! {
        <Html attr:class=move || theme.get().root_class() />
        <Title formatter=move |title| format!("{} - {title}", profile.name) />

        <div class=move || {
            format!("min-h-screen transition-colors duration-500 {}", theme.get().palette().page)
        }>
            <NavBar
                profile
                theme=theme
                menu=menu
                on_toggle_theme=toggle_theme
                on_toggle_menu=toggle_menu
                on_follow_link=follow_link
            />
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=home />
                </Routes>
            </Router>
            <Footer profile theme=theme />
        </div>
    }
}

/// Renders the single page: hero followed by every anchored section.
#[component]
fn HomePage(profile: &'static Profile, #[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <main>
            <Hero profile theme />
            <About profile theme />
            <Skills profile theme />
            <Projects profile theme />
            <Contact profile theme />
        </main>
    }
}
