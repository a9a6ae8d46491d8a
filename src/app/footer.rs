use leptos::prelude::*;

use crate::profile::Profile;
use crate::sections::copyright;
use crate::ui::Theme;

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer(profile: &'static Profile, #[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    view! {
        <footer class=move || {
            format!("py-8 text-center text-sm border-t {}", theme.get().palette().footer)
        }>
            <p>{copyright(profile, BUILD_YEAR)}</p>
        </footer>
    }
}
