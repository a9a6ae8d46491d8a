use leptos::prelude::*;

use super::icon::IconView;
use crate::profile::Profile;
use crate::sections::NAV_SECTIONS;
use crate::ui::{MenuState, Theme};

#[component]
pub fn NavBar(
    profile: &'static Profile,
    #[prop(into)] theme: Signal<Theme>,
    #[prop(into)] menu: Signal<MenuState>,
    on_toggle_theme: Callback<()>,
    on_toggle_menu: Callback<()>,
    on_follow_link: Callback<()>,
) -> impl IntoView {
    view! {
        <nav class=move || {
            format!(
                "fixed w-full z-50 backdrop-blur-xl border-b transition-colors duration-500 {}",
                theme.get().palette().nav,
            )
        }>
            <div class="max-w-7xl mx-auto px-6 py-4 flex justify-between items-center">
                <a
                    href="#"
                    class="text-2xl font-bold bg-gradient-to-r from-blue-500 to-purple-600 bg-clip-text text-transparent"
                >
                    {profile.brand.clone()}
                </a>

                // desktop
                <div class="hidden md:flex items-center gap-8">
                    {NAV_SECTIONS
                        .iter()
                        .map(|section| {
                            view! {
                                <a
                                    href=section.href()
                                    class="font-medium hover:text-blue-500 transition-colors cursor-pointer"
                                >
                                    {section.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                    <ThemeToggle theme on_toggle=on_toggle_theme extra_class="shadow-lg" />
                </div>

                // mobile
                <div class="flex md:hidden items-center gap-4">
                    <ThemeToggle theme on_toggle=on_toggle_theme />
                    <button
                        class="p-2 cursor-pointer"
                        aria-label=move || menu.get().button_icon().label()
                        aria-expanded=move || menu.get().is_open().to_string()
                        on:click=move |_| on_toggle_menu.run(())
                    >
                        {move || view! { <IconView icon=menu.get().button_icon() size=28 /> }}
                    </button>
                </div>
            </div>

            {move || {
                menu.get()
                    .is_open()
                    .then(|| {
                        view! {
                            <div class=move || {
                                format!(
                                    "md:hidden overflow-hidden border-b menu-reveal {}",
                                    theme.get().palette().mobile_menu,
                                )
                            }>
                                <div class="flex flex-col p-6 gap-4">
                                    {NAV_SECTIONS
                                        .iter()
                                        .map(|section| {
                                            view! {
                                                <a
                                                    href=section.href()
                                                    on:click=move |_| on_follow_link.run(())
                                                    class="text-left text-lg font-medium hover:text-blue-500 py-2 cursor-pointer"
                                                >
                                                    {section.label()}
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
            }}
        </nav>
    }
}

#[component]
fn ThemeToggle(
    #[prop(into)] theme: Signal<Theme>,
    on_toggle: Callback<()>,
    #[prop(optional)] extra_class: &'static str,
) -> impl IntoView {
    view! {
        <button
            class=move || {
                format!("p-2 rounded-full {} {}", extra_class, theme.get().palette().toggle)
            }
            aria-label=move || theme.get().toggle_icon().label()
            on:click=move |_| on_toggle.run(())
        >
            {move || view! { <IconView icon=theme.get().toggle_icon() size=20 /> }}
        </button>
    }
}
