use leptos::prelude::*;

use super::image::FallbackImage;
use crate::icon::Icon;
use crate::profile::Profile;
use crate::sections::{achievements, project_cards, Section};
use crate::ui::Theme;

#[component]
pub fn Projects(profile: &'static Profile, #[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    view! {
        <section
            id=Section::Projects.id()
            class=move || format!("py-20 px-6 scroll-mt-28 {}", theme.get().palette().band)
        >
            <div class="max-w-6xl mx-auto">
                <h2 class="text-4xl font-bold text-center mb-16">"Projects & Achievements"</h2>
                <div class="grid md:grid-cols-3 gap-8 mb-20">
                    {project_cards(profile)
                        .map(|card| {
                            let [live, code] = card.actions();
                            view! {
                                <div class=move || {
                                    format!(
                                        "rounded-2xl overflow-hidden border-2 transition-transform hover:-translate-y-1 {}",
                                        theme.get().palette().card,
                                    )
                                }>
                                    <div class="h-48 bg-slate-800 relative">
                                        <FallbackImage
                                            src=card.project.image.clone()
                                            alt=card.project.title.clone()
                                            img_class="w-full h-full object-cover"
                                            fallback_class="w-full h-full text-white items-center justify-center"
                                            fallback=Icon::Code
                                        />
                                    </div>
                                    <div class="p-6">
                                        <h3 class="text-xl font-bold mb-2">{card.key.to_string()}</h3>
                                        <p class=move || {
                                            format!("text-sm mb-4 {}", theme.get().palette().muted_text)
                                        }>{card.project.description.clone()}</p>
                                        <div class="flex gap-2 mb-4 flex-wrap">
                                            {card
                                                .project
                                                .tags
                                                .iter()
                                                .map(|tag| {
                                                    view! {
                                                        <span class="text-xs px-2 py-1 bg-blue-500/10 text-blue-500 rounded">
                                                            {tag.clone()}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                        <div class="flex gap-2">
                                            <a
                                                href=live.href.to_string()
                                                target=live.target()
                                                rel=live.rel()
                                                class="px-4 py-2 bg-blue-600 text-white rounded-lg text-sm w-full text-center hover:bg-blue-700 transition"
                                            >
                                                {live.label}
                                            </a>
                                            <a
                                                href=code.href.to_string()
                                                target=code.target()
                                                rel=code.rel()
                                                class="px-4 py-2 border border-slate-600 rounded-lg text-sm w-full text-center hover:bg-slate-800 hover:text-white transition"
                                            >
                                                {code.label}
                                            </a>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class=move || {
                    format!("p-8 rounded-3xl border border-blue-500/20 {}", theme.get().palette().panel)
                }>
                    <h3 class="text-2xl font-bold mb-6 text-center">"Achievements"</h3>
                    <ul class="space-y-3 max-w-2xl mx-auto">
                        {achievements(profile)
                            .map(|(_, item)| {
                                view! {
                                    <li class="flex items-start gap-4">
                                        <span class="mt-1.5 w-2 h-2 rounded-full bg-blue-500 flex-shrink-0"></span>
                                        <span>{item.to_string()}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </section>
    }
}
