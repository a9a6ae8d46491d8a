use leptos::prelude::*;

use super::icon::IconView;
use crate::profile::Profile;
use crate::sections::{skill_cards, Section};
use crate::ui::Theme;

#[component]
pub fn Skills(profile: &'static Profile, #[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    view! {
        <section id=Section::Skills.id() class="py-20 px-6 scroll-mt-28">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-4xl font-bold text-center mb-16">"Technical Skills"</h2>
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {skill_cards(profile)
                        .map(|card| {
                            let skills = card.category.skills.clone();
                            view! {
                                <div class=move || {
                                    format!(
                                        "p-6 rounded-2xl border transition-transform hover:-translate-y-2 {}",
                                        theme.get().palette().card,
                                    )
                                }>
                                    <div class=card.icon_tile_class()>
                                        <IconView icon=card.category.icon />
                                    </div>
                                    <h3 class="text-xl font-bold mb-4">{card.key.to_string()}</h3>
                                    <div class="flex flex-wrap gap-2">
                                        {skills
                                            .into_iter()
                                            .map(|skill| {
                                                view! {
                                                    <span class=move || {
                                                        format!(
                                                            "text-xs px-2 py-1 rounded border {}",
                                                            theme.get().palette().chip,
                                                        )
                                                    }>{skill}</span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
