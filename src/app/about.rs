use leptos::prelude::*;

use super::icon::IconView;
use crate::icon::Icon;
use crate::profile::Profile;
use crate::sections::Section;
use crate::ui::Theme;

#[component]
pub fn About(profile: &'static Profile, #[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    let card_class = move || {
        format!(
            "p-8 rounded-3xl border text-center transition-transform hover:-translate-y-1 {}",
            theme.get().palette().card,
        )
    };
    let education = &profile.education;

    view! {
        <section
            id=Section::About.id()
            class=move || format!("py-20 px-6 scroll-mt-28 {}", theme.get().palette().band)
        >
            <div class="max-w-5xl mx-auto">
                <p class="text-center text-sm font-bold text-blue-500 uppercase tracking-widest mb-2">
                    "Get To Know More"
                </p>
                <h2 class="text-4xl font-bold text-center mb-16">"About Me"</h2>
                <div class="grid md:grid-cols-2 gap-8">
                    <div class=card_class>
                        <div class="flex justify-center text-blue-500 mb-4">
                            <IconView icon=Icon::GraduationCap size=40 />
                        </div>
                        <h3 class="text-2xl font-bold mb-4">"Education"</h3>
                        <p class="font-semibold text-lg">{education.degree.clone()}</p>
                        <p class=move || format!("mt-2 {}", theme.get().palette().muted_text)>
                            {education.institution.clone()}
                        </p>
                        <p class=move || format!("text-sm {}", theme.get().palette().muted_text)>
                            {education.location.clone()}
                        </p>
                    </div>
                    <div class=card_class>
                        <div class="flex justify-center text-blue-500 mb-4">
                            <IconView icon=Icon::User size=40 />
                        </div>
                        <h3 class="text-2xl font-bold mb-4">"About Me"</h3>
                        <p class=move || {
                            format!("text-lg leading-relaxed {}", theme.get().palette().body_text)
                        }>{profile.about_text.clone()}</p>
                    </div>
                </div>
            </div>
        </section>
    }
}
