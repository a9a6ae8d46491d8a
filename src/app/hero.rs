use leptos::prelude::*;

use super::icon::IconView;
use super::image::FallbackImage;
use crate::icon::Icon;
use crate::profile::Profile;
use crate::sections::social_buttons;
use crate::ui::Theme;

#[component]
pub fn Hero(profile: &'static Profile, #[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    view! {
        <section class="pt-32 pb-20 px-6 flex flex-col items-center justify-center text-center min-h-screen relative overflow-hidden">
            <div class=move || {
                format!(
                    "absolute top-20 left-10 w-96 h-96 rounded-full mix-blend-multiply filter blur-3xl opacity-20 animate-blob {}",
                    theme.get().palette().blob_primary,
                )
            }></div>
            <div class=move || {
                format!(
                    "absolute bottom-20 right-10 w-96 h-96 rounded-full mix-blend-multiply filter blur-3xl opacity-20 animate-blob animation-delay-2000 {}",
                    theme.get().palette().blob_secondary,
                )
            }></div>

            <div class="relative w-48 h-48 mb-8 pop-in">
                <div class="w-full h-full rounded-full overflow-hidden border-4 border-transparent bg-clip-padding p-1 bg-gradient-to-tr from-blue-500 to-purple-600">
                    <FallbackImage
                        src=profile.avatar.clone()
                        alt="Profile".to_string()
                        img_class="w-full h-full rounded-full object-cover bg-slate-800"
                        fallback_class="w-full h-full rounded-full bg-slate-800 text-white items-center justify-center"
                        fallback=Icon::User
                        fallback_size=60
                    />
                </div>
            </div>

            <div class="relative rise-in">
                <h2 class="text-lg font-medium text-blue-500 mb-2 uppercase">"Hello, I'm"</h2>
                <h1 class="text-5xl md:text-7xl font-extrabold mb-4">{profile.name.clone()}</h1>
                <p class=move || {
                    format!("text-2xl font-medium mb-8 {}", theme.get().palette().muted_text)
                }>{profile.role.clone()}</p>

                <div class="flex gap-4 justify-center mb-10">
                    <a
                        href=profile.resume.path.clone()
                        download=profile.resume.download_name.clone()
                        class="px-8 py-3 rounded-full bg-blue-600 hover:bg-blue-700 text-white font-bold shadow-lg shadow-blue-500/30 transition-all hover:scale-105 flex items-center gap-2 cursor-pointer"
                    >
                        <IconView icon=Icon::Download size=20 />
                        "Download CV"
                    </a>
                    <a
                        href=profile.mailto()
                        class=move || {
                            format!(
                                "px-8 py-3 rounded-full font-bold border-2 transition-all hover:scale-105 cursor-pointer flex items-center {}",
                                theme.get().palette().outline_button,
                            )
                        }
                    >
                        "Contact Info"
                    </a>
                </div>

                <div class="flex justify-center gap-6">
                    {social_buttons(profile)
                        .map(|button| {
                            view! {
                                <a
                                    href=button.link.href.to_string()
                                    target=button.link.target()
                                    rel=button.link.rel()
                                    aria-label=format!("{} Profile", button.link.label)
                                    class=move || {
                                        format!(
                                            "p-4 rounded-full transition-all hover:-translate-y-1 {}",
                                            theme.get().palette().social_button,
                                        )
                                    }
                                >
                                    <IconView icon=button.icon />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
