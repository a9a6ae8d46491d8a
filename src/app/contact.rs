use leptos::prelude::*;

use super::icon::IconView;
use crate::contact::{ContactForm, Field, FieldKind, ACCESS_KEY_FIELD, METHOD};
use crate::icon::Icon;
use crate::profile::Profile;
use crate::sections::Section;
use crate::ui::Theme;

#[component]
pub fn Contact(profile: &'static Profile, #[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    let form = ContactForm::from(&profile.contact);

    view! {
        <section id=Section::Contact.id() class="py-20 px-6 scroll-mt-28">
            <div class="max-w-2xl mx-auto text-center">
                <h2 class="text-4xl font-bold mb-10">"Get in Touch"</h2>
                <div class=move || {
                    format!("p-8 rounded-3xl border-2 text-left {}", theme.get().palette().form_card)
                }>
                    // native submission; the form service owns validation and the response
                    <form action=form.action method=METHOD class="flex flex-col gap-6">
                        <input type="hidden" name=ACCESS_KEY_FIELD value=form.access_key />
                        {form
                            .fields()
                            .iter()
                            .map(|field| view! { <FormField field=*field theme /> })
                            .collect_view()}
                        <button
                            type="submit"
                            class="w-full py-4 rounded-xl bg-blue-600 hover:bg-blue-700 text-white font-bold flex items-center justify-center gap-2 cursor-pointer"
                        >
                            <IconView icon=Icon::Send size=20 />
                            "Send Message"
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FormField(field: Field, #[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    let input_class = move || {
        format!(
            "w-full p-4 rounded-xl border-2 outline-none {}",
            theme.get().palette().input,
        )
    };
    let id = format!("contact-{}", field.name);

    let control = match field.kind {
        FieldKind::TextArea { rows } => view! {
            <textarea
                id=id.clone()
                name=field.name
                required=true
                placeholder=field.placeholder
                rows=rows.to_string()
                class=input_class
            ></textarea>
        }
        .into_any(),
        kind => view! {
            <input
                id=id.clone()
                type=kind.input_type()
                name=field.name
                required=true
                placeholder=field.placeholder
                class=input_class
            />
        }
        .into_any(),
    };

    view! {
        <div>
            <label for=id class="block text-sm font-medium mb-2 pl-1">
                {field.label}
            </label>
            {control}
        </div>
    }
}
