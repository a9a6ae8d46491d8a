use leptos::prelude::*;

use crate::icon::Icon;

#[component]
pub fn IconView(
    icon: Icon,
    #[prop(default = 24)] size: u32,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let size = size.to_string();
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size.clone()
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            {icon.paths().iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}
