use leptos::{html, prelude::*};

use super::icon::IconView;
use crate::icon::Icon;
use crate::ui::ImageLoad;

/// An image that hides itself and reveals a placeholder icon if it fails to load.
#[component]
pub fn FallbackImage(
    src: String,
    alt: String,
    img_class: &'static str,
    fallback_class: &'static str,
    fallback: Icon,
    #[prop(default = 40)] fallback_size: u32,
) -> impl IntoView {
    let load = RwSignal::new(ImageLoad::default());
    let img_ref = NodeRef::<html::Img>::new();

    let fail = {
        let src = src.clone();
        move || {
            if load.get_untracked().image_visible() {
                log::warn!("image failed to load, showing placeholder: {src}");
                load.update(ImageLoad::fail);
            }
        }
    };

    // server-rendered images may have errored before hydration attached the handler
    Effect::new({
        let fail = fail.clone();
        move |_| {
            if let Some(img) = img_ref.get() {
                if img.complete() && img.natural_width() == 0 {
                    fail();
                }
            }
        }
    });

    view! {
        <img
            node_ref=img_ref
            src=src
            alt=alt
            class=img_class
            class:hidden=move || !load.get().image_visible()
            on:error=move |_| fail()
        />
        <div
            class=fallback_class
            class:hidden=move || !load.get().fallback_visible()
            class:flex=move || load.get().fallback_visible()
        >
            <IconView icon=fallback size=fallback_size />
        </div>
    }
}
