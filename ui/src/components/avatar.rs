use dioxus::prelude::*;

use crate::core::user::{display_initial, display_photo, CurrentUser};

/// Round profile picture that swaps to an initial badge if the image fails to load.
#[component]
pub fn ProfileAvatar(
    user: Option<CurrentUser>,
    default_avatar: String,
    size_class: &'static str,
    on_badge_click: Option<EventHandler<()>>,
) -> Element {
    let mut failed = use_signal(|| false);

    let src = display_photo(user.as_ref())
        .map(str::to_string)
        .unwrap_or(default_avatar);
    let initial = display_initial(user.as_ref());

    rsx! {
        div { class: "avatar {size_class}",
            if failed() {
                div {
                    class: "avatar__badge",
                    onclick: move |_| {
                        if let Some(handler) = on_badge_click {
                            handler.call(());
                        }
                    },
                    "{initial}"
                }
            } else {
                img {
                    class: "avatar__image",
                    src: "{src}",
                    alt: "Profile",
                    onerror: move |_| failed.set(true),
                }
            }
        }
    }
}
