use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::components::avatar::ProfileAvatar;
use crate::core::config::navbar_config;
use crate::core::dismiss::{OutsideDismiss, RegionHandle};
use crate::core::nav::{self, LinkState, NavbarPlan};
use crate::core::state::NavbarState;
use crate::core::user::{display_email, display_name, CurrentUser};
use crate::dom::{AlertNotifier, DocumentPointerSource};

// Navbar stylesheet (linked as an asset; inlined as well in release native builds)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

type DismissSlot = Rc<RefCell<Option<OutsideDismiss<DocumentPointerSource>>>>;

/// Handed to `on_change_photo`. The photo flow calls [`close`](Self::close) when
/// it ends; until then further badge clicks raise nothing.
#[derive(Clone, Copy, PartialEq)]
pub struct ChangePhotoRequest {
    state: Signal<NavbarState>,
}

impl ChangePhotoRequest {
    pub fn close(self) {
        let mut state = self.state;
        state.with_mut(|s| s.close_change_photo());
    }
}

/// Top navigation bar for the publication desk.
///
/// The platform passes the current route as a string (`route.to_string()`), so
/// `ui` never needs the platform's `Route` enum. Auth state comes from the
/// [`AuthContext`](crate::auth::AuthContext) provided higher up.
///
/// Renders nothing on the login/register pages and only a fault notice when the
/// auth context reports an error (or is missing). Otherwise renders the brand,
/// the publication links with the active one underlined, and a profile dropdown
/// that closes on any press outside its trigger and panel.
#[component]
pub fn AppNavbar(
    current_path: String,
    on_change_photo: Option<EventHandler<ChangePhotoRequest>>,
) -> Element {
    let config = navbar_config();
    let auth = use_auth();
    let navigator = use_navigator();
    let mut state = use_signal(NavbarState::default);

    let trigger = use_hook(|| RegionHandle::new("profile-trigger"));
    let panel = use_hook(|| RegionHandle::new("profile-panel"));

    // One document listener per mount, released in use_drop.
    let dismiss: DismissSlot = use_hook({
        let trigger = trigger.clone();
        let panel = panel.clone();
        move || {
            let installed = DocumentPointerSource::new().and_then(|source| {
                OutsideDismiss::install(source, trigger, panel, move || {
                    let mut state = state;
                    if state.peek().dropdown_open {
                        state.with_mut(|s| s.close_dropdown());
                    }
                })
            });
            match installed {
                Ok(guard) => Rc::new(RefCell::new(Some(guard))),
                Err(err) => {
                    tracing::warn!(%err, "outside-click dismissal unavailable");
                    Rc::new(RefCell::new(None))
                }
            }
        }
    });
    use_drop(move || {
        if let Some(mut guard) = dismiss.borrow_mut().take() {
            guard.release();
        }
    });

    let open = state().dropdown_open;
    panel.sync_rendered(open);

    if auth.is_none() {
        tracing::warn!("AppNavbar rendered without an auth context");
    }
    let status = auth.as_ref().map(|ctx| ctx.status()).unwrap_or_default();
    let faulted = auth.is_none() || status.is_faulted();

    let links = match nav::plan(&current_path, config, faulted) {
        NavbarPlan::Hidden => return rsx! {},
        NavbarPlan::Fault => {
            return rsx! {
                div { class: "navbar__fault", role: "alert", "{config.fault_notice}" }
            }
        }
        NavbarPlan::Bar(links) => links,
    };

    let user: Option<CurrentUser> = auth.as_ref().and_then(|ctx| ctx.current_user());
    let logging_out = status.logging_out;
    let user_name = display_name(user.as_ref()).to_string();
    let user_email = display_email(user.as_ref()).to_string();
    let avatar_key = user
        .as_ref()
        .and_then(|u| u.profile_photo.clone())
        .unwrap_or_default();

    let on_logout = move |_: MouseEvent| {
        let Some(ctx) = auth.clone() else {
            return;
        };
        let navigator = navigator.clone();
        spawn(async move {
            let outcome = ctx
                .logout(&navigator, &AlertNotifier, &config.login_path)
                .await;
            state.with_mut(|s| s.finish_logout(&outcome));
        });
    };

    let change_photo = move |_: ()| {
        if !state.with_mut(|s| s.request_change_photo()) {
            return;
        }
        if let Some(handler) = on_change_photo {
            handler.call(ChangePhotoRequest { state });
        }
    };

    let trigger_key = trigger.key().to_string();
    let panel_key = panel.key().to_string();
    let trigger_mounted = trigger.clone();
    let panel_mounted = panel.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        nav { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    img {
                        class: "navbar__logo",
                        src: "{config.logo_url}",
                        alt: "BPS Logo",
                    }
                    span { class: "navbar__brand-title", "{config.brand_title}" }
                }

                div { class: "navbar__links",
                    for link in links {
                        {render_link(link)}
                    }

                    div { class: "navbar__profile",
                        button {
                            r#type: "button",
                            class: "navbar__profile-trigger",
                            "data-region": "{trigger_key}",
                            aria_haspopup: "menu",
                            aria_expanded: "{open}",
                            onmounted: move |_| trigger_mounted.attach(),
                            onclick: move |_| state.with_mut(|s| s.toggle_dropdown()),
                            ProfileAvatar {
                                key: "{avatar_key}",
                                user: user.clone(),
                                default_avatar: config.default_avatar.clone(),
                                size_class: "avatar--small",
                            }
                        }

                        if open {
                            div {
                                class: "navbar__panel",
                                role: "menu",
                                "data-region": "{panel_key}",
                                onmounted: move |_| panel_mounted.attach(),
                                div { class: "navbar__panel-header",
                                    ProfileAvatar {
                                        key: "{avatar_key}",
                                        user: user.clone(),
                                        default_avatar: config.default_avatar.clone(),
                                        size_class: "avatar--large",
                                        on_badge_click: change_photo,
                                    }
                                    div { class: "navbar__panel-identity",
                                        div { class: "navbar__panel-name", "{user_name}" }
                                        div { class: "navbar__panel-email", "{user_email}" }
                                    }
                                }
                                button {
                                    r#type: "button",
                                    class: "navbar__logout",
                                    role: "menuitem",
                                    disabled: logging_out,
                                    onclick: on_logout,
                                    span { class: "navbar__logout-icon", aria_hidden: "true", "logout" }
                                    if logging_out { "Logging out..." } else { "Logout" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_link(link: LinkState) -> Element {
    let underline = if link.active {
        "navbar__underline navbar__underline--active"
    } else {
        "navbar__underline"
    };

    rsx! {
        Link {
            key: "{link.item.key()}",
            class: "navbar__link",
            to: link.item.path,
            span { class: "navbar__link-label", "{link.item.label}" }
            span { class: "{underline}" }
        }
    }
}
