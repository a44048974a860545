use dioxus::prelude::*;

use ui::auth::{use_auth_provider, ServerAuth};
use ui::components::{AppNavbar, ChangePhotoRequest};
use ui::views::{AddPublication, AddPublicationDraft, Home, Login, Publications, Register};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/publications")]
    Publications {},
    #[route("/publications/add")]
    AddPublication {},
    #[route("/publications/add/:draft")]
    AddPublicationDraft { draft: String },
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_auth_provider(ServerAuth::shared);

    rsx! {
        // Global app resources
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// A web-specific layout around the shared `AppNavbar` component
/// which feeds it the current path from the web `Route` enum.
#[component]
fn WebNavbar() -> Element {
    let route: Route = use_route();

    rsx! {
        AppNavbar {
            current_path: route.to_string(),
            on_change_photo: move |request: ChangePhotoRequest| {
                // No photo flow is mounted yet; release the request right away.
                dioxus::logger::tracing::info!("change photo requested");
                request.close();
            },
        }
        Outlet::<Route> {}
    }
}
