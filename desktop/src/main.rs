use dioxus::prelude::*;
use views::{AddRecord, Archive, Dashboard, Login, RecordDetail, Settings, SidebarLayout};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[layout(SidebarLayout)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/records/new")]
        AddRecord {},
        #[route("/records")]
        Archive {},
        #[route("/records/:id")]
        RecordDetail { id: String },
        #[route("/settings")]
        Settings {},
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }
        ui::StoreProvider {
            AccentStyle {}
            Router::<Route> {}
        }
    }
}

/// Expose the configurable accent color as the CSS variables the stylesheet
/// is written against.
#[component]
fn AccentStyle() -> Element {
    let settings = ui::use_settings();
    let accent = settings().accent_color;
    let soft = settings().accent_soft();
    let css = format!(":root {{ --accent: {accent}; --accent-soft: {soft}; }}");
    rsx! {
        style { "{css}" }
    }
}

#[component]
fn Root() -> Element {
    let session = ui::use_session();
    let nav = use_navigator();

    // Redirect based on the persisted session.
    if !session().loading {
        if session().user.is_some() {
            nav.replace(Route::Dashboard {});
        } else {
            nav.replace(Route::Login {});
        }
    }

    rsx! {}
}
