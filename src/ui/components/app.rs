use crate::ui::{AppContext, MAIN_CSS};
use dioxus::prelude::*;
use tracing::debug;

use super::{SearchPage, UploadPage};

/// Root of the data-owner window
#[component]
pub fn UploadApp() -> Element {
    let app = use_context::<AppContext>();
    debug!("Rendering upload app, API at {}", app.config.api_base_url);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "App", UploadPage {} }
    }
}

/// Root of the data-user window
#[component]
pub fn SearchApp() -> Element {
    let app = use_context::<AppContext>();
    debug!("Rendering search app, API at {}", app.config.api_base_url);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "App", SearchPage {} }
    }
}
