use dioxus::desktop::{Config as DioxusConfig, WindowBuilder};
use dioxus::prelude::*;
use std::sync::Arc;

use crate::api::DocumentApi;
use crate::config::Config;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Shared services reachable from every component through `use_context`
#[derive(Clone)]
pub struct AppContext {
    pub config: Config,
    pub api: Arc<dyn DocumentApi>,
}

pub fn make_config(title: &str) -> DioxusConfig {
    DioxusConfig::default().with_window(make_window(title))
}

fn make_window(title: &str) -> WindowBuilder {
    WindowBuilder::new()
        .with_title(title)
        .with_always_on_top(false)
        .with_inner_size(dioxus::desktop::LogicalSize::new(720, 640))
}

/// Open a desktop window running `root` with `ctx` in the root context
pub fn launch(title: &str, ctx: AppContext, root: fn() -> Element) {
    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_config(title))
        .with_context(ctx)
        .launch(root);
}
