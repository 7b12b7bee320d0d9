//! Holocron web — Dioxus front-end for the databank's live search.

use dioxus::prelude::*;

mod app;
mod search;
mod state;

use app::App;

fn main() {
    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env()
                    .add_directive("holocron=info".parse().unwrap()),
            )
            .with_target(false)
            .init();

        LaunchBuilder::new()
            .with_cfg(
                Config::default().with_menu(None).with_window(
                    WindowBuilder::new()
                        .with_title("Holocron")
                        .with_inner_size(LogicalSize::new(1100.0, 760.0))
                        .with_resizable(true),
                ),
            )
            .launch(App);
    }

    // The web renderer installs its own console logger
    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}
