mod frontend;
mod utils;

use crate::frontend::app::App;
use crate::frontend::services::context::LaunchState;
use crate::frontend::services::session::Session;
use crate::utils::config::DashboardConfig;
use anyhow::Context;
use dioxus::LaunchBuilder;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};

fn main() -> anyhow::Result<()> {
    // Logging setup
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Config and saved session are read before the UI takes over the thread.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create runtime")?;

    let config = runtime.block_on(DashboardConfig::load()).unwrap_or_else(|e| {
        log::error!("Failed to load config, using defaults: {e}");
        DashboardConfig::default()
    });
    let session = runtime.block_on(Session::load(&config.session_dir()));
    drop(runtime);

    match &session {
        Some(session) => log::info!("Restored session for {}", session.username),
        None => log::info!("No saved session, starting logged out"),
    }

    let size = LogicalSize::new(1280.0, 832.0);
    let desktop = Config::default()
        .with_window(
            WindowBuilder::new()
                .with_title(config.title.clone())
                .with_inner_size(size)
                .with_min_inner_size(LogicalSize::new(960.0, 640.0)),
        )
        .with_root_name(config.root_element.clone())
        .with_menu(None);

    LaunchBuilder::new()
        .with_cfg(desktop)
        .with_context(LaunchState { config, session })
        .launch(App);

    Ok(())
}
