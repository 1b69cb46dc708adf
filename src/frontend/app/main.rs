//! Application routing system.

use crate::frontend::components::layout::{PlatformManager, PublicExterior, Shell};
use crate::frontend::pages::{
    Charts, ConfigureDevices, Dashboard, Login, PageNotFound, Platform, Platforms,
};
use crate::frontend::routing::Access;
use crate::frontend::services::context::{LaunchState, Stores};
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

/// Main routing enum for the application.
#[derive(Clone, Routable, Debug, PartialEq, Eq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[redirect("/", || Route::Dashboard {})]
        /// Protected pages share the platform manager chrome.
        #[layout(PlatformManager)]
            #[route("/dashboard")]
            Dashboard {},
            #[route("/platforms")]
            Platforms {},
            /// Single platform, addressed by its instance uuid.
            #[route("/platform/:uuid")]
            Platform { uuid: String },
            #[route("/configure-devices")]
            ConfigureDevices {},
            #[route("/charts")]
            Charts {},
        #[end_layout]
        #[layout(PublicExterior)]
            #[route("/login")]
            Login {},
        #[end_layout]
        /// Anything else.
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

impl Route {
    pub fn login() -> Self {
        Self::Login {}
    }

    /// Where a successful login lands.
    pub fn after_login() -> Self {
        Self::Dashboard {}
    }

    /// Access level checked by the gate. `None` means the route is never gated.
    pub fn access(&self) -> Option<Access> {
        match self {
            Self::Dashboard {}
            | Self::Platforms {}
            | Self::Platform { .. }
            | Self::ConfigureDevices {}
            | Self::Charts {} => Some(Access::Protected),
            Self::Login {} => Some(Access::Public),
            Self::PageNotFound { .. } => None,
        }
    }
}

#[component]
pub fn App() -> Element {
    let launch = use_context::<LaunchState>();
    use_context_provider(|| Stores::new(launch.session.clone()));
    use_context_provider(|| launch.config.clone());

    rsx! {
        Router::<Route> {}
    }
}
