//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    actions, px, App, AppContext, Application, Bounds, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions,
};

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::assets::Assets;
use crate::catalog::dataset;
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::features::explorer::controller::SETTINGS_FILE;
use crate::state::config_state::AppSettings;
use crate::utils::config_store;

actions!(explorer, [Quit]);

/// Run the Supplement Explorer application
pub fn run_app() {
    // Build the catalog before the UI comes up; malformed literal data is
    // fatal, individual renders never validate anything.
    let catalog = match dataset::builtin() {
        Ok(catalog) => catalog,
        Err(error) => {
            tracing::error!("Invalid builtin catalog: {error}");
            return;
        }
    };
    tracing::info!(records = catalog.len(), "Catalog loaded");

    let settings = config_store::load_settings::<AppSettings>(SETTINGS_FILE).unwrap_or_else(
        |error| {
            tracing::warn!("Failed to load settings, using defaults: {error}");
            AppSettings::default()
        },
    );

    Application::new().with_assets(Assets).run(move |cx: &mut App| {
        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Initialize global entities
        let entities = AppEntities::init(cx, catalog, settings);
        cx.set_global(entities.clone());

        // Create main window
        let bounds = Bounds::centered(
            None,
            gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("Supplement Explorer")),
                appears_transparent: true,
                traffic_light_position: Some(gpui::point(px(9.0), px(9.0))),
            }),
            ..Default::default()
        };

        if let Err(error) = cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), cx))
        }) {
            tracing::error!("Failed to open window: {error}");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
