//! Bestie GUI - Main Entry Point

use bestie_gui::assets::Assets;
use bestie_gui::constants::{
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use bestie_gui::helpers::{get_or_create_data_dir, is_development};
use bestie_gui::logging::init_logging;
use bestie_gui::services::ServiceHub;
use bestie_gui::states::{BestieAppState, BestieGlobalStore, CatalogState, SessionState};
use bestie_gui::views::{BestieApp, apply_theme};
use gpui::{
    AnyView, App, AppContext, Application, Bounds, KeyBinding, TitlebarOptions, WindowBounds,
    WindowOptions, actions, point, px, size,
};
use gpui_component::Root;
use tracing::{error, info};

actions!(bestie, [Quit]);

fn main() {
    let log_level = if is_development() { "debug" } else { "info" };
    let _log_guard = match get_or_create_data_dir() {
        Ok(dir) => match init_logging(log_level, &dir.join("logs")) {
            Ok(guard) => Some(guard),
            Err(e) => {
                eprintln!("Failed to initialize logging: {e}");
                None
            }
        },
        Err(e) => {
            eprintln!("Failed to resolve data directory: {e}");
            None
        }
    };

    info!(version = env!("CARGO_PKG_VERSION"), "Starting Bestie GUI");

    let app_state = BestieAppState::try_load().unwrap_or_else(|e| {
        error!(error = %e, "Falling back to default app state");
        BestieAppState::new()
    });

    Application::new().with_assets(Assets).run(move |cx: &mut App| {
        gpui_component::init(cx);

        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());
        cx.bind_keys([KeyBinding::new("secondary-q", Quit, None)]);
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let services = ServiceHub::new(&app_state.service_config());
        let theme = app_state.theme();
        let bounds = app_state.bounds().cloned().unwrap_or_else(|| {
            Bounds::centered(
                None,
                size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
                cx,
            )
        });

        let store = BestieGlobalStore::new(
            cx.new(|_| app_state),
            cx.new(|_| SessionState::new()),
            cx.new(|_| CatalogState::new()),
            services,
        );
        cx.set_global(store);

        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            window_min_size: Some(size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
            titlebar: Some(TitlebarOptions {
                title: Some("Mera Bestie".into()),
                appears_transparent: true,
                traffic_light_position: Some(point(px(9.0), px(9.0))),
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            apply_theme(theme, window, cx);
            let view = cx.new(|cx| BestieApp::new(window, cx));
            cx.new(|cx| Root::new(AnyView::from(view), window, cx))
        });
        if let Err(e) = opened {
            error!(error = %e, "Failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
