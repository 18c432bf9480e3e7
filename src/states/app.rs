//! Application State
//!
//! Global application state: routing, theme, locale, window bounds and the
//! API base URL. Everything here is a UI preference; business data is never
//! persisted.

use crate::constants::APP_NAME;
use crate::error::{Error, Result};
use crate::helpers::get_or_create_config_dir;
use crate::services::{ServiceConfig, ServiceHub};
use crate::states::{CatalogState, SessionState};
use gpui::{Action, App, Bounds, Context, Entity, Global, Pixels};
use gpui_component::ThemeMode;
use locale_config::Locale;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{error, info};

/// Application routes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// Storefront: banner, categories and visible products
    #[default]
    Home,
    /// Login form
    Login,
    /// Admin products table (requires a session)
    Products,
}

impl Route {
    /// Whether the route needs a logged-in session
    pub fn requires_session(self) -> bool {
        matches!(self, Route::Products)
    }
}

/// Locales with a translation catalogue
pub const SUPPORTED_LOCALES: [&str; 2] = ["en", "hi"];

// ==================== Actions ====================

/// Theme selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum ThemeAction {
    Light,
    Dark,
    System,
}

/// Locale selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum LocaleAction {
    En,
    Hi,
}

impl LocaleAction {
    pub fn code(self) -> &'static str {
        match self {
            LocaleAction::En => "en",
            LocaleAction::Hi => "hi",
        }
    }
}

// ==================== Persisted State ====================

const LIGHT_THEME_MODE: &str = "light";
const DARK_THEME_MODE: &str = "dark";

fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join(format!("{APP_NAME}.toml"));
    if !path.exists() {
        std::fs::write(&path, "")?;
    }
    Ok(path)
}

/// Language part of an OS locale tag such as `hi-IN`, if supported
fn supported_language(tag: &str) -> Option<String> {
    let lang = tag.split(['-', '_']).next()?.to_lowercase();
    SUPPORTED_LOCALES.contains(&lang.as_str()).then_some(lang)
}

/// Persisted application state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BestieAppState {
    route: Route,
    locale: Option<String>,
    bounds: Option<Bounds<Pixels>>,
    theme: Option<String>,
    api_base_url: Option<String>,
}

impl BestieAppState {
    /// Load state from config file
    pub fn try_load() -> Result<Self> {
        let path = get_config_path()?;
        info!(path = ?path, "Loading config file");
        let value = std::fs::read_to_string(&path)?;
        Self::from_toml(&value).inspect_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
        })
    }

    fn from_toml(value: &str) -> Result<Self> {
        let mut state: Self = if value.trim().is_empty() {
            Self::new()
        } else {
            toml::from_str(value)?
        };

        // Detect system locale if not set
        if state.locale.as_ref().is_none_or(|l| l.is_empty()) {
            state.locale = supported_language(&Locale::current().to_string());
        }

        // Always start at home
        state.route = Route::Home;

        Ok(state)
    }

    /// Create new default state
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn bounds(&self) -> Option<&Bounds<Pixels>> {
        self.bounds.as_ref()
    }

    pub fn theme(&self) -> Option<ThemeMode> {
        match self.theme.as_deref() {
            Some(LIGHT_THEME_MODE) => Some(ThemeMode::Light),
            Some(DARK_THEME_MODE) => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn locale(&self) -> &str {
        self.locale.as_deref().unwrap_or("en")
    }

    /// Service settings derived from the persisted preferences
    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            api_base_url: self.api_base_url.clone(),
        }
    }

    // ==================== Setters ====================

    pub fn go_to(&mut self, route: Route, cx: &mut Context<Self>) {
        if self.route != route {
            self.route = route;
            cx.notify();
        }
    }

    pub fn set_bounds(&mut self, bounds: Bounds<Pixels>) {
        self.bounds = Some(bounds);
    }

    pub fn set_theme(&mut self, theme: Option<ThemeMode>) {
        self.theme = match theme {
            Some(ThemeMode::Light) => Some(LIGHT_THEME_MODE.to_string()),
            Some(ThemeMode::Dark) => Some(DARK_THEME_MODE.to_string()),
            _ => None,
        };
    }

    pub fn set_locale(&mut self, locale: &str) -> Result<()> {
        if !SUPPORTED_LOCALES.contains(&locale) {
            return Err(Error::Invalid {
                message: format!("unsupported locale '{locale}'"),
            });
        }
        self.locale = Some(locale.to_string());
        Ok(())
    }
}

// ==================== Global Store ====================

/// Global store accessible via `cx.global::<BestieGlobalStore>()`
#[derive(Clone)]
pub struct BestieGlobalStore {
    app_state: Entity<BestieAppState>,
    session_state: Entity<SessionState>,
    catalog_state: Entity<CatalogState>,
    services: ServiceHub,
}

impl BestieGlobalStore {
    /// Create a new global store
    pub fn new(
        app_state: Entity<BestieAppState>,
        session_state: Entity<SessionState>,
        catalog_state: Entity<CatalogState>,
        services: ServiceHub,
    ) -> Self {
        Self {
            app_state,
            session_state,
            catalog_state,
            services,
        }
    }

    /// Get the app state entity
    pub fn app_state(&self) -> Entity<BestieAppState> {
        self.app_state.clone()
    }

    /// Get the session state entity
    pub fn session_state(&self) -> Entity<SessionState> {
        self.session_state.clone()
    }

    /// Get the storefront catalog entity
    pub fn catalog_state(&self) -> Entity<CatalogState> {
        self.catalog_state.clone()
    }

    /// Get the service hub
    pub fn services(&self) -> &ServiceHub {
        &self.services
    }

    /// Read app state
    pub fn read<'a>(&self, cx: &'a App) -> &'a BestieAppState {
        self.app_state.read(cx)
    }

    /// Navigate, without persisting (the route always resets to Home)
    pub fn go_to(&self, route: Route, cx: &mut App) {
        self.app_state.update(cx, |state, cx| state.go_to(route, cx));
    }
}

impl Global for BestieGlobalStore {}

// ==================== Persistence ====================

/// Save app state to disk
pub fn save_app_state(state: &BestieAppState) -> Result<()> {
    let path = get_config_path()?;
    let value = toml::to_string(state)?;
    std::fs::write(path, value)?;
    Ok(())
}

/// Update app state and save to disk asynchronously
pub fn update_app_state_and_save<F>(cx: &App, action_name: &'static str, mutation: F)
where
    F: FnOnce(&mut BestieAppState, &App) + Send + 'static,
{
    let app_state = cx.global::<BestieGlobalStore>().app_state();

    cx.spawn(async move |cx| {
        let current_state = app_state.update(cx, |state, cx| {
            mutation(state, cx);
            cx.notify();
            state.clone()
        });

        if let Ok(state) = current_state {
            cx.background_executor()
                .spawn(async move {
                    if let Err(e) = save_app_state(&state) {
                        error!(error = %e, action = action_name, "Failed to save state");
                    } else {
                        info!(action = action_name, "State saved successfully");
                    }
                })
                .await;
        }

        cx.update(|cx| cx.refresh_windows()).ok();
    })
    .detach();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_starts_home() {
        let state = BestieAppState::from_toml("").expect("state");
        assert_eq!(state.route(), Route::Home);
        assert!(state.theme().is_none());
    }

    #[test]
    fn test_route_resets_and_preferences_survive() {
        let toml = r#"
route = "Products"
locale = "hi"
theme = "dark"
api_base_url = "http://localhost:5000"
"#;
        let state = BestieAppState::from_toml(toml).expect("state");
        assert_eq!(state.route(), Route::Home);
        assert_eq!(state.locale(), "hi");
        assert_eq!(state.theme(), Some(ThemeMode::Dark));
        assert_eq!(
            state.service_config().api_base_url.as_deref(),
            Some("http://localhost:5000")
        );
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut state = BestieAppState::new();
        state.set_locale("hi").expect("locale");
        state.set_theme(Some(ThemeMode::Light));
        let text = toml::to_string(&state).expect("serialize");
        let loaded = BestieAppState::from_toml(&text).expect("load");
        assert_eq!(loaded.locale(), "hi");
        assert_eq!(loaded.theme(), Some(ThemeMode::Light));
    }

    #[test]
    fn test_unsupported_locale_rejected() {
        let mut state = BestieAppState::new();
        assert!(state.set_locale("fr").is_err());
        assert_eq!(supported_language("hi-IN").as_deref(), Some("hi"));
        assert_eq!(supported_language("en_US").as_deref(), Some("en"));
        assert_eq!(supported_language("de-DE"), None);
    }

    #[test]
    fn test_products_route_requires_session() {
        assert!(Route::Products.requires_session());
        assert!(!Route::Home.requires_session());
        assert!(!Route::Login.requires_session());
    }
}
