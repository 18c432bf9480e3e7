//! UI Constants
//!
//! Layout sizes and application-wide defaults.

/// Sidebar navigation width in pixels
pub const SIDEBAR_WIDTH: f32 = 80.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 900.0;
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;

/// Width of one storefront product card
pub const PRODUCT_CARD_WIDTH: f32 = 220.0;

/// Login form width
pub const LOGIN_FORM_WIDTH: f32 = 380.0;

/// Column widths of the admin products table
pub const PRODUCT_ID_COLUMN_WIDTH: f32 = 90.0;
pub const PRODUCT_NAME_COLUMN_WIDTH: f32 = 220.0;
pub const PRODUCT_COLUMN_WIDTH: f32 = 120.0;
pub const PRODUCT_ACTIONS_COLUMN_WIDTH: f32 = 110.0;

/// Backend used when neither the config file nor the environment names one
pub const DEFAULT_API_BASE_URL: &str = "https://ecommercebackend-8gx8.onrender.com";

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "BESTIE_API_URL";

/// Application name used for config, data and log files
pub const APP_NAME: &str = "bestie-gui";
