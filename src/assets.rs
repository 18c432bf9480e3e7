//! Embedded assets for Bestie-GUI
//!
//! Uses rust-embed to bundle icons and other assets at compile time.

use gpui::{AssetSource, Result, SharedString};
use gpui_component::Icon;
use gpui_component_assets::Assets as ComponentAssets;
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "icons/**/*.svg"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        // Try component assets first
        if let Some(f) = ComponentAssets::get(path) {
            return Ok(Some(f.data));
        }
        // Then try our own assets
        Self::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut files: Vec<SharedString> = ComponentAssets::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect();

        files.extend(
            Self::iter()
                .filter_map(|p| p.starts_with(path).then(|| p.into()))
                .collect::<Vec<_>>(),
        );

        Ok(files)
    }
}

/// Icons bundled with the app (not in the component icon set)
pub enum CustomIconName {
    /// Storefront nav entry
    Store,
    LogOut,
    /// Edit a product row
    Pencil,
    /// Commit an edit
    Save,
    RefreshCw,
}

impl CustomIconName {
    /// Get the SVG path for this icon
    pub fn path(self) -> SharedString {
        match self {
            CustomIconName::Store => "icons/store.svg",
            CustomIconName::LogOut => "icons/log-out.svg",
            CustomIconName::Pencil => "icons/pencil.svg",
            CustomIconName::Save => "icons/save.svg",
            CustomIconName::RefreshCw => "icons/refresh-cw.svg",
        }
        .into()
    }
}

impl From<CustomIconName> for Icon {
    fn from(val: CustomIconName) -> Self {
        Icon::empty().path(val.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_icons_are_embedded() {
        for icon in [
            CustomIconName::Store,
            CustomIconName::LogOut,
            CustomIconName::Pencil,
            CustomIconName::Save,
            CustomIconName::RefreshCw,
        ] {
            let path = icon.path();
            assert!(Assets::get(&path).is_some(), "missing {path}");
        }
    }
}
