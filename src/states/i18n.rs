//! Internationalization Helpers
//!
//! Translate strings for the current locale, one helper per namespace.

use super::BestieGlobalStore;
use gpui::{App, SharedString};
use rust_i18n::t;

fn translate(cx: &App, namespace: &str, key: &str) -> SharedString {
    let locale = cx.global::<BestieGlobalStore>().read(cx).locale();
    t!(format!("{namespace}.{key}"), locale = locale).into()
}

/// Get translated string from "common" namespace
pub fn i18n_common(cx: &App, key: &str) -> SharedString {
    translate(cx, "common", key)
}

/// Get translated string from "sidebar" namespace
pub fn i18n_sidebar(cx: &App, key: &str) -> SharedString {
    translate(cx, "sidebar", key)
}

/// Get translated string from "home" namespace
pub fn i18n_home(cx: &App, key: &str) -> SharedString {
    translate(cx, "home", key)
}

/// Get translated string from "login" namespace
pub fn i18n_login(cx: &App, key: &str) -> SharedString {
    translate(cx, "login", key)
}

/// Get translated string from "products" namespace
pub fn i18n_products(cx: &App, key: &str) -> SharedString {
    translate(cx, "products", key)
}

/// Format a translated string with arguments
///
/// # Example
/// ```ignore
/// // With translation `greeting: "Hi, {name}"`
/// i18n_format(cx, "common.greeting", &[("name", "Asha")])
/// ```
pub fn i18n_format(cx: &App, key: &str, args: &[(&str, &str)]) -> SharedString {
    let locale = cx.global::<BestieGlobalStore>().read(cx).locale();
    let mut result = t!(key, locale = locale).to_string();

    for (name, value) in args {
        result = result.replace(&format!("{{{name}}}"), value);
    }

    result.into()
}

#[cfg(test)]
mod tests {
    use gpui::TestAppContext;

    use super::*;
    use crate::states::fixtures::install_store;

    #[gpui::test]
    fn test_lookup_follows_locale_change(cx: &mut TestAppContext) {
        let store = cx.update(install_store);
        let before = cx.read(|cx| i18n_login(cx, "password_placeholder"));

        cx.update(|cx| {
            store
                .app_state()
                .update(cx, |state, _cx| state.set_locale("hi"))
                .expect("supported locale")
        });
        let after = cx.read(|cx| i18n_login(cx, "password_placeholder"));

        assert_eq!(before.to_string(), "Your password");
        assert_eq!(after.to_string(), "आपका पासवर्ड");
    }
}
