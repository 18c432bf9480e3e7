//! Title Bar Component
//!
//! Branding, the user greeting, the settings menu and login/logout.

use crate::assets::CustomIconName;
use crate::states::{
    BestieGlobalStore, LocaleAction, Route, SessionState, ThemeAction, i18n_common, i18n_format,
    i18n_sidebar,
};
use gpui::{App, Context, Corner, Entity, Subscription, Window, prelude::*};
use gpui_component::{
    ActiveTheme, Icon, IconName, Sizable, ThemeMode, TitleBar,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    menu::{DropdownMenu, PopupMenu},
};

/// Greeting shown next to the profile icon
pub fn greeting_name(user_name: Option<&str>) -> Option<&str> {
    user_name.filter(|name| !name.trim().is_empty())
}

/// Title bar component
pub struct BestieTitleBar {
    session_state: Entity<SessionState>,
    _subscriptions: Vec<Subscription>,
}

impl BestieTitleBar {
    /// Create a new title bar
    pub fn new(_window: &mut Window, cx: &mut Context<Self>) -> Self {
        let session_state = cx.global::<BestieGlobalStore>().session_state();
        let subscriptions = vec![cx.observe(&session_state, |_this, _model, cx| cx.notify())];
        Self {
            session_state,
            _subscriptions: subscriptions,
        }
    }

    /// Render the settings dropdown menu
    fn render_settings_menu(menu: PopupMenu, _window: &mut Window, cx: &App) -> PopupMenu {
        let store = cx.global::<BestieGlobalStore>().read(cx);
        let (locale, theme) = (store.locale(), store.theme());

        menu
            // Language section
            .label(i18n_sidebar(cx, "language"))
            .menu_with_check("English", locale == "en", Box::new(LocaleAction::En))
            .menu_with_check("हिन्दी", locale == "hi", Box::new(LocaleAction::Hi))
            .separator()
            // Theme section
            .label(i18n_sidebar(cx, "theme"))
            .menu_with_check(
                i18n_sidebar(cx, "light"),
                theme == Some(ThemeMode::Light),
                Box::new(ThemeAction::Light),
            )
            .menu_with_check(
                i18n_sidebar(cx, "dark"),
                theme == Some(ThemeMode::Dark),
                Box::new(ThemeAction::Dark),
            )
            .menu_with_check(
                i18n_sidebar(cx, "system"),
                theme.is_none(),
                Box::new(ThemeAction::System),
            )
    }

    fn render_account_button(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let logged_in = self.session_state.read(cx).is_logged_in();
        let session_state = self.session_state.clone();

        if logged_in {
            Button::new("logout")
                .tooltip(i18n_common(cx, "logout"))
                .icon(CustomIconName::LogOut)
                .small()
                .ghost()
                .on_click(move |_, _, cx| {
                    session_state.update(cx, |state, cx| state.logout(cx));
                })
        } else {
            Button::new("login")
                .label(i18n_common(cx, "login"))
                .small()
                .ghost()
                .on_click(|_, _, cx| {
                    let store = cx.global::<BestieGlobalStore>().clone();
                    store.go_to(Route::Login, cx);
                })
        }
    }
}

impl Render for BestieTitleBar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let name = self
            .session_state
            .read(cx)
            .context()
            .and_then(|context| greeting_name(context.user_name()).map(str::to_string));
        let greeting = match name {
            Some(name) => i18n_format(cx, "common.greeting", &[("name", &name)]),
            None => i18n_common(cx, "greeting_profile"),
        };

        TitleBar::new()
            // Left side - brand
            .child(
                h_flex()
                    .flex_1()
                    .items_center()
                    .pl_4()
                    .gap_2()
                    .child(
                        Label::new("Mera Bestie")
                            .text_sm()
                            .text_color(cx.theme().primary),
                    ),
            )
            // Right side - greeting, settings, account
            .child(
                h_flex()
                    .items_center()
                    .justify_end()
                    .px_2()
                    .gap_2()
                    .mr_2()
                    .child(
                        h_flex()
                            .gap_1()
                            .items_center()
                            .child(Icon::new(IconName::User).small())
                            .child(Label::new(greeting).text_sm()),
                    )
                    .child(
                        Button::new("settings")
                            .tooltip(i18n_sidebar(cx, "settings"))
                            .icon(IconName::Settings2)
                            .small()
                            .ghost()
                            .dropdown_menu(move |menu, window, cx| {
                                Self::render_settings_menu(menu, window, cx)
                            })
                            .anchor(Corner::TopRight),
                    )
                    .child(self.render_account_button(cx)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_falls_back_when_name_blank() {
        assert_eq!(greeting_name(Some("Asha")), Some("Asha"));
        assert_eq!(greeting_name(Some("  ")), None);
        assert_eq!(greeting_name(None), None);
    }
}
