//! Application Root View
//!
//! Lays out the title bar, sidebar and content, owns the notification
//! layer and handles the theme and locale actions.

use crate::states::{
    BestieGlobalStore, LocaleAction, NotificationSeverity, ThemeAction, UIEvent,
    update_app_state_and_save,
};
use crate::views::{BestieContent, BestieSidebar, BestieTitleBar};
use gpui::{App, Context, Entity, Subscription, Window, prelude::*};
use gpui_component::{
    Root, Theme, ThemeMode, WindowExt, h_flex,
    notification::{Notification, NotificationType},
    v_flex,
};
use tracing::warn;

/// Push a state-layer event to the window's notification layer
pub fn show_ui_event(event: &UIEvent, window: &mut Window, cx: &mut App) {
    let UIEvent::Toast { message, severity } = event;
    let kind = match severity {
        NotificationSeverity::Success => NotificationType::Success,
        NotificationSeverity::Error => NotificationType::Error,
    };
    window.push_notification(
        Notification::new()
            .message(message.to_string())
            .with_type(kind),
        cx,
    );
}

/// Apply a theme choice; `None` follows the OS
pub fn apply_theme(mode: Option<ThemeMode>, window: &mut Window, cx: &mut App) {
    match mode {
        Some(mode) => Theme::change(mode, Some(window), cx),
        None => Theme::sync_system_appearance(Some(window), cx),
    }
}

/// Top-level view placed inside [`Root`]
pub struct BestieApp {
    title_bar: Entity<BestieTitleBar>,
    sidebar: Entity<BestieSidebar>,
    content: Entity<BestieContent>,
    _subscriptions: Vec<Subscription>,
}

impl BestieApp {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let store = cx.global::<BestieGlobalStore>().clone();

        let title_bar = cx.new(|cx| BestieTitleBar::new(window, cx));
        let sidebar = cx.new(|cx| BestieSidebar::new(window, cx));
        let content = cx.new(|cx| BestieContent::new(window, cx));

        let subscriptions = vec![
            cx.subscribe_in(
                &store.session_state(),
                window,
                |_this, _state, event, window, cx| show_ui_event(event, window, cx),
            ),
            cx.subscribe_in(
                &store.catalog_state(),
                window,
                |_this, _state, event, window, cx| show_ui_event(event, window, cx),
            ),
            cx.observe_window_bounds(window, |_this, window, cx| {
                let bounds = window.bounds();
                update_app_state_and_save(cx, "window_bounds", move |state, _cx| {
                    state.set_bounds(bounds);
                });
            }),
        ];

        Self {
            title_bar,
            sidebar,
            content,
            _subscriptions: subscriptions,
        }
    }

    fn on_theme_action(
        &mut self,
        action: &ThemeAction,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let mode = match action {
            ThemeAction::Light => Some(ThemeMode::Light),
            ThemeAction::Dark => Some(ThemeMode::Dark),
            ThemeAction::System => None,
        };
        apply_theme(mode, window, cx);
        update_app_state_and_save(cx, "theme", move |state, _cx| state.set_theme(mode));
    }

    fn on_locale_action(
        &mut self,
        action: &LocaleAction,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let code = action.code();
        update_app_state_and_save(cx, "locale", move |state, _cx| {
            if let Err(e) = state.set_locale(code) {
                warn!(error = %e, "Locale not applied");
            }
        });
    }
}

impl Render for BestieApp {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .size_full()
            .on_action(cx.listener(Self::on_theme_action))
            .on_action(cx.listener(Self::on_locale_action))
            .child(self.title_bar.clone())
            .child(
                h_flex()
                    .flex_1()
                    .w_full()
                    .overflow_hidden()
                    .child(self.sidebar.clone())
                    .child(self.content.clone()),
            )
            .children(Root::render_notification_layer(window, cx))
    }
}
