//! Sidebar Navigation Component
//!
//! Fixed-width navigation between the storefront, login and admin pages.

use crate::assets::CustomIconName;
use crate::constants::SIDEBAR_WIDTH;
use crate::states::{BestieGlobalStore, Route, SessionState, i18n_sidebar};
use gpui::{Context, Entity, Subscription, Window, div, prelude::*, px};
use gpui_component::{
    ActiveTheme, Icon, IconName,
    button::{Button, ButtonVariants},
    label::Label,
    tooltip::Tooltip,
    v_flex,
};

/// Sidebar navigation component
pub struct BestieSidebar {
    /// Current route for highlighting
    current_route: Route,
    session_state: Entity<SessionState>,
    _subscriptions: Vec<Subscription>,
}

impl BestieSidebar {
    /// Create a new sidebar
    pub fn new(_window: &mut Window, cx: &mut Context<Self>) -> Self {
        let store = cx.global::<BestieGlobalStore>();
        let app_state = store.app_state();
        let session_state = store.session_state();
        let current_route = store.read(cx).route();

        let subscriptions = vec![
            cx.observe(&app_state, |this, model, cx| {
                let route = model.read(cx).route();
                if this.current_route != route {
                    this.current_route = route;
                    cx.notify();
                }
            }),
            cx.observe(&session_state, |_this, _model, cx| cx.notify()),
        ];

        Self {
            current_route,
            session_state,
            _subscriptions: subscriptions,
        }
    }

    /// Render a navigation button
    fn render_nav_button(
        &self,
        id: &'static str,
        route: Route,
        icon: impl Into<Icon>,
        label_key: &'static str,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let is_active = self.current_route == route;
        let label = i18n_sidebar(cx, label_key);
        let tooltip_label = label.clone();
        let list_active = cx.theme().list_active;
        let list_active_border = cx.theme().list_active_border;

        let btn = Button::new(id)
            .ghost()
            .w_full()
            .h(px(56.0))
            .child(
                v_flex()
                    .items_center()
                    .justify_center()
                    .gap_1()
                    .child(icon.into())
                    .child(Label::new(label).text_xs()),
            )
            .on_click(move |_, _, cx| {
                let store = cx.global::<BestieGlobalStore>().clone();
                store.go_to(route, cx);
            });

        div()
            .id(id)
            .tooltip(move |window, cx| Tooltip::new(tooltip_label.clone()).build(window, cx))
            .when(is_active, |this| {
                this.bg(list_active)
                    .border_r_2()
                    .border_color(list_active_border)
            })
            .child(btn)
    }
}

impl Render for BestieSidebar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let border_color = cx.theme().border;
        let sidebar_bg = cx.theme().sidebar;
        let logged_in = self.session_state.read(cx).is_logged_in();

        v_flex()
            .id("sidebar")
            .w(px(SIDEBAR_WIDTH))
            .h_full()
            .flex_none()
            .border_r_1()
            .border_color(border_color)
            .bg(sidebar_bg)
            .pt_2()
            .child(self.render_nav_button(
                "nav-home",
                Route::Home,
                CustomIconName::Store,
                "home",
                cx,
            ))
            .child(self.render_nav_button(
                "nav-products",
                Route::Products,
                IconName::LayoutDashboard,
                "products",
                cx,
            ))
            .when(!logged_in, |this| {
                this.child(self.render_nav_button(
                    "nav-login",
                    Route::Login,
                    IconName::User,
                    "login",
                    cx,
                ))
            })
    }
}
