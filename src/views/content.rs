//! Main Content Area
//!
//! Routes to the storefront, the login form or the admin products table.
//! The products table is session-scoped: it is created on first visit with
//! an open session and dropped as soon as the session closes.

use crate::states::{
    BestieAppState, BestieGlobalStore, Route, SessionState, i18n_common, i18n_products,
};
use crate::views::{HomeView, LoginView, ProductsTableView, show_ui_event};
use gpui::{Context, Entity, Subscription, Window, div, prelude::*};
use gpui_component::{
    ActiveTheme,
    button::{Button, ButtonVariants},
    label::Label,
    v_flex,
};
use tracing::debug;

/// Main content container component
pub struct BestieContent {
    current_route: Route,
    app_state: Entity<BestieAppState>,
    session_state: Entity<SessionState>,
    home: Entity<HomeView>,
    login: Entity<LoginView>,
    /// Present only while a session is open
    products: Option<Entity<ProductsTableView>>,
    _products_events: Option<Subscription>,
    _subscriptions: Vec<Subscription>,
}

impl BestieContent {
    /// Create a new content view
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let store = cx.global::<BestieGlobalStore>();
        let app_state = store.app_state();
        let session_state = store.session_state();
        let current_route = store.read(cx).route();

        let subscriptions = vec![
            cx.observe_in(&app_state, window, |this, _model, window, cx| {
                this.sync(window, cx);
            }),
            cx.observe_in(&session_state, window, |this, _model, window, cx| {
                this.sync(window, cx);
            }),
        ];

        let home = cx.new(|cx| HomeView::new(window, cx));
        let login = cx.new(|cx| LoginView::new(window, cx));

        let mut content = Self {
            current_route,
            app_state,
            session_state,
            home,
            login,
            products: None,
            _products_events: None,
            _subscriptions: subscriptions,
        };
        content.sync(window, cx);
        content
    }

    /// Reconcile the route and session-scoped views with the current state
    fn sync(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.current_route = self.app_state.read(cx).route();
        let logged_in = self.session_state.read(cx).is_logged_in();

        if !logged_in && self.products.is_some() {
            debug!("Dropping session-scoped products view");
            self.products = None;
            self._products_events = None;
        }

        if logged_in && self.current_route.requires_session() && self.products.is_none() {
            let store = cx.global::<BestieGlobalStore>().services().store().clone();
            let view = cx.new(|cx| ProductsTableView::new(store, window, cx));
            let products_state = view.read(cx).products_state().clone();
            self._products_events = Some(cx.subscribe_in(
                &products_state,
                window,
                |_this, _state, event, window, cx| show_ui_event(event, window, cx),
            ));
            self.products = Some(view);
        }

        cx.notify();
    }

    /// Shown on the admin route without a session
    fn render_login_prompt(&self, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .size_full()
            .items_center()
            .justify_center()
            .gap_3()
            .child(
                Label::new(i18n_products(cx, "login_required"))
                    .text_color(cx.theme().muted_foreground),
            )
            .child(
                Button::new("content-go-login")
                    .primary()
                    .label(i18n_common(cx, "login"))
                    .on_click(|_, _, cx| {
                        let store = cx.global::<BestieGlobalStore>().clone();
                        store.go_to(Route::Login, cx);
                    }),
            )
    }
}

impl Render for BestieContent {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let content = match (self.current_route, self.products.as_ref()) {
            (Route::Home, _) => self.home.clone().into_any_element(),
            (Route::Login, _) => self.login.clone().into_any_element(),
            (Route::Products, Some(products)) => products.clone().into_any_element(),
            (Route::Products, None) => self.render_login_prompt(cx).into_any_element(),
        };

        div()
            .id("content")
            .flex_1()
            .h_full()
            .bg(cx.theme().background)
            .child(content)
    }
}
