//! Login View
//!
//! Email-or-mobile and password form. Failures arrive as toasts from
//! [`SessionState`]; the form keeps what was typed.

use crate::constants::LOGIN_FORM_WIDTH;
use crate::states::{BestieGlobalStore, Credentials, SessionState, i18n_login};
use gpui::{Context, Entity, Subscription, Window, div, prelude::*, px};
use gpui_component::{
    ActiveTheme, Disableable, IconName, Sizable,
    button::{Button, ButtonVariants},
    input::{Input, InputEvent, InputState},
    label::Label,
    v_flex,
};

/// Login form view
pub struct LoginView {
    session_state: Entity<SessionState>,
    email_state: Entity<InputState>,
    password_state: Entity<InputState>,
    show_password: bool,
    _subscriptions: Vec<Subscription>,
}

impl LoginView {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let store = cx.global::<BestieGlobalStore>();
        let session_state = store.session_state();
        let app_state = store.app_state();

        let email_placeholder = i18n_login(cx, "email_placeholder");
        let email_state =
            cx.new(|cx| InputState::new(window, cx).placeholder(email_placeholder));
        let password_placeholder = i18n_login(cx, "password_placeholder");
        let password_state = cx.new(|cx| {
            InputState::new(window, cx)
                .masked(true)
                .placeholder(password_placeholder)
        });

        let subscriptions = vec![
            cx.observe(&session_state, |_this, _model, cx| cx.notify()),
            // Locale may have changed
            cx.observe_in(&app_state, window, |this, _model, window, cx| {
                this.refresh_placeholders(window, cx);
            }),
            cx.subscribe_in(&password_state, window, |this, _state, event, window, cx| {
                if matches!(event, InputEvent::PressEnter { .. }) {
                    this.submit(window, cx);
                }
            }),
        ];

        Self {
            session_state,
            email_state,
            password_state,
            show_password: false,
            _subscriptions: subscriptions,
        }
    }

    fn refresh_placeholders(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let email = i18n_login(cx, "email_placeholder");
        let password = i18n_login(cx, "password_placeholder");
        self.email_state
            .update(cx, |state, cx| state.set_placeholder(email, window, cx));
        self.password_state
            .update(cx, |state, cx| state.set_placeholder(password, window, cx));
    }

    fn credentials(&self, cx: &Context<Self>) -> Credentials {
        Credentials {
            email_or_mobile: self.email_state.read(cx).value().to_string(),
            password: self.password_state.read(cx).value().to_string(),
        }
    }

    fn submit(&mut self, _window: &mut Window, cx: &mut Context<Self>) {
        let credentials = self.credentials(cx);
        self.session_state
            .update(cx, |state, cx| state.login(credentials, cx));
    }

    fn toggle_password(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.show_password = !self.show_password;
        let masked = !self.show_password;
        self.password_state
            .update(cx, |state, cx| state.set_masked(masked, window, cx));
        cx.notify();
    }
}

impl Render for LoginView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let submitting = self.session_state.read(cx).is_submitting();
        let toggle_icon = if self.show_password {
            IconName::EyeOff
        } else {
            IconName::Eye
        };

        let toggle = Button::new("toggle-password")
            .ghost()
            .xsmall()
            .icon(toggle_icon)
            .tooltip(i18n_login(cx, "toggle_password"))
            .on_click(cx.listener(|this, _, window, cx| this.toggle_password(window, cx)));

        div()
            .size_full()
            .flex()
            .items_center()
            .justify_center()
            .child(
                v_flex()
                    .w(px(LOGIN_FORM_WIDTH))
                    .p_6()
                    .gap_4()
                    .rounded_lg()
                    .border_1()
                    .border_color(cx.theme().border)
                    .bg(cx.theme().background)
                    .child(Label::new(i18n_login(cx, "title")).text_2xl())
                    .child(
                        v_flex()
                            .gap_1()
                            .child(Label::new(i18n_login(cx, "email_label")).text_sm())
                            .child(Input::new(&self.email_state).w_full()),
                    )
                    .child(
                        v_flex()
                            .gap_1()
                            .child(Label::new(i18n_login(cx, "password_label")).text_sm())
                            .child(Input::new(&self.password_state).w_full().suffix(toggle)),
                    )
                    .child(
                        Button::new("login-submit")
                            .primary()
                            .w_full()
                            .label(i18n_login(cx, "submit"))
                            .loading(submitting)
                            .disabled(submitting)
                            .on_click(cx.listener(|this, _, window, cx| this.submit(window, cx))),
                    ),
            )
    }
}
