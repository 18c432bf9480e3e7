//! Storefront Home
//!
//! Promotional banner, the fixed category cards and a grid of visible
//! products.

use crate::api::Product;
use crate::constants::PRODUCT_CARD_WIDTH;
use crate::helpers::{display_number, display_price, display_text};
use crate::states::{BestieGlobalStore, CatalogLoadState, CatalogState, i18n_home};
use gpui::{Context, Entity, Subscription, Window, div, prelude::*, px};
use gpui_component::{
    ActiveTheme, Icon, IconName, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    v_flex,
};

/// Categories shown under the banner: (translation key, icon)
const CATEGORIES: [(&str, IconName); 3] = [
    ("stationery", IconName::BookOpen),
    ("gifts", IconName::Heart),
    ("decor", IconName::Star),
];

/// Storefront view
pub struct HomeView {
    catalog_state: Entity<CatalogState>,
    _subscriptions: Vec<Subscription>,
}

impl HomeView {
    pub fn new(_window: &mut Window, cx: &mut Context<Self>) -> Self {
        let catalog_state = cx.global::<BestieGlobalStore>().catalog_state();
        let subscriptions = vec![cx.observe(&catalog_state, |_this, _model, cx| cx.notify())];
        catalog_state.update(cx, |state, cx| state.ensure_loaded(cx));

        Self {
            catalog_state,
            _subscriptions: subscriptions,
        }
    }

    fn render_banner(&self, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .w_full()
            .p_6()
            .gap_2()
            .rounded_lg()
            .bg(cx.theme().primary)
            .child(
                Label::new(i18n_home(cx, "banner_title"))
                    .text_2xl()
                    .text_color(cx.theme().primary_foreground),
            )
            .child(
                Label::new(i18n_home(cx, "banner_subtitle"))
                    .text_sm()
                    .text_color(cx.theme().primary_foreground),
            )
    }

    fn render_categories(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let cards = CATEGORIES.into_iter().map(|(key, icon)| {
            h_flex()
                .flex_1()
                .p_4()
                .gap_3()
                .items_center()
                .rounded_lg()
                .border_1()
                .border_color(cx.theme().border)
                .bg(cx.theme().secondary)
                .child(Icon::new(icon).text_color(cx.theme().primary))
                .child(Label::new(i18n_home(cx, key)).text_base())
        });

        v_flex()
            .gap_2()
            .child(Label::new(i18n_home(cx, "categories")).text_lg())
            .child(h_flex().w_full().gap_4().children(cards))
    }

    fn render_product_card(
        &self,
        index: usize,
        product: &Product,
        cx: &mut Context<Self>,
    ) -> impl IntoElement + use<> {
        let rating = product
            .rating
            .map(|_| format!("★ {}", display_number(product.rating)));

        v_flex()
            .id(("product-card", index))
            .w(px(PRODUCT_CARD_WIDTH))
            .p_3()
            .gap_1()
            .rounded_lg()
            .border_1()
            .border_color(cx.theme().border)
            .bg(cx.theme().background)
            .child(
                div()
                    .h(px(120.0))
                    .w_full()
                    .rounded_md()
                    .bg(cx.theme().muted)
                    .flex()
                    .items_center()
                    .justify_center()
                    .child(Icon::new(IconName::GalleryVerticalEnd).large()),
            )
            .child(
                Label::new(display_text(product.name.as_deref()))
                    .text_sm()
                    .text_ellipsis(),
            )
            .child(
                Label::new(display_text(product.category.as_deref()))
                    .text_xs()
                    .text_color(cx.theme().muted_foreground),
            )
            .child(
                h_flex()
                    .justify_between()
                    .child(Label::new(display_price(product.price)).text_sm())
                    .when_some(rating, |this, rating| {
                        this.child(
                            Label::new(rating)
                                .text_xs()
                                .text_color(cx.theme().warning),
                        )
                    }),
            )
    }

    fn render_products(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let catalog = self.catalog_state.read(cx);
        let load_state = catalog.load_state().clone();
        let products = catalog.products().to_vec();

        let body = match load_state {
            CatalogLoadState::Idle | CatalogLoadState::Loading => {
                Label::new(i18n_home(cx, "loading"))
                    .text_color(cx.theme().muted_foreground)
                    .into_any_element()
            }
            CatalogLoadState::Error(message) => h_flex()
                .gap_2()
                .items_center()
                .child(Label::new(message.to_string()).text_color(cx.theme().danger))
                .child(
                    Button::new("catalog-retry")
                        .label(i18n_home(cx, "retry"))
                        .small()
                        .ghost()
                        .on_click(cx.listener(|this, _, _, cx| {
                            this.catalog_state.update(cx, |state, cx| state.reload(cx));
                        })),
                )
                .into_any_element(),
            CatalogLoadState::Loaded if products.is_empty() => {
                Label::new(i18n_home(cx, "empty"))
                    .text_color(cx.theme().muted_foreground)
                    .into_any_element()
            }
            CatalogLoadState::Loaded => {
                let mut cards = Vec::with_capacity(products.len());
                for (index, product) in products.iter().enumerate() {
                    cards.push(self.render_product_card(index, product, cx));
                }
                h_flex()
                    .w_full()
                    .flex_wrap()
                    .gap_4()
                    .children(cards)
                    .into_any_element()
            }
        };

        v_flex()
            .gap_2()
            .child(Label::new(i18n_home(cx, "products")).text_lg())
            .child(body)
    }
}

impl Render for HomeView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .id("home-scroll")
            .size_full()
            .p_4()
            .gap_6()
            .overflow_y_scroll()
            .child(self.render_banner(cx))
            .child(self.render_categories(cx))
            .child(self.render_products(cx))
    }
}
