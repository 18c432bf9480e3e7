//! Admin Products Table
//!
//! Renders the products controller's derived view: sortable headers, a
//! search box, per-row stock editing and a visibility dropdown.

use crate::api::wire::{id_from_value, id_value};
use crate::api::{
    FIELD_CATEGORY, FIELD_IN_STOCK, FIELD_NAME, FIELD_PRICE, FIELD_RATING, FIELD_SOLD,
    FIELD_VISIBILITY, HIDDEN_CHOICE, Product, StoreApi, VISIBLE_CHOICE,
};
use crate::assets::CustomIconName;
use crate::constants::{
    PRODUCT_ACTIONS_COLUMN_WIDTH, PRODUCT_COLUMN_WIDTH, PRODUCT_ID_COLUMN_WIDTH,
    PRODUCT_NAME_COLUMN_WIDTH,
};
use crate::helpers::{display_integer, display_number, display_price, display_text};
use crate::states::{
    BestieGlobalStore, ProductsLoadState, ProductsState, i18n_format, i18n_products,
};
use crate::table::{RecordId, SortDirection, TableRecord};
use gpui::{
    Action, AnyElement, App, Context, Corner, Entity, SharedString, Subscription, Window, div,
    prelude::*, px,
};
use gpui_component::{
    ActiveTheme, Colorize, Disableable, Icon, IconName, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    input::{Input, InputEvent, InputState},
    label::Label,
    menu::DropdownMenu,
    v_flex,
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

/// Visibility dropdown choice for one product
#[derive(Clone, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub struct SetVisibility {
    /// Identifier in its wire form (string or number)
    pub product_id: Value,
    /// `"true"` or `"false"`
    pub choice: String,
}

/// Header columns: (sort key, translation key, width)
const COLUMNS: [(&str, &str, f32); 7] = [
    (FIELD_NAME, "name", PRODUCT_NAME_COLUMN_WIDTH),
    (FIELD_CATEGORY, "category", PRODUCT_COLUMN_WIDTH),
    (FIELD_PRICE, "price", PRODUCT_COLUMN_WIDTH),
    (FIELD_RATING, "rating", PRODUCT_COLUMN_WIDTH),
    (FIELD_IN_STOCK, "in_stock", PRODUCT_COLUMN_WIDTH),
    (FIELD_SOLD, "sold", PRODUCT_COLUMN_WIDTH),
    (FIELD_VISIBILITY, "visibility", PRODUCT_COLUMN_WIDTH),
];

/// Products table view; owns the session-scoped [`ProductsState`]
pub struct ProductsTableView {
    products_state: Entity<ProductsState>,
    search_state: Entity<InputState>,
    in_stock_state: Entity<InputState>,
    sold_state: Entity<InputState>,
    _subscriptions: Vec<Subscription>,
}

impl ProductsTableView {
    pub fn new(store: StoreApi, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let products_state = cx.new(|cx| ProductsState::new(store, cx));

        let placeholder = i18n_products(cx, "search_placeholder");
        let search_state = cx.new(|cx| {
            InputState::new(window, cx)
                .clean_on_escape()
                .placeholder(placeholder)
        });
        let in_stock_state = cx.new(|cx| InputState::new(window, cx));
        let sold_state = cx.new(|cx| InputState::new(window, cx));

        let app_state = cx.global::<BestieGlobalStore>().app_state();
        let mut subscriptions = vec![
            cx.observe(&products_state, |_this, _model, cx| cx.notify()),
            cx.observe_in(&app_state, window, |this, _model, window, cx| {
                let placeholder = i18n_products(cx, "search_placeholder");
                this.search_state
                    .update(cx, |state, cx| state.set_placeholder(placeholder, window, cx));
            }),
        ];

        let products = products_state.clone();
        subscriptions.push(cx.subscribe(&search_state, move |_this, state, event, cx| {
            if matches!(event, InputEvent::Change) {
                let text = state.read(cx).value().to_string();
                products.update(cx, |products, cx| products.set_search(text, cx));
            }
        }));

        for (input, field) in [(&in_stock_state, FIELD_IN_STOCK), (&sold_state, FIELD_SOLD)] {
            let products = products_state.clone();
            subscriptions.push(cx.subscribe(input, move |_this, state, event, cx| {
                if matches!(event, InputEvent::Change) {
                    let value = state.read(cx).value().to_string();
                    products.update(cx, |products, cx| products.stage_field(field, value, cx));
                }
            }));
        }

        Self {
            products_state,
            search_state,
            in_stock_state,
            sold_state,
            _subscriptions: subscriptions,
        }
    }

    /// The state entity, for event subscriptions
    pub fn products_state(&self) -> &Entity<ProductsState> {
        &self.products_state
    }

    // ==================== Intents ====================

    fn begin_edit(&mut self, id: RecordId, window: &mut Window, cx: &mut Context<Self>) {
        self.products_state
            .update(cx, |state, cx| state.begin_edit(&id, cx));

        // Seed the inputs from the session's staged values
        let staged: Vec<(Entity<InputState>, String)> = {
            let table = self.products_state.read(cx).table();
            let Some(session) = table.edit_session() else {
                return;
            };
            [
                (self.in_stock_state.clone(), FIELD_IN_STOCK),
                (self.sold_state.clone(), FIELD_SOLD),
            ]
            .into_iter()
            .map(|(input, field)| {
                (
                    input,
                    session.staged().text(field).unwrap_or_default().to_string(),
                )
            })
            .collect()
        };
        for (input, value) in staged {
            input.update(cx, |input, cx| input.set_value(value, window, cx));
        }
    }

    fn commit_edit(&mut self, cx: &mut Context<Self>) {
        self.products_state
            .update(cx, |state, cx| state.commit_edit(cx));
    }

    fn on_set_visibility(
        &mut self,
        action: &SetVisibility,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let Some(id) = id_from_value(&action.product_id) else {
            return;
        };
        let choice = action.choice.clone();
        self.products_state
            .update(cx, |state, cx| state.set_visibility(id, &choice, cx));
    }

    // ==================== Rendering ====================

    fn render_toolbar(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let state = self.products_state.read(cx);
        let count = state.table().derived_view().len().to_string();
        let loading = state.load_state().is_loading();

        h_flex()
            .w_full()
            .gap_2()
            .items_center()
            .child(Label::new(i18n_products(cx, "title")).text_xl().flex_1())
            .child(
                Label::new(i18n_format(cx, "products.count", &[("count", &count)]))
                    .text_sm()
                    .text_color(cx.theme().muted_foreground),
            )
            .child(
                div().w(px(260.0)).child(
                    Input::new(&self.search_state)
                        .w_full()
                        .prefix(Icon::new(IconName::Search).small())
                        .cleanable(true),
                ),
            )
            .child(
                Button::new("products-reload")
                    .icon(CustomIconName::RefreshCw)
                    .small()
                    .ghost()
                    .loading(loading)
                    .tooltip(i18n_products(cx, "reload"))
                    .on_click(cx.listener(|this, _, _, cx| {
                        this.products_state.update(cx, |state, cx| state.load(cx));
                    })),
            )
    }

    /// Last failure, shown until dismissed or cleared by a good reload
    fn render_notice(&self, cx: &mut Context<Self>) -> Option<impl IntoElement> {
        let notice = SharedString::from(self.products_state.read(cx).notice()?.to_string());

        Some(
            h_flex()
                .w_full()
                .px_3()
                .py_2()
                .gap_2()
                .items_center()
                .rounded_md()
                .bg(cx.theme().danger.opacity(0.1))
                .child(
                    Label::new(notice)
                        .text_sm()
                        .text_color(cx.theme().danger)
                        .flex_1(),
                )
                .child(
                    Button::new("products-dismiss-notice")
                        .xsmall()
                        .ghost()
                        .label(i18n_products(cx, "dismiss"))
                        .on_click(cx.listener(|this, _, _, cx| {
                            this.products_state
                                .update(cx, |state, cx| state.clear_notice(cx));
                        })),
                ),
        )
    }

    fn render_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let sort = self.products_state.read(cx).table().sort().clone();
        let border_color = cx.theme().border;

        let mut cells: Vec<AnyElement> = vec![
            header_cell(i18n_products(cx, "id"), PRODUCT_ID_COLUMN_WIDTH, cx).into_any_element(),
        ];
        for (column, (key, label_key, width)) in COLUMNS.into_iter().enumerate() {
            let indicator = match sort.direction_for(key) {
                Some(SortDirection::Ascending) => IconName::SortAscending,
                Some(SortDirection::Descending) => IconName::SortDescending,
                None => IconName::ChevronsUpDown,
            };
            let button = Button::new(("sort", column))
                .ghost()
                .xsmall()
                .label(i18n_products(cx, label_key))
                .icon(indicator)
                .on_click(cx.listener(move |this, _, _, cx| {
                    this.products_state
                        .update(cx, |state, cx| state.set_sort(key, cx));
                }));
            cells.push(div().w(px(width)).px_1().child(button).into_any_element());
        }
        cells.push(
            header_cell(i18n_products(cx, "actions"), PRODUCT_ACTIONS_COLUMN_WIDTH, cx)
                .into_any_element(),
        );

        h_flex()
            .w_full()
            .py_1()
            .bg(cx.theme().secondary)
            .border_b_1()
            .border_color(border_color)
            .children(cells)
    }

    fn render_visibility_cell(
        &self,
        index: usize,
        product: &Product,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let busy = self
            .products_state
            .read(cx)
            .is_updating_visibility(product.record_id());
        let current = product.visibility_choice();
        let label = if product.is_visible() {
            i18n_products(cx, "visible")
        } else {
            i18n_products(cx, "hidden")
        };
        let visible_label = i18n_products(cx, "visible");
        let hidden_label = i18n_products(cx, "hidden");
        let product_id = id_value(product.record_id());

        Button::new(("visibility", index))
            .xsmall()
            .ghost()
            .label(label)
            .loading(busy)
            .dropdown_menu(move |menu, _window, _cx| {
                menu.menu_with_check(
                    visible_label.clone(),
                    current == VISIBLE_CHOICE,
                    Box::new(SetVisibility {
                        product_id: product_id.clone(),
                        choice: VISIBLE_CHOICE.to_string(),
                    }),
                )
                .menu_with_check(
                    hidden_label.clone(),
                    current == HIDDEN_CHOICE,
                    Box::new(SetVisibility {
                        product_id: product_id.clone(),
                        choice: HIDDEN_CHOICE.to_string(),
                    }),
                )
            })
            .anchor(Corner::TopLeft)
    }

    fn render_row(
        &self,
        index: usize,
        product: &Product,
        cx: &mut Context<Self>,
    ) -> impl IntoElement + use<> {
        let state = self.products_state.read(cx);
        let id = product.record_id().clone();
        let editing = state.table().is_editing(&id);
        let committing = state.is_committing();

        let bg = if editing {
            cx.theme().accent.opacity(0.3)
        } else if index % 2 == 0 {
            if cx.theme().is_dark() {
                cx.theme().background.lighten(0.3)
            } else {
                cx.theme().background.darken(0.01)
            }
        } else {
            cx.theme().background
        };

        let stock_cell = |input: &Entity<InputState>, value: Option<i64>| -> AnyElement {
            if editing {
                div()
                    .w(px(PRODUCT_COLUMN_WIDTH))
                    .px_1()
                    .child(Input::new(input).xsmall())
                    .into_any_element()
            } else {
                text_cell(display_integer(value), PRODUCT_COLUMN_WIDTH).into_any_element()
            }
        };
        let in_stock = stock_cell(&self.in_stock_state, product.in_stock);
        let sold = stock_cell(&self.sold_state, product.sold);

        let action = if editing {
            Button::new(("save", index))
                .xsmall()
                .primary()
                .icon(CustomIconName::Save)
                .label(i18n_products(cx, "save"))
                .loading(committing)
                .disabled(committing)
                .on_click(cx.listener(|this, _, _, cx| this.commit_edit(cx)))
        } else {
            Button::new(("edit", index))
                .xsmall()
                .ghost()
                .icon(CustomIconName::Pencil)
                .label(i18n_products(cx, "edit"))
                .on_click(cx.listener(move |this, _, window, cx| {
                    this.begin_edit(id.clone(), window, cx)
                }))
        };

        h_flex()
            .id(("product-row", index))
            .w_full()
            .py_1()
            .items_center()
            .bg(bg)
            .border_b_1()
            .border_color(cx.theme().border)
            .child(text_cell(product.record_id().to_string(), PRODUCT_ID_COLUMN_WIDTH))
            .child(text_cell(
                display_text(product.name.as_deref()),
                PRODUCT_NAME_COLUMN_WIDTH,
            ))
            .child(text_cell(
                display_text(product.category.as_deref()),
                PRODUCT_COLUMN_WIDTH,
            ))
            .child(text_cell(display_price(product.price), PRODUCT_COLUMN_WIDTH))
            .child(text_cell(display_number(product.rating), PRODUCT_COLUMN_WIDTH))
            .child(in_stock)
            .child(sold)
            .child(
                div()
                    .w(px(PRODUCT_COLUMN_WIDTH))
                    .px_1()
                    .child(self.render_visibility_cell(index, product, cx)),
            )
            .child(div().w(px(PRODUCT_ACTIONS_COLUMN_WIDTH)).px_1().child(action))
    }

    fn render_body(&self, cx: &mut Context<Self>) -> AnyElement {
        let state = self.products_state.read(cx);
        let load_state = state.load_state().clone();
        let rows = state.rows();

        match load_state {
            ProductsLoadState::Error(message) => {
                centered_message(message.to_string(), cx.theme().danger).into_any_element()
            }
            ProductsLoadState::Idle | ProductsLoadState::Loading if rows.is_empty() => {
                centered_message(i18n_products(cx, "loading"), cx.theme().muted_foreground)
                    .into_any_element()
            }
            _ if rows.is_empty() => {
                centered_message(i18n_products(cx, "empty"), cx.theme().muted_foreground)
                    .into_any_element()
            }
            _ => {
                let mut items = Vec::with_capacity(rows.len());
                for (index, product) in rows.iter().enumerate() {
                    items.push(self.render_row(index, product, cx));
                }
                div()
                    .id("products-table-scroll")
                    .flex_1()
                    .overflow_y_scroll()
                    .children(items)
                    .into_any_element()
            }
        }
    }
}

fn header_cell(label: SharedString, width: f32, cx: &App) -> impl IntoElement {
    div().w(px(width)).px_2().child(
        Label::new(label)
            .text_sm()
            .text_color(cx.theme().muted_foreground),
    )
}

fn text_cell(text: impl Into<SharedString>, width: f32) -> impl IntoElement {
    div()
        .w(px(width))
        .px_2()
        .child(Label::new(text).text_sm().text_ellipsis())
}

fn centered_message(text: impl Into<SharedString>, color: gpui::Hsla) -> impl IntoElement {
    div()
        .flex_1()
        .flex()
        .items_center()
        .justify_center()
        .p_8()
        .child(Label::new(text).text_color(color))
}

impl Render for ProductsTableView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .size_full()
            .p_4()
            .gap_3()
            .on_action(cx.listener(Self::on_set_visibility))
            .child(self.render_toolbar(cx))
            .children(self.render_notice(cx))
            .child(
                v_flex()
                    .flex_1()
                    .w_full()
                    .rounded_md()
                    .border_1()
                    .border_color(cx.theme().border)
                    .overflow_hidden()
                    .child(self.render_header(cx))
                    .child(self.render_body(cx)),
            )
    }
}
