//! Product record

use serde::Deserialize;

use crate::table::{FieldValue, RecordId, TableRecord};

use super::wire;

pub const FIELD_NAME: &str = "name";
pub const FIELD_CATEGORY: &str = "category";
pub const FIELD_PRICE: &str = "price";
pub const FIELD_RATING: &str = "rating";
pub const FIELD_IN_STOCK: &str = "inStockValue";
pub const FIELD_SOLD: &str = "soldStockValue";
pub const FIELD_VISIBILITY: &str = "visibility";

/// Columns the products table can sort by, in display order
pub const SORTABLE_FIELDS: [&str; 7] = [
    FIELD_NAME,
    FIELD_CATEGORY,
    FIELD_PRICE,
    FIELD_RATING,
    FIELD_IN_STOCK,
    FIELD_SOLD,
    FIELD_VISIBILITY,
];

/// Dropdown value for a visible product
pub const VISIBLE_CHOICE: &str = "true";
/// Dropdown value for a hidden product
pub const HIDDEN_CHOICE: &str = "false";

/// A product as served by `/get-product`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(deserialize_with = "wire::record_id")]
    pub product_id: RecordId,
    #[serde(default, deserialize_with = "wire::lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "wire::lenient_text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "wire::lenient_number")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "wire::lenient_number")]
    pub rating: Option<f64>,
    #[serde(
        rename = "inStockValue",
        default,
        deserialize_with = "wire::lenient_integer"
    )]
    pub in_stock: Option<i64>,
    #[serde(
        rename = "soldStockValue",
        default,
        deserialize_with = "wire::lenient_integer"
    )]
    pub sold: Option<i64>,
    #[serde(default, deserialize_with = "wire::lenient_bool")]
    pub visibility: Option<bool>,
    #[serde(default, deserialize_with = "wire::lenient_text")]
    pub img: Option<String>,
}

impl Product {
    /// Dropdown value for the current visibility
    pub fn visibility_choice(&self) -> &'static str {
        visibility_choice(self.is_visible())
    }
}

/// Only the exact string `"true"` means visible
pub fn parse_visibility_choice(choice: &str) -> bool {
    choice == VISIBLE_CHOICE
}

pub fn visibility_choice(visible: bool) -> &'static str {
    if visible { VISIBLE_CHOICE } else { HIDDEN_CHOICE }
}

impl TableRecord for Product {
    const EDITABLE_FIELDS: &'static [&'static str] = &[FIELD_IN_STOCK, FIELD_SOLD];

    fn record_id(&self) -> &RecordId {
        &self.product_id
    }

    fn display_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn field(&self, key: &str) -> FieldValue {
        match key {
            FIELD_NAME => self.name.as_deref().into(),
            FIELD_CATEGORY => self.category.as_deref().into(),
            FIELD_PRICE => self.price.into(),
            FIELD_RATING => self.rating.into(),
            FIELD_IN_STOCK => self.in_stock.into(),
            FIELD_SOLD => self.sold.into(),
            FIELD_VISIBILITY => self
                .visibility
                .map_or(FieldValue::Missing, FieldValue::Bool),
            _ => FieldValue::Missing,
        }
    }

    fn editable_value(&self, field: &str) -> Option<i64> {
        match field {
            FIELD_IN_STOCK => self.in_stock,
            FIELD_SOLD => self.sold,
            _ => None,
        }
    }

    fn is_visible(&self) -> bool {
        self.visibility.unwrap_or(false)
    }

    fn set_visible(&mut self, visible: bool) {
        self.visibility = Some(visible);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{EditSession, SortState, derive_view};
    use serde_json::json;

    fn product(value: serde_json::Value) -> Product {
        serde_json::from_value(value).expect("product")
    }

    #[test]
    fn test_decode_full_product() {
        let p = product(json!({
            "productId": 3,
            "name": "Mug",
            "category": "Gift",
            "price": "249",
            "rating": 4.5,
            "inStockValue": 10,
            "soldStockValue": "2",
            "visibility": "true",
            "img": "https://img/mug.png"
        }));
        assert_eq!(p.product_id, RecordId::Number(3.into()));
        assert_eq!(p.price, Some(249.0));
        assert_eq!(p.sold, Some(2));
        assert!(p.is_visible());
        assert_eq!(p.visibility_choice(), "true");
    }

    #[test]
    fn test_sparse_product_seeds_zero_when_edited() {
        let p = product(json!({"productId": "p1", "name": "Pen"}));
        assert_eq!(p.field(FIELD_PRICE), FieldValue::Missing);
        assert!(!p.is_visible());

        let session = EditSession::begin(&p);
        assert_eq!(session.staged().text(FIELD_IN_STOCK), Some("0"));
        assert_eq!(session.staged().text(FIELD_SOLD), Some("0"));
    }

    #[test]
    fn test_visibility_choice_boundary() {
        assert!(parse_visibility_choice("true"));
        assert!(!parse_visibility_choice("false"));
        assert!(!parse_visibility_choice("True"));
        assert!(!parse_visibility_choice(""));
    }

    #[test]
    fn test_sort_by_price_puts_missing_first() {
        let products = vec![
            product(json!({"productId": 1, "name": "Lamp", "price": 900})),
            product(json!({"productId": 2, "name": "Card"})),
            product(json!({"productId": 3, "name": "Diary", "price": 120})),
        ];
        let mut sort = SortState::default();
        sort.select(FIELD_PRICE);
        let names: Vec<_> = derive_view(&products, &sort, "")
            .iter()
            .filter_map(|p| p.name.as_deref())
            .collect();
        assert_eq!(names, ["Card", "Diary", "Lamp"]);
    }
}
