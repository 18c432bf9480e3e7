//! Store API client
//!
//! One `reqwest` round trip per call: no retries, no caching and no timeout
//! beyond the transport default. Every failure maps onto
//! [`Error::Network`], [`Error::Decode`] or [`Error::Rejected`].

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use snafu::ResultExt;
use tracing::debug;

use crate::constants::DEFAULT_API_BASE_URL;
use crate::error::{DecodeSnafu, Error, NetworkSnafu, Result};
use crate::table::{RecordId, ResourceSource, StagedValues};

use super::auth::{LoginRequest, LoginResponse, UserResponse};
use super::product::{FIELD_IN_STOCK, FIELD_SOLD, Product};
use super::wire::id_value;

const PRODUCTS_ENDPOINT: &str = "/get-product";
const STOCK_ENDPOINT: &str = "/instock-update";
const VISIBILITY_ENDPOINT: &str = "/update-visibility";
const LOGIN_ENDPOINT: &str = "/auth/login";
const USER_ENDPOINT: &str = "/auth/user";

#[derive(Deserialize)]
struct ProductsResponse {
    products: Vec<Product>,
}

/// Client for the shop backend
#[derive(Clone, Debug)]
pub struct StoreApi {
    http: Client,
    base_url: Arc<str>,
}

impl Default for StoreApi {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl StoreApi {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Use a preconfigured HTTP client (proxy settings, test servers)
    pub fn with_client(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim().trim_end_matches('/').into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `{endpoint}/{segment}` with the segment percent-encoded
    fn url_with_segment(&self, endpoint: &str, segment: &str) -> Result<Url> {
        let invalid = || Error::Invalid {
            message: format!("bad API base URL: {}", self.base_url),
        };
        let mut url = Url::parse(&self.url(endpoint)).map_err(|_| invalid())?;
        url.path_segments_mut().map_err(|_| invalid())?.push(segment);
        Ok(url)
    }

    async fn send(&self, endpoint: &str, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await.context(NetworkSnafu { endpoint })?;
        let status = response.status();
        debug!(endpoint, status = status.as_u16(), "Store API response");
        if !status.is_success() {
            return Err(Error::Rejected {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(endpoint: &str, response: Response) -> Result<T> {
        let body = response.bytes().await.context(NetworkSnafu { endpoint })?;
        serde_json::from_slice(&body).context(DecodeSnafu { endpoint })
    }

    /// `GET /get-product`
    pub async fn fetch_products(&self) -> Result<Vec<Product>> {
        let response = self
            .send(PRODUCTS_ENDPOINT, self.http.get(self.url(PRODUCTS_ENDPOINT)))
            .await?;
        let body: ProductsResponse = Self::decode(PRODUCTS_ENDPOINT, response).await?;
        Ok(body.products)
    }

    /// `POST /instock-update`
    pub async fn update_stock(&self, id: &RecordId, in_stock: i64, sold: i64) -> Result<()> {
        let body = json!({
            "productId": id_value(id),
            "inStockValue": in_stock,
            "soldStockValue": sold,
        });
        self.send(
            STOCK_ENDPOINT,
            self.http.post(self.url(STOCK_ENDPOINT)).json(&body),
        )
        .await?;
        Ok(())
    }

    /// `PUT /update-visibility`
    pub async fn update_visibility(&self, id: &RecordId, visible: bool) -> Result<()> {
        let body = json!({
            "productId": id_value(id),
            "visibility": visible,
        });
        self.send(
            VISIBILITY_ENDPOINT,
            self.http.put(self.url(VISIBILITY_ENDPOINT)).json(&body),
        )
        .await?;
        Ok(())
    }

    /// `GET /auth/user/{user_id}`; the name may be blank
    pub async fn fetch_user_name(&self, user_id: &str) -> Result<String> {
        let url = self.url_with_segment(USER_ENDPOINT, user_id)?;
        let response = self.send(USER_ENDPOINT, self.http.get(url)).await?;
        let body: UserResponse = Self::decode(USER_ENDPOINT, response).await?;
        Ok(body.name.unwrap_or_default())
    }

    /// `POST /auth/login`, returning the user id
    pub async fn login(&self, email_or_mobile: &str, password: &str) -> Result<String> {
        let request = LoginRequest {
            email: email_or_mobile.trim(),
            password,
        };
        let response = self
            .send(
                LOGIN_ENDPOINT,
                self.http.post(self.url(LOGIN_ENDPOINT)).json(&request),
            )
            .await?;
        let body: LoginResponse = Self::decode(LOGIN_ENDPOINT, response).await?;
        if !body.is_success() {
            return Err(Error::LoginFailed {
                message: body.message,
            });
        }
        match body.user_id {
            Some(user_id) if !user_id.is_empty() => Ok(user_id),
            _ => Err(Error::LoginFailed {
                message: "response carried no user id".to_string(),
            }),
        }
    }
}

#[async_trait]
impl ResourceSource for StoreApi {
    type Record = Product;

    async fn fetch_all(&self) -> Result<Vec<Product>> {
        self.fetch_products().await
    }

    async fn update_fields(&self, id: &RecordId, values: &StagedValues) -> Result<()> {
        self.update_stock(id, values.number(FIELD_IN_STOCK), values.number(FIELD_SOLD))
            .await
    }

    async fn update_visibility(&self, id: &RecordId, visible: bool) -> Result<()> {
        StoreApi::update_visibility(self, id, visible).await
    }
}
