//! Marketplace API over HTTP
//!
//! Thin typed wrappers over [`HttpTransport`]. Detail endpoints return the
//! normalized [`Payload`]; list endpoints return a [`Page`] of payloads.

use codec::{FilePart, FormData, Payload, RequestPayload};
use kernel::error::app_error::AppResult;
use kernel::id::{ContractId, DemandId, OrderId, ProductId, UserId};
use platform::transport::HttpTransport;
use serde::Serialize;

use crate::domain::gateway::AuthGateway;
use crate::domain::page::{Page, PageQuery};
use crate::domain::product::ProductDraft;
use crate::domain::trade::{DemandDraft, PaymentDraft};
use crate::domain::user::{LoginRequest, LoginResponse, ProfileUpdate, RegisterRequest};
use crate::endpoints;

/// Marketplace backend client
#[derive(Debug, Clone)]
pub struct MarketApi {
    transport: HttpTransport,
}

impl MarketApi {
    pub fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &HttpTransport {
        &self.transport
    }

    async fn post_document<T: Serialize>(&self, path: &str, body: &T) -> AppResult<Payload> {
        let document = Payload::from_serialize(body)?;
        self.transport.post(path, document).await
    }

    async fn page(&self, path: &str, query: Vec<(String, String)>) -> AppResult<Page<Payload>> {
        let payload = self.transport.get(path, &query).await?;
        Ok(payload.deserialize_into()?)
    }

    // ========================================================================
    // Auth
    // ========================================================================

    pub async fn register(&self, request: &RegisterRequest) -> AppResult<Payload> {
        self.post_document(endpoints::AUTH_REGISTER, request).await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> AppResult<Payload> {
        let document = Payload::from_serialize(update)?;
        self.transport
            .put(endpoints::AUTH_PROFILE, Some(document.into()))
            .await
    }

    // ========================================================================
    // Catalog and search
    // ========================================================================

    pub async fn category_tree(&self) -> AppResult<Payload> {
        self.transport.get(endpoints::CATEGORY_TREE, &[]).await
    }

    pub async fn search_products(&self, query: &PageQuery) -> AppResult<Page<Payload>> {
        self.page(endpoints::SEARCH_PRODUCTS, query.to_query()).await
    }

    pub async fn search_demands(&self, query: &PageQuery) -> AppResult<Page<Payload>> {
        self.page(endpoints::SEARCH_DEMANDS, query.to_query()).await
    }

    pub async fn search_farmers(&self, query: &PageQuery) -> AppResult<Page<Payload>> {
        self.page(endpoints::SEARCH_FARMERS, query.to_query()).await
    }

    pub async fn search_purchasers(&self, query: &PageQuery) -> AppResult<Page<Payload>> {
        self.page(endpoints::SEARCH_PURCHASERS, query.to_query()).await
    }

    // ========================================================================
    // Farmer
    // ========================================================================

    pub async fn my_farmer_info(&self) -> AppResult<Payload> {
        self.transport.get(endpoints::FARMER_INFO_MY, &[]).await
    }

    pub async fn publish_product(&self, draft: ProductDraft) -> AppResult<Payload> {
        self.transport
            .post(endpoints::FARMER_PRODUCTS, draft.into_form())
            .await
    }

    pub async fn my_products(&self, query: &PageQuery) -> AppResult<Page<Payload>> {
        self.page(endpoints::FARMER_PRODUCTS_MY, query.to_query()).await
    }

    pub async fn product_detail(&self, id: &ProductId) -> AppResult<Payload> {
        self.transport.get(&endpoints::product(id), &[]).await
    }

    pub async fn take_off_sale(&self, id: &ProductId) -> AppResult<Payload> {
        self.transport.put(&endpoints::product_off_sale(id), None).await
    }

    pub async fn put_on_sale(&self, id: &ProductId) -> AppResult<Payload> {
        self.transport.put(&endpoints::product_on_sale(id), None).await
    }

    // ========================================================================
    // Purchaser
    // ========================================================================

    pub async fn publish_demand(&self, draft: &DemandDraft) -> AppResult<Payload> {
        self.post_document(endpoints::PURCHASER_DEMANDS, draft).await
    }

    pub async fn demand_detail(&self, id: &DemandId) -> AppResult<Payload> {
        self.transport.get(&endpoints::demand(id), &[]).await
    }

    pub async fn orders(&self, query: &PageQuery) -> AppResult<Page<Payload>> {
        self.page(endpoints::PURCHASER_ORDERS_PAGE, query.to_query())
            .await
    }

    pub async fn order_detail(&self, id: &OrderId) -> AppResult<Payload> {
        self.transport.get(&endpoints::order(id), &[]).await
    }

    pub async fn sign_contract(&self, id: &ContractId, sign_file: FilePart) -> AppResult<Payload> {
        let mut form = FormData::new();
        form.append_file("signFile", sign_file);
        self.transport
            .put(&endpoints::contract_sign(id), Some(RequestPayload::Form(form)))
            .await
    }

    pub async fn reject_contract(&self, id: &ContractId, reason: &str) -> AppResult<Payload> {
        self.transport
            .put_with_query(
                &endpoints::contract_reject(id),
                &[("reason".to_string(), reason.to_string())],
            )
            .await
    }

    pub async fn submit_payment(&self, draft: PaymentDraft) -> AppResult<Payload> {
        self.transport
            .post(endpoints::PURCHASER_PAYMENTS, draft.into_form())
            .await
    }

    // ========================================================================
    // Docking
    // ========================================================================

    pub async fn my_dockings(&self, query: &PageQuery) -> AppResult<Page<Payload>> {
        self.page(endpoints::DOCKINGS_MY, query.to_query()).await
    }

    /// Respond to a demand; the document is sent as given
    pub async fn respond_to_demand(&self, response: Payload) -> AppResult<Payload> {
        self.transport
            .post(endpoints::DOCKINGS_RESPOND, response)
            .await
    }

    // ========================================================================
    // Admin
    // ========================================================================

    pub async fn admin_users(&self, query: &PageQuery) -> AppResult<Page<Payload>> {
        self.page(endpoints::ADMIN_USERS_PAGE, query.to_current_size_query())
            .await
    }

    /// Disable (`true`) or re-enable (`false`) an account
    pub async fn set_user_disabled(&self, id: &UserId, disabled: bool) -> AppResult<Payload> {
        self.transport
            .put_with_query(
                &endpoints::user_status(id),
                &[("isDelete".to_string(), u8::from(disabled).to_string())],
            )
            .await
    }

    pub async fn admin_products(&self, query: &PageQuery) -> AppResult<Page<Payload>> {
        self.page(endpoints::ADMIN_PRODUCTS_PAGE, query.to_query())
            .await
    }

    pub async fn delete_product(&self, id: &ProductId) -> AppResult<Payload> {
        self.transport.delete(&endpoints::admin_product(id)).await
    }
}

impl AuthGateway for MarketApi {
    async fn login(&self, request: &LoginRequest) -> AppResult<LoginResponse> {
        let payload = self.post_document(endpoints::AUTH_LOGIN, request).await?;
        Ok(payload.deserialize_into()?)
    }

    async fn logout(&self) -> AppResult<()> {
        self.transport.post_empty(endpoints::AUTH_LOGOUT).await?;
        Ok(())
    }
}
