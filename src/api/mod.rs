//! Backend API
//!
//! Frontend bindings to the warehouse REST backend, organized by domain.

mod auth;
mod client;
mod error;
mod movement;
mod resource;
mod stock;

pub use client::ApiClient;
pub use error::ApiError;
pub use resource::Catalog;

use crate::models::{Client, MovementCreated, MovementKind, MovementRequest, Product, Section};

/// Calls the movement form depends on.
///
/// Implemented by [`ApiClient`] for the browser and by in-memory doubles in tests.
#[allow(async_fn_in_trait)]
pub trait WarehouseApi {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;
    async fn list_sections(&self) -> Result<Vec<Section>, ApiError>;
    async fn list_clients(&self) -> Result<Vec<Client>, ApiError>;
    async fn create_movement(
        &self,
        kind: MovementKind,
        request: &MovementRequest,
    ) -> Result<MovementCreated, ApiError>;
}

impl WarehouseApi for ApiClient {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.catalog(Catalog::Products).list().await
    }

    async fn list_sections(&self) -> Result<Vec<Section>, ApiError> {
        self.catalog(Catalog::Sections).list().await
    }

    async fn list_clients(&self) -> Result<Vec<Client>, ApiError> {
        self.catalog(Catalog::Clients).list().await
    }

    async fn create_movement(
        &self,
        kind: MovementKind,
        request: &MovementRequest,
    ) -> Result<MovementCreated, ApiError> {
        ApiClient::create_movement(self, kind, request).await
    }
}
