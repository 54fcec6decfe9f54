//! Catalog Resources
//!
//! Products, sections and clients share one `{id, name}` shape and the
//! same list/get/create/update/delete endpoints.

use std::marker::PhantomData;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::client::{ApiClient, Verb};
use super::error::ApiError;
use crate::models::{EntityId, NamedRef};

/// Unreserved characters stay as-is inside a path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Backend collections holding `{id, name}` records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Catalog {
    Products,
    Sections,
    Clients,
}

impl Catalog {
    pub fn path(self) -> &'static str {
        match self {
            Catalog::Products => "/product",
            Catalog::Sections => "/section",
            Catalog::Clients => "/client",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Catalog::Products => "Products",
            Catalog::Sections => "Sections",
            Catalog::Clients => "Clients",
        }
    }

    pub fn singular(self) -> &'static str {
        match self {
            Catalog::Products => "product",
            Catalog::Sections => "section",
            Catalog::Clients => "client",
        }
    }
}

/// One backend collection
pub struct Resource<'a, T> {
    client: &'a ApiClient,
    path: &'static str,
    _entity: PhantomData<T>,
}

impl<'a, T: DeserializeOwned> Resource<'a, T> {
    pub fn new(client: &'a ApiClient, path: &'static str) -> Self {
        Self {
            client,
            path,
            _entity: PhantomData,
        }
    }

    pub fn item_path(&self, id: &EntityId) -> String {
        let id = id.to_string();
        format!("{}/{}", self.path, utf8_percent_encode(&id, PATH_SEGMENT))
    }

    pub async fn list(&self) -> Result<Vec<T>, ApiError> {
        self.client.get_json(self.path).await
    }

    pub async fn get(&self, id: &EntityId) -> Result<T, ApiError> {
        self.client.get_json(&self.item_path(id)).await
    }

    pub async fn create<B: Serialize>(&self, body: &B) -> Result<T, ApiError> {
        self.client.send_json(Verb::Post, self.path, body).await
    }

    pub async fn update<B: Serialize>(&self, id: &EntityId, body: &B) -> Result<(), ApiError> {
        self.client.send_unit(Verb::Put, &self.item_path(id), Some(body)).await
    }

    pub async fn delete(&self, id: &EntityId) -> Result<(), ApiError> {
        self.client.send_unit::<()>(Verb::Delete, &self.item_path(id), None).await
    }
}

impl ApiClient {
    pub fn catalog(&self, catalog: Catalog) -> Resource<'_, NamedRef> {
        Resource::new(self, catalog.path())
    }
}
