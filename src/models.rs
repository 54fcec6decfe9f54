//! Frontend Models
//!
//! Data structures matching backend entities and request bodies.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Backend identifier. Products and clients use numeric ids, sections use strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(i64),
    Text(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Number(n) => write!(f, "{}", n),
            EntityId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        EntityId::Number(value)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        EntityId::Text(value.to_string())
    }
}

/// `{id, name}` record shared by products, sections and clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedRef {
    pub id: EntityId,
    pub name: String,
}

pub type Product = NamedRef;
pub type Section = NamedRef;
pub type Client = NamedRef;

/// Body for creating a product/section/client (server assigns the id)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewNamed<'a> {
    pub name: &'a str,
}

/// Which side of the stock ledger a movement document writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementKind {
    Inbound,
    Outbound,
}

impl MovementKind {
    /// Collection path on the backend
    pub fn path(self) -> &'static str {
        match self {
            MovementKind::Inbound => "/inbound",
            MovementKind::Outbound => "/outbound",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MovementKind::Inbound => "Inbound",
            MovementKind::Outbound => "Outbound",
        }
    }

    pub fn created_message(self, id: &EntityId) -> String {
        format!("{} created (ID: {})", self.label(), id)
    }

    pub fn fallback_error(self) -> &'static str {
        match self {
            MovementKind::Inbound => "Failed to create inbound",
            MovementKind::Outbound => "Failed to create outbound",
        }
    }
}

/// Client the movement belongs to: either a selected lookup entry or free text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ClientRef {
    #[serde(rename = "clientId")]
    Id(EntityId),
    #[serde(rename = "clientName")]
    Name(String),
}

impl ClientRef {
    pub fn is_blank(&self) -> bool {
        match self {
            ClientRef::Id(_) => false,
            ClientRef::Name(name) => name.trim().is_empty(),
        }
    }
}

/// One product/section/quantity row of a movement document.
///
/// Quantities are `None` while the input is empty or not a number.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product_name: String,
    pub section_name: String,
    pub cartons: Option<i64>,
    pub pallets: Option<i64>,
}

impl LineItem {
    pub fn blank() -> Self {
        Self {
            product_name: String::new(),
            section_name: String::new(),
            cartons: Some(0),
            pallets: Some(0),
        }
    }
}

impl Default for LineItem {
    fn default() -> Self {
        Self::blank()
    }
}

/// Body of `POST /inbound` and `POST /outbound`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovementRequest {
    #[serde(flatten)]
    pub client: ClientRef,
    pub lines: Vec<LineItem>,
}

/// Response of a movement write; only the id is guaranteed
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementCreated {
    pub id: EntityId,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Query for `GET /stock`
#[derive(Debug, Clone, PartialEq)]
pub struct StockQuery {
    pub client_id: EntityId,
    pub product_id: EntityId,
    pub section_id: EntityId,
}

/// Stock on hand for one client/product/section triple
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockLevel {
    pub client_id: EntityId,
    pub product_id: EntityId,
    pub section_id: EntityId,
    pub quantity: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entity_id_accepts_numbers_and_strings() {
        let refs: Vec<NamedRef> = serde_json::from_value(json!([
            {"id": 3, "name": "Apples"},
            {"id": "A1", "name": "Chamber A1"}
        ]))
        .unwrap();
        assert_eq!(refs[0].id, EntityId::Number(3));
        assert_eq!(refs[1].id, EntityId::Text("A1".into()));
        assert_eq!(refs[0].id.to_string(), "3");
    }

    #[test]
    fn test_request_with_client_id() {
        let request = MovementRequest {
            client: ClientRef::Id(7.into()),
            lines: vec![LineItem {
                product_name: "A".into(),
                section_name: "S1".into(),
                cartons: Some(2),
                pallets: Some(1),
            }],
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "clientId": 7,
                "lines": [{"productName": "A", "sectionName": "S1", "cartons": 2, "pallets": 1}]
            })
        );
    }

    #[test]
    fn test_request_with_client_name() {
        let request = MovementRequest {
            client: ClientRef::Name("Cold Foods Ltd".into()),
            lines: vec![LineItem::blank()],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["clientName"], "Cold Foods Ltd");
        assert!(value.get("clientId").is_none());
    }

    #[test]
    fn test_movement_created_tolerates_extra_fields() {
        let created: MovementCreated = serde_json::from_value(json!({
            "id": "INB-100",
            "clientName": "X",
            "lines": [],
            "createdAt": "2024-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(MovementKind::Inbound.created_message(&created.id), "Inbound created (ID: INB-100)");
        assert_eq!(created.created_at.as_deref(), Some("2024-01-01T00:00:00Z"));
    }

    #[test]
    fn test_blank_client_name() {
        assert!(ClientRef::Name("  ".into()).is_blank());
        assert!(!ClientRef::Id(EntityId::Number(0)).is_blank());
    }
}
