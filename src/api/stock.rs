//! Stock Commands

use super::client::ApiClient;
use super::error::ApiError;
use crate::models::{StockLevel, StockQuery};

impl StockQuery {
    /// Query string parameters for `GET /stock`
    pub fn params(&self) -> [(&'static str, String); 3] {
        [
            ("clientId", self.client_id.to_string()),
            ("productId", self.product_id.to_string()),
            ("sectionId", self.section_id.to_string()),
        ]
    }
}

impl ApiClient {
    pub async fn get_stock(&self, query: &StockQuery) -> Result<StockLevel, ApiError> {
        self.get_json_with_query("/stock", &query.params()).await
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{EntityId, StockQuery};

    #[test]
    fn test_stock_query_params() {
        let query = StockQuery {
            client_id: EntityId::Number(7),
            product_id: EntityId::Number(3),
            section_id: EntityId::from("A1"),
        };
        let params = query.params();
        assert_eq!(params[0], ("clientId", "7".to_string()));
        assert_eq!(params[1], ("productId", "3".to_string()));
        assert_eq!(params[2], ("sectionId", "A1".to_string()));
    }
}
