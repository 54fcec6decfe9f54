//! Movement Commands
//!
//! Inbound and outbound documents are written with a single POST each.

use super::client::{ApiClient, Verb};
use super::error::ApiError;
use crate::models::{MovementCreated, MovementKind, MovementRequest};

impl ApiClient {
    pub async fn create_movement(
        &self,
        kind: MovementKind,
        request: &MovementRequest,
    ) -> Result<MovementCreated, ApiError> {
        log::info!("[API] creating {} with {} line(s)", kind.label(), request.lines.len());
        let created: MovementCreated = self.send_json(Verb::Post, kind.path(), request).await?;
        log::info!("[API] {} created: {}", kind.label(), created.id);
        Ok(created)
    }
}
