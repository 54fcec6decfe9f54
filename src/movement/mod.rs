//! Stock Movement Forms
//!
//! Draft model and workflow shared by the inbound and outbound screens.

mod draft;
mod workflow;

pub use draft::FieldKey;
pub use workflow::{load_reference_data, submit, BannerKind, LineField, MovementForm, Phase, ReferenceData};
