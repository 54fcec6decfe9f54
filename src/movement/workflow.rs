//! Movement Form Workflow
//!
//! State machine behind the inbound/outbound screens:
//!
//! ```text
//! Idle -> Loading -> Ready -> Submitting -> Ready (+ success or error banner)
//!            \-> LoadFailed -> Loading ...
//! ```
//!
//! The form itself is plain data. The async drivers at the bottom reach it
//! through a [`FormSlot`], which for the UI is an `RwSignal` and in tests a
//! `RefCell`. A disposed slot swallows late completions.

use leptos::prelude::*;

use super::draft::{DraftErrors, FieldError, FieldKey, MovementDraft, Touched};
use crate::api::{ApiError, WarehouseApi};
use crate::models::{Client, ClientRef, MovementCreated, MovementKind, MovementRequest, Product, Section};

pub const LOAD_ERROR_MESSAGE: &str = "Failed to load products, sections and clients";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Ready,
    LoadFailed,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// Editable column of a line row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineField {
    Product,
    Section,
    Cartons,
    Pallets,
}

impl LineField {
    pub fn key(self, index: usize) -> FieldKey {
        match self {
            LineField::Product => FieldKey::Product(index),
            LineField::Section => FieldKey::Section(index),
            LineField::Cartons => FieldKey::Cartons(index),
            LineField::Pallets => FieldKey::Pallets(index),
        }
    }
}

/// Lookup lists fetched once per screen visit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceData {
    pub products: Vec<Product>,
    pub sections: Vec<Section>,
    pub clients: Vec<Client>,
}

impl ReferenceData {
    pub fn is_empty(&self) -> bool {
        self.products.is_empty() && self.sections.is_empty() && self.clients.is_empty()
    }
}

/// Parse a quantity input; empty or non-numeric text counts as missing
pub fn parse_quantity(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

#[derive(Debug, Clone, PartialEq)]
pub struct MovementForm {
    kind: MovementKind,
    phase: Phase,
    reference: ReferenceData,
    draft: MovementDraft,
    touched: Touched,
    success: Option<String>,
    error: Option<String>,
}

impl MovementForm {
    pub fn new(kind: MovementKind) -> Self {
        Self {
            kind,
            phase: Phase::Idle,
            reference: ReferenceData::default(),
            draft: MovementDraft::new(),
            touched: Touched::default(),
            success: None,
            error: None,
        }
    }

    pub fn kind(&self) -> MovementKind {
        self.kind
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn draft(&self) -> &MovementDraft {
        &self.draft
    }

    pub fn banner(&self, kind: BannerKind) -> Option<&str> {
        match kind {
            BannerKind::Success => self.success.as_deref(),
            BannerKind::Error => self.error.as_deref(),
        }
    }

    pub fn is_editable(&self) -> bool {
        self.phase == Phase::Ready
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::Loading | Phase::Submitting)
    }

    // ========================
    // Reference data
    // ========================

    /// Enter `Loading`. Refused while another load or a submit is in flight.
    pub fn begin_load(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        self.phase = Phase::Loading;
        self.error = None;
        true
    }

    /// Apply the outcome of the fan-in join. Failure leaves every list empty.
    pub fn finish_load(&mut self, result: Result<ReferenceData, ApiError>) {
        if self.phase != Phase::Loading {
            return;
        }
        match result {
            Ok(reference) => {
                log::info!(
                    "[FORM] {} reference data: {} products, {} sections, {} clients",
                    self.kind.label(),
                    reference.products.len(),
                    reference.sections.len(),
                    reference.clients.len()
                );
                self.reference = reference;
                self.phase = Phase::Ready;
            }
            Err(err) => {
                log::warn!("[FORM] {} reference data failed: {}", self.kind.label(), err);
                self.reference = ReferenceData::default();
                self.phase = Phase::LoadFailed;
                self.error = Some(LOAD_ERROR_MESSAGE.to_string());
            }
        }
    }

    // ========================
    // Editing
    // ========================

    // Draft edits are refused while a load or submit is in flight
    pub fn add_line(&mut self) {
        if self.is_busy() {
            return;
        }
        self.draft.add_line();
    }

    pub fn remove_line(&mut self, index: usize) -> bool {
        if self.is_busy() {
            return false;
        }
        let removed = self.draft.remove_line(index);
        if removed {
            self.touched.remove_line(index);
        }
        removed
    }

    pub fn set_client(&mut self, client: Option<ClientRef>) {
        if self.is_busy() {
            return;
        }
        self.draft.client = client;
        self.touched.touch(FieldKey::Client);
    }

    /// Store raw input for one cell of line `index`
    pub fn edit_line(&mut self, index: usize, field: LineField, raw: &str) {
        if self.is_busy() {
            return;
        }
        let Some(line) = self.draft.line_mut(index) else {
            return;
        };
        match field {
            LineField::Product => line.product_name = raw.to_string(),
            LineField::Section => line.section_name = raw.to_string(),
            LineField::Cartons => line.cartons = parse_quantity(raw),
            LineField::Pallets => line.pallets = parse_quantity(raw),
        }
        self.touched.touch(field.key(index));
    }

    pub fn touch(&mut self, key: FieldKey) {
        self.touched.touch(key);
    }

    pub fn validate(&self) -> DraftErrors {
        self.draft.validate()
    }

    /// Error for `key`, once the field was touched or submit was attempted
    pub fn visible_error(&self, key: FieldKey) -> Option<FieldError> {
        if !self.touched.is_visible(key) {
            return None;
        }
        self.validate().field(key)
    }

    // ========================
    // Submission
    // ========================

    /// Enter `Submitting` and hand out the request body.
    ///
    /// An invalid draft yields `None` and only reveals its field errors.
    pub fn begin_submit(&mut self) -> Option<MovementRequest> {
        if self.phase != Phase::Ready {
            return None;
        }
        let Some(request) = self.draft.to_request() else {
            self.touched.mark_attempted();
            return None;
        };
        self.phase = Phase::Submitting;
        self.success = None;
        self.error = None;
        Some(request)
    }

    pub fn finish_submit(&mut self, result: Result<MovementCreated, ApiError>) {
        if self.phase != Phase::Submitting {
            return;
        }
        self.phase = Phase::Ready;
        match result {
            Ok(created) => {
                self.success = Some(self.kind.created_message(&created.id));
                self.draft = MovementDraft::new();
                self.touched.clear();
            }
            Err(err) => {
                log::warn!("[FORM] {} submit failed: {}", self.kind.label(), err);
                self.error = Some(err.user_message(self.kind.fallback_error()));
            }
        }
    }

    pub fn dismiss(&mut self, banner: BannerKind) {
        match banner {
            BannerKind::Success => self.success = None,
            BannerKind::Error => self.error = None,
        }
    }
}

// ========================
// Async drivers
// ========================

/// Short-lived mutable access to a form. `None` once the owner is gone.
pub trait FormSlot {
    fn with_form<R>(&self, f: impl FnOnce(&mut MovementForm) -> R) -> Option<R>;
}

impl FormSlot for RwSignal<MovementForm> {
    fn with_form<R>(&self, f: impl FnOnce(&mut MovementForm) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Fetch products, sections and clients concurrently.
///
/// Waits for every request to settle; any failure fails the whole load.
pub async fn fetch_reference_data<A: WarehouseApi>(api: &A) -> Result<ReferenceData, ApiError> {
    let (products, sections, clients) =
        futures::join!(api.list_products(), api.list_sections(), api.list_clients());
    Ok(ReferenceData {
        products: products?,
        sections: sections?,
        clients: clients?,
    })
}

/// Load reference data into the form. Returns whether it succeeded.
pub async fn load_reference_data<A, S>(api: &A, slot: &S) -> bool
where
    A: WarehouseApi,
    S: FormSlot,
{
    if slot.with_form(MovementForm::begin_load) != Some(true) {
        return false;
    }
    let result = fetch_reference_data(api).await;
    let loaded = result.is_ok();
    slot.with_form(|form| form.finish_load(result));
    loaded
}

/// Validate and submit the draft. Returns whether a document was created.
pub async fn submit<A, S>(api: &A, slot: &S) -> bool
where
    A: WarehouseApi,
    S: FormSlot,
{
    let Some((kind, request)) = slot
        .with_form(|form| form.begin_submit().map(|request| (form.kind(), request)))
        .flatten()
    else {
        return false;
    };
    let result = api.create_movement(kind, &request).await;
    let created = result.is_ok();
    slot.with_form(|form| form.finish_submit(result));
    created
}
