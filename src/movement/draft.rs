//! Movement Draft
//!
//! In-progress movement document: client reference plus an ordered,
//! never-empty collection of line items, with pure validation and the
//! per-field touched flags used to decide when errors are shown.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::models::{ClientRef, LineItem, MovementRequest};

/// Inline validation message for one field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Must be zero or more")]
    Negative,
}

/// Addresses one input of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKey {
    Client,
    Product(usize),
    Section(usize),
    Cartons(usize),
    Pallets(usize),
}

impl FieldKey {
    fn line(self) -> Option<usize> {
        match self {
            FieldKey::Client => None,
            FieldKey::Product(i) | FieldKey::Section(i) | FieldKey::Cartons(i) | FieldKey::Pallets(i) => Some(i),
        }
    }

    fn with_line(self, index: usize) -> Self {
        match self {
            FieldKey::Client => FieldKey::Client,
            FieldKey::Product(_) => FieldKey::Product(index),
            FieldKey::Section(_) => FieldKey::Section(index),
            FieldKey::Cartons(_) => FieldKey::Cartons(index),
            FieldKey::Pallets(_) => FieldKey::Pallets(index),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineErrors {
    pub product: Option<FieldError>,
    pub section: Option<FieldError>,
    pub cartons: Option<FieldError>,
    pub pallets: Option<FieldError>,
}

impl LineErrors {
    pub fn is_empty(&self) -> bool {
        self.product.is_none() && self.section.is_none() && self.cartons.is_none() && self.pallets.is_none()
    }
}

/// Result of validating a whole draft
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftErrors {
    pub client: Option<FieldError>,
    /// Set when the draft has no lines at all
    pub no_lines: bool,
    pub lines: Vec<LineErrors>,
}

impl DraftErrors {
    pub fn is_valid(&self) -> bool {
        self.client.is_none() && !self.no_lines && self.lines.iter().all(LineErrors::is_empty)
    }

    pub fn field(&self, key: FieldKey) -> Option<FieldError> {
        match key {
            FieldKey::Client => self.client,
            FieldKey::Product(i) => self.lines.get(i).and_then(|l| l.product),
            FieldKey::Section(i) => self.lines.get(i).and_then(|l| l.section),
            FieldKey::Cartons(i) => self.lines.get(i).and_then(|l| l.cartons),
            FieldKey::Pallets(i) => self.lines.get(i).and_then(|l| l.pallets),
        }
    }
}

fn required_text(value: &str) -> Option<FieldError> {
    value.trim().is_empty().then_some(FieldError::Required)
}

fn quantity_error(value: Option<i64>) -> Option<FieldError> {
    match value {
        None => Some(FieldError::Required),
        Some(n) if n < 0 => Some(FieldError::Negative),
        Some(_) => None,
    }
}

pub fn validate_line(line: &LineItem) -> LineErrors {
    LineErrors {
        product: required_text(&line.product_name),
        section: required_text(&line.section_name),
        cartons: quantity_error(line.cartons),
        pallets: quantity_error(line.pallets),
    }
}

/// Unsaved movement document. Always holds at least one line.
#[derive(Debug, Clone, PartialEq)]
pub struct MovementDraft {
    pub client: Option<ClientRef>,
    lines: Vec<LineItem>,
}

impl Default for MovementDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl MovementDraft {
    pub fn new() -> Self {
        Self {
            client: None,
            lines: vec![LineItem::blank()],
        }
    }

    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    pub fn line_mut(&mut self, index: usize) -> Option<&mut LineItem> {
        self.lines.get_mut(index)
    }

    pub fn add_line(&mut self) {
        self.lines.push(LineItem::blank());
    }

    /// Remove the line at `index`. Returns false (and changes nothing) for
    /// the last remaining line or an index past the end.
    pub fn remove_line(&mut self, index: usize) -> bool {
        if self.lines.len() <= 1 || index >= self.lines.len() {
            return false;
        }
        self.lines.remove(index);
        true
    }

    pub fn validate(&self) -> DraftErrors {
        let client = match &self.client {
            Some(client) if !client.is_blank() => None,
            _ => Some(FieldError::Required),
        };
        DraftErrors {
            client,
            no_lines: self.lines.is_empty(),
            lines: self.lines.iter().map(validate_line).collect(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_valid()
    }

    /// Request body for a valid draft
    pub fn to_request(&self) -> Option<MovementRequest> {
        if !self.is_valid() {
            return None;
        }
        let client = self.client.clone()?;
        Some(MovementRequest {
            client,
            lines: self.lines.clone(),
        })
    }
}

/// Which fields have been interacted with, and whether submit was attempted
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Touched {
    keys: BTreeSet<FieldKey>,
    attempted: bool,
}

impl Touched {
    pub fn touch(&mut self, key: FieldKey) {
        self.keys.insert(key);
    }

    pub fn mark_attempted(&mut self) {
        self.attempted = true;
    }

    pub fn attempted(&self) -> bool {
        self.attempted
    }

    pub fn is_visible(&self, key: FieldKey) -> bool {
        self.attempted || self.keys.contains(&key)
    }

    /// Forget keys of line `index` and move later lines up by one
    pub fn remove_line(&mut self, index: usize) {
        self.keys = std::mem::take(&mut self.keys)
            .into_iter()
            .filter_map(|key| match key.line() {
                Some(i) if i == index => None,
                Some(i) if i > index => Some(key.with_line(i - 1)),
                _ => Some(key),
            })
            .collect();
    }

    pub fn clear(&mut self) {
        self.keys.clear();
        self.attempted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityId;

    fn line(product: &str, section: &str, cartons: Option<i64>, pallets: Option<i64>) -> LineItem {
        LineItem {
            product_name: product.to_string(),
            section_name: section.to_string(),
            cartons,
            pallets,
        }
    }

    #[test]
    fn test_valid_line() {
        assert!(validate_line(&line("Apples", "A1", Some(1), Some(0))).is_empty());
    }

    #[test]
    fn test_invalid_lines() {
        let errors = validate_line(&line("", "A1", Some(1), Some(0)));
        assert_eq!(errors.product, Some(FieldError::Required));

        let errors = validate_line(&line("Apples", "   ", Some(1), Some(0)));
        assert_eq!(errors.section, Some(FieldError::Required));

        let errors = validate_line(&line("Apples", "A1", Some(-1), Some(0)));
        assert_eq!(errors.cartons, Some(FieldError::Negative));

        let errors = validate_line(&line("Apples", "A1", Some(0), Some(-3)));
        assert_eq!(errors.pallets, Some(FieldError::Negative));

        let errors = validate_line(&line("Apples", "A1", None, Some(0)));
        assert_eq!(errors.cartons, Some(FieldError::Required));
    }

    #[test]
    fn test_draft_requires_client() {
        let mut draft = MovementDraft::new();
        *draft.line_mut(0).unwrap() = line("Apples", "A1", Some(1), Some(0));
        assert_eq!(draft.validate().client, Some(FieldError::Required));

        draft.client = Some(ClientRef::Name(" ".into()));
        assert!(!draft.is_valid());

        draft.client = Some(ClientRef::Id(EntityId::Number(7)));
        assert!(draft.is_valid());
        assert!(draft.to_request().is_some());
    }

    #[test]
    fn test_one_bad_line_invalidates_draft() {
        let mut draft = MovementDraft::new();
        draft.client = Some(ClientRef::Id(EntityId::Number(7)));
        *draft.line_mut(0).unwrap() = line("Apples", "A1", Some(1), Some(0));
        draft.add_line();

        let errors = draft.validate();
        assert!(!errors.is_valid());
        assert!(errors.lines[0].is_empty());
        assert_eq!(errors.field(FieldKey::Product(1)), Some(FieldError::Required));
        assert!(draft.to_request().is_none());
    }

    #[test]
    fn test_add_line_three_times() {
        let mut draft = MovementDraft::new();
        for _ in 0..3 {
            draft.add_line();
        }
        assert_eq!(draft.lines().len(), 4);
        assert!(draft.lines().iter().all(|l| *l == LineItem::blank()));
        assert_eq!(draft.lines()[3].cartons, Some(0));
    }

    #[test]
    fn test_last_line_cannot_be_removed() {
        let mut draft = MovementDraft::new();
        assert!(!draft.remove_line(0));
        assert_eq!(draft.lines().len(), 1);

        draft.add_line();
        assert!(!draft.remove_line(5));
        assert!(draft.remove_line(0));
        assert!(!draft.remove_line(0));
        assert_eq!(draft.lines().len(), 1);
    }

    #[test]
    fn test_remove_line_keeps_order() {
        let mut draft = MovementDraft::new();
        draft.add_line();
        draft.add_line();
        for (i, name) in ["a", "b", "c"].iter().enumerate() {
            draft.line_mut(i).unwrap().product_name = name.to_string();
        }
        draft.remove_line(1);
        let names: Vec<&str> = draft.lines().iter().map(|l| l.product_name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn test_validate_does_not_mutate() {
        let draft = MovementDraft::new();
        let before = draft.clone();
        let _ = draft.validate();
        assert_eq!(draft, before);
    }

    #[test]
    fn test_touched_shift_on_remove() {
        let mut touched = Touched::default();
        touched.touch(FieldKey::Client);
        touched.touch(FieldKey::Product(0));
        touched.touch(FieldKey::Section(1));
        touched.touch(FieldKey::Cartons(2));

        touched.remove_line(1);

        assert!(touched.is_visible(FieldKey::Client));
        assert!(touched.is_visible(FieldKey::Product(0)));
        assert!(!touched.is_visible(FieldKey::Section(1)));
        assert!(touched.is_visible(FieldKey::Cartons(1)));
        assert!(!touched.is_visible(FieldKey::Cartons(2)));
    }

    #[test]
    fn test_attempt_reveals_everything() {
        let mut touched = Touched::default();
        assert!(!touched.is_visible(FieldKey::Pallets(4)));
        touched.mark_attempted();
        assert!(touched.is_visible(FieldKey::Pallets(4)));
        touched.clear();
        assert!(!touched.attempted());
    }
}
