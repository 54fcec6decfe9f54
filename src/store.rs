//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the
//! catalog lists so the list screens and the add-product page share them.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::Catalog;
use crate::models::{EntityId, NamedRef};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub products: Vec<NamedRef>,
    pub sections: Vec<NamedRef>,
    pub clients: Vec<NamedRef>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Entries of one catalog (tracked)
pub fn store_catalog(store: &AppStore, catalog: Catalog) -> Vec<NamedRef> {
    match catalog {
        Catalog::Products => store.products().get(),
        Catalog::Sections => store.sections().get(),
        Catalog::Clients => store.clients().get(),
    }
}

fn with_catalog_mut(store: &AppStore, catalog: Catalog, f: impl FnOnce(&mut Vec<NamedRef>)) {
    match catalog {
        Catalog::Products => f(&mut store.products().write()),
        Catalog::Sections => f(&mut store.sections().write()),
        Catalog::Clients => f(&mut store.clients().write()),
    }
}

/// Replace a catalog with freshly loaded entries
pub fn store_set_catalog(store: &AppStore, catalog: Catalog, entries: Vec<NamedRef>) {
    with_catalog_mut(store, catalog, |list| *list = entries);
}

/// Add an entry to a catalog
pub fn store_add_entry(store: &AppStore, catalog: Catalog, entry: NamedRef) {
    with_catalog_mut(store, catalog, |list| list.push(entry));
}

/// Update an entry in a catalog by ID
pub fn store_update_entry(store: &AppStore, catalog: Catalog, updated: NamedRef) {
    with_catalog_mut(store, catalog, |list| {
        if let Some(entry) = list.iter_mut().find(|e| e.id == updated.id) {
            *entry = updated;
        }
    });
}

/// Remove an entry from a catalog by ID
pub fn store_remove_entry(store: &AppStore, catalog: Catalog, id: &EntityId) {
    with_catalog_mut(store, catalog, |list| list.retain(|e| &e.id != id));
}
