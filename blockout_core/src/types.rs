//! Core domain types for the Blockout session builder.
//!
//! This module defines the fundamental types used throughout the system:
//! - Catalog items and their categories
//! - Session blocks (one scheduled workout with a duration)
//! - Category filtering for catalog queries

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Catalog Types
// ============================================================================

/// A workout category (e.g., "Mobility / Stretch")
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub label: String,
    /// Opaque display colour (hex string), passed through to presentation.
    pub color: String,
}

/// A selectable workout in the catalog (e.g., "Push-ups")
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub category_id: String,
}

/// Filter applied when listing catalog items
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Category(String),
}

impl CategoryFilter {
    pub fn matches(&self, item: &CatalogItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(id) => &item.category_id == id,
        }
    }
}

// ============================================================================
// Session Types
// ============================================================================

/// One scheduled block in a session: a catalog item plus a duration.
///
/// The `id` is assigned at creation time and is never reused or derived
/// from the block's position in the session.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionBlock {
    pub id: Uuid,
    pub item_id: String,
    /// Duration in minutes, always within [1, 60].
    pub minutes: u32,
}

impl SessionBlock {
    pub fn duration_seconds(&self) -> u32 {
        self.minutes * 60
    }
}

// ============================================================================
// Catalog Type
// ============================================================================

/// The complete catalog of workouts and categories
#[derive(Clone, Debug)]
pub struct Catalog {
    /// Items in stable catalog-definition order.
    pub items: Vec<CatalogItem>,
    /// Categories in stable catalog-definition order.
    pub categories: Vec<Category>,
}
