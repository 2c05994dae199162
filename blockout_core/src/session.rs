//! Session model: the ordered list of chosen workout blocks.
//!
//! The session is the single source of truth for block order and total
//! duration. The timeline calculator and timer engine only ever read it.
//! Mutations follow a "fail closed, stay silent" policy: unknown catalog or
//! block ids are ignored, and out-of-range durations are clamped rather
//! than rejected.

use crate::types::{Catalog, SessionBlock};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lowest duration a block can hold, in minutes
pub const MIN_BLOCK_MINUTES: u32 = 1;
/// Highest duration a block can hold, in minutes
pub const MAX_BLOCK_MINUTES: u32 = 60;
/// Duration assigned to freshly appended blocks, in minutes
pub const DEFAULT_BLOCK_MINUTES: u32 = 5;

/// Clamp a requested duration into the valid [1, 60] range
pub fn clamp_minutes(requested: i64) -> u32 {
    requested.clamp(MIN_BLOCK_MINUTES as i64, MAX_BLOCK_MINUTES as i64) as u32
}

/// An ordered sequence of session blocks; insertion order is playback order
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Session {
    blocks: Vec<SessionBlock>,
}

impl Session {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a block for `item_id` with the default duration.
    ///
    /// Returns the new block's id, or `None` (leaving the session unchanged)
    /// if `item_id` is not in the catalog.
    pub fn append(&mut self, catalog: &Catalog, item_id: &str) -> Option<Uuid> {
        self.append_with_minutes(catalog, item_id, DEFAULT_BLOCK_MINUTES as i64)
    }

    /// Append a block for `item_id` with an explicit duration (clamped).
    ///
    /// Returns the new block's id, or `None` (leaving the session unchanged)
    /// if `item_id` is not in the catalog.
    pub fn append_with_minutes(
        &mut self,
        catalog: &Catalog,
        item_id: &str,
        minutes: i64,
    ) -> Option<Uuid> {
        let Some(item) = catalog.get(item_id) else {
            tracing::debug!("Ignoring append for unknown catalog item '{}'", item_id);
            return None;
        };

        let block = SessionBlock {
            id: Uuid::new_v4(),
            item_id: item.id.clone(),
            minutes: clamp_minutes(minutes),
        };
        let id = block.id;
        self.blocks.push(block);
        Some(id)
    }

    /// Set a block's duration, clamping into [1, 60]. No-op if `block_id`
    /// is not in the session.
    pub fn set_duration(&mut self, block_id: Uuid, requested_minutes: i64) {
        if let Some(block) = self.blocks.iter_mut().find(|b| b.id == block_id) {
            block.minutes = clamp_minutes(requested_minutes);
        }
    }

    /// Remove a block. No-op if `block_id` is not in the session.
    pub fn remove(&mut self, block_id: Uuid) {
        self.blocks.retain(|b| b.id != block_id);
    }

    /// Empty the session.
    ///
    /// The orchestrating layer must issue `TimerEngine::session_cleared()`
    /// immediately afterwards so elapsed time does not outlive the blocks
    /// it was measured against.
    pub fn clear(&mut self) {
        self.blocks.clear();
    }

    /// Sum of all block durations in minutes (display only)
    pub fn total_minutes(&self) -> u32 {
        self.blocks.iter().map(|b| b.minutes).sum()
    }

    /// Sum of all block durations in seconds
    pub fn total_seconds(&self) -> u32 {
        self.total_minutes() * 60
    }

    /// Blocks in playback order
    pub fn blocks(&self) -> &[SessionBlock] {
        &self.blocks
    }

    /// Look up a block by id
    pub fn get(&self, block_id: Uuid) -> Option<&SessionBlock> {
        self.blocks.iter().find(|b| b.id == block_id)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_default_catalog;

    #[test]
    fn test_append_uses_default_duration() {
        let catalog = build_default_catalog();
        let mut session = Session::new();

        let id = session.append(&catalog, "w6").expect("known item");

        assert_eq!(session.len(), 1);
        let block = session.get(id).unwrap();
        assert_eq!(block.item_id, "w6");
        assert_eq!(block.minutes, DEFAULT_BLOCK_MINUTES);
    }

    #[test]
    fn test_append_unknown_item_is_noop() {
        let catalog = build_default_catalog();
        let mut session = Session::new();
        session.append(&catalog, "w6");

        let before = session.blocks().to_vec();
        assert!(session.append(&catalog, "bogus").is_none());

        assert_eq!(session.blocks(), &before[..]);
    }

    #[test]
    fn test_block_ids_are_unique_and_stable() {
        let catalog = build_default_catalog();
        let mut session = Session::new();
        let a = session.append(&catalog, "w1").unwrap();
        let b = session.append(&catalog, "w1").unwrap();
        assert_ne!(a, b);

        // Removing the first block must not shift the second's identity
        session.remove(a);
        assert_eq!(session.blocks()[0].id, b);
    }

    #[test]
    fn test_set_duration_clamps_low_and_high() {
        let catalog = build_default_catalog();
        let mut session = Session::new();
        let id = session.append(&catalog, "w16").unwrap();

        session.set_duration(id, 0);
        assert_eq!(session.get(id).unwrap().minutes, 1);

        session.set_duration(id, -30);
        assert_eq!(session.get(id).unwrap().minutes, 1);

        session.set_duration(id, 61);
        assert_eq!(session.get(id).unwrap().minutes, 60);

        session.set_duration(id, 10_000);
        assert_eq!(session.get(id).unwrap().minutes, 60);

        session.set_duration(id, 30);
        assert_eq!(session.get(id).unwrap().minutes, 30);
    }

    #[test]
    fn test_set_duration_unknown_block_is_noop() {
        let catalog = build_default_catalog();
        let mut session = Session::new();
        session.append(&catalog, "w16");

        session.set_duration(Uuid::new_v4(), 10);
        assert_eq!(session.blocks()[0].minutes, DEFAULT_BLOCK_MINUTES);
    }

    #[test]
    fn test_remove_unknown_block_is_noop() {
        let catalog = build_default_catalog();
        let mut session = Session::new();
        session.append(&catalog, "w16");

        session.remove(Uuid::new_v4());
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn test_totals() {
        let catalog = build_default_catalog();
        let mut session = Session::new();
        assert_eq!(session.total_minutes(), 0);
        assert_eq!(session.total_seconds(), 0);

        let a = session.append(&catalog, "w6").unwrap();
        let b = session.append(&catalog, "w16").unwrap();
        session.set_duration(a, 5);
        session.set_duration(b, 3);

        assert_eq!(session.total_minutes(), 8);
        assert_eq!(session.total_seconds(), 480);
    }

    #[test]
    fn test_clear_empties_session() {
        let catalog = build_default_catalog();
        let mut session = Session::new();
        session.append(&catalog, "w6");
        session.append(&catalog, "w16");

        session.clear();
        assert!(session.is_empty());
        assert_eq!(session.total_seconds(), 0);
    }
}
