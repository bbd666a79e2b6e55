//! Active UI arbitration.
//!
//! Several UI elements may hold a claim at the same time (a hovered button
//! sitting on a hovered panel). The arbitrator decides which single one is
//! *authoritative*: the claimant with the smallest layer value. Among
//! claimants sharing a layer, the most recently claimed wins.
//!
//! Resolution is computed on demand from the current claim set, so a release
//! or `kill()` earlier in a tick is visible to everything after it.

use std::cmp::Reverse;

/// Identity of a UI element, allocated by the arbitrator that owns it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    pub fn raw(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy)]
struct Claim {
    id: ElementId,
    layer: i32,
    /// Claim order, used only to break layer ties
    seq: u64,
}

/// Owns the set of elements currently claiming exclusive input.
///
/// Exactly one of these lives in the top-level game context and is handed to
/// UI elements by reference while they update.
#[derive(Debug, Default)]
pub struct ActiveUiArbitrator {
    claims: Vec<Claim>,
    next_id: u64,
    next_seq: u64,
}

impl ActiveUiArbitrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands out a fresh element identity
    pub fn allocate_id(&mut self) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Adds `id` to the claim set. Claiming again while already claiming is a
    /// no-op and does not change tie-break order.
    ///
    /// Returns true if the claim is new.
    pub fn claim(&mut self, id: ElementId, layer: i32) -> bool {
        if self.is_claiming(id) {
            return false;
        }

        self.claims.push(Claim {
            id,
            layer,
            seq: self.next_seq,
        });
        self.next_seq += 1;
        log::debug!("UI claim {:?} on layer {} ({} active)", id, layer, self.claims.len());
        true
    }

    /// Removes `id` from the claim set. Releasing a non-claimant is a no-op.
    ///
    /// Returns true if a claim was removed.
    pub fn release(&mut self, id: ElementId) -> bool {
        let before = self.claims.len();
        self.claims.retain(|claim| claim.id != id);
        let removed = self.claims.len() != before;
        if removed {
            log::debug!("UI release {:?} ({} active)", id, self.claims.len());
        }
        removed
    }

    /// Keeps the recorded layer of a live claim in sync with its element
    pub fn update_layer(&mut self, id: ElementId, layer: i32) {
        if let Some(claim) = self.claims.iter_mut().find(|claim| claim.id == id) {
            claim.layer = layer;
        }
    }

    pub fn is_claiming(&self, id: ElementId) -> bool {
        self.claims.iter().any(|claim| claim.id == id)
    }

    /// The authoritative element, or `None` when nobody claims input.
    pub fn resolve_authoritative(&self) -> Option<ElementId> {
        self.claims
            .iter()
            .min_by_key(|claim| (claim.layer, Reverse(claim.seq)))
            .map(|claim| claim.id)
    }

    pub fn is_authoritative(&self, id: ElementId) -> bool {
        self.resolve_authoritative() == Some(id)
    }

    /// True if any UI element currently holds input; world logic should stand down
    pub fn has_authoritative(&self) -> bool {
        !self.claims.is_empty()
    }

    pub fn claim_count(&self) -> usize {
        self.claims.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_resolves_to_none() {
        let arbiter = ActiveUiArbitrator::new();
        assert_eq!(arbiter.resolve_authoritative(), None);
        assert!(!arbiter.has_authoritative());
    }

    #[test]
    fn test_button_over_panel() {
        let mut arbiter = ActiveUiArbitrator::new();
        let panel = arbiter.allocate_id();
        let button = arbiter.allocate_id();

        arbiter.claim(panel, -1);
        arbiter.claim(button, -2);

        assert_eq!(arbiter.resolve_authoritative(), Some(button));
        assert!(arbiter.is_authoritative(button));
        assert!(!arbiter.is_authoritative(panel));
    }

    #[test]
    fn test_claim_order_does_not_matter_for_distinct_layers() {
        let mut arbiter = ActiveUiArbitrator::new();
        let panel = arbiter.allocate_id();
        let button = arbiter.allocate_id();

        arbiter.claim(button, -2);
        arbiter.claim(panel, -1);

        assert_eq!(arbiter.resolve_authoritative(), Some(button));
    }

    #[test]
    fn test_claim_and_release_are_idempotent() {
        let mut arbiter = ActiveUiArbitrator::new();
        let id = arbiter.allocate_id();

        assert!(arbiter.claim(id, 0));
        assert!(!arbiter.claim(id, 0));
        assert_eq!(arbiter.claim_count(), 1);

        assert!(arbiter.release(id));
        assert!(!arbiter.release(id));
        assert_eq!(arbiter.claim_count(), 0);
    }

    #[test]
    fn test_tie_break_most_recent_claim_wins() {
        let mut arbiter = ActiveUiArbitrator::new();
        let first = arbiter.allocate_id();
        let second = arbiter.allocate_id();

        arbiter.claim(first, 0);
        arbiter.claim(second, 0);
        assert_eq!(arbiter.resolve_authoritative(), Some(second));

        // Re-claiming while claimed keeps the original order
        arbiter.claim(first, 0);
        assert_eq!(arbiter.resolve_authoritative(), Some(second));

        // A fresh claim after a release moves to the front
        arbiter.release(first);
        arbiter.claim(first, 0);
        assert_eq!(arbiter.resolve_authoritative(), Some(first));
    }

    #[test]
    fn test_release_hands_authority_back() {
        let mut arbiter = ActiveUiArbitrator::new();
        let panel = arbiter.allocate_id();
        let button = arbiter.allocate_id();

        arbiter.claim(panel, -1);
        arbiter.claim(button, -2);
        arbiter.release(button);

        assert_eq!(arbiter.resolve_authoritative(), Some(panel));
    }

    #[test]
    fn test_update_layer() {
        let mut arbiter = ActiveUiArbitrator::new();
        let a = arbiter.allocate_id();
        let b = arbiter.allocate_id();

        arbiter.claim(a, 0);
        arbiter.claim(b, 1);
        arbiter.update_layer(b, -5);

        assert_eq!(arbiter.resolve_authoritative(), Some(b));
    }

    #[test]
    fn test_ids_are_unique() {
        let mut arbiter = ActiveUiArbitrator::new();
        let a = arbiter.allocate_id();
        let b = arbiter.allocate_id();
        assert_ne!(a, b);
        assert_eq!(b.raw(), a.raw() + 1);
    }

    proptest! {
        #[test]
        fn prop_minimum_layer_wins(layers in proptest::collection::hash_set(-1_000i32..1_000, 1..32)) {
            let mut arbiter = ActiveUiArbitrator::new();
            let mut claimed = Vec::new();
            for layer in &layers {
                let id = arbiter.allocate_id();
                arbiter.claim(id, *layer);
                claimed.push((id, *layer));
            }

            let expected = claimed
                .iter()
                .min_by_key(|(_, layer)| *layer)
                .map(|(id, _)| *id);
            prop_assert_eq!(arbiter.resolve_authoritative(), expected);
        }
    }
}
