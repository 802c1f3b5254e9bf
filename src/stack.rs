//! Camera registry and per-frame winner resolution.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::context::FrameContext;
use crate::rig::CameraRig;

/// Opaque handle to a registered camera.
///
/// Ids are never reused within a stack's lifetime, so a stale handle
/// (kept past unregistration) simply resolves to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CameraId(u64);

impl CameraId {
    #[cfg(test)]
    pub(crate) fn for_tests(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for CameraId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "camera#{}", self.0)
    }
}

#[derive(Debug)]
struct Slot {
    rig: CameraRig,
    /// Registration sequence number; larger is more recent.
    order: u64,
}

/// The resolver's per-frame output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackSnapshot {
    /// The camera selected to drive output this frame, if any.
    pub winner: Option<CameraId>,
    /// The previous frame's winner, for change detection.
    pub previous: Option<CameraId>,
    /// Every camera whose activation gate passed this frame, in id order.
    pub eligible: Vec<CameraId>,
}

impl StackSnapshot {
    /// Whether the winner changed since the previous frame.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.winner != self.previous
    }
}

/// Registry of camera rigs with priority-based winner resolution.
///
/// Selection policy: among eligible rigs, highest priority wins; equal
/// priorities break toward the most recently registered rig. The
/// tie-break is deliberate and load-bearing — re-registering a camera
/// puts it on top of its priority band.
#[derive(Debug)]
pub struct CameraStack {
    slots: FxHashMap<CameraId, Slot>,
    next_id: u64,
    next_order: u64,
}

impl Default for CameraStack {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraStack {
    /// Empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: FxHashMap::default(),
            next_id: 1,
            next_order: 0,
        }
    }

    /// Register a rig and return its handle.
    pub fn register(&mut self, rig: CameraRig) -> CameraId {
        let id = CameraId(self.next_id);
        self.next_id += 1;
        let order = self.next_order;
        self.next_order += 1;
        let _ = self.slots.insert(id, Slot { rig, order });
        id
    }

    /// Remove a rig, returning it if it was registered.
    pub fn unregister(&mut self, id: CameraId) -> Option<CameraRig> {
        self.slots.remove(&id).map(|slot| slot.rig)
    }

    /// Shared access to a registered rig.
    #[must_use]
    pub fn rig(&self, id: CameraId) -> Option<&CameraRig> {
        self.slots.get(&id).map(|slot| &slot.rig)
    }

    /// Exclusive access to a registered rig.
    pub fn rig_mut(&mut self, id: CameraId) -> Option<&mut CameraRig> {
        self.slots.get_mut(&id).map(|slot| &mut slot.rig)
    }

    /// Whether the id refers to a registered rig.
    #[must_use]
    pub fn contains(&self, id: CameraId) -> bool {
        self.slots.contains_key(&id)
    }

    /// Number of registered rigs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no rigs are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Select this frame's winner.
    ///
    /// O(registered cameras); the snapshot is rebuilt from scratch every
    /// frame, nothing is cached across calls.
    #[must_use]
    pub fn resolve(
        &self,
        ctx: &FrameContext,
        previous: Option<CameraId>,
    ) -> StackSnapshot {
        let mut eligible = Vec::new();
        let mut best: Option<(i32, u64, CameraId)> = None;

        for (&id, slot) in &self.slots {
            if !slot.rig.is_eligible(ctx) {
                continue;
            }
            eligible.push(id);
            let key = (slot.rig.priority(), slot.order);
            if best.map_or(true, |(p, o, _)| key > (p, o)) {
                best = Some((key.0, key.1, id));
            }
        }

        // Map iteration order is arbitrary; keep the snapshot stable.
        eligible.sort_unstable();

        StackSnapshot {
            winner: best.map(|(_, _, id)| id),
            previous,
            eligible,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> FrameContext {
        FrameContext::new(0.016)
    }

    #[test]
    fn test_empty_stack_resolves_none() {
        let stack = CameraStack::new();
        let snap = stack.resolve(&ctx(), None);
        assert_eq!(snap.winner, None);
        assert!(snap.eligible.is_empty());
        assert!(!snap.changed());
    }

    #[test]
    fn test_highest_priority_wins() {
        let mut stack = CameraStack::new();
        let low = stack.register(CameraRig::new().with_priority(1));
        let high = stack.register(CameraRig::new().with_priority(5));
        let mid = stack.register(CameraRig::new().with_priority(3));
        let snap = stack.resolve(&ctx(), None);
        assert_eq!(snap.winner, Some(high));
        assert_eq!(snap.eligible, vec![low, high, mid]);
    }

    #[test]
    fn test_equal_priority_breaks_to_latest_registration() {
        let mut stack = CameraStack::new();
        let _first = stack.register(CameraRig::new().with_priority(2));
        let _second = stack.register(CameraRig::new().with_priority(2));
        let third = stack.register(CameraRig::new().with_priority(2));
        assert_eq!(stack.resolve(&ctx(), None).winner, Some(third));
    }

    #[test]
    fn test_tie_break_holds_for_any_registration_permutation() {
        // Whatever the mix of priorities, the winner is always the
        // latest-registered rig among the max-priority eligible ones.
        let priorities = [3, 1, 3, 2, 3, 1];
        for rotation in 0..priorities.len() {
            let mut stack = CameraStack::new();
            let mut ids = Vec::new();
            let mut rotated = priorities.to_vec();
            rotated.rotate_left(rotation);
            for &p in &rotated {
                ids.push((stack.register(CameraRig::new().with_priority(p)), p));
            }
            let max = rotated.iter().copied().max().unwrap_or(0);
            let expected = ids
                .iter()
                .rev()
                .find(|(_, p)| *p == max)
                .map(|(id, _)| *id);
            assert_eq!(stack.resolve(&ctx(), None).winner, expected);
        }
    }

    #[test]
    fn test_ineligible_rigs_are_skipped() {
        let mut stack = CameraStack::new();
        let low = stack.register(CameraRig::new().with_priority(1));
        let _high =
            stack.register(CameraRig::new().with_priority(9).disabled());
        let snap = stack.resolve(&ctx(), None);
        assert_eq!(snap.winner, Some(low));
        assert_eq!(snap.eligible, vec![low]);
    }

    #[test]
    fn test_predicate_gating_follows_context() {
        let mut stack = CameraStack::new();
        let base = stack.register(CameraRig::new().with_priority(1));
        let gated = stack.register(
            CameraRig::new()
                .with_priority(9)
                .with_activation(|ctx| ctx.follow.is_some()),
        );
        assert_eq!(stack.resolve(&ctx(), None).winner, Some(base));

        let with_target = ctx().with_follow(crate::context::TargetPose::at(
            glam::Vec3::ZERO,
        ));
        assert_eq!(stack.resolve(&with_target, None).winner, Some(gated));
    }

    #[test]
    fn test_unregister_removes_and_returns() {
        let mut stack = CameraStack::new();
        let id = stack.register(CameraRig::new().with_priority(4));
        assert!(stack.contains(id));
        let rig = stack.unregister(id);
        assert_eq!(rig.map(|r| r.priority()), Some(4));
        assert!(!stack.contains(id));
        assert!(stack.unregister(id).is_none());
        assert_eq!(stack.resolve(&ctx(), Some(id)).winner, None);
    }

    #[test]
    fn test_reregistration_moves_to_top_of_band() {
        let mut stack = CameraStack::new();
        let a = stack.register(CameraRig::new().with_priority(2));
        let b = stack.register(CameraRig::new().with_priority(2));
        assert_eq!(stack.resolve(&ctx(), None).winner, Some(b));

        // Pull `a` out and put it back: it is now the most recent.
        let rig = match stack.unregister(a) {
            Some(r) => r,
            None => unreachable!(),
        };
        let a2 = stack.register(rig);
        assert_eq!(stack.resolve(&ctx(), None).winner, Some(a2));
    }

    #[test]
    fn test_snapshot_detects_change() {
        let mut stack = CameraStack::new();
        let id = stack.register(CameraRig::new());
        let snap = stack.resolve(&ctx(), None);
        assert!(snap.changed());
        let snap = stack.resolve(&ctx(), Some(id));
        assert!(!snap.changed());
    }
}
