//! Action-slot map and the binding set that routes trigger events to actions.
//!
//! [`ActionWiring`] is the only path from a trigger event to an action.  It is
//! created when the overlay attaches and dropped on teardown, so events from
//! triggers of a torn-down overlay find no binding and are ignored.

use bevy::log::debug;

use super::state::ActionSlot;

/// Optional trigger handle per [`ActionSlot`].  Empty slots are not wired.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionSlots<T> {
    slots: [Option<T>; 4],
}

impl<T> Default for ActionSlots<T> {
    fn default() -> Self {
        Self {
            slots: [None, None, None, None],
        }
    }
}

impl<T> ActionSlots<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, slot: ActionSlot, trigger: T) -> Self {
        self.set(slot, trigger);
        self
    }

    pub fn set(&mut self, slot: ActionSlot, trigger: T) {
        self.slots[slot.index()] = Some(trigger);
    }

    pub fn get(&self, slot: ActionSlot) -> Option<&T> {
        self.slots[slot.index()].as_ref()
    }
}

/// A single trigger → action subscription.
#[derive(Debug)]
struct Binding<T> {
    slot: ActionSlot,
    trigger: T,
}

/// Live set of trigger bindings for one attachment.
///
/// Dropping the wiring releases every binding at once.
#[derive(Debug)]
pub struct ActionWiring<T> {
    bindings: Vec<Binding<T>>,
}

impl<T: PartialEq> ActionWiring<T> {
    /// Bind every populated slot, in focus order.
    pub fn wire(slots: ActionSlots<T>) -> Self {
        let bindings: Vec<Binding<T>> = ActionSlot::ALL
            .into_iter()
            .zip(slots.slots)
            .filter_map(|(slot, trigger)| trigger.map(|trigger| Binding { slot, trigger }))
            .collect();
        debug!("[overlay] wired {} action trigger(s)", bindings.len());
        Self { bindings }
    }

    /// Action bound to `trigger`, if any.
    pub fn slot_for(&self, trigger: &T) -> Option<ActionSlot> {
        self.bindings
            .iter()
            .find(|b| &b.trigger == trigger)
            .map(|b| b.slot)
    }

    pub fn trigger_for(&self, slot: ActionSlot) -> Option<&T> {
        self.bindings
            .iter()
            .find(|b| b.slot == slot)
            .map(|b| &b.trigger)
    }

    pub fn is_wired(&self, slot: ActionSlot) -> bool {
        self.trigger_for(slot).is_some()
    }

    /// Next wired slot after `from` (or before it when `backwards`), wrapping.
    pub fn step(&self, from: ActionSlot, backwards: bool) -> Option<ActionSlot> {
        if self.bindings.is_empty() {
            return None;
        }
        let n = ActionSlot::ALL.len();
        (1..=n)
            .map(|offset| {
                let i = if backwards {
                    (from.index() + n - offset) % n
                } else {
                    (from.index() + offset) % n
                };
                ActionSlot::ALL[i]
            })
            .find(|slot| self.is_wired(*slot))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<T> Drop for ActionWiring<T> {
    fn drop(&mut self) {
        if !self.bindings.is_empty() {
            debug!("[overlay] released {} action trigger(s)", self.bindings.len());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slots_are_not_wired() {
        let wiring = ActionWiring::wire(
            ActionSlots::new()
                .with(ActionSlot::Resume, 10)
                .with(ActionSlot::Quit, 40),
        );
        assert_eq!(wiring.len(), 2);
        assert!(wiring.is_wired(ActionSlot::Resume));
        assert!(!wiring.is_wired(ActionSlot::Settings));
        assert_eq!(wiring.slot_for(&40), Some(ActionSlot::Quit));
        assert_eq!(wiring.slot_for(&20), None);
    }

    #[test]
    fn step_skips_unwired_slots_and_wraps() {
        let wiring = ActionWiring::wire(
            ActionSlots::new()
                .with(ActionSlot::Resume, 1)
                .with(ActionSlot::MainMenu, 3),
        );
        assert_eq!(wiring.step(ActionSlot::Resume, false), Some(ActionSlot::MainMenu));
        assert_eq!(wiring.step(ActionSlot::MainMenu, false), Some(ActionSlot::Resume));
        assert_eq!(wiring.step(ActionSlot::Resume, true), Some(ActionSlot::MainMenu));
    }

    #[test]
    fn step_on_single_binding_returns_itself() {
        let wiring = ActionWiring::wire(ActionSlots::new().with(ActionSlot::Quit, 'q'));
        assert_eq!(wiring.step(ActionSlot::Quit, false), Some(ActionSlot::Quit));
    }

    #[test]
    fn step_without_bindings_is_none() {
        let wiring: ActionWiring<u8> = ActionWiring::wire(ActionSlots::new());
        assert!(wiring.is_empty());
        assert_eq!(wiring.step(ActionSlot::Resume, false), None);
    }
}
