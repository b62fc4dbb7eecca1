use std::time::Duration;

use super::models::{
    is_real_word,
    Epoch,
    SlotPhase,
    SlotState,
};

/// Fixed animation constants shared by every slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTiming {
    pub tick: Duration,
    pub base_delay: Duration,
    pub stagger: Duration,
    pub debounce: Duration,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(75),
            base_delay: Duration::from_millis(1000),
            stagger: Duration::from_millis(150),
            debounce: Duration::from_millis(100),
        }
    }
}

impl RevealTiming {
    /// Offset from the start of an epoch at which slot `index` settles.
    pub fn settle_after(&self, index: usize) -> Duration {
        let steps = u32::try_from(index).unwrap_or(u32::MAX);
        self.base_delay.saturating_add(self.stagger.saturating_mul(steps))
    }
}

/// Everything an animation task needs to drive one slot for one epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealPlan {
    pub epoch_id: u64,
    pub index: usize,
    pub tick: Duration,
    pub settle_after: Duration,
}

#[derive(Debug, Clone)]
pub struct SlotReveal {
    state: SlotState,
    active_epoch: Option<u64>,
}

impl SlotReveal {
    pub fn new(index: usize) -> Self {
        Self { state: SlotState::placeholder(index), active_epoch: None }
    }

    pub fn state(&self) -> &SlotState {
        &self.state
    }

    pub fn index(&self) -> usize {
        self.state.index
    }

    pub fn is_clickable(&self) -> bool {
        self.state.is_clickable()
    }

    pub fn is_spinning(&self) -> bool {
        self.active_epoch.is_some()
    }

    /// Clears the slot and drops any running animation.
    pub fn blank(&mut self) {
        self.active_epoch = None;
        self.state.target_word.clear();
        self.state.displayed_word.clear();
        self.state.phase = SlotPhase::Idle;
    }

    /// Starts over for a new `(epoch, target)` pair. Returns a plan when the
    /// slot has to animate.
    pub fn assign(
        &mut self,
        epoch: Epoch,
        target: impl Into<String>,
        timing: &RevealTiming,
    ) -> Option<RevealPlan> {
        self.state.target_word = target.into();

        match epoch {
            Epoch::NoAnimation => {
                self.active_epoch = None;
                self.state.displayed_word = self.state.target_word.clone();
                self.state.phase = if is_real_word(&self.state.target_word) {
                    SlotPhase::Settled
                } else {
                    SlotPhase::Idle
                };
                None
            }
            Epoch::Animating(epoch_id) => {
                self.active_epoch = Some(epoch_id);
                self.state.phase = SlotPhase::Spinning;
                Some(RevealPlan {
                    epoch_id,
                    index: self.state.index,
                    tick: timing.tick,
                    settle_after: timing.settle_after(self.state.index),
                })
            }
        }
    }

    /// Shows a decoy while spinning. Ticks from a superseded epoch are dropped.
    pub fn tick(&mut self, epoch_id: u64, decoy: &str) -> bool {
        if self.active_epoch != Some(epoch_id) {
            return false;
        }
        self.state.displayed_word = decoy.to_string();
        true
    }

    pub fn settle(&mut self, epoch_id: u64) -> bool {
        if self.active_epoch != Some(epoch_id) {
            return false;
        }
        self.active_epoch = None;
        self.state.displayed_word = self.state.target_word.clone();
        self.state.phase = SlotPhase::Settled;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::PLACEHOLDER;

    #[test]
    fn static_assignment_settles_immediately() {
        let mut slot = SlotReveal::new(0);
        let plan = slot.assign(Epoch::NoAnimation, "Lantern", &RevealTiming::default());

        assert!(plan.is_none());
        assert_eq!(slot.state().displayed_word, "Lantern");
        assert_eq!(slot.state().phase, SlotPhase::Settled);
        assert!(slot.is_clickable());
    }

    #[test]
    fn static_placeholder_stays_idle() {
        let mut slot = SlotReveal::new(2);
        slot.assign(Epoch::NoAnimation, PLACEHOLDER, &RevealTiming::default());

        assert_eq!(slot.state().phase, SlotPhase::Idle);
        assert_eq!(slot.state().displayed_word, PLACEHOLDER);
        assert!(!slot.is_clickable());
    }

    #[test]
    fn animation_spins_then_settles_on_target() {
        let timing = RevealTiming::default();
        let mut slot = SlotReveal::new(1);
        let plan = slot.assign(Epoch::Animating(3), "Harbor", &timing).unwrap();

        assert_eq!(plan.epoch_id, 3);
        assert_eq!(plan.settle_after, timing.base_delay + timing.stagger);
        assert_eq!(slot.state().phase, SlotPhase::Spinning);
        assert!(!slot.is_clickable());

        assert!(slot.tick(3, "Meadow"));
        assert_eq!(slot.state().displayed_word, "Meadow");

        assert!(slot.settle(3));
        assert_eq!(slot.state().displayed_word, "Harbor");
        assert_eq!(slot.state().phase, SlotPhase::Settled);
        assert!(slot.is_clickable());

        assert!(!slot.tick(3, "Quill"));
        assert_eq!(slot.state().displayed_word, "Harbor");
    }

    #[test]
    fn superseded_epoch_cannot_write() {
        let timing = RevealTiming::default();
        let mut slot = SlotReveal::new(0);
        slot.assign(Epoch::Animating(1), "Ember", &timing);
        slot.assign(Epoch::Animating(2), "Prism", &timing);

        assert!(!slot.tick(1, "Falcon"));
        assert!(!slot.settle(1));
        assert_eq!(slot.state().phase, SlotPhase::Spinning);

        assert!(slot.settle(2));
        assert_eq!(slot.state().displayed_word, "Prism");
    }

    #[test]
    fn blanking_cancels_the_animation() {
        let mut slot = SlotReveal::new(0);
        slot.assign(Epoch::Animating(5), "Quill", &RevealTiming::default());
        slot.blank();

        assert!(!slot.settle(5));
        assert_eq!(slot.state().displayed_word, "");
        assert_eq!(slot.state().phase, SlotPhase::Idle);
    }

    #[test]
    fn settle_offsets_grow_with_index() {
        let timing = RevealTiming::default();
        assert_eq!(timing.settle_after(0), Duration::from_millis(1000));
        assert_eq!(timing.settle_after(4), Duration::from_millis(1600));
        assert!(timing.settle_after(usize::MAX) >= timing.settle_after(4));
    }
}
