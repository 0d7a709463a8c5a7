//! Active-step tracking for step-based explanations
//!
//! The viewer remembers which explanation it is bound to. Binding to an
//! explanation with a different id resets the active step to 0; selecting a
//! step only moves the index and never triggers a request.

use lstudio_core::InteractiveExplanation;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepViewerState {
    bound_to: Option<u64>,
    active: usize,
}

impl StepViewerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind to `explanation`, resetting when its identity differs
    pub fn bind(&mut self, explanation: &InteractiveExplanation) {
        if self.bound_to != Some(explanation.id) {
            self.bound_to = Some(explanation.id);
            self.active = 0;
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn bound_to(&self) -> Option<u64> {
        self.bound_to
    }

    /// Select `index` if it is within `step_count`; returns whether it moved
    pub fn select(&mut self, index: usize, step_count: usize) -> bool {
        if index < step_count && index != self.active {
            self.active = index;
            true
        } else {
            false
        }
    }

    pub fn next(&mut self, step_count: usize) -> bool {
        self.select(self.active + 1, step_count)
    }

    pub fn previous(&mut self, step_count: usize) -> bool {
        match self.active.checked_sub(1) {
            Some(index) => self.select(index, step_count),
            None => false,
        }
    }
}
