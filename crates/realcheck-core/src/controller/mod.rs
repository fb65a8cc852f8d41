//! View state machine for the select -> detect -> result workflow.
//!
//! All transitions go through [`reduce`]. Side effects (sending the request,
//! raising an alert) are returned as [`Effect`]s for the caller to run, and
//! their outcomes come back in as [`Event`]s tagged with the selection
//! generation that produced them.

mod reducer;
mod state;

pub use reducer::{reduce, Effect, Event};
pub use state::{Phase, PhaseKind, ViewState};

/// Owns the current [`ViewState`] and feeds events through [`reduce`].
#[derive(Debug, Default)]
pub struct Controller {
    state: ViewState,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Apply one event, returning the effect the caller must run, if any.
    pub fn dispatch(&mut self, event: Event) -> Option<Effect> {
        let state = std::mem::take(&mut self.state);
        let (next, effect) = reduce(state, event);
        self.state = next;
        effect
    }
}
