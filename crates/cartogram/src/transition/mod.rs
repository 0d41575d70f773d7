//! Era-to-era transition state machine.
//!
//! The machine is either resting at one era or tweening toward one:
//! `Idle(era)` or `Transitioning { from_era, to_era, progress }`. Progress
//! is advanced by the host's frame clock via [`Transition::tick`]; the
//! machine is self-terminating and bounded, so re-selecting an era is the
//! only cancellation mechanism.
//!
//! Selecting an era mid-flight restarts cleanly: the new transition starts
//! from the *currently displayed* (eased) positions, captured at the moment
//! of the call, never from the old origin era's resting positions. The
//! snapshot is the one piece of stored position state; everything else is
//! recomputed from the model each frame.

use bevy::math::Vec2;

use crate::config::{DEFAULT_TRANSITION_SECS, HIGHLIGHT_SWITCH_PROGRESS};
use crate::dataset::{Cartogram, EraId};


/// Ease-out cubic: fast start, decelerating into rest.
pub fn ease_out_cubic(t: f32) -> f32 {
    let u = 1.0 - t.clamp(0.0, 1.0);
    1.0 - u * u * u
}

/// Where the machine currently is.
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionState {
    Idle {
        era: EraId,
    },
    Transitioning {
        from_era: EraId,
        to_era: EraId,
        /// Raw (un-eased) progress in `[0, 1]`.
        progress: f32,
        /// Displayed positions at the moment the transition started,
        /// indexed by node index.
        from_positions: Vec<Vec2>,
    },
}

/// Per-instance animator state. Each cartogram view owns exactly one.
#[derive(Debug, Clone)]
pub struct Transition {
    duration_secs: f32,
    state: TransitionState,
}

impl Transition {
    /// A machine resting at `initial` with the default duration.
    pub fn new(initial: EraId) -> Self {
        Self::with_duration(initial, DEFAULT_TRANSITION_SECS)
    }

    pub fn with_duration(initial: EraId, duration_secs: f32) -> Self {
        Self {
            duration_secs,
            state: TransitionState::Idle { era: initial },
        }
    }

    pub fn state(&self) -> &TransitionState {
        &self.state
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.state, TransitionState::Transitioning { .. })
    }

    /// The era the machine is at or headed toward.
    pub fn target_era(&self) -> EraId {
        match self.state {
            TransitionState::Idle { era } => era,
            TransitionState::Transitioning { to_era, .. } => to_era,
        }
    }

    /// The era edge styling is taken from right now.
    ///
    /// Position is continuous but era identity is discrete: styling snaps
    /// from the origin era to the destination era once eased progress
    /// crosses [`HIGHLIGHT_SWITCH_PROGRESS`].
    pub fn highlight_era(&self) -> EraId {
        match self.state {
            TransitionState::Idle { era } => era,
            TransitionState::Transitioning {
                from_era,
                to_era,
                progress,
                ..
            } => {
                if ease_out_cubic(progress) < HIGHLIGHT_SWITCH_PROGRESS {
                    from_era
                } else {
                    to_era
                }
            }
        }
    }

    /// Begin (or restart) a transition toward `target`.
    ///
    /// A no-op when already resting at or headed toward `target`. When
    /// called mid-flight the in-flight transition is cancelled and the new
    /// one starts from the current interpolated positions, so the displayed
    /// frame is continuous across the restart.
    pub fn select_era(&mut self, cartogram: &Cartogram, target: EraId) {
        if self.target_era() == target {
            return;
        }
        let from_positions = self.positions(cartogram);
        let from_era = self.highlight_era();
        self.state = TransitionState::Transitioning {
            from_era,
            to_era: target,
            progress: 0.0,
            from_positions,
        };
    }

    /// Advance the transition by `dt` seconds of the host's frame clock.
    /// Settles into `Idle(to_era)` when progress reaches 1.
    pub fn tick(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        let step = if self.duration_secs > 0.0 {
            dt / self.duration_secs
        } else {
            1.0
        };
        let finished = match &mut self.state {
            TransitionState::Idle { .. } => None,
            TransitionState::Transitioning {
                to_era, progress, ..
            } => {
                *progress = (*progress + step).min(1.0);
                (*progress >= 1.0).then_some(*to_era)
            }
        };
        if let Some(era) = finished {
            self.state = TransitionState::Idle { era };
        }
    }

    /// Current displayed position of a node (by index).
    pub fn position(&self, cartogram: &Cartogram, node: usize) -> Vec2 {
        match &self.state {
            TransitionState::Idle { era } => cartogram.perceived_position_at(node, *era),
            TransitionState::Transitioning {
                to_era,
                progress,
                from_positions,
                ..
            } => {
                let target = cartogram.perceived_position_at(node, *to_era);
                from_positions[node].lerp(target, ease_out_cubic(*progress))
            }
        }
    }

    /// Current displayed positions of every node, indexed by node index.
    pub fn positions(&self, cartogram: &Cartogram) -> Vec<Vec2> {
        (0..cartogram.node_count())
            .map(|i| self.position(cartogram, i))
            .collect()
    }
}
