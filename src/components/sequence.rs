//! Scripted animation sequences.
//!
//! An [`ActiveSequence`] is an ordered list of [`Step`]s executed to
//! completion by [`crate::systems::sequence::advance_sequences`]. A step
//! holds one or more [`StepAction`]s that run concurrently; the step
//! completes when its longest timed action completes, and only then does
//! the next step begin. `Remove` and `Signal` actions are instantaneous
//! and fire exactly once, when their step completes.
//!
//! At most one sequence runs per entity: inserting a new `ActiveSequence`
//! replaces the old component, which discards the previous sequence's
//! remaining steps. State changes already applied by completed steps are
//! not rolled back.
//!
//! The canned constructors build the four gameplay sequences (star pickup,
//! vortex swallow, goal pickup, teleport) out of the shared step duration.

use bevy_ecs::prelude::Component;
use glam::Vec2;
use smallvec::{SmallVec, smallvec};

/// Duration of every gameplay animation step, in seconds.
pub const STEP_DURATION: f32 = 0.25;

/// Scale factor used when an entity is sucked down to nothing.
pub const SCALE_VANISH: f32 = 0.001;

/// Signal fired when the vortex swallow sequence finishes.
pub const SIGNAL_RESPAWN_PLAYER: &str = "respawn_player";
/// Signal fired when the goal pickup sequence finishes.
pub const SIGNAL_FINISH_LEVEL: &str = "finish_level";
/// Signal fired when the teleport sequence finishes.
pub const SIGNAL_TELEPORT_DONE: &str = "teleport_done";

/// One atomic action within a step.
#[derive(Clone, Debug, PartialEq)]
pub enum StepAction {
    /// Interpolate `MapPosition` to `to` over `duration` seconds.
    MoveTo { to: Vec2, duration: f32 },
    /// Interpolate `Scale` to `to` over `duration` seconds.
    ScaleTo { to: f32, duration: f32 },
    /// Interpolate `Opacity` to `alpha` over `duration` seconds.
    FadeTo { alpha: f32, duration: f32 },
    /// Despawn the entity when the step completes.
    Remove,
    /// Emit a [`SequenceSignalEvent`](crate::events::sequence::SequenceSignalEvent)
    /// when the step completes.
    Signal(String),
}

impl StepAction {
    /// Timed length of this action; instantaneous actions are zero.
    pub fn duration(&self) -> f32 {
        match self {
            StepAction::MoveTo { duration, .. }
            | StepAction::ScaleTo { duration, .. }
            | StepAction::FadeTo { duration, .. } => *duration,
            StepAction::Remove | StepAction::Signal(_) => 0.0,
        }
    }
}

/// A group of actions that run concurrently.
#[derive(Clone, Debug)]
pub struct Step {
    pub actions: SmallVec<[StepAction; 2]>,
}

impl Step {
    pub fn single(action: StepAction) -> Self {
        Self {
            actions: smallvec![action],
        }
    }

    pub fn group(actions: impl IntoIterator<Item = StepAction>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
        }
    }

    /// The step completes when all members complete, so its duration is the
    /// longest member duration.
    pub fn duration(&self) -> f32 {
        self.actions.iter().map(|a| a.duration()).fold(0.0, f32::max)
    }
}

/// Values captured when a step begins, used as interpolation origins.
#[derive(Clone, Copy, Debug)]
pub struct StepStart {
    pub pos: Vec2,
    pub scale: f32,
    pub alpha: f32,
}

/// The one in-flight sequence of an entity.
#[derive(Component, Clone, Debug)]
pub struct ActiveSequence {
    pub steps: Vec<Step>,
    pub current: usize,
    pub elapsed: f32,
    pub start: Option<StepStart>,
}

impl ActiveSequence {
    pub fn from_steps(steps: Vec<Step>) -> Self {
        Self {
            steps,
            current: 0,
            elapsed: 0.0,
            start: None,
        }
    }

    /// Star pickup: grow and fade concurrently, then remove.
    pub fn pickup() -> Self {
        Self::from_steps(vec![
            Step::group([
                StepAction::ScaleTo {
                    to: 1.5,
                    duration: STEP_DURATION,
                },
                StepAction::FadeTo {
                    alpha: 0.0,
                    duration: STEP_DURATION,
                },
            ]),
            Step::single(StepAction::Remove),
        ])
    }

    /// Goal pickup: the star effect, then hand control back to the state
    /// machine to end the level.
    pub fn goal_pickup() -> Self {
        Self::from_steps(vec![
            Step::group([
                StepAction::ScaleTo {
                    to: 1.5,
                    duration: STEP_DURATION,
                },
                StepAction::FadeTo {
                    alpha: 0.0,
                    duration: STEP_DURATION,
                },
            ]),
            Step::single(StepAction::Remove),
            Step::single(StepAction::Signal(SIGNAL_FINISH_LEVEL.to_string())),
        ])
    }

    /// Vortex swallow, run on the player: drag to the vortex center, shrink
    /// to nothing, remove, then ask for a respawn.
    pub fn vortex_swallow(at: Vec2) -> Self {
        Self::from_steps(vec![
            Step::single(StepAction::MoveTo {
                to: at,
                duration: STEP_DURATION,
            }),
            Step::single(StepAction::ScaleTo {
                to: SCALE_VANISH,
                duration: STEP_DURATION,
            }),
            Step::single(StepAction::Remove),
            Step::single(StepAction::Signal(SIGNAL_RESPAWN_PLAYER.to_string())),
        ])
    }

    /// Teleport, run on the player: suck in at the entry node, suck out at
    /// the paired exit node, then release control.
    pub fn teleport(entry: Vec2, exit: Vec2) -> Self {
        Self::from_steps(vec![
            Step::single(StepAction::MoveTo {
                to: entry,
                duration: STEP_DURATION,
            }),
            Step::single(StepAction::ScaleTo {
                to: SCALE_VANISH,
                duration: STEP_DURATION,
            }),
            Step::single(StepAction::MoveTo {
                to: exit,
                duration: STEP_DURATION,
            }),
            Step::single(StepAction::ScaleTo {
                to: 1.0,
                duration: STEP_DURATION,
            }),
            Step::single(StepAction::Signal(SIGNAL_TELEPORT_DONE.to_string())),
        ])
    }

    /// Total timed length of the remaining steps.
    pub fn remaining(&self) -> f32 {
        self.steps[self.current.min(self.steps.len())..]
            .iter()
            .map(Step::duration)
            .sum::<f32>()
            - self.elapsed
    }
}
