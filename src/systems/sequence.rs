//! Animation sequencer.
//!
//! Advances every entity's [`ActiveSequence`] by the tick delta. Timed
//! actions interpolate linearly from the values captured when their step
//! began; a step completes when its longest action completes, and only
//! then does the next step start. Instantaneous actions fire exactly once
//! at step completion: `Signal` triggers a
//! [`SequenceSignalEvent`](crate::events::sequence::SequenceSignalEvent),
//! `Remove` despawns the entity at the end of the pass.
//!
//! Zero-duration steps that follow a completed step run in the same tick,
//! so a terminal `Remove` step can still be followed by its completion
//! signal. A *timed* step after `Remove` can never run and is rejected as
//! a programming error.
//!
//! Sequencing is cooperative and single-threaded: nothing here blocks, and
//! a sequence either runs to completion or is cancelled by a replacement
//! inserted over it.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::opacity::Opacity;
use crate::components::scale::Scale;
use crate::components::sequence::{ActiveSequence, StepAction, StepStart};
use crate::events::sequence::SequenceSignalEvent;
use crate::resources::worldtime::WorldTime;

/// Linearly interpolate between two floats.
pub(crate) fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Advance all in-flight sequences by one tick.
pub fn advance_sequences(
    mut commands: Commands,
    time: Res<WorldTime>,
    mut query: Query<(
        Entity,
        &mut ActiveSequence,
        &mut MapPosition,
        &mut Scale,
        &mut Opacity,
    )>,
) {
    let dt = time.delta.max(0.0);
    for (entity, mut seq, mut position, mut scale, mut opacity) in query.iter_mut() {
        let mut budget = dt;
        let mut removed = false;
        loop {
            if seq.current >= seq.steps.len() {
                commands.entity(entity).remove::<ActiveSequence>();
                break;
            }
            if seq.start.is_none() {
                seq.start = Some(StepStart {
                    pos: position.pos,
                    scale: scale.factor,
                    alpha: opacity.alpha,
                });
            }
            let start = seq.start.expect("step start captured above");
            let duration = seq.steps[seq.current].duration();
            if removed && duration > 0.0 {
                panic!("timed step after RemoveFromWorld in sequence on {entity:?}");
            }

            seq.elapsed += budget;
            budget = 0.0;

            // each timed action progresses against its own duration; the
            // step as a whole completes at the longest one
            let elapsed = seq.elapsed;
            let progress = |action_duration: f32| {
                if action_duration > 0.0 {
                    (elapsed / action_duration).clamp(0.0, 1.0)
                } else {
                    1.0
                }
            };
            for action in seq.steps[seq.current].actions.iter() {
                match action {
                    StepAction::MoveTo { to, duration } => {
                        position.pos = start.pos.lerp(*to, progress(*duration))
                    }
                    StepAction::ScaleTo { to, duration } => {
                        scale.factor = lerp_f32(start.scale, *to, progress(*duration))
                    }
                    StepAction::FadeTo { alpha, duration } => {
                        opacity.alpha = lerp_f32(start.alpha, *alpha, progress(*duration))
                    }
                    StepAction::Remove | StepAction::Signal(_) => {}
                }
            }

            if seq.elapsed < duration {
                break;
            }

            // step complete: instantaneous actions fire once
            for action in seq.steps[seq.current].actions.iter() {
                match action {
                    StepAction::Signal(signal) => commands.trigger(SequenceSignalEvent {
                        entity,
                        signal: signal.clone(),
                    }),
                    StepAction::Remove => removed = true,
                    _ => {}
                }
            }

            seq.current += 1;
            seq.elapsed = 0.0;
            seq.start = None;

            // zero-duration follow-ups (completion signals) run this tick;
            // the next timed step waits for the next one
            if !removed
                && seq.current < seq.steps.len()
                && seq.steps[seq.current].duration() > 0.0
            {
                break;
            }
        }
        if removed {
            commands.entity(entity).despawn();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_lerp_f32_basic() {
        assert!(approx_eq(lerp_f32(0.0, 10.0, 0.0), 0.0));
        assert!(approx_eq(lerp_f32(0.0, 10.0, 0.5), 5.0));
        assert!(approx_eq(lerp_f32(0.0, 10.0, 1.0), 10.0));
    }

    #[test]
    fn test_lerp_f32_negative_range() {
        assert!(approx_eq(lerp_f32(1.0, -1.0, 0.5), 0.0));
        assert!(approx_eq(lerp_f32(1.0, -1.0, 0.75), -0.5));
    }
}
