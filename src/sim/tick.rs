//! Per-frame simulation step
//!
//! The host calls [`tick`] once per display frame with the elapsed wall-clock
//! time and the current sensor/settings sample. Order within a tick: forces,
//! player mood, doom countdown, integration, wall collisions, pairwise
//! collisions. Lifecycle events and side-effect requests queue on the world
//! and are drained by the host afterwards.

use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

use super::body::{BodyKind, Mood};
use super::collision::{circle_contact, closing_velocity, collide_walls, impulse_response, separation_offsets};
use super::events::{Haptic, SimEvent};
use super::world::World;
use crate::consts::*;
use crate::settings::SimSettings;

/// Per-tick input sampled by the host
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Device gravity vector from the orientation sensor; ignored in drift
    /// mode. Read by value, the sim never subscribes to the sensor.
    pub gravity: Vec2,
    /// Current settings snapshot
    pub settings: SimSettings,
}

/// Advance the world by one frame.
///
/// Best-effort real-time loop: an inactive world or a missing/garbage
/// elapsed time skips the frame entirely, nothing is reported.
pub fn tick(world: &mut World, input: &TickInput, dt: f32) {
    if !world.active || !dt.is_finite() || dt <= 0.0 {
        return;
    }
    // Clamp frame hitches so a long pause can't tunnel bodies through walls
    let dt = dt.min(MAX_TICK_DT);
    let settings = input.settings.clamped();

    world.tick_count += 1;
    world.drift_time += dt;

    // --- FORCES ---
    if settings.drift_mode {
        let t = world.drift_time;
        let wind = (t * DRIFT_WIND_FREQ).sin() * DRIFT_WIND_ACCEL;
        for (i, body) in world.bodies.iter_mut().enumerate() {
            if !body.active {
                continue;
            }
            // Pseudo-Brownian wander, decorrelated per body by phase + index
            let n = i as f32;
            let wander = Vec2::new(
                (t * 1.3 + body.drift_phase.x + n).sin(),
                (t * 1.7 + body.drift_phase.y + n * 2.0).cos(),
            ) * DRIFT_NOISE_ACCEL;
            let centering = (world.viewport.x / 2.0 - body.pos.x) * DRIFT_CENTERING;
            let accel = Vec2::new(
                wander.x + centering,
                wander.y + DRIFT_DOWN_BIAS + wind,
            );
            body.vel += accel * dt;
            // Fixed per-tick damping, not time-normalized; the shipped feel
            // is tuned around it
            body.vel *= DRIFT_DAMPING;
        }
    } else {
        for body in world.bodies.iter_mut() {
            if !body.active {
                continue;
            }
            body.vel += input.gravity * GRAVITY_SENSITIVITY * dt;
            // Per-tick friction, same caveat as the drift damping
            body.vel *= FRICTION;
        }
    }

    // --- PLAYER MOOD ---
    // Decay first so a mood set later this tick survives untouched
    for body in world.bodies.iter_mut() {
        if body.kind != BodyKind::Player || !body.active {
            continue;
        }
        body.decay_mood(dt);
        if body.speed() > SCARED_SPEED {
            body.set_mood(Mood::Scared, SCARED_DURATION);
        }
    }

    // --- DOOM COUNTDOWN ---
    let mut absorbed = 0usize;
    for i in 0..world.bodies.len() {
        if !world.bodies[i].active || !world.bodies[i].doomed {
            continue;
        }
        let angle = world.rng.random_range(0.0..TAU);
        let body = &mut world.bodies[i];
        // Struggle jitter while the countdown runs
        body.vel += Vec2::from_angle(angle) * DOOM_JITTER;
        body.doom_timer += dt;
        if body.doom_timer >= DOOM_DURATION {
            body.active = false;
            log::info!("milestone {} absorbed", body.id);
            absorbed += 1;
        }
    }
    if absorbed > 0 {
        let pop_radius = world.viewport.x * GOAL_POP_FRACTION;
        if let Some(goal) = world.bodies.iter_mut().find(|b| b.kind == BodyKind::Goal) {
            for _ in 0..absorbed {
                world.events.push(SimEvent::Absorption);
                goal.radius += GOAL_GROWTH_STEP;
                world.events.push(SimEvent::AnimateRadius {
                    id: goal.id,
                    target: goal.radius,
                    stiffness: settings.stiffness,
                });
                if goal.radius > pop_radius {
                    log::info!("goal popped at radius {:.0}", goal.radius);
                    goal.radius = GOAL_BASE_RADIUS;
                    world.events.push(SimEvent::GoalPop);
                    push_haptic(&mut world.events, &settings, Haptic::Heavy);
                    world.events.push(SimEvent::ScheduleGoalReset {
                        delay: GOAL_RESET_DELAY,
                        target: GOAL_BASE_RADIUS,
                    });
                }
            }
        }
    }

    // --- INTEGRATION ---
    for body in world.bodies.iter_mut() {
        if body.active {
            body.pos += body.vel * dt;
        }
    }

    // --- WALL COLLISIONS ---
    for body in world.bodies.iter_mut() {
        if !body.active {
            continue;
        }
        let hits = collide_walls(
            &mut body.pos,
            &mut body.vel,
            body.radius,
            world.viewport,
            settings.damping,
        );
        if let Some(speed) = hits.x {
            if speed > WALL_HAPTIC_SPEED {
                push_haptic(&mut world.events, &settings, Haptic::Light);
            }
        }
    }

    // --- PAIRWISE COLLISIONS ---
    let n = world.bodies.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let (left, right) = world.bodies.split_at_mut(j);
            let a = &mut left[i];
            let b = &mut right[0];
            if !a.active || !b.active {
                continue;
            }
            let Some(contact) = circle_contact(a.pos, a.radius, b.pos, b.radius) else {
                continue;
            };

            // Capture: a completed milestone pinned between the goal and at
            // least two walls starts its countdown. Incidental goal contact
            // out in the open never dooms anything.
            let ms = match (a.kind, b.kind) {
                (BodyKind::Goal, BodyKind::Milestone) => Some(&mut *b),
                (BodyKind::Milestone, BodyKind::Goal) => Some(&mut *a),
                _ => None,
            };
            if let Some(ms) = ms {
                if ms.capture_eligible()
                    && ms.walls_touched(world.viewport, WALL_TOUCH_TOLERANCE) >= 2
                {
                    ms.doomed = true;
                    ms.doom_timer = 0.0;
                    log::info!("milestone {} pinned, countdown started", ms.id);
                    push_haptic(&mut world.events, &settings, Haptic::Warning);
                }
            }

            // Closing speed before the bounce; impacts only count while the
            // pair is approaching
            let vn = closing_velocity(&contact, a.vel, b.vel);
            let impact = (-vn).max(0.0);

            // Push the pair apart (big body moves less), then bounce
            let (off_a, off_b) = separation_offsets(&contact, a.radius, b.radius);
            a.pos += off_a;
            b.pos += off_b;
            if let Some((dv_a, dv_b)) =
                impulse_response(&contact, a.vel, b.vel, a.radius, b.radius, RESTITUTION)
            {
                a.vel += dv_a;
                b.vel += dv_b;
            }

            // Player face reactions
            if impact > HAPPY_IMPACT
                && (a.kind == BodyKind::Player || b.kind == BodyKind::Player)
            {
                let (other_kind, other_completed) = if a.kind == BodyKind::Player {
                    (b.kind, b.completed)
                } else {
                    (a.kind, a.completed)
                };
                let player = if a.kind == BodyKind::Player { &mut *a } else { &mut *b };
                if impact > DIZZY_IMPACT {
                    player.set_mood(Mood::Dizzy, DIZZY_DURATION);
                } else if other_kind == BodyKind::Goal
                    || (other_kind == BodyKind::Milestone && other_completed)
                {
                    player.set_mood(Mood::Happy, HAPPY_DURATION);
                }
            }

            // Goal bumps fatten completed milestones that still have room
            let ms = match (a.kind, b.kind) {
                (BodyKind::Goal, BodyKind::Milestone) => Some(&mut *b),
                (BodyKind::Milestone, BodyKind::Goal) => Some(&mut *a),
                _ => None,
            };
            if let Some(ms) = ms {
                if ms.completed
                    && ms.radius < MILESTONE_MAX_RADIUS
                    && impact > MILESTONE_GROWTH_MIN_IMPACT
                {
                    ms.radius = (ms.radius + MILESTONE_GROWTH_STEP).min(MILESTONE_MAX_RADIUS);
                    world.events.push(SimEvent::AnimateRadius {
                        id: ms.id,
                        target: ms.radius,
                        stiffness: settings.stiffness,
                    });
                    push_haptic(&mut world.events, &settings, Haptic::Medium);
                    push_sound(&mut world.events, &settings);
                }
            }

            // Hard contact cue, independent of the special cases above
            if impact > IMPACT_CUE_SPEED {
                push_haptic(&mut world.events, &settings, Haptic::Light);
                push_sound(&mut world.events, &settings);
            }
        }
    }
}

fn push_haptic(events: &mut Vec<SimEvent>, settings: &SimSettings, tier: Haptic) {
    if settings.haptics_enabled {
        events.push(SimEvent::Haptic(tier));
    }
}

fn push_sound(events: &mut Vec<SimEvent>, settings: &SimSettings) {
    if settings.sound_enabled {
        events.push(SimEvent::Sound);
    }
}
