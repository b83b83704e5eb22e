//! World construction and published state
//!
//! The world owns every body and all simulation randomness. The host builds
//! one world per journey-screen session from the current milestone list,
//! ticks it every display frame, and throws the whole thing away on unmount.
//! Rendering reads go through [`World::snapshot`]; live body state is never
//! shared outside the crate.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::{Body, BodyKind, Mood};
use super::events::SimEvent;
use crate::consts::*;
use crate::milestone::Milestone;

/// Reserved id for the goal body (milestone ids come from the app and stay
/// well below this)
pub const GOAL_BODY_ID: u32 = u32::MAX;
/// Reserved id for the player body
pub const PLAYER_BODY_ID: u32 = u32::MAX - 1;

/// Read-only per-frame view of a body, published for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodySnapshot {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub scale: f32,
    pub kind: BodyKind,
}

/// The simulation world for one journey-screen session
pub struct World {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Viewport extents in screen points
    pub viewport: Vec2,
    /// Label of the long-term goal, for host overlays and logs
    pub goal_title: String,
    pub(crate) bodies: Vec<Body>,
    pub(crate) rng: Pcg32,
    pub(crate) events: Vec<SimEvent>,
    /// Accumulated drift-noise clock (seconds)
    pub(crate) drift_time: f32,
    pub(crate) active: bool,
    pub(crate) tick_count: u64,
}

impl World {
    /// Build a world from the current milestone list.
    ///
    /// The goal body takes its canonical slot near the top center; the
    /// player and milestone bodies scatter uniformly inside the viewport.
    /// Initial overlaps are allowed, the first collision pass separates
    /// them. Milestone bodies keep their milestone's id.
    pub fn new(
        milestones: &[Milestone],
        goal_title: impl Into<String>,
        viewport: Vec2,
        seed: u64,
    ) -> Self {
        let goal_title = goal_title.into();
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut bodies = Vec::with_capacity(milestones.len() + 2);

        let goal_pos = Vec2::new(viewport.x / 2.0, viewport.y * 0.18);
        let mut goal = Body::new(GOAL_BODY_ID, BodyKind::Goal, goal_pos, GOAL_BASE_RADIUS);
        goal.drift_phase = random_phase(&mut rng);
        bodies.push(goal);

        let player_pos = random_pos(&mut rng, viewport, PLAYER_RADIUS);
        let mut player = Body::new(PLAYER_BODY_ID, BodyKind::Player, player_pos, PLAYER_RADIUS);
        player.drift_phase = random_phase(&mut rng);
        bodies.push(player);

        let mut completed = 0;
        for milestone in milestones {
            let pos = random_pos(&mut rng, viewport, MILESTONE_BASE_RADIUS);
            let mut body = Body::new(milestone.id, BodyKind::Milestone, pos, MILESTONE_BASE_RADIUS);
            body.completed = milestone.is_completed();
            body.drift_phase = random_phase(&mut rng);
            completed += body.completed as usize;
            bodies.push(body);
        }

        log::info!(
            "journey world \"{}\": {} milestones ({} completed), viewport {:.0}x{:.0}, seed {}",
            goal_title,
            milestones.len(),
            completed,
            viewport.x,
            viewport.y,
            seed
        );

        Self {
            seed,
            viewport,
            goal_title,
            bodies,
            rng,
            events: Vec::new(),
            drift_time: 0.0,
            active: true,
            tick_count: 0,
        }
    }

    /// All bodies, including absorbed ones, in stable construction order
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn goal(&self) -> Option<&Body> {
        self.bodies.iter().find(|b| b.kind == BodyKind::Goal)
    }

    pub fn player(&self) -> Option<&Body> {
        self.bodies.iter().find(|b| b.kind == BodyKind::Player)
    }

    /// Current player face, for the host's mood renderer
    pub fn player_mood(&self) -> Mood {
        self.player().map(|b| b.mood).unwrap_or_default()
    }

    /// Publish the renderable state of every active body. A fresh snapshot
    /// per frame keeps the renderer off the live body array.
    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        self.bodies
            .iter()
            .filter(|b| b.active)
            .map(|b| BodySnapshot {
                id: b.id,
                x: b.pos.x,
                y: b.pos.y,
                radius: b.radius,
                scale: b.scale,
                kind: b.kind,
            })
            .collect()
    }

    /// Take everything queued since the last drain. Each occurrence appears
    /// exactly once; the host performs them in order.
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    /// Pause/resume the whole world; ticks are no-ops while inactive
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Ticks advanced since construction
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

fn random_pos(rng: &mut Pcg32, viewport: Vec2, radius: f32) -> Vec2 {
    Vec2::new(
        rng.random_range(radius..viewport.x - radius),
        rng.random_range(radius..viewport.y - radius),
    )
}

fn random_phase(rng: &mut Pcg32) -> Vec2 {
    use std::f32::consts::TAU;
    Vec2::new(rng.random_range(0.0..TAU), rng.random_range(0.0..TAU))
}
