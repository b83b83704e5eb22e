//! Simulated bodies
//!
//! Every entity in the journey scene is a circle: the goal, the player
//! sprite, and one body per milestone. Bodies are created once at world
//! construction and never removed; absorption flips `active` off.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// What a body represents in the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyKind {
    Goal,
    Player,
    Milestone,
}

/// Player face state, decayed back to idle over time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    #[default]
    Idle,
    Happy,
    Scared,
    Dizzy,
}

/// A simulated circular body
#[derive(Debug, Clone)]
pub struct Body {
    /// Milestone bodies reuse their milestone id; the goal and player use
    /// reserved ids from `world`
    pub id: u32,
    pub kind: BodyKind,
    /// Center position in screen points, y down
    pub pos: Vec2,
    /// Velocity in points/second
    pub vel: Vec2,
    /// Physics radius. Grows for the goal (absorption) and for completed
    /// milestones (goal bumps), never above the milestone cap.
    pub radius: f32,
    /// Visual-only multiplier; the host animates it, the sim just publishes it
    pub scale: f32,
    /// Removed-from-simulation marker
    pub active: bool,
    /// Milestone bodies: backing milestone reached COMPLETED
    pub completed: bool,
    /// Counting down to absorption (milestone bodies only)
    pub doomed: bool,
    /// Cumulative seconds spent doomed
    pub doom_timer: f32,
    /// Player body only
    pub mood: Mood,
    /// Seconds until the mood decays back to idle
    pub mood_timer: f32,
    /// Per-body drift-noise phase offsets, fixed at construction
    pub drift_phase: Vec2,
}

impl Body {
    pub fn new(id: u32, kind: BodyKind, pos: Vec2, radius: f32) -> Self {
        Self {
            id,
            kind,
            pos,
            vel: Vec2::ZERO,
            radius,
            scale: 1.0,
            active: true,
            completed: false,
            doomed: false,
            doom_timer: 0.0,
            mood: Mood::Idle,
            mood_timer: 0.0,
            drift_phase: Vec2::ZERO,
        }
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Set a mood with its decay duration. Overwrites whatever was showing.
    pub fn set_mood(&mut self, mood: Mood, secs: f32) {
        self.mood = mood;
        self.mood_timer = secs;
    }

    /// Advance the mood timer; falls back to idle once it runs out. Call
    /// before any mood sets in the same tick so a fresh mood survives.
    pub fn decay_mood(&mut self, dt: f32) {
        if self.mood == Mood::Idle {
            return;
        }
        self.mood_timer -= dt;
        if self.mood_timer <= 0.0 {
            self.mood = Mood::Idle;
            self.mood_timer = 0.0;
        }
    }

    /// Eligible for capture by the goal (completed, not already counting down)
    pub fn capture_eligible(&self) -> bool {
        self.kind == BodyKind::Milestone && self.completed && !self.doomed
    }

    /// How many of the four viewport walls this body touches, within `tol`
    /// points of surface contact
    pub fn walls_touched(&self, viewport: Vec2, tol: f32) -> u32 {
        let mut count = 0;
        if self.pos.x - self.radius <= tol {
            count += 1;
        }
        if viewport.x - (self.pos.x + self.radius) <= tol {
            count += 1;
        }
        if self.pos.y - self.radius <= tol {
            count += 1;
        }
        if viewport.y - (self.pos.y + self.radius) <= tol {
            count += 1;
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walls_touched_counts() {
        let viewport = Vec2::new(400.0, 800.0);
        let r = 20.0;

        // Center of the viewport: free floating
        let body = Body::new(1, BodyKind::Milestone, Vec2::new(200.0, 400.0), r);
        assert_eq!(body.walls_touched(viewport, 5.0), 0);

        // Resting on the left wall only
        let body = Body::new(1, BodyKind::Milestone, Vec2::new(r + 2.0, 400.0), r);
        assert_eq!(body.walls_touched(viewport, 5.0), 1);

        // Pinned in the bottom-left corner
        let body = Body::new(1, BodyKind::Milestone, Vec2::new(r, 800.0 - r), r);
        assert_eq!(body.walls_touched(viewport, 5.0), 2);

        // Just outside tolerance
        let body = Body::new(1, BodyKind::Milestone, Vec2::new(r + 6.0, 400.0), r);
        assert_eq!(body.walls_touched(viewport, 5.0), 0);
    }

    #[test]
    fn test_mood_decay() {
        let mut body = Body::new(1, BodyKind::Player, Vec2::ZERO, 26.0);
        body.set_mood(Mood::Happy, 0.1);

        body.decay_mood(0.05);
        assert_eq!(body.mood, Mood::Happy);

        body.decay_mood(0.06);
        assert_eq!(body.mood, Mood::Idle);
        assert_eq!(body.mood_timer, 0.0);

        // A mood set after decay sticks for its full duration
        body.set_mood(Mood::Scared, 0.5);
        body.decay_mood(0.4);
        assert_eq!(body.mood, Mood::Scared);
    }
}
