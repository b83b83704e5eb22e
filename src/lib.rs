//! Journey simulation - the bouncing-body scene behind the LOCKIN journey screen
//!
//! One goal body, one player body, and one body per milestone drift and
//! collide inside the viewport. Completed milestones that get pinned between
//! the goal and the walls are "doomed" and eventually absorbed, growing the
//! goal until it pops.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (forces, collisions, doom/absorption)
//! - `milestone`: Read-only milestone contract supplied by the host app
//! - `settings`: Host-adjustable simulation settings, read by value each tick
//!
//! The host drives the loop: it calls [`sim::tick`] once per display frame,
//! reads positions through [`sim::World::snapshot`], and drains
//! [`sim::SimEvent`]s to perform haptics, sounds, and radius animations on
//! its side.

pub mod milestone;
pub mod settings;
pub mod sim;

pub use milestone::{Milestone, MilestoneStatus};
pub use settings::SimSettings;
pub use sim::{Body, BodyKind, BodySnapshot, Haptic, Mood, SimEvent, TickInput, World, tick};

/// Simulation tuning constants
pub mod consts {
    /// Maximum elapsed time consumed by one tick (seconds). Frame hitches
    /// beyond this are clamped to keep bodies from tunneling through walls.
    pub const MAX_TICK_DT: f32 = 0.05;

    /// Goal body base radius
    pub const GOAL_BASE_RADIUS: f32 = 42.0;
    /// Player body radius
    pub const PLAYER_RADIUS: f32 = 26.0;
    /// Milestone body starting radius
    pub const MILESTONE_BASE_RADIUS: f32 = 30.0;
    /// Milestone bodies never grow past this
    pub const MILESTONE_MAX_RADIUS: f32 = 90.0;

    /// Radius added to a completed milestone when the goal bumps it hard
    pub const MILESTONE_GROWTH_STEP: f32 = 15.0;
    /// Minimum impact speed for a goal bump to grow a milestone
    pub const MILESTONE_GROWTH_MIN_IMPACT: f32 = 30.0;
    /// Radius added to the goal per absorbed milestone
    pub const GOAL_GROWTH_STEP: f32 = 5.0;
    /// Goal pops once its radius exceeds this fraction of viewport width
    pub const GOAL_POP_FRACTION: f32 = 0.7;
    /// Delay before the host animates the popped goal back to base (seconds)
    pub const GOAL_RESET_DELAY: f32 = 0.6;

    /// Acceleration per unit of sensor gravity (points/s² per g-component)
    pub const GRAVITY_SENSITIVITY: f32 = 600.0;
    /// Per-tick velocity friction in sensor-gravity mode (not time-normalized)
    pub const FRICTION: f32 = 0.98;
    /// Per-tick velocity damping in drift mode (not time-normalized)
    pub const DRIFT_DAMPING: f32 = 0.95;
    /// Amplitude of the sinusoidal wander acceleration in drift mode
    pub const DRIFT_NOISE_ACCEL: f32 = 55.0;
    /// Horizontal pull toward mid-viewport per point of offset, drift mode
    pub const DRIFT_CENTERING: f32 = 0.4;
    /// Constant downward acceleration bias in drift mode
    pub const DRIFT_DOWN_BIAS: f32 = 18.0;
    /// Amplitude of the slow vertical wind term in drift mode
    pub const DRIFT_WIND_ACCEL: f32 = 25.0;
    /// Frequency of the vertical wind term (rad/s)
    pub const DRIFT_WIND_FREQ: f32 = 0.5;

    /// Restitution for body/body impulses
    pub const RESTITUTION: f32 = 0.5;
    /// Horizontal wall hits above this speed request a light haptic
    pub const WALL_HAPTIC_SPEED: f32 = 50.0;
    /// Body/body impacts above this closing speed request haptic + sound
    pub const IMPACT_CUE_SPEED: f32 = 100.0;
    /// A body counts as touching a wall within this distance (points)
    pub const WALL_TOUCH_TOLERANCE: f32 = 5.0;

    /// Cumulative doomed time before a milestone is absorbed (seconds)
    pub const DOOM_DURATION: f32 = 5.0;
    /// Struggle impulse applied to doomed bodies each tick
    pub const DOOM_JITTER: f32 = 30.0;

    /// Player speed that triggers the scared face
    pub const SCARED_SPEED: f32 = 500.0;
    /// Scared mood duration (seconds)
    pub const SCARED_DURATION: f32 = 0.5;
    /// Minimum impact for a mood reaction
    pub const HAPPY_IMPACT: f32 = 80.0;
    /// Happy mood duration (seconds)
    pub const HAPPY_DURATION: f32 = 1.5;
    /// Impact above which the player goes dizzy instead of happy
    pub const DIZZY_IMPACT: f32 = 300.0;
    /// Dizzy mood duration (seconds)
    pub const DIZZY_DURATION: f32 = 2.0;
}
