//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Seeded RNG only (placement, drift phases, doom jitter)
//! - Host-supplied elapsed time only, clamped per tick
//! - Stable body order (construction order, never re-sorted)
//! - No rendering or platform dependencies; side effects leave as events

pub mod body;
pub mod collision;
pub mod events;
pub mod tick;
pub mod world;

pub use body::{Body, BodyKind, Mood};
pub use collision::{Contact, WallHits, circle_contact, closing_velocity, collide_walls, impulse_response, separation_offsets};
pub use events::{Haptic, SimEvent};
pub use tick::{TickInput, tick};
pub use world::{BodySnapshot, GOAL_BODY_ID, PLAYER_BODY_ID, World};
