//! Headless demo driver
//!
//! Runs a journey world for ten simulated seconds in drift mode, logging
//! lifecycle events as they drain and printing the final snapshot as JSON.
//! Handy for eyeballing tuning changes without booting the app:
//!
//! ```text
//! RUST_LOG=info journey-sim [seed]
//! ```

use glam::Vec2;

use journey_sim::{Milestone, MilestoneStatus, SimSettings, TickInput, World, tick};

/// iPhone-ish portrait viewport, the app's usual canvas
const VIEWPORT: Vec2 = Vec2::new(390.0, 844.0);
const TICKS: u32 = 600;
const DT: f32 = 1.0 / 60.0;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(7);

    let milestones = sample_milestones();
    let mut world = World::new(&milestones, "Run a marathon", VIEWPORT, seed);

    let input = TickInput {
        gravity: Vec2::ZERO,
        settings: SimSettings {
            drift_mode: true,
            ..Default::default()
        },
    };

    for _ in 0..TICKS {
        tick(&mut world, &input, DT);
        for event in world.drain_events() {
            log::debug!("event: {event:?}");
        }
    }

    log::info!(
        "{} ticks done, {} bodies still active, player mood {:?}",
        world.tick_count(),
        world.bodies().iter().filter(|b| b.active).count(),
        world.player_mood()
    );

    match serde_json::to_string_pretty(&world.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("snapshot serialization failed: {e}"),
    }
}

fn sample_milestones() -> Vec<Milestone> {
    let titles = [
        ("Sign up for a race", MilestoneStatus::Completed),
        ("Run 10k without stopping", MilestoneStatus::Active),
        ("Half-marathon weekend", MilestoneStatus::Pending),
        ("Taper and rest", MilestoneStatus::Pending),
    ];
    titles
        .iter()
        .enumerate()
        .map(|(i, (title, status))| Milestone {
            id: i as u32 + 1,
            title: (*title).to_string(),
            status: *status,
            impact: 5,
            description: String::new(),
            deadline: None,
            order: i as u32,
        })
        .collect()
}
