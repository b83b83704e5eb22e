//! Circle collision detection and response
//!
//! Pure geometry: circle/circle contacts with inverse-mass separation and a
//! restitution impulse, plus axis-aligned wall collisions. The tick decides
//! what a contact *means* (capture, moods, growth); this module only moves
//! circles apart correctly.

use glam::Vec2;

/// Contact between two overlapping circles
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    /// Unit normal pointing from the first body toward the second
    pub normal: Vec2,
    /// Overlap depth along the normal
    pub overlap: f32,
}

/// Check two circles for overlap.
///
/// Coincident centers would make the normal undefined, so that case is
/// treated as a unit offset along +x and the pair still gets pushed apart.
pub fn circle_contact(pos_a: Vec2, r_a: f32, pos_b: Vec2, r_b: f32) -> Option<Contact> {
    let delta = pos_b - pos_a;
    let dist = delta.length();
    let (dist, normal) = if dist == 0.0 {
        (1.0, Vec2::X)
    } else {
        (dist, delta / dist)
    };

    if dist < r_a + r_b {
        Some(Contact {
            normal,
            overlap: r_a + r_b - dist,
        })
    } else {
        None
    }
}

/// Position corrections that remove the overlap, split by inverse mass with
/// mass = radius: the larger body moves less. Returns (offset_a, offset_b).
pub fn separation_offsets(contact: &Contact, r_a: f32, r_b: f32) -> (Vec2, Vec2) {
    let total = r_a + r_b;
    let push = contact.normal * contact.overlap;
    (-push * (r_b / total), push * (r_a / total))
}

/// Relative velocity along the contact normal. Negative means the pair is
/// approaching.
pub fn closing_velocity(contact: &Contact, vel_a: Vec2, vel_b: Vec2) -> f32 {
    (vel_b - vel_a).dot(contact.normal)
}

/// Restitution impulse for an approaching pair, split by inverse mass.
/// Returns the velocity deltas (delta_a, delta_b), or `None` when the pair
/// is already separating.
pub fn impulse_response(
    contact: &Contact,
    vel_a: Vec2,
    vel_b: Vec2,
    mass_a: f32,
    mass_b: f32,
    restitution: f32,
) -> Option<(Vec2, Vec2)> {
    let vn = closing_velocity(contact, vel_a, vel_b);
    if vn >= 0.0 {
        return None;
    }

    let j = -(1.0 + restitution) * vn / (1.0 / mass_a + 1.0 / mass_b);
    Some((
        -contact.normal * (j / mass_a),
        contact.normal * (j / mass_b),
    ))
}

/// Pre-reflection speeds for the axes that hit a wall this tick
#[derive(Debug, Clone, Copy, Default)]
pub struct WallHits {
    /// |vx| at the moment a left/right wall was hit
    pub x: Option<f32>,
    /// |vy| at the moment a top/bottom wall was hit
    pub y: Option<f32>,
}

/// Keep a body inside `[radius, extent - radius]` on both axes, reflecting
/// the offending velocity component scaled by `-damping`.
pub fn collide_walls(
    pos: &mut Vec2,
    vel: &mut Vec2,
    radius: f32,
    viewport: Vec2,
    damping: f32,
) -> WallHits {
    let mut hits = WallHits::default();

    if pos.x - radius < 0.0 {
        pos.x = radius;
        hits.x = Some(vel.x.abs());
        vel.x = -vel.x * damping;
    } else if pos.x + radius > viewport.x {
        pos.x = viewport.x - radius;
        hits.x = Some(vel.x.abs());
        vel.x = -vel.x * damping;
    }

    if pos.y - radius < 0.0 {
        pos.y = radius;
        hits.y = Some(vel.y.abs());
        vel.y = -vel.y * damping;
    } else if pos.y + radius > viewport.y {
        pos.y = viewport.y - radius;
        hits.y = Some(vel.y.abs());
        vel.y = -vel.y * damping;
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_contact_hit_and_miss() {
        // Overlapping by 5
        let c = circle_contact(Vec2::new(0.0, 0.0), 10.0, Vec2::new(15.0, 0.0), 10.0).unwrap();
        assert!((c.overlap - 5.0).abs() < 1e-5);
        assert!((c.normal - Vec2::X).length() < 1e-5);

        // Exactly touching counts as no contact
        assert!(circle_contact(Vec2::new(0.0, 0.0), 10.0, Vec2::new(20.0, 0.0), 10.0).is_none());

        // Clear miss
        assert!(circle_contact(Vec2::new(0.0, 0.0), 10.0, Vec2::new(50.0, 0.0), 10.0).is_none());
    }

    #[test]
    fn test_coincident_centers_use_x_axis() {
        let c = circle_contact(Vec2::new(7.0, 7.0), 10.0, Vec2::new(7.0, 7.0), 12.0).unwrap();
        assert_eq!(c.normal, Vec2::X);
        assert!((c.overlap - 21.0).abs() < 1e-5);
    }

    #[test]
    fn test_separation_bigger_body_moves_less() {
        let c = circle_contact(Vec2::new(0.0, 0.0), 30.0, Vec2::new(20.0, 0.0), 10.0).unwrap();
        let (off_a, off_b) = separation_offsets(&c, 30.0, 10.0);
        // 30-radius body takes 1/4 of the push, 10-radius body takes 3/4
        assert!(off_a.length() < off_b.length());
        assert!((off_a.length() + off_b.length() - c.overlap).abs() < 1e-4);
    }

    #[test]
    fn test_impulse_only_when_approaching() {
        let c = circle_contact(Vec2::new(0.0, 0.0), 10.0, Vec2::new(15.0, 0.0), 10.0).unwrap();

        // Approaching head-on
        let result = impulse_response(&c, Vec2::new(50.0, 0.0), Vec2::new(-50.0, 0.0), 10.0, 10.0, 0.5);
        assert!(result.is_some());

        // Already separating
        let result = impulse_response(&c, Vec2::new(-50.0, 0.0), Vec2::new(50.0, 0.0), 10.0, 10.0, 0.5);
        assert!(result.is_none());
    }

    #[test]
    fn test_wall_reflection_scaled_by_damping() {
        let viewport = Vec2::new(400.0, 800.0);
        let mut pos = Vec2::new(-3.0, 400.0);
        let mut vel = Vec2::new(-100.0, 0.0);

        let hits = collide_walls(&mut pos, &mut vel, 10.0, viewport, 0.8);
        assert_eq!(pos.x, 10.0);
        assert!((vel.x - 80.0).abs() < 1e-4);
        assert_eq!(hits.x, Some(100.0));
        assert!(hits.y.is_none());
    }

    proptest! {
        /// After separation offsets are applied, centers end up at least
        /// sum-of-radii apart (within float tolerance).
        #[test]
        fn prop_separation_removes_overlap(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            ra in 5.0f32..80.0, rb in 5.0f32..80.0,
        ) {
            let (pa, pb) = (Vec2::new(ax, ay), Vec2::new(bx, by));
            if let Some(c) = circle_contact(pa, ra, pb, rb) {
                let (off_a, off_b) = separation_offsets(&c, ra, rb);
                let dist = ((pb + off_b) - (pa + off_a)).length();
                prop_assert!(dist >= ra + rb - 1e-2);
            }
        }

        /// The restitution impulse never leaves a pair still approaching.
        #[test]
        fn prop_impulse_separates(
            vax in -600.0f32..600.0, vay in -600.0f32..600.0,
            vbx in -600.0f32..600.0, vby in -600.0f32..600.0,
            ra in 5.0f32..80.0, rb in 5.0f32..80.0,
        ) {
            let (pa, pb) = (Vec2::new(0.0, 0.0), Vec2::new(ra + rb - 1.0, 0.0));
            let c = circle_contact(pa, ra, pb, rb).unwrap();
            let (va, vb) = (Vec2::new(vax, vay), Vec2::new(vbx, vby));
            if let Some((da, db)) = impulse_response(&c, va, vb, ra, rb, 0.5) {
                let after = closing_velocity(&c, va + da, vb + db);
                prop_assert!(after >= -1e-2);
            }
        }

        /// Wall resolution always lands the body inside the viewport.
        #[test]
        fn prop_walls_keep_body_in_bounds(
            px in -1000.0f32..1000.0, py in -1000.0f32..1000.0,
            vx in -800.0f32..800.0, vy in -800.0f32..800.0,
            r in 5.0f32..50.0,
            damping in 0.0f32..1.0,
        ) {
            let viewport = Vec2::new(400.0, 800.0);
            let mut pos = Vec2::new(px, py);
            let mut vel = Vec2::new(vx, vy);
            collide_walls(&mut pos, &mut vel, r, viewport, damping);
            prop_assert!(pos.x >= r - 1e-3 && pos.x <= viewport.x - r + 1e-3);
            prop_assert!(pos.y >= r - 1e-3 && pos.y <= viewport.y - r + 1e-3);
        }
    }
}
