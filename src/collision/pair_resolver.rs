use log::{debug, trace};

use crate::bodies::{Body, BodyIndex};
use crate::collision::CollisionPair;
use crate::core::BodyStore;
use crate::math::{approx_zero, Rect, Vector2};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// How velocities are exchanged when two bodies collide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum VelocityExchange {
    /// Swap the full velocity vectors, ignoring the contact direction
    Swap,

    /// Swap only the components along the collision normal, keeping each
    /// body's tangential component (equal-mass elastic collision)
    #[default]
    NormalResolved,
}

/// Result of resolving one overlapping pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// The two bodies involved
    pub pair: CollisionPair,

    /// Unit vector from A's center towards B's center, or the push axis for
    /// coincident centers
    pub normal: Vector2,

    /// Overlap depth before correction
    pub penetration: f32,

    /// The centers coincided and the fallback push was used
    pub degenerate: bool,
}

/// Detects and resolves an overlap between bodies `a` and `b` of the store.
///
/// On overlap, both bodies are pushed apart by half the penetration each so
/// they end up exactly touching, then their velocities are exchanged
/// according to `mode`. If the centers coincide there is no collision normal,
/// so `a` alone is pushed by the sum of the radii along the x axis, or the
/// y axis when neither x side of `viewport` has room, and velocities are
/// left untouched.
///
/// Returns `None` when the bodies do not overlap, when `a == b`, or when an
/// index is out of range.
pub fn resolve_pair(
    bodies: &mut BodyStore,
    a: BodyIndex,
    b: BodyIndex,
    mode: VelocityExchange,
    viewport: &Rect,
) -> Option<Contact> {
    let (body_a, body_b) = bodies.pair_mut(a, b)?;

    let diff = body_b.get_center() - body_a.get_center();
    let dist = diff.length();
    let reach = body_a.get_radius() + body_b.get_radius();

    if dist >= reach {
        return None;
    }

    let pair = CollisionPair::new(a, b);

    if approx_zero(dist) {
        let axis = push_direction(body_a, reach, viewport);
        body_a.translate(axis * reach);
        debug!("bodies {} and {} share a center; pushed {} by {}", a, b, a, axis * reach);
        return Some(Contact {
            pair,
            normal: axis,
            penetration: reach,
            degenerate: true,
        });
    }

    let normal = diff / dist;
    let penetration = reach - dist;
    let correction = normal * (penetration * 0.5);
    body_b.translate(correction);
    body_a.translate(-correction);

    exchange_velocities(body_a, body_b, normal, mode);

    trace!("resolved pair ({}, {}): normal {} depth {}", a, b, normal, penetration);

    Some(Contact {
        pair,
        normal,
        penetration,
        degenerate: false,
    })
}

/// Picks the push axis for coincident centers.
///
/// Tries +x, then -x, then +y, then -y, taking the first side of `viewport`
/// with room for the full `distance`. When no side has that much room the
/// side with the most room wins, so the wall clamp still leaves a gap.
fn push_direction(body: &Body, distance: f32, viewport: &Rect) -> Vector2 {
    let bounds = body.get_bounds();
    let sides = [
        (viewport.right() - bounds.right(), Vector2::unit_x()),
        (bounds.x - viewport.x, -Vector2::unit_x()),
        (viewport.bottom() - bounds.bottom(), Vector2::unit_y()),
        (bounds.y - viewport.y, -Vector2::unit_y()),
    ];

    if let Some(&(_, axis)) = sides.iter().find(|(room, _)| *room >= distance) {
        return axis;
    }

    sides
        .iter()
        .fold(sides[0], |best, &side| if side.0 > best.0 { side } else { best })
        .1
}

/// Exchanges velocities between two touching bodies
pub fn exchange_velocities(a: &mut Body, b: &mut Body, normal: Vector2, mode: VelocityExchange) {
    match mode {
        VelocityExchange::Swap => {
            let va = a.get_velocity();
            a.set_velocity(b.get_velocity());
            b.set_velocity(va);
        }
        VelocityExchange::NormalResolved => {
            let angle = normal_angle(normal);

            // Rotate into the frame where the normal lies on +x
            let mut va = a.get_velocity().rotate(-angle);
            let mut vb = b.get_velocity().rotate(-angle);
            std::mem::swap(&mut va.x, &mut vb.x);

            a.set_velocity(va.rotate(angle));
            b.set_velocity(vb.rotate(angle));
        }
    }
}

/// Angle of a unit normal from the +x axis, in `[-PI, PI]`
fn normal_angle(normal: Vector2) -> f32 {
    let angle = normal.x.clamp(-1.0, 1.0).acos();
    if normal.y < 0.0 {
        -angle
    } else {
        angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 1000.0, 1000.0)
    }

    #[test]
    fn normal_angle_matches_atan2() {
        for &(x, y) in &[(1.0f32, 0.0f32), (0.0, 1.0), (-1.0, 0.0), (0.6, -0.8), (-0.6, -0.8)] {
            let n = Vector2::new(x, y);
            assert_relative_eq!(normal_angle(n), n.angle(), epsilon = 1e-5);
        }
    }

    #[test]
    fn tangential_components_survive_normal_exchange() {
        let mut a = Body::new(Vector2::new(0.0, 0.0), 1.0, Vector2::new(2.0, 3.0)).unwrap();
        let mut b = Body::new(Vector2::new(0.0, 2.0), 1.0, Vector2::new(-1.0, -4.0)).unwrap();

        // Normal along +y: the y components swap, x components stay
        exchange_velocities(&mut a, &mut b, Vector2::unit_y(), VelocityExchange::NormalResolved);

        assert_relative_eq!(a.get_velocity().x, 2.0, epsilon = 1e-5);
        assert_relative_eq!(a.get_velocity().y, -4.0, epsilon = 1e-5);
        assert_relative_eq!(b.get_velocity().x, -1.0, epsilon = 1e-5);
        assert_relative_eq!(b.get_velocity().y, 3.0, epsilon = 1e-5);
    }

    #[test]
    fn same_index_is_ignored() {
        let mut store: BodyStore = vec![Body::at_rest(Vector2::new(50.0, 50.0), 10.0).unwrap()]
            .into_iter()
            .collect();
        assert!(resolve_pair(&mut store, 0, 0, VelocityExchange::Swap, &viewport()).is_none());
    }

    #[test]
    fn degenerate_push_turns_back_at_right_wall() {
        let center = Vector2::new(980.0, 500.0);
        let mut store: BodyStore = vec![
            Body::at_rest(center, 10.0).unwrap(),
            Body::at_rest(center, 10.0).unwrap(),
        ]
        .into_iter()
        .collect();

        let contact = resolve_pair(&mut store, 0, 1, VelocityExchange::NormalResolved, &viewport()).unwrap();
        assert!(contact.degenerate);
        assert_eq!(contact.normal, -Vector2::unit_x());
        assert_relative_eq!(store.get(0).unwrap().get_center().x, 960.0);
    }

    #[test]
    fn degenerate_push_uses_y_axis_when_x_is_cramped() {
        let narrow = Rect::new(0.0, 0.0, 150.0, 720.0);
        let center = Vector2::new(50.0, 300.0);
        let mut store: BodyStore = vec![
            Body::at_rest(center, 50.0).unwrap(),
            Body::at_rest(center, 50.0).unwrap(),
        ]
        .into_iter()
        .collect();

        let contact = resolve_pair(&mut store, 0, 1, VelocityExchange::NormalResolved, &narrow).unwrap();
        assert_eq!(contact.normal, Vector2::unit_y());
        assert_eq!(store.get(0).unwrap().get_center(), Vector2::new(50.0, 400.0));
    }

    #[test]
    fn degenerate_push_takes_roomiest_side_when_none_fit() {
        let tight = Rect::new(0.0, 0.0, 130.0, 120.0);
        let center = Vector2::new(50.0, 60.0);
        let mut store: BodyStore = vec![
            Body::at_rest(center, 50.0).unwrap(),
            Body::at_rest(center, 50.0).unwrap(),
        ]
        .into_iter()
        .collect();

        // Room: right 30, left 0, below 10, above 10
        let contact = resolve_pair(&mut store, 0, 1, VelocityExchange::Swap, &tight).unwrap();
        assert_eq!(contact.normal, Vector2::unit_x());
    }
}
