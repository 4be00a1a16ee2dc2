use bitflags::bitflags;

use crate::bodies::Body;
use crate::math::{Rect, Vector2};

bitflags! {
    /// Viewport walls a body was clamped against during a tick
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct WallContact: u8 {
        const LEFT = 0x01;
        const RIGHT = 0x02;
        const TOP = 0x04;
        const BOTTOM = 0x08;
    }
}

/// Clamps a body into the viewport, reflecting velocity on each axis that hit
/// a wall.
///
/// Axes are handled independently, so a corner hit reports two sides.
pub fn resolve_walls(body: &mut Body, viewport: &Rect) -> WallContact {
    let mut contact = WallContact::empty();
    let bounds = body.get_bounds();
    let mut position = bounds.origin();
    let mut velocity = body.get_velocity();

    if bounds.x < viewport.x {
        position.x = viewport.x;
        velocity.x = -velocity.x;
        contact |= WallContact::LEFT;
    } else if bounds.right() > viewport.right() {
        position.x = viewport.right() - bounds.w;
        velocity.x = -velocity.x;
        contact |= WallContact::RIGHT;
    }

    if bounds.y < viewport.y {
        position.y = viewport.y;
        velocity.y = -velocity.y;
        contact |= WallContact::TOP;
    } else if bounds.bottom() > viewport.bottom() {
        position.y = viewport.bottom() - bounds.h;
        velocity.y = -velocity.y;
        contact |= WallContact::BOTTOM;
    }

    if !contact.is_empty() {
        body.set_position(Vector2::new(position.x, position.y));
        body.set_velocity(velocity);
    }

    contact
}
