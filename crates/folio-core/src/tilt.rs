//! 3D tilt of the avatar toward the pointer.

use crate::config::{PageConfig, Selectors};
use crate::error::AttachError;
use crate::surface::{Rect, Surface};
use glam::DVec2;

/// Rotation in degrees (`x` about the horizontal axis, `y` about the
/// vertical one), or `None` for a box with no area.
pub fn tilt_angles(pointer: DVec2, rect: Rect, strength_deg: f64) -> Option<DVec2> {
    let half = DVec2::new(rect.width / 2.0, rect.height / 2.0);
    if half.x <= 0.0 || half.y <= 0.0 {
        return None;
    }
    let offset = (pointer - rect.center()) / half;
    Some(DVec2::new(-offset.y, offset.x) * strength_deg)
}

#[inline]
pub fn tilt_transform(angles: DVec2) -> String {
    // adding 0.0 turns -0 into 0
    let (x, y) = (angles.x + 0.0, angles.y + 0.0);
    format!("rotateX({x}deg) rotateY({y}deg)")
}

pub struct AvatarTilt<N> {
    node: N,
    strength_deg: f64,
}

impl<N: Clone + PartialEq> AvatarTilt<N> {
    pub fn attach<S: Surface<Node = N>>(
        surface: &S,
        selectors: &Selectors,
        config: &PageConfig,
    ) -> Result<Self, AttachError> {
        let node = surface
            .by_id(selectors.avatar_id)
            .ok_or(AttachError::MissingElement(selectors.avatar_id))?;
        Ok(Self {
            node,
            strength_deg: config.tilt_strength_deg,
        })
    }

    pub fn node(&self) -> &N {
        &self.node
    }

    /// Pointer position in viewport coordinates.
    pub fn on_move<S: Surface<Node = N>>(&self, surface: &S, client_x: f64, client_y: f64) {
        let pointer = DVec2::new(client_x, client_y);
        match tilt_angles(pointer, surface.rect(&self.node), self.strength_deg) {
            Some(angles) => surface.set_style(&self.node, "transform", &tilt_transform(angles)),
            None => surface.clear_style(&self.node, "transform"),
        }
    }

    pub fn on_leave<S: Surface<Node = N>>(&self, surface: &S) {
        surface.clear_style(&self.node, "transform");
    }

    pub fn detach<S: Surface<Node = N>>(self, surface: &S) {
        self.on_leave(surface);
    }
}
