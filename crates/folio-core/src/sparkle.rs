//! Particle bursts on hover and click.
//!
//! Each particle is a short-lived element positioned at the trigger's center
//! with `--dx`/`--dy` custom properties; the stylesheet animates it outward and
//! the element removes itself when that animation ends.

use crate::config::{PageConfig, Selectors};
use crate::constants::{BURST_DISTANCE_MIN, BURST_DISTANCE_SPAN, BURST_UPWARD_BIAS};
use crate::error::AttachError;
use crate::surface::{Rect, ScrollMetrics, Surface};
use glam::DVec2;
use rand::Rng;
use std::f64::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SparkleKind {
    Heart,
    Star,
    Dot,
}

impl SparkleKind {
    /// Cycles heart, star, dot by spawn index.
    #[inline]
    pub fn for_index(index: usize) -> Self {
        match index % 3 {
            0 => Self::Heart,
            1 => Self::Star,
            _ => Self::Dot,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Heart => "heart",
            Self::Star => "star",
            Self::Dot => "dot",
        }
    }
}

/// Radial spread of a burst.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BurstShape {
    pub distance_min: f64,
    pub distance_span: f64,
    pub upward_bias: f64,
}

impl Default for BurstShape {
    fn default() -> Self {
        Self {
            distance_min: BURST_DISTANCE_MIN,
            distance_span: BURST_DISTANCE_SPAN,
            upward_bias: BURST_UPWARD_BIAS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub kind: SparkleKind,
    pub origin: DVec2,
    /// Travel from the origin; negative `y` is up.
    pub offset: DVec2,
}

impl Particle {
    pub fn spawn<R: Rng + ?Sized>(
        index: usize,
        origin: DVec2,
        shape: &BurstShape,
        rng: &mut R,
    ) -> Self {
        let angle = rng.gen::<f64>() * TAU;
        let distance = shape.distance_min + rng.gen::<f64>() * shape.distance_span;
        let offset = DVec2::new(
            angle.cos() * distance,
            angle.sin() * distance - shape.upward_bias,
        );
        Self {
            kind: SparkleKind::for_index(index),
            origin,
            offset,
        }
    }
}

/// Center of a viewport box in page coordinates.
#[inline]
pub fn burst_origin(rect: Rect, metrics: &ScrollMetrics) -> DVec2 {
    rect.center() + DVec2::new(metrics.scroll_x, metrics.scroll_y)
}

pub struct SparkleEmitter<N, R> {
    hover_targets: Vec<N>,
    click_targets: Vec<N>,
    particle_class: &'static str,
    shape: BurstShape,
    hover_count: usize,
    click_count: usize,
    rng: R,
}

impl<N: Clone + PartialEq + 'static, R: Rng> SparkleEmitter<N, R> {
    pub fn attach<S: Surface<Node = N>>(
        surface: &S,
        selectors: &Selectors,
        config: &PageConfig,
        rng: R,
    ) -> Result<Self, AttachError> {
        let hover_targets = surface.query_all(None, selectors.sparkle_hover);
        let click_targets = surface.query_all(None, selectors.sparkle_click);
        if hover_targets.is_empty() && click_targets.is_empty() {
            return Err(AttachError::NoTargets(selectors.sparkle_hover));
        }
        log::debug!(
            "[sparkle] {} hover targets, {} click targets",
            hover_targets.len(),
            click_targets.len()
        );
        Ok(Self {
            hover_targets,
            click_targets,
            particle_class: selectors.particle_class,
            shape: config.burst,
            hover_count: config.hover_burst,
            click_count: config.click_burst,
            rng,
        })
    }

    pub fn hover_targets(&self) -> &[N] {
        &self.hover_targets
    }

    pub fn click_targets(&self) -> &[N] {
        &self.click_targets
    }

    pub fn on_hover<S: Surface<Node = N>>(&mut self, surface: &S, trigger: &N) -> Vec<N> {
        self.burst(surface, trigger, self.hover_count)
    }

    pub fn on_click<S: Surface<Node = N>>(&mut self, surface: &S, trigger: &N) -> Vec<N> {
        self.burst(surface, trigger, self.click_count)
    }

    /// Spawns `count` particles around `trigger`. Returns the new nodes.
    pub fn burst<S: Surface<Node = N>>(
        &mut self,
        surface: &S,
        trigger: &N,
        count: usize,
    ) -> Vec<N> {
        let origin = burst_origin(surface.rect(trigger), &surface.metrics());
        let mut spawned = Vec::with_capacity(count);
        for i in 0..count {
            let p = Particle::spawn(i, origin, &self.shape, &mut self.rng);
            let class_name = format!("{} {}", self.particle_class, p.kind.as_str());
            let Some(node) = surface.spawn_particle(&class_name) else {
                continue;
            };
            surface.set_style(&node, "--dx", &format!("{}px", p.offset.x));
            surface.set_style(&node, "--dy", &format!("{}px", p.offset.y));
            surface.set_style(&node, "left", &format!("{}px", p.origin.x));
            surface.set_style(&node, "top", &format!("{}px", p.origin.y));

            let owner = surface.clone();
            let done = node.clone();
            let remove_when_done = Box::new(move || owner.remove(&done));
            surface.on_animation_end(&node, remove_when_done);
            spawned.push(node);
        }
        log::trace!(
            "[sparkle] burst of {} at ({:.1},{:.1})",
            spawned.len(),
            origin.x,
            origin.y
        );
        spawned
    }
}
