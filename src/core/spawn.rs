//! Initial population of the body store.
//!
//! Bodies are laid out once at startup and never added or removed afterwards.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::bodies::Body;
use crate::core::{BodyStore, SimulationConfig};
use crate::error::SimulationError;
use crate::math::{clamp, Vector2};
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Rule used to place the initial bodies
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Placement {
    /// `body_count` bodies spread evenly across the viewport width, each
    /// dropped at `margin` plus a random vertical offset in `[0, max_jitter)`
    EvenRow {
        margin: f32,
        max_jitter: f32,
    },

    /// One body per listed center
    Explicit(Vec<Vector2>),
}

impl Default for Placement {
    fn default() -> Self {
        Self::EvenRow {
            margin: 10.0,
            max_jitter: 200.0,
        }
    }
}

impl Placement {
    /// Checks the rule's own parameters
    pub fn validate(&self) -> Result<()> {
        match self {
            Placement::EvenRow { margin, max_jitter } => {
                if !margin.is_finite() || !max_jitter.is_finite() || *max_jitter < 0.0 {
                    return Err(SimulationError::InvalidParameter(format!(
                        "row placement needs a finite margin and non-negative jitter, got margin {} jitter {}",
                        margin, max_jitter
                    )));
                }
            }
            Placement::Explicit(centers) => {
                if let Some(bad) = centers.iter().find(|c| !c.is_finite()) {
                    return Err(SimulationError::InvalidParameter(format!(
                        "explicit placement contains a non-finite center {}",
                        bad
                    )));
                }
            }
        }
        Ok(())
    }

    /// Computes the initial centers, before they are clamped into the viewport
    fn centers(&self, config: &SimulationConfig, rng: &mut ChaCha8Rng) -> Vec<Vector2> {
        match self {
            Placement::EvenRow { margin, max_jitter } => {
                let n = config.body_count;
                let spacing = (config.viewport_width - 2.0 * margin) / n.max(1) as f32;
                (0..n)
                    .map(|i| {
                        let jitter = if *max_jitter > 0.0 {
                            rng.gen_range(0.0..*max_jitter)
                        } else {
                            0.0
                        };
                        Vector2::new(margin + i as f32 * spacing, margin + jitter)
                    })
                    .collect()
            }
            Placement::Explicit(centers) => centers.clone(),
        }
    }
}

/// Draws one velocity component from the configured range
fn velocity_component(range: (f32, f32), rng: &mut ChaCha8Rng) -> f32 {
    let (min, max) = range;
    if min < max {
        rng.gen_range(min..max)
    } else {
        min
    }
}

/// Builds the initial body store described by `config`.
///
/// Centers that would put a body partly outside the viewport are pulled back
/// inside so the containment invariant holds from the first frame.
pub fn spawn_bodies(config: &SimulationConfig, rng: &mut ChaCha8Rng) -> Result<BodyStore> {
    let r = config.radius;
    let centers = config.placement.centers(config, rng);
    let mut store = BodyStore::with_capacity(centers.len());

    for center in centers {
        let center = Vector2::new(
            clamp(center.x, r, config.viewport_width - r),
            clamp(center.y, r, config.viewport_height - r),
        );
        let velocity = Vector2::new(
            velocity_component(config.velocity_range, rng),
            velocity_component(config.velocity_range, rng),
        );
        store.add(Body::new(center, r, velocity)?);
    }

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn row_layout_spreads_bodies_left_to_right() {
        let config = SimulationConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let store = spawn_bodies(&config, &mut rng).unwrap();

        assert_eq!(store.len(), config.body_count);
        let xs: Vec<f32> = store.iter().map(|(_, b)| b.get_center().x).collect();
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn spawned_bodies_start_inside_viewport() {
        let config = SimulationConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let store = spawn_bodies(&config, &mut rng).unwrap();
        let viewport = config.viewport();

        for (_, body) in store.iter() {
            assert!(viewport.contains_rect(&body.get_bounds()));
        }
    }

    #[test]
    fn velocities_stay_in_range() {
        let config = SimulationConfig::default().with_body_count(50);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let store = spawn_bodies(&config, &mut rng).unwrap();

        for (_, body) in store.iter() {
            let v = body.get_velocity();
            assert!((-5.0..5.0).contains(&v.x));
            assert!((-5.0..5.0).contains(&v.y));
        }
    }
}
