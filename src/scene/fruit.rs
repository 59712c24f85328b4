//! Layered fruit placement inside a spherical canopy
//!
//! Fruit is spread over horizontal bands of the canopy. Each band is turned
//! by the golden angle relative to the one below so fruit does not line up
//! vertically; within a band the angles are evenly spaced with a little
//! jitter and the distance from the trunk axis is randomized. Anything that
//! lands outside the bounding radius is dropped.

use std::f32::consts::{PI, TAU};
use rand::Rng;
use serde::Deserialize;

use crate::math::Vec3;

/// Band heights span this fraction of the canopy radius above and below center
const BAND_SPAN: f32 = 0.6;

/// Upper limit on `layers * per_layer`
pub const MAX_FRUIT: usize = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct FruitLayout {
    pub layers: usize,
    pub per_layer: usize,
    /// Culling radius as a fraction of the canopy radius
    pub bound: f32,
}

impl Default for FruitLayout {
    fn default() -> Self {
        Self {
            layers: 5,
            per_layer: 20,
            bound: 0.95,
        }
    }
}

impl FruitLayout {
    /// Number of fruit sampled before culling, `None` on overflow
    pub fn sample_count(&self) -> Option<usize> {
        self.layers.checked_mul(self.per_layer)
    }

    /// Buffer size to reserve; never more than `MAX_FRUIT`
    fn capacity(&self) -> usize {
        self.sample_count().map_or(MAX_FRUIT, |n| n.min(MAX_FRUIT))
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.bound.is_nan() || self.bound <= 0.0 {
            return Err(format!("tree fruit.bound must be positive, got {}", self.bound));
        }
        if self.layers == 0 || self.per_layer == 0 {
            return Err("tree fruit layout needs at least one layer and one fruit per layer".to_string());
        }
        match self.sample_count() {
            Some(n) if n <= MAX_FRUIT => Ok(()),
            _ => Err(format!(
                "tree fruit layout of {} x {} exceeds {} fruit",
                self.layers, self.per_layer, MAX_FRUIT
            )),
        }
    }
}

fn golden_angle() -> f32 {
    PI * (3.0 - 5f32.sqrt())
}

/// Fruit centers relative to the canopy center
pub fn sample_fruit_positions<R: Rng + ?Sized>(
    canopy_radius: f32,
    layout: &FruitLayout,
    rng: &mut R,
) -> Vec<Vec3> {
    if canopy_radius <= 0.0 || layout.layers == 0 || layout.per_layer == 0 {
        return Vec::new();
    }

    let limit = canopy_radius * layout.bound;
    let slot = TAU / layout.per_layer as f32;
    let mut positions = Vec::with_capacity(layout.capacity());

    for layer in 0..layout.layers {
        let band = if layout.layers == 1 {
            0.0
        } else {
            -BAND_SPAN + 2.0 * BAND_SPAN * layer as f32 / (layout.layers - 1) as f32
        };
        let band_radius = canopy_radius * (1.0 - band * band).sqrt();
        let offset = layer as f32 * golden_angle();

        for i in 0..layout.per_layer {
            let theta = offset + i as f32 * slot + rng.random_range(-0.25f32..0.25) * slot;
            let radius = band_radius * rng.random_range(0.6f32..1.05);
            let y = (band + rng.random_range(-0.05f32..0.05)) * canopy_radius;

            let position = Vec3::new(radius * theta.cos(), y, radius * theta.sin());
            if position.length() <= limit {
                positions.push(position);
            }
        }
    }

    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_positions_stay_inside_bound() {
        let layout = FruitLayout::default();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let positions = sample_fruit_positions(1.6, &layout, &mut rng);
            for p in &positions {
                assert!(p.length() <= 1.6 * layout.bound + 1e-5, "seed {} escaped: {:?}", seed, p);
            }
        }
    }

    #[test]
    fn test_culling_keeps_most_fruit() {
        let mut rng = StdRng::seed_from_u64(3);
        let positions = sample_fruit_positions(1.0, &FruitLayout::default(), &mut rng);
        assert!(positions.len() <= 100);
        assert!(positions.len() >= 50, "only {} fruit survived", positions.len());
    }

    #[test]
    fn test_bands_cover_canopy_height() {
        let mut rng = StdRng::seed_from_u64(11);
        let positions = sample_fruit_positions(1.0, &FruitLayout::default(), &mut rng);
        let lowest = positions.iter().map(|p| p.y).fold(f32::MAX, f32::min);
        let highest = positions.iter().map(|p| p.y).fold(f32::MIN, f32::max);
        assert!(lowest < -0.4);
        assert!(highest > 0.4);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let layout = FruitLayout::default();
        let a = sample_fruit_positions(1.2, &layout, &mut StdRng::seed_from_u64(5));
        let b = sample_fruit_positions(1.2, &layout, &mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_degenerate_inputs() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(sample_fruit_positions(0.0, &FruitLayout::default(), &mut rng).is_empty());
        let empty = FruitLayout { layers: 0, ..Default::default() };
        assert!(sample_fruit_positions(1.0, &empty, &mut rng).is_empty());
    }

    #[test]
    fn test_layout_validation() {
        assert!(FruitLayout::default().validate().is_ok());
        assert!(FruitLayout { layers: 40, per_layer: 50, bound: 0.9 }.validate().is_ok());
        assert!(FruitLayout { layers: 41, per_layer: 50, bound: 0.9 }.validate().is_err());
        assert!(FruitLayout { per_layer: 0, ..Default::default() }.validate().is_err());
        assert!(FruitLayout { bound: f32::NAN, ..Default::default() }.validate().is_err());

        let huge = FruitLayout { layers: usize::MAX, per_layer: 2, bound: 0.95 };
        assert_eq!(huge.sample_count(), None);
        let err = huge.validate().unwrap_err();
        assert!(err.contains("exceeds"), "{}", err);
    }

    #[test]
    fn test_capacity_is_capped() {
        assert_eq!(FruitLayout::default().capacity(), 100);
        let wide = FruitLayout { layers: 1, per_layer: usize::MAX, bound: 0.95 };
        assert_eq!(wide.capacity(), MAX_FRUIT);
        let overflow = FruitLayout { layers: 2, per_layer: usize::MAX / 2 + 1, bound: 0.95 };
        assert_eq!(overflow.sample_count(), None);
        assert_eq!(overflow.capacity(), MAX_FRUIT);
    }

    #[test]
    fn test_single_band_sits_at_center_height() {
        let layout = FruitLayout { layers: 1, per_layer: 12, bound: 2.0 };
        let mut rng = StdRng::seed_from_u64(9);
        let positions = sample_fruit_positions(1.0, &layout, &mut rng);
        assert_eq!(positions.len(), 12);
        assert!(positions.iter().all(|p| p.y.abs() <= 0.05 + 1e-5));
    }
}
