//! Falling-snow geometry for the decorative backdrop.
//!
//! Stateless: flake positions are a pure function of the config, the canvas
//! size and elapsed time, so the renderer keeps nothing between frames and can
//! be dropped without touching the detection workflow.

use crate::config::BackdropConfig;

/// Upper bound on flakes per frame, whatever the density and canvas size.
pub const MAX_FLAKES: usize = 800;

/// Canvas area (square points) that `BackdropConfig::density` is relative to.
const DENSITY_AREA: f32 = 10_000.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Flake {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    /// Opacity in [0, 1].
    pub alpha: f32,
}

pub fn flake_count(config: &BackdropConfig, width: f32, height: f32) -> usize {
    if !config.enabled || width <= 0.0 || height <= 0.0 {
        return 0;
    }
    let count = (width * height / DENSITY_AREA * config.density).round();
    (count.max(0.0) as usize).min(MAX_FLAKES)
}

/// Flake positions at `time_secs` inside a `width` x `height` canvas.
pub fn snowfall(config: &BackdropConfig, width: f32, height: f32, time_secs: f64) -> Vec<Flake> {
    let count = flake_count(config, width, height);
    let angle = (config.direction_deg as f64).to_radians();
    let (dx, dy) = (angle.cos(), angle.sin());
    let (w, h) = (width as f64, height as f64);

    (0..count)
        .map(|i| {
            let mut seed = i as u64;
            let u_x = unit(&mut seed);
            let u_y = unit(&mut seed);
            let u_size = unit(&mut seed);
            let u_speed = unit(&mut seed);

            // Smaller flakes read as farther away: slower and dimmer.
            let depth = config.min_flake_scale as f64
                + (1.0 - config.min_flake_scale as f64) * u_size;
            let travel = config.speed as f64 * depth * (0.75 + 0.5 * u_speed) * time_secs;

            Flake {
                x: (u_x * w + dx * travel).rem_euclid(w) as f32,
                y: (u_y * h + dy * travel).rem_euclid(h) as f32,
                size: (config.flake_size as f64 * depth) as f32,
                alpha: (config.brightness as f64 * (0.4 + 0.6 * depth)) as f32,
            }
        })
        .collect()
}

/// SplitMix64 step mapped to [0, 1).
fn unit(state: &mut u64) -> f64 {
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^= z >> 31;
    (z >> 11) as f64 / (1u64 << 53) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_in_range() {
        let mut s = 7;
        for _ in 0..1000 {
            let u = unit(&mut s);
            assert!((0.0..1.0).contains(&u));
        }
    }
}
