//! Drifting dots for the canvas backdrop.
//!
//! The field owns positions and velocities only; drawing happens in the
//! frontend. `links` compares every pair, which is fine at the default
//! fifty particles and grows quadratically past that.

use std::f64::consts::TAU;

const VELOCITY_SPAN: f64 = 2.0;
const MIN_SIZE: f64 = 1.0;
const SIZE_SPAN: f64 = 3.0;
const MIN_OPACITY: f64 = 0.2;
const OPACITY_SPAN: f64 = 0.5;
const MIN_HUE: f64 = 200.0;
const HUE_SPAN: f64 = 60.0;

pub const FULL_TURN: f64 = TAU;

/// Source of uniform samples in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub opacity: f64,
    pub hue: f64,
}

impl Particle {
    fn random(width: f64, height: f64, rng: &mut impl RandomSource) -> Self {
        Self {
            x: rng.next_unit() * width,
            y: rng.next_unit() * height,
            vx: (rng.next_unit() - 0.5) * VELOCITY_SPAN,
            vy: (rng.next_unit() - 0.5) * VELOCITY_SPAN,
            size: rng.next_unit() * SIZE_SPAN + MIN_SIZE,
            opacity: rng.next_unit() * OPACITY_SPAN + MIN_OPACITY,
            hue: rng.next_unit() * HUE_SPAN + MIN_HUE,
        }
    }

    pub fn fill_style(&self) -> String {
        format!("hsl({:.1}, 70%, 60%)", self.hue)
    }
}

/// A pair of particles close enough to be joined by a line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: usize,
    pub to: usize,
    pub strength: f64,
}

pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            particles: Vec::new(),
        }
    }

    pub fn populate(&mut self, count: usize, rng: &mut impl RandomSource) {
        self.particles
            .extend((0..count).map(|_| Particle::random(self.width, self.height, rng)));
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Only the bounds change; particles left outside drift back after
    /// their next bounce.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);

        for particle in &mut self.particles {
            particle.x += particle.vx;
            particle.y += particle.vy;
            particle.vx = reflect(particle.x, particle.vx, width);
            particle.vy = reflect(particle.y, particle.vy, height);
        }
    }

    pub fn links(&self, max_distance: f64) -> Vec<Link> {
        let mut links = Vec::new();

        for (from, a) in self.particles.iter().enumerate() {
            for (offset, b) in self.particles[from + 1..].iter().enumerate() {
                let distance = (a.x - b.x).hypot(a.y - b.y);
                if let Some(strength) = link_strength(distance, max_distance) {
                    links.push(Link {
                        from,
                        to: from + 1 + offset,
                        strength,
                    });
                }
            }
        }

        links
    }

    #[cfg(test)]
    fn from_particles(width: f64, height: f64, particles: Vec<Particle>) -> Self {
        Self {
            width,
            height,
            particles,
        }
    }
}

/// Negates `velocity` when `position` is past a wall and still heading away
/// from the canvas. The position itself is left untouched.
pub fn reflect(position: f64, velocity: f64, extent: f64) -> f64 {
    let escaping_low = position < 0.0 && velocity < 0.0;
    let escaping_high = position > extent && velocity > 0.0;

    if escaping_low || escaping_high {
        -velocity
    } else {
        velocity
    }
}

/// Linear falloff: 1 for coincident particles, reaching 0 at `max_distance`.
/// Pairs at or beyond the limit get no link.
pub fn link_strength(distance: f64, max_distance: f64) -> Option<f64> {
    (distance < max_distance).then(|| 1.0 - distance / max_distance)
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn bounce_negates_outward_velocity(
            overshoot in 0.001f64..500.0,
            speed in 0.001f64..10.0,
            extent in 1.0f64..2000.0,
        ) {
            let high = reflect(extent + overshoot, speed, extent);
            prop_assert_eq!(high, -speed);

            let low = reflect(-overshoot, -speed, extent);
            prop_assert_eq!(low, speed);
        }

        #[test]
        fn inside_bounds_velocity_is_unchanged(
            fraction in 0.0f64..=1.0,
            velocity in -10.0f64..10.0,
            extent in 1.0f64..2000.0,
        ) {
            prop_assert_eq!(reflect(fraction * extent, velocity, extent), velocity);
        }

        #[test]
        fn link_strength_decreases_linearly(a in 0.0f64..100.0, b in 0.0f64..100.0) {
            prop_assume!(a < b);
            let near = link_strength(a, 100.0).unwrap();
            let far = link_strength(b, 100.0).unwrap();
            prop_assert!(near > far);
            prop_assert!((near - (1.0 - a / 100.0)).abs() < 1e-12);
            prop_assert!(far > 0.0);
        }
    }
}
