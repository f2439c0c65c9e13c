//! Damped harmonic oscillator used for the pointer interaction offset.
//!
//! Semi-implicit Euler integration of `m·x'' = -k·(x - target) - c·x'`,
//! with a precision snap once both displacement and velocity are negligible.
//! Reproduces the settling behavior of the usual mass/tension/friction
//! spring models without a physics dependency.

use crate::constants::{SPRING_FRICTION, SPRING_MASS, SPRING_PRECISION, SPRING_TENSION};

#[derive(Clone, Copy, Debug)]
pub struct SpringConfig {
    pub mass: f32,
    pub tension: f32,
    pub friction: f32,
    pub precision: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            mass: SPRING_MASS,
            tension: SPRING_TENSION,
            friction: SPRING_FRICTION,
            precision: SPRING_PRECISION,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Spring {
    value: f32,
    velocity: f32,
    target: f32,
    config: SpringConfig,
}

impl Spring {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            value: 0.0,
            velocity: 0.0,
            target: 0.0,
            config,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// True once the spring has snapped onto its target.
    pub fn settled(&self) -> bool {
        self.velocity == 0.0 && self.value == self.target
    }

    pub fn step(&mut self, dt_sec: f32) {
        if dt_sec <= 0.0 {
            return;
        }
        let displacement = self.value - self.target;
        let accel =
            (-self.config.tension * displacement - self.config.friction * self.velocity)
                / self.config.mass;
        self.velocity += accel * dt_sec;
        self.value += self.velocity * dt_sec;

        if self.velocity.abs() < self.config.precision
            && (self.value - self.target).abs() < self.config.precision
        {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }
}
