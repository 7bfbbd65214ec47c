//! Core state types for the N-body engine.
//!
//! Defines the 2D body record shared by the store, solver and integrator:
//! - `NVec2` - the `f64` vector type used for positions and velocities
//! - `BodyId` - identity assigned at insertion, never reused
//! - `Body` - one circular point-mass slot

use std::fmt;

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Identity of a body. Ids increase strictly in creation order and are
/// never reused, independent of where the body sits in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub u32);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub id: BodyId,
    pub alive: bool, // dead slots stay in place until the next sanitize pass
    pub mass: f64,
    pub radius: f64,
    pub position: NVec2,
    pub velocity: NVec2,
    pub color: u32, // opaque render token, forwarded untouched
}

impl Body {
    pub fn momentum(&self) -> NVec2 {
        self.velocity * self.mass
    }

    /// Whether `point` lies inside (or on) this body's circle.
    pub fn contains(&self, point: NVec2) -> bool {
        let d = point - self.position;
        d.dot(&d) <= self.radius * self.radius
    }
}
