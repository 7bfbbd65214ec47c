//! Fixed-step position update and domain culling
//!
//! Advances live bodies from the velocities the solver produced, then
//! marks any body dead whose bounding circle has entirely left the domain

use crate::simulation::params::Parameters;
use crate::simulation::store::BodyStore;

/// Advance positions by one fixed step and cull departed bodies.
///
/// `position += velocity * dt` per live body; a body dies once its circle
/// is fully past one of the four domain edges. The four exit conditions
/// are mutually exclusive and tested in a fixed order
pub fn step_positions(store: &mut BodyStore, params: &Parameters) {
    for body in store.slots_mut() {
        if !body.alive {
            continue;
        }

        body.position += body.velocity * params.dt;

        if body.position.x + body.radius <= 0.0 {
            body.alive = false;
        } else if body.position.y + body.radius <= 0.0 {
            body.alive = false;
        } else if body.position.x - body.radius >= params.width {
            body.alive = false;
        } else if body.position.y - body.radius >= params.height {
            body.alive = false;
        }
    }
}
