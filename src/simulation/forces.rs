//! Interaction passes for the n-body engine
//!
//! Defines the mutating force-term seam and the Newtonian gravity pass,
//! which also owns pairwise collision handling (bounce or merge) so each
//! unordered body pair is visited exactly once per tick

use crate::configuration::config::CollisionConfig;
use crate::simulation::states::Body;
use crate::simulation::store::BodyStore;

/// Collection of interaction terms applied once per tick.
/// Each term implements [`Force`] and mutates the store in sequence
pub struct ForceSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty interaction set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an interaction term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Force + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Apply every term to `store` in registration order
    pub fn apply_all(&self, store: &mut BodyStore) {
        for term in &self.terms {
            term.apply(store);
        }
    }
}

/// Trait for interaction passes operating on the body store.
/// Unlike a pure acceleration term, a pass may resolve collisions, which
/// mutates masses and liveness as well as velocities
pub trait Force {
    fn apply(&self, store: &mut BodyStore);
}

/// 2D Newtonian gravity over every unordered pair of live bodies, with
/// overlap handling folded into the same pass
pub struct NewtonianGravity {
    pub G: f64,
    pub dt: f64,
    pub density: f64, // sets the radius of merged bodies
    pub collisions: CollisionConfig,
}

impl Force for NewtonianGravity {
    fn apply(&self, store: &mut BodyStore) {
        let bodies = store.slots_mut();
        let n = bodies.len();
        if n == 0 {
            return;
        }

        // Loop over each unordered pair (i, j) with i < j; dead slots are
        // skipped, never processed
        for i in 0..n {
            if !bodies[i].alive {
                continue;
            }
            for j in (i + 1)..n {
                if !bodies[j].alive {
                    continue;
                }

                let bi = bodies[i];
                let bj = bodies[j];

                // r is the displacement vector from i to j
                let r = bj.position - bi.position;
                let d = r.norm();

                if d < bi.radius + bj.radius {
                    // split_at_mut(j) gives disjoint access to both slots
                    let (head, tail) = bodies.split_at_mut(j);
                    match self.collisions {
                        CollisionConfig::Elastic => bounce(&mut head[i], &mut tail[0]),
                        CollisionConfig::Merge => {
                            merge(&mut head[i], &mut tail[0], self.density);
                            // a freshly merged body meets no further
                            // partners this tick
                            break;
                        }
                    }
                }

                // Inverse-square pull, applied to both sides in the same
                // pass (Newton's third law). A pair that just bounced
                // still feels gravity here; only a merge ends the walk.
                // Coincident centers have no usable direction and skip it.
                if d > 0.0 {
                    let coef = self.G * bi.mass * bj.mass / (d * d * d);
                    let force = coef * r;
                    bodies[i].velocity += force / bi.mass * self.dt;
                    bodies[j].velocity -= force / bj.mass * self.dt;
                }
            }
        }
    }
}

/// Elastic exchange along the collision normal.
///
/// The 1-D two-body formula is applied to the velocity components along
/// the line of centers; tangential components are untouched. Momentum is
/// conserved exactly and glancing contacts keep their sliding motion.
fn bounce(ci: &mut Body, cj: &mut Body) {
    let m1 = ci.mass;
    let m2 = cj.mass;

    let axis = cj.position - ci.position;
    let d = axis.norm();
    if d == 0.0 {
        // coincident centers leave no collision normal
        return;
    }
    let normal = axis / d;

    let u1 = ci.velocity.dot(&normal);
    let u2 = cj.velocity.dot(&normal);
    let v1 = ((m1 - m2) * u1 + 2.0 * m2 * u2) / (m1 + m2);
    let v2 = ((m2 - m1) * u2 + 2.0 * m1 * u1) / (m1 + m2);

    ci.velocity += (v1 - u1) * normal;
    cj.velocity += (v2 - u2) * normal;
}

/// Merge `cj` into `ci`.
///
/// Velocity conserves linear momentum, position conserves the centre of
/// mass, masses sum, and the radius is recomputed from the shared density.
/// `cj` is left dead in place for the next sanitize pass.
fn merge(ci: &mut Body, cj: &mut Body, density: f64) {
    let m1 = ci.mass;
    let m2 = cj.mass;
    let total = m1 + m2;

    ci.velocity = (m1 * ci.velocity + m2 * cj.velocity) / total;
    ci.position = (m1 * ci.position + m2 * cj.position) / total;
    ci.mass = total;
    ci.radius = (total / (std::f64::consts::PI * density)).sqrt();

    cj.alive = false;
}
