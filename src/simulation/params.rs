//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - domain bounds used by the boundary cull,
//! - gravitational constant and the merged-body density (`G`, `density`),
//! - fixed step size `dt` derived from the tick rate,
//! - simulated end time `t_end` (0 = run until shutdown)

#[derive(Debug, Clone)]
pub struct Parameters {
    pub width: f64,   // domain width
    pub height: f64,  // domain height
    pub G: f64,       // gravitational constant
    pub density: f64, // constant relating a merged body's mass to its radius
    pub dt: f64,      // fixed step size, never a measured wall-clock delta
    pub t_end: f64,   // simulated time to stop at; 0 disables the limit
}
