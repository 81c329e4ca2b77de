//! Scalar root finding for the symgas nozzle toolkit.
//!
//! # Solvers
//!
//! - [`bisection`]: guaranteed convergence on a bracketed interval, used to
//!   invert the area–Mach relation on its subsonic and supersonic branches

pub mod bisection;
mod observe;

pub use observe::Observer;
