mod bracket;
mod config;
mod error;
mod solution;

pub use bracket::{Bracket, BracketError, Sign};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use solution::{Solution, Status};

use std::error::Error as StdError;

use crate::Observer;

use bracket::ordered;

/// Control actions supported by the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and report the best point seen so far.
    StopEarly,
}

/// Midpoint evaluation emitted by the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event<'a> {
    /// Iteration counter (1-based within the bisection loop).
    pub iter: usize,
    /// Search bracket before this midpoint was applied.
    pub bracket: &'a Bracket,
    /// The midpoint that was evaluated.
    pub x: f64,
    /// Residual at the midpoint.
    pub residual: f64,
}

/// Finds a root of `f` within `bracket` using the bisection method.
///
/// The bracket may be given in either order. Each midpoint evaluation is
/// reported to `observer`, which may stop the solve early.
///
/// # Errors
///
/// Returns an error if the config or bracket is invalid, if `f` fails at any
/// point, or if `f` returns a non-finite residual.
///
/// # Example
///
/// ```
/// use std::convert::Infallible;
///
/// use symgas_solvers::bisection::{self, Config};
///
/// let sqrt2 = bisection::solve_unobserved(
///     |x: f64| Ok::<_, Infallible>(x * x - 2.0),
///     [0.0, 2.0],
///     &Config::default(),
/// )
/// .unwrap();
///
/// assert!(sqrt2.is_converged());
/// assert!((sqrt2.x - 2.0_f64.sqrt()).abs() < 1e-10);
/// ```
pub fn solve<F, E, Obs>(
    mut f: F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: StdError + Send + Sync + 'static,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    config.validate()?;
    let [left, right] = ordered(bracket)?;

    let mut evaluate = |x: f64| -> Result<f64, Error> {
        let residual = f(x).map_err(|err| Error::Function {
            x,
            source: Box::new(err),
        })?;
        if residual.is_finite() {
            Ok(residual)
        } else {
            Err(Error::NonFiniteResidual { x, residual })
        }
    };

    let left_residual = evaluate(left)?;
    if left_residual.abs() <= config.residual_tol {
        return Ok(Solution {
            status: Status::Converged,
            x: left,
            residual: left_residual,
            iters: 0,
        });
    }

    let right_residual = evaluate(right)?;
    if right_residual.abs() <= config.residual_tol {
        return Ok(Solution {
            status: Status::Converged,
            x: right,
            residual: right_residual,
            iters: 0,
        });
    }

    let mut bracket = Bracket::new(
        [left, right],
        Sign::of(left_residual),
        Sign::of(right_residual),
    )?;

    let mut best = if left_residual.abs() <= right_residual.abs() {
        (left, left_residual)
    } else {
        (right, right_residual)
    };

    for iter in 1..=config.max_iters {
        let mid = bracket.midpoint();
        let mid_residual = evaluate(mid)?;

        if mid_residual.abs() < best.1.abs() {
            best = (mid, mid_residual);
        }

        let event = Event {
            iter,
            bracket: &bracket,
            x: mid,
            residual: mid_residual,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                x: best.0,
                residual: best.1,
                iters: iter,
            });
        }

        let x_converged = bracket.is_x_converged(config.x_abs_tol, config.x_rel_tol);
        if x_converged || mid_residual.abs() <= config.residual_tol {
            return Ok(Solution {
                status: Status::Converged,
                x: mid,
                residual: mid_residual,
                iters: iter,
            });
        }

        bracket.shrink(mid, Sign::of(mid_residual));
    }

    Ok(Solution {
        status: Status::MaxIters,
        x: best.0,
        residual: best.1,
        iters: config.max_iters,
    })
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<F, E>(f: F, bracket: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: StdError + Send + Sync + 'static,
{
    solve(f, bracket, config, ())
}
