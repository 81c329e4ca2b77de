use symgas_core::constraint::GreaterThanOne;
use symgas_solvers::bisection::{self, Action, Event, Status};
use symgas_symbolic::{CompiledExpr, RatioKind};

use crate::{IsentropicNozzle, NozzleError};

/// Which of the two Mach numbers sharing an area ratio to solve for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    /// The solution in `(0, 1]`.
    Subsonic,
    /// The solution in `[1, max_mach]`.
    Supersonic,
}

/// Settings for inverting the area–Mach relation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InversionConfig {
    /// Bisection tolerances and iteration limit.
    pub bisection: bisection::Config,
    /// Upper end of the supersonic search bracket.
    pub max_mach: f64,
}

/// Halvings spent pulling an overflowing supersonic bound back toward the throat.
const MAX_BOUND_STEPS: usize = 64;

impl Default for InversionConfig {
    fn default() -> Self {
        Self {
            bisection: bisection::Config::default(),
            max_mach: 50.0,
        }
    }
}

impl IsentropicNozzle {
    /// Returns the Mach number on `branch` whose area ratio is `area_ratio`.
    ///
    /// Every `A/A* > 1` is reached twice, once below and once above `M = 1`.
    /// A target of exactly one returns `M = 1` without iterating.
    ///
    /// # Errors
    ///
    /// - [`NozzleError::InvalidAreaRatio`] if `area_ratio` is below one or not finite.
    /// - [`NozzleError::InvalidMaxMach`] if `config.max_mach` is not above one.
    /// - [`NozzleError::Inversion`] if bisection fails, for example when the
    ///   supersonic solution lies beyond `config.max_mach`.
    ///
    /// # Example
    ///
    /// ```
    /// use approx::assert_relative_eq;
    /// use symgas_nozzle::{Branch, InversionConfig, IsentropicNozzle};
    ///
    /// let air = IsentropicNozzle::default();
    /// let config = InversionConfig::default();
    ///
    /// let m = air.mach_from_area_ratio(1.6875, Branch::Supersonic, &config).unwrap();
    /// assert_relative_eq!(m, 2.0, epsilon = 1e-9);
    /// ```
    pub fn mach_from_area_ratio(
        &self,
        area_ratio: f64,
        branch: Branch,
        config: &InversionConfig,
    ) -> Result<f64, NozzleError> {
        if !area_ratio.is_finite() || area_ratio < 1.0 {
            return Err(NozzleError::InvalidAreaRatio { value: area_ratio });
        }
        GreaterThanOne::new(config.max_mach).map_err(|source| NozzleError::InvalidMaxMach {
            value: config.max_mach,
            source,
        })?;

        #[allow(clippy::float_cmp)]
        if area_ratio == 1.0 {
            return Ok(1.0);
        }

        let area = self.evaluator(RatioKind::AreaRatio);
        let bracket = match branch {
            Branch::Subsonic => [f64::EPSILON, 1.0],
            Branch::Supersonic => [1.0, supersonic_bound(area, area_ratio, config.max_mach)],
        };

        let solution = bisection::solve(
            |mach| area.call(mach).map(|a| a - area_ratio),
            bracket,
            &config.bisection,
            |event: &Event<'_>| -> Option<Action> {
                log::trace!(
                    "A/A* = {area_ratio}: iteration {}, M = {}, residual = {}",
                    event.iter,
                    event.x,
                    event.residual,
                );
                None
            },
        )
        .map_err(|source| NozzleError::Inversion { area_ratio, source })?;

        match solution.status {
            Status::Converged => log::debug!(
                "A/A* = {area_ratio} ({branch:?}) -> M = {} after {} iterations",
                solution.x,
                solution.iters,
            ),
            Status::MaxIters | Status::StoppedByObserver => log::warn!(
                "A/A* = {area_ratio} ({branch:?}) did not converge in {} iterations, \
                 returning M = {} with residual {}",
                solution.iters,
                solution.x,
                solution.residual,
            ),
        }

        Ok(solution.x)
    }
}

/// Returns an upper search bound in `(1, max_mach]` where `A/A*` is finite.
///
/// For γ close to one, `A/A*` overflows long before the default bound. The
/// bound is then bisected between the throat and the overflow until it lands
/// on a finite value that reaches `area_ratio`. If none is found, the largest
/// finite bound seen is returned and the solver reports no sign change.
fn supersonic_bound(area: &CompiledExpr, area_ratio: f64, max_mach: f64) -> f64 {
    if area.call(max_mach).is_ok() {
        return max_mach;
    }

    // A/A* rises monotonically on the supersonic branch and is 1 at the throat.
    let mut finite = 1.0;
    let mut overflow = max_mach;
    for _ in 0..MAX_BOUND_STEPS {
        let mach = 0.5 * (finite + overflow);
        match area.call(mach) {
            Ok(value) if value >= area_ratio => {
                log::debug!("A/A* overflows at M = {max_mach}, searching up to M = {mach}");
                return mach;
            }
            Ok(_) => finite = mach,
            Err(_) => overflow = mach,
        }
    }

    log::debug!("A/A* = {area_ratio} is not reached before overflow, bound at M = {finite}");
    finite
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use symgas_solvers::bisection::BracketError;

    use super::*;

    #[test]
    fn recovers_both_branches() {
        let air = IsentropicNozzle::default();
        let config = InversionConfig::default();

        for mach in [0.1, 0.5, 0.9, 1.2, 2.0, 4.0] {
            let area_ratio = air.area_ratio(mach).unwrap();
            let branch = if mach < 1.0 {
                Branch::Subsonic
            } else {
                Branch::Supersonic
            };

            let solved = air.mach_from_area_ratio(area_ratio, branch, &config).unwrap();
            assert_relative_eq!(solved, mach, epsilon = 1e-9);
        }
    }

    #[test]
    fn throat_is_exact() {
        let air = IsentropicNozzle::default();
        let config = InversionConfig::default();

        for branch in [Branch::Subsonic, Branch::Supersonic] {
            assert_eq!(air.mach_from_area_ratio(1.0, branch, &config).unwrap(), 1.0);
        }
    }

    #[test]
    fn rejects_area_ratio_below_one() {
        let air = IsentropicNozzle::default();
        let config = InversionConfig::default();

        for value in [0.99, -2.0, f64::NAN, f64::INFINITY] {
            let err = air
                .mach_from_area_ratio(value, Branch::Subsonic, &config)
                .unwrap_err();
            assert!(matches!(err, NozzleError::InvalidAreaRatio { .. }), "{value}");
        }
    }

    #[test]
    fn solution_beyond_max_mach_is_an_error() {
        let air = IsentropicNozzle::default();
        let config = InversionConfig {
            max_mach: 1.5,
            ..InversionConfig::default()
        };

        let err = air
            .mach_from_area_ratio(1.6875, Branch::Supersonic, &config)
            .unwrap_err();
        assert!(matches!(
            err,
            NozzleError::Inversion {
                source: bisection::Error::InvalidBracket(BracketError::NoSignChange),
                ..
            }
        ));
    }

    #[test]
    fn overflowing_bound_is_pulled_in() {
        let nozzle = IsentropicNozzle::new(1.001).unwrap();
        let config = InversionConfig::default();
        assert!(nozzle.area_ratio(config.max_mach).is_err());

        for mach in [1.5, 2.0, 10.0] {
            let area_ratio = nozzle.area_ratio(mach).unwrap();
            let solved = nozzle
                .mach_from_area_ratio(area_ratio, Branch::Supersonic, &config)
                .unwrap();
            assert_relative_eq!(solved, mach, epsilon = 1e-9);
        }

        let err = nozzle
            .mach_from_area_ratio(f64::MAX, Branch::Supersonic, &config)
            .unwrap_err();
        assert!(matches!(
            err,
            NozzleError::Inversion {
                source: bisection::Error::InvalidBracket(BracketError::NoSignChange),
                ..
            }
        ));
    }

    #[test]
    fn rejects_invalid_max_mach() {
        let air = IsentropicNozzle::default();
        let config = InversionConfig {
            max_mach: 1.0,
            ..InversionConfig::default()
        };

        let err = air
            .mach_from_area_ratio(2.0, Branch::Supersonic, &config)
            .unwrap_err();
        assert!(matches!(err, NozzleError::InvalidMaxMach { .. }));
    }

    #[test]
    fn iteration_limit_still_returns_an_estimate() {
        let air = IsentropicNozzle::default();
        let config = InversionConfig {
            bisection: bisection::Config {
                max_iters: 5,
                ..bisection::Config::default()
            },
            ..InversionConfig::default()
        };

        let mach = air
            .mach_from_area_ratio(1.6875, Branch::Supersonic, &config)
            .unwrap();
        assert!(mach > 1.0 && mach < 50.0);
    }
}
