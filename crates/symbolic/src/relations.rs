//! The four isentropic relations for a calorically perfect gas.
//!
//! Every relation is built from the stagnation factor
//! `1 + (γ − 1)/2 · M²`:
//!
//! - `T/T0 = (1 + (γ − 1)/2 · M²)⁻¹`
//! - `p/p0 = (1 + (γ − 1)/2 · M²)^(−γ/(γ − 1))`
//! - `ρ/ρ0 = (1 + (γ − 1)/2 · M²)^(−1/(γ − 1))`
//! - `A/A* = (1/M) · [2/(γ + 1) · (1 + (γ − 1)/2 · M²)]^((γ + 1)/(2(γ − 1)))`
//!
//! The builders accept `γ` as anything convertible to an [`Expr`]: pass
//! [`gamma_symbol()`](crate::gamma_symbol) for the fully symbolic form or an
//! `f64` to bake in a value.
//!
//! Supplying `γ > 1` is the caller's responsibility. The exponents divide by
//! `γ − 1`, so a relation built with `γ = 1` fails with
//! [`EvalError::DivisionByZero`](crate::EvalError::DivisionByZero) when
//! evaluated. The area–Mach relation divides by `M` and fails the same way
//! at `M = 0`.

use std::{fmt, ops::Index, str::FromStr};

use crate::{Expr, GAMMA, MACH, UnknownRatioKey};

/// Returns `1 + (γ − 1)/2 · M²`.
fn stagnation_factor(gamma: &Expr) -> Expr {
    1.0 + (gamma - 1.0) / 2.0 * Expr::from(MACH).pow(2.0)
}

/// Returns the static-to-stagnation temperature ratio `T/T0` as a function of `M`.
#[must_use]
pub fn temperature_ratio(gamma: impl Into<Expr>) -> Expr {
    let gamma = gamma.into();
    1.0 / stagnation_factor(&gamma)
}

/// Returns the static-to-stagnation pressure ratio `p/p0` as a function of `M`.
#[must_use]
pub fn pressure_ratio(gamma: impl Into<Expr>) -> Expr {
    let gamma = gamma.into();
    let exponent = -&gamma / (&gamma - 1.0);
    stagnation_factor(&gamma).pow(exponent)
}

/// Returns the static-to-stagnation density ratio `ρ/ρ0` as a function of `M`.
#[must_use]
pub fn density_ratio(gamma: impl Into<Expr>) -> Expr {
    let gamma = gamma.into();
    let exponent = -1.0 / (&gamma - 1.0);
    stagnation_factor(&gamma).pow(exponent)
}

/// Returns the area–Mach relation `A/A*` as a function of `M`.
///
/// For any `A/A* > 1` there are two Mach numbers, one subsonic and one
/// supersonic; the relation itself is single-valued in `M`.
#[must_use]
pub fn area_mach_relation(gamma: impl Into<Expr>) -> Expr {
    let gamma = gamma.into();
    let term = 2.0 / (&gamma + 1.0) * stagnation_factor(&gamma);
    let exponent = (&gamma + 1.0) / (2.0 * (&gamma - 1.0));
    1.0 / Expr::from(MACH) * term.pow(exponent)
}

/// Returns the relation for `kind`.
#[must_use]
pub fn ratio_expression(kind: RatioKind, gamma: impl Into<Expr>) -> Expr {
    match kind {
        RatioKind::TemperatureRatio => temperature_ratio(gamma),
        RatioKind::PressureRatio => pressure_ratio(gamma),
        RatioKind::DensityRatio => density_ratio(gamma),
        RatioKind::AreaRatio => area_mach_relation(gamma),
    }
}

/// Identifies one of the four isentropic ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RatioKind {
    /// `T/T0`, keyed `"T_T0"`.
    TemperatureRatio,
    /// `p/p0`, keyed `"p_p0"`.
    PressureRatio,
    /// `ρ/ρ0`, keyed `"rho_rho0"`.
    DensityRatio,
    /// `A/A*`, keyed `"A_Astar"`.
    AreaRatio,
}

impl RatioKind {
    /// All ratios in key order.
    pub const ALL: [RatioKind; 4] = [
        RatioKind::TemperatureRatio,
        RatioKind::PressureRatio,
        RatioKind::DensityRatio,
        RatioKind::AreaRatio,
    ];

    /// Returns the stable string key for this ratio.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            RatioKind::TemperatureRatio => "T_T0",
            RatioKind::PressureRatio => "p_p0",
            RatioKind::DensityRatio => "rho_rho0",
            RatioKind::AreaRatio => "A_Astar",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for RatioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for RatioKind {
    type Err = UnknownRatioKey;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        RatioKind::ALL
            .into_iter()
            .find(|kind| kind.key() == key)
            .ok_or_else(|| UnknownRatioKey(key.to_owned()))
    }
}

/// The four isentropic relations, addressable by [`RatioKind`] or key.
///
/// # Example
///
/// ```
/// use symgas_symbolic::{RatioKind, expressions_for_gamma};
///
/// let exprs = expressions_for_gamma(1.4);
/// assert_eq!(exprs[RatioKind::TemperatureRatio], *exprs.by_key("T_T0").unwrap());
///
/// let keys: Vec<_> = exprs.iter().map(|(kind, _)| kind.key()).collect();
/// assert_eq!(keys, ["T_T0", "p_p0", "rho_rho0", "A_Astar"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RatioExpressions {
    exprs: [Expr; 4],
}

impl RatioExpressions {
    /// Builds all four relations in terms of the symbol `γ`.
    #[must_use]
    pub fn symbolic() -> Self {
        Self::with_gamma(GAMMA)
    }

    /// Builds all four relations with `gamma` in place of `γ`, unsimplified.
    #[must_use]
    pub fn with_gamma(gamma: impl Into<Expr>) -> Self {
        let gamma = gamma.into();
        Self {
            exprs: RatioKind::ALL.map(|kind| ratio_expression(kind, &gamma)),
        }
    }

    /// Returns the relation for `kind`.
    #[must_use]
    pub fn get(&self, kind: RatioKind) -> &Expr {
        &self.exprs[kind.index()]
    }

    /// Returns the relation for a string key such as `"p_p0"`.
    #[must_use]
    pub fn by_key(&self, key: &str) -> Option<&Expr> {
        key.parse().ok().map(|kind| self.get(kind))
    }

    /// Iterates over the relations in key order.
    pub fn iter(&self) -> impl Iterator<Item = (RatioKind, &Expr)> {
        RatioKind::ALL.into_iter().zip(self.exprs.iter())
    }

    /// Applies `f` to every relation.
    #[must_use]
    pub fn map(&self, f: impl Fn(&Expr) -> Expr) -> Self {
        Self {
            exprs: self.exprs.each_ref().map(f),
        }
    }
}

impl Index<RatioKind> for RatioExpressions {
    type Output = Expr;

    fn index(&self, kind: RatioKind) -> &Expr {
        self.get(kind)
    }
}

/// Returns the four relations with `γ` replaced by `gamma` and simplified.
///
/// The result depends only on `M`. Calling this twice with the same value
/// yields identical expressions.
#[must_use]
pub fn expressions_for_gamma(gamma: f64) -> RatioExpressions {
    RatioExpressions::symbolic().map(|expr| expr.subs_value(GAMMA, gamma).simplify())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::{Bindings, EvalError, gamma_symbol, mach_symbol};

    use super::*;

    fn eval(expr: &Expr, gamma: f64, mach: f64) -> Result<f64, EvalError> {
        expr.eval(&Bindings::new().with(GAMMA, gamma).with(MACH, mach))
    }

    #[test]
    fn stagnation_ratios_are_one_at_rest() {
        for gamma in [1.1, 1.3, 1.4, 5.0 / 3.0] {
            for kind in [
                RatioKind::TemperatureRatio,
                RatioKind::PressureRatio,
                RatioKind::DensityRatio,
            ] {
                let expr = ratio_expression(kind, gamma_symbol());
                assert_relative_eq!(eval(&expr, gamma, 0.0).unwrap(), 1.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn area_ratio_is_one_at_the_throat() {
        let expr = area_mach_relation(gamma_symbol());
        for gamma in [1.1, 1.3, 1.4, 5.0 / 3.0] {
            assert_relative_eq!(eval(&expr, gamma, 1.0).unwrap(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn known_values_for_air() {
        // Standard compressible flow tables, γ = 1.4, M = 2.
        let exprs = RatioExpressions::symbolic();
        let at = |kind| eval(&exprs[kind], 1.4, 2.0).unwrap();

        assert_relative_eq!(at(RatioKind::TemperatureRatio), 0.555_555_6, epsilon = 1e-6);
        assert_relative_eq!(at(RatioKind::PressureRatio), 0.127_804_6, epsilon = 1e-6);
        assert_relative_eq!(at(RatioKind::DensityRatio), 0.230_048_3, epsilon = 1e-6);
        assert_relative_eq!(at(RatioKind::AreaRatio), 1.687_500_0, epsilon = 1e-6);
    }

    #[test]
    fn pressure_is_density_times_temperature() {
        // p/p0 = (ρ/ρ0)·(T/T0) for a perfect gas.
        let exprs = RatioExpressions::symbolic();
        for mach in [0.3, 1.0, 2.7] {
            let p = eval(&exprs[RatioKind::PressureRatio], 1.3, mach).unwrap();
            let rho = eval(&exprs[RatioKind::DensityRatio], 1.3, mach).unwrap();
            let t = eval(&exprs[RatioKind::TemperatureRatio], 1.3, mach).unwrap();
            assert_relative_eq!(p, rho * t, epsilon = 1e-12);
        }
    }

    #[test]
    fn area_ratio_at_rest_is_an_error() {
        let expr = area_mach_relation(1.4);
        let err = expr.eval(&Bindings::new().with(MACH, 0.0)).unwrap_err();
        assert!(matches!(err, EvalError::DivisionByZero { .. }));
    }

    #[test]
    fn unit_gamma_fails_instead_of_returning_infinity() {
        let exprs = expressions_for_gamma(1.0);

        let err = exprs[RatioKind::PressureRatio]
            .eval(&Bindings::new().with(MACH, 0.5))
            .unwrap_err();
        assert!(matches!(err, EvalError::DivisionByZero { .. }));

        let err = exprs[RatioKind::AreaRatio]
            .compile(mach_symbol())
            .unwrap()
            .call(2.0)
            .unwrap_err();
        assert!(matches!(err, EvalError::DivisionByZero { .. }));
    }

    #[test]
    fn expressions_for_gamma_only_depend_on_mach() {
        let exprs = expressions_for_gamma(1.4);
        for (kind, expr) in exprs.iter() {
            let symbols: Vec<_> = expr.free_symbols().into_iter().collect();
            assert_eq!(symbols, vec![MACH], "{kind} still depends on {symbols:?}");
        }
    }

    #[test]
    fn expressions_for_gamma_match_direct_substitution() {
        let exprs = expressions_for_gamma(1.4);
        let bindings = Bindings::new().with(MACH, 2.0);

        for kind in RatioKind::ALL {
            let direct = ratio_expression(kind, gamma_symbol()).subs_value(GAMMA, 1.4);
            assert_relative_eq!(
                exprs[kind].eval(&bindings).unwrap(),
                direct.eval(&bindings).unwrap(),
                epsilon = 1e-12,
            );
        }
    }

    #[test]
    fn expressions_for_gamma_is_idempotent() {
        assert_eq!(expressions_for_gamma(1.4), expressions_for_gamma(1.4));
    }

    #[test]
    fn keys_round_trip() {
        for kind in RatioKind::ALL {
            assert_eq!(kind.key().parse::<RatioKind>().unwrap(), kind);
        }
        assert!("A_A*".parse::<RatioKind>().is_err());
        assert!(expressions_for_gamma(1.4).by_key("T").is_none());
    }

    #[test]
    fn simplified_temperature_ratio_is_readable() {
        let exprs = expressions_for_gamma(1.4);
        let rendered = exprs[RatioKind::TemperatureRatio].to_string();
        assert!(rendered.starts_with("1/(1 + 0.19999"), "got {rendered}");
        assert!(rendered.ends_with("*M^2)"), "got {rendered}");
    }
}
