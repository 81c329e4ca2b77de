use symgas_core::constraint::{Constrained, GreaterThanOne, NonNegative};
use symgas_symbolic::{
    CompiledExpr, Expr, RatioExpressions, RatioKind, expressions_for_gamma, mach_symbol,
};

use crate::NozzleError;

/// Isentropic flow relations compiled for a fixed specific heat ratio.
///
/// Construction binds `γ` into the four symbolic relations and compiles each
/// into a numeric function of `M`. The nozzle is immutable afterwards, so one
/// instance can serve any number of evaluations, from any thread.
///
/// # Example
///
/// ```
/// use approx::assert_relative_eq;
/// use symgas_nozzle::{IsentropicNozzle, RatioKind};
///
/// let air = IsentropicNozzle::default();
///
/// assert_relative_eq!(air.temperature_ratio(2.0).unwrap(), 1.0 / 1.8, epsilon = 1e-12);
/// assert_relative_eq!(air.ratio(RatioKind::AreaRatio, 1.0).unwrap(), 1.0, epsilon = 1e-12);
/// ```
#[derive(Debug)]
pub struct IsentropicNozzle {
    gamma: Constrained<f64, GreaterThanOne>,
    expressions: RatioExpressions,
    evaluators: [CompiledExpr; 4],
}

impl IsentropicNozzle {
    /// Specific heat ratio of dry air.
    pub const AIR_GAMMA: f64 = 1.4;

    /// Builds the evaluators for the specific heat ratio `gamma`.
    ///
    /// # Errors
    ///
    /// Returns [`NozzleError::InvalidGamma`] unless `1 < gamma < ∞`.
    pub fn new(gamma: f64) -> Result<Self, NozzleError> {
        let constrained = GreaterThanOne::new(gamma)
            .map_err(|source| NozzleError::InvalidGamma { value: gamma, source })?;

        let expressions = expressions_for_gamma(gamma);
        let [t, p, rho, a] = RatioKind::ALL;
        let evaluators = [
            expressions[t].compile(mach_symbol())?,
            expressions[p].compile(mach_symbol())?,
            expressions[rho].compile(mach_symbol())?,
            expressions[a].compile(mach_symbol())?,
        ];

        log::debug!("compiled isentropic relations for gamma = {gamma}");

        Ok(Self {
            gamma: constrained,
            expressions,
            evaluators,
        })
    }

    /// Returns the specific heat ratio.
    #[must_use]
    pub fn gamma(&self) -> f64 {
        *self.gamma.as_ref()
    }

    /// Returns the `γ`-bound expression the `kind` evaluator was compiled from.
    #[must_use]
    pub fn expression(&self, kind: RatioKind) -> &Expr {
        &self.expressions[kind]
    }

    /// Returns the four `γ`-bound expressions.
    #[must_use]
    pub fn expressions(&self) -> &RatioExpressions {
        &self.expressions
    }

    /// Returns `T/T0` at Mach number `mach`.
    ///
    /// # Errors
    ///
    /// Fails if `mach` is negative or NaN, or if evaluation fails.
    pub fn temperature_ratio(&self, mach: f64) -> Result<f64, NozzleError> {
        self.ratio(RatioKind::TemperatureRatio, mach)
    }

    /// Returns `p/p0` at Mach number `mach`.
    ///
    /// # Errors
    ///
    /// Fails if `mach` is negative or NaN, or if evaluation fails.
    pub fn pressure_ratio(&self, mach: f64) -> Result<f64, NozzleError> {
        self.ratio(RatioKind::PressureRatio, mach)
    }

    /// Returns `ρ/ρ0` at Mach number `mach`.
    ///
    /// # Errors
    ///
    /// Fails if `mach` is negative or NaN, or if evaluation fails.
    pub fn density_ratio(&self, mach: f64) -> Result<f64, NozzleError> {
        self.ratio(RatioKind::DensityRatio, mach)
    }

    /// Returns `A/A*` at Mach number `mach`.
    ///
    /// # Errors
    ///
    /// Fails with [`NozzleError::AreaRatioAtRest`] if `mach` is zero, and
    /// otherwise as [`ratio`](Self::ratio).
    pub fn area_ratio(&self, mach: f64) -> Result<f64, NozzleError> {
        self.ratio(RatioKind::AreaRatio, mach)
    }

    /// Returns the `kind` ratio at Mach number `mach`.
    ///
    /// # Errors
    ///
    /// - [`NozzleError::InvalidMach`] if `mach` is negative or NaN.
    /// - [`NozzleError::AreaRatioAtRest`] if `kind` is the area ratio and `mach` is zero.
    /// - [`NozzleError::Evaluation`] if the relation produces a non-finite value.
    pub fn ratio(&self, kind: RatioKind, mach: f64) -> Result<f64, NozzleError> {
        validate_mach(kind, &[mach])?;
        self.evaluate(kind, mach)
    }

    /// Returns the `kind` ratio at each Mach number, in input order.
    ///
    /// Every Mach number is validated before any is evaluated, and the first
    /// failure aborts the whole batch.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`ratio`](Self::ratio); `index` in
    /// the error locates the offending element.
    pub fn ratios(&self, kind: RatioKind, mach: &[f64]) -> Result<Vec<f64>, NozzleError> {
        validate_mach(kind, mach)?;
        self.evaluate_all(kind, mach)
    }

    /// Evaluates a batch of already validated Mach numbers.
    pub(crate) fn evaluate_all(
        &self,
        kind: RatioKind,
        mach: &[f64],
    ) -> Result<Vec<f64>, NozzleError> {
        mach.iter().map(|&m| self.evaluate(kind, m)).collect()
    }

    /// Evaluates an already validated Mach number.
    fn evaluate(&self, kind: RatioKind, mach: f64) -> Result<f64, NozzleError> {
        self.evaluator(kind)
            .call(mach)
            .map_err(|source| NozzleError::Evaluation { kind, mach, source })
    }

    pub(crate) fn evaluator(&self, kind: RatioKind) -> &CompiledExpr {
        let [t, p, rho, a] = &self.evaluators;
        match kind {
            RatioKind::TemperatureRatio => t,
            RatioKind::PressureRatio => p,
            RatioKind::DensityRatio => rho,
            RatioKind::AreaRatio => a,
        }
    }
}

impl Default for IsentropicNozzle {
    /// Returns the nozzle for dry air, `γ = 1.4`.
    fn default() -> Self {
        Self::new(Self::AIR_GAMMA)
            .unwrap_or_else(|err| unreachable!("air relations always compile: {err}"))
    }
}

/// Checks every Mach number before any evaluation.
pub(crate) fn validate_mach(kind: RatioKind, mach: &[f64]) -> Result<(), NozzleError> {
    for (index, &value) in mach.iter().enumerate() {
        NonNegative::new(value).map_err(|source| NozzleError::InvalidMach {
            index,
            value,
            source,
        })?;

        if kind == RatioKind::AreaRatio && value == 0.0 {
            return Err(NozzleError::AreaRatioAtRest { index });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use symgas_core::constraint::ConstraintError;
    use symgas_symbolic::Bindings;

    use super::*;

    #[test]
    fn rejects_gamma_at_or_below_one() {
        for gamma in [1.0, 0.9, -1.4, f64::NAN, f64::INFINITY] {
            let err = IsentropicNozzle::new(gamma).unwrap_err();
            assert!(matches!(err, NozzleError::InvalidGamma { .. }), "gamma = {gamma}");
        }
    }

    #[test]
    fn default_is_air() {
        let air = IsentropicNozzle::default();
        assert_eq!(air.gamma(), 1.4);
    }

    #[test]
    fn known_values_for_air() {
        let air = IsentropicNozzle::default();

        assert_relative_eq!(air.temperature_ratio(2.0).unwrap(), 0.555_555_6, epsilon = 1e-7);
        assert_relative_eq!(air.pressure_ratio(2.0).unwrap(), 0.127_804_6, epsilon = 1e-7);
        assert_relative_eq!(air.density_ratio(2.0).unwrap(), 0.230_048_3, epsilon = 1e-7);
        assert_relative_eq!(air.area_ratio(2.0).unwrap(), 1.687_5, epsilon = 1e-7);
    }

    #[test]
    fn ratios_at_rest_are_one() {
        let air = IsentropicNozzle::default();
        for kind in [
            RatioKind::TemperatureRatio,
            RatioKind::PressureRatio,
            RatioKind::DensityRatio,
        ] {
            assert_relative_eq!(air.ratio(kind, 0.0).unwrap(), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn batch_preserves_order_and_matches_scalar() {
        let nozzle = IsentropicNozzle::new(1.3).unwrap();
        let mach = [2.0, 0.5, 1.0, 0.1];
        let batch = nozzle.ratios(RatioKind::PressureRatio, &mach).unwrap();

        assert_eq!(batch.len(), mach.len());
        for (m, p) in mach.iter().zip(&batch) {
            assert_eq!(*p, nozzle.pressure_ratio(*m).unwrap());
        }
        assert!(nozzle.ratios(RatioKind::PressureRatio, &[]).unwrap().is_empty());
    }

    #[test]
    fn evaluate_all_skips_validation() {
        let air = IsentropicNozzle::default();
        let mach = [0.3, 1.0, 2.5];
        assert_eq!(
            air.evaluate_all(RatioKind::DensityRatio, &mach).unwrap(),
            air.ratios(RatioKind::DensityRatio, &mach).unwrap()
        );

        // Without validation, M = 0 reaches the compiled relation.
        let err = air.evaluate_all(RatioKind::AreaRatio, &[0.0]).unwrap_err();
        assert!(matches!(err, NozzleError::Evaluation { kind: RatioKind::AreaRatio, .. }));
    }

    #[test]
    fn negative_mach_is_rejected() {
        let air = IsentropicNozzle::default();
        let err = air.ratios(RatioKind::TemperatureRatio, &[0.5, -0.1]).unwrap_err();

        assert!(matches!(
            err,
            NozzleError::InvalidMach { index: 1, source: ConstraintError::Negative, .. }
        ));
        assert!(matches!(
            air.temperature_ratio(f64::NAN).unwrap_err(),
            NozzleError::InvalidMach { source: ConstraintError::NotANumber, .. }
        ));
    }

    #[test]
    fn area_ratio_at_rest_is_an_error() {
        let air = IsentropicNozzle::default();
        let err = air.ratios(RatioKind::AreaRatio, &[0.5, 0.0]).unwrap_err();
        assert!(matches!(err, NozzleError::AreaRatioAtRest { index: 1 }));
    }

    #[test]
    fn expression_matches_compiled_evaluator() {
        let nozzle = IsentropicNozzle::new(1.25).unwrap();
        for kind in RatioKind::ALL {
            let expr = nozzle.expression(kind);
            let tree = expr.eval(&Bindings::new().with(mach_symbol(), 1.7)).unwrap();
            assert_relative_eq!(nozzle.ratio(kind, 1.7).unwrap(), tree, epsilon = 1e-14);
        }
    }

    #[test]
    fn nozzle_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IsentropicNozzle>();
    }
}
