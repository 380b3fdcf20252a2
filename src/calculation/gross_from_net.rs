//! Net-to-gross salary search.
//!
//! The forward calculation is piecewise linear, with kinks at the SGK ceiling,
//! at every bracket boundary and where the minimum-wage exemption runs out,
//! so there is no closed-form inverse. The gross salary is found by
//! iterating [`net_from_gross`] until its net lands within tolerance of the
//! target.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::config::TaxConfiguration;
use crate::error::{EngineError, EngineResult};
use crate::models::SalaryCalculationResult;

use super::{net_from_gross, round2};

/// Default number of forward calculations the solver may run.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Default convergence tolerance: one kuruş.
pub const DEFAULT_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Largest net salary the solver accepts, a tenth of [`Decimal::MAX`].
/// Every gross the search tries stays representable below it.
pub const MAX_TARGET_NET: Decimal = Decimal::from_parts(u32::MAX, u32::MAX, u32::MAX, false, 1);

const ONE_KURUS: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// How the solver moves its gross estimate between iterations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverStrategy {
    /// Newton-like step scaled by the observed gross/net ratio and damped
    /// by 0.8, switching to bisection once two estimates straddle the
    /// target. Usually converges in a handful of iterations.
    #[default]
    DampedNewton,
    /// Halves a bracketing interval each iteration. Slower, but relies only
    /// on net growing with gross.
    Bisection,
}

/// Tuning for [`gross_from_net_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverOptions {
    /// The search strategy.
    pub strategy: SolverStrategy,
    /// Maximum number of forward calculations.
    pub max_iterations: u32,
    /// Largest accepted absolute difference between target and computed net.
    pub tolerance: Decimal,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            strategy: SolverStrategy::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl SolverOptions {
    /// Default options with the given strategy.
    pub fn with_strategy(strategy: SolverStrategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }
}

/// Finds the gross salary that pays `target_net`, using the default damped
/// Newton search with a budget of [`DEFAULT_MAX_ITERATIONS`].
///
/// On success the returned result reports `target_net` exactly as its net;
/// every other field is the forward calculation for the gross found.
///
/// # Errors
///
/// - [`EngineError::InvalidNet`] if `target_net` is zero or negative.
/// - [`EngineError::AmountTooLarge`] if `target_net` exceeds
///   [`MAX_TARGET_NET`].
/// - [`EngineError::ConvergenceFailure`] if the budget runs out.
/// - Any error the forward calculation raises for the configuration.
///
/// # Examples
///
/// ```
/// use bordro_engine::calculation::gross_from_net;
/// use bordro_engine::config::TaxConfiguration;
/// use rust_decimal::Decimal;
///
/// let config = TaxConfiguration::reference_2026();
/// let result = gross_from_net(Decimal::from(20_000), &config).unwrap();
///
/// assert_eq!(result.net, Decimal::from(20_000));
/// assert!(result.gross > result.net);
/// ```
pub fn gross_from_net(
    target_net: Decimal,
    config: &TaxConfiguration,
) -> EngineResult<SalaryCalculationResult> {
    gross_from_net_with(target_net, config, &SolverOptions::default())
}

/// Finds the gross salary that pays `target_net` with explicit solver options.
///
/// # Errors
///
/// Same as [`gross_from_net`]; `ConvergenceFailure` names
/// `options.max_iterations`.
pub fn gross_from_net_with(
    target_net: Decimal,
    config: &TaxConfiguration,
    options: &SolverOptions,
) -> EngineResult<SalaryCalculationResult> {
    if target_net <= Decimal::ZERO {
        return Err(EngineError::InvalidNet { net: target_net });
    }
    if target_net > MAX_TARGET_NET {
        return Err(EngineError::AmountTooLarge { amount: target_net });
    }

    let mut search = Search {
        target_net,
        config,
        options,
        iterations: 0,
    };

    let found = match options.strategy {
        SolverStrategy::DampedNewton => search.damped_newton()?,
        SolverStrategy::Bisection => search.bisection()?,
    };

    match found {
        Some(result) => {
            debug!(
                target_net = %target_net,
                gross = %result.gross,
                iterations = search.iterations,
                "Net-to-gross search converged"
            );
            Ok(SalaryCalculationResult {
                net: target_net,
                ..result
            })
        }
        None => {
            warn!(
                target_net = %target_net,
                max_iterations = options.max_iterations,
                strategy = ?options.strategy,
                "Net-to-gross search did not converge"
            );
            Err(EngineError::ConvergenceFailure {
                target_net,
                iterations: options.max_iterations,
            })
        }
    }
}

/// Outcome of one forward evaluation.
enum Attempt {
    Converged(SalaryCalculationResult),
    Off {
        result: SalaryCalculationResult,
        net_diff: Decimal,
    },
}

struct Search<'a> {
    target_net: Decimal,
    config: &'a TaxConfiguration,
    options: &'a SolverOptions,
    iterations: u32,
}

impl Search<'_> {
    fn budget_left(&self) -> bool {
        self.iterations < self.options.max_iterations
    }

    /// Largest gross the search will try.
    fn gross_limit(&self) -> Decimal {
        MAX_TARGET_NET * Decimal::from(5)
    }

    /// Runs the forward calculation on a whole-kuruş gross so the gross the
    /// caller gets back reproduces the same net.
    fn attempt(&mut self, estimate: Decimal) -> EngineResult<Attempt> {
        self.iterations += 1;
        let candidate = round2(estimate).max(ONE_KURUS);
        let result = net_from_gross(candidate, self.config)?;
        let net_diff = self.target_net - result.net;

        trace!(
            iteration = self.iterations,
            gross = %candidate,
            net = %result.net,
            net_diff = %net_diff,
            "Net-to-gross attempt"
        );

        if net_diff.abs() < self.options.tolerance {
            Ok(Attempt::Converged(result))
        } else {
            Ok(Attempt::Off { result, net_diff })
        }
    }

    /// Newton steps until two consecutive attempts straddle the target, then
    /// bisection between them. Falls back to a full bisection when half the
    /// budget passes without either.
    fn damped_newton(&mut self) -> EngineResult<Option<SalaryCalculationResult>> {
        let newton_budget = self.options.max_iterations / 2;
        // Assume roughly 30% of gross goes to deductions.
        let mut estimate = self.target_net / Decimal::new(7, 1);
        let mut previous: Option<(Decimal, Decimal)> = None;

        while self.iterations < newton_budget {
            let (result, net_diff) = match self.attempt(estimate)? {
                Attempt::Converged(result) => return Ok(Some(result)),
                Attempt::Off { result, net_diff } => (result, net_diff),
            };

            if let Some((previous_gross, previous_diff)) = previous {
                let (short, past) = if net_diff > Decimal::ZERO {
                    (result.gross, previous_gross)
                } else {
                    (previous_gross, result.gross)
                };
                let straddles = (previous_diff > Decimal::ZERO) != (net_diff > Decimal::ZERO);
                // Net is only monotonic across whole kuruş steps going up.
                if straddles && short < past {
                    return match self.bisect(short, past)? {
                        Some(result) => Ok(Some(result)),
                        None => self.bisection(),
                    };
                }
            }

            previous = Some((result.gross, net_diff));
            estimate = self.newton_step(estimate, &result, net_diff);
        }

        self.bisection()
    }

    fn newton_step(
        &self,
        estimate: Decimal,
        result: &SalaryCalculationResult,
        net_diff: Decimal,
    ) -> Decimal {
        let target = self.target_net;
        let damping = Decimal::new(8, 1);
        let effective_rate = Decimal::ONE - result.net / result.gross;

        let next = Decimal::ONE
            .checked_div(Decimal::ONE - effective_rate)
            .and_then(|adjustment| net_diff.checked_mul(adjustment))
            .and_then(|step| step.checked_mul(damping))
            .and_then(|step| estimate.checked_add(step));

        match next {
            // Nothing left after deductions, or the step left the range.
            None => target * Decimal::TWO,
            Some(next) if next <= Decimal::ZERO => target,
            Some(next) if next > target * Decimal::from(5) => target * Decimal::TWO,
            Some(next) => next,
        }
    }

    fn bisection(&mut self) -> EngineResult<Option<SalaryCalculationResult>> {
        if !self.budget_left() {
            return Ok(None);
        }

        // Deductions are never negative, so the target itself as gross
        // cannot pay more than the target.
        let mut short = match self.attempt(self.target_net)? {
            Attempt::Converged(result) => return Ok(Some(result)),
            Attempt::Off { result, .. } => result.gross,
        };

        // Grow the upper bound until it pays at least the target.
        while self.budget_left() {
            let high = match short.checked_mul(Decimal::TWO) {
                Some(high) if high <= self.gross_limit() => high,
                _ => return Ok(None),
            };
            match self.attempt(high)? {
                Attempt::Converged(result) => return Ok(Some(result)),
                Attempt::Off { result, net_diff } if net_diff > Decimal::ZERO => {
                    short = result.gross
                }
                Attempt::Off { result, .. } => return self.bisect(short, result.gross),
            }
        }

        Ok(None)
    }

    /// Halves `[short, past]` on the kuruş grid, where net falls short of the
    /// target at `short` and passes it at `past`.
    ///
    /// Raising gross by one kuruş raises net by at most one kuruş, so some
    /// gross in the interval pays the target and the halving reaches it
    /// before the interval closes.
    fn bisect(
        &mut self,
        mut short: Decimal,
        mut past: Decimal,
    ) -> EngineResult<Option<SalaryCalculationResult>> {
        while self.budget_left() && past - short > ONE_KURUS {
            let mid = round2(short + (past - short) / Decimal::TWO);
            match self.attempt(mid)? {
                Attempt::Converged(result) => return Ok(Some(result)),
                Attempt::Off { result, net_diff } if net_diff > Decimal::ZERO => {
                    short = result.gross
                }
                Attempt::Off { result, .. } => past = result.gross,
            }
        }

        Ok(None)
    }
}
