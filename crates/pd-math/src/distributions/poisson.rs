//! Poisson distribution.
//!
//! P(X = k) = λ^k e^{−λ} / k!, extended to non-integral `k` through the
//! gamma function.  Callers wanting the strict discrete law should round
//! `k` before calling.
//!
//! The cumulative functions use the incomplete gamma identities
//! P(X ≤ k) = Q(k + 1, λ) and P(X > k) = P(k + 1, λ); the quantiles invert
//! them with respect to the shape parameter.

use std::marker::PhantomData;

use pd_core::{fail, DiscreteQuantile, ErrorPolicy, FloatScalar, RaiseError, Result};

use crate::special::{factorial, gamma_p, gamma_p_inva, gamma_q, gamma_q_inva, log_gamma};

/// Run a validation check, returning the policy's sentinel early.
macro_rules! check {
    ($check:expr) => {
        if let Some(sentinel) = $check? {
            return Ok(sentinel);
        }
    };
}

// ── Validation ───────────────────────────────────────────────────────────────
//
// Each check returns `Ok(None)` for a valid argument.  Otherwise the policy
// decides: `Err` to propagate, or `Ok(Some(sentinel))` to return in place of
// a result.

fn check_mean<T: FloatScalar, P: ErrorPolicy>(
    function: &'static str,
    mean: T,
) -> Result<Option<T>> {
    if !mean.is_finite() || mean < T::zero() {
        return P::domain_error(function, "mean is {value}, but must be finite and >= 0", mean)
            .map(Some);
    }
    Ok(None)
}

fn check_mean_positive<T: FloatScalar, P: ErrorPolicy>(
    function: &'static str,
    mean: T,
) -> Result<Option<T>> {
    if !mean.is_finite() || mean <= T::zero() {
        return P::domain_error(function, "mean is {value}, but must be finite and > 0", mean)
            .map(Some);
    }
    Ok(None)
}

fn check_k<T: FloatScalar, P: ErrorPolicy>(function: &'static str, k: T) -> Result<Option<T>> {
    if !k.is_finite() || k < T::zero() {
        return P::domain_error(
            function,
            "number of events k is {value}, but must be finite and >= 0",
            k,
        )
        .map(Some);
    }
    Ok(None)
}

fn check_probability<T: FloatScalar, P: ErrorPolicy>(
    function: &'static str,
    p: T,
) -> Result<Option<T>> {
    if !p.is_finite() || p < T::zero() || p > T::one() {
        return P::domain_error(function, "probability is {value}, but must be in [0, 1]", p)
            .map(Some);
    }
    Ok(None)
}

// ── Mass function paths ──────────────────────────────────────────────────────

/// e^{−λ} λ^k / k! by direct factorial lookup.
///
/// `k` must be integral and below `T::MAX_FACTORIAL`.  Returns `None` when
/// λ^k overflows or e^{−λ} drops below the normal range of `T`.
fn pdf_by_factorial<T: FloatScalar>(mean: T, k: T) -> Option<T> {
    let n = k.to_real() as u32;
    let decay = (-mean).exp();
    let power = mean.powi(n as i32);
    if decay < T::min_positive_value() || !power.is_finite() {
        return None;
    }
    Some(decay * power / T::from_real(factorial(n)))
}

/// exp(−λ + k ln λ − ln Γ(k + 1)), evaluated in `f64`.
fn pdf_by_log_gamma<T: FloatScalar>(mean: T, k: T) -> T {
    let (mean, k) = (mean.to_real(), k.to_real());
    T::from_real((-mean + mean.ln() * k - log_gamma(k + 1.0)).exp())
}

// ── Distribution ─────────────────────────────────────────────────────────────

/// Poisson distribution with mean `λ`.
///
/// `T` is the element type, `P` the [`ErrorPolicy`] applied to arguments
/// outside their domain.  The value is immutable once built.
///
/// # Example
///
/// ```
/// use pd_math::distributions::Poisson;
///
/// let d = Poisson::new(4.0).unwrap();
/// assert!((d.pdf(4.0).unwrap() - 0.195_366_814_813_165).abs() < 1e-12);
/// assert_eq!(d.quantile(0.5).unwrap(), 4.0);
/// assert!(d.pdf(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoissonDistribution<T = f64, P = RaiseError> {
    mean: T,
    discrete_quantile: DiscreteQuantile,
    policy: PhantomData<P>,
}

/// Poisson distribution over `f64`, raising domain errors.
pub type Poisson = PoissonDistribution<f64, RaiseError>;

/// Poisson distribution over `f32`, raising domain errors.
pub type PoissonF32 = PoissonDistribution<f32, RaiseError>;

impl<T: FloatScalar, P: ErrorPolicy> Default for PoissonDistribution<T, P> {
    /// λ = 1.
    fn default() -> Self {
        Self {
            mean: T::one(),
            discrete_quantile: DiscreteQuantile::default(),
            policy: PhantomData,
        }
    }
}

impl<T: FloatScalar, P: ErrorPolicy> PoissonDistribution<T, P> {
    /// Create a Poisson distribution with mean `mean`.
    ///
    /// The mean must be finite and strictly positive.  Under a policy that
    /// does not raise, the invalid mean is stored anyway and every
    /// evaluator reports against it again.
    pub fn new(mean: T) -> Result<Self> {
        check_mean_positive::<T, P>("PoissonDistribution::new", mean)?;
        Ok(Self {
            mean,
            discrete_quantile: DiscreteQuantile::default(),
            policy: PhantomData,
        })
    }

    /// Same distribution, reporting quantiles as `discrete_quantile` says.
    pub fn with_discrete_quantile(self, discrete_quantile: DiscreteQuantile) -> Self {
        Self {
            discrete_quantile,
            ..self
        }
    }

    /// How quantiles are reported.
    pub fn discrete_quantile(&self) -> DiscreteQuantile {
        self.discrete_quantile
    }

    // ── Moments ──

    /// Mean λ.
    pub fn mean(&self) -> T {
        self.mean
    }

    /// Mode, ⌊λ⌋.
    pub fn mode(&self) -> T {
        self.mean.floor()
    }

    /// Variance (= λ).
    pub fn variance(&self) -> T {
        self.mean
    }

    /// Standard deviation, √λ.
    pub fn standard_deviation(&self) -> T {
        self.variance().sqrt()
    }

    /// Skewness, 1/√λ.
    pub fn skewness(&self) -> T {
        self.mean.sqrt().recip()
    }

    /// Excess kurtosis, 1/λ.
    pub fn kurtosis_excess(&self) -> T {
        self.mean.recip()
    }

    /// Kurtosis, 3 + 1/λ.
    pub fn kurtosis(&self) -> T {
        T::from_real(3.0) + self.kurtosis_excess()
    }

    /// Median, defined as `quantile(0.5)`.
    pub fn median(&self) -> Result<T> {
        self.quantile(T::from_real(0.5))
    }

    /// Values of `k` the evaluators accept.
    pub fn range(&self) -> (T, T) {
        (T::zero(), T::max_value())
    }

    /// Values of `k` over which the cdf rises from 0 to 1.
    pub fn support(&self) -> (T, T) {
        (T::zero(), T::max_value())
    }

    // ── Evaluators ──

    /// Probability mass P(X = k).
    ///
    /// A zero mean yields 0 for every `k`, including `k = 0`.
    pub fn pdf(&self, k: T) -> Result<T> {
        const FUNCTION: &str = "PoissonDistribution::pdf";
        let mean = self.mean;
        check!(check_mean::<T, P>(FUNCTION, mean));
        check!(check_k::<T, P>(FUNCTION, k));

        if mean == T::zero() {
            return Ok(T::zero());
        }
        if k == T::zero() {
            return Ok((-mean).exp());
        }
        if k.floor() == k && k < T::from_real(f64::from(T::MAX_FACTORIAL)) {
            if let Some(mass) = pdf_by_factorial(mean, k) {
                return Ok(mass);
            }
        }
        Ok(pdf_by_log_gamma(mean, k))
    }

    /// Cumulative probability P(X ≤ k).
    pub fn cdf(&self, k: T) -> Result<T> {
        const FUNCTION: &str = "PoissonDistribution::cdf";
        let mean = self.mean;
        check!(check_mean::<T, P>(FUNCTION, mean));
        check!(check_k::<T, P>(FUNCTION, k));

        if mean == T::zero() {
            return Ok(T::zero());
        }
        if k == T::zero() {
            return Ok((-mean).exp());
        }
        Ok(T::from_real(gamma_q(k.to_real() + 1.0, mean.to_real())?))
    }

    /// Upper-tail probability P(X > k), computed without cancellation.
    pub fn cdf_complement(&self, k: T) -> Result<T> {
        const FUNCTION: &str = "PoissonDistribution::cdf_complement";
        let mean = self.mean;
        check!(check_mean::<T, P>(FUNCTION, mean));
        check!(check_k::<T, P>(FUNCTION, k));

        if mean == T::zero() {
            return Ok(T::one());
        }
        if k == T::zero() {
            return Ok(-(-mean).exp_m1());
        }
        Ok(T::from_real(gamma_p(k.to_real() + 1.0, mean.to_real())?))
    }

    /// Smallest `k` with P(X ≤ k) ≥ `p`.
    ///
    /// With [`DiscreteQuantile::Real`] the unrounded solver value is
    /// returned.  `p = 1` yields `T::max_value()`.
    pub fn quantile(&self, p: T) -> Result<T> {
        const FUNCTION: &str = "PoissonDistribution::quantile";
        let mean = self.mean;
        check!(check_probability::<T, P>(FUNCTION, p));
        check!(check_mean_positive::<T, P>(FUNCTION, mean));

        if p <= (-mean).exp() {
            return Ok(T::zero());
        }
        let shape = gamma_q_inva(mean.to_real(), p.to_real())?;
        let guess = Self::shape_to_events(shape);
        match self.discrete_quantile {
            DiscreteQuantile::Real => Ok(guess),
            DiscreteQuantile::IntegerRoundUp => {
                Self::smallest_integer_where(guess, |k| Ok(self.cdf(k)? >= p))
            }
        }
    }

    /// Smallest `k` with P(X > k) ≤ `q`.
    ///
    /// With [`DiscreteQuantile::Real`] the unrounded solver value is
    /// returned.  `q = 0` yields `T::max_value()`.
    pub fn quantile_complement(&self, q: T) -> Result<T> {
        const FUNCTION: &str = "PoissonDistribution::quantile_complement";
        let mean = self.mean;
        check!(check_probability::<T, P>(FUNCTION, q));
        check!(check_mean_positive::<T, P>(FUNCTION, mean));

        if -q <= (-mean).exp_m1() {
            return Ok(T::zero());
        }
        let shape = gamma_p_inva(mean.to_real(), q.to_real())?;
        let guess = Self::shape_to_events(shape);
        match self.discrete_quantile {
            DiscreteQuantile::Real => Ok(guess),
            DiscreteQuantile::IntegerRoundUp => {
                Self::smallest_integer_where(guess, |k| Ok(self.cdf_complement(k)? <= q))
            }
        }
    }

    /// Hazard function, P(X = k) / P(X > k).
    ///
    /// `T::max_value()` once the upper tail underflows to zero.
    pub fn hazard(&self, k: T) -> Result<T> {
        let tail = self.cdf_complement(k)?;
        if tail == T::zero() {
            return Ok(T::max_value());
        }
        Ok(self.pdf(k)? / tail)
    }

    /// Cumulative hazard function, −ln P(X > k).
    pub fn chf(&self, k: T) -> Result<T> {
        Ok(-self.cdf_complement(k)?.ln())
    }

    // ── Quantile helpers ──

    /// Event count `a − 1` for an incomplete-gamma shape `a`.
    fn shape_to_events(shape: f64) -> T {
        if shape.is_infinite() {
            return T::max_value();
        }
        T::from_real(shape - 1.0).max(T::zero())
    }

    /// Smallest non-negative integer accepted by `accept`.
    ///
    /// Gallops outwards from `guess` rounded up until the answer is
    /// bracketed, then bisects over the integers.  `accept` must be
    /// monotone: once true, true for every larger `k`.
    fn smallest_integer_where<F>(guess: T, accept: F) -> Result<T>
    where
        F: Fn(T) -> Result<bool>,
    {
        let (zero, one, two) = (T::zero(), T::one(), T::from_real(2.0));
        let start = guess.ceil().max(zero);
        if start == T::max_value() {
            return Ok(start);
        }
        if !start.is_finite() {
            fail!("quantile search cannot start from {guess}");
        }

        // Invariant: accept(below) is false, accept(above) is true.
        let mut step = one;
        let (mut below, mut above) = if accept(start)? {
            let mut above = start;
            loop {
                if above == zero {
                    return Ok(zero);
                }
                let candidate = (above - step).max(zero);
                if !accept(candidate)? {
                    break (candidate, above);
                }
                above = candidate;
                step = step * two;
            }
        } else {
            let mut below = start;
            loop {
                let candidate = below + step;
                if !candidate.is_finite() {
                    fail!("quantile search found no accepted value above {below}");
                }
                if accept(candidate)? {
                    break (below, candidate);
                }
                below = candidate;
                step = step * two;
            }
        };

        while above - below > one {
            let mid = ((below + above) / two).floor();
            if mid <= below || mid >= above {
                break;
            }
            if accept(mid)? {
                above = mid;
            } else {
                below = mid;
            }
        }
        Ok(above)
    }
}
