use crate::traits::{Continuum, Number};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::{Add, Mul, Sub};

/// A sparse polynomial over a field-like type.
///
/// Coefficients are stored by exponent; absent exponents denote an implicit
/// zero coefficient. Invariant: the map never stores a zero coefficient and
/// `degree` equals the largest stored exponent (0 for the empty map, which
/// represents the zero polynomial). Every constructor and operator
/// re-normalizes instead of trusting a carried-forward degree bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawPolynomial<F>")]
pub struct Polynomial<F: Number> {
    coefficients: BTreeMap<usize, F>,
    degree: usize,
}

/// Wire shape of a polynomial. Deserialization routes through this so the
/// normalizing constructor runs: zero coefficients from hand-edited data
/// are dropped and the cached degree is recomputed, never trusted.
#[derive(Deserialize)]
struct RawPolynomial<F: Number> {
    coefficients: BTreeMap<usize, F>,
    // Accepted for wire compatibility with the serialized form, then
    // recomputed from the coefficients.
    #[allow(dead_code)]
    #[serde(default)]
    degree: usize,
}

impl<F: Number> From<RawPolynomial<F>> for Polynomial<F> {
    fn from(raw: RawPolynomial<F>) -> Self {
        Self::from_map(raw.coefficients)
    }
}

impl<F: Number> Polynomial<F> {
    /// Builds a polynomial from an exponent→coefficient map, dropping zero
    /// coefficients and computing the degree from what remains.
    pub fn new(coefficients: BTreeMap<usize, F>) -> Self {
        Self::from_map(coefficients)
    }

    fn from_map(mut coefficients: BTreeMap<usize, F>) -> Self {
        coefficients.retain(|_, c| !c.is_zero());
        let degree = coefficients.keys().next_back().copied().unwrap_or(0);
        Self {
            coefficients,
            degree,
        }
    }

    /// The zero polynomial.
    pub fn zero() -> Self {
        Self {
            coefficients: BTreeMap::new(),
            degree: 0,
        }
    }

    /// The identity polynomial `x`.
    pub fn identity() -> Self {
        Self::from_map(BTreeMap::from([(1, F::one())]))
    }

    /// The constant polynomial `c`.
    pub fn constant(c: F) -> Self {
        Self::from_map(BTreeMap::from([(0, c)]))
    }

    /// Highest exponent with a nonzero coefficient (0 for the zero
    /// polynomial).
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Coefficient at `exponent`, implicit zeros included.
    pub fn coefficient(&self, exponent: usize) -> F {
        self.coefficients
            .get(&exponent)
            .copied()
            .unwrap_or_else(F::zero)
    }

    /// Coefficient of the degree term. Zero only for the zero polynomial.
    pub fn leading_coefficient(&self) -> F {
        self.coefficient(self.degree)
    }

    /// Structural test: no tracked coefficients at all.
    pub fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Evaluates `Σ cᵢ·xⁱ` with a running power of `x`.
    pub fn evaluate(&self, x: F) -> F {
        let mut acc = F::zero();
        let mut power = F::one();
        for i in 0..=self.degree {
            if let Some(&c) = self.coefficients.get(&i) {
                acc = acc + c * power;
            }
            power = power * x;
        }
        acc
    }

    /// Multiplies every coefficient by `factor`. A zero factor
    /// short-circuits to the zero polynomial.
    pub fn scaled(&self, factor: F) -> Self {
        if factor.is_zero() {
            return Self::zero();
        }
        Self::from_map(
            self.coefficients
                .iter()
                .map(|(&i, &c)| (i, c * factor))
                .collect(),
        )
    }

    /// Decides whether the polynomial is identically zero by evaluating it
    /// at `degree + 1` pairwise-distinct random points: a nonzero
    /// polynomial of degree ≤ n has at most n roots, so agreement with
    /// zero at n+1 distinct points forces the zero polynomial.
    ///
    /// The agreement check is exact equality by design, which is fragile
    /// for floating-point-backed fields near (but not at) zero.
    pub fn is_identically_zero(&self) -> bool {
        let mut samples: Vec<F> = Vec::with_capacity(self.degree + 1);
        samples.push(F::random_element());
        while samples.len() < self.degree + 1 {
            let candidate = F::random_element();
            if samples.iter().all(|&s| s != candidate) {
                samples.push(candidate);
            }
        }
        samples.iter().all(|&s| self.evaluate(s).is_zero())
    }
}

impl<F: Continuum> Polynomial<F> {
    /// The derivative polynomial: coefficient `cᵢ·i` at exponent `i − 1`.
    pub fn derivative(&self) -> Self {
        let mut coefficients = BTreeMap::new();
        for i in 1..=self.degree {
            if let Some(&c) = self.coefficients.get(&i) {
                coefficients.insert(i - 1, c * F::from_real(i as f64));
            }
        }
        Self::from_map(coefficients)
    }

    /// Evaluates the derivative at `x` directly, accumulating
    /// `cᵢ·i·x^{i−1}` without materializing the derivative polynomial.
    /// Numerically equivalent to `self.derivative().evaluate(x)`.
    pub fn evaluate_derivative(&self, x: F) -> F {
        let mut acc = F::zero();
        let mut power = F::one();
        for i in 1..=self.degree {
            if let Some(&c) = self.coefficients.get(&i) {
                acc = acc + c * F::from_real(i as f64) * power;
            }
            power = power * x;
        }
        acc
    }
}

impl<F: Number> Add for Polynomial<F> {
    type Output = Polynomial<F>;

    fn add(self, rhs: Polynomial<F>) -> Polynomial<F> {
        let mut coefficients = self.coefficients;
        for (i, c) in rhs.coefficients {
            let sum = match coefficients.get(&i) {
                Some(&existing) => existing + c,
                None => c,
            };
            coefficients.insert(i, sum);
        }
        Polynomial::from_map(coefficients)
    }
}

impl<F: Number> Sub for Polynomial<F> {
    type Output = Polynomial<F>;

    fn sub(self, rhs: Polynomial<F>) -> Polynomial<F> {
        self + rhs.scaled(-F::one())
    }
}

impl<F: Number> Mul for Polynomial<F> {
    type Output = Polynomial<F>;

    /// Convolution: every coefficient pair `(i, j)` accumulates into
    /// exponent `i + j`. Cancellation can make the true degree fall short
    /// of `degreeA + degreeB`, so the result is re-normalized.
    fn mul(self, rhs: Polynomial<F>) -> Polynomial<F> {
        let mut coefficients: BTreeMap<usize, F> = BTreeMap::new();
        for (&i, &a) in &self.coefficients {
            for (&j, &b) in &rhs.coefficients {
                let term = a * b;
                let sum = match coefficients.get(&(i + j)) {
                    Some(&existing) => existing + term,
                    None => term,
                };
                coefficients.insert(i + j, sum);
            }
        }
        Polynomial::from_map(coefficients)
    }
}

impl<F: Number> Mul<F> for Polynomial<F> {
    type Output = Polynomial<F>;

    fn mul(self, rhs: F) -> Polynomial<F> {
        self.scaled(rhs)
    }
}
