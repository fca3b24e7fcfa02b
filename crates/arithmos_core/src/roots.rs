use crate::error::AlgebraError;
use crate::polynomial::Polynomial;
use crate::traits::{AlgebraicComplete, NewtonMethodAppliable, Number};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Factor by which the caller's tolerance is tightened for the Newton runs
/// inside full factorization, compensating for deflation error buildup.
const FACTORIZATION_TIGHTENING: f64 = 1e-10;

/// Budget and tolerance for a Newton-Raphson root search.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NewtonSettings {
    pub epsilon: f64,
    pub max_iterations: usize,
}

impl Default for NewtonSettings {
    fn default() -> Self {
        Self {
            epsilon: 1e-10,
            max_iterations: 10_000,
        }
    }
}

/// A root together with how many times it was deflated out of the
/// polynomial before the residual stopped vanishing there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RootRecord<F: Number> {
    pub root: F,
    pub multiplicity: usize,
}

impl<F: Number> Polynomial<F> {
    /// The minimal linear factor with root `root`, scaled by `normal`:
    /// `normal·x − normal·root`. A zero `normal` degenerately yields the
    /// zero polynomial by policy rather than failing.
    pub fn root_factor(root: F, normal: F) -> Self {
        if normal.is_zero() {
            return Self::zero();
        }
        Self::new(BTreeMap::from([(1, normal), (0, -root * normal)]))
    }

    /// One synthetic-division step: divides out the linear factor
    /// `(x − root)`, discarding the remainder. Quotient coefficients run
    /// top down as `bᵢ = aᵢ₊₁ + root·bᵢ₊₁`.
    fn synthetic_division(&self, root: F) -> Self {
        let mut quotient = BTreeMap::new();
        let mut carry = F::zero();
        for i in (0..self.degree()).rev() {
            let b = self.coefficient(i + 1) + root * carry;
            if !b.is_zero() {
                quotient.insert(i, b);
            }
            carry = b;
        }
        Self::new(quotient)
    }

    /// Epsilon-tolerant deflation: while the polynomial's magnitude at
    /// `root` stays below `epsilon`, divide out `(x − root)` and count the
    /// removal. Returns the deflated polynomial and the multiplicity.
    pub fn deflate(&self, root: F, epsilon: f64) -> (Self, usize) {
        let mut poly = self.clone();
        let mut multiplicity = 0;
        while poly.degree() > 0 && poly.evaluate(root).absolute() < epsilon {
            poly = poly.synthetic_division(root);
            multiplicity += 1;
        }
        (poly, multiplicity)
    }

    /// Deflation gated on exact equality with the additive identity
    /// instead of a tolerance, for roots known exactly. Exact equality is
    /// fragile for floating-point-backed fields: a residual that is merely
    /// near zero stops the loop.
    pub fn exact_deflate(&self, root: F) -> (Self, usize) {
        let mut poly = self.clone();
        let mut multiplicity = 0;
        while poly.degree() > 0 && poly.evaluate(root).is_zero() {
            poly = poly.synthetic_division(root);
            multiplicity += 1;
        }
        (poly, multiplicity)
    }
}

impl<F: NewtonMethodAppliable> Polynomial<F> {
    /// Newton-Raphson iteration from `guess`: update
    /// `y ← y − f(y)/f′(y)`, converge once `|f(y)| < epsilon`. Spending
    /// the whole iteration budget without converging is reported as
    /// [`AlgebraError::NonConvergence`], never a panic.
    pub fn find_root(&self, guess: F, settings: NewtonSettings) -> Result<F, AlgebraError> {
        let mut y = guess;
        let mut value = self.evaluate(y);
        for _ in 0..settings.max_iterations {
            y = y - value / self.evaluate_derivative(y);
            value = self.evaluate(y);
            if value.absolute() < settings.epsilon {
                return Ok(y);
            }
        }
        Err(AlgebraError::NonConvergence {
            max_iterations: settings.max_iterations,
            residual: value.absolute(),
        })
    }
}

impl<F: NewtonMethodAppliable + AlgebraicComplete> Polynomial<F> {
    /// Full factorization: repeatedly seed Newton-Raphson at a random
    /// point with a tolerance tightened well below `settings.epsilon`,
    /// deflate the working polynomial at the found root with the caller's
    /// tolerance, and accumulate multiplicities until they sum to the
    /// original degree. Records come back in discovery order.
    ///
    /// A single Newton failure on an intermediate deflated polynomial
    /// aborts the whole factorization; there is no reseed-and-retry.
    pub fn find_all_roots(
        &self,
        settings: NewtonSettings,
    ) -> Result<Vec<RootRecord<F>>, AlgebraError> {
        let tightened = NewtonSettings {
            epsilon: settings.epsilon * FACTORIZATION_TIGHTENING,
            ..settings
        };
        let mut working = self.clone();
        let mut found = 0;
        let mut records = Vec::new();
        while found < self.degree() {
            let seed = F::random_element();
            let root = working.find_root(seed, tightened)?;
            let (quotient, multiplicity) = working.deflate(root, settings.epsilon);
            log::debug!(
                "deflated root {:?} (multiplicity {}), residual degree {}",
                root,
                multiplicity,
                quotient.degree()
            );
            working = quotient;
            found += multiplicity;
            records.push(RootRecord { root, multiplicity });
        }
        Ok(records)
    }
}
