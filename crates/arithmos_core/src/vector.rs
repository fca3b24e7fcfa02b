use crate::traits::{ComplexLikeSystem, Continuum, Number};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Index, Sub};

/// A fixed-length ordered sequence of field elements.
///
/// The length is set at construction and never changes; elementwise
/// operations on vectors of different lengths are programming errors and
/// panic. Used as ODE state and as a generic tuple of field values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector<F: Number> {
    contents: Vec<F>,
}

impl<F: Number> Vector<F> {
    pub fn new(contents: Vec<F>) -> Self {
        Self { contents }
    }

    /// A vector of `len` additive identities.
    pub fn zeros(len: usize) -> Self {
        Self {
            contents: vec![F::zero(); len],
        }
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub fn contents(&self) -> &[F] {
        &self.contents
    }

    /// Applies `op` to every component.
    pub fn map(&self, op: impl Fn(F) -> F) -> Self {
        Self {
            contents: self.contents.iter().map(|&c| op(c)).collect(),
        }
    }

    fn zip_with(&self, other: &Self, op: impl Fn(F, F) -> F) -> Self {
        assert_eq!(
            self.len(),
            other.len(),
            "elementwise operation on vectors of different lengths"
        );
        Self {
            contents: self
                .contents
                .iter()
                .zip(&other.contents)
                .map(|(&a, &b)| op(a, b))
                .collect(),
        }
    }

    /// Euclidean norm through the field's real magnitude.
    pub fn norm(&self) -> f64 {
        self.contents
            .iter()
            .map(|c| {
                let m = c.absolute();
                m * m
            })
            .sum::<f64>()
            .sqrt()
    }

    /// Multiplies every component by a field element.
    pub fn scale_by(&self, factor: F) -> Self {
        self.map(|c| c * factor)
    }
}

impl<F: Continuum> Vector<F> {
    /// Multiplies every component by a real scalar.
    pub fn scale(&self, factor: f64) -> Self {
        self.map(|c| c.scale(factor))
    }

    /// Rescales to unit norm. A zero vector is returned unchanged.
    pub fn normalize(&self) -> Self {
        let norm = self.norm();
        if norm > 0.0 {
            self.scale(1.0 / norm)
        } else {
            self.clone()
        }
    }
}

impl<F: ComplexLikeSystem> Vector<F> {
    /// Conjugated inner product `Σ aᵢ·conj(bᵢ)`.
    pub fn inner(&self, other: &Self) -> F {
        assert_eq!(
            self.len(),
            other.len(),
            "inner product of vectors of different lengths"
        );
        self.contents
            .iter()
            .zip(&other.contents)
            .map(|(&a, &b)| a * b.conjugate())
            .fold(F::zero(), |acc, term| acc + term)
    }
}

impl<F: Number> Index<usize> for Vector<F> {
    type Output = F;

    fn index(&self, index: usize) -> &F {
        &self.contents[index]
    }
}

impl<F: Number> Add for Vector<F> {
    type Output = Vector<F>;

    fn add(self, rhs: Vector<F>) -> Vector<F> {
        self.zip_with(&rhs, |a, b| a + b)
    }
}

impl<F: Number> Add<Vector<F>> for &Vector<F> {
    type Output = Vector<F>;

    fn add(self, rhs: Vector<F>) -> Vector<F> {
        self.zip_with(&rhs, |a, b| a + b)
    }
}

impl<F: Number> Sub for Vector<F> {
    type Output = Vector<F>;

    fn sub(self, rhs: Vector<F>) -> Vector<F> {
        self.zip_with(&rhs, |a, b| a - b)
    }
}
