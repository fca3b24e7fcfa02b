use num_traits::{One, Zero};
use std::fmt::Debug;
use std::ops::{Div, Neg, Sub};

/// The weakest capability tier: a value that supports ring arithmetic,
/// exposes a non-negative real magnitude, and can produce random samples.
///
/// Equality is exact value equality, not an approximate comparison. The
/// probabilistic zero test and `exact_deflate` rely on this, which is
/// fragile for floating-point-backed fields near (but not at) zero.
pub trait Number:
    Copy + PartialEq + Debug + Zero + One + Sub<Output = Self> + Neg<Output = Self> + 'static
{
    /// Non-negative real magnitude of the value.
    fn absolute(self) -> f64;

    /// Draws a random sample, used to seed Newton iteration and to pick
    /// evaluation points for the probabilistic zero test.
    fn random_element() -> Self;
}

/// A `Number` that embeds the real line: it can be scaled by a real factor
/// and constructed from a real value. Required by anything doing
/// calculus-flavored arithmetic (derivatives, RK4 stepping).
pub trait Continuum: Number {
    /// Multiplies the value by a real scalar.
    fn scale(self, factor: f64) -> Self;

    /// Embeds a real number into the type.
    fn from_real(value: f64) -> Self;
}

/// Caller-asserted claim that a degree-n polynomial over the type has
/// exactly n roots counted with multiplicity.
///
/// Nothing is verified at runtime; full factorization over a type that does
/// not actually satisfy closure is the caller's judgement call.
pub trait AlgebraicComplete: Continuum {}

/// A `Continuum` with division, as required by the Newton-Raphson update
/// step `x − f(x)/f′(x)`.
pub trait NewtonMethodAppliable: Continuum + Div<Output = Self> {}

/// A `Number` with a conjugation involution, used by the conjugated inner
/// product on vectors.
pub trait ComplexLikeSystem: Number {
    fn conjugate(self) -> Self;
}
