pub mod error;
pub mod fields;
pub mod ode;
pub mod polynomial;
pub mod roots;
/// The `arithmos_core` crate is a generic algebraic computation engine.
/// Every algorithm is parameterized over the weakest capability tier it
/// needs, so the same code serves real scalars, complex numbers, or any
/// caller-supplied type that earns the contracts.
///
/// Key components:
/// - **Traits**: the capability tiers (`Number`, `Continuum`,
///   `AlgebraicComplete`, `NewtonMethodAppliable`, `ComplexLikeSystem`).
/// - **Fields**: capability impls for `f64`, `f32`, and `Complex<T>`.
/// - **Polynomial**: sparse exponent→coefficient polynomials with
///   evaluation, derivative, and a probabilistic zero test.
/// - **Roots**: Newton-Raphson iteration, synthetic-division deflation,
///   and a full-factorization driver.
/// - **Ode**: fixed-step RK4 integration over `Vector<F>` state.
pub mod traits;
pub mod vector;
