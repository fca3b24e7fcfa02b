use crate::traits::{
    AlgebraicComplete, ComplexLikeSystem, Continuum, NewtonMethodAppliable, Number,
};
use num_complex::Complex;
use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// Capability impls for the stock scalar types. No numeric types are
/// defined here; the crate only teaches external scalars its contracts.
///
/// Random samples are drawn uniformly from `[0, 1000)` per real component,
/// wide enough that the pairwise-distinct sampling in the probabilistic
/// zero test terminates quickly.
const RANDOM_SPAN: f64 = 1000.0;

macro_rules! impl_real_field {
    ($($t:ty),*) => {$(
        impl Number for $t {
            fn absolute(self) -> f64 {
                f64::from(self.abs())
            }

            fn random_element() -> Self {
                (rand::random::<f64>() * RANDOM_SPAN) as $t
            }
        }

        impl Continuum for $t {
            fn scale(self, factor: f64) -> Self {
                self * factor as $t
            }

            fn from_real(value: f64) -> Self {
                value as $t
            }
        }

        // Asserted, not true in the strict sense: the reals are not
        // algebraically closed. Callers factoring over a real float accept
        // that full factorization only terminates for real-rooted inputs.
        impl AlgebraicComplete for $t {}

        impl NewtonMethodAppliable for $t {}

        impl ComplexLikeSystem for $t {
            fn conjugate(self) -> Self {
                self
            }
        }
    )*};
}

impl_real_field!(f64, f32);

impl<T> Number for Complex<T>
where
    T: Float + FromPrimitive + Debug + 'static,
{
    fn absolute(self) -> f64 {
        self.norm().to_f64().unwrap_or(f64::NAN)
    }

    fn random_element() -> Self {
        Complex::new(
            T::from_f64(rand::random::<f64>() * RANDOM_SPAN).unwrap(),
            T::from_f64(rand::random::<f64>() * RANDOM_SPAN).unwrap(),
        )
    }
}

impl<T> Continuum for Complex<T>
where
    T: Float + FromPrimitive + Debug + 'static,
{
    fn scale(self, factor: f64) -> Self {
        self * T::from_f64(factor).unwrap()
    }

    fn from_real(value: f64) -> Self {
        Complex::new(T::from_f64(value).unwrap(), T::zero())
    }
}

impl<T> AlgebraicComplete for Complex<T> where T: Float + FromPrimitive + Debug + 'static {}

impl<T> NewtonMethodAppliable for Complex<T> where T: Float + FromPrimitive + Debug + 'static {}

impl<T> ComplexLikeSystem for Complex<T>
where
    T: Float + FromPrimitive + Debug + 'static,
{
    fn conjugate(self) -> Self {
        self.conj()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{One, Zero};

    #[test]
    fn real_magnitude_is_nonnegative() {
        assert_eq!((-3.5f64).absolute(), 3.5);
        assert_eq!(0.0f64.absolute(), 0.0);
        assert_eq!((-2.0f32).absolute(), 2.0);
    }

    #[test]
    fn real_scale_and_embedding_agree() {
        let x = f64::from_real(2.5);
        assert_eq!(x, 2.5);
        assert_eq!(x.scale(4.0), 10.0);
        assert_eq!(f32::from_real(1.5).scale(2.0), 3.0f32);
    }

    #[test]
    fn real_conjugation_is_identity() {
        assert_eq!(7.25f64.conjugate(), 7.25);
    }

    #[test]
    fn complex_modulus_and_conjugate() {
        let z = Complex::new(3.0f64, 4.0);
        assert!((z.absolute() - 5.0).abs() < 1e-12);
        assert_eq!(z.conjugate(), Complex::new(3.0, -4.0));
    }

    #[test]
    fn complex_embedding_has_no_imaginary_part() {
        let z = Complex::<f64>::from_real(2.0);
        assert_eq!(z, Complex::new(2.0, 0.0));
        assert_eq!(z.scale(0.5), Complex::new(1.0, 0.0));
    }

    #[test]
    fn random_samples_stay_in_span() {
        for _ in 0..32 {
            let x = f64::random_element();
            assert!((0.0..RANDOM_SPAN).contains(&x));
            let z = Complex::<f64>::random_element();
            assert!(z.re >= 0.0 && z.re < RANDOM_SPAN);
            assert!(z.im >= 0.0 && z.im < RANDOM_SPAN);
        }
    }

    #[test]
    fn ring_identities_come_from_num_traits() {
        assert_eq!(<f64 as Zero>::zero(), 0.0);
        assert_eq!(<Complex<f64> as One>::one(), Complex::new(1.0, 0.0));
    }
}
