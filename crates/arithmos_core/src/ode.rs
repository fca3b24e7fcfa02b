use crate::error::AlgebraError;
use crate::traits::Continuum;
use crate::vector::Vector;

/// An initial-value problem `dy/dt = f(y)` over a field-valued state.
///
/// Immutable bundle of the declared dimension, the initial state, and a
/// pure right-hand side. Built once, then consumed by [`solve`].
///
/// [`solve`]: OrdinaryDifferentialEquationSystem::solve
pub struct OrdinaryDifferentialEquationSystem<F, R>
where
    F: Continuum,
    R: Fn(&Vector<F>) -> Vector<F>,
{
    dimension: usize,
    initial: Vector<F>,
    right_hand_side: R,
}

impl<F, R> OrdinaryDifferentialEquationSystem<F, R>
where
    F: Continuum,
    R: Fn(&Vector<F>) -> Vector<F>,
{
    /// Validates that the initial state matches the declared dimension;
    /// a mismatch is rejected here rather than surfacing mid-integration.
    pub fn new(
        dimension: usize,
        initial: Vector<F>,
        right_hand_side: R,
    ) -> Result<Self, AlgebraError> {
        if initial.len() != dimension {
            return Err(AlgebraError::DimensionMismatch {
                expected: dimension,
                actual: initial.len(),
            });
        }
        Ok(Self {
            dimension,
            initial,
            right_hand_side,
        })
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn initial(&self) -> &Vector<F> {
        &self.initial
    }

    /// Integrates with the classical fixed-step RK4 scheme from time 0,
    /// recording every post-step state, until accumulated time exceeds
    /// `until`.
    ///
    /// The update is the standard accumulating rule
    /// `y ← y + h/6·(k1 + 2k2 + 2k3 + k4)`.
    pub fn solve(&self, until: f64, step: f64) -> Vec<Vector<F>> {
        let f = &self.right_hand_side;
        let mut trajectory = Vec::new();
        let mut time = 0.0;
        let mut state = self.initial.clone();
        while time <= until {
            time += step;
            let k1 = f(&state);
            let k2 = f(&(&state + k1.scale(step / 2.0)));
            let k3 = f(&(&state + k2.scale(step / 2.0)));
            let k4 = f(&(&state + k3.scale(step)));
            let increment = k1.scale(step / 6.0)
                + k2.scale(step / 3.0)
                + k3.scale(step / 3.0)
                + k4.scale(step / 6.0);
            state = &state + increment;
            trajectory.push(state.clone());
        }
        trajectory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_rejects_dimension_mismatch() {
        let result = OrdinaryDifferentialEquationSystem::new(
            3,
            Vector::new(vec![1.0f64, 2.0]),
            |state: &Vector<f64>| state.clone(),
        );
        match result.err() {
            Some(AlgebraError::DimensionMismatch { expected, actual }) => {
                assert_eq!(expected, 3);
                assert_eq!(actual, 2);
            }
            other => panic!("expected a dimension mismatch, got {:?}", other),
        }
    }

    #[test]
    fn zero_right_hand_side_pins_the_trajectory() {
        let initial = Vector::new(vec![2.0f64, -1.0]);
        let system = OrdinaryDifferentialEquationSystem::new(2, initial.clone(), |_: &Vector<f64>| {
            Vector::zeros(2)
        })
        .expect("dimensions match");
        let trajectory = system.solve(1.0, 0.1);
        assert!(!trajectory.is_empty());
        for state in &trajectory {
            assert_eq!(state, &initial);
        }
    }

    #[test]
    fn exponential_growth_reaches_e_at_unit_time() {
        let system = OrdinaryDifferentialEquationSystem::new(
            1,
            Vector::new(vec![1.0f64]),
            |state: &Vector<f64>| state.clone(),
        )
        .expect("dimensions match");
        let trajectory = system.solve(1.0, 0.01);
        let last = trajectory.last().expect("at least one step");
        // The endpoint lands within one step of t = 1, so compare loosely.
        assert!((last[0] - std::f64::consts::E).abs() < 5e-2);
    }

    #[test]
    fn harmonic_oscillator_returns_after_a_full_period() {
        // y'' = −y as the system (y, v)' = (v, −y), starting at (1, 0).
        let system = OrdinaryDifferentialEquationSystem::new(
            2,
            Vector::new(vec![1.0f64, 0.0]),
            |state: &Vector<f64>| Vector::new(vec![state[1], -state[0]]),
        )
        .expect("dimensions match");
        let step = 0.001;
        let period = 2.0 * std::f64::consts::PI;
        let trajectory = system.solve(period, step);
        let last = trajectory.last().expect("at least one step");
        assert!((last[0] - 1.0).abs() < 1e-2);
        assert!(last[1].abs() < 1e-2);
    }

    #[test]
    fn every_intermediate_state_is_recorded() {
        let system = OrdinaryDifferentialEquationSystem::new(
            1,
            Vector::new(vec![1.0f64]),
            |state: &Vector<f64>| state.clone(),
        )
        .expect("dimensions match");
        let trajectory = system.solve(1.0, 0.25);
        // Steps run while accumulated time has not yet exceeded the
        // horizon: t = 0, 0.25, 0.5, 0.75, 1.0 all start a step.
        assert_eq!(trajectory.len(), 5);
    }
}
