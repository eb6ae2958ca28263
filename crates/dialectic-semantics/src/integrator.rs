//! Fixed-step fourth-order Runge–Kutta integrator

use crate::model::DynamicalSystem;

/// Classic RK4 stepper with reusable stage buffers
///
/// ```text
/// k1 = F(S)
/// k2 = F(S + δ/2·k1)
/// k3 = F(S + δ/2·k2)
/// k4 = F(S + δ·k3)
/// S' = clamp(S + δ/6·(k1 + 2·k2 + 2·k3 + k4), 0, 1)
/// ```
#[derive(Debug, Clone)]
pub struct Rk4 {
    k1: Vec<f64>,
    k2: Vec<f64>,
    k3: Vec<f64>,
    k4: Vec<f64>,
    stage: Vec<f64>,
}

impl Rk4 {
    /// Allocate buffers for a state vector of length `dimension`
    pub fn new(dimension: usize) -> Self {
        Self {
            k1: vec![0.0; dimension],
            k2: vec![0.0; dimension],
            k3: vec![0.0; dimension],
            k4: vec![0.0; dimension],
            stage: vec![0.0; dimension],
        }
    }

    /// Advance `state` by one step of size `delta`, in place
    ///
    /// Returns the largest absolute change of any component, measured after
    /// clamping. `state.len()` must equal the system's dimension and the
    /// dimension this stepper was created with.
    pub fn step<S: DynamicalSystem>(&mut self, system: &S, state: &mut [f64], delta: f64) -> f64 {
        debug_assert_eq!(state.len(), system.dimension());
        debug_assert_eq!(state.len(), self.k1.len());

        let half = delta / 2.0;

        system.derivative(state, &mut self.k1);

        offset(&mut self.stage, state, &self.k1, half);
        system.derivative(&self.stage, &mut self.k2);

        offset(&mut self.stage, state, &self.k2, half);
        system.derivative(&self.stage, &mut self.k3);

        offset(&mut self.stage, state, &self.k3, delta);
        system.derivative(&self.stage, &mut self.k4);

        let sixth = delta / 6.0;
        let mut max_change = 0.0_f64;
        for (i, s) in state.iter_mut().enumerate() {
            let slope = self.k1[i] + 2.0 * self.k2[i] + 2.0 * self.k3[i] + self.k4[i];
            let next = (*s + sixth * slope).clamp(0.0, 1.0);
            max_change = max_change.max((next - *s).abs());
            *s = next;
        }

        max_change
    }
}

/// `out = base + scale * slope`
fn offset(out: &mut [f64], base: &[f64], slope: &[f64], scale: f64) {
    for ((o, b), k) in out.iter_mut().zip(base).zip(slope) {
        *o = b + scale * k;
    }
}
