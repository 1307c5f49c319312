use nalgebra::DVector;

use crate::{
    models::{cast_vec, check_params, OdeModel},
    ConfigurationError, Scalar,
};

/// Reversible conversion `A <-> B` together with the association `A + B <-> C`:
///
/// ```text
/// dA/dt = -k1*A + k2*B - k3*A*B + k4*C
/// dB/dt =  k1*A - k2*B - k3*A*B + k4*C
/// dC/dt =  k3*A*B - k4*C
/// ```
///
/// `A + B + 2*C` is conserved.
#[derive(Debug, Clone, PartialEq)]
pub struct ToyModel<T: Scalar = f64> {
    p: DVector<T>,
}

impl<T: Scalar> ToyModel<T> {
    pub fn new(p: DVector<T>) -> Result<Self, ConfigurationError> {
        check_params(&p, 4)?;
        Ok(Self { p })
    }
}

impl<T: Scalar> Default for ToyModel<T> {
    fn default() -> Self {
        Self {
            p: cast_vec(&[0.1; 4]),
        }
    }
}

impl<T: Scalar> OdeModel<T> for ToyModel<T> {
    fn name(&self) -> &'static str {
        "ToyModel"
    }

    fn state_names(&self) -> Vec<&'static str> {
        vec!["A", "B", "C"]
    }

    fn parameter_names(&self) -> Vec<&'static str> {
        vec!["k1", "k2", "k3", "k4"]
    }

    fn params(&self) -> &DVector<T> {
        &self.p
    }

    fn rhs(&self, _t: T, y: &DVector<T>, dydt: &mut DVector<T>) {
        debug_assert_eq!(y.len(), 3);
        debug_assert_eq!(dydt.len(), 3);
        let (k1, k2, k3, k4) = (self.p[0], self.p[1], self.p[2], self.p[3]);
        let (a, b, c) = (y[0], y[1], y[2]);
        let assoc = k3 * a * b - k4 * c;
        dydt[0] = -k1 * a + k2 * b - assoc;
        dydt[1] = k1 * a - k2 * b - assoc;
        dydt[2] = assoc;
    }
}
