use nalgebra::DVector;

use crate::{
    models::{cast_vec, check_params, OdeModel},
    problem::robertson::{X1, X2, X3},
    ConfigurationError, OutputTable, Scalar,
};

/// Three-species chemical kinetics, a standard stiff test problem (p = [k1, k2, k3]):
///
/// ```text
/// dy1/dt = -k1*y1 + k2*y2*y3
/// dy2/dt =  k1*y1 - k2*y2*y3 - k3*y2^2
/// dy3/dt =  k3*y2^2
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Robertson<T: Scalar = f64> {
    p: DVector<T>,
}

impl<T: Scalar> Robertson<T> {
    pub fn new(p: DVector<T>) -> Result<Self, ConfigurationError> {
        check_params(&p, 3)?;
        Ok(Self { p })
    }
}

impl<T: Scalar> Default for Robertson<T> {
    /// k1 = 0.04, k2 = 1.0e4, k3 = 3.0e7
    fn default() -> Self {
        Self {
            p: cast_vec(&[0.04, 1.0e4, 3.0e7]),
        }
    }
}

impl<T: Scalar> OdeModel<T> for Robertson<T> {
    fn name(&self) -> &'static str {
        "Robertson"
    }

    fn state_names(&self) -> Vec<&'static str> {
        vec!["y1", "y2", "y3"]
    }

    fn parameter_names(&self) -> Vec<&'static str> {
        vec!["k1", "k2", "k3"]
    }

    fn params(&self) -> &DVector<T> {
        &self.p
    }

    fn default_initial_state(&self) -> DVector<T> {
        cast_vec(&[X1, X2, X3])
    }

    fn rhs(&self, _t: T, y: &DVector<T>, dydt: &mut DVector<T>) {
        debug_assert_eq!(y.len(), 3);
        debug_assert_eq!(dydt.len(), 3);
        let (k1, k2, k3) = (self.p[0], self.p[1], self.p[2]);
        dydt[0] = -k1 * y[0] + k2 * y[1] * y[2];
        dydt[1] = k1 * y[0] - k2 * y[1] * y[2] - k3 * y[1] * y[1];
        dydt[2] = k3 * y[1] * y[1];
    }
}

/// Published solution of [Robertson] at `t0` and at each default output time, to 7 significant figures.
pub fn robertson_reference_solution() -> OutputTable<f64> {
    let data = [
        (0.0, [1.0, 0.0, 0.0]),
        (0.4, [9.851641e-01, 3.386242e-05, 1.480205e-02]),
        (4.0, [9.055097e-01, 2.240338e-05, 9.446793e-02]),
        (40.0, [7.158017e-01, 9.185037e-06, 2.841892e-01]),
        (400.0, [4.505360e-01, 3.223271e-06, 5.494608e-01]),
        (4000.0, [1.832299e-01, 8.944378e-07, 8.167692e-01]),
        (40000.0, [3.898902e-02, 1.622006e-07, 9.610108e-01]),
        (400000.0, [4.936383e-03, 1.984224e-08, 9.950636e-01]),
        (4000000.0, [5.168093e-04, 2.068293e-09, 9.994832e-01]),
        (4.0e7, [5.202440e-05, 2.081083e-10, 9.999480e-01]),
        (4.0e8, [5.201061e-06, 2.080435e-11, 9.999948e-01]),
        (4.0e9, [5.258603e-07, 2.103442e-12, 9.999995e-01]),
        (4.0e10, [6.934511e-08, 2.773804e-13, 9.999999e-01]),
    ];
    let mut soln = OutputTable::default();
    for (t, y) in data {
        soln.push(t, DVector::from_vec(y.to_vec()));
    }
    soln
}
