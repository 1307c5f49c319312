use nalgebra::DVector;

use crate::{
    models::{cast_vec, check_params, OdeModel},
    ConfigurationError, Scalar,
};

/// Binding, internalisation and degradation of erythropoietin (Epo) by its receptor (EpoR).
///
/// Parameters are the association and dissociation rates `kon`, `koff`, the re-export rate `kex`,
/// receptor turnover `kt`, internalisation `ke`, the intracellular and extracellular degradation
/// rates `kdi`, `kde`, and the steady-state receptor level `EpoR0`. Total Epo
/// (`Epo + EpoEpoR + EpoEpoRi + dEpoi + dEpoe`) is conserved.
#[derive(Debug, Clone, PartialEq)]
pub struct EpoEpoR<T: Scalar = f64> {
    p: DVector<T>,
}

impl<T: Scalar> EpoEpoR<T> {
    pub fn new(p: DVector<T>) -> Result<Self, ConfigurationError> {
        check_params(&p, 8)?;
        Ok(Self { p })
    }
}

impl<T: Scalar> Default for EpoEpoR<T> {
    fn default() -> Self {
        Self {
            p: cast_vec(&[0.1; 8]),
        }
    }
}

impl<T: Scalar> OdeModel<T> for EpoEpoR<T> {
    fn name(&self) -> &'static str {
        "EpoEpoR"
    }

    fn state_names(&self) -> Vec<&'static str> {
        vec!["Epo", "EpoR", "EpoEpoR", "EpoEpoRi", "dEpoi", "dEpoe"]
    }

    fn parameter_names(&self) -> Vec<&'static str> {
        vec!["kon", "koff", "kex", "kt", "ke", "kdi", "kde", "EpoR0"]
    }

    fn params(&self) -> &DVector<T> {
        &self.p
    }

    fn rhs(&self, _t: T, y: &DVector<T>, dydt: &mut DVector<T>) {
        debug_assert_eq!(y.len(), 6);
        debug_assert_eq!(dydt.len(), 6);
        let p = &self.p;
        let (kon, koff, kex, kt, ke, kdi, kde, epor0) =
            (p[0], p[1], p[2], p[3], p[4], p[5], p[6], p[7]);
        let (epo, epor, bound, internal) = (y[0], y[1], y[2], y[3]);

        let binding = kon * epo * epor - koff * bound;
        let export = kex * internal;
        dydt[0] = -binding + export;
        dydt[1] = -binding + kt * epor0 - kt * epor + export;
        dydt[2] = binding - ke * bound;
        dydt[3] = ke * bound - export - kdi * internal - kde * internal;
        dydt[4] = kdi * internal;
        dydt[5] = kde * internal;
    }
}
