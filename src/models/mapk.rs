use nalgebra::DVector;

use crate::{
    models::{cast_vec, check_params, OdeModel},
    ConfigurationError, Scalar,
};

/// Three-tier MAPK cascade with negative feedback of MAPK-PP on the first phosphorylation step.
///
/// Ten Michaelis-Menten fluxes `v1..v10` with rate constants `k1..k10` and Michaelis constants
/// `KK1..KK10`, plus the feedback inhibition constant `Ki` and Hill coefficient `n`. The totals
/// of each tier (MKKK, MKK and MAPK in all phosphorylation states) are conserved.
#[derive(Debug, Clone, PartialEq)]
pub struct Mapk<T: Scalar = f64> {
    p: DVector<T>,
}

impl<T: Scalar> Mapk<T> {
    pub fn new(p: DVector<T>) -> Result<Self, ConfigurationError> {
        check_params(&p, 22)?;
        Ok(Self { p })
    }
}

impl<T: Scalar> Default for Mapk<T> {
    fn default() -> Self {
        Self {
            p: cast_vec(&[0.1; 22]),
        }
    }
}

impl<T: Scalar> OdeModel<T> for Mapk<T> {
    fn name(&self) -> &'static str {
        "MAPK"
    }

    fn state_names(&self) -> Vec<&'static str> {
        vec![
            "MKKK", "MKKKp", "MKK", "MKKp", "MKKpp", "MAPK", "MAPKp", "MAPKpp",
        ]
    }

    fn parameter_names(&self) -> Vec<&'static str> {
        vec![
            "k1", "k2", "k3", "k4", "k5", "k6", "k7", "k8", "k9", "k10", "KK1", "KK2", "KK3",
            "KK4", "KK5", "KK6", "KK7", "KK8", "KK9", "KK10", "Ki", "n",
        ]
    }

    fn params(&self) -> &DVector<T> {
        &self.p
    }

    fn rhs(&self, _t: T, y: &DVector<T>, dydt: &mut DVector<T>) {
        debug_assert_eq!(y.len(), 8);
        debug_assert_eq!(dydt.len(), 8);
        let k = |i: usize| self.p[i - 1];
        let km = |i: usize| self.p[9 + i];
        let (ki, n) = (self.p[20], self.p[21]);
        let (mkkk, mkkkp, mkk, mkkp, mkkpp, mapk, mapkp, mapkpp) =
            (y[0], y[1], y[2], y[3], y[4], y[5], y[6], y[7]);

        let feedback = T::one() + (mapkpp / ki).powf(n);
        let v1 = k(1) * mkkk / (feedback * (km(1) + mkkk));
        let v2 = k(2) * mkkkp / (km(2) + mkkkp);
        let v3 = k(3) * mkkkp * mkk / (km(3) + mkk);
        let v4 = k(4) * mkkkp * mkkp / (km(4) + mkkp);
        let v5 = k(5) * mkkpp / (km(5) + mkkpp);
        let v6 = k(6) * mkkp / (km(6) + mkkp);
        let v7 = k(7) * mkkpp * mapk / (km(7) + mapk);
        let v8 = k(8) * mkkpp * mapkp / (km(8) + mapkp);
        let v9 = k(9) * mapkpp / (km(9) + mapkpp);
        let v10 = k(10) * mapkp / (km(10) + mapkp);

        dydt[0] = v2 - v1;
        dydt[1] = v1 - v2;
        dydt[2] = v6 - v3;
        dydt[3] = v3 + v5 - v4 - v6;
        dydt[4] = v4 - v5;
        dydt[5] = v10 - v7;
        dydt[6] = v7 + v9 - v8 - v10;
        dydt[7] = v8 - v9;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tier_at_default_point() {
        // Hill term is (0.1/0.1)^0.1 = 1, so v1 = 0.01/(2*0.2) and v2 = 0.01/0.2
        let model = Mapk::<f64>::default();
        let dydt = model.call(0.0, &model.default_initial_state());
        assert!((dydt[0] - 0.025).abs() < 1e-15, "{dydt}");
        assert!((dydt[1] + 0.025).abs() < 1e-15, "{dydt}");
    }

    #[test]
    fn rhs_conserves_tier_totals() {
        let mut p = vec![1.0; 22];
        p[0] = 2.5;
        p[6] = 0.3;
        p[20] = 0.9;
        p[21] = 2.0;
        let model = Mapk::<f64>::new(DVector::from_vec(p)).unwrap();
        let y = DVector::from_vec(vec![0.8, 0.2, 0.5, 0.3, 0.1, 0.6, 0.25, 0.15]);
        let dydt = model.call(0.0, &y);
        assert!((dydt[0] + dydt[1]).abs() < 1e-12);
        assert!((dydt[2] + dydt[3] + dydt[4]).abs() < 1e-12);
        assert!((dydt[5] + dydt[6] + dydt[7]).abs() < 1e-12);
    }

    #[test]
    fn feedback_inhibits_first_step() {
        let mut p = vec![1.0; 22];
        p[21] = 1.0;
        let model = Mapk::<f64>::new(DVector::from_vec(p)).unwrap();
        let mut y = DVector::from_vec(vec![1.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
        let free = model.call(0.0, &y)[1];
        y[7] = 1.0;
        let inhibited = model.call(0.0, &y)[1];
        // v1 = 1/(1*2) without feedback, 1/(2*2) with MAPKpp = Ki
        assert_eq!(free, 0.5);
        assert_eq!(inhibited, 0.25);
    }
}
