use std::fmt;

use nalgebra::DVector;

use crate::Scalar;

/// States reported by an integrator at a sequence of output times, kept in the order they were written.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputTable<T: Scalar = f64> {
    times: Vec<T>,
    states: Vec<DVector<T>>,
}

impl<T: Scalar> Default for OutputTable<T> {
    fn default() -> Self {
        Self {
            times: Vec::new(),
            states: Vec::new(),
        }
    }
}

impl<T: Scalar> OutputTable<T> {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            times: Vec::with_capacity(n),
            states: Vec::with_capacity(n),
        }
    }

    pub fn push(&mut self, t: T, state: DVector<T>) {
        self.times.push(t);
        self.states.push(state);
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn times(&self) -> &[T] {
        &self.times
    }

    pub fn state_at(&self, index: usize) -> Option<&DVector<T>> {
        self.states.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = (T, &DVector<T>)> + '_ {
        self.times.iter().copied().zip(self.states.iter())
    }

    /// Largest weighted error `|y - y_ref| / (atol + rtol * |y_ref|)` between matching rows of two
    /// tables, or `None` if the tables have different shapes.
    pub fn max_weighted_error(&self, reference: &Self, rtol: T, atol: &DVector<T>) -> Option<T> {
        if self.len() != reference.len() {
            return None;
        }
        let mut max = T::zero();
        for ((_, y), (_, y_ref)) in self.iter().zip(reference.iter()) {
            if y.len() != y_ref.len() || y.len() != atol.len() {
                return None;
            }
            for i in 0..y.len() {
                let err = (y[i] - y_ref[i]).abs() / (atol[i] + rtol * y_ref[i].abs());
                max = max.max(err);
            }
        }
        Some(max)
    }
}

// C printf style `%.{prec}e`: mantissa, sign and at least two exponent digits
fn format_exp<T: Scalar>(x: T, prec: usize) -> String {
    let s = format!("{:.*e}", prec, x);
    match s.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(d) => ('-', d),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => s,
    }
}

impl<T: Scalar> fmt::Display for OutputTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (t, y)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "At t = {}      y =", format_exp(t, 4))?;
            for (j, yj) in y.iter().enumerate() {
                if j > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:>14}", format_exp(*yj, 6))?;
            }
        }
        Ok(())
    }
}
