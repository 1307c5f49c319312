use crate::Scalar;

/// Iterator over a geometric output schedule `t1, t1*tmult, t1*tmult^2, ...`.
///
/// Each time is the previous one multiplied by `tmult`, never `t1 * tmult.powi(k)`, so consecutive
/// outputs differ by exactly one rounded multiplication.
#[derive(Debug, Clone)]
pub struct OutputTimes<T: Scalar> {
    next: T,
    tmult: T,
    remaining: usize,
}

impl<T: Scalar> OutputTimes<T> {
    pub fn new(t1: T, tmult: T, nout: usize) -> Self {
        Self {
            next: t1,
            tmult,
            remaining: nout,
        }
    }
}

impl<T: Scalar> Iterator for OutputTimes<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        let t = self.next;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.next = t * self.tmult;
        }
        Some(t)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Scalar> ExactSizeIterator for OutputTimes<T> {}

impl<T: Scalar> std::iter::FusedIterator for OutputTimes<T> {}

#[cfg(test)]
mod tests {
    use super::OutputTimes;

    #[test]
    fn decades_from_point_four() {
        let times = OutputTimes::new(0.4, 10.0, 12).collect::<Vec<f64>>();
        assert_eq!(times.len(), 12);
        assert_eq!(&times[..3], &[0.4, 4.0, 40.0]);
        for w in times.windows(2) {
            assert_eq!(w[1], w[0] * 10.0);
        }
    }

    #[test]
    fn exact_size() {
        let mut times = OutputTimes::new(1.0, 2.0, 3);
        assert_eq!(times.len(), 3);
        assert_eq!(times.next(), Some(1.0));
        assert_eq!(times.len(), 2);
        assert_eq!(times.next(), Some(2.0));
        assert_eq!(times.next(), Some(4.0));
        assert_eq!(times.next(), None);
        assert_eq!(times.next(), None);
    }

    #[test]
    fn shrinking_schedule() {
        let times = OutputTimes::new(8.0, 0.5, 4).collect::<Vec<f64>>();
        assert_eq!(times, vec![8.0, 4.0, 2.0, 1.0]);
    }
}
