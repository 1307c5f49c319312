use nalgebra::DVector;
use serde::Serialize;

use crate::{
    error::{IvpError, SolverError},
    solver_error, ProblemConfig, Scalar,
};

pub mod solution;

pub use solution::OutputTable;

/// External ODE integrator driven over the output schedule of a [ProblemConfig].
///
/// The integrator owns the numerical method (step size and order selection, nonlinear and linear solves);
/// this crate only hands it the problem description and asks for the state at each output time.
///
/// - [OdeIntegrator::init] is called once per solve with the problem, the integrator should read `t0`,
///   the initial state and both tolerances from it.
/// - [OdeIntegrator::advance_to] is then called for each output time in order and must return the state
///   at exactly that time (either by stopping there or by interpolation).
pub trait OdeIntegrator<T: Scalar> {
    fn init(&mut self, problem: &ProblemConfig<T>) -> Result<(), IvpError>;

    fn advance_to(&mut self, tout: T) -> Result<DVector<T>, IvpError>;
}

#[derive(Clone, Debug, Serialize, Default, PartialEq)]
pub struct DriverStatistics {
    pub number_of_outputs: usize,
    pub number_of_integrator_calls: usize,
}

/// Steps an [OdeIntegrator] through every output time of a problem and collects the results.
pub struct Driver<'a, T: Scalar, S: OdeIntegrator<T>> {
    problem: &'a ProblemConfig<T>,
    integrator: S,
    statistics: DriverStatistics,
}

impl<'a, T: Scalar, S: OdeIntegrator<T>> Driver<'a, T, S> {
    pub fn new(problem: &'a ProblemConfig<T>, integrator: S) -> Self {
        Self {
            problem,
            integrator,
            statistics: DriverStatistics::default(),
        }
    }

    pub fn problem(&self) -> &ProblemConfig<T> {
        self.problem
    }

    pub fn integrator(&self) -> &S {
        &self.integrator
    }

    pub fn into_integrator(self) -> S {
        self.integrator
    }

    pub fn get_statistics(&self) -> &DriverStatistics {
        &self.statistics
    }

    /// Check that every output time lies strictly beyond the one before it (starting from `t0`), in the
    /// direction of integration given by `t1 - t0`.
    fn check_schedule(&self) -> Result<(), IvpError> {
        let t0 = self.problem.t0();
        let forward = self.problem.t1() >= t0;
        let mut previous = t0;
        for t in self.problem.output_times() {
            let ok = if forward { t > previous } else { t < previous };
            if !ok {
                return Err(solver_error!(
                    OutputTimeBeforeStart,
                    output_time: t.to_f64_lossy(),
                    previous_time: previous.to_f64_lossy()
                ));
            }
            previous = t;
        }
        Ok(())
    }

    /// Initialise the integrator and advance it to each output time, returning the state at each.
    pub fn solve(&mut self) -> Result<OutputTable<T>, IvpError> {
        self.check_schedule()?;
        let neq = self.problem.equation_count();
        log::debug!(
            "solving {} equations from t0 = {:e} with rtol = {:e}, {} output times",
            neq,
            self.problem.t0(),
            self.problem.rtol(),
            self.problem.nout()
        );
        self.statistics = DriverStatistics::default();
        self.integrator.init(self.problem)?;

        let mut table = OutputTable::with_capacity(self.problem.nout());
        for tout in self.problem.output_times() {
            self.statistics.number_of_integrator_calls += 1;
            let y = match self.integrator.advance_to(tout) {
                Ok(y) => y,
                Err(err) => {
                    log::warn!("integrator failed at t = {:e}: {}", tout, err);
                    return Err(err);
                }
            };
            if y.len() != neq {
                return Err(solver_error!(WrongStateLength, expected: neq, found: y.len()));
            }
            log::info!("At t = {:e} y = {:?}", tout, y.as_slice());
            table.push(tout, y);
            self.statistics.number_of_outputs += 1;
        }
        Ok(table)
    }
}

/// Solve `problem` with `integrator` at every output time.
pub fn solve_output_schedule<T, S>(
    problem: &ProblemConfig<T>,
    integrator: &mut S,
) -> Result<OutputTable<T>, IvpError>
where
    T: Scalar,
    S: OdeIntegrator<T>,
{
    Driver::new(problem, integrator).solve()
}

impl<T: Scalar, S: OdeIntegrator<T> + ?Sized> OdeIntegrator<T> for &mut S {
    fn init(&mut self, problem: &ProblemConfig<T>) -> Result<(), IvpError> {
        (**self).init(problem)
    }

    fn advance_to(&mut self, tout: T) -> Result<DVector<T>, IvpError> {
        (**self).advance_to(tout)
    }
}
