//! # ivp-problem
//!
//! ivp-problem describes an initial-value problem for an ODE system, `dy/dt = f(t, y)` with `y(t0) = y0`,
//! in the form an adaptive integrator consumes it, and drives such an integrator over a schedule of output times.
//! The integrator itself is not part of this crate, it is reached through the [OdeIntegrator] trait.
//!
//! ## Problem configuration
//!
//! A [ProblemConfig] holds the initial state, a scalar relative tolerance, one absolute tolerance per state
//! component, the initial time `t0`, and a geometric output schedule: the first output time `t1`, the factor
//! `tmult` between successive output times, and the number of outputs `nout`. All invariants are checked
//! on construction and the record is never mutated afterwards, so it can be shared freely between solves.
//!
//! There are three ways to obtain one:
//! - [ProblemConfig::robertson] returns the three-species kinetics problem (see [problem::robertson] for the constants).
//! - [ProblemConfigBuilder] sets parameters one at a time ([ProblemConfigBuilder::rtol], [ProblemConfigBuilder::atol],
//!   [ProblemConfigBuilder::scalar_atol], [ProblemConfigBuilder::t1] etc.) and validates in [ProblemConfigBuilder::build].
//! - [ProblemConfig::from_json_str] and [ProblemConfig::from_json_file] load and validate a JSON document.
//!
//! Output times are given by [ProblemConfig::output_time] or iterated with [ProblemConfig::output_times]. The
//! `k`-th time is `t1 * tmult^(k-1)`, computed by repeated multiplication.
//!
//! ## Driving an integrator
//!
//! Implement [OdeIntegrator] for your integrator, then call [solve_output_schedule] (or use a [Driver] to
//! also get [DriverStatistics]). The driver initialises the integrator from the problem, asks it for the state
//! at each output time in order and collects the results in an [OutputTable], whose `Display` implementation
//! prints one `At t = ... y = ...` line per output.
//!
//! ## Models
//!
//! The [models] module holds a small catalog of right-hand sides behind the [OdeModel] trait: the Robertson
//! problem ([Robertson], with its published solution at the default output times in
//! [robertson_reference_solution]) and three reaction networks ([ToyModel], [EpoEpoR], [Mapk]). Each model
//! names its states and parameters and carries its parameter vector. [models::model_by_name] looks a model
//! up by name.
//!
//! ## Scalar types
//!
//! Everything is generic over a [Scalar], `f64` by default. `f32` is also supported.
//!
pub mod driver;
pub mod error;
pub mod models;
pub mod problem;
pub mod scalar;

pub use driver::{solve_output_schedule, Driver, DriverStatistics, OdeIntegrator, OutputTable};
pub use error::{ConfigurationError, IvpError, SolverError};
pub use models::{robertson_reference_solution, EpoEpoR, Mapk, OdeModel, Robertson, ToyModel};
pub use problem::{AbsoluteTolerance, OutputTimes, ProblemConfig, ProblemConfigBuilder};
pub use scalar::Scalar;
