mod dictionary;
mod problem;
mod simplex;
mod solution;
pub mod trace;

pub use dictionary::{SlackForm, VarRole};
pub use problem::{LpProblem, ProblemError};
pub use simplex::Solver;
pub use solution::{Optimum, Solution};
