/// Terminal outcome of a solve. `Unbounded` and `Infeasible` are algorithmic
/// results, not errors, so they live here rather than in an `Err` type.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Solution {
    /// An optimal basic feasible point was found.
    Optimal(Optimum),
    /// Some improving direction has no limiting constraint.
    Unbounded,
    /// No point satisfies all constraints.
    Infeasible,
}

/// Assignment and objective value at an optimal point.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Optimum {
    /// Value of each decision variable, indexed `x0, x1, ..`.
    pub values: Vec<f64>,
    /// Objective value at that assignment.
    pub objective: f64,
}

impl Solution {
    pub fn optimum(&self) -> Option<&Optimum> {
        match self {
            Solution::Optimal(opt) => Some(opt),
            _ => None,
        }
    }
}
