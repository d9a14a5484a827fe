use thiserror::Error;

/// A linear program in standard maximization form:
/// maximize `c·x` subject to `Ax <= b`, `x >= 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct LpProblem {
    num_var: usize,
    constraints: Vec<Vec<f64>>,
    rhs: Vec<f64>,
    objective: Vec<f64>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProblemError {
    #[error("constraint matrix has {rows} rows but the right-hand side has {rhs} entries")]
    RhsLength { rows: usize, rhs: usize },
    #[error("constraint row {row} has {found} coefficients, expected {expected}")]
    RowWidth { row: usize, expected: usize, found: usize },
    #[error("objective has {found} coefficients, expected {expected}")]
    ObjectiveLength { expected: usize, found: usize },
}

impl LpProblem {
    pub fn new(
        num_var: usize,
        constraints: Vec<Vec<f64>>,
        rhs: Vec<f64>,
        objective: Vec<f64>,
    ) -> Result<Self, ProblemError> {
        if constraints.len() != rhs.len() {
            return Err(ProblemError::RhsLength {
                rows: constraints.len(),
                rhs: rhs.len(),
            });
        }
        for (row, coefs) in constraints.iter().enumerate() {
            if coefs.len() != num_var {
                return Err(ProblemError::RowWidth {
                    row,
                    expected: num_var,
                    found: coefs.len(),
                });
            }
        }
        if objective.len() != num_var {
            return Err(ProblemError::ObjectiveLength {
                expected: num_var,
                found: objective.len(),
            });
        }
        Ok(Self {
            num_var,
            constraints,
            rhs,
            objective,
        })
    }

    pub fn num_variables(&self) -> usize {
        self.num_var
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Coefficient row of the constraint matrix `A`.
    pub fn constraint(&self, row: usize) -> &[f64] {
        &self.constraints[row]
    }

    /// Right-hand side entry `b(row)`.
    pub fn bound(&self, row: usize) -> f64 {
        self.rhs[row]
    }

    /// Objective coefficient `c(j)`.
    pub fn cost(&self, var: usize) -> f64 {
        self.objective[var]
    }
}
