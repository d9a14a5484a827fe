use crate::problem::LpProblem;

/// Role of a variable slot in the current dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarRole {
    /// Expressed in terms of the nonbasic variables; value = its constant term.
    Basic,
    /// Held at zero.
    Nonbasic,
    /// Not part of the current dictionary (the spare artificial slot).
    Inactive,
}

/// Slack-form dictionary: each basic variable is a constant plus a linear
/// combination of the nonbasic variables, and the objective is a constant
/// plus a linear combination of the nonbasic variables.
///
/// Slots `0..num_var` are the decision variables, `num_var..num_var+num_con`
/// the slacks, and the last slot is reserved for the phase-1 artificial
/// variable. `coeff[i][j]` is meaningful only while `i` is basic and `j`
/// nonbasic; entries outside that shape are stale and never read, since all
/// iteration here is guarded by the role array.
#[derive(Debug, Clone)]
pub struct SlackForm {
    num_var: usize,
    roles: Vec<VarRole>,
    coeff: Vec<Vec<f64>>,
    rhs: Vec<f64>,
    obj: Vec<f64>,
    value: f64,
}

impl SlackForm {
    /// Build the initial dictionary: slack rows `x_i = b(i) - Σ a(i,j)·x_j`
    /// with the objective constant at zero.
    pub fn new(problem: &LpProblem) -> Self {
        let num_var = problem.num_variables();
        let num_con = problem.num_constraints();
        let slots = num_var + num_con + 1;

        let mut form = Self {
            num_var,
            roles: vec![VarRole::Nonbasic; slots],
            coeff: vec![vec![0.0; slots]; slots],
            rhs: vec![0.0; slots],
            obj: vec![0.0; slots],
            value: 0.0,
        };
        form.roles[slots - 1] = VarRole::Inactive;

        for row in 0..num_con {
            let i = num_var + row;
            form.roles[i] = VarRole::Basic;
            form.rhs[i] = problem.bound(row);
            for (j, &a) in problem.constraint(row).iter().enumerate() {
                form.coeff[i][j] = -a;
            }
        }
        for j in 0..num_var {
            form.obj[j] = problem.cost(j);
        }
        form
    }

    pub fn num_var(&self) -> usize {
        self.num_var
    }

    pub fn role(&self, index: usize) -> VarRole {
        self.roles[index]
    }

    /// Basic slot indices in ascending order.
    pub fn basic(&self) -> impl Iterator<Item = usize> + '_ {
        self.roles
            .iter()
            .enumerate()
            .filter(|&(_, &role)| role == VarRole::Basic)
            .map(|(i, _)| i)
    }

    /// Nonbasic slot indices in ascending order.
    pub fn nonbasic(&self) -> impl Iterator<Item = usize> + '_ {
        self.roles
            .iter()
            .enumerate()
            .filter(|&(_, &role)| role == VarRole::Nonbasic)
            .map(|(i, _)| i)
    }

    /// Coefficient of nonbasic `j` in the row of basic `i`.
    pub fn coeff(&self, i: usize, j: usize) -> f64 {
        self.coeff[i][j]
    }

    /// Constant term of the row of basic `i`.
    pub fn constant(&self, i: usize) -> f64 {
        self.rhs[i]
    }

    /// Objective coefficient of nonbasic `j`.
    pub fn reduced_cost(&self, j: usize) -> f64 {
        self.obj[j]
    }

    /// Objective value at the current basic point (all nonbasic at zero).
    pub fn objective_value(&self) -> f64 {
        self.value
    }

    /// A dictionary is feasible when every basic constant is nonnegative.
    pub fn is_feasible(&self) -> bool {
        self.basic().all(|i| self.rhs[i] >= 0.0)
    }

    /// Exchange nonbasic `e` with basic `l`, rewriting the dictionary around
    /// the new basis. The only state-mutating operation on a `SlackForm`.
    ///
    /// Callers must pick `e` and `l` so that `coeff[l][e]` is nonzero; the
    /// entering/leaving selection rules in `simplex` guarantee this, so a
    /// violation here is a defect rather than a recoverable error.
    pub fn pivot(&mut self, e: usize, l: usize) {
        debug_assert_eq!(self.roles[e], VarRole::Nonbasic);
        debug_assert_eq!(self.roles[l], VarRole::Basic);
        let slots = self.roles.len();
        let ale = self.coeff[l][e];
        debug_assert!(ale != 0.0, "pivot on zero coefficient");

        // Row for the entering variable, derived from the leaving row.
        self.rhs[e] = -self.rhs[l] / ale;
        for j in 0..slots {
            if j != e && self.roles[j] == VarRole::Nonbasic {
                self.coeff[e][j] = -self.coeff[l][j] / ale;
            }
        }
        self.coeff[e][l] = 1.0 / ale;

        // Substitute the new expression for `e` into every other basic row.
        for i in 0..slots {
            if i == l || self.roles[i] != VarRole::Basic {
                continue;
            }
            let aie = self.coeff[i][e];
            self.rhs[i] += aie * self.rhs[e];
            for j in 0..slots {
                if j != e && self.roles[j] == VarRole::Nonbasic {
                    self.coeff[i][j] += aie * self.coeff[e][j];
                }
            }
            self.coeff[i][l] = aie * self.coeff[e][l];
        }

        // Objective row.
        let ce = self.obj[e];
        self.value += ce * self.rhs[e];
        for j in 0..slots {
            if j != e && self.roles[j] == VarRole::Nonbasic {
                self.obj[j] += ce * self.coeff[e][j];
            }
        }
        self.obj[l] = ce * self.coeff[e][l];

        self.roles[e] = VarRole::Basic;
        self.roles[l] = VarRole::Nonbasic;
    }

    /// Activate the spare slot as the phase-1 artificial variable: nonbasic,
    /// coefficient 1 in every row, objective coefficient 1. The objective
    /// entry lands in the same row as the real costs, so phase-1 pivots
    /// transform the real reduced costs along with it.
    pub(crate) fn add_artificial(&mut self) -> usize {
        let a0 = self.roles.len() - 1;
        debug_assert_eq!(self.roles[a0], VarRole::Inactive);
        self.roles[a0] = VarRole::Nonbasic;
        self.obj[a0] = 1.0;
        for i in 0..a0 {
            if self.roles[i] == VarRole::Basic {
                self.coeff[i][a0] = 1.0;
            }
        }
        a0
    }

    /// Deactivate the artificial slot, dropping its column and objective
    /// entry. It must have been pivoted back out of the basis first.
    pub(crate) fn remove_artificial(&mut self, a0: usize) {
        debug_assert_eq!(self.roles[a0], VarRole::Nonbasic);
        self.roles[a0] = VarRole::Inactive;
        self.obj[a0] = 0.0;
        for i in 0..a0 {
            if self.roles[i] == VarRole::Basic {
                self.coeff[i][a0] = 0.0;
            }
        }
    }
}
