use crate::dictionary::{SlackForm, VarRole};
use crate::problem::LpProblem;
use crate::solution::{Optimum, Solution};
use crate::trace;

/// Two-phase simplex driver over a slack-form dictionary.
pub struct Solver {
    /// Print the dictionary after every pivot.
    show_steps: bool,
}

enum Phase2 {
    Optimal,
    Unbounded,
}

impl Default for Solver {
    fn default() -> Self {
        Self { show_steps: false }
    }
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_steps(mut self, show: bool) -> Self {
        self.show_steps = show;
        self
    }

    /// Solve a standard-form maximization problem.
    ///
    /// Builds the initial dictionary, repairs feasibility with one artificial
    /// variable if the origin is infeasible, then pivots toward optimality.
    pub fn solve(&self, problem: &LpProblem) -> Solution {
        let mut form = SlackForm::new(problem);
        if self.show_steps {
            print!("{}", trace::render(&form));
        }

        if !form.is_feasible() && !self.restore_feasibility(&mut form) {
            return Solution::Infeasible;
        }

        match self.optimize(&mut form) {
            Phase2::Optimal => Solution::Optimal(extract(&form)),
            Phase2::Unbounded => Solution::Unbounded,
        }
    }

    /// Phase 1: manufacture a feasible dictionary via the artificial
    /// variable. Returns `false` when the program is infeasible.
    ///
    /// The caller guarantees some basic constant is negative. Note that the
    /// artificial objective entry shares the row with the real costs, so the
    /// two pivots here transform the real reduced costs as well; only the
    /// artificial column itself is dropped at the end.
    fn restore_feasibility(&self, form: &mut SlackForm) -> bool {
        let a0 = form.add_artificial();

        // Most negative constant leaves first, lowest row index on ties.
        let mut l = 0;
        let mut lowest = 0.0;
        for i in form.basic() {
            if form.constant(i) < lowest {
                lowest = form.constant(i);
                l = i;
            }
        }
        debug_assert!(lowest < 0.0);

        form.pivot(a0, l);
        self.print_pivot(a0, l, form);

        // A negative coefficient in the artificial row is a column that can
        // drive the artificial variable back out of the basis. Without one
        // the program has no feasible point.
        let Some(e) = form.nonbasic().find(|&j| form.coeff(a0, j) < 0.0) else {
            return false;
        };
        form.pivot(e, a0);
        self.print_pivot(e, a0, form);

        form.remove_artificial(a0);
        true
    }

    /// Phase 2: pivot until no reduced cost is positive (optimal) or some
    /// improving column has no limiting row (unbounded).
    ///
    /// Entering rule: first nonbasic slot with a positive reduced cost.
    /// Leaving rule: tightest ratio `-b(i)/a(i,e)` over rows with a negative
    /// entry, first row on ties. Neither rule defends against cycling, and
    /// no iteration cap is enforced.
    fn optimize(&self, form: &mut SlackForm) -> Phase2 {
        loop {
            let Some(e) = form.nonbasic().find(|&j| form.reduced_cost(j) > 0.0) else {
                return Phase2::Optimal;
            };

            let mut leaving: Option<(usize, f64)> = None;
            for i in form.basic() {
                let a = form.coeff(i, e);
                if a < 0.0 {
                    let bound = -form.constant(i) / a;
                    if leaving.is_none_or(|(_, best)| bound < best) {
                        leaving = Some((i, bound));
                    }
                }
            }
            let Some((l, _)) = leaving else {
                return Phase2::Unbounded;
            };

            form.pivot(e, l);
            self.print_pivot(e, l, form);
        }
    }

    fn print_pivot(&self, e: usize, l: usize, form: &SlackForm) {
        if self.show_steps {
            println!("{}", trace::pivot_banner(e, l));
            print!("{}", trace::render(form));
        }
    }
}

/// Read the final dictionary into an assignment: basic decision variables
/// take their constant term, nonbasic ones are zero.
fn extract(form: &SlackForm) -> Optimum {
    let values = (0..form.num_var())
        .map(|i| {
            if form.role(i) == VarRole::Basic {
                form.constant(i)
            } else {
                0.0
            }
        })
        .collect();
    Optimum {
        values,
        objective: form.objective_value(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn problem(
        num_var: usize,
        a: Vec<Vec<f64>>,
        b: Vec<f64>,
        c: Vec<f64>,
    ) -> LpProblem {
        LpProblem::new(num_var, a, b, c).unwrap()
    }

    fn assert_optimal(solution: &Solution, values: &[f64], objective: f64) {
        let opt = solution.optimum().expect("expected an optimal solution");
        assert!(
            (opt.objective - objective).abs() < EPS,
            "objective {} (expected {objective})",
            opt.objective
        );
        assert_eq!(opt.values.len(), values.len());
        for (i, (&got, &want)) in opt.values.iter().zip(values).enumerate() {
            assert!((got - want).abs() < EPS, "x{i} = {got} (expected {want})");
        }
    }

    #[test]
    fn solves_without_feasibility_repair() {
        // maximize x0 + 2 x1 + 0.5 x2
        //   x0 + x1 + x2 <= 5, x0 <= 3, x1 <= 1, x2 <= 4
        let problem = problem(
            3,
            vec![
                vec![1.0, 1.0, 1.0],
                vec![1.0, 0.0, 0.0],
                vec![0.0, 1.0, 0.0],
                vec![0.0, 0.0, 1.0],
            ],
            vec![5.0, 3.0, 1.0, 4.0],
            vec![1.0, 2.0, 0.5],
        );
        assert!(SlackForm::new(&problem).is_feasible());

        let solution = Solver::new().solve(&problem);
        assert_optimal(&solution, &[3.0, 1.0, 1.0], 5.5);
    }

    #[test]
    fn solves_with_feasibility_repair() {
        // maximize x0 + 3 x1
        //   x0 - x1 <= 8, -x0 - x1 <= -3, -x0 + 4 x1 <= 2
        let problem = problem(
            2,
            vec![vec![1.0, -1.0], vec![-1.0, -1.0], vec![-1.0, 4.0]],
            vec![8.0, -3.0, 2.0],
            vec![1.0, 3.0],
        );
        assert!(!SlackForm::new(&problem).is_feasible());

        let solution = Solver::new().solve(&problem);
        assert_optimal(&solution, &[34.0 / 3.0, 10.0 / 3.0], 64.0 / 3.0);
    }

    #[test]
    fn detects_unbounded() {
        // maximize x0 with -x0 <= 5: x0 can grow without limit.
        let problem = problem(1, vec![vec![-1.0]], vec![5.0], vec![1.0]);
        assert_eq!(Solver::new().solve(&problem), Solution::Unbounded);
    }

    #[test]
    fn detects_infeasible() {
        // x0 <= -4 contradicts x0 >= 0; the artificial row ends up with no
        // negative coefficient after its first pivot.
        let problem = problem(
            1,
            vec![vec![1.0], vec![-1.0]],
            vec![-4.0, 2.0],
            vec![1.0],
        );
        assert_eq!(Solver::new().solve(&problem), Solution::Infeasible);
    }

    #[test]
    fn feasibility_repair_leaves_a_feasible_dictionary() {
        let problem = problem(
            2,
            vec![vec![1.0, -1.0], vec![-1.0, -1.0], vec![-1.0, 4.0]],
            vec![8.0, -3.0, 2.0],
            vec![1.0, 3.0],
        );
        let mut form = SlackForm::new(&problem);
        assert!(!form.is_feasible());

        let repaired = Solver::new().restore_feasibility(&mut form);
        assert!(repaired);
        assert!(form.is_feasible());
        // The artificial slot is gone again.
        assert_eq!(form.role(form.num_var() + 3), VarRole::Inactive);
        assert_eq!(form.basic().count(), 3);
    }

    #[test]
    fn feasibility_survives_every_optimizing_pivot() {
        let problem = problem(
            3,
            vec![
                vec![1.0, 1.0, 1.0],
                vec![1.0, 0.0, 0.0],
                vec![0.0, 1.0, 0.0],
                vec![0.0, 0.0, 1.0],
            ],
            vec![5.0, 3.0, 1.0, 4.0],
            vec![1.0, 2.0, 0.5],
        );
        let mut form = SlackForm::new(&problem);

        // Step with the same selection rules as the solver, checking the
        // dictionary stays feasible after each individual pivot.
        loop {
            let Some(e) = form.nonbasic().find(|&j| form.reduced_cost(j) > 0.0) else {
                break;
            };
            let mut leaving: Option<(usize, f64)> = None;
            for i in form.basic() {
                let a = form.coeff(i, e);
                if a < 0.0 {
                    let bound = -form.constant(i) / a;
                    if leaving.is_none_or(|(_, best)| bound < best) {
                        leaving = Some((i, bound));
                    }
                }
            }
            let (l, _) = leaving.expect("bounded test problem");
            form.pivot(e, l);
            assert!(form.is_feasible());
        }
    }

    #[test]
    fn optimal_dictionary_certifies_itself() {
        let problem = problem(
            2,
            vec![vec![1.0, -1.0], vec![-1.0, -1.0], vec![-1.0, 4.0]],
            vec![8.0, -3.0, 2.0],
            vec![1.0, 3.0],
        );
        let mut form = SlackForm::new(&problem);
        let solver = Solver::new();
        assert!(solver.restore_feasibility(&mut form));
        assert!(matches!(solver.optimize(&mut form), Phase2::Optimal));

        // No nonbasic variable has a positive reduced cost at termination.
        assert!(form.nonbasic().all(|j| form.reduced_cost(j) <= 0.0));
        assert!(form.is_feasible());
    }
}
