//! Rendering of dictionaries for the per-pivot step trace.

use crate::dictionary::SlackForm;

/// Render the current dictionary, one line per basic variable plus the
/// objective line, omitting zero coefficients.
pub fn render(form: &SlackForm) -> String {
    let mut out = String::new();
    out.push_str(&line(
        "z".to_string(),
        form.objective_value(),
        form.nonbasic()
            .filter(|&j| form.reduced_cost(j) != 0.0)
            .map(|j| term(form.reduced_cost(j), j)),
    ));
    for i in form.basic() {
        out.push_str(&line(
            format!("x{i}"),
            form.constant(i),
            form.nonbasic()
                .filter(|&j| form.coeff(i, j) != 0.0)
                .map(|j| term(form.coeff(i, j), j)),
        ));
    }
    out
}

/// Announcement printed before each re-rendered dictionary.
pub fn pivot_banner(e: usize, l: usize) -> String {
    format!("==> pivot: x{e} enters, x{l} leaves")
}

fn term(coefficient: f64, var: usize) -> String {
    format!("{coefficient} x{var}")
}

fn line(lhs: String, constant: f64, terms: impl Iterator<Item = String>) -> String {
    let terms: Vec<String> = terms.collect();
    if terms.is_empty() {
        format!("{lhs} = {constant}\n")
    } else {
        format!("{lhs} = {constant} + {}\n", terms.join(" + "))
    }
}
