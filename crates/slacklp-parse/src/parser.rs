use slacklp_solver::{LpProblem, ProblemError};
use thiserror::Error;

/// Description of the input layout, printed alongside parse errors.
pub const FORMAT_HELP: &str = "\
The input must be a standard-form maximization problem laid out as:
  line 1:             numVar numCon
  next numCon lines:  the rows of the constraint matrix A, numVar numbers each
  next line:          the vector b, numCon numbers
  last line:          the vector c, numVar numbers
All numbers are whitespace-separated decimal reals.

For example, to maximize  x0 + 2 x1 + 0.5 x2
            subject to    x0 + x1 + x2 <= 5
                          x0 <= 3
                          x1 <= 1
                          x2 <= 4
                          x0, x1, x2 >= 0
the input is:
  3 4
  1 1 1
  1 0 0
  0 1 0
  0 0 1
  5 3 1 4
  1 2 0.5
";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("line 1: expected two nonnegative integer counts")]
    BadHeader,
    #[error("invalid count: {0:?}")]
    InvalidCount(String),
    #[error("line {line}: expected {expected} numbers, found {found}")]
    ShortLine {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: invalid number {token:?}")]
    InvalidNumber { line: usize, token: String },
    #[error("unexpected end of input, expected line {0}")]
    MissingLine(usize),
    #[error(transparent)]
    Problem(#[from] ProblemError),
}

/// Parse the plain matrix format into an [`LpProblem`].
///
/// Tokens past the expected count on a line are ignored: only the declared
/// counts drive how much of each line is read.
pub fn parse(source: &str) -> Result<LpProblem, ParseError> {
    let mut lines = source.lines().enumerate();

    let (_, header) = lines.next().ok_or(ParseError::BadHeader)?;
    let mut counts = header.split_whitespace();
    let (num_var, num_con) = match (counts.next(), counts.next()) {
        (Some(n), Some(m)) => (parse_count(n)?, parse_count(m)?),
        _ => return Err(ParseError::BadHeader),
    };

    let mut constraints = Vec::with_capacity(num_con);
    for row in 0..num_con {
        let (line_no, line) = lines.next().ok_or(ParseError::MissingLine(row + 2))?;
        constraints.push(numbers(line_no, line, num_var)?);
    }

    let (line_no, line) = lines.next().ok_or(ParseError::MissingLine(num_con + 2))?;
    let rhs = numbers(line_no, line, num_con)?;

    let (line_no, line) = lines.next().ok_or(ParseError::MissingLine(num_con + 3))?;
    let objective = numbers(line_no, line, num_var)?;

    Ok(LpProblem::new(num_var, constraints, rhs, objective)?)
}

fn parse_count(token: &str) -> Result<usize, ParseError> {
    token
        .parse()
        .map_err(|_| ParseError::InvalidCount(token.to_string()))
}

fn numbers(line_no: usize, line: &str, expected: usize) -> Result<Vec<f64>, ParseError> {
    let mut values = Vec::with_capacity(expected);
    for token in line.split_whitespace().take(expected) {
        let value = token.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
            line: line_no + 1,
            token: token.to_string(),
        })?;
        values.push(value);
    }
    if values.len() < expected {
        return Err(ParseError::ShortLine {
            line: line_no + 1,
            expected,
            found: values.len(),
        });
    }
    Ok(values)
}
