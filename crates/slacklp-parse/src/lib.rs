pub mod parser;

pub use parser::{FORMAT_HELP, ParseError, parse};
