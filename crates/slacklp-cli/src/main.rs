use clap::Parser;
use slacklp_solver::{Solution, Solver};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "slacklp")]
#[command(about = "Solve a standard-form LP with the two-phase simplex method", long_about = None)]
struct Cli {
    /// Input file in the plain matrix format
    file: PathBuf,
    /// Suppress the per-pivot dictionary trace
    #[arg(long)]
    no_steps: bool,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    let source = match std::fs::read_to_string(&cli.file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading {}: {}", cli.file.display(), e);
            std::process::exit(1);
        }
    };

    let problem = match slacklp_parse::parse(&source) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Input error: {e}");
            eprintln!();
            eprintln!("{}", slacklp_parse::FORMAT_HELP);
            std::process::exit(1);
        }
    };

    let solver = Solver::new().with_steps(!cli.no_steps && !cli.json);
    match solver.solve(&problem) {
        Solution::Optimal(optimum) => {
            if cli.json {
                match serde_json::to_string_pretty(&optimum) {
                    Ok(s) => println!("{s}"),
                    Err(e) => {
                        eprintln!("Error encoding result: {e}");
                        std::process::exit(1);
                    }
                }
            } else {
                println!();
                println!("Solution:");
                for (i, value) in optimum.values.iter().enumerate() {
                    println!("x{i}: {value}");
                }
                println!("Objective: {}", optimum.objective);
            }
        }
        Solution::Unbounded => {
            println!("This LP is unbounded.");
        }
        Solution::Infeasible => {
            println!("This LP is infeasible.");
        }
    }
}
