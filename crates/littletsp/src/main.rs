use std::any::Any;
use std::io::Read;
use std::panic::{self, AssertUnwindSafe};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::debug;
use tsp_core::graph::manhattan::ManhattanGraph;
use tsp_core::tour::Tour;
use tsp_solvers::{fast, little, naive};

/// Solves the Traveling Salesperson Problem over a world read from standard
/// input, printing the tour length and the vertex order.
#[derive(Parser)]
#[command(
    version,
    about,
    after_help = "Example:\n  littletsp --graph=manhattan --solver=naive < input_graph.txt\n  littletsp --graph manhattan --solver little < input_graph.txt"
)]
struct Args {
    /// Type of graph to construct
    #[arg(long, value_enum, default_value = "manhattan")]
    graph: GraphKind,

    /// Type of solver to use
    #[arg(long, value_enum, default_value = "little")]
    solver: SolverKind,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum GraphKind {
    Manhattan,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SolverKind {
    Little,
    Naive,
    Fast,
}

fn main() -> ExitCode {
    env_logger::init();

    // clap would exit with code 2 on bad flags, which is reserved for
    // implementation errors here; bad usage reports as an input error instead
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(error) => {
            let _ = error.print();
            return ExitCode::from(u8::from(error.use_stderr()));
        }
    };

    let mut input = Vec::new();
    if let Err(error) = std::io::stdin().read_to_end(&mut input) {
        eprintln!("Error: {error}");
        return ExitCode::from(1);
    }

    let graph = match args.graph {
        GraphKind::Manhattan => match tsp_parser::parse_world(&input) {
            Ok(graph) => graph,
            Err(error) => {
                eprintln!("Error: {error}");
                return ExitCode::from(1);
            }
        },
    };
    debug!("parsed graph:\n{graph}");

    match solve(&graph, args.solver) {
        Ok(tour) => {
            println!("{tour}");
            ExitCode::SUCCESS
        }
        Err(payload) => match panic_message(payload.as_ref()) {
            Some(message) => {
                eprintln!("Implementation Error: {message}");
                ExitCode::from(2)
            }
            None => {
                eprintln!("Unknown Error!");
                ExitCode::from(3)
            }
        },
    }
}

/// Runs the selected solver, capturing invariant-violation panics so they can
/// be reported with a stable exit code instead of a backtrace.
fn solve(graph: &ManhattanGraph, solver: SolverKind) -> Result<Tour, Box<dyn Any + Send>> {
    let hook = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let result = panic::catch_unwind(AssertUnwindSafe(|| match solver {
        SolverKind::Little => little::solve(graph),
        SolverKind::Naive => naive::solve(graph),
        SolverKind::Fast => fast::solve(graph),
    }));
    panic::set_hook(hook);
    result
}

fn panic_message(payload: &(dyn Any + Send)) -> Option<&str> {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
}
