use std::fs;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use varith::{Interpreter, script_lines};

/// varith evaluates arithmetic expressions with named variables, one
/// expression per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells varith to read the expressions from a file instead of the
    /// argument itself.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode prints the value of every expression instead of only the
    /// last one.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Print all variables after evaluation.
    #[arg(short, long)]
    vars: bool,

    contents: String,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let mut interpreter = Interpreter::new();
    let values = match interpreter.evaluate_each(script_lines(&script)) {
        Ok(values) => values,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    };

    if args.pipe_mode {
        for value in &values {
            println!("{value}");
        }
    } else if let Some(last) = values.last() {
        println!("{last}");
    }

    if args.vars {
        for (name, value) in interpreter.variables() {
            println!("{name} = {value}");
        }
    }
}
