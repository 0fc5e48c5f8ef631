use std::io::{self, Write};

use clap::Parser;
use roman_calculator::{logger, run, shell};

/// Калькулятор выражений `a op b` для арабских (1..10) и римских (I..X) чисел.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Вычислить это выражение вместо чтения из stdin.
    expression: Option<String>,

    /// Подробный журнал в stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);
    tracing::debug!(?args, "starting");

    let outcome = match &args.expression {
        Some(expression) => writeln!(io::stdout(), "{}", shell::render(expression)),
        None => run(),
    };

    if let Err(e) = outcome {
        eprintln!("Ошибка ввода-вывода: {e}");
        std::process::exit(1);
    }
}
