mod command;
mod error;

use command::Command;
use env_logger::Env;
use error::report_to_stderr;
use exact_compute::{
    convert_to_exact,
    convert_with_pi,
    fmt::format_for_display,
    parse_input,
    solver::{solve_cubic, solve_geometric, solve_linear, solve_quadratic, solve_suvat},
    DetectedFormat,
    ExactNumber,
    FormatSettings,
    NumberFormat,
    SolverResult,
};
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{fs, io::{self, IsTerminal, Read}};

const HELP: &str = "\
Type a number to see its exact form, e.g. `3/4`, `2 1/3`, `2sqrt(8)`, `3pi/4` or `1/3 + 1/6`.

Commands:
  :exact <expression>            exact form of an expression
  :pi <expression>               exact form, preferring multiples of pi
  :quadratic <a> <b> <c>         roots of ax^2 + bx + c = 0
  :cubic <a> <b> <c> <d>         real roots of ax^3 + bx^2 + cx + d = 0
  :suvat s=.. u=.. v=.. a=.. t=..  the two missing SUVAT variables, from exactly three
  :geometric <formula> k=v ..    circle_area, circle_circumference, sphere_volume, pythagoras
  :linear V=I*R;I=V/R k=v ..     substitute known values into each formula
  :format sf|dp <n>              round to n significant figures or decimal places
  :help                          show this message";

/// The state of the REPL.
#[derive(Debug, Default)]
struct Repl {
    settings: FormatSettings,
}

impl Repl {
    /// Runs one line of input, printing the result or reporting the error.
    fn execute(&mut self, line: &str) {
        if line.trim_start().starts_with(':') {
            match Command::parse(line) {
                Ok(command) => self.run(command),
                Err(err) => report_to_stderr(&err, line),
            }
        } else {
            self.print_parsed(line);
        }
    }

    fn run(&mut self, command: Command) {
        let settings = Some(&self.settings);
        match command {
            Command::Exact(value) => self.print_number(&convert_to_exact(value, settings)),
            Command::Pi(value) => self.print_number(&convert_with_pi(value, settings)),
            Command::Quadratic(inputs) => self.print_results(&solve_quadratic(&inputs, settings)),
            Command::Cubic(inputs) => self.print_results(&solve_cubic(&inputs, settings)),
            Command::Suvat(inputs) => self.print_results(&solve_suvat(&inputs, settings)),
            Command::Geometric { formula, inputs } => {
                self.print_results(&solve_geometric(formula, &inputs, settings))
            },
            Command::Linear { formulas, inputs } => {
                self.print_results(&solve_linear(formulas, &inputs, settings))
            },
            Command::Format(number_format, count) => {
                let builder = self.settings.into_builder().number_format(number_format);
                self.settings = match number_format {
                    NumberFormat::DecimalPlaces => builder.decimal_places(count),
                    NumberFormat::SignificantFigures => builder.significant_figures(count),
                }.build();
                log::debug!("format settings are now {:?}", self.settings);
            },
            Command::Help => println!("{}", HELP),
        }
    }

    /// Parses free-text number input and prints its detected format and exact form.
    fn print_parsed(&self, line: &str) {
        let parsed = parse_input(line);
        if let Some(err) = &parsed.error {
            report_to_stderr(err, line);
            return;
        }

        let format = match parsed.detected_format {
            DetectedFormat::Unknown => "unknown",
            DetectedFormat::Integer => "integer",
            DetectedFormat::Fraction => "fraction",
            DetectedFormat::MixedFraction => "mixed fraction",
            DetectedFormat::Surd => "surd",
            DetectedFormat::Pi => "pi",
            DetectedFormat::Decimal => "decimal",
            DetectedFormat::Expression => "expression",
        };
        println!("{} ({})", self.describe(&parsed.value), format);
    }

    fn print_number(&self, number: &ExactNumber) {
        println!("{} ({})", self.describe(number), number.number_type());
    }

    fn print_results(&self, results: &SolverResult) {
        if results.is_empty() {
            println!("nothing could be solved from the given values");
        }
        for (name, number) in results {
            println!("{} = {}", name, self.describe(number));
        }
    }

    /// `latex ≈ decimal`, using the active settings for the decimal.
    fn describe(&self, number: &ExactNumber) -> String {
        format!("{} ≈ {}", number.latex(), format_for_display(number.value(), &self.settings))
    }
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let mut repl = Repl::default();

    let mut args = std::env::args();
    args.next();

    if let Some(filename) = args.next() {
        // run each line of a file
        match fs::read_to_string(&filename) {
            Ok(input) => input.lines().filter(|line| !line.trim().is_empty()).for_each(|line| repl.execute(line)),
            Err(err) => {
                eprintln!("cannot read `{}`: {}", filename, err);
                std::process::exit(1);
            },
        }
    } else if !io::stdin().is_terminal() {
        // read lines from stdin
        let mut input = String::new();
        if let Err(err) = io::stdin().read_to_string(&mut input) {
            eprintln!("cannot read stdin: {}", err);
            std::process::exit(1);
        }
        input.lines().filter(|line| !line.trim().is_empty()).for_each(|line| repl.execute(line));
    } else {
        // run the repl / interactive mode
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(err) => {
                eprintln!("{}", err);
                std::process::exit(1);
            },
        };

        fn process_line(rl: &mut DefaultEditor, repl: &mut Repl) -> Result<(), ReadlineError> {
            let input = rl.readline("> ")?;
            if input.trim().is_empty() {
                return Ok(());
            }

            rl.add_history_entry(&input)?;

            repl.execute(&input);
            Ok(())
        }

        loop {
            if let Err(err) = process_line(&mut rl, &mut repl) {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            }
        }
    }
}
