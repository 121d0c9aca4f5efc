//! Parsing of the `:`-prefixed REPL commands.

use crate::error::{offset, ExpectedAssignment, InvalidValue, UnknownCommand, Usage};
use exact_compute::{numerical::{eval_str, Ctxt}, parse_input, solver::Inputs, NumberFormat};
use exact_error::Error;
use std::ops::Range;

/// A whitespace-separated word of a command line, with its position in the line.
#[derive(Debug, Clone, PartialEq)]
struct Word<'a> {
    text: &'a str,
    span: Range<usize>,
}

/// Splits the line into whitespace-separated words.
fn words(line: &str) -> Vec<Word<'_>> {
    let mut words = Vec::new();
    let mut start = None;
    for (i, c) in line.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                words.push(Word { text: &line[s..i], span: s..i });
                start = None;
            },
            (false, None) => start = Some(i),
            _ => (),
        }
    }
    if let Some(s) = start {
        words.push(Word { text: &line[s..], span: s..line.len() });
    }
    words
}

/// A command entered at the prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum Command<'a> {
    /// `:exact <expr>`: the exact form of an expression.
    Exact(f64),

    /// `:pi <expr>`: the exact form of an expression, preferring multiples of π.
    Pi(f64),

    /// `:quadratic a b c`: the roots of `ax^2 + bx + c = 0`.
    Quadratic(Inputs),

    /// `:cubic a b c d`: the real roots of `ax^3 + bx^2 + cx + d = 0`.
    Cubic(Inputs),

    /// `:suvat s=.. u=.. t=..`: the missing SUVAT variables.
    Suvat(Inputs),

    /// `:geometric <formula> k=v ..`: the missing variables of a named geometric formula.
    Geometric {
        formula: &'a str,
        inputs: Inputs,
    },

    /// `:linear V=I*R;I=V/R k=v ..`: substitution into one formula per variable.
    Linear {
        formulas: Vec<(&'a str, &'a str)>,
        inputs: Inputs,
    },

    /// `:format sf|dp <n>`: change how decimals are rounded.
    Format(NumberFormat, usize),

    /// `:help`: list the commands.
    Help,
}

impl<'a> Command<'a> {
    /// Parses a command line. The line must start with `:`, optionally after whitespace. Spans of
    /// the returned error point into the line.
    pub fn parse(line: &'a str) -> Result<Self, Error> {
        let words = words(line);
        let Some((head, args)) = words.split_first() else {
            return Err(Error::new(vec![0..line.len()], UnknownCommand { name: String::new() }));
        };
        let name = head.text.trim_start_matches(':');
        let usage = |name, usage| Error::new(vec![head.span.clone()], Usage { name, usage });

        match name {
            "exact" | "pi" => {
                let rest = &line[head.span.end..];
                if rest.trim().is_empty() {
                    return Err(match name {
                        "pi" => usage("pi", ":pi <expression>"),
                        _ => usage("exact", ":exact <expression>"),
                    });
                }
                let value = eval_str(rest, &Ctxt::default())
                    .map_err(|err| offset(err, head.span.end))?;
                Ok(if name == "pi" { Command::Pi(value) } else { Command::Exact(value) })
            },
            "quadratic" => match args {
                [a, b, c] => Ok(Command::Quadratic(positional(&[("a", a), ("b", b), ("c", c)])?)),
                _ => Err(usage("quadratic", ":quadratic <a> <b> <c>")),
            },
            "cubic" => match args {
                [a, b, c, d] => Ok(Command::Cubic(
                    positional(&[("a", a), ("b", b), ("c", c), ("d", d)])?,
                )),
                _ => Err(usage("cubic", ":cubic <a> <b> <c> <d>")),
            },
            "suvat" => Ok(Command::Suvat(assignments(args)?)),
            "geometric" => match args {
                [formula, rest @ ..] => Ok(Command::Geometric {
                    formula: formula.text,
                    inputs: assignments(rest)?,
                }),
                [] => Err(usage("geometric", ":geometric <formula> <name>=<value> ..")),
            },
            "linear" => match args {
                [formulas, rest @ ..] => Ok(Command::Linear {
                    formulas: relationships(formulas)?,
                    inputs: assignments(rest)?,
                }),
                [] => Err(usage("linear", ":linear <var>=<formula>;.. <name>=<value> ..")),
            },
            "format" => match args {
                [mode, count] => {
                    let number_format = match mode.text {
                        "sf" => NumberFormat::SignificantFigures,
                        "dp" => NumberFormat::DecimalPlaces,
                        _ => return Err(usage("format", ":format sf|dp <count>")),
                    };
                    let count = count.text.parse::<usize>().map_err(|err| Error::new(
                        vec![count.span.clone()],
                        InvalidValue { text: count.text.to_string(), reason: err.to_string() },
                    ))?;
                    Ok(Command::Format(number_format, count))
                },
                _ => Err(usage("format", ":format sf|dp <count>")),
            },
            "help" => Ok(Command::Help),
            _ => Err(Error::new(vec![head.span.clone()], UnknownCommand { name: name.to_string() })),
        }
    }
}

/// Reads a number with the free-text input parser, so that `1/3`, `2sqrt(3)` and `pi/2` are all
/// accepted.
fn value(word: &Word, text: &str, start: usize) -> Result<f64, Error> {
    let parsed = parse_input(text);
    match parsed.error {
        Some(err) => Err(offset(err, start)),
        None if parsed.value.value().is_finite() => Ok(parsed.value.value()),
        None => Err(Error::new(
            vec![word.span.clone()],
            InvalidValue { text: text.to_string(), reason: "the value is not finite".to_string() },
        )),
    }
}

/// Reads positional arguments into named inputs.
fn positional(args: &[(&str, &Word)]) -> Result<Inputs, Error> {
    args.iter()
        .map(|(name, word)| Ok((name.to_string(), value(word, word.text, word.span.start)?)))
        .collect()
}

/// Reads `name=value` arguments into named inputs.
fn assignments(args: &[Word]) -> Result<Inputs, Error> {
    args.iter()
        .map(|word| {
            let (name, text) = word.text.split_once('=')
                .filter(|(name, text)| !name.is_empty() && !text.is_empty())
                .ok_or_else(|| Error::new(vec![word.span.clone()], ExpectedAssignment))?;
            let start = word.span.start + name.len() + 1;
            Ok((name.to_string(), value(word, text, start)?))
        })
        .collect()
}

/// Reads `;`-separated `variable=formula` pairs.
fn relationships<'a>(word: &Word<'a>) -> Result<Vec<(&'a str, &'a str)>, Error> {
    word.text.split(';')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            pair.split_once('=')
                .filter(|(variable, formula)| !variable.is_empty() && !formula.is_empty())
                .ok_or_else(|| Error::new(vec![word.span.clone()], ExpectedAssignment))
        })
        .collect()
}
