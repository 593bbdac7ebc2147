//! # Interactive prompt
//!
//! A line based loop that asks for a distribution type and it's parameters,
//! builds the distribution with the [factory](crate::factory) and prints a label and
//! a sample. A line starting with `{` is read as a `{type, params}` record instead.
//!
//! The loop reads from any [BufRead] and writes to any [Write], so it can
//! be driven by stdin/stdout or by in-memory buffers.
//!

use std::io::{self, BufRead, Lines, Write};

use rand::Rng;

use crate::{
    codec,
    configuration::{DISPLAY_PRECISION, QUIT_COMMAND},
    distribution_trait::Distribution,
    errors::DistError,
    factory::{AnyDistribution, DistributionKind, create_distribution},
};

/// What happened during a [run_prompt] session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PromptSummary {
    /// Distributions built and sampled.
    pub created: usize,
    /// Inputs that ended in an error message.
    pub rejected: usize,
}

/// Runs the interactive prompt until the quit command or the end of `input`.
///
/// ## Inputs:
///
/// 1. `input`: where the lines are read from.
/// 2. `output`: where prompts, results and error messages are written.
/// 3. `rng`: the random source used for every sample of the session.
/// 4. `quit_command`: (optional) the line that ends the loop.
///      - The default is [QUIT_COMMAND].
/// 5. `show_record`: (optional) also print the JSON record of every distribution.
///      - The default is `false`.
///
/// Errors of the distributions are printed and the loop continues. Only
/// I/O errors are returned.
#[bon::builder]
pub fn run_prompt<I: BufRead, W: Write, G: Rng>(
    input: I,
    output: &mut W,
    rng: &mut G,
    quit_command: Option<&str>,
    #[builder(default)] show_record: bool,
) -> io::Result<PromptSummary> {
    let quit: String = quit_command.unwrap_or(QUIT_COMMAND).trim().to_lowercase();
    let mut summary: PromptSummary = PromptSummary::default();
    let mut lines: Lines<I> = input.lines();

    loop {
        writeln!(
            output,
            "\nChoose a distribution (normal, poisson, uniform), paste a record, or '{}' to exit:",
            quit
        )?;

        let line: String = match lines.next() {
            Some(l) => l?,
            None => break,
        };
        let command: String = line.trim().to_lowercase();

        // checked before skipping blank lines, so an empty quit command still works
        if command == quit {
            writeln!(output, "Exiting...")?;
            break;
        }

        if command.is_empty() {
            continue;
        }

        let result: Result<AnyDistribution, DistError> = if command.starts_with('{') {
            // records keep their original case
            codec::decode(line.trim().as_bytes())
        } else {
            let kind: DistributionKind = match command.parse::<DistributionKind>() {
                Ok(k) => k,
                Err(e) => {
                    writeln!(output, "Error: {}", e)?;
                    summary.rejected += 1;
                    continue;
                }
            };

            writeln!(
                output,
                "Enter the {}, separated by spaces:",
                kind.parameter_names().join(" and ")
            )?;

            let params: Vec<f64> = match read_parameters(&mut lines, output, kind.arity())? {
                Some(p) => p,
                None => break,
            };

            create_distribution(kind.name(), &params)
        };

        match result {
            Ok(distribution) => {
                let sample: f64 = distribution.sample(rng);
                tracing::debug!(%distribution, sample, "sample drawn");

                writeln!(output, "Distribution: {}", distribution.label())?;
                writeln!(output, "Sample: {:.*}", DISPLAY_PRECISION, sample)?;
                if show_record {
                    writeln!(output, "Record: {}", codec::encode_to_string(&distribution))?;
                }
                summary.created += 1;
            }
            Err(e) => {
                writeln!(output, "Error: {}", e)?;
                summary.rejected += 1;
            }
        }
    }

    tracing::debug!(
        created = summary.created,
        rejected = summary.rejected,
        "prompt finished"
    );
    return Ok(summary);
}

/// Reads numbers from `lines` until there are `count` of them.
///
/// Tokens that are not numbers are skipped and extra numbers in a line are
/// ignored. Asks for the missing numbers when a line falls short.
/// Returns `None` if the input ends first.
fn read_parameters<B: BufRead, W: Write>(
    lines: &mut Lines<B>,
    output: &mut W,
    count: usize,
) -> io::Result<Option<Vec<f64>>> {
    let mut params: Vec<f64> = Vec::with_capacity(count);

    loop {
        let line: String = match lines.next() {
            Some(l) => l?,
            None => return Ok(None),
        };

        for token in line.split_whitespace() {
            if params.len() == count {
                break;
            }
            match token.parse::<f64>() {
                Ok(num) => params.push(num),
                Err(_) => tracing::debug!(token, "skipping token that is not a number"),
            }
        }

        if params.len() == count {
            return Ok(Some(params));
        }

        writeln!(
            output,
            "Please provide {} more number(s), separated by spaces:",
            count - params.len()
        )?;
    }
}
