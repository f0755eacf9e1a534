use std::process;

use clap::Args;
use nock::diagnostic::render_diagnostics;
use nock::{nock_with, Crash, Noun, Revision};
use rayon::prelude::*;

use super::{parse_or_exit, Program, Source};

#[derive(Args)]
pub struct CompareArgs {
    #[command(flatten)]
    pub source: Source,
    /// Treat the input as one program per line (blank and `::` lines skipped)
    #[arg(long)]
    pub lines: bool,
}

/// The product of one program under every revision, newest first.
struct Outcomes {
    results: Vec<(Revision, Result<Noun, Crash>)>,
}

impl Outcomes {
    fn run(noun: &Noun) -> Self {
        let results = Revision::ALL
            .iter()
            .map(|&revision| (revision, nock_with(revision, noun)))
            .collect();
        Outcomes { results }
    }

    /// All products equal, or every revision crashed.
    fn agree(&self) -> bool {
        let mut products = self.results.iter().map(|(_, r)| r.as_ref().ok());
        match products.next() {
            Some(first) => products.all(|p| p == first),
            None => true,
        }
    }

    fn print(&self, indent: &str) {
        for (revision, result) in &self.results {
            match result {
                Ok(product) => println!("{}{}: {}", indent, revision, product),
                Err(crash) => println!("{}{}: crash: {}", indent, revision, crash),
            }
        }
    }
}

pub fn cmd_compare(args: CompareArgs) {
    let program = args.source.read();
    if args.lines {
        compare_lines(&program);
        return;
    }

    let noun = parse_or_exit(&program);
    let outcomes = Outcomes::run(&noun);
    outcomes.print("");
    if !outcomes.agree() {
        eprintln!("error: revisions disagree");
        process::exit(1);
    }
}

fn compare_lines(program: &Program) {
    let lines: Vec<(usize, &str)> = program
        .text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with("::"))
        .collect();

    // Parse every line up front and report all bad lines before any work runs.
    let mut parsed: Vec<(usize, &str, Noun)> = Vec::with_capacity(lines.len());
    let mut failures = 0;
    for &(number, line) in &lines {
        match nock::parse(line) {
            Ok(noun) => parsed.push((number, line, noun)),
            Err(diagnostics) => {
                failures += 1;
                let name = format!("{}:{}", program.name, number);
                render_diagnostics(&diagnostics, &name, line);
            }
        }
    }
    if failures > 0 {
        eprintln!(
            "error: {} of {} programs failed to parse",
            failures,
            lines.len()
        );
        process::exit(1);
    }

    let outcomes: Vec<Outcomes> = parsed
        .par_iter()
        .map(|(_, _, noun)| Outcomes::run(noun))
        .collect();

    let mut disagreements = 0;
    for ((number, line, _), outcome) in parsed.iter().zip(&outcomes) {
        let mark = if outcome.agree() { "ok" } else { "DIFF" };
        println!("{:>4} {:<4} {}", number, mark, line);
        if !outcome.agree() {
            disagreements += 1;
            outcome.print("          ");
        }
    }

    if disagreements > 0 {
        eprintln!(
            "error: revisions disagree on {} of {} programs",
            disagreements,
            parsed.len()
        );
        process::exit(1);
    }
}
