use std::io::{self, BufRead, IsTerminal, Write};

use clap::Args;
use nock::diagnostic::render_diagnostics;
use nock::{parse, Interpreter, Revision};

use super::resolve_revision;

#[derive(Args)]
pub struct ReplArgs {
    /// Nock revision: 4 (4K) or 5 (5K). Defaults to nock.toml, then the current one.
    #[arg(short, long)]
    pub revision: Option<Revision>,
}

/// What one line of input asks for.
#[derive(Debug, PartialEq)]
enum Line<'a> {
    Skip,
    Switch(&'a str),
    Program(&'a str),
}

fn classify(line: &str) -> Line<'_> {
    let line = line.trim();
    if line.is_empty() || line.starts_with("::") {
        return Line::Skip;
    }
    match line.strip_prefix(":revision") {
        Some(rest) => Line::Switch(rest.trim()),
        None => Line::Program(line),
    }
}

pub fn cmd_repl(args: ReplArgs) {
    let mut interpreter = Interpreter::new(resolve_revision(args.revision));
    let interactive = io::stdin().is_terminal();
    if interactive {
        eprintln!(
            "Nock {} (`:revision 4` or `:revision 5` to switch, Ctrl-D to quit)",
            interpreter.revision()
        );
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("{}> ", interpreter.revision());
            let _ = io::stdout().flush();
        }
        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("error: cannot read stdin: {}", e);
                break;
            }
            None => break,
        };

        match classify(&line) {
            Line::Skip => {}
            Line::Switch(name) => match name.parse::<Revision>() {
                Ok(revision) => {
                    interpreter = Interpreter::new(revision);
                    println!("switched to Nock {}", revision);
                }
                Err(e) => eprintln!("error: {}", e),
            },
            Line::Program(text) => match parse(text) {
                Ok(noun) => match interpreter.nock(&noun) {
                    Ok(product) => println!("{}", product),
                    Err(crash) => eprintln!("error: crash: {}", crash),
                },
                Err(diagnostics) => render_diagnostics(&diagnostics, "<repl>", text),
            },
        }
    }
}
