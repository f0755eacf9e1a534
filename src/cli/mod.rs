pub mod compare;
pub mod eval;
pub mod parse;
pub mod repl;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

use clap::Args;
use nock::config::Config;
use nock::diagnostic::render_diagnostics;
use nock::{Noun, Revision};

/// Where a command reads its program from.
#[derive(Args)]
pub struct Source {
    /// Noun in bracket notation, e.g. `[42 [4 0 1]]`
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    pub expr: Option<String>,
    /// Read the noun from a file instead (`-` for stdin)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

/// Program text plus the name diagnostics should show for it.
pub struct Program {
    pub name: String,
    pub text: String,
}

impl Source {
    pub fn read(&self) -> Program {
        match (&self.expr, &self.file) {
            (Some(expr), _) => Program {
                name: "<expr>".to_string(),
                text: expr.clone(),
            },
            (None, Some(path)) if path.as_os_str() == "-" => {
                let mut text = String::new();
                if let Err(e) = std::io::stdin().read_to_string(&mut text) {
                    eprintln!("error: cannot read stdin: {}", e);
                    process::exit(1);
                }
                Program {
                    name: "<stdin>".to_string(),
                    text,
                }
            }
            (None, Some(path)) => Program {
                name: path.display().to_string(),
                text: read_file(path),
            },
            (None, None) => {
                eprintln!("error: no program given; pass an expression or --file");
                process::exit(1);
            }
        }
    }
}

pub fn read_file(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("error: cannot read '{}': {}", path.display(), e);
            process::exit(1);
        }
    }
}

/// Read one noun, or render the diagnostics and exit.
pub fn parse_or_exit(program: &Program) -> Noun {
    match nock::parse(&program.text) {
        Ok(noun) => noun,
        Err(diagnostics) => {
            render_diagnostics(&diagnostics, &program.name, &program.text);
            process::exit(1);
        }
    }
}

/// Pick the revision: the flag, then the nearest nock.toml, then the current one.
pub fn resolve_revision(flag: Option<Revision>) -> Revision {
    if let Some(revision) = flag {
        return revision;
    }
    let start = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    match Config::discover(&start) {
        Ok(config) => config.resolve_revision(None),
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}
