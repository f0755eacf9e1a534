use std::process;

use clap::Args;
use nock::{nock_with, Revision};

use super::{parse_or_exit, resolve_revision, Source};

#[derive(Args)]
pub struct EvalArgs {
    #[command(flatten)]
    pub source: Source,
    /// Nock revision: 4 (4K) or 5 (5K). Defaults to nock.toml, then the current one.
    #[arg(short, long)]
    pub revision: Option<Revision>,
}

pub fn cmd_eval(args: EvalArgs) {
    let program = args.source.read();
    let noun = parse_or_exit(&program);
    let revision = resolve_revision(args.revision);

    match nock_with(revision, &noun) {
        Ok(product) => println!("{}", product),
        Err(crash) => {
            eprintln!("error: Nock {} crashed: {}", revision, crash);
            process::exit(1);
        }
    }
}
