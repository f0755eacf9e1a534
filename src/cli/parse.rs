use clap::Args;

use super::{parse_or_exit, Source};

#[derive(Args)]
pub struct ParseArgs {
    #[command(flatten)]
    pub source: Source,
}

pub fn cmd_parse(args: ParseArgs) {
    let program = args.source.read();
    println!("{}", parse_or_exit(&program));
}
