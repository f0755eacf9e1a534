use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;

mod cli;

#[derive(Parser)]
#[command(
    name = "nock",
    version,
    about = "Nock interpreter for the 4K and 5K revisions"
)]
struct Cli {
    /// Raise the log level (-v debug, -vv trace). RUST_LOG is honoured too.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate a program `[subject formula]` and print the product
    Eval(cli::eval::EvalArgs),
    /// Evaluate under every revision and report whether they agree
    Compare(cli::compare::CompareArgs),
    /// Print the canonical, fully bracketed form of a noun
    Parse(cli::parse::ParseArgs),
    /// Read programs line by line from stdin and print each product
    Repl(cli::repl::ReplArgs),
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Eval(args) => cli::eval::cmd_eval(args),
        Command::Compare(args) => cli::compare::cmd_compare(args),
        Command::Parse(args) => cli::parse::cmd_parse(args),
        Command::Repl(args) => cli::repl::cmd_repl(args),
    }
}

fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::from_default_env();
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.format_timestamp(None).init();
}
