use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use exam_bank::{logger, report, BankError, QuestionBank};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the raw bank from instead of the built-in one
    #[arg(short, long, global = true)]
    bank: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the normalized bank as JSON
    Export {
        #[arg(long)]
        pretty: bool,
    },
    /// List chapters and question-sets
    Summary,
    /// Check answers and ids for consistency
    Validate,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logger::init(args.verbose);

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode, BankError> {
    let bank = match &args.bank {
        Some(path) => QuestionBank::from_json(path)?,
        None => QuestionBank::builtin(),
    };

    match args.command {
        Command::Export { pretty } => {
            println!("{}", bank.to_json(pretty)?);
        }
        Command::Summary => {
            print!("{}", report::summary(bank.chapters()));
        }
        Command::Validate => {
            let issues = bank.validate();
            if !issues.is_empty() {
                for issue in &issues {
                    println!("{}", issue);
                }
                return Ok(ExitCode::FAILURE);
            }
            info!(
                sets = bank.total_sets(),
                questions = bank.total_questions(),
                "bank is consistent"
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}
