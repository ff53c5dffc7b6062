use anyhow::Result;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use minus::Pager;
use std::path::Path;
use std::process::ExitCode;
use twig::areas::repository::Repository;
use twig::artifacts::core::PagerWriter;
use twig::config::Config;
use twig::errors::RepositoryError;
use twig::telemetry;

#[derive(Parser)]
#[command(
    name = "twig",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A tiny local version-control system",
    long_about = "twig keeps content-addressed snapshots of the files in the current directory, \
    supports lightweight branches and merges them with a three-way merge.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Create a new repository in the current directory"
    )]
    Init,
    #[command(name = "add", about = "Stage a file for the next commit")]
    Add {
        #[arg(index = 1)]
        file: String,
    },
    #[command(
        name = "commit",
        about = "Record the staged snapshot with the given message"
    )]
    Commit {
        #[arg(index = 1, allow_hyphen_values = true)]
        message: String,
    },
    #[command(
        name = "rm",
        about = "Unstage a file, or stop tracking it and delete it"
    )]
    Rm {
        #[arg(index = 1)]
        file: String,
    },
    #[command(
        name = "log",
        about = "Show the first-parent history of the current branch"
    )]
    Log,
    #[command(name = "global-log", about = "Show every commit ever made")]
    GlobalLog,
    #[command(name = "find", about = "Print the ids of commits with the given message")]
    Find {
        #[arg(index = 1, allow_hyphen_values = true)]
        message: String,
    },
    #[command(
        name = "status",
        about = "Show branches, staged files and working tree changes"
    )]
    Status,
    #[command(
        name = "checkout",
        about = "Switch branches or restore a file",
        long_about = "checkout <branch> switches to a branch, \
        checkout -- <file> restores a file from the head commit and \
        checkout <commit> -- <file> restores it from the given commit."
    )]
    Checkout {
        #[arg(index = 1)]
        target: Option<String>,
        #[arg(index = 2, last = true)]
        file: Option<String>,
    },
    #[command(name = "branch", about = "Create a branch at the current head")]
    Branch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(name = "rm-branch", about = "Delete a branch pointer")]
    RmBranch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(
        name = "reset",
        about = "Move the current branch to a commit and check it out"
    )]
    Reset {
        #[arg(index = 1)]
        commit: String,
    },
    #[command(name = "merge", about = "Merge a branch into the current branch")]
    Merge {
        #[arg(index = 1)]
        branch: String,
    },
}

impl Commands {
    fn is_paged(&self) -> bool {
        matches!(self, Commands::Log | Commands::GlobalLog | Commands::Status)
    }

    fn mutates_state(&self) -> bool {
        !matches!(
            self,
            Commands::Init
                | Commands::Log
                | Commands::GlobalLog
                | Commands::Find { .. }
                | Commands::Status
        )
    }
}

fn parse_command() -> Result<Commands> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            use clap::error::ErrorKind;

            return match error.kind() {
                ErrorKind::DisplayHelp
                | ErrorKind::DisplayVersion
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => error.exit(),
                ErrorKind::InvalidSubcommand => Err(RepositoryError::UnknownCommand.into()),
                ErrorKind::MissingSubcommand => Err(RepositoryError::MissingCommand.into()),
                _ => Err(RepositoryError::IncorrectOperands.into()),
            };
        }
    };

    cli.command
        .ok_or_else(|| RepositoryError::MissingCommand.into())
}

fn open_repository(
    command: &Commands,
    pwd: &Path,
    writer: Box<dyn std::io::Write>,
    config: Config,
) -> Result<Repository> {
    match command {
        Commands::Init => Repository::init(pwd, writer, config),
        _ => Repository::open(pwd, writer, config),
    }
}

fn execute(repository: &mut Repository, command: &Commands) -> Result<()> {
    match command {
        // creating the repository already did all the work
        Commands::Init => Ok(()),
        Commands::Add { file } => repository.add(file),
        Commands::Commit { message } => repository.commit(message).map(|_| ()),
        Commands::Rm { file } => repository.rm(file),
        Commands::Log => repository.log(),
        Commands::GlobalLog => repository.global_log(),
        Commands::Find { message } => repository.find(message),
        Commands::Status => repository.status(),
        Commands::Checkout { target, file } => match (target, file) {
            (Some(branch), None) => repository.checkout_branch(branch),
            (None, Some(file)) => repository.checkout_file(file),
            (Some(commit), Some(file)) => repository.checkout_commit_file(commit, file),
            (None, None) => Err(RepositoryError::IncorrectOperands.into()),
        },
        Commands::Branch { name } => repository.branch(name),
        Commands::RmBranch { name } => repository.rm_branch(name),
        Commands::Reset { commit } => repository.reset(commit),
        Commands::Merge { branch } => repository.merge(branch).map(|_| ()),
    }
}

fn run() -> Result<()> {
    let command = parse_command()?;
    let config = Config::load_from_env();
    let pwd = std::env::current_dir()?;

    let pager = (command.is_paged() && config.use_pager()).then(Pager::new);
    let writer: Box<dyn std::io::Write> = match &pager {
        Some(pager) => Box::new(PagerWriter::new(pager.clone())),
        None => Box::new(std::io::stdout()),
    };

    let mut repository = open_repository(&command, &pwd, writer, config)?;
    execute(&mut repository, &command)?;

    if command.mutates_state() {
        repository.save()?;
    }
    drop(repository);

    if let Some(pager) = pager {
        minus::page_all(pager)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    telemetry::init();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => match error.downcast_ref::<RepositoryError>() {
            Some(domain_error) => {
                println!("{domain_error}");
                ExitCode::SUCCESS
            }
            None => {
                eprintln!("fatal: {error:#}");
                ExitCode::FAILURE
            }
        },
    }
}
