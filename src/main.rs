/*!
Main binary for jsonlex.
*/

use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_verbosity_flag::Verbosity;
use std::io::{self, IsTerminal, Read, Write};
use std::{fs, path::PathBuf};

use jsonlex::{commands, tokenizer::Lexer, utils};

/// Tokenize a JSON document and print its token stream.
#[derive(Parser)]
#[command(name = "jl", version, about, long_about = None, disable_help_subcommand = true)]
struct Args {
    /// Optional subcommands
    #[command(subcommand)]
    command: Option<Commands>,
    #[arg(value_name = "FILE")]
    /// Optional path to JSON file. If omitted, reads from STDIN
    input: Option<PathBuf>,
    /// Emit the token stream as a JSON array. Numbers that overflow are
    /// written as the strings "inf" / "-inf"
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,
    /// Omit whitespace (`Blank`) tokens from the output
    #[arg(long, action = ArgAction::SetTrue)]
    skip_blanks: bool,
    /// Show the `start..end` character offsets of each token
    #[arg(long, action = ArgAction::SetTrue)]
    offsets: bool,
    /// Display count of number of tokens
    #[arg(long, action = ArgAction::SetTrue)]
    count: bool,
    /// Disable colored output
    #[arg(long, action = ArgAction::SetTrue)]
    no_color: bool,
    #[command(flatten)]
    verbose: Verbosity,
}

/// Available subcommands for `jl`
#[derive(Subcommand)]
enum Commands {
    #[command(subcommand)]
    /// Generate additional documentation and/or completions
    Generate(GenerateCommand),
}

/// Generate shell completions and man page
#[derive(Subcommand)]
enum GenerateCommand {
    /// Generate shell completions for the given shell to stdout.
    Shell { shell: clap_complete::Shell },
    /// Generate a man page for jl to output directory if specified, else
    /// the current directory.
    Man {
        /// The output directory to write the man pages.
        #[clap(short, long)]
        output_dir: Option<PathBuf>,
    },
}

/// Entry point for main binary.
///
/// Reads the document from FILE, or from STDIN when it is piped in, and prints
/// the tokens to STDOUT. A lex error is reported on STDERR after the tokens
/// produced before it, and the process exits with status 1.
fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .parse_default_env()
        .init();

    if args.no_color || !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    match args.command {
        Some(Commands::Generate(cmd)) => match cmd {
            GenerateCommand::Shell { shell } => {
                commands::generate::generate_completions(
                    shell,
                    &mut Args::command(),
                    &mut io::stdout().lock(),
                );
            }
            GenerateCommand::Man { output_dir } => {
                for path in commands::generate::generate_man_pages(
                    &Args::command(),
                    output_dir,
                )? {
                    println!("Generated: {}", path.display());
                }
            }
        },
        None => {
            let text = if let Some(path) = &args.input {
                fs::read_to_string(path).with_context(|| {
                    format!("Failed to read file {}", path.display())
                })?
            } else {
                if io::stdin().is_terminal() {
                    // No piped input and no file specified
                    let mut cmd = Args::command();
                    return Ok(cmd.print_help()?);
                }
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read STDIN")?;
                buffer
            };

            let (tokens, error) = Lexer::new().lex_spanned(&text);
            let shown: Vec<_> = tokens
                .iter()
                .filter(|s| !(args.skip_blanks && s.token.is_blank()))
                .collect();

            let mut out = io::stdout().lock();
            if args.json {
                let json = if args.offsets {
                    serde_json::to_string_pretty(&shown)?
                } else {
                    let plain: Vec<_> =
                        shown.iter().map(|s| &s.token).collect();
                    serde_json::to_string_pretty(&plain)?
                };
                writeln!(out, "{json}")?;
            } else {
                for spanned in &shown {
                    utils::write_colored_token(
                        &mut out,
                        spanned,
                        args.offsets,
                    )?;
                }
            }

            if args.count {
                writeln!(out, "Tokens: {}", shown.len())?;
            }

            if let Some(error) = error {
                out.flush()?;
                eprintln!("{}", utils::render_diagnostic(&text, &error));
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
