use anyhow::{Context, Result};
use calculator::interpreter::parser::PrecedenceMode;
use calculator::interpreter::{convert, evaluate_with, tokens_to_string, Settings};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::LevelFilter;

/// Evaluates the given arithmetic expression
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to evaluate, e.g. "(2 + 3) * 4"
    expression: String,

    /// Let each operator pop at most one held operator when resolving precedence
    #[clap(long)]
    single_pop: bool,

    /// Print the expression tree and its infix form before the result
    #[clap(long)]
    tree: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

impl Arguments {
    fn settings(&self) -> Settings {
        let mode = if self.single_pop {
            PrecedenceMode::SinglePop
        } else {
            PrecedenceMode::Standard
        };
        Settings::with_precedence_mode(mode)
    }
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(
            args.verbose
                .log_level()
                .map_or(LevelFilter::Off, |level| level.to_level_filter()),
        )
        .init();

    let settings = args.settings();

    if args.tree {
        print_tree(&args.expression, &settings)?;
    }

    let result = evaluate_with(&args.expression, &settings)
        .with_context(|| format!("could not evaluate expression '{}'", args.expression))?;
    println!("{}", result);
    Ok(())
}

fn print_tree(expression: &str, settings: &Settings) -> Result<()> {
    let tree = convert(expression, settings)
        .with_context(|| format!("could not parse expression '{}'", expression))?;
    match tree {
        Some(tree) => {
            print!("{}", tree);
            let infix =
                tokens_to_string(tree.to_infix()).context("Failed to build token string")?;
            println!("{}", infix);
        }
        None => println!("(empty expression)"),
    }
    Ok(())
}
