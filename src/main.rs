use calcu::{
    evaluate_expression,
    repl::{self, DEFAULT_PROMPT, Options, Repl},
    util::logger,
};
use clap::Parser;

/// calcu evaluates arithmetic expressions made of integers, `+ - * /` and
/// parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates this expression once and exits instead of starting the
    /// interactive shell.
    expression: Option<String>,

    /// Prints the parsed expression tree before the result.
    #[arg(short, long)]
    tree: bool,

    /// Prints the token stream before the result.
    #[arg(long)]
    tokens: bool,

    /// Logs debug events to stderr. Repeat for per-token trace events.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Prompt shown by the interactive shell.
    #[arg(short, long, default_value = DEFAULT_PROMPT)]
    prompt: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_with_level(logger::level_for_verbosity(args.verbose));

    let options = Options { show_tokens: args.tokens,
                            show_tree:   args.tree, };

    if let Some(expression) = args.expression {
        for line in repl::diagnostics(&expression, options) {
            println!("{line}");
        }
        match evaluate_expression(&expression) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return Ok(());
    }

    Repl::new(args.prompt, options)?.run()?;
    Ok(())
}
