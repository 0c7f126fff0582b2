use rustyline::{DefaultEditor, error::ReadlineError};

use crate::{evaluate_expression, interpreter::lexer::tokenize, parse_expression};

/// Prompt shown before each line in interactive mode.
pub const DEFAULT_PROMPT: &str = "Enter expression (or \"exit\" to quit): ";

/// What to print besides the result of each expression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Print the token stream before the result.
    pub show_tokens: bool,
    /// Print the parsed tree before the result.
    pub show_tree:   bool,
}

/// Returns `true` if `line` asks the shell to quit.
///
/// The match is case-insensitive and ignores surrounding whitespace.
///
/// # Example
/// ```
/// use calcu::repl::is_exit_command;
///
/// assert!(is_exit_command("exit"));
/// assert!(is_exit_command("  EXIT "));
/// assert!(!is_exit_command("exit now"));
/// ```
#[must_use]
pub fn is_exit_command(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("exit")
}

/// Returns the diagnostic lines requested by `options` for `source`.
///
/// A stage that fails contributes nothing here; its error is reported by
/// evaluation instead.
#[must_use]
pub fn diagnostics(source: &str, options: Options) -> Vec<String> {
    let mut lines = Vec::new();
    if options.show_tokens
       && let Ok(tokens) = tokenize(source)
    {
        let rendered: Vec<String> = tokens.iter().map(|(token, _)| token.to_string()).collect();
        lines.push(rendered.join(" "));
    }
    if options.show_tree
       && let Ok(tree) = parse_expression(source)
    {
        lines.push(tree.to_string());
    }
    lines
}

/// Evaluates `source` and returns everything the shell prints for it.
///
/// The last line is either the value or the error message.
///
/// # Example
/// ```
/// use calcu::repl::{Options, render};
///
/// assert_eq!(render("(2 + 3) * 4", Options::default()), "20");
/// assert_eq!(render("5 / 0", Options::default()),
///            "Error at position 2: Division by zero.");
/// ```
#[must_use]
pub fn render(source: &str, options: Options) -> String {
    let mut lines = diagnostics(source, options);
    match evaluate_expression(source) {
        Ok(value) => lines.push(value.to_string()),
        Err(e) => lines.push(e.to_string()),
    }
    lines.join("\n")
}

/// Line-based interactive shell.
///
/// Each line is evaluated on its own; an error is printed and the loop goes
/// on. The loop ends on `exit` or end of input (Ctrl-D).
pub struct Repl {
    editor:  DefaultEditor,
    prompt:  String,
    options: Options,
}

impl Repl {
    /// Creates a shell with an in-memory history.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be set up for line editing.
    pub fn new(prompt: impl Into<String>, options: Options) -> rustyline::Result<Self> {
        Ok(Self { editor: DefaultEditor::new()?,
                  prompt: prompt.into(),
                  options })
    }

    /// Runs the read-evaluate-print loop until the user quits.
    ///
    /// # Errors
    /// Returns any terminal error other than Ctrl-C or end of input.
    pub fn run(&mut self) -> rustyline::Result<()> {
        loop {
            match self.editor.readline(&self.prompt) {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    if is_exit_command(&line) {
                        break;
                    }
                    self.editor.add_history_entry(line.as_str())?;
                    println!("{}", render(&line, self.options));
                },
                Err(ReadlineError::Interrupted) => {
                    println!("(Interrupted)");
                },
                Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e),
            }
        }
        tracing::debug!("shell closed");
        Ok(())
    }
}
