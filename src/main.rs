use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use logica::{
    error::StatementError,
    interpreter::{evaluator::core::Session, lexer::scan, parser::core::parse},
    run_source,
};

/// logica is an interactive interpreter for a small propositional-logic
/// expression language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate a script file and exit instead of starting the prompt.
    #[arg(short, long)]
    file: Option<String>,

    /// Pipe mode automatically prints out the last value a script produced.
    #[arg(short, long)]
    pipe_mode: bool,
}

/// What the session does with each submitted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Print the token stream.
    Scan,
    /// Print the syntax tree.
    Parse,
    /// Evaluate against the session environment.
    Eval,
}

impl Mode {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "scan" => Some(Self::Scan),
            "parse" => Some(Self::Parse),
            "eval" => Some(Self::Eval),
            _ => None,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Scan => "scan",
            Self::Parse => "parse",
            Self::Eval => "eval",
        }
    }
}

fn main() {
    let args = Args::parse();

    if let Some(path) = args.file {
        let script = fs::read_to_string(&path).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
            std::process::exit(1);
        });

        if let Err(e) = run_source(&script, args.pipe_mode) {
            eprintln!("{e}");
        }

        return;
    }

    repl();
}

/// Runs the interactive prompt until `.quit` or end of input.
fn repl() {
    let stdin = io::stdin();
    let mut session = Session::new();
    let mut mode = Mode::Eval;

    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut text = String::new();
        match stdin.lock().read_line(&mut text) {
            Ok(0) | Err(_) => {
                println!("< Goodbye");
                return;
            },
            Ok(_) => {},
        }
        let text = text.trim();

        match text {
            ".quit" => {
                println!("< Goodbye");
                return;
            },

            ".mode" => println!("< {} mode", mode.name()),

            ".help" => {
                println!("< .mode: display or change evaluation mode to scan, parse, or eval.");
                println!("< .keyboard: print a keyboard with valid operations and their ascii representation.");
                println!("< .help: view this help text.");
                println!("< .quit: exit program.");
            },

            ".keyboard" => {
                println!("< conjunction: ∧ or ^");
                println!("< disjunction: ∨ or v");
                println!("< negation: ¬ or ! or not");
                println!("< exclusive disjunction: ⊕ or *");
                println!("< equivalence: ≡ or =");
                println!("< implication: →");
                println!("< relational: >= > <= <");
            },

            _ => {
                if text.is_empty() {
                    continue;
                } else if let Some(requested) = text.strip_prefix(".mode ") {
                    let requested = requested.trim();

                    match Mode::from_name(requested) {
                        Some(new_mode) => {
                            mode = new_mode;
                            println!("< switching to {} mode", mode.name());
                        },
                        None => {
                            println!("< error: Invalid mode `{requested}`");
                            continue;
                        },
                    }
                } else if text.starts_with('.') {
                    println!("< error: Unknown command: `{text}`. Enter `.help` for help.");
                } else if mode == Mode::Scan || text.starts_with("scan:") {
                    for token in scan(text.strip_prefix("scan:").unwrap_or(text)) {
                        println!("< {:04} {token}", token.pos);
                    }
                } else if mode == Mode::Parse || text.starts_with("parse:") {
                    let source = text.strip_prefix("parse:").unwrap_or(text);
                    let (statement, errors) = parse(&scan(source));

                    println!("{statement:#?}");

                    for error in errors {
                        println!("< error: {error}");
                    }
                } else {
                    let source = text.strip_prefix("eval:").unwrap_or(text);
                    eval_line(&mut session, source);
                }
            },
        }

        println!();
    }
}

/// Evaluates one line against the session and reports the outcome.
///
/// Expressions report `= value`, installs report `< ok`, and every error is
/// printed on its own tagged line.
fn eval_line(session: &mut Session, source: &str) {
    match session.eval_line(source) {
        Ok(Some(value)) => println!("= {value}"),

        Ok(None) => println!("< ok"),

        Err(StatementError::Parse(errors)) => {
            println!("< error: Cannot parse statement due to errors:");

            for error in errors {
                println!("< error: {error}");
            }
        },

        Err(StatementError::Eval(errors)) => {
            println!("< error: Cannot evaluate statement due to errors:");

            for error in errors {
                println!("< error: {error}");
            }
        },
    }
}
