use std::{
    fs,
    io::{self, BufRead},
    path::PathBuf,
    process::ExitCode,
};

use calcfront::{
    error::{
        CalcError, ContextWindow,
        diagnostic::{DEFAULT_POSTVIEW, DEFAULT_PREVIEW},
    },
    lex, parse, run_interactive,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// calcfront evaluates arithmetic expressions over decimal literals such as
/// `2.`, `.5` and `1.5e3`, reporting every lexical and syntax error with its
/// position.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat CONTENTS as a path and evaluate each non-empty line of the file.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Characters of source shown before a diagnostic's position.
    #[arg(long, default_value_t = DEFAULT_PREVIEW)]
    preview: usize,

    /// Characters of source shown after a diagnostic's position.
    #[arg(long, default_value_t = DEFAULT_POSTVIEW)]
    postview: usize,

    /// Print the token stream before evaluating.
    #[arg(short, long)]
    tokens: bool,

    /// Print the parsed tree before evaluating.
    #[arg(short, long)]
    ast: bool,

    /// The expression to evaluate. Expressions are read from standard input,
    /// one per line, when omitted.
    contents: Option<String>,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .with_ansi(false)
                             .init();

    let args = Args::parse();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

/// Evaluates every requested expression. Returns whether all of them
/// produced a number.
fn run(args: &Args) -> Result<bool, CalcError> {
    let window = ContextWindow { preview:  args.preview,
                                 postview: args.postview, };

    let lines: Vec<String> = match (&args.contents, args.file) {
        (Some(path), true) => {
            let script = fs::read_to_string(PathBuf::from(path)).inspect_err(|e| {
                             tracing::error!(path = %path, error = %e, "failed to read input file");
                         })?;
            script.lines().map(str::to_string).collect()
        },
        (Some(expression), false) => vec![expression.clone()],
        (None, _) => io::stdin().lock().lines().collect::<Result<_, _>>()?,
    };

    let mut all_ok = true;
    for line in &lines {
        let line = line.trim_end_matches('\r');
        let from_script = args.contents.is_none() || args.file;
        if from_script && line.trim().is_empty() {
            continue;
        }
        show_stages(line, args);
        all_ok &= run_interactive(line, window);
    }

    Ok(all_ok)
}

/// Prints the intermediate stages requested on the command line.
fn show_stages(source: &str, args: &Args) {
    if !args.tokens && !args.ast {
        return;
    }

    let tokens = lex(source);
    if args.tokens {
        let rendered: Vec<String> = tokens.iter().map(ToString::to_string).collect();
        println!("{}", rendered.join(" "));
    }
    if args.ast
       && let Some(expression) = parse(&tokens).expression
    {
        println!("{expression}");
    }
}
