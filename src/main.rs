mod debug_report;
mod logger;

use enigmata::{Context, Puzzle, PuzzleOption, solve_verbose_with, solve_with};
use std::io::{self, IsTerminal, Read};

const DEFAULT_CATEGORY: &str = "math";
const DEFAULT_LOG_LEVEL: &str = "warn";

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    logger::init_logging(&config.log_level);

    let puzzles = match load_puzzles(config.source) {
        Ok(puzzles) => puzzles,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let ctx = Context::default();
    for puzzle in &puzzles {
        if config.verbose {
            let res = solve_verbose_with(puzzle, &ctx);
            debug_report::print_run(puzzle, &res, config.color);
        } else if config.json {
            let res = solve_with(puzzle, &ctx);
            println!("{}", serde_json::json!({ "id": puzzle.id, "answer": res.answer }));
        } else {
            println!("{}", solve_with(puzzle, &ctx).answer);
        }
    }
}

enum Source {
    /// A bare question plus the flags describing it.
    Text { category: String, question: String, options: Vec<PuzzleOption> },
    /// A JSON puzzle object or array of puzzles.
    Json(String),
    /// Nothing on the command line; decide once stdin is read.
    Stdin { category: String, options: Vec<PuzzleOption> },
}

struct CliConfig {
    source: Source,
    verbose: bool,
    json: bool,
    color: bool,
    log_level: String,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut question: Option<String> = None;
    let mut json_input: Option<String> = None;
    let mut category = DEFAULT_CATEGORY.to_string();
    let mut options: Vec<PuzzleOption> = Vec::new();
    let mut verbose = false;
    let mut json = false;
    let mut color = io::stdout().is_terminal();
    let mut log_level = DEFAULT_LOG_LEVEL.to_string();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("enigmata {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "-v" | "--verbose" => verbose = true,
            "--json" => json = true,
            "--color" => color = true,
            "--no-color" => color = false,
            "--category" | "-c" => {
                category = args.next().ok_or_else(|| "error: --category expects a value".to_string())?;
            }
            "--log-level" => {
                log_level = args.next().ok_or_else(|| "error: --log-level expects a value".to_string())?;
            }
            "--option" => {
                let value = args.next().ok_or_else(|| "error: --option expects a value".to_string())?;
                options.push(parse_option(&value)?);
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                set_json_input(&mut json_input, value)?;
            }
            "--file" => {
                let path = args.next().ok_or_else(|| "error: --file expects a path".to_string())?;
                set_json_input(&mut json_input, read_file(&path)?)?;
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    question = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--category=") => {
                category = arg.trim_start_matches("--category=").to_string();
            }
            _ if arg.starts_with("--log-level=") => {
                log_level = arg.trim_start_matches("--log-level=").to_string();
            }
            _ if arg.starts_with("--option=") => {
                options.push(parse_option(arg.trim_start_matches("--option="))?);
            }
            _ if arg.starts_with("--input=") => {
                set_json_input(&mut json_input, arg.trim_start_matches("--input=").to_string())?;
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                question = Some(std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" "));
                break;
            }
        }
    }

    let source = match (question, json_input) {
        (Some(_), Some(_)) => return Err("error: input provided multiple times".to_string()),
        (Some(question), None) => Source::Text { category, question, options },
        (None, Some(raw)) => Source::Json(raw),
        (None, None) => Source::Stdin { category, options },
    };

    Ok(CliConfig { source, verbose, json, color, log_level })
}

fn set_json_input(slot: &mut Option<String>, value: String) -> Result<(), String> {
    if slot.is_some() {
        return Err("error: input provided multiple times".to_string());
    }
    *slot = Some(value);
    Ok(())
}

/// `B=Paris` becomes a choice with id `B`; a value without `=` is a bare option.
fn parse_option(value: &str) -> Result<PuzzleOption, String> {
    match value.split_once('=') {
        Some((id, _)) if id.trim().is_empty() => Err(format!("error: invalid --option '{value}' (empty id)")),
        Some((id, text)) => Ok(PuzzleOption::choice(id.trim(), text.trim())),
        None => Ok(PuzzleOption::Bare(serde_json::Value::String(value.to_string()))),
    }
}

fn load_puzzles(source: Source) -> Result<Vec<Puzzle>, String> {
    match source {
        Source::Text { category, question, options } => {
            Ok(vec![Puzzle::new(category.as_str(), question).with_options(options)])
        }
        Source::Json(raw) => parse_puzzles(&raw),
        Source::Stdin { category, options } => {
            let input = read_stdin_input()?;
            let trimmed = input.trim();
            if trimmed.is_empty() {
                return Err(format!("error: no input provided\n\n{}", help_text()));
            }
            if trimmed.starts_with('{') || trimmed.starts_with('[') {
                parse_puzzles(trimmed)
            } else {
                Ok(vec![Puzzle::new(category.as_str(), trimmed).with_options(options)])
            }
        }
    }
}

fn parse_puzzles(raw: &str) -> Result<Vec<Puzzle>, String> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|err| format!("error: invalid puzzle JSON: {err}"))?;
    let puzzles = if value.is_array() {
        serde_json::from_value::<Vec<Puzzle>>(value)
    } else {
        serde_json::from_value::<Puzzle>(value).map(|p| vec![p])
    };
    puzzles.map_err(|err| format!("error: invalid puzzle JSON: {err}"))
}

fn read_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|err| format!("error: failed to read '{path}': {err}"))
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "enigmata {version}

Deterministic puzzle solver.

Usage:
  enigmata [OPTIONS] [--] <question...>
  enigmata [OPTIONS] --input <json>
  enigmata [OPTIONS] --file <path>

With no question, reads stdin: JSON (object or array) if it starts with
'{{' or '[', otherwise a plain question.

Options:
  -c, --category <name>      Category for a plain question: math, logic, word,
                             trivia. Default: {default_category}
  --option <id>=<text>       Add a multiple-choice option (repeatable).
  -i, --input <json>         Puzzle JSON: {{\"game_type\", \"question\", \"options\"}}
                             or an array of them.
  --file <path>              Read puzzle JSON from a file.
  -v, --verbose              Print a report of how each answer was reached.
  --json                     Print one {{\"id\", \"answer\"}} object per puzzle.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  --log-level <filter>       Log filter when RUST_LOG is unset.
                             Default: {default_log_level}
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Exit codes:
  0  Success.
  2  Invalid arguments or input.
",
        version = env!("CARGO_PKG_VERSION"),
        default_category = DEFAULT_CATEGORY,
        default_log_level = DEFAULT_LOG_LEVEL,
    )
}
