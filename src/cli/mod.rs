use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
    sync::Arc,
};

use colored::Colorize;
use log::{error, warn};

use crate::{
    cli::{
        colors::WORDLIST_TEAL,
        commands::{list_names_command, render_result, run_query_command},
        messages::{highlight_argument, query_error_message, system_message},
        parsers::{CliMode, CliParser, ShellCommand},
    },
    config::Config,
    persistence::WordListRegistry,
    query::QueryEngine,
    sessions::session::Session,
};

mod colors;
pub mod commands;
mod messages;
pub mod parsers;

/// Exit status when the word lists cannot be loaded.
const EXIT_STARTUP_FAILURE: u8 = 1;
/// Exit status when a query is refused.
const EXIT_QUERY_FAILURE: u8 = 2;

const WORDLIST_SHELL_COMMANDS_LIST: [(&str, &str); 8] = [
    ("lists", "list all available word lists"),
    ("use <list>", "pick the list bare patterns run against"),
    ("find <l> <p>", "search list <l> with the regex <p>"),
    ("<pattern>", "search the list in use with the regex <pattern>"),
    ("!", "execute the last command, add more to go further back"),
    ("history", "list command history for this session"),
    ("help", "list all available commands"),
    ("quit", "leave the shell"),
];

pub fn run(cli: CliParser) -> ExitCode {
    //! Load the configuration and the word lists, then dispatch on the mode.
    //!
    //! Failing to load either is fatal and nothing is served.

    let config = match Config::from_env() {
        Ok(config) => config.override_with(cli.lists_dir.clone(), cli.pattern_size_limit),
        Err(err) => {
            error!("{}", err);
            eprintln!("{}", system_message("config", err.to_string()));
            return ExitCode::from(EXIT_STARTUP_FAILURE);
        }
    };

    let registry = match WordListRegistry::build(&config.lists_dir) {
        Ok(registry) => registry,
        Err(err) => {
            error!("{}", err);
            eprintln!("{}", system_message("system", err.to_string()));
            return ExitCode::from(EXIT_STARTUP_FAILURE);
        }
    };

    if registry.is_empty() {
        warn!("no word lists found in {}", config.lists_dir.display());
    }

    let engine =
        QueryEngine::new(Arc::new(registry)).with_pattern_size_limit(config.pattern_size_limit);

    match cli.mode {
        CliMode::Lists => {
            let names = list_names_command(&engine);
            if !names.is_empty() {
                println!("{}", names);
            }
            ExitCode::SUCCESS
        }
        CliMode::Query {
            list_name,
            pattern,
            pretty,
        } => match run_query_command(&engine, &list_name, &pattern, pretty) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(failure) => {
                eprintln!("{}", failure.message());
                ExitCode::from(EXIT_QUERY_FAILURE)
            }
        },
        CliMode::Client => {
            run_client(engine);
            ExitCode::SUCCESS
        }
    }
}

pub fn run_client(engine: QueryEngine) {
    show_version_info();

    println!(
        "{}",
        system_message(
            "info",
            format!(
                "{} word list(s) loaded with {} row(s).",
                highlight_argument(&engine.registry().len().to_string()),
                highlight_argument(&engine.registry().total_rows().to_string()),
            )
        )
    );

    let session = Session::client(engine);
    start_repl(session);
}

pub fn show_help() {
    println!(
        "{}",
        system_message(
            "info",
            format!(
                "Any other input, spaces and a leading '!' included, is treated as a {} for the list in use.",
                highlight_argument("regex")
            )
        )
    );

    println!();
    println!("{:14} DETAILS", "COMMAND".color(WORDLIST_TEAL));
    for (command, details) in WORDLIST_SHELL_COMMANDS_LIST {
        println!("{:14} {}", command.color(WORDLIST_TEAL), details)
    }
}

fn show_version_info() {
    println!(
        r"
    {}
    Version {}
        ",
        env!("CARGO_PKG_DESCRIPTION").color(WORDLIST_TEAL),
        env!("CARGO_PKG_VERSION").color(WORDLIST_TEAL).italic(),
    )
}

fn execute(session: &mut Session, command: ShellCommand) -> bool {
    //! Run one shell command against the session.
    //!
    //! Returns `false` when the shell should stop.

    match command {
        ShellCommand::Empty => {}
        ShellCommand::Help => show_help(),
        ShellCommand::Quit => return false,
        ShellCommand::History => {
            for line in session.command_history_lines(None) {
                println!("{}", line);
            }
        }
        ShellCommand::Lists => {
            for name in session.get_available_lists() {
                println!("{}", highlight_argument(&name));
            }
        }
        ShellCommand::Use(list_name) => match session.use_list(&list_name) {
            Ok(()) => println!(
                "{}",
                system_message(
                    "system",
                    format!("Now using '{}'.", highlight_argument(&list_name))
                )
            ),
            Err(err) => println!("{}", query_error_message(&err)),
        },
        ShellCommand::Find { list_name, pattern } => {
            show_query(session, &list_name, &pattern);
        }
        ShellCommand::Pattern(pattern) => match session.get_active_list() {
            Some(list_name) => show_query(session, list_name, &pattern),
            None => println!(
                "{}",
                system_message(
                    "system",
                    format!(
                        "No list in use. Pick one with '{}'.",
                        highlight_argument("use <list>")
                    )
                )
            ),
        },
        ShellCommand::Invalid(usage) => println!("{}", system_message("system", usage)),
    }

    true
}

fn show_query(session: &Session, list_name: &str, pattern: &str) {
    match session.query(list_name, pattern) {
        Ok(result) if result.is_empty() => println!(
            "{}",
            system_message(
                "query",
                format!("No matches in '{}'.", highlight_argument(list_name))
            )
        ),
        Ok(result) => {
            println!("{}", render_result(&result, true));
            println!(
                "{}",
                system_message(
                    "query",
                    format!(
                        "{} match(es) in '{}'.",
                        result.len(),
                        highlight_argument(list_name)
                    )
                )
            );
        }
        Err(err) => println!("{}", query_error_message(&err)),
    }
}

fn start_repl(mut session: Session) {
    println!(
        "{}",
        system_message(
            "system",
            format!(
                "Use '{}' to leave and '{}' to know all commands available.",
                highlight_argument("quit"),
                highlight_argument("help"),
            ),
        )
    );

    println!(
        "{}",
        system_message(
            "system",
            format!(
                "New session initiated at '{}'.",
                highlight_argument(&session.start_time_string())
            ),
        )
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!();
        print!("{:8} > ", "wordlist".color(WORDLIST_TEAL).bold());
        if io::stdout().flush().is_err() {
            break;
        }

        let mut buffer = String::new();
        match input.read_line(&mut buffer) {
            // End of input closes the shell like `quit`.
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                error!("could not read from stdin: {}", err);
                break;
            }
        }

        let mut line = buffer.trim_end_matches(['\r', '\n']).to_string();

        if let Some(last) = ShellCommand::recall_depth(&line) {
            match session.get_last_command(last) {
                Some(command) => line = command.to_string(),
                None => {
                    println!(
                        "{}",
                        system_message(
                            "system",
                            format!(
                                "No command {} steps back.",
                                highlight_argument(&last.to_string())
                            ),
                        )
                    );
                    continue;
                }
            }
        }

        if !line.trim().is_empty() {
            session.add_to_command_history(&line);
        }

        if !execute(&mut session, ShellCommand::parse(&line)) {
            break;
        }
    }

    println!("Goodbye!")
}
