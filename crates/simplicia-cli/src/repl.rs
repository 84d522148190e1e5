//! Interactive query shell
//!
//! Reads commands with rustyline and dispatches structural queries
//! against a loaded complex. Query errors are reported and the loop
//! continues; only Ctrl-D (or Ctrl-Z + Enter on DOS-like shells) ends
//! the session.

use anyhow::{Context, Result};
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use simplicia::{BettiSnapshot, SimplicialComplex};
use std::path::Path;
use std::process::Command;

pub fn run(file: &Path) -> Result<()> {
    let complex = simplicia::load_path(file)
        .with_context(|| format!("failed to load '{}'", file.display()))?;

    println!(
        "{} {} simplices, max dimension {}",
        "Loaded:".green().bold(),
        complex.len(),
        complex.max_dimension()
    );
    println!("Type {} for help, Ctrl-D to quit.", "?".cyan());
    println!();

    let mut rl = DefaultEditor::new().context("failed to initialize readline")?;
    loop {
        match rl.readline("? ") {
            Ok(line) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(input);
                dispatch(&complex, input);
                println!();
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err).context("readline failure"),
        }
    }
    Ok(())
}

fn dispatch(complex: &SimplicialComplex, input: &str) {
    if let Some(shell_cmd) = input.strip_prefix('!') {
        run_shell_command(shell_cmd);
        return;
    }

    let tokens: Vec<&str> = input.split_whitespace().collect();
    match tokens[0] {
        "faces" => query_adjacency(complex, &tokens[1..], true),
        "cofaces" => query_adjacency(complex, &tokens[1..], false),
        "betti" => show_betti(complex, &tokens[1..]),
        "dimension" => show_dimensions(complex, &tokens[1..]),
        "hash" => {
            if tokens.len() == 1 {
                show_hash_statistics(complex);
            } else {
                eprintln!("Error: too many arguments");
            }
        }
        "help" | "?" => {
            if tokens.len() == 1 {
                print_help();
            } else {
                eprintln!("Error: too many arguments");
            }
        }
        other => eprintln!("Unknown command '{other}', type '?' for help"),
    }
}

fn query_adjacency(complex: &SimplicialComplex, args: &[&str], faces: bool) {
    let Some((id, range_args)) = args.split_first() else {
        eprintln!("Missing id");
        return;
    };
    let (min, max) = match parse_range(range_args) {
        Ok(range) => range,
        Err(message) => {
            eprintln!("{message}");
            return;
        }
    };

    let result = if faces {
        complex.faces_at(id, min, max)
    } else {
        complex.cofaces_at(id, min, max)
    };
    match result {
        Ok(found) => print_simplex_table(&found),
        Err(err) => eprintln!("{err}"),
    }
}

/// `[mindim] [maxdim]`, both optional, nothing after them.
fn parse_range(args: &[&str]) -> std::result::Result<(i64, i64), String> {
    if args.len() > 2 {
        return Err("Error: too many arguments".to_string());
    }
    let mut min = i64::MIN;
    let mut max = i64::MAX;
    if let Some(token) = args.first() {
        min = parse_number(token)?;
    }
    if let Some(token) = args.get(1) {
        max = parse_number(token)?;
    }
    Ok((min, max))
}

fn parse_number(token: &str) -> std::result::Result<i64, String> {
    token
        .parse()
        .map_err(|_| format!("{token} is not a number"))
}

fn print_simplex_table(found: &[(String, usize)]) {
    println!("{}", "Simplex    Dimension".bold());
    println!("====================");
    for (id, dimension) in found {
        println!("{id:<10} {dimension}");
    }
}

fn show_betti(complex: &SimplicialComplex, args: &[&str]) {
    if args.len() > 1 {
        eprintln!("Error: too many arguments");
        return;
    }
    let snapshot = complex.betti_snapshot();
    match args.first() {
        None => {
            println!("{} {} {}", snapshot.b0, snapshot.b1, snapshot.b2);
            warn_if_unreliable(&snapshot, None);
        }
        Some(token) => {
            let n = match parse_number(token) {
                Ok(n) => n,
                Err(message) => {
                    eprintln!("{message}");
                    return;
                }
            };
            let value = match n {
                0 => snapshot.b0,
                1 => snapshot.b1,
                2 => snapshot.b2,
                _ => {
                    eprintln!("Only Betti0 through Betti2 are supported");
                    return;
                }
            };
            println!("{value}");
            warn_if_unreliable(&snapshot, Some(n));
        }
    }
}

fn warn_if_unreliable(snapshot: &BettiSnapshot, n: Option<i64>) {
    if snapshot.unreliable && n.map_or(true, |n| n == 2) {
        eprintln!("{}", "Warning: Betti2 is unreliable".yellow());
    }
}

fn show_dimensions(complex: &SimplicialComplex, args: &[&str]) {
    for id in args {
        match complex.lookup(id) {
            Some(simplex) => println!("{}", simplex.dimension()),
            None => eprintln!("No simplex named '{id}'"),
        }
    }
}

fn show_hash_statistics(complex: &SimplicialComplex) {
    let stats = complex.hash_statistics();
    println!("{} buckets", stats.buckets);
    println!("{} occupants", stats.occupied);
    println!("Load factor = {:.2}", stats.load_factor);
    println!("{} collisions", stats.collisions);
}

fn run_shell_command(cmd: &str) {
    let status = Command::new("sh").arg("-c").arg(cmd).status();
    if let Err(err) = status {
        eprintln!("Failed to run shell command: {err}");
    }
}

fn print_help() {
    println!(
        "faces <id> [mindim] [maxdim]\n\
         \x20   Show id's faces with a dimension of at least mindim and at most maxdim\n\
         cofaces <id> [mindim] [maxdim]\n\
         \x20   Show id's cofaces with a dimension of at least mindim and at most maxdim\n\
         betti [n]\n\
         \x20   Show the Nth Betti number, or the first 3 if n is omitted\n\
         dimension [id1] [id2] ... [idn]\n\
         \x20   Show the dimension(s) of some simplices\n\
         hash\n\
         \x20   Show the hash table's statistics\n\
         !<cmd>\n\
         \x20   Execute a shell command\n\
         Ctrl-D\n\
         \x20   Quit\n\
         help, ?\n\
         \x20   Show this message"
    );
}
