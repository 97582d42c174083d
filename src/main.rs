//! CLI tool to scan, parse, and report on source files.

use std::fs;
use std::process::ExitCode;

use tinylang_rs::{TokenKind, kind_counts, mark_reserved, parse, scan, tokens_tsv, tree_text};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        eprintln!("Usage: tinylang <command> [files...]");
        eprintln!();
        eprintln!("Commands:");
        eprintln!("  tokens  Print a kind/lexeme/line/column table for each file");
        eprintln!("  tree    Parse each file and print its parse tree");
        eprintln!("  counts  Report token counts per lexical kind");
        eprintln!("  mark    Replace identifier runs with RESERVED/VARIABLE labels");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  tinylang tokens program.txt");
        eprintln!("  tinylang tree program.txt");
        return ExitCode::from(2);
    }

    let command = args[1].as_str();
    let files = &args[2..];

    if files.is_empty() {
        eprintln!("Error: no files specified");
        return ExitCode::from(2);
    }

    let mut had_error = false;

    for path in files {
        let content = match fs::read(path) {
            Ok(bytes) => decode(&bytes),
            Err(e) => {
                eprintln!("{path}: {e}");
                had_error = true;
                continue;
            }
        };

        match command {
            "tokens" => {
                print!("{}", tokens_tsv(&scan(&content)));
            }
            "tree" => match parse(&scan(&content)) {
                Ok(tree) => print!("{}", tree_text(&tree)),
                Err(e) => {
                    eprintln!("{path}: {e}");
                    had_error = true;
                }
            },
            "counts" => {
                let counts = kind_counts(&scan(&content));
                for (kind, count) in &counts {
                    println!("{kind}\t{count}");
                }
                let reserved = counts.get(&TokenKind::ReservedWord).copied().unwrap_or(0);
                let identifiers = counts.get(&TokenKind::Identifier).copied().unwrap_or(0);
                eprintln!(
                    "{path}: {reserved} reserved word(s), \
                     {identifiers} identifier(s)"
                );
            }
            "mark" => {
                let marked = mark_reserved(&content);
                print!("{}", marked.output);
                eprintln!(
                    "{path}: {} reserved, {} variable(s)",
                    marked.reserved, marked.variables
                );
            }
            _ => {
                eprintln!("Unknown command: {command}");
                return ExitCode::from(2);
            }
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Decode file bytes as UTF-8, falling back to Latin-1 so arbitrary
/// uploads still produce text.
fn decode(bytes: &[u8]) -> String {
    std::str::from_utf8(bytes).map_or_else(
        |_| bytes.iter().map(|&b| char::from(b)).collect(),
        str::to_string,
    )
}
