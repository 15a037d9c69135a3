use super::list::TableEntry;
use std::io::{self, BufRead, Write};

/// Print a numbered table catalog to stdout
pub fn print_entries(entries: &[TableEntry]) {
    if entries.is_empty() {
        println!("No transformed tables found.");
        return;
    }

    println!("Available tables:");
    for (idx, entry) in entries.iter().enumerate() {
        let modified = entry
            .modified
            .map(|m| m.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        println!("  {:>2}. {:<28} {}", idx + 1, entry.name, modified);
    }
}

/// Terminal chooser for `select_table`
///
/// Blank input picks the first entry, `0` or anything unparseable cancels.
///
/// # Errors
/// Terminal read or write failures
pub fn prompt_choice(entries: &[TableEntry]) -> io::Result<Option<usize>> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    prompt_choice_from(entries, &mut stdin.lock(), &mut stdout)
}

fn prompt_choice_from<R: BufRead, W: Write>(
    entries: &[TableEntry],
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<usize>> {
    writeln!(out, "Select a table to visualize:")?;
    for (idx, entry) in entries.iter().enumerate() {
        writeln!(out, "  {}. {}", idx + 1, entry.name)?;
    }
    write!(out, "Number [1]: ")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    Ok(parse_choice(line.trim()))
}

/// 1-based answer to a 0-based index
fn parse_choice(answer: &str) -> Option<usize> {
    if answer.is_empty() {
        return Some(0);
    }
    match answer.parse::<usize>() {
        Ok(0) | Err(_) => None,
        Ok(n) => Some(n - 1),
    }
}

/// Display version information
pub fn display_version() {
    println!("Quantum Password Analyzer v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Rescales brute-force time estimates by a quantum speedup factor");
    println!("and renders them as heat-map infographics.");
}
