use std::io::{self, BufRead, Write};

use airdb_core::catalog::{resolve_selection, selection_ids};
use airdb_core::engine::{Acquired, FieldSource};
use airdb_core::entity::{FieldSpec, TableId};

/// Typed at any prompt to go back to the menu
pub const RETURN_SIGNAL: &str = "r";

/// Reads one line without its line terminator; `None` on EOF or read failure.
pub fn read_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    if io::stdout().flush().is_err() {
        return None;
    }
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
    }
}

/// Field values typed at the terminal.
pub struct StdinSource;

impl FieldSource for StdinSource {
    fn acquire(&mut self, _table: TableId, field: &FieldSpec) -> Acquired {
        match read_line(&format!("Enter {}, or {RETURN_SIGNAL} to return: ", field.label)) {
            Some(v) if v != RETURN_SIGNAL => Acquired::Value(v),
            _ => Acquired::Return,
        }
    }
}

/// Lists `tables` with their IDs and asks for one until a valid ID or the
/// return signal is entered.
pub fn select_table(heading: &str, tables: &[TableId]) -> Option<TableId> {
    let ids = selection_ids(tables);
    println!("{heading}");
    for (id, table) in &ids {
        println!("{id} - {table}");
    }
    loop {
        let input = read_line(&format!("Enter table ID, or '{RETURN_SIGNAL}' to return to the menu: "))?;
        if input == RETURN_SIGNAL {
            return None;
        }
        let chosen = input.trim().parse::<usize>().unwrap_or(0);
        match resolve_selection(&ids, chosen) {
            Ok(table) => return Some(table),
            Err(e) => println!("{e}"),
        }
    }
}
