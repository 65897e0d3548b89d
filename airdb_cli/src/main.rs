mod menu;
mod prompt;

use std::path::PathBuf;

use airdb_core::config::AirDbConfig;
use airdb_core::engine::{format_table, FieldSource, Outcome};
use airdb_core::entity::TableId;
use airdb_core::error::AirDbError;
use airdb_core::types::ResultSet;
use airdb_core::Database;
use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use menu::{parse_choice, print_menu, MenuChoice};
use prompt::{read_line, select_table, StdinSource, RETURN_SIGNAL};

/// AirDB - interactive manager for pilots, aircraft, flights and crew assignments
#[derive(Parser, Debug)]
#[command(name = "airdb", version, about, long_about = None)]
struct Cli {
    /// JSON configuration file
    #[arg(short = 'c', long = "config", default_value = "airdb.json")]
    config: PathBuf,

    /// Database file (overrides the configuration file)
    #[arg(long = "db")]
    db: Option<PathBuf>,

    /// Print result sets as JSON instead of a text table
    #[arg(long = "json")]
    json: bool,
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = AirDbConfig::load_from_path(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(db) = cli.db {
        config.db_path = db;
    }
    init_tracing(&config.log_level);

    let mut db = Database::open(&config)
        .with_context(|| format!("opening {}", config.db_path.display()))?;
    info!(path = %config.db_path.display(), "database ready");
    let mut app = App { db: &mut db, json: cli.json };

    loop {
        print_menu();
        let Some(input) = read_line("Enter your choice: ") else {
            break;
        };
        println!();
        match parse_choice(&input) {
            Ok(MenuChoice::Exit) => break,
            Ok(choice) => {
                if let Err(e) = app.dispatch(choice) {
                    error!(?choice, error = %e, "operation failed");
                    println!("\nOperation terminated. {e}\n");
                }
            }
            Err(msg) => println!("{msg}\n"),
        }
    }
    println!("Goodbye..\n");
    Ok(())
}

struct App<'a> {
    db: &'a mut Database,
    json: bool,
}

impl App<'_> {
    fn dispatch(&mut self, choice: MenuChoice) -> Result<(), AirDbError> {
        match choice {
            MenuChoice::Exit => Ok(()),
            MenuChoice::CreateTable => self.create_table(),
            MenuChoice::DropTable => self.drop_table(),
            MenuChoice::ListTables => {
                let tables = self.db.existing_tables()?;
                if tables.is_empty() {
                    println!("No tables exist in the database.");
                } else {
                    print_tables("AirDB tables:", &tables);
                }
                Ok(())
            }
            MenuChoice::ListDeletedTables => {
                let tables = self.db.deleted_tables()?;
                if tables.is_empty() {
                    println!("All AirDB tables are currently available.");
                } else {
                    print_tables("Deleted tables:", &tables);
                }
                Ok(())
            }
            MenuChoice::LoadSeedData => {
                let rows = self.db.load_seed_data()?;
                println!("Seed data loaded successfully ({rows} rows).");
                Ok(())
            }
            MenuChoice::Insert => self.mutate("Inserted data to", Database::insert),
            MenuChoice::Update => self.mutate("Updated data in", Database::update),
            MenuChoice::Delete => self.mutate("Deleted data from", Database::delete),
            MenuChoice::ViewTable => {
                let Some(table) = self.pick_existing()? else {
                    return Ok(());
                };
                println!("Table selected: {table}");
                let result = self.db.select_all(table)?;
                if result.is_empty() {
                    println!("Table {table} is empty.");
                } else {
                    self.show(&result);
                }
                Ok(())
            }
            MenuChoice::SearchByKey => {
                let Some(table) = self.pick_existing()? else {
                    return Ok(());
                };
                println!("Table selected: {table}");
                let result = self.db.search_by_key(table, &mut StdinSource)?;
                self.show_or_none(&result);
                Ok(())
            }
            MenuChoice::SearchByAttribute => {
                let Some(table) = self.pick_existing()? else {
                    return Ok(());
                };
                println!("Table selected: {table}");
                let prompt_column = format!("Enter column name, or {RETURN_SIGNAL} to return: ");
                let Some(column) = read_line(&prompt_column).filter(|c| c != RETURN_SIGNAL) else {
                    return Ok(());
                };
                let prompt_value = format!("Enter {column} value, or {RETURN_SIGNAL} to return: ");
                let Some(value) = read_line(&prompt_value).filter(|v| v != RETURN_SIGNAL) else {
                    return Ok(());
                };
                let result = self.db.search_by_column(table, &column, &value)?;
                self.show_or_none(&result);
                Ok(())
            }
            MenuChoice::Summary(report) => {
                println!("{}", report.title());
                let result = self.db.summary(report)?;
                self.show_or_none(&result);
                Ok(())
            }
        }
    }

    fn pick_existing(&mut self) -> Result<Option<TableId>, AirDbError> {
        let tables = self.db.existing_tables()?;
        if tables.is_empty() {
            println!("No tables exist. You have to create a table first to proceed with this operation.");
            return Ok(None);
        }
        let picked = select_table("Existing AirDB tables:", &tables);
        if picked.is_none() {
            println!("Returning to main menu");
        }
        Ok(picked)
    }

    fn create_table(&mut self) -> Result<(), AirDbError> {
        let deleted = self.db.deleted_tables()?;
        if deleted.is_empty() {
            println!("No tables have been deleted. You have to delete a table first to proceed with this operation.");
            return Ok(());
        }
        let Some(table) = select_table("Select one of the deleted tables listed below to reinstate:", &deleted) else {
            println!("Returning to main menu");
            return Ok(());
        };
        self.db.create_table(table)?;
        println!("Table {table} created successfully.\n");
        Ok(())
    }

    fn drop_table(&mut self) -> Result<(), AirDbError> {
        let Some(table) = self.pick_existing()? else {
            return Ok(());
        };
        self.db.drop_table(table)?;
        println!("Table {table} removed successfully.\n");
        Ok(())
    }

    fn mutate<F>(&mut self, done: &str, op: F) -> Result<(), AirDbError>
    where
        F: FnOnce(&mut Database, TableId, &mut dyn FieldSource) -> Result<Outcome, AirDbError>,
    {
        let Some(table) = self.pick_existing()? else {
            return Ok(());
        };
        let outcome = op(&mut *self.db, table, &mut StdinSource)?;
        println!("{outcome}");
        if outcome.is_committed() {
            println!("{done} {table} successfully.");
        }
        Ok(())
    }

    fn show(&self, result: &ResultSet) {
        if self.json {
            match serde_json::to_string_pretty(result) {
                Ok(s) => println!("{s}"),
                Err(e) => println!("Failed to render JSON: {e}"),
            }
        } else {
            println!("\n\n{}", format_table(result));
        }
    }

    fn show_or_none(&self, result: &ResultSet) {
        if result.is_empty() {
            println!("No record was found.");
        } else {
            self.show(result);
        }
    }
}

fn print_tables(heading: &str, tables: &[TableId]) {
    println!("{heading}");
    for (i, table) in tables.iter().enumerate() {
        println!("{} - {table}", i + 1);
    }
}
