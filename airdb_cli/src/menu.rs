use airdb_core::engine::SummaryReport;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    CreateTable,
    DropTable,
    ListTables,
    ListDeletedTables,
    LoadSeedData,
    Insert,
    Update,
    Delete,
    ViewTable,
    SearchByKey,
    SearchByAttribute,
    Summary(SummaryReport),
}

pub fn parse_choice(input: &str) -> Result<MenuChoice, String> {
    let n: u32 = input
        .trim()
        .parse()
        .map_err(|_| "Please use numeric input to interact with the database or to exit the program.".to_string())?;
    let choice = match n {
        0 => MenuChoice::Exit,
        1 => MenuChoice::CreateTable,
        2 => MenuChoice::DropTable,
        3 => MenuChoice::ListTables,
        4 => MenuChoice::ListDeletedTables,
        5 => MenuChoice::LoadSeedData,
        6 => MenuChoice::Insert,
        7 => MenuChoice::Update,
        8 => MenuChoice::Delete,
        9 => MenuChoice::ViewTable,
        10 => MenuChoice::SearchByKey,
        11 => MenuChoice::SearchByAttribute,
        12..=15 => MenuChoice::Summary(SummaryReport::ALL[(n - 12) as usize]),
        _ => return Err("Invalid Choice".to_string()),
    };
    Ok(choice)
}

pub fn print_menu() {
    println!("\n Menu:");
    println!("**********");
    println!("\n----- Database management and review:");
    println!("  1. Create a table");
    println!("  2. Drop a table");
    println!("  3. View available table names");
    println!("  4. View deleted table names");
    println!("  5. Optional bulk data import");
    println!("\n----- Insert, update, delete data:");
    println!("  6. Insert table record");
    println!("  7. Update table values based on PK");
    println!("  8. Delete table record based on PK");
    println!("\n----- Inspect tables:");
    println!("  9. View table (SEL *)");
    println!(" 10. Search table record based on PK");
    println!(" 11. Search table record based on Non-PK attributes");
    println!("\n----- Calculate summary stats:");
    for (i, report) in SummaryReport::ALL.iter().enumerate() {
        println!(" {}. {}", i + 12, report.title());
    }
    println!("\n----- ");
    println!(" Type 0 to exit the program\n");
}
