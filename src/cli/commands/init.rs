use crate::cli::commands::audit;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::store::SqliteStorage;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and its schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;

    println!("⚙️  Initializing myot…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", db_path.display());

    let store = SqliteStorage::open(&db_path)?;
    success(format!("Database initialized at {}", db_path.display()));

    audit(
        &store,
        "init",
        "database",
        &format!("Database initialized at {}", db_path.display()),
    );

    println!("🎉 myot initialization completed!");
    Ok(())
}
