use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use ledger_rs::{
    COOKIE_SESSION_ID, NewTransaction, SessionId, TransactionType, create_transaction,
    get_summary_amount, initialize_db,
};

/// A utility for creating a test database for the REST API server of ledger_rs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating test transactions...");

    let session_id = SessionId::generate();
    for (title, amount, transaction_type) in [
        ("Salary", 5000.0, TransactionType::Credit),
        ("Rent", 1200.0, TransactionType::Debit),
        ("Groceries", 184.35, TransactionType::Debit),
        ("Bonus", 300.0, TransactionType::Credit),
    ] {
        let transaction = NewTransaction::new(title, amount, transaction_type)?;
        create_transaction(transaction, &session_id, &conn)?;
    }

    let balance = get_summary_amount(&session_id, &conn)?;

    println!("Success! Balance of the test session: {balance:.2}");
    println!("Use the cookie \"{COOKIE_SESSION_ID}={session_id}\" to read the test session.");

    Ok(())
}
