//! Basic usage example
//!
//! This example demonstrates the full access-layer contract:
//! - Opening a connection
//! - Preparing statements and binding by index and by name
//! - Executing, querying with typed extraction, and probing for rows
//! - Schema existence checks
//!
//! Run with: cargo run --example basic_usage

use sqlite_bridge::prelude::*;

fn main() -> Result<()> {
    println!("=== SQLite Bridge - Basic Usage Example ===\n");

    // Open an in-memory database
    println!("1. Opening database...");
    let conn = Connection::open_in_memory()?;
    println!("   ✓ Opened\n");

    // Create a table
    println!("2. Creating table...");
    conn.execute(
        "CREATE TABLE users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL,
            age INTEGER,
            balance REAL
        )",
    )?;
    println!("   ✓ Table created: {}\n", conn.table_exists("users")?);

    // Insert rows, reusing one prepared statement with rebinding
    println!("3. Inserting data...");
    let users: [(&str, Option<i32>, f64); 4] = [
        ("alice", Some(30), 1500.50),
        ("bob", Some(25), 2300.75),
        ("charlie", None, 980.25),
        ("diana", Some(28), 3200.00),
    ];

    let mut insert =
        conn.prepare("INSERT INTO users (username, age, balance) VALUES (:name, :age, :balance)")?;
    for (username, age, balance) in users {
        insert
            .bind(":name", username)?
            .bind(":age", age)?
            .bind(":balance", balance)?;
        insert.execute()?;
        println!("   ✓ Inserted {username}");
    }
    println!();

    // Query with typed extraction by column name
    println!("4. Querying adults with a positive balance...");
    let mut select = conn.prepare(
        "SELECT username, age, balance FROM users WHERE balance > ? ORDER BY username",
    )?;
    select.bind(1, 1000.0)?;

    let rows = select.query(|row| {
        Ok((
            row.text("username")?,
            row.optional_int("age")?,
            row.double("balance")?,
        ))
    })?;

    for (username, age, balance) in &rows {
        match age {
            Some(age) => println!("   {username} ({age}): {balance:.2}"),
            None => println!("   {username} (age unknown): {balance:.2}"),
        }
    }
    println!();

    // Probe for emptiness without materializing rows
    println!("5. Probing for millionaires...");
    let mut probe = conn.prepare("SELECT 1 FROM users WHERE balance > 1000000")?;
    println!("   empty result: {}\n", probe.query_empty()?);

    drop(insert);
    drop(select);
    drop(probe);
    conn.close()?;
    println!("Done.");
    Ok(())
}
