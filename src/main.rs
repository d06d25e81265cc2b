//! Address Book - demonstration driver
//!
//! Builds a small address book, edits, filters, sorts and deletes contacts,
//! then prints the results to stdout.

use address_book::{AddressBook, Config, Contact, OutputFormat};
use anyhow::Result;
use std::io::{self, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Logs go to stderr so stdout carries only results
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(?config, "Configuration loaded");

    if let Err(e) = run(&config) {
        error!("Address book demo failed: {}", e);
        return Err(e);
    }

    Ok(())
}

fn run(config: &Config) -> Result<()> {
    let mut book = AddressBook::with_options(config.book_options());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    book.add_contact(Contact::new(
        "Savita",
        "Tekale",
        "Pune",
        "City1",
        "State1",
        "12345",
        "1234567890",
        "savita@example.com",
    ))?;
    book.add_contact(Contact::new(
        "Yogesh",
        "Gunde",
        "Mumbai",
        "City2",
        "State2",
        "54321",
        "9876543210",
        "yogesh@example.com",
    ))?;

    book.edit_contact(
        "Savita",
        "Tekale",
        Contact::new(
            "Savita",
            "Tekale",
            "Nashik",
            "City3",
            "State3",
            "67890",
            "9876543210",
            "savitaS@example.com",
        ),
    )?;

    let state_count = book.contact_count_by_city_or_state("State1");
    book.sort_contacts_alphabetically();
    book.sort_contacts_by("city")?;
    book.delete_contact_by_name("Yogesh", "Gunde")?;

    match config.output {
        OutputFormat::Text => {
            book.view_contacts_by_city_or_state("City1", &mut out)?;
            writeln!(out, "Number of contacts in State1: {}", state_count)?;
            writeln!(out, "Total number of contacts: {}", book.contact_count())?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &book.summary())?;
            writeln!(out)?;
        }
    }

    info!(remaining = book.contact_count(), "Address book demo complete");
    Ok(())
}
