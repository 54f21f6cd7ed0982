use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use importers::{ContactCsvImporter, ImportReport};
use shared_types::{Contact, ContactStatus, ErrorResponse, ImportContactsResponse};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;

use vertirix_console::config::ConsoleConfig;
use vertirix_console::contact_lists::ContactFilter;
use vertirix_console::handlers::contacts as contacts_handler;
use vertirix_console::storage::{ContactListStore, SqliteContactListStore};

#[derive(Parser, Debug)]
#[command(name = "vertirix-console", author, version, about = "Import and manage Vertirix contact lists", long_about = None)]
struct Cli {
    /// Owner of the contact lists (defaults to the configured user)
    #[arg(long, global = true)]
    user: Option<String>,

    /// Config file to use instead of the platform default
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    log_file_path: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the contact CSV template, or save it with --output
    Template {
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Validate a contact CSV and save its valid rows as a new list
    Import {
        file: PathBuf,

        /// List name (defaults to the file name)
        #[arg(long)]
        name: Option<String>,

        /// Only show the import report
        #[arg(long)]
        dry_run: bool,

        #[arg(long)]
        json: bool,
    },
    /// Show the user's contact lists
    Lists {
        #[arg(long)]
        json: bool,
    },
    /// Show the contacts of a list
    Show {
        list_id: String,

        /// Match against name, phone, email or company
        #[arg(long)]
        query: Option<String>,

        /// pending, called, success or failed
        #[arg(long)]
        status: Option<ContactStatus>,

        #[arg(long)]
        json: bool,
    },
    Rename {
        list_id: String,
        name: String,
    },
    Delete {
        list_id: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.log_file_path.as_deref());

    let config = match &cli.config {
        Some(path) => ConsoleConfig::load_from(path),
        None => ConsoleConfig::load().map(|(config, _)| config),
    }
    .context("Failed to load console config")?;

    let user_id = cli
        .user
        .clone()
        .unwrap_or_else(|| config.user_id().to_string());

    match cli.command {
        Command::Template { output } => {
            let importer = ContactCsvImporter::with_delimiter(config.delimiter()?);
            match output {
                Some(path) => {
                    contacts_handler::write_template(&importer, &path)?;
                    println!("Template written to {}", path.display());
                }
                None => println!("{}", importer.template()),
            }
        }
        Command::Import {
            file,
            name,
            dry_run,
            json,
        } => {
            let importer = ContactCsvImporter::with_delimiter(config.delimiter()?);
            let report = contacts_handler::preview_import(&importer, &file)?;

            if !json {
                print_report(&report);
            }

            let contact_list = if dry_run {
                None
            } else {
                let name = name.unwrap_or_else(|| {
                    file.file_stem()
                        .map(|stem| stem.to_string_lossy().into_owned())
                        .unwrap_or_default()
                });
                let store = open_store(&config)?;

                match contacts_handler::confirm_import(store.as_ref(), &user_id, &name, &report) {
                    Ok(list) => Some(list),
                    Err(e) => {
                        if json {
                            let response = ImportContactsResponse {
                                report,
                                contact_list: None,
                            };
                            println!("{}", serde_json::to_string_pretty(&response)?);
                            let error = ErrorResponse {
                                error: e.to_string(),
                            };
                            eprintln!("{}", serde_json::to_string_pretty(&error)?);
                        }
                        return Err(e);
                    }
                }
            };

            if json {
                let response = ImportContactsResponse {
                    report,
                    contact_list,
                };
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else if let Some(list) = contact_list {
                println!(
                    "Contact list \"{}\" created with {} contacts ({})",
                    list.name,
                    list.contacts.len(),
                    list.id
                );
            }
        }
        Command::Lists { json } => {
            let store = open_store(&config)?;
            let lists = contacts_handler::list_contact_lists(store.as_ref(), &user_id)?;

            if json {
                let response = shared_types::ContactListsResponse {
                    contact_lists: lists,
                };
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else if lists.is_empty() {
                println!("No contact lists yet. Import a CSV file to get started.");
            } else {
                for list in lists {
                    println!(
                        "{}  {}  ({} contacts, {} invalid rows skipped)",
                        list.id, list.name, list.total_contacts, list.invalid_contacts
                    );
                }
            }
        }
        Command::Show {
            list_id,
            query,
            status,
            json,
        } => {
            let store = open_store(&config)?;
            let filter = ContactFilter { query, status };
            let (list, contacts) =
                contacts_handler::show_contacts(store.as_ref(), &user_id, &list_id, &filter)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&contacts)?);
            } else {
                println!(
                    "{} ({} of {} contacts)",
                    list.name,
                    contacts.len(),
                    list.total_contacts
                );
                for contact in &contacts {
                    println!("  {}", format_contact(contact));
                }
            }
        }
        Command::Rename { list_id, name } => {
            let store = open_store(&config)?;
            let list = contacts_handler::rename_contact_list(store.as_ref(), &user_id, &list_id, &name)?;
            println!("Renamed contact list {} to \"{}\"", list.id, list.name);
        }
        Command::Delete { list_id } => {
            let store = open_store(&config)?;
            contacts_handler::delete_contact_list(store.as_ref(), &user_id, &list_id)?;
            println!("Deleted contact list {}", list_id);
        }
    }

    Ok(())
}

fn open_store(config: &ConsoleConfig) -> Result<Arc<dyn ContactListStore>> {
    let db_path = config.db_path()?;
    tracing::debug!("Using contact list database at {:?}", db_path);
    Ok(Arc::new(SqliteContactListStore::open(&db_path)?))
}

fn init_tracing(log_file_path: Option<&str>) -> Option<WorkerGuard> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let Some(log_path) = log_file_path else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
        return None;
    };

    let log_path = std::path::Path::new(log_path);
    let file_appender = tracing_appender::rolling::never(
        log_path.parent().unwrap_or(std::path::Path::new(".")),
        log_path
            .file_name()
            .unwrap_or(std::ffi::OsStr::new("vertirix-console.log")),
    );
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(true)
                .with_writer(std::io::stderr),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking),
        )
        .init();

    Some(guard)
}

fn print_report(report: &ImportReport) {
    println!(
        "Rows: {}  Valid: {}  Invalid: {}",
        report.total, report.valid, report.invalid
    );

    if !report.errors.is_empty() {
        println!("Errors:");
        for error in &report.errors {
            println!("  {}", error);
        }
        if report.invalid > report.errors.len() {
            println!("  ... and {} more", report.invalid - report.errors.len());
        }
    }

    if !report.preview.is_empty() {
        println!("Preview:");
        for contact in &report.preview {
            println!("  {}", format_contact(contact));
        }
    }
}

fn format_contact(contact: &Contact) -> String {
    let mut line = format!("{} <{}> [{}]", contact.name, contact.phone, contact.status);
    if let Some(email) = &contact.email {
        line.push_str(&format!(" {}", email));
    }
    if let Some(company) = &contact.company {
        line.push_str(&format!(" @ {}", company));
    }
    line
}
