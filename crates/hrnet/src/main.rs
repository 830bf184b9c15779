//! `hrnet` - CLI for employee records
//!
//! This binary provides the command-line shell over the creation form and
//! the employee listing.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use hrnet::cli::{
    render_plain, render_table, Cli, Command, ConfigCommand, CreateCommand, ListCommand,
    OutputFormat, Route,
};
use hrnet::form::CONFIRMATION_MESSAGE;
use hrnet::listing::{render, Column};
use hrnet::{init_logging, Config, CreationForm, RecordStore, SqliteSlots, Store, ViewState};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => match e.downcast_ref::<hrnet::Error>() {
            Some(err) if err.is_input_error() => {
                eprintln!("Invalid input: {err}");
                ExitCode::from(2)
            }
            _ => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        },
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone())?;

    if let Some(route) = cli.command.route() {
        debug!(path = route.path(), "Opening screen");
    }

    match cli.command {
        Command::Create(create_cmd) => handle_create(&config, create_cmd),
        Command::List(list_cmd) => handle_list(&config, &list_cmd),
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

fn open_store(config: &Config) -> Result<RecordStore<SqliteSlots>, Box<dyn std::error::Error>> {
    let slots = SqliteSlots::open(config.database_path())?;
    debug!(path = %slots.path().display(), "Opened record database");
    Ok(RecordStore::with_key(slots, config.storage.slot_key.clone()))
}

fn handle_create(config: &Config, cmd: CreateCommand) -> Result<(), Box<dyn std::error::Error>> {
    let mut form = CreationForm::new();
    form.set_first_name(cmd.first_name);
    form.set_last_name(cmd.last_name);
    if let Some(date) = cmd.date_of_birth {
        form.set_date_of_birth(date);
    }
    if let Some(date) = cmd.start_date {
        form.set_start_date(date);
    }
    form.set_street(cmd.street);
    form.set_city(cmd.city);
    form.set_state(cmd.state.as_deref())?;
    if let Some(zip) = cmd.zip_code.as_deref() {
        form.set_zip_code(zip)?;
    }
    form.set_department(cmd.department.map(Into::into));

    let mut store = open_store(config)?;
    let record = form.save(&mut store)?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else if form.confirmation_visible() {
        println!("{CONFIRMATION_MESSAGE}");
        println!(
            "View current employees: {}",
            Route::Create.linked().command_hint()
        );
    }
    Ok(())
}

fn handle_list(config: &Config, cmd: &ListCommand) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(config)?;
    let options = config.display_options()?;
    let records = store.load_all();

    let mut view = ViewState::new(config.entries_per_page());
    if let Some(entries) = cmd.entries {
        view.set_entries_per_page(entries);
    }
    if let Some(query) = &cmd.search {
        view.set_search_query(query.clone());
    }
    if let Some(column) = cmd.sort_by {
        let column = Column::from(column);
        view.toggle_sort(column);
        if cmd.desc {
            view.toggle_sort(column);
        }
    }

    let mut model = render(&records, &view, &options);
    if cmd.last {
        view.last_page(model.total_pages);
    } else {
        view.set_current_page(cmd.page);
    }
    if view.current_page() != model.current_page {
        model = render(&records, &view, &options);
    }

    match cmd.format {
        OutputFormat::Table => {
            println!("Current Employees");
            println!();
            print!("{}", render_table(&model));
            println!();
            println!("Home: {}", Route::EmployeeList.linked().command_hint());
        }
        OutputFormat::Plain => print!("{}", render_plain(&model)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&model)?),
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Database path:      {}", config.database_path().display());
                println!("  Slot key:           {}", config.storage.slot_key);
                println!();
                println!("[Listing]");
                println!("  Entries per page:   {}", config.listing.entries_per_page);
                println!("  Date format:        {}", config.listing.date_format);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
