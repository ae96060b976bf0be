use std::path::Path;

use chrono::{Local, NaiveDate};

use crate::cli::commands::{Cli, Commands, ListArgs, ShowArgs};
use crate::cli::output::{CelebrityJson, format_detail, format_list};
use crate::io::config_io::read_config;
use crate::io::seed::load_records;
use crate::model::{AppConfig, Celebrity};
use crate::ops::store::RecordStore;

/// Everything a command needs: resolved config plus the loaded records
pub struct Context {
    pub config: AppConfig,
    pub records: Vec<Celebrity>,
    pub today: NaiveDate,
}

/// Read config and seed data. `--data` beats `[data] path` in the config.
pub fn load_context(cli: &Cli) -> Result<Context, Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let config = read_config(cli.config.as_deref(), &cwd)?;
    let today = Local::now().date_naive();
    let data_path: Option<&Path> = cli.data.as_deref().or(config.data.path.as_deref());
    let records = load_records(data_path, today).inspect_err(|e| {
        tracing::error!(error = %e, "could not load records");
    })?;
    Ok(Context {
        config,
        records,
        today,
    })
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = load_context(&cli)?;
    match &cli.command {
        None => crate::tui::run(ctx),
        Some(Commands::List(args)) => cmd_list(&ctx, args, cli.json),
        Some(Commands::Show(args)) => cmd_show(&ctx, args, cli.json),
    }
}

fn cmd_list(ctx: &Context, args: &ListArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = RecordStore::new(ctx.records.clone());
    if let Some(q) = &args.query {
        store.set_query(q);
    }
    let min_age = ctx.config.rules.min_edit_age;

    if json {
        let items: Vec<CelebrityJson> = store
            .filtered()
            .map(|c| CelebrityJson::new(c, min_age))
            .collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        print!("{}", format_list(store.filtered()));
    }
    Ok(())
}

fn cmd_show(ctx: &Context, args: &ShowArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let record = ctx
        .records
        .iter()
        .find(|c| c.id == args.id)
        .ok_or_else(|| format!("no record with id {}", args.id))?;
    let min_age = ctx.config.rules.min_edit_age;

    if json {
        let item = CelebrityJson::new(record, min_age);
        println!("{}", serde_json::to_string_pretty(&item)?);
    } else {
        print!("{}", format_detail(record, min_age));
    }
    Ok(())
}
