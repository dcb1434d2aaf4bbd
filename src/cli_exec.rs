use anyhow::{Context, Result};

use ssu::model::{AppReport, Settings};
use ssu::ops::{Backup, Merge, Sort};
use ssu::remote::CatalogClient;
use ssu::resolve::NameResolver;
use ssu::store::NameCacheStore;

use crate::Commands;

pub(crate) fn handle_command(command: Commands, settings: &Settings, json: bool) -> Result<()> {
    match command {
        Commands::Backup {
            steam_user_folder,
            output_folder,
        } => {
            let backup = Backup::new(&steam_user_folder, &output_folder)?;
            let mut resolver = open_resolver(settings)?;
            let reports = backup.run(&mut resolver)?;
            print_reports(&reports, json, |r| {
                let msg = if r.count > 0 {
                    format!("Copied {}", r.count)
                } else {
                    "No".to_string()
                };
                format!(
                    "Backing up screenshots from {}... {} new screenshots.",
                    r.app_name, msg
                )
            })?;
        }
        Commands::Sort { screenshots_folder } => {
            let sort = Sort::new(&screenshots_folder)?;
            let mut resolver = open_resolver(settings)?;
            let reports = sort.run(&mut resolver)?;
            print_reports(&reports, json, |r| {
                format!(
                    "Sorting screenshots from {}... Moved {} new screenshots.",
                    r.app_name, r.count
                )
            })?;
        }
        Commands::Merge {
            compressed_screenshots,
            uncompressed_screenshots,
        } => {
            let merge = Merge::new(&compressed_screenshots, &uncompressed_screenshots)?;
            let reports = merge.run()?;
            print_reports(&reports, json, |r| {
                let msg = if r.count > 0 {
                    format!("Added {}", r.count)
                } else {
                    "No".to_string()
                };
                format!(
                    "Merging screenshots from {}... {} new compressed screenshots.",
                    r.app_name, msg
                )
            })?;
        }
    }

    Ok(())
}

fn open_resolver(settings: &Settings) -> Result<NameResolver<CatalogClient>> {
    let client = CatalogClient::new(settings.catalog_url.clone())?;
    NameResolver::open(NameCacheStore::new(&settings.cache_file), client)
}

fn print_reports(
    reports: &[AppReport],
    json: bool,
    line: impl Fn(&AppReport) -> String,
) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(reports).context("serialize reports json")?
        );
        return Ok(());
    }
    for r in reports {
        println!("{}", line(r));
    }
    println!("Finished!");
    Ok(())
}
