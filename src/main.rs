use std::path::PathBuf;

use clap::Subcommand;

use ssu::model::DEFAULT_OUTPUT_FOLDER;

mod cli_exec;
mod cli_runtime;

#[derive(Subcommand)]
enum Commands {
    /// Back up Steam screenshots into folders named after their apps
    ///
    /// Useful when "Save an uncompressed copy" is not enabled in Steam.
    Backup {
        /// Steam user folder (Steam/userdata/<user_id>)
        steam_user_folder: PathBuf,
        /// Where to put the per-app folders
        #[arg(short = 'o', long = "output", value_name = "OUTPUT_FOLDER", default_value = DEFAULT_OUTPUT_FOLDER)]
        output_folder: PathBuf,
    },

    /// Sort uncompressed screenshots into folders named after their apps (in place)
    ///
    /// Useful when "Save an uncompressed copy" is enabled in Steam.
    Sort {
        /// Folder containing <appid>_<name>.png screenshots
        screenshots_folder: PathBuf,
    },

    /// Copy backed up compressed screenshots that have no uncompressed copy
    ///
    /// The compressed backup can be removed safely afterwards.
    Merge {
        /// Output of the `backup` command
        compressed_screenshots: PathBuf,
        /// Output of the `sort` command
        uncompressed_screenshots: PathBuf,
    },
}

fn main() {
    if let Err(err) = cli_runtime::run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
