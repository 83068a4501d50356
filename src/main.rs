use clap::Parser;
use dirsort::cli::{self, Args, SortMode};
use dirsort::output::OutputFormatter;
use std::env;
use std::process;

fn main() {
    let args = Args::parse();

    // No mode (or an unknown one) gets the usage hint and a clean exit.
    let Some(mode) = args.mode.as_deref().and_then(SortMode::from_flag) else {
        println!("{}", cli::USAGE_HINT);
        return;
    };

    // The working root is always the process's current directory.
    let working_root = match env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            OutputFormatter::error(&format!("Could not determine working directory: {}", e));
            process::exit(1);
        }
    };

    if let Err(e) = cli::run_cli_with_config(mode, &working_root, args.config.as_deref()) {
        OutputFormatter::error(&e);
        process::exit(1);
    }
}
