// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use clap::Parser;

mod backend;
mod cli;
mod commands;
mod shell;

use cli::Cli;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("webcalc=info"))
        .init();

    let cli = Cli::parse();
    log::info!(
        "starting webcalc (frameless: {}, debug: {})",
        cli.frameless,
        cli.debug
    );

    if let Err(e) = shell::run(cli) {
        log::error!("error while running webcalc: {e}");
        std::process::exit(1);
    }
}
