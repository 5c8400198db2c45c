// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `tascli` command-line entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use tascli::config::CONFIG_ENV;
use tascli::{Config, Invocation, OutputFormat, output};

#[derive(Parser)]
#[command(
    name = "tascli",
    version,
    about = "Send a command to a Tasmota device over HTTP",
    after_help = "https://tasmota.github.io/docs/Commands/"
)]
struct Cli {
    #[arg(long, value_name = "CMD", help = "Command: on, off, status, statusall, timers")]
    cmd: Option<String>,

    #[arg(
        long,
        env = CONFIG_ENV,
        value_name = "FILE",
        help = "Configuration file (defaults to ~/.tascli)"
    )]
    config: Option<PathBuf>,

    #[arg(long, value_name = "COMMAND", help = "Custom command string to send")]
    custom: Option<String>,

    #[arg(long, value_name = "NAME", help = "Name of a device from the configuration file")]
    device: Option<String>,

    #[arg(long, help = "Display configuration")]
    displayconfig: bool,

    #[arg(long, value_name = "ADDRESS", help = "IP address or hostname of a device")]
    host: Option<String>,

    #[arg(long, help = "Output JSON")]
    json: bool,

    #[arg(long, help = "List all configured devices")]
    list: bool,

    #[arg(long, help = "Be verbose")]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "tascli=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let (config_path, config) = match &cli.config {
        Some(path) => (path.clone(), Config::load(path)?),
        None => {
            let path = Config::default_path()?;
            let config = Config::load_or_default(&path)?;
            (path, config)
        }
    };

    if cli.displayconfig {
        println!("{}", output::settings_table(&config.settings(&config_path)));
        return Ok(());
    }

    if cli.list {
        println!("{}", output::device_table(&config));
        return Ok(());
    }

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let invocation = Invocation::from_parts(
        cli.cmd.as_deref(),
        cli.custom.as_deref(),
        cli.host.as_deref(),
        cli.device.as_deref(),
        format,
        &config,
    )
    .map_err(tascli::Error::from)?;

    let rendered = invocation.run(&config).await?;
    println!("{rendered}");
    Ok(())
}
