// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod commands;
mod lookup;

use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use color_eyre::Result;
use salon_booking_client::{
    BookingCatalog, ClientConfig, KEY_ENV, RestDataClient, TIMEOUT_ENV, URL_ENV,
};
use salon_booking_domain::{BookingWindow, DEFAULT_DISPLAY_TIMEZONE, parse_timezone};
use salon_booking_wizard::BookingWizard;
use std::sync::Arc;
use std::time::Duration;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

/// Salon booking - walk the booking wizard against a live data store
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the data store
    #[arg(long, env = URL_ENV)]
    url: String,

    /// Public API key of the data store
    #[arg(long, env = KEY_ENV, hide_env_values = true)]
    key: String,

    /// Request timeout in seconds
    #[arg(long, env = TIMEOUT_ENV, default_value_t = 15)]
    timeout_secs: u64,

    /// Time zone used to display slot times
    #[arg(long, default_value = DEFAULT_DISPLAY_TIMEZONE)]
    timezone: String,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.url, &self.key).with_timeout(Duration::from_secs(self.timeout_secs))
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// List the active services
    #[command(visible_alias = "s")]
    Services,

    /// List the professionals offering a service
    #[command(visible_alias = "p")]
    Professionals {
        /// Service identifier or name
        #[arg(long)]
        service: String,
    },

    /// List the available slots for a service on a date
    Slots {
        /// Service identifier or name
        #[arg(long)]
        service: String,
        /// Date as YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Professional identifier or name; any professional when omitted
        #[arg(long)]
        professional: Option<String>,
    },

    /// Walk the whole wizard and print the finished selection
    Book {
        /// Service identifier or name
        #[arg(long)]
        service: String,
        /// Date as YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Professional identifier or name; any professional when omitted
        #[arg(long)]
        professional: Option<String>,
        /// Position of the slot in the `slots` listing
        #[arg(long, default_value_t = 1)]
        slot: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(args.log_level().into())
                .from_env_lossy(),
        )
        .without_time()
        .init();

    let tz: Tz = parse_timezone(&args.timezone)?;
    let client: RestDataClient = RestDataClient::new(&args.client_config())?;
    let window: BookingWindow = BookingWindow::from_local_clock()?;
    debug!(min = %window.min(), max = %window.max(), "Booking window");

    let mut wizard: BookingWizard =
        BookingWizard::new(BookingCatalog::new(Arc::new(client)), window);
    info!(command = ?args.command, "Starting booking wizard");

    match args.command {
        Command::Services => commands::services(&mut wizard).await,
        Command::Professionals { service } => commands::professionals(&mut wizard, &service).await,
        Command::Slots {
            service,
            date,
            professional,
        } => commands::slots(&mut wizard, &service, &date, professional.as_deref(), tz).await,
        Command::Book {
            service,
            date,
            professional,
            slot,
        } => {
            commands::book(
                &mut wizard,
                &service,
                &date,
                professional.as_deref(),
                slot,
                tz,
            )
            .await
        }
    }
}
