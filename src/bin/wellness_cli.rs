// ABOUTME: Demo CLI for the WellnessGenie session core
// ABOUTME: Seeds a scripted onboarding run and inspects the persisted session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WellnessGenie

//! Demo CLI for the WellnessGenie session core.
//!
//! Usage:
//! ```bash
//! # Run a scripted onboarding and persist the committed session
//! cargo run --bin wellness-cli -- seed
//!
//! # Seed under a different name
//! cargo run --bin wellness-cli -- seed --name "Jordan Park"
//!
//! # Print the persisted session snapshot
//! cargo run --bin wellness-cli -- show
//!
//! # Clear the persisted session
//! cargo run --bin wellness-cli -- logout
//! ```

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use wellness_genie::config::AppConfig;
use wellness_genie::logging::LoggingConfig;
use wellness_genie::models::{ActivityLevel, BudgetTier, DietTag, Gender, Goal, StressLevel};
use wellness_genie::onboarding::{
    Advance, CompletionTimer, DraftToggle, DraftUpdate, OnboardingFlow,
};
use wellness_genie::session::SessionStore;
use wellness_genie::storage::FileStorage;

#[derive(Parser)]
#[command(
    name = "wellness-cli",
    about = "WellnessGenie session core demo",
    long_about = "Run a scripted onboarding, inspect, or clear the persisted session"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a scripted onboarding and commit the resulting profile
    Seed {
        /// Name for the seeded profile
        #[arg(long, default_value = "Jamie Lee")]
        name: String,
    },
    /// Print the persisted session snapshot as JSON
    Show,
    /// Clear the persisted session
    Logout,
}

#[tokio::main]
async fn main() -> Result<()> {
    LoggingConfig::from_env().init()?;
    let config = AppConfig::from_env();
    let backend = FileStorage::open(&config.data_dir)
        .with_context(|| format!("opening data dir {}", config.data_dir.display()))?;
    let mut store = SessionStore::new(Box::new(backend));
    store.load();

    match Cli::parse().command {
        Command::Seed { name } => seed(&mut store, name).await,
        Command::Show => {
            let snapshot = serde_json::to_string_pretty(store.snapshot())?;
            println!("{snapshot}");
            Ok(())
        }
        Command::Logout => {
            store.logout()?;
            info!("session cleared");
            Ok(())
        }
    }
}

/// Walk the default flow with scripted answers, wait out the simulated
/// processing delay, and commit.
async fn seed(store: &mut SessionStore, name: String) -> Result<()> {
    let mut flow = OnboardingFlow::default();
    flow.apply(DraftUpdate::Name(name));
    flow.apply(DraftUpdate::Age(28));
    flow.apply(DraftUpdate::Gender(Gender::Female));
    flow.toggle(DraftToggle::Goal(Goal::Energy));
    flow.toggle(DraftToggle::Goal(Goal::MuscleGain));
    flow.toggle(DraftToggle::DietTag(DietTag::Vegetarian));
    flow.apply(DraftUpdate::ActivityLevel(ActivityLevel::Moderate));
    flow.apply(DraftUpdate::SleepHours(7.0));
    flow.apply(DraftUpdate::StressLevel(StressLevel::Moderate));
    flow.apply(DraftUpdate::Budget(BudgetTier::Medium));

    loop {
        match flow.next()? {
            Advance::Step(index) => {
                let (current, total, percent) = flow.progress();
                info!(step = index, current, total, percent, "advanced");
            }
            Advance::Processing => break,
        }
    }

    // Simulated processing delay before the commit auto-advances
    let (tx, rx) = tokio::sync::oneshot::channel();
    let timer = CompletionTimer::schedule(Duration::from_millis(750), move || {
        let _ = tx.send(());
    });
    rx.await.context("processing timer dropped")?;
    drop(timer);

    let traits = flow.complete(store)?;
    info!(?traits, "onboarding committed");
    println!("{}", serde_json::to_string_pretty(&traits)?);
    Ok(())
}
