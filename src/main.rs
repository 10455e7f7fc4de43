use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use tabsettle::application::engine::SettlementEngine;
use tabsettle::application::summary::{category_totals, participant_share};
use tabsettle::config::{NamePolicy, SettleConfig, UnlistedPayer};
use tabsettle::domain::group::{Group, GroupBook};
use tabsettle::domain::ports::SettledStoreBox;
use tabsettle::domain::settlement::Settlement;
use tabsettle::infrastructure::in_memory::InMemorySettledStore;
use tabsettle::interfaces::csv::expense_reader::ExpenseReader;
use tabsettle::interfaces::csv::report_writer::ReportWriter;
use tabsettle::interfaces::csv::roster_reader::RosterReader;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input expenses CSV file (group,id,amount,payer,involved,category,description)
    input: PathBuf,

    /// Optional roster CSV file (group,participant[,name])
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Path to persistent database for paid settlements. Requires the
    /// `storage-rocksdb` feature.
    #[arg(long, env = "TABSETTLE_DB_PATH")]
    db_path: Option<PathBuf>,

    /// How participant names are canonicalized
    #[arg(long, value_enum, env = "TABSETTLE_NAMES", default_value_t = NamePolicy::Exact)]
    names: NamePolicy,

    /// What to do with expenses paid by someone outside the roster
    #[arg(long, value_enum, env = "TABSETTLE_UNLISTED_PAYER", default_value_t = UnlistedPayer::Extend)]
    unlisted_payer: UnlistedPayer,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print each participant's net balance per group
    Balances,
    /// Print outstanding settlements per group
    Settle {
        /// Only show what this participant owes and is owed
        #[arg(long)]
        user: Option<String>,
    },
    /// Print what a participant paid, consumed and nets per group
    Share {
        #[arg(long)]
        user: String,
    },
    /// Print spending per category
    Categories,
    /// Mark the current settlement between two participants as paid
    MarkPaid {
        #[arg(long)]
        group: String,
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
}

fn open_store(db_path: Option<&Path>) -> Result<SettledStoreBox> {
    match db_path {
        #[cfg(feature = "storage-rocksdb")]
        Some(path) => {
            let store = tabsettle::infrastructure::rocksdb::RocksDBSettledStore::open(path)
                .into_diagnostic()?;
            Ok(Box::new(store))
        }
        #[cfg(not(feature = "storage-rocksdb"))]
        Some(path) => Err(miette::miette!(
            "--db-path {} requires the storage-rocksdb feature",
            path.display()
        )),
        None => Ok(Box::new(InMemorySettledStore::new())),
    }
}

fn read_groups(cli: &Cli) -> Result<Vec<Group>> {
    let mut book = GroupBook::new();

    if let Some(roster) = &cli.roster {
        let file = File::open(roster).into_diagnostic()?;
        for member in RosterReader::new(file, cli.names).members() {
            match member {
                Ok(entry) => {
                    if let Some(name) = entry.group_name {
                        book.set_name(&entry.group, name);
                    }
                    book.add_participant(&entry.group, entry.participant);
                }
                Err(e) => tracing::warn!(error = %e, "Error reading roster entry"),
            }
        }
    }

    let file = File::open(&cli.input).into_diagnostic()?;
    for row in ExpenseReader::new(file, cli.names).expenses() {
        match row {
            Ok(row) => book.add_expense(&row.group, row.expense),
            Err(e) => tracing::warn!(error = %e, "Error reading expense"),
        }
    }

    Ok(book.into_groups())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = SettleConfig::new(cli.names, cli.unlisted_payer);
    let engine = SettlementEngine::new(config, open_store(cli.db_path.as_deref())?);
    let groups = read_groups(&cli)?;

    let stdout = io::stdout();
    let mut writer = ReportWriter::new(stdout.lock());

    match &cli.command {
        Command::Balances => {
            let balances: Vec<_> = groups.iter().map(|g| (g, engine.balances(g))).collect();
            writer
                .write_balances(balances.iter().map(|(g, b)| (g.id.as_str(), b)))
                .into_diagnostic()?;
        }
        Command::Settle { user: Some(user) } => {
            let user = cli.names.canonicalize(user);
            let summary = engine.debt_summary(&groups, &user).await.into_diagnostic()?;
            writer.write_debt_summary(&summary).into_diagnostic()?;
        }
        Command::Settle { user: None } => {
            let mut outstanding: Vec<(&str, Vec<Settlement>)> = Vec::with_capacity(groups.len());
            for group in &groups {
                outstanding.push((group.id.as_str(), engine.settle(group).await.into_diagnostic()?));
            }
            writer
                .write_settlements(outstanding.iter().map(|(g, s)| (*g, s.as_slice())))
                .into_diagnostic()?;
        }
        Command::Share { user } => {
            let user = cli.names.canonicalize(user);
            writer
                .write_shares(
                    groups
                        .iter()
                        .filter(|g| g.participants.iter().any(|p| p == &*user))
                        .map(|g| (g.id.as_str(), participant_share(&g.expenses, &user))),
                )
                .into_diagnostic()?;
        }
        Command::Categories => {
            let expenses: Vec<_> = groups
                .iter()
                .flat_map(|g| g.expenses.iter().cloned())
                .collect();
            writer
                .write_categories(&category_totals(&expenses))
                .into_diagnostic()?;
        }
        Command::MarkPaid { group, from, to } => {
            let target = groups
                .iter()
                .find(|g| &g.id == group)
                .ok_or_else(|| miette::miette!("Unknown group {group}"))?;
            let from = cli.names.canonicalize(from);
            let to = cli.names.canonicalize(to);
            let settlement = engine
                .mark_paid_between(target, &from, &to)
                .await
                .into_diagnostic()?;
            tracing::info!(group = %target.id, %settlement, "marked as paid");
            writer
                .write_settlements([(target.id.as_str(), std::slice::from_ref(&settlement))])
                .into_diagnostic()?;
        }
    }

    Ok(())
}
