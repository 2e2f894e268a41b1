use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use fixturebook::{
    parse_amount, CasinoDraft, Config, EntryId, FixtureId, FixtureView, Outcome, SystemClock,
    Tracker,
};
use std::sync::Arc;

/// Track a season's fixtures, bookmarks and profit/loss positions.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List fixtures with their status, optionally filtered.
    List(ListArgs),
    /// Show profit, loss and net across both ledgers.
    Summary,
    /// List the venues in the schedule.
    Venues,
    /// List the teams in the schedule.
    Teams,
    /// Set or clear the outcome of a fixture position.
    Outcome {
        fixture: String,
        #[arg(value_enum)]
        outcome: OutcomeArg,
    },
    /// Set the amount of a fixture position. Unparseable input records 0.
    Amount { fixture: String, amount: String },
    /// Toggle the bookmark on a fixture.
    Bookmark { fixture: String },
    /// Manage casino entries.
    #[command(subcommand)]
    Casino(CasinoCommand),
}

#[derive(Args)]
struct ListArgs {
    /// Only fixtures involving this team (repeatable).
    #[arg(long = "team")]
    teams: Vec<String>,
    /// Only fixtures at this venue (repeatable).
    #[arg(long = "venue")]
    venues: Vec<String>,
    /// Only bookmarked fixtures.
    #[arg(long)]
    bookmarked: bool,
}

#[derive(Subcommand)]
enum CasinoCommand {
    /// List casino entries.
    List,
    /// Add a casino entry.
    Add(EntryArgs),
    /// Replace an existing casino entry.
    Edit {
        id: String,
        #[command(flatten)]
        entry: EntryArgs,
    },
    /// Delete a casino entry.
    Delete { id: String },
}

#[derive(Args)]
struct EntryArgs {
    #[arg(long)]
    description: String,
    #[arg(long)]
    amount: String,
    #[arg(long, value_enum)]
    kind: KindArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutcomeArg {
    Profit,
    Loss,
    None,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Profit,
    Loss,
}

impl From<KindArg> for Outcome {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Profit => Outcome::Profit,
            KindArg::Loss => Outcome::Loss,
        }
    }
}

impl OutcomeArg {
    fn outcome(self) -> Option<Outcome> {
        match self {
            OutcomeArg::Profit => Some(Outcome::Profit),
            OutcomeArg::Loss => Some(Outcome::Loss),
            OutcomeArg::None => None,
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::from_env().context("loading configuration")?;
    let mut tracker = Tracker::open(&config, Arc::new(SystemClock))
        .await
        .context("opening tracker session")?;

    match cli.command {
        Commands::List(args) => {
            let filter = tracker.filter_mut();
            for team in &args.teams {
                filter.toggle_team(team);
            }
            for venue in &args.venues {
                filter.toggle_venue(venue);
            }
            filter.set_bookmarked_only(args.bookmarked);

            let views = tracker.visible();
            if views.is_empty() {
                println!("No matches found");
            }
            for view in views {
                println!("{}", render_view(&view));
            }
        }
        Commands::Summary => print_summary(&tracker),
        Commands::Venues => tracker.venues().iter().for_each(|v| println!("{}", v)),
        Commands::Teams => tracker.teams().iter().for_each(|t| println!("{}", t)),
        Commands::Outcome { fixture, outcome } => {
            let id = FixtureId::new(fixture);
            tracker.set_outcome(&id, outcome.outcome()).await;
            print_summary(&tracker);
        }
        Commands::Amount { fixture, amount } => {
            let id = FixtureId::new(fixture);
            let stored = tracker.set_amount(&id, &amount).await;
            println!("{}: amount set to ₹{}", id, stored);
            print_summary(&tracker);
        }
        Commands::Bookmark { fixture } => {
            let id = FixtureId::new(fixture);
            let bookmarked = tracker.toggle_bookmark(&id).await;
            println!("{}: {}", id, if bookmarked { "bookmarked" } else { "unbookmarked" });
        }
        Commands::Casino(command) => run_casino(&mut tracker, command).await?,
    }

    Ok(())
}

async fn run_casino(tracker: &mut Tracker, command: CasinoCommand) -> anyhow::Result<()> {
    match command {
        CasinoCommand::List => {
            for entry in tracker.casino_entries() {
                println!(
                    "{}  {:<7} ₹{:<8} {}  ({})",
                    entry.id, entry.kind, entry.amount, entry.description, entry.created_at
                );
            }
        }
        CasinoCommand::Add(entry) => {
            let id = tracker.upsert_casino_entry(draft(entry), None).await;
            println!("added {}", id);
            print_summary(tracker);
        }
        CasinoCommand::Edit { id, entry } => {
            let id: EntryId = id.parse().context("parsing entry id")?;
            let saved = tracker.upsert_casino_entry(draft(entry), Some(id)).await;
            if saved == id {
                println!("updated {}", id);
            } else {
                println!("no entry {}; added {}", id, saved);
            }
            print_summary(tracker);
        }
        CasinoCommand::Delete { id } => {
            let id: EntryId = id.parse().context("parsing entry id")?;
            if tracker.delete_casino_entry(id).await {
                println!("deleted {}", id);
            } else {
                println!("no entry {}", id);
            }
            print_summary(tracker);
        }
    }
    Ok(())
}

fn draft(args: EntryArgs) -> CasinoDraft {
    CasinoDraft::new(args.description, parse_amount(&args.amount), args.kind.into())
}

fn render_view(view: &FixtureView<'_>) -> String {
    let fixture = view.fixture;
    let mut line = format!(
        "[{:<9}] {:<4} {} vs {}  {} ({}) {}  {}",
        view.timing.status,
        fixture.id,
        fixture.home,
        fixture.away,
        view.timing.starts_at.format("%d %b %Y"),
        fixture.weekday,
        view.timing.starts_at.format("%H:%M"),
        fixture.venue,
    );
    if view.timing.is_today {
        line.push_str("  (today)");
    }
    if view.bookmarked {
        line.push_str("  ★");
    }
    if let Some(position) = view.position {
        if let Some(outcome) = position.outcome {
            line.push_str(&format!("  {} ₹{}", outcome, position.amount.unwrap_or(0)));
        }
    }
    line
}

fn print_summary(tracker: &Tracker) {
    let summary = tracker.summary();
    println!(
        "Matches: profit ₹{} loss ₹{} net ₹{}",
        summary.matches.profit, summary.matches.loss, summary.matches.net
    );
    println!(
        "Casino:  profit ₹{} loss ₹{} net ₹{}",
        summary.casino.profit, summary.casino.loss, summary.casino.net
    );
    println!("Total:   {}", summary.headline());
}
