use anyhow::Context;
use chrono::Utc;
use clap::{Parser, ValueEnum};
use niftysync_core::api::client::StockApiClient;
use niftysync_core::api::StockApi;
use niftysync_core::refresh::{RefreshScheduler, MARKET_REFRESH_PERIOD};
use niftysync_core::screens::analysis::AnalysisScreen;
use niftysync_core::screens::dashboard::DashboardScreen;
use niftysync_core::screens::notifications::NotificationsScreen;
use niftysync_core::screens::portfolio::PortfolioScreen;
use niftysync_core::screens::profile::{ProfileScreen, MENU};
use niftysync_core::screens::recommendations::RecommendationsScreen;
use niftysync_core::theme::ColorScheme;
use niftysync_core::time::ist_market::{self, AlertSlot, MarketStatus};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod render;

#[derive(Debug, Parser)]
#[command(name = "niftysync")]
struct Args {
    /// Which screen to drive.
    #[arg(long, value_enum, default_value_t = Screen::Dashboard)]
    screen: Screen,

    /// Alert slot override for the recommendations screen. Defaults to the
    /// slot currently on display per the time-of-day rules.
    #[arg(long, value_enum)]
    slot: Option<Slot>,

    /// Keep the dashboard on the market-hours refresh timer until ctrl-c.
    #[arg(long)]
    watch: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Screen {
    Dashboard,
    Recommendations,
    Portfolio,
    Analysis,
    Notifications,
    Profile,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Slot {
    Morning,
    Afternoon,
}

impl From<Slot> for AlertSlot {
    fn from(slot: Slot) -> Self {
        match slot {
            Slot::Morning => AlertSlot::TenAm,
            Slot::Afternoon => AlertSlot::TwoPm,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = niftysync_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();

    let result = run(args, &settings).await;
    if let Err(err) = &result {
        sentry_anyhow::capture_anyhow(err);
    }
    result
}

async fn run(args: Args, settings: &niftysync_core::config::Settings) -> anyhow::Result<()> {
    if matches!(args.screen, Screen::Profile) {
        // The only screen with no remote data; no client needed.
        let screen = ProfileScreen::new(settings.user_id(), ColorScheme::Dark);
        println!("{}", screen.display_name);
        for entry in MENU {
            println!("  {} — {}", entry.title, entry.subtitle);
        }
        println!("  {}", screen.about_line());
        return Ok(());
    }

    let client = Arc::new(
        StockApiClient::from_settings(settings).context("failed to build stock api client")?,
    );

    match args.screen {
        Screen::Dashboard => run_dashboard(client, args.watch).await,
        Screen::Recommendations => {
            let mut screen = match args.slot {
                Some(slot) => RecommendationsScreen::with_slot(client, slot.into()),
                None => RecommendationsScreen::new(client)?,
            };
            screen.load().await;
            print_recommendations(&screen);
            Ok(())
        }
        Screen::Portfolio => {
            let mut screen = PortfolioScreen::new(client);
            screen.load().await;
            print_portfolio(&screen);
            Ok(())
        }
        Screen::Analysis => {
            let mut screen = AnalysisScreen::new(client);
            screen.load().await;
            print_analysis(&screen);
            Ok(())
        }
        Screen::Notifications => {
            let mut screen = NotificationsScreen::new(client);
            screen.load().await;
            print_notifications(&screen);
            Ok(())
        }
        Screen::Profile => unreachable!("handled above"),
    }
}

async fn run_dashboard(client: Arc<StockApiClient>, watch: bool) -> anyhow::Result<()> {
    let mut screen = DashboardScreen::new(client);
    screen.load().await?;
    print_dashboard(&screen);

    if !watch {
        return Ok(());
    }

    let shared = Arc::new(tokio::sync::Mutex::new(screen));
    let tick_screen = shared.clone();
    let scheduler = RefreshScheduler::spawn(
        MARKET_REFRESH_PERIOD,
        || matches!(ist_market::market_status(Utc::now()), Ok(MarketStatus::Open)),
        move || {
            let screen = tick_screen.clone();
            async move {
                let mut screen = screen.lock().await;
                match screen.refresh().await {
                    Ok(()) => print_dashboard(&screen),
                    Err(err) => tracing::error!(error = %err, "scheduled refresh failed"),
                }
            }
        },
    );

    tracing::info!(period_secs = MARKET_REFRESH_PERIOD.as_secs(), "watching dashboard");
    tokio::signal::ctrl_c().await?;
    scheduler.shutdown().await;
    Ok(())
}

fn print_dashboard<C: StockApi>(screen: &DashboardScreen<C>) {
    if let Some(error) = &screen.error {
        println!("! {error}");
    }
    println!(
        "Market {} | next alert {}",
        if screen.market_open { "OPEN" } else { "CLOSED" },
        screen.next_alert,
    );
    for quote in &screen.indices {
        println!("{}", render::index_row(quote));
    }
    for rec in &screen.recommendations {
        println!("{}", render::recommendation_card(rec));
    }
    if let Some(last_update) = screen.last_update {
        println!("last updated {}", last_update.format("%H:%M"));
    }
}

fn print_recommendations<C: StockApi>(screen: &RecommendationsScreen<C>) {
    if let Some(error) = &screen.error {
        println!("! {error}");
    }
    println!("slot {}", screen.active_slot);
    if screen.items.is_empty() {
        println!("No recommendations available.");
    }
    for rec in &screen.items {
        println!("{}", render::recommendation_card(rec));
    }
}

fn print_portfolio<C: StockApi>(screen: &PortfolioScreen<C>) {
    if let Some(error) = &screen.error {
        println!("! {error}");
    }
    for holding in &screen.summary.holdings {
        println!("{}", render::holding_row(holding));
    }
    println!("{}", render::portfolio_totals(&screen.summary));
}

fn print_analysis<C: StockApi>(screen: &AnalysisScreen<C>) {
    if let Some(error) = &screen.error {
        println!("! {error}");
    }
    match &screen.analysis {
        Some(analysis) => println!("{}", render::analysis_summary(analysis)),
        None => println!("No analysis available."),
    }
}

fn print_notifications<C: StockApi>(screen: &NotificationsScreen<C>) {
    if let Some(error) = &screen.error {
        println!("! {error}");
    }
    println!("{} unread", screen.unread_count());
    for record in &screen.history {
        println!("{}", render::notification_row(record));
    }
}

fn init_sentry(settings: &niftysync_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
