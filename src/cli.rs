//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;

use crate::adapters::csv_report_adapter::CsvReportAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::json_catalog_adapter::JsonCatalogAdapter;
use crate::adapters::rng_adapter::StdRngAdapter;
use crate::domain::company::{Company, CompanyRegistry};
use crate::domain::config_validation::validate_config;
use crate::domain::error::SimvestorError;
use crate::domain::metrics::ReturnMetrics;
use crate::domain::news::{default_catalog, NewsCatalog};
use crate::domain::price_engine::{EngineConfig, DEFAULT_BASE_VOLATILITY, DEFAULT_PRICE_FLOOR};
use crate::domain::quarterly::QuarterlyReport;
use crate::domain::screener::{screen, Metric, MetricFilter, SortOrder};
use crate::domain::sector::Sector;
use crate::domain::seed::seed_registry;
use crate::domain::session::{
    GameSession, SessionConfig, DEFAULT_INITIAL_CASH, DEFAULT_WEEKS, DEFAULT_WEEKS_PER_QUARTER,
};
use crate::ports::catalog_port::CatalogPort;
use crate::ports::config_port::ConfigPort;
use crate::ports::random_port::RandomPort;
use crate::ports::report_port::ReportPort;

const RECENT_HEADLINES: usize = 5;

#[derive(Parser, Debug)]
#[command(name = "simvestor", about = "News-driven stock market simulator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a simulation
    Simulate {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(short, long)]
        weeks: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        /// Opening purchase as NAME:SHARES, repeatable
        #[arg(long = "buy")]
        buys: Vec<BuyOrder>,
        /// Trade placed before a week as WEEK:NAME:+SHARES or WEEK:NAME:-SHARES, repeatable
        #[arg(long = "trade")]
        trades: Vec<TradeOrder>,
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Filter and rank companies by fundamentals
    Screen {
        #[arg(long)]
        sector: Option<Sector>,
        /// Predicate such as pe_ratio<20, repeatable
        #[arg(short, long = "filter")]
        filters: Vec<MetricFilter>,
        #[arg(long, default_value = "market_cap")]
        sort: Metric,
        #[arg(long)]
        asc: bool,
    },
    /// Show one company's fundamentals and history
    Company { name: String },
    /// List the news catalog
    News {
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Write the catalog as JSON to this path
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Validate a simulation configuration
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

/// An opening purchase given on the command line as `NAME:SHARES`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuyOrder {
    pub company: String,
    pub shares: u64,
}

impl FromStr for BuyOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (company, shares) = s
            .rsplit_once(':')
            .ok_or_else(|| format!("expected NAME:SHARES, got '{}'", s))?;
        let company = company.trim();
        if company.is_empty() {
            return Err(format!("missing company name in '{}'", s));
        }
        let shares = shares
            .trim()
            .parse::<u64>()
            .map_err(|_| format!("invalid share count in '{}'", s))?;
        Ok(BuyOrder {
            company: company.to_string(),
            shares,
        })
    }
}

impl fmt::Display for BuyOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.company, self.shares)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeSide {
    Buy,
    Sell,
}

/// A buy or sell placed just before `week` is simulated.
///
/// Written `WEEK:NAME:+SHARES` to buy and `WEEK:NAME:-SHARES` to sell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeOrder {
    pub week: u32,
    pub company: String,
    pub side: TradeSide,
    pub shares: u64,
}

impl FromStr for TradeOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || format!("expected WEEK:NAME:+SHARES or WEEK:NAME:-SHARES, got '{}'", s);
        let (week, rest) = s.split_once(':').ok_or_else(malformed)?;
        let (company, quantity) = rest.rsplit_once(':').ok_or_else(malformed)?;

        let week = week
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|w| *w >= 1)
            .ok_or_else(|| format!("invalid week in '{}'", s))?;
        let company = company.trim();
        if company.is_empty() {
            return Err(format!("missing company name in '{}'", s));
        }
        let quantity = quantity.trim();
        let (side, shares) = if let Some(n) = quantity.strip_prefix('+') {
            (TradeSide::Buy, n)
        } else if let Some(n) = quantity.strip_prefix('-') {
            (TradeSide::Sell, n)
        } else {
            return Err(malformed());
        };
        let shares = shares
            .parse::<u64>()
            .map_err(|_| format!("invalid share count in '{}'", s))?;

        Ok(TradeOrder {
            week,
            company: company.to_string(),
            side,
            shares,
        })
    }
}

impl fmt::Display for TradeOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self.side {
            TradeSide::Buy => '+',
            TradeSide::Sell => '-',
        };
        write!(f, "{}:{}:{}{}", self.week, self.company, sign, self.shares)
    }
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Simulate {
            config,
            weeks,
            seed,
            buys,
            trades,
            output,
            catalog,
        } => run_simulate(
            &config,
            weeks,
            seed,
            &buys,
            &trades,
            output.as_ref(),
            catalog.as_ref(),
        ),
        Command::Screen {
            sector,
            filters,
            sort,
            asc,
        } => run_screen(
            sector,
            &filters,
            SortOrder {
                metric: sort,
                descending: !asc,
            },
        ),
        Command::Company { name } => run_company(&name),
        Command::News { catalog, export } => run_news(catalog.as_ref(), export.as_ref()),
        Command::Validate { config } => run_validate(&config),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = SimvestorError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

pub fn build_engine_config(adapter: &dyn ConfigPort) -> EngineConfig {
    EngineConfig {
        base_volatility: adapter.get_double("engine", "base_volatility", DEFAULT_BASE_VOLATILITY),
        price_floor: adapter.get_double("engine", "price_floor", DEFAULT_PRICE_FLOOR),
    }
}

pub fn build_session_config(adapter: &dyn ConfigPort) -> SessionConfig {
    SessionConfig {
        initial_cash: adapter.get_double("game", "initial_cash", DEFAULT_INITIAL_CASH),
        engine: build_engine_config(adapter),
        weeks_per_quarter: adapter
            .get_int("game", "weeks_per_quarter", DEFAULT_WEEKS_PER_QUARTER as i64)
            .clamp(1, u32::MAX as i64) as u32,
    }
}

pub fn resolve_weeks(weeks_override: Option<u32>, config: &dyn ConfigPort) -> u32 {
    weeks_override.unwrap_or_else(|| {
        config
            .get_int("game", "weeks", DEFAULT_WEEKS as i64)
            .clamp(1, u32::MAX as i64) as u32
    })
}

/// Command-line seed first, then `[game] seed`. `None` means entropy.
pub fn resolve_seed(seed_override: Option<u64>, config: &dyn ConfigPort) -> Option<u64> {
    seed_override.or_else(|| {
        config
            .get_string("game", "seed")
            .and_then(|s| s.trim().parse().ok())
    })
}

/// `path` through `port` if given, the built-in catalog otherwise.
pub fn load_catalog(
    path: Option<&Path>,
    port: &dyn CatalogPort,
) -> Result<NewsCatalog, SimvestorError> {
    match path {
        Some(p) => port.load(&p.display().to_string()),
        None => Ok(default_catalog()),
    }
}

fn run_simulate(
    config_path: &PathBuf,
    weeks_override: Option<u32>,
    seed_override: Option<u64>,
    buys: &[BuyOrder],
    trades: &[TradeOrder],
    output_override: Option<&PathBuf>,
    catalog_override: Option<&PathBuf>,
) -> ExitCode {
    // Stage 1: Load and validate config
    eprintln!("Loading config from {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };
    if let Err(e) = validate_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    // Stage 2: Resolve run parameters
    let session_config = build_session_config(&adapter);
    let weeks = resolve_weeks(weeks_override, &adapter);
    let seed = resolve_seed(seed_override, &adapter);
    let output = output_override
        .cloned()
        .or_else(|| adapter.get_string("report", "output_path").map(PathBuf::from));
    let catalog_path = catalog_override
        .cloned()
        .or_else(|| adapter.get_string("news", "catalog_path").map(PathBuf::from));

    // Stage 3: Load catalog
    let catalog = match load_catalog(catalog_path.as_deref(), &JsonCatalogAdapter::new()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    eprintln!("Loaded {} news items", catalog.len());

    // Stage 4: Random source
    let mut rng = match seed {
        Some(s) => {
            eprintln!("Using seed {}", s);
            StdRngAdapter::seeded(s)
        }
        None => StdRngAdapter::from_entropy(),
    };

    run_simulation_pipeline(
        session_config,
        catalog,
        buys,
        trades,
        weeks,
        &mut rng,
        &CsvReportAdapter::new(),
        output.as_deref(),
    )
}

/// Build a session over the seed registry, place the opening orders, run
/// `weeks` weeks with each dated trade placed before its week, print the
/// summary, and write the weekly history through `report_port` when
/// `output_path` is set.
pub fn run_simulation_pipeline(
    session_config: SessionConfig,
    catalog: NewsCatalog,
    buys: &[BuyOrder],
    trades: &[TradeOrder],
    weeks: u32,
    rng: &mut dyn RandomPort,
    report_port: &dyn ReportPort,
    output_path: Option<&Path>,
) -> ExitCode {
    let registry = match seed_registry() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    let mut session = GameSession::new(session_config, registry, catalog);

    for order in buys {
        if let Err(e) = session.buy(&order.company, order.shares) {
            eprintln!("error: cannot buy {}: {e}", order);
            return (&e).into();
        }
        eprintln!("Bought {} shares of {}", order.shares, order.company);
    }

    eprintln!(
        "Running simulation: {} weeks, starting cash ${:.2}",
        weeks, session.portfolio().cash
    );
    for order in trades.iter().filter(|t| t.week > weeks) {
        eprintln!("warning: trade {} is after the last week, skipped", order);
    }

    let mut outcomes = Vec::with_capacity(weeks as usize);
    for _ in 0..weeks {
        if let Err(e) = apply_trades(&mut session, trades) {
            eprintln!("error: {e}");
            return (&e).into();
        }
        outcomes.push(session.advance_week(rng));
    }

    for report in outcomes.iter().filter_map(|o| o.quarterly_report.as_ref()) {
        print_quarterly_report(report);
    }

    print_summary(&session);

    if let Some(path) = output_path {
        let path_str = path.display().to_string();
        match report_port.write(&outcomes, &path_str) {
            Ok(()) => eprintln!("\nWeekly history written to: {}", path_str),
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        }
    }

    ExitCode::SUCCESS
}

/// Place every order dated for the session's upcoming week, in command-line
/// order. Stops at the first rejected order.
pub fn apply_trades(
    session: &mut GameSession,
    trades: &[TradeOrder],
) -> Result<(), SimvestorError> {
    let week = session.week();
    for order in trades.iter().filter(|t| t.week == week) {
        match order.side {
            TradeSide::Buy => {
                session.buy(&order.company, order.shares)?;
                eprintln!("Week {}: bought {} shares of {}", week, order.shares, order.company);
            }
            TradeSide::Sell => {
                session.sell(&order.company, order.shares)?;
                eprintln!("Week {}: sold {} shares of {}", week, order.shares, order.company);
            }
        }
    }
    Ok(())
}

fn print_summary(session: &GameSession) {
    let portfolio = session.portfolio();
    let registry = session.registry();
    let metrics = ReturnMetrics::compute(&portfolio.weekly_returns);

    eprintln!("\n=== Results ===");
    eprintln!("Final Value:      ${:.2}", session.total_value());
    eprintln!("Cash:             ${:.2}", portfolio.cash);
    eprintln!("Total Return:     {:.2}%", metrics.total_return * 100.0);
    eprintln!(
        "Annualized:       {:.2}%",
        metrics.annualized_return * 100.0
    );
    eprintln!("Max Drawdown:     -{:.1}%", metrics.max_drawdown * 100.0);
    eprintln!("Best Week:        {:.2}%", metrics.best_week * 100.0);
    eprintln!("Worst Week:       {:.2}%", metrics.worst_week * 100.0);
    eprintln!("Volatility:       {:.2}%", metrics.volatility * 100.0);
    eprintln!(
        "Market Sentiment: {:+.2}",
        session.engine().market_sentiment()
    );

    if !portfolio.holdings.is_empty() {
        eprintln!("\n=== Holdings ===");
        for holding in &portfolio.holdings {
            if let Some(company) = registry.get(&holding.company) {
                let ret = holding.unrealized_return_pct(company.price);
                let sign = if ret >= 0.0 { "+" } else { "" };
                eprintln!(
                    "  {}:  {} shares @ ${:.2} (avg ${:.2}, {}{:.1}%)",
                    holding.company,
                    holding.shares,
                    company.price,
                    holding.avg_buy_price,
                    sign,
                    ret,
                );
            }
        }
    }

    eprintln!("\n=== Recent Headlines ===");
    for headline in session.recent_news(RECENT_HEADLINES) {
        eprintln!("  {}", headline);
    }
}

fn print_quarterly_report(report: &QuarterlyReport) {
    eprintln!("\n=== Quarterly Report (week {}) ===", report.week);
    eprintln!(
        "Value:            ${:.2} -> ${:.2} ({:+.2}%)",
        report.start_value, report.end_value, report.percentage_gain
    );
    eprintln!("Unrealized P&L:   ${:.2}", report.total_unrealized);
    for r in &report.top_gainers {
        eprintln!("  gainer  {}: {:+.1}%", r.company, r.return_pct);
    }
    for r in &report.top_losers {
        eprintln!("  loser   {}: {:+.1}%", r.company, r.return_pct);
    }
    for (sector, value) in &report.sector_distribution {
        eprintln!("  {:<12} ${:.2}", sector.to_string(), value);
    }
    for badge in &report.badges {
        eprintln!("  * {}", badge);
    }
}

fn run_screen(sector: Option<Sector>, filters: &[MetricFilter], sort: SortOrder) -> ExitCode {
    let registry = match seed_registry() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let matches = screen(&registry, sector, filters, sort);
    if matches.is_empty() {
        eprintln!("No companies match");
        return ExitCode::SUCCESS;
    }

    println!(
        "{:<14} {:<11} {:>9} {:>8} {:>7} {:>16}",
        "name", "sector", "price", "pe", "roe", "market_cap"
    );
    for c in &matches {
        println!(
            "{:<14} {:<11} {:>9.2} {:>8.1} {:>7.2} {:>16.0}",
            c.name,
            c.sector.to_string(),
            c.price,
            c.pe_ratio,
            c.roe,
            c.market_cap
        );
    }
    eprintln!("{} companies found", matches.len());
    ExitCode::SUCCESS
}

fn run_company(name: &str) -> ExitCode {
    let registry = match seed_registry() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    match find_company(&registry, name) {
        Some(company) => {
            print_company(company);
            ExitCode::SUCCESS
        }
        None => {
            let err = SimvestorError::UnknownCompany {
                name: name.to_string(),
            };
            eprintln!("error: {err}");
            (&err).into()
        }
    }
}

/// Exact match first, then a case-insensitive one.
pub fn find_company<'a>(registry: &'a CompanyRegistry, name: &str) -> Option<&'a Company> {
    registry.get(name).or_else(|| {
        registry
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
    })
}

fn print_company(c: &Company) {
    println!("{} ({})", c.name, c.sector);
    if !c.profile.description.is_empty() {
        println!("  {}", c.profile.description);
        println!(
            "  Founded {} | {} | {} employees",
            c.profile.founded, c.profile.headquarters, c.profile.employees
        );
    }
    println!();
    println!("Price:            ${:.2}", c.price);
    println!("Market Cap:       ${:.0}", c.market_cap);
    println!("P/E Ratio:        {:.1}", c.pe_ratio);
    println!("ROE:              {:.1}%", c.roe * 100.0);
    println!("ROCE:             {:.1}%", c.roce * 100.0);
    println!("Revenue:          ${:.0}", c.revenue);
    println!("Profit:           ${:.0}", c.profit);
    println!("Free Cash Flow:   ${:.0}", c.fcf);
    println!("Assets:           ${:.0}", c.assets);
    println!("Debt:             ${:.0}", c.debt);
    println!("Debt/Equity:      {:.2}", c.debt_to_equity);

    if !c.history.is_empty() {
        println!();
        println!(
            "{:<6} {:>16} {:>16} {:>14} {:>6} {:>6} {:>6}",
            "year", "revenue", "profit", "fcf", "pe", "roi", "roce"
        );
        for y in &c.history {
            println!(
                "{:<6} {:>16.0} {:>16.0} {:>14.0} {:>6.1} {:>6.2} {:>6.2}",
                y.year, y.revenue, y.profit, y.fcf, y.pe, y.roi, y.roce
            );
        }
    }
}

fn run_news(catalog_path: Option<&PathBuf>, export: Option<&PathBuf>) -> ExitCode {
    let port = JsonCatalogAdapter::new();
    let catalog = match load_catalog(catalog_path.map(PathBuf::as_path), &port) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    if let Some(path) = export {
        let path_str = path.display().to_string();
        if let Err(e) = port.save(&catalog, &path_str) {
            eprintln!("error: {e}");
            return (&e).into();
        }
        eprintln!("Catalog written to: {}", path_str);
        return ExitCode::SUCCESS;
    }

    for (i, item) in catalog.items().iter().enumerate() {
        let sector = item
            .sector
            .map(|s| s.to_string())
            .unwrap_or_else(|| "Market".to_string());
        println!(
            "{:>3}. [{}] {} (sentiment {:+.2})",
            i + 1,
            sector,
            item.headline,
            item.sentiment
        );
    }
    eprintln!("{} news items", catalog.len());
    ExitCode::SUCCESS
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    eprintln!("Validating config: {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let session = build_session_config(&adapter);
    eprintln!("\nEngine:");
    eprintln!("  base_volatility:   {}", session.engine.base_volatility);
    eprintln!("  price_floor:       {}", session.engine.price_floor);
    eprintln!("\nGame:");
    eprintln!("  initial_cash:      {:.2}", session.initial_cash);
    eprintln!("  weeks:             {}", resolve_weeks(None, &adapter));
    eprintln!("  weeks_per_quarter: {}", session.weeks_per_quarter);
    match resolve_seed(None, &adapter) {
        Some(seed) => eprintln!("  seed:              {}", seed),
        None => eprintln!("  seed:              (entropy)"),
    }

    if let Some(path) = adapter.get_string("news", "catalog_path") {
        match JsonCatalogAdapter::new().load(&path) {
            Ok(catalog) => eprintln!("\nCatalog: {} ({} items)", path, catalog.len()),
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        }
    }

    eprintln!("\nConfiguration is valid.");
    ExitCode::SUCCESS
}
