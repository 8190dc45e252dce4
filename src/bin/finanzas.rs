//! CLI binary for browsing statistics over an exported movement history.

use std::io::{self, Write as _};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, Table};
use finanzas_rs::config::Settings;
use finanzas_rs::dashboard::Dashboard;
use finanzas_rs::engine::{
    CategoryBreakdown, MovementFilter, PriorPeriodComparison, ProjectionEstimate, amount_in,
};
use finanzas_rs::error::FinanzasError;
use finanzas_rs::models::{AccountName, Currency, DateRange, Movement, MovementKind, NaiveDate};
use finanzas_rs::report;
use finanzas_rs::source::{JsonFileSource, MovementSource};
use owo_colors::OwoColorize;

/// Finanzas CLI: statistics, comparisons and projections over your
/// movements.
#[derive(Debug, Parser)]
#[command(name = "finanzas", version, about)]
struct Cli {
    /// Movements JSON file (default: FINANZAS_DATA_FILE or XDG data dir).
    #[arg(long, global = true, value_name = "FILE")]
    data_file: Option<PathBuf>,
    /// Reporting window and display filters.
    #[command(flatten)]
    scope: ScopeArgs,
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Command,
}

/// Options shared by every subcommand.
#[derive(Debug, Args)]
struct ScopeArgs {
    /// Start date (inclusive, YYYY-MM-DD). Requires --to.
    #[arg(long, global = true, requires = "to", value_parser = parse_date)]
    from: Option<NaiveDate>,
    /// End date (inclusive, YYYY-MM-DD). Requires --from.
    #[arg(long, global = true, requires = "from", value_parser = parse_date)]
    to: Option<NaiveDate>,
    /// Reporting currency (ARS or USD); overrides FINANZAS_CURRENCY.
    #[arg(long, global = true, value_parser = parse_currency)]
    currency: Option<Currency>,
    /// Only movements on this account (case-insensitive, repeatable).
    #[arg(long, global = true)]
    account: Vec<String>,
    /// Only movements in this category (repeatable).
    #[arg(long, global = true)]
    category: Vec<String>,
    /// Only movements of this kind (repeatable).
    #[arg(long, global = true, value_parser = parse_kind)]
    kind: Vec<MovementKind>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
enum Command {
    /// List the movements inside the window.
    Movements,
    /// Break income or expenses down by category.
    Categories {
        /// Which side to break down.
        #[arg(long = "of", default_value = "expense", value_parser = parse_kind)]
        of: MovementKind,
        /// Categories shown before the rest are folded into "Otros".
        #[arg(long)]
        top: Option<usize>,
    },
    /// Compare the window with the equal-length window before it.
    Compare,
    /// Project the available margin of the window after this one.
    Project,
    /// Write a markdown report of everything above.
    Report {
        /// Categories shown before the rest are folded into "Otros".
        #[arg(long)]
        top: Option<usize>,
        /// Write to this file instead of stdout.
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// List the accounts seen in the history.
    Accounts,
}

/// Parses a date string in `YYYY-MM-DD` format for clap.
fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|err| format!("{err}"))
}

/// Parses a currency code for clap.
fn parse_currency(s: &str) -> Result<Currency, String> {
    s.parse().map_err(|err| format!("{err}"))
}

/// Parses a movement kind for clap.
fn parse_kind(s: &str) -> Result<MovementKind, String> {
    s.parse().map_err(|err| format!("{err}"))
}

/// Prints an error line to stderr.
fn report_error(message: &str) -> io::Result<()> {
    writeln!(io::stderr().lock(), "{} {message}", "error:".red().bold())
}

/// Returns the window from the arguments, or the current calendar month.
fn resolve_range(scope: &ScopeArgs) -> DateRange {
    match scope.from.zip(scope.to) {
        Some((from, to)) => DateRange::new(from, to),
        None => DateRange::month_of(Utc::now().date_naive()),
    }
}

/// Runs the CLI, returning an appropriate exit code.
fn run() -> io::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let _dotenv = dotenvy::dotenv();

    let cli = Cli::parse();

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(err) => {
            report_error(&err.to_string())?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let path = match cli.data_file.clone().map_or_else(|| settings.data_file_or_default(), Ok) {
        Ok(path) => path,
        Err(err) => {
            report_error(&format!("failed to locate movements file: {err}"))?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let dashboard = match Dashboard::builder()
        .source(JsonFileSource::new(path))
        .currency(cli.scope.currency.unwrap_or(settings.currency))
        .build()
    {
        Ok(dashboard) => dashboard,
        Err(err) => {
            report_error(&format!("failed to build dashboard: {err}"))?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let Some(filter) = build_filter(&dashboard, &cli.scope)? else {
        return Ok(ExitCode::FAILURE);
    };
    let range = resolve_range(&cli.scope);

    dispatch(&dashboard.with_filter(filter), &range, &settings, cli.command)
}

/// Resolves an account name against the known accounts (case-insensitive),
/// printing an error if it is unknown.
fn resolve_account(accounts: &[AccountName], name: &str) -> io::Result<Option<AccountName>> {
    let lower = name.to_lowercase();
    let found = accounts
        .iter()
        .find(|acc| acc.as_inner().to_lowercase() == lower)
        .cloned();
    if found.is_none() {
        report_error(&format!("account not found: {name}"))?;
    }
    Ok(found)
}

/// Builds a [`MovementFilter`] from CLI arguments.
///
/// The account list is loaded at most once, and only when `--account` was
/// given. Returns `Ok(None)` after printing an error if an account is
/// unknown or cannot be looked up.
fn build_filter<S: MovementSource>(
    dashboard: &Dashboard<S>,
    scope: &ScopeArgs,
) -> io::Result<Option<MovementFilter>> {
    let mut filter = MovementFilter::new();
    if !scope.account.is_empty() {
        let accounts = match dashboard.accounts() {
            Ok(accounts) => accounts,
            Err(err) => {
                report_error(&format!("failed to look up accounts: {err}"))?;
                return Ok(None);
            }
        };
        for name in &scope.account {
            let Some(account) = resolve_account(&accounts, name)? else {
                return Ok(None);
            };
            filter = filter.account(account);
        }
    }
    for label in &scope.category {
        filter = filter.category(label);
    }
    for &kind in &scope.kind {
        filter = filter.kind(kind);
    }
    Ok(Some(filter))
}

/// Dispatches to the appropriate subcommand handler.
fn dispatch<S: MovementSource>(
    dashboard: &Dashboard<S>,
    range: &DateRange,
    settings: &Settings,
    command: Command,
) -> io::Result<ExitCode> {
    match command {
        Command::Movements => cmd_movements(dashboard, range),
        Command::Categories { of, top } => {
            cmd_categories(dashboard, range, of, top.unwrap_or(settings.top_categories))
        }
        Command::Compare => cmd_compare(dashboard, range),
        Command::Project => cmd_project(dashboard, range),
        Command::Report { top, output } => cmd_report(
            dashboard,
            range,
            top.unwrap_or(settings.top_categories),
            output.as_deref(),
        ),
        Command::Accounts => cmd_accounts(dashboard),
    }
}

/// Prints the failure of a dashboard call and maps it to an exit code.
fn fail(action: &str, err: &FinanzasError) -> io::Result<ExitCode> {
    report_error(&format!("failed to {action}: {err}"))?;
    Ok(ExitCode::FAILURE)
}

/// Executes the `movements` subcommand.
fn cmd_movements<S: MovementSource>(
    dashboard: &Dashboard<S>,
    range: &DateRange,
) -> io::Result<ExitCode> {
    match dashboard.movements(range) {
        Ok(movements) => {
            print_movements_table(&movements, dashboard.currency())?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => fail("read movements", &err),
    }
}

/// Executes the `categories` subcommand.
fn cmd_categories<S: MovementSource>(
    dashboard: &Dashboard<S>,
    range: &DateRange,
    kind: MovementKind,
    top: usize,
) -> io::Result<ExitCode> {
    match dashboard.categories(range, kind) {
        Ok(breakdown) => {
            print_breakdown(&breakdown, range, top)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => fail("aggregate categories", &err),
    }
}

/// Executes the `compare` subcommand.
fn cmd_compare<S: MovementSource>(
    dashboard: &Dashboard<S>,
    range: &DateRange,
) -> io::Result<ExitCode> {
    match dashboard.compare(range) {
        Ok(comparison) => {
            print_comparison(&comparison)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => fail("compare periods", &err),
    }
}

/// Executes the `project` subcommand.
fn cmd_project<S: MovementSource>(
    dashboard: &Dashboard<S>,
    range: &DateRange,
) -> io::Result<ExitCode> {
    match dashboard.project(range) {
        Ok(projection) => {
            print_projection(&projection, range)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => fail("project next period", &err),
    }
}

/// Executes the `report` subcommand.
fn cmd_report<S: MovementSource>(
    dashboard: &Dashboard<S>,
    range: &DateRange,
    top: usize,
    output: Option<&Path>,
) -> io::Result<ExitCode> {
    let stats = match dashboard.statistics(range) {
        Ok(stats) => stats,
        Err(err) => return fail("compute statistics", &err),
    };
    let markdown = report::markdown_report(&stats, top);
    match output {
        Some(path) => {
            std::fs::write(path, markdown)?;
            writeln!(
                io::stdout().lock(),
                "{} {}",
                "Report written to".green().bold(),
                path.display()
            )?;
        }
        None => write!(io::stdout().lock(), "{markdown}")?,
    }
    Ok(ExitCode::SUCCESS)
}

/// Executes the `accounts` subcommand.
fn cmd_accounts<S: MovementSource>(dashboard: &Dashboard<S>) -> io::Result<ExitCode> {
    match dashboard.accounts() {
        Ok(accounts) => {
            let mut out = io::stdout().lock();
            if accounts.is_empty() {
                writeln!(out, "{}", "No accounts found.".dimmed())?;
            }
            for account in accounts {
                writeln!(out, "{account}")?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => fail("read accounts", &err),
    }
}

// ── Output formatting ────────────────────────────────────────────────

/// Applies the terminal preset to a report table.
fn boxed(mut table: Table) -> Table {
    _ = table.load_preset(UTF8_FULL);
    table
}

/// Prints movements in a table.
fn print_movements_table(movements: &[Movement], currency: Currency) -> io::Result<()> {
    let mut out = io::stdout().lock();
    if movements.is_empty() {
        writeln!(out, "{}", "No movements found.".dimmed())?;
        return Ok(());
    }

    let mut table = Table::new();
    _ = table.load_preset(UTF8_FULL);
    _ = table.set_header(vec![
        Cell::new("Date").fg(Color::Cyan),
        Cell::new("Kind").fg(Color::Cyan),
        Cell::new("Category").fg(Color::Cyan),
        Cell::new("Account").fg(Color::Cyan),
        Cell::new(currency.code()).fg(Color::Cyan),
        Cell::new("Installment").fg(Color::Cyan),
    ]);

    for mv in movements {
        let amount = report::format_amount(amount_in(mv, currency));
        let amount_cell = match mv.kind {
            MovementKind::Income => Cell::new(amount).fg(Color::Green),
            MovementKind::Expense => Cell::new(amount).fg(Color::Red),
            MovementKind::Transfer => Cell::new(amount).fg(Color::DarkGrey),
        };
        let account = match (mv.account.as_ref(), mv.destination_account.as_ref()) {
            (Some(source), Some(dest)) => format!("{source} \u{2192} {dest}"),
            (Some(name), None) | (None, Some(name)) => name.to_string(),
            (None, None) => "\u{2014}".to_owned(),
        };
        _ = table.add_row(vec![
            Cell::new(mv.date),
            Cell::new(mv.kind),
            Cell::new(mv.category.as_deref().unwrap_or("\u{2014}")),
            Cell::new(account),
            amount_cell,
            Cell::new(
                mv.installment_id
                    .as_ref()
                    .map_or_else(String::new, ToString::to_string),
            ),
        ]);
    }

    writeln!(
        out,
        "{} {}",
        "Movements".green().bold(),
        format!("({})", movements.len()).dimmed()
    )?;
    writeln!(out)?;
    writeln!(out, "{table}")?;
    Ok(())
}

/// Prints a category breakdown.
fn print_breakdown(breakdown: &CategoryBreakdown, range: &DateRange, top: usize) -> io::Result<()> {
    let mut out = io::stdout().lock();
    if breakdown.is_empty() {
        writeln!(out, "{}", format!("No {} movements in {range}.", breakdown.kind).dimmed())?;
        return Ok(());
    }
    writeln!(
        out,
        "{} {}",
        format!("{} by category", breakdown.kind).green().bold(),
        format!(
            "({range}, total {} {})",
            report::format_amount(breakdown.total()),
            breakdown.currency
        )
        .dimmed()
    )?;
    writeln!(out)?;
    writeln!(out, "{}", boxed(report::categories_table(breakdown, top)))?;
    Ok(())
}

/// Prints a period comparison.
fn print_comparison(comparison: &PriorPeriodComparison) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(
        out,
        "{} {}",
        "Period comparison".green().bold(),
        format!("({} vs {})", comparison.current_range, comparison.prior_range).dimmed()
    )?;
    writeln!(out)?;
    writeln!(out, "{}", boxed(report::comparison_table(comparison)))?;
    Ok(())
}

/// Prints a projection.
fn print_projection(projection: &ProjectionEstimate, range: &DateRange) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(
        out,
        "{} {}",
        "Next period projection".green().bold(),
        format!("({})", range.following()).dimmed()
    )?;
    writeln!(out)?;
    writeln!(out, "{}", boxed(report::projection_table(projection)))?;
    if projection.available_margin < 0.0_f64 {
        writeln!(out, "{}", "Projected spending exceeds recurring income.".red())?;
    }
    writeln!(
        out,
        "{} {}",
        "Income basis:".bold(),
        projection.income_basis.describe()
    )?;
    Ok(())
}

/// Entry point.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            // Last-resort error output; if stderr itself failed there is
            // nothing left to report to.
            let _ignored = writeln!(io::stderr(), "fatal I/O error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use core::sync::atomic::{AtomicUsize, Ordering};

    use finanzas_rs::models::MovementId;
    use finanzas_rs::source::InMemorySource;

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn february() -> DateRange {
        DateRange::new(day(2, 1), day(2, 29))
    }

    fn sample() -> Vec<Movement> {
        vec![
            Movement::new(MovementId::from("1"), MovementKind::Income, day(1, 5))
                .with_category("Sueldo")
                .with_primary(1000.0)
                .with_account("Banco"),
            Movement::new(MovementId::from("2"), MovementKind::Income, day(2, 5))
                .with_category("Sueldo")
                .with_primary(1100.0)
                .with_account("Banco"),
            Movement::new(MovementId::from("3"), MovementKind::Expense, day(2, 8))
                .with_category("🍔 Comida")
                .with_primary(400.0)
                .with_account("Visa")
                .with_installment("heladera-6x"),
        ]
    }

    fn mock_dashboard() -> Dashboard<InMemorySource> {
        Dashboard::builder()
            .source(InMemorySource::with_movements(sample()))
            .build()
            .unwrap()
    }

    fn empty_dashboard() -> Dashboard<InMemorySource> {
        Dashboard::builder()
            .source(InMemorySource::new())
            .build()
            .unwrap()
    }

    /// Source that counts how often the history is loaded.
    #[derive(Debug, Default)]
    struct CountingSource {
        /// Number of `movements()` calls so far.
        loads: AtomicUsize,
    }

    impl MovementSource for CountingSource {
        fn movements(&self) -> finanzas_rs::error::Result<Vec<Movement>> {
            let _previous = self.loads.fetch_add(1, Ordering::SeqCst);
            Ok(sample())
        }
    }

    fn scope() -> ScopeArgs {
        ScopeArgs {
            from: None,
            to: None,
            currency: None,
            account: Vec::new(),
            category: Vec::new(),
            kind: Vec::new(),
        }
    }

    // ── parser tests ─────────────────────────────────────────────────

    #[test]
    fn parse_date_valid() {
        assert_eq!(parse_date("2024-01-15").unwrap(), day(1, 15));
    }

    #[test]
    fn parse_date_invalid() {
        assert!(parse_date("not-a-date").is_err());
        assert!(parse_date("01-15-2024").is_err());
    }

    #[test]
    fn parse_currency_and_kind() {
        assert_eq!(parse_currency("usd").unwrap(), Currency::Usd);
        assert!(parse_currency("eur").is_err());
        assert_eq!(parse_kind("income").unwrap(), MovementKind::Income);
        assert!(parse_kind("loan").is_err());
    }

    #[test]
    fn cli_parses_scope_and_subcommand() {
        let cli = Cli::try_parse_from([
            "finanzas",
            "categories",
            "--of",
            "income",
            "--top",
            "3",
            "--from",
            "2024-02-01",
            "--to",
            "2024-02-29",
            "--currency",
            "USD",
            "--kind",
            "income",
        ])
        .unwrap();
        assert_eq!(cli.scope.currency, Some(Currency::Usd));
        assert_eq!(resolve_range(&cli.scope), february());
        assert!(matches!(
            cli.command,
            Command::Categories {
                of: MovementKind::Income,
                top: Some(3)
            }
        ));
    }

    #[test]
    fn cli_requires_both_bounds() {
        assert!(Cli::try_parse_from(["finanzas", "compare", "--from", "2024-02-01"]).is_err());
    }

    // ── scope tests ──────────────────────────────────────────────────

    #[test]
    fn default_range_is_current_month() {
        let range = resolve_range(&scope());
        assert!(range.contains(Utc::now().date_naive()));
        assert_eq!(range, DateRange::month_of(Utc::now().date_naive()));
    }

    #[test]
    fn build_filter_no_args() {
        let filter = build_filter(&mock_dashboard(), &scope()).unwrap().unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn build_filter_resolves_account_case_insensitively() {
        let mut args = scope();
        args.account = vec!["visa".to_owned()];
        let filter = build_filter(&mock_dashboard(), &args).unwrap().unwrap();
        assert!(filter.accounts.contains(&AccountName::from("Visa")));
    }

    #[test]
    fn build_filter_account_not_found_returns_none() {
        let mut args = scope();
        args.account = vec!["Nonexistent".to_owned()];
        assert!(build_filter(&mock_dashboard(), &args).unwrap().is_none());
    }

    #[test]
    fn build_filter_with_category_and_kind() {
        let mut args = scope();
        args.category = vec!["Comida".to_owned()];
        args.kind = vec![MovementKind::Expense];
        let filter = build_filter(&mock_dashboard(), &args).unwrap().unwrap();
        assert!(filter.categories.contains(&"Comida".to_owned()));
        assert!(filter.kinds.contains(&MovementKind::Expense));
    }

    #[test]
    fn build_filter_loads_accounts_once() {
        let source = CountingSource::default();
        let dash = Dashboard::builder().source(source).build().unwrap();
        let mut args = scope();
        args.account = vec!["visa".to_owned(), "BANCO".to_owned()];
        let filter = build_filter(&dash, &args).unwrap().unwrap();
        assert_eq!(filter.accounts.len(), 2);
        assert_eq!(dash.source().loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn build_filter_without_accounts_skips_loading() {
        let dash = Dashboard::builder()
            .source(CountingSource::default())
            .build()
            .unwrap();
        let mut args = scope();
        args.kind = vec![MovementKind::Income];
        assert!(build_filter(&dash, &args).unwrap().is_some());
        assert_eq!(dash.source().loads.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn resolve_account_matches_case_insensitively() {
        let accounts = vec![AccountName::from("Banco"), AccountName::from("Visa")];
        assert_eq!(
            resolve_account(&accounts, "vIsA").unwrap(),
            Some(AccountName::from("Visa"))
        );
        assert!(resolve_account(&accounts, "Nope").unwrap().is_none());
    }

    // ── print function tests ─────────────────────────────────────────

    #[test]
    fn print_movements_table_empty() {
        assert!(print_movements_table(&[], Currency::Ars).is_ok());
    }

    #[test]
    fn print_movements_table_with_data() {
        let mut movements = sample();
        movements.push(
            Movement::new(MovementId::from("4"), MovementKind::Transfer, day(2, 9))
                .with_primary(50.0)
                .with_account("Banco"),
        );
        assert!(print_movements_table(&movements, Currency::Usd).is_ok());
    }

    // ── cmd_* tests ──────────────────────────────────────────────────

    #[test]
    fn cmd_movements_with_data() {
        let code = cmd_movements(&mock_dashboard(), &february()).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn cmd_categories_empty_and_with_data() {
        let code = cmd_categories(&empty_dashboard(), &february(), MovementKind::Expense, 5).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        let code = cmd_categories(&mock_dashboard(), &february(), MovementKind::Expense, 1).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn cmd_compare_and_project() {
        let dash = mock_dashboard();
        assert_eq!(cmd_compare(&dash, &february()).unwrap(), ExitCode::SUCCESS);
        assert_eq!(cmd_project(&dash, &february()).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn cmd_report_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.md");
        let code = cmd_report(&mock_dashboard(), &february(), 5, Some(&path)).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        let written = std::fs::read_to_string(path).unwrap();
        assert!(written.contains("# Report 2024-02-01 .. 2024-02-29 (ARS)"));
        assert!(written.contains("Sueldo"));
    }

    #[test]
    fn cmd_accounts_lists_names() {
        assert_eq!(cmd_accounts(&mock_dashboard()).unwrap(), ExitCode::SUCCESS);
        assert_eq!(cmd_accounts(&empty_dashboard()).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn cmd_movements_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let dash = Dashboard::builder()
            .source(JsonFileSource::new(dir.path().join("none.json")))
            .build()
            .unwrap();
        assert_eq!(cmd_movements(&dash, &february()).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn cmd_movements_malformed_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "nope").unwrap();
        let dash = Dashboard::builder()
            .source(JsonFileSource::new(path))
            .build()
            .unwrap();
        assert_eq!(cmd_movements(&dash, &february()).unwrap(), ExitCode::FAILURE);
    }

    // ── dispatch tests ───────────────────────────────────────────────

    #[test]
    fn dispatch_every_subcommand() {
        let dash = mock_dashboard();
        let settings = Settings::default();
        for command in [
            Command::Movements,
            Command::Categories {
                of: MovementKind::Income,
                top: None,
            },
            Command::Compare,
            Command::Project,
            Command::Report {
                top: Some(2),
                output: None,
            },
            Command::Accounts,
        ] {
            let code = dispatch(&dash, &february(), &settings, command).unwrap();
            assert_eq!(code, ExitCode::SUCCESS);
        }
    }
}
