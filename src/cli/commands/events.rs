use crate::cli::commands::clock_for;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::access::resolve_user;
use crate::core::calculator::WeeklyHoursCalculator;
use crate::core::report::WeeklyReport;
use crate::db::pool::DbPool;
use crate::db::queries::{SqliteEvents, load_events_for_user};
use crate::errors::AppResult;
use crate::utils::colors::colorize_in_out;
use crate::utils::hours2readable;
use crate::utils::table::Table;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    let user = resolve_user(&pool.conn, cli.user.as_deref())?;
    let now = clock_for(cli)?.now();

    let events = load_events_for_user(&pool.conn, user.id)?;

    println!("EVENTS ({}):", user.display_name());
    if events.is_empty() {
        println!("  (none)");
    } else {
        let mut table = Table::new(&["ID", "TIMESTAMP", "KIND", "WEEK"]);
        for ev in &events {
            table.add_row(vec![
                ev.id.to_string(),
                ev.timestamp_str(),
                ev.kind.as_str().to_string(),
                format!("{}-W{:02}", ev.iso_year, ev.iso_week),
            ]);
        }
        for line in table.render().lines() {
            println!("  {}", line);
        }
    }

    let source = SqliteEvents::new(&pool.conn);
    let calc = WeeklyHoursCalculator::from_config(&source, cfg);
    let report = WeeklyReport::build(&calc, &user, now, cfg.hours_decimals)?;

    let last = events.last().map(|e| e.kind.is_in()).unwrap_or(false);
    println!(
        "\nTotal hours this week: {} ({})",
        hours2readable(report.hours, cfg.hours_decimals),
        colorize_in_out(if last { "clocked in" } else { "clocked out" }, last)
    );

    Ok(())
}
