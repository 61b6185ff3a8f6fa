use crate::cli::commands::clock_for;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::access::resolve_user;
use crate::core::calculator::WeeklyHoursCalculator;
use crate::core::report::WeeklyReport;
use crate::db::pool::DbPool;
use crate::db::queries::SqliteEvents;
use crate::errors::AppResult;
use crate::utils::hours2readable;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Hours {
        match_by,
        pairing,
        json,
    } = &cli.command
    {
        let pool = DbPool::new(&cfg.database)?;
        let user = resolve_user(&pool.conn, cli.user.as_deref())?;
        let now = clock_for(cli)?.now();

        let source = SqliteEvents::new(&pool.conn);
        let calc = WeeklyHoursCalculator::new(&source).with_policy(
            match_by.unwrap_or(cfg.week_match),
            pairing.unwrap_or(cfg.pairing),
        );
        let report = WeeklyReport::build(&calc, &user, now, cfg.hours_decimals)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!(
                "Week {}-W{:02} ({}, {}): {}",
                report.iso_year,
                report.iso_week,
                report.match_by.as_str(),
                report.pairing.as_str(),
                hours2readable(report.hours, cfg.hours_decimals)
            );
        }
    }

    Ok(())
}
