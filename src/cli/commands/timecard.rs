use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::rows::EmployeeTotals;
use crate::core::logic::Core;
use crate::data::{InputBundle, parse_period};
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::{HoursType, OutputRow};
use crate::ui::messages::{header, warning};
use crate::utils::colors::{RESET, color_for_overtime};
use crate::utils::format_hours;
use crate::utils::path::expand_tilde;
use crate::utils::table::{Column, Table};
use chrono::NaiveDateTime;

pub fn handle(cmd: &Commands, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    if let Commands::Timecard {
        input,
        period,
        format,
        out,
        force,
    } = cmd
    {
        let mut bundle = InputBundle::load(&expand_tilde(input))?;
        if let Some(p) = period {
            bundle.restrict_to(&parse_period(p)?);
        }

        let policy = bundle.policy_or(cfg.default_threshold_hours);
        let (rows, totals) = Core::build_timecard(&bundle.inputs(&policy, now));

        match (format, out) {
            (Some(format), Some(out)) => {
                ExportLogic::export(&rows, *format, &expand_tilde(out), *force)?
            }
            _ if rows.is_empty() => warning("No time entries for the selected period."),
            _ => print_timecard(&rows, &totals),
        }
    }
    Ok(())
}

fn print_timecard(rows: &[OutputRow], totals: &[EmployeeTotals]) {
    header("Timecard");

    let mut table = Table::new(vec![
        Column::new("Employee", 22),
        Column::new("Date", 10),
        Column::new("Project", 18),
        Column::new("Code", 8),
        Column::new("Type", 8),
        Column::new("Hours", 6),
        Column::new("Inj", 3),
    ]);
    for r in rows {
        table.add_row(vec![
            format!("{}, {}", r.last_name, r.first_name),
            r.date.to_string(),
            r.project_name.clone(),
            r.cost_code.clone(),
            r.hours_type.as_str().to_string(),
            format_hours(r.hours),
            if r.injured { "yes" } else { "" }.to_string(),
        ]);
    }
    print!("{}", table.render());

    println!();
    for t in totals {
        let ot_color = color_for_overtime(t.overtime_hours);
        println!(
            "{}, {}: {} {} | {}{} {}{} | total {}",
            t.last_name,
            t.first_name,
            HoursType::Regular.as_str(),
            format_hours(t.regular_hours),
            ot_color,
            HoursType::Overtime.as_str(),
            format_hours(t.overtime_hours),
            RESET,
            format_hours(t.total_hours()),
        );
    }
}
