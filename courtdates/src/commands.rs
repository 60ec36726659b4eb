use anyhow::Context;
use cd_engine::{parse_initial, resolve_dates, DateRequest, DaySchedule, ReferenceData};
use cd_time::{BritishColumbia, Calendar, Date, HolidaySet};
use chrono::Datelike;
use courtdates::config::OutputFormat;
use courtdates::notes::NotesStore;
use serde::Serialize;
use tracing::debug;

use crate::cli::{NotesAction, ResolveArgs};

/// Today's date on the local clock.
pub fn local_today() -> anyhow::Result<Date> {
    let now = chrono::Local::now().date_naive();
    let year = u16::try_from(now.year()).context("local year out of range")?;
    Ok(Date::from_ymd(year, now.month() as u8, now.day() as u8)?)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn resolve(
    args: &ResolveArgs,
    data: &ReferenceData,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let today = match args.today {
        Some(d) => d,
        None => local_today()?,
    };
    let surname_initial = args.initial.as_deref().map(parse_initial).transpose()?;
    let request = DateRequest {
        city: args.city.clone(),
        case_type: args.case_type,
        surname_initial,
        weeks_out: args.weeks,
        issuing_squad: args.squad,
    };
    debug!(?request, %today, "resolve");
    let resolution = resolve_dates(&request, data, today)?;
    match format {
        OutputFormat::Json => print_json(&resolution),
        OutputFormat::Text => {
            println!("{}", resolution.summary());
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct SquadsReport {
    date: Date,
    cycle_position: i32,
    day: cd_engine::Squad,
    night: cd_engine::Squad,
}

pub fn squads(date: Option<Date>, data: &ReferenceData, format: OutputFormat) -> anyhow::Result<()> {
    let date = match date {
        Some(d) => d,
        None => local_today()?,
    };
    let rotation = data.rotation();
    let working = rotation.working_squads(date);
    let report = SquadsReport {
        date,
        cycle_position: rotation.cycle_position(date),
        day: working.day,
        night: working.night,
    };
    match format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Text => {
            println!(
                "{}: day squad {}, night squad {} (day {} of the 8-day cycle)",
                date.long_form(),
                report.day,
                report.night,
                report.cycle_position + 1
            );
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct HolidaysReport<'a> {
    name: &'a str,
    published: bool,
    dates: Vec<Date>,
}

pub fn holidays(year: Option<u16>, data: &ReferenceData, format: OutputFormat) -> anyhow::Result<()> {
    let year = match year {
        Some(y) => y,
        None => local_today()?.year(),
    };
    let published = data.holidays().covers_year(year);
    let generated;
    let (name, dates): (&str, Vec<Date>) = if published {
        (
            data.holidays().name(),
            data.holidays().iter().filter(|d| d.year() == year).collect(),
        )
    } else {
        debug!(year, "no published holidays, generating from BC rules");
        generated = HolidaySet::from_calendar(&BritishColumbia, year)?;
        (generated.name(), generated.iter().collect())
    };
    let report = HolidaysReport {
        name,
        published,
        dates,
    };
    match format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Text => {
            let source = if published { "published" } else { "generated" };
            println!("{} ({source})", report.name);
            for d in &report.dates {
                println!("  {d}  {}", d.long_form());
            }
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct CityReport<'a> {
    city: &'a str,
    case_type: cd_engine::CaseType,
    schedule: String,
    time: &'a str,
}

pub fn cities(data: &ReferenceData, format: OutputFormat) -> anyhow::Result<()> {
    let rows: Vec<CityReport<'_>> = data
        .policies()
        .iter()
        .map(|p| CityReport {
            city: &p.city,
            case_type: p.case_type,
            schedule: describe_schedule(&p.schedule),
            time: &p.time,
        })
        .collect();
    match format {
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Text => {
            for row in &rows {
                println!(
                    "{:<16} {:<6} {:<8} {}",
                    row.city,
                    row.case_type.to_string(),
                    row.time,
                    row.schedule
                );
            }
            Ok(())
        }
    }
}

fn describe_schedule(schedule: &DaySchedule) -> String {
    match schedule {
        DaySchedule::Calendar { table } => format!("published table {table}"),
        DaySchedule::Fixed { weekday } => format!("every {weekday}"),
        DaySchedule::Surname { rules } => rules
            .rules()
            .iter()
            .map(|r| format!("{} {}", r.letters, r.weekday))
            .collect::<Vec<_>>()
            .join(", "),
        DaySchedule::Flexible { days } => format!(
            "closest of {}",
            days.iter()
                .map(|d| d.to_string())
                .collect::<Vec<_>>()
                .join("/")
        ),
    }
}

pub fn notes(action: &NotesAction, store: &NotesStore) -> anyhow::Result<()> {
    match action {
        NotesAction::Show => {
            let text = store
                .load()
                .with_context(|| format!("failed to read notes {}", store.path().display()))?;
            if text.is_empty() {
                println!("(no notes saved)");
            } else {
                println!("{text}");
            }
        }
        NotesAction::Save { text } => {
            store
                .save(text)
                .with_context(|| format!("failed to save notes {}", store.path().display()))?;
            println!("Notes saved to {}", store.path().display());
        }
    }
    Ok(())
}
