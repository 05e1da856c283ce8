//! Roster sanity-check CLI.
//!
//! # Responsibility
//! - Provide a minimal executable to exercise `sciman_core` against a real
//!   roster file, independently from the mobile/FFI runtime setup.
//! - Keep output deterministic for quick local sanity checks.

use chrono::NaiveDate;
use sciman_core::{RosterService, Scientist};
use std::process::ExitCode;

const USAGE: &str = "usage: sciman <roster.json> [list | search <query> | add <name> <faculty> <department> <degree> <rank> <yyyy-mm-dd>]";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let (path, command) = match args {
        [] => return Err(USAGE.to_string()),
        [path, rest @ ..] => (path, rest),
    };

    let mut service = RosterService::new();
    let count = service
        .open_file(path)
        .map_err(|err| err.to_string())?;

    match command {
        [] => print_records(&service.search("")),
        [cmd] if cmd == "list" => print_records(&service.search("")),
        [cmd, query] if cmd == "search" => {
            let hits = service.search(query);
            println!("{} of {count} record(s) match `{query}`", hits.len());
            print_records(&hits);
        }
        [cmd, name, faculty, department, degree, rank, day] if cmd == "add" => {
            let rank_date = NaiveDate::parse_from_str(day, "%Y-%m-%d")
                .map_err(|err| format!("invalid date `{day}`: {err}"))?;

            let mut session = service.begin_add();
            session.full_name = name.clone();
            session.faculty = faculty.clone();
            session.department = department.clone();
            session.degree = degree.clone();
            session.rank = rank.clone();
            session.rank_date = rank_date;

            let added = service
                .apply_form(session.confirm())
                .map_err(|err| err.to_string())?;
            if let Some(id) = added {
                println!("added {id}, roster now holds {} record(s)", service.records().len());
            }
        }
        _ => return Err(USAGE.to_string()),
    }

    Ok(())
}

fn print_records(records: &[&Scientist]) {
    for record in records {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            record.full_name,
            record.faculty,
            record.department,
            record.degree,
            record.rank,
            record.rank_date_display()
        );
    }
}
