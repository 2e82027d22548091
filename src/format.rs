use chrono::DateTime;
use chrono_tz::Tz;
use pad::PadStr;

use crate::check::{Finding, Report, Severity};
use crate::user::User;
use crate::{color, id, time};

const HEADERS: [&str; 5] = ["ID", "NAME", "ROOM", "TIMEZONE", "OFFSET"];
const EMPTY: &str = "-";

fn columns(id: &str, user: &User) -> [String; 5] {
    [
        id.to_string(),
        user.name.clone(),
        user.room.clone().unwrap_or_else(|| EMPTY.to_string()),
        user.timezone.tz.clone(),
        user.timezone.offset_hours(),
    ]
}

/// Users as an aligned table, one row each
pub fn table(users: &[(&str, &User)]) -> String {
    if users.is_empty() {
        return color::warning_string("No users");
    }

    let rows: Vec<[String; 5]> = users.iter().map(|(id, user)| columns(id, user)).collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header = render_row(&HEADERS.map(String::from), &widths);
    let mut lines = vec![color::label_string(&header)];
    for row in &rows {
        lines.push(render_row(row, &widths));
    }
    lines.join("\n")
}

fn render_row(cells: &[String; 5], widths: &[usize; 5]) -> String {
    cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| cell.pad_to_width(*width))
        .collect::<Vec<String>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Every field of one user
pub fn user(id: &str, user: &User) -> String {
    let timezone = &user.timezone;
    let mut lines = vec![
        format!("{} ({} id)", color::id_string(id), id::kind(id)),
        format!("  name:     {}", user.name),
    ];
    if let Some(root) = &user.root {
        lines.push(format!("  root:     {}", color::label_string(root)));
    }
    if let Some(room) = &user.room {
        lines.push(format!("  room:     {}", color::label_string(room)));
    }
    lines.push(format!("  tz:       {}", timezone.tz));
    lines.push(format!("  tz_label: {}", timezone.tz_label));
    lines.push(format!(
        "  offset:   {} ({})",
        timezone.tz_offset,
        timezone.offset_hours()
    ));
    lines.join("\n")
}

pub fn local_time(id: &str, user: &User, now: &DateTime<Tz>) -> String {
    format!(
        "{} {} {}",
        color::id_string(id),
        user.name,
        time::datetime_to_string(now)
    )
}

fn finding(finding: &Finding) -> String {
    let marker = match finding.problem.severity() {
        Severity::Error => color::error_string("✗"),
        Severity::Warning => color::warning_string("!"),
    };
    format!("{marker} {}: {}", color::id_string(&finding.id), finding.problem)
}

pub fn report(report: &Report) -> String {
    let mut lines: Vec<String> = report.findings.iter().map(finding).collect();

    let errors = report.errors().count();
    let warnings = report.warnings().count();
    let summary = format!(
        "Checked {} users at {}: {errors} errors, {warnings} warnings",
        report.checked,
        report.date.format(time::FORMAT_DATE)
    );
    if report.passed() {
        lines.push(format!("{} {summary}", color::ok_string("✓")));
    } else {
        lines.push(format!("{} {summary}", color::error_string("✗")));
    }
    lines.join("\n")
}
