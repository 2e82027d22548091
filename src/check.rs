//! Structural checks over a roster.
//!
//! Ids are unique by construction, since [`Users`] refuses duplicates at load.
//! Everything else is checked per user against a reference date, because a
//! recorded `tz_offset` is only true for part of the year in zones with
//! daylight saving.

use std::fmt::Display;

use chrono::NaiveDate;

use crate::errors::Error;
use crate::time;
use crate::user::User;
use crate::users::Users;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Problem {
    EmptyName,
    OffsetOutOfRange(i32),
    UnknownTimezone(String),
    OffsetMismatch {
        recorded: i32,
        actual: i32,
        date: NaiveDate,
    },
    LabelMismatch {
        label: String,
        abbreviation: String,
        date: NaiveDate,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl Problem {
    pub fn severity(&self) -> Severity {
        match self {
            // Plenty of zones only have numeric abbreviations like +03
            Problem::LabelMismatch { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Problem::EmptyName => write!(f, "name is empty"),
            Problem::OffsetOutOfRange(offset) => write!(
                f,
                "tz_offset {offset} is outside ±{}",
                time::MAX_OFFSET_SECONDS
            ),
            Problem::UnknownTimezone(tz) => write!(f, "unknown timezone {tz}"),
            Problem::OffsetMismatch {
                recorded,
                actual,
                date,
            } => write!(
                f,
                "tz_offset {recorded} does not match {actual} on {date}"
            ),
            Problem::LabelMismatch {
                label,
                abbreviation,
                date,
            } => write!(f, "tz_label {label} does not match {abbreviation} on {date}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Finding {
    pub id: String,
    pub problem: Problem,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub date: NaiveDate,
    pub checked: usize,
    pub findings: Vec<Finding>,
}

impl Report {
    /// Warnings alone do not fail a report
    pub fn passed(&self) -> bool {
        self.errors().next().is_none()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.by_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.by_severity(Severity::Warning)
    }

    fn by_severity(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(move |finding| finding.problem.severity() == severity)
    }
}

pub fn check(users: &Users, date: NaiveDate) -> Result<Report, Error> {
    let mut findings = Vec::new();
    for (id, user) in users.iter() {
        for problem in check_user(user, date)? {
            findings.push(Finding {
                id: id.to_string(),
                problem,
            });
        }
    }

    Ok(Report {
        date,
        checked: users.len(),
        findings,
    })
}

pub fn check_user(user: &User, date: NaiveDate) -> Result<Vec<Problem>, Error> {
    let mut problems = Vec::new();
    let timezone = &user.timezone;

    if user.name.is_empty() {
        problems.push(Problem::EmptyName);
    }

    if !time::is_valid_offset(timezone.tz_offset) {
        problems.push(Problem::OffsetOutOfRange(timezone.tz_offset));
    }

    // Only IANA names count here, the GMT fallback is for user input
    let tz = match timezone.tz.parse::<chrono_tz::Tz>() {
        Ok(tz) => tz,
        Err(_) => {
            problems.push(Problem::UnknownTimezone(timezone.tz.clone()));
            return Ok(problems);
        }
    };

    let actual = time::offset_at(tz, date)?;
    if actual != timezone.tz_offset {
        problems.push(Problem::OffsetMismatch {
            recorded: timezone.tz_offset,
            actual,
            date,
        });
    }

    let abbreviation = time::abbreviation_at(tz, date)?;
    if timezone.label_initials() != abbreviation {
        problems.push(Problem::LabelMismatch {
            label: timezone.tz_label.clone(),
            abbreviation,
            date,
        });
    }

    Ok(problems)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::fixtures;
    use matches::assert_matches;
    use pretty_assertions::assert_eq;

    fn date(str: &str) -> NaiveDate {
        time::date_from_str(str).unwrap()
    }

    #[test]
    fn shipped_roster_passes_in_winter() {
        let report = check(&Users::bundled().unwrap(), date(fixtures::WINTER)).unwrap();
        assert_eq!(report.checked, 4);
        assert!(report.findings.is_empty());
        assert!(report.passed());
    }

    #[test]
    fn shipped_roster_drifts_in_summer() {
        let report = check(&fixtures::users(), date(fixtures::SUMMER)).unwrap();
        let mismatched: Vec<&str> = report
            .errors()
            .filter(|f| matches!(f.problem, Problem::OffsetMismatch { .. }))
            .map(|f| f.id.as_str())
            .collect();

        assert_eq!(mismatched, vec!["1", "U123", "U456", "U789"]);
        assert_eq!(report.warnings().count(), 4);
        assert!(!report.passed());
    }

    #[test]
    fn empty_name() {
        let mut user = fixtures::user_2();
        user.name = String::new();
        assert_eq!(
            check_user(&user, date(fixtures::WINTER)),
            Ok(vec![Problem::EmptyName])
        );
    }

    #[test]
    fn blank_name_is_still_a_name() {
        let mut user = fixtures::user_2();
        user.name = String::from(" ");
        assert_eq!(check_user(&user, date(fixtures::WINTER)), Ok(vec![]));
    }

    #[test]
    fn empty_roster_passes() {
        let users = Users::from_json("{}").unwrap();
        let report = check(&users, date(fixtures::WINTER)).unwrap();
        assert_eq!(report.checked, 0);
        assert!(report.findings.is_empty());
        assert!(report.passed());
    }

    #[test]
    fn offset_out_of_range() {
        let mut user = fixtures::user_2();
        user.timezone.tz_offset = 50401;
        let problems = check_user(&user, date(fixtures::WINTER)).unwrap();
        assert_eq!(problems[0], Problem::OffsetOutOfRange(50401));
        assert_matches!(problems[1], Problem::OffsetMismatch { actual: 3600, .. });
    }

    #[test]
    fn offset_at_the_bounds() {
        let mut user = fixtures::user_2();
        user.timezone.tz = String::from("Pacific/Kiritimati");
        user.timezone.tz_label = String::from("Line Islands Time");
        user.timezone.tz_offset = 50400;
        let problems = check_user(&user, date(fixtures::WINTER)).unwrap();
        assert!(!problems
            .iter()
            .any(|p| matches!(p, Problem::OffsetOutOfRange(_) | Problem::OffsetMismatch { .. })));
    }

    #[test]
    fn unknown_timezone_stops_further_checks() {
        let mut user = fixtures::user_2();
        user.timezone.tz = String::from("Europe/Atlantis");
        assert_eq!(
            check_user(&user, date(fixtures::WINTER)),
            Ok(vec![Problem::UnknownTimezone("Europe/Atlantis".into())])
        );
    }

    #[test]
    fn label_mismatch_is_only_a_warning() {
        let mut user = fixtures::user_1();
        user.timezone.tz_label = String::from("Eastern Time");
        let users = fixtures::single("U123", user);
        let report = check(&users, date(fixtures::WINTER)).unwrap();

        assert_eq!(
            report.findings,
            vec![Finding {
                id: "U123".into(),
                problem: Problem::LabelMismatch {
                    label: "Eastern Time".into(),
                    abbreviation: "EST".into(),
                    date: date(fixtures::WINTER),
                },
            }]
        );
        assert!(report.passed());
    }

    #[test]
    fn problems_display() {
        assert_eq!(Problem::EmptyName.to_string(), "name is empty");
        assert_eq!(
            Problem::OffsetOutOfRange(60000).to_string(),
            "tz_offset 60000 is outside ±50400"
        );
        assert_eq!(
            Problem::OffsetMismatch {
                recorded: 7200,
                actual: 10800,
                date: date(fixtures::SUMMER)
            }
            .to_string(),
            "tz_offset 7200 does not match 10800 on 2025-07-15"
        );
    }
}
