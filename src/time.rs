use crate::errors::{self, Error};
use chrono::offset::Utc;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Offset, TimeZone};
use chrono_tz::Tz;
use regex::Regex;

pub const FORMAT_DATE: &str = "%Y-%m-%d";
pub const FORMAT_DATETIME: &str = "%Y-%m-%d %H:%M";

/// Largest UTC offset, in seconds, that any timezone can carry
pub const MAX_OFFSET_SECONDS: i32 = 14 * 60 * 60;

const GMT_REGEX: &str = r"^GMT\s*(?P<sign>[+-])\s*(?P<hours>\d{1,2})(:(?P<minutes>\d{2}))?$";

/// Supplies the current time, so tests can pin it
pub trait TimeProvider {
    fn now(&self, tz: Tz) -> DateTime<Tz>;

    fn today(&self, tz: Tz) -> NaiveDate {
        self.now(tz).date_naive()
    }
}

pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn now(&self, tz: Tz) -> DateTime<Tz> {
        Utc::now().with_timezone(&tz)
    }
}

pub fn timezone_from_str(timezone_string: &str) -> Result<Tz, Error> {
    match timezone_string.parse::<Tz>() {
        Ok(tz) => Ok(tz),
        Err(_) => parse_gmt_to_timezone(timezone_string),
    }
}

/// For when we get offsets like GMT -7:00
fn parse_gmt_to_timezone(gmt: &str) -> Result<Tz, Error> {
    let captures = Regex::new(GMT_REGEX)
        .expect("GMT regex is valid")
        .captures(gmt.trim())
        .ok_or_else(|| errors::new("time", &format!("Unknown timezone: {gmt}")))?;

    let minutes = captures.name("minutes").map_or("00", |m| m.as_str());
    if minutes != "00" {
        return Err(errors::new(
            "time",
            &format!("No Etc zone for a fractional offset: {gmt}"),
        ));
    }

    let hours = captures["hours"].parse::<u8>()?;
    if hours == 0 {
        return Ok(Tz::UTC);
    }

    // Etc zones use POSIX signs, so GMT-7 is Etc/GMT+7
    let sign = if &captures["sign"] == "-" { "+" } else { "-" };
    let tz_string = format!("Etc/GMT{sign}{hours}");
    tz_string
        .parse::<Tz>()
        .map_err(|e| errors::new("time", &format!("Could not parse {gmt}: {e}")))
}

/// Parse a date in format YYYY-MM-DD
pub fn date_from_str(str: &str) -> Result<NaiveDate, Error> {
    Ok(NaiveDate::parse_from_str(str.trim(), FORMAT_DATE)?)
}

fn noon_utc(date: NaiveDate) -> Result<NaiveDateTime, Error> {
    date.and_hms_opt(12, 0, 0)
        .ok_or_else(|| errors::new("time", &format!("No noon on {date}")))
}

/// Seconds east of UTC for a timezone, sampled at noon UTC on the date
pub fn offset_at(tz: Tz, date: NaiveDate) -> Result<i32, Error> {
    let noon = noon_utc(date)?;
    Ok(tz.offset_from_utc_datetime(&noon).fix().local_minus_utc())
}

/// Zone abbreviation such as EET or EST, sampled at noon UTC on the date
pub fn abbreviation_at(tz: Tz, date: NaiveDate) -> Result<String, Error> {
    let noon = noon_utc(date)?;
    Ok(tz.from_utc_datetime(&noon).format("%Z").to_string())
}

/// Render seconds from UTC as UTC+02:00
pub fn offset_to_string(seconds: i32) -> String {
    if seconds == 0 {
        return String::from("UTC");
    }

    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.unsigned_abs() / 60;
    format!("UTC{sign}{:02}:{:02}", minutes / 60, minutes % 60)
}

pub fn is_valid_offset(seconds: i32) -> bool {
    (-MAX_OFFSET_SECONDS..=MAX_OFFSET_SECONDS).contains(&seconds)
}

pub fn datetime_to_string(datetime: &DateTime<Tz>) -> String {
    format!("{} {}", datetime.format(FORMAT_DATETIME), datetime.format("%Z"))
}
