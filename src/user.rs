use crate::errors::Error;
use crate::time::{self, TimeProvider};
use chrono::DateTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// A chat user as stored in a roster fixture
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct User {
    /// Display name
    pub name: String,
    /// Canonical alias, such as "#mocha"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    /// Location or channel code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    /// Stored under "slack" in fixtures, "timezone" is accepted too
    #[serde(rename = "slack", alias = "timezone")]
    pub timezone: Timezone,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Timezone {
    /// IANA name, such as "Europe/Amsterdam"
    pub tz: String,
    /// Human readable name, such as "Central European Time"
    pub tz_label: String,
    /// Seconds east of UTC
    pub tz_offset: i32,
}

impl Timezone {
    pub fn zone(&self) -> Result<Tz, Error> {
        time::timezone_from_str(&self.tz)
    }

    pub fn offset_hours(&self) -> String {
        time::offset_to_string(self.tz_offset)
    }

    /// Initials of the label, "Eastern European Time" becomes "EET"
    pub fn label_initials(&self) -> String {
        self.tz_label
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .filter(|c| c.is_alphabetic())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

impl User {
    /// True when the query is this user's name or root alias
    pub fn answers_to(&self, query: &str) -> bool {
        self.name == query || self.root.as_deref() == Some(query)
    }

    pub fn local_time(&self, provider: &impl TimeProvider) -> Result<DateTime<Tz>, Error> {
        let tz = self.timezone.zone()?;
        Ok(provider.now(tz))
    }
}
