//! Fixtures are for creating structs in test

use crate::config::Config;
use crate::user::{Timezone, User};
use crate::users::Users;

/// The roster file the crate ships with
pub const USERS_PATH: &str = "tests/fixtures/users.json";

/// Reference date the shipped roster was recorded at, northern winter
pub const WINTER: &str = "2025-01-15";

pub const SUMMER: &str = "2025-07-15";

pub fn mocha() -> User {
    User {
        name: "mocha".into(),
        root: Some("#mocha".into()),
        room: Some("C123".into()),
        timezone: Timezone {
            tz: "Europe/Athens".into(),
            tz_label: "Eastern European Time".into(),
            tz_offset: 7200,
        },
    }
}

pub fn user_1() -> User {
    User {
        name: "user-1".into(),
        root: None,
        room: None,
        timezone: Timezone {
            tz: "America/New_York".into(),
            tz_label: "Eastern Standard Time".into(),
            tz_offset: -18000,
        },
    }
}

pub fn user_2() -> User {
    amsterdam("user-2")
}

pub fn user_3() -> User {
    amsterdam("user-3")
}

fn amsterdam(name: &str) -> User {
    User {
        name: name.into(),
        root: None,
        room: None,
        timezone: Timezone {
            tz: "Europe/Amsterdam".into(),
            tz_label: "Central European Time".into(),
            tz_offset: 3600,
        },
    }
}

pub fn users() -> Users {
    vec![
        ("1".to_string(), mocha()),
        ("U123".to_string(), user_1()),
        ("U456".to_string(), user_2()),
        ("U789".to_string(), user_3()),
    ]
    .into_iter()
    .collect()
}

/// A roster with one user, for tests that break a single field
pub fn single(id: &str, user: User) -> Users {
    vec![(id.to_string(), user)].into_iter().collect()
}

pub fn config() -> Config {
    Config {
        path: crate::config::generate_path().unwrap(),
        fixture: None,
        reference_date: None,
        verbose: None,
        args: Default::default(),
    }
}
