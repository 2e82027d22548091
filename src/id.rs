use regex::Regex;
use std::cmp::Ordering;
use std::fmt::Display;

const NUMERIC_REGEX: &str = r"^\d+$";

/// The two shapes of user id found in rosters
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Kind {
    /// Short all-digit ids, like "1"
    Numeric(u64),
    /// Platform ids, like "U123"
    Opaque,
}

pub fn kind(id: &str) -> Kind {
    let numeric = Regex::new(NUMERIC_REGEX).expect("numeric id regex is valid");
    if !numeric.is_match(id) {
        return Kind::Opaque;
    }

    // Digit strings too long for u64 are still ids, just not numeric ones
    match id.parse::<u64>() {
        Ok(number) => Kind::Numeric(number),
        Err(_) => Kind::Opaque,
    }
}

/// Roster order: numeric ids by value, then opaque ids as strings
pub fn compare(a: &str, b: &str) -> Ordering {
    match (kind(a), kind(b)) {
        (Kind::Numeric(x), Kind::Numeric(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Kind::Numeric(_), Kind::Opaque) => Ordering::Less,
        (Kind::Opaque, Kind::Numeric(_)) => Ordering::Greater,
        (Kind::Opaque, Kind::Opaque) => a.cmp(b),
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Kind::Numeric(_) => "numeric",
            Kind::Opaque => "opaque",
        };
        write!(f, "{name}")
    }
}
