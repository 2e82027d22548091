use crate::errors::{self, Error};
use crate::id;
use crate::user::User;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

/// The roster fixture shipped with the crate
const BUNDLED: &str = include_str!("../tests/fixtures/users.json");

/// All users of a roster, keyed by user id
#[derive(Clone, Serialize, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Users {
    users: BTreeMap<String, User>,
}

impl Users {
    pub fn from_json(json: &str) -> Result<Users, Error> {
        let users: Users = serde_json::from_str(json)?;
        Ok(users)
    }

    pub fn load(path: &str) -> Result<Users, Error> {
        if !Path::new(path).exists() {
            return Err(errors::new("users", &format!("Fixture not found: {path}")));
        }
        let json = fs::read_to_string(path)?;
        Users::from_json(&json)
    }

    pub fn bundled() -> Result<Users, Error> {
        Users::from_json(BUNDLED)
    }

    pub fn get(&self, id: &str) -> Result<(&str, &User), Error> {
        self.users
            .get_key_value(id)
            .map(|(id, user)| (id.as_str(), user))
            .ok_or_else(|| errors::new("users", &format!("No user with id {id}")))
    }

    /// Look up by id first, then by name or root alias
    pub fn find(&self, query: &str) -> Result<(&str, &User), Error> {
        if let Ok(found) = self.get(query) {
            return Ok(found);
        }

        self.iter()
            .find(|(_, user)| user.answers_to(query))
            .ok_or_else(|| {
                errors::new(
                    "users",
                    &format!("No user with id, name or alias matching {query}"),
                )
            })
    }

    pub fn in_room(&self, room: &str) -> Vec<(&str, &User)> {
        self.iter()
            .filter(|(_, user)| user.room.as_deref() == Some(room))
            .collect()
    }

    pub fn in_timezone(&self, tz: &str) -> Vec<(&str, &User)> {
        self.iter()
            .filter(|(_, user)| user.timezone.tz == tz)
            .collect()
    }

    /// Users in id order, see [`id::compare`]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &User)> {
        let mut users: Vec<(&str, &User)> = self
            .users
            .iter()
            .map(|(id, user)| (id.as_str(), user))
            .collect();
        users.sort_by(|(a, _), (b, _)| id::compare(a, b));
        users.into_iter()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.iter().map(|(id, _)| id).collect()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl FromIterator<(String, User)> for Users {
    fn from_iter<I: IntoIterator<Item = (String, User)>>(iter: I) -> Self {
        Users {
            users: iter.into_iter().collect(),
        }
    }
}

// serde_json keeps the last of two equal keys, a roster must not
impl<'de> Deserialize<'de> for Users {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct UsersVisitor;

        impl<'de> Visitor<'de> for UsersVisitor {
            type Value = Users;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of user ids to users")
            }

            fn visit_map<M>(self, mut map: M) -> Result<Users, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut users = BTreeMap::new();
                while let Some((id, user)) = map.next_entry::<String, User>()? {
                    if users.contains_key(&id) {
                        return Err(de::Error::custom(format!("duplicate user id `{id}`")));
                    }
                    users.insert(id, user);
                }
                Ok(Users { users })
            }
        }

        deserializer.deserialize_map(UsersVisitor)
    }
}
