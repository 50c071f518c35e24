use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// One entry of the `/activities` payload, keyed by `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    /// Negative when the server reports more participants than seats.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}

// Value side of the JSON object; the name lives in the key.
#[derive(Debug, Deserialize)]
struct ActivityFields {
    #[serde(default)]
    description: String,
    #[serde(default)]
    schedule: String,
    max_participants: u32,
    #[serde(default)]
    participants: Vec<String>,
}

impl ActivityFields {
    fn into_activity(self, name: String) -> Activity {
        Activity {
            name,
            description: self.description,
            schedule: self.schedule,
            max_participants: self.max_participants,
            participants: self.participants,
        }
    }
}

/// Activities in the order the server listed them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActivityCollection(Vec<Activity>);

impl ActivityCollection {
    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.0.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.0.iter().find(|a| a.name == name)
    }

    pub fn names(&self) -> Vec<String> {
        self.0.iter().map(|a| a.name.clone()).collect()
    }

    fn upsert(&mut self, activity: Activity) {
        match self.0.iter_mut().find(|a| a.name == activity.name) {
            Some(existing) => *existing = activity,
            None => self.0.push(activity),
        }
    }
}

impl<'de> Deserialize<'de> for ActivityCollection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CollectionVisitor;

        impl<'de> Visitor<'de> for CollectionVisitor {
            type Value = ActivityCollection;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping activity names to activity details")
            }

            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut out = ActivityCollection(Vec::with_capacity(map.size_hint().unwrap_or(0)));
                while let Some((name, fields)) = map.next_entry::<String, ActivityFields>()? {
                    // Duplicate keys keep their first position, last value wins.
                    out.upsert(fields.into_activity(name));
                }
                Ok(out)
            }
        }

        deserializer.deserialize_map(CollectionVisitor)
    }
}
