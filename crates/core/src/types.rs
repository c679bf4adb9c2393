use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// A provider-assigned region identifier such as `nyc3` or `us-east-1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Region(String);

impl Region {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Region {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for Region {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl PartialEq<str> for Region {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Region {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Collects region ids in first-seen order, dropping repeats.
pub fn dedup_regions<I>(ids: I) -> Vec<Region>
where
    I: IntoIterator,
    I::Item: Into<Region>,
{
    let mut regions: Vec<Region> = Vec::new();
    for id in ids {
        let region = id.into();
        if !regions.contains(&region) {
            regions.push(region);
        }
    }
    regions
}
