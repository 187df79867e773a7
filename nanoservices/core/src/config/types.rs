use serde::Deserialize;

use crate::capabilities::Selector;
use crate::roster::{Gender, Person};

/// A roster search described as data: who to select and what to emit.
#[derive(Debug, Deserialize)]
pub struct SearchConfig {
    pub search: String,
    pub description: Option<String>,
    pub criteria: Criteria,
    #[serde(default)]
    pub emit: Emit,
}

/// Selection criteria; absent bounds do not constrain.
#[derive(Debug, Deserialize)]
pub struct Criteria {
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
    pub gender: Option<Gender>,
}

impl Criteria {
    /// Build a roster selector from the configured bounds.
    pub fn selector(&self) -> impl Selector<Person> + 'static {
        let min_age = self.min_age;
        let max_age = self.max_age;
        let gender = self.gender;
        move |p: &Person| {
            min_age.map_or(true, |low| p.age >= low)
                && max_age.map_or(true, |high| p.age <= high)
                && gender.map_or(true, |g| p.gender == g)
        }
    }
}

/// Which value an accepted record contributes to the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Emit {
    #[default]
    Summary,
    Email,
}

impl Emit {
    /// The configured projection of an accepted record.
    pub fn project(self, person: Person) -> String {
        match self {
            Emit::Summary => person.summary(),
            Emit::Email => person.email,
        }
    }
}
