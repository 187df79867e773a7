//! The demonstration record collection the demo program and integration
//! tests run pipelines over.

use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub email: String,
}

impl Person {
    pub fn new(name: &str, age: u32, gender: Gender, email: &str) -> Self {
        Self {
            name: name.to_string(),
            age,
            gender,
            email: email.to_string(),
        }
    }

    /// One-line description, the usual sink payload for roster demos.
    pub fn summary(&self) -> String {
        format!("{}, {}, {}", self.name, self.age, self.gender)
    }
}

/// The fixed roster every demo and integration test runs against.
pub fn sample_roster() -> Vec<Person> {
    vec![
        Person::new("Fred", 25, Gender::Male, "fred@example.com"),
        Person::new("Jane", 30, Gender::Female, "jane@example.com"),
        Person::new("George", 32, Gender::Male, "george@example.com"),
        Person::new("Bob", 12, Gender::Male, "bob@example.com"),
        Person::new("Laura", 15, Gender::Female, "laura@example.com"),
        Person::new("Mallory", 20, Gender::Female, "mallory@example.com"),
    ]
}
