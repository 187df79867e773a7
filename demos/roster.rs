//! Roster walkthrough: the same search expressed at increasing levels of
//! generality, ending with a configuration-driven pipeline.
//!
//! Run with `cargo run --example roster`.

use siftflow::core::config::parse_search;
use siftflow::core::logging;
use siftflow::core::roster::{sample_roster, Gender, Person};
use siftflow::{
    for_each_matching, process_elements, stream, CapabilityError, ElementStream,
    PipelineBuilder, Selector, SiftResult,
};

/// The fixed search every variant below re-expresses: males between 18 and
/// 25, the selective-service window.
struct EligibleForService;

impl Selector<Person> for EligibleForService {
    fn test(&mut self, p: &Person) -> Result<bool, CapabilityError> {
        Ok(p.gender == Gender::Male && p.age >= 18 && p.age <= 25)
    }
}

/// The least general form: the criterion is hardcoded into the loop.
fn print_older_than(roster: &[Person], age: u32) {
    for p in roster {
        if p.age >= age {
            println!("  {}", p.summary());
        }
    }
}

fn main() -> SiftResult<()> {
    logging::init();
    let roster = sample_roster();

    tracing::info!(people = roster.len(), "roster loaded");

    println!("hardcoded age filter (>= 18):");
    print_older_than(&roster, 18);

    println!("\nnamed selector:");
    for_each_matching(roster.clone(), EligibleForService, |p: Person| {
        println!("  {}", p.summary())
    })?;

    println!("\ninline closure selector:");
    for_each_matching(
        roster.clone(),
        |p: &Person| p.gender == Gender::Male && p.age >= 18 && p.age <= 25,
        |p: Person| println!("  {}", p.summary()),
    )?;

    println!("\nwith a mapping stage (emails only):");
    process_elements(
        roster.clone(),
        |p: &Person| p.gender == Gender::Male && p.age >= 18 && p.age <= 25,
        |p: Person| p.email,
        |email: String| println!("  {email}"),
    )?;

    println!("\nas a lazy stage chain:");
    stream(roster.clone())
        .filtered(|p: &Person| p.gender == Gender::Male && p.age >= 18 && p.age <= 25)
        .mapped(|p: Person| p.email)
        .drain(|email: String| println!("  {email}"))?;

    println!("\nas a reusable built pipeline:");
    let mut eligible_emails = PipelineBuilder::new("eligible_emails")
        .selector(EligibleForService)
        .transform(|p: Person| p.email)
        .sink(|email: String| println!("  {email}"))
        .build()
        .expect("all three capabilities are supplied");
    eligible_emails.run(roster.clone())?;

    println!("\ndriven by configuration:");
    let config = parse_search(
        r#"
search: eligible_for_service
description: "Males between 18 and 25"
criteria:
  min_age: 18
  max_age: 25
  gender: male
emit: email
"#,
    )
    .expect("demo config is well-formed");
    tracing::info!(search = %config.search, "running configured search");
    let emit = config.emit;
    process_elements(
        roster,
        config.criteria.selector(),
        move |p: Person| emit.project(p),
        |line: String| println!("  {line}"),
    )?;

    // Behavior injection needs no pipeline at all: any two-operand operation
    // can be passed as data the same way.
    let apply = |a: i64, b: i64, op: &dyn Fn(i64, i64) -> i64| op(a, b);
    println!("\n40 + 2 = {}", apply(40, 2, &|a, b| a + b));
    println!("20 - 12 = {}", apply(20, 12, &|a, b| a - b));

    Ok(())
}
