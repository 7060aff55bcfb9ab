//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `rolodex_core` linkage.
//! - Print a sample person document to eyeball the stored field names.

use rolodex_core::{Attribute, JobHistory, OrganizationId, Person, PersonId, UserId};

fn main() -> Result<(), serde_json::Error> {
    println!("rolodex_core ping={}", rolodex_core::ping());
    println!("rolodex_core version={}", rolodex_core::core_version());

    let mut person = Person::with_id(
        PersonId::from("person1"),
        UserId::from("user1"),
        "Ada",
        "Lovelace",
    );
    person.job_history.push(JobHistory::new(
        OrganizationId::from("org1"),
        "Engineer",
        "2020-01-01",
    ));
    person.attrs.push(Attribute::new("color", "blue"));

    println!("{}", serde_json::to_string_pretty(&person)?);
    Ok(())
}
