//! Granting a role and filling in a missing field with a typed partial.
//!
//! Run with `cargo run -p deep_merge --example user_roles`.

use std::io::{self, Write};

use deep_merge::DeepPartial;
use serde::{Deserialize, Serialize};

/// A user record whose `roles` grow as permissions are granted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, DeepPartial)]
#[deep_partial(derive(Debug))]
struct User {
    name: String,
    age: Option<u32>,
    roles: Vec<String>,
}

/// Grant `role` and record `age` without restating the rest of the user.
fn promote(user: &User, age: u32, role: &str) -> deep_merge::MergeResult<User> {
    user.merge_with(&UserPartial {
        age: Some(age),
        roles: Some(vec![role.to_owned()]),
        ..UserPartial::default()
    })
}

fn main() -> anyhow::Result<()> {
    let alice = User {
        name: "Alice".to_owned(),
        age: None,
        roles: vec!["user".to_owned()],
    };
    let promoted = promote(&alice, 30, "admin")?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "before: {}", serde_json::to_string(&alice)?)?;
    writeln!(stdout, "after:  {}", serde_json::to_string(&promoted)?)?;
    Ok(())
}
