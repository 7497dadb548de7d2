//! Flipping one nested preference while keeping its siblings.
//!
//! Run with `cargo run -p deep_merge --example notification_settings`.

use std::io::{self, Write};

use deep_merge::DeepPartial;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, DeepPartial)]
#[serde(rename_all = "camelCase")]
struct Notifications {
    email: bool,
    push: bool,
    quiet_hours: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, DeepPartial)]
struct Settings {
    theme: String,
    #[deep_partial(nested)]
    notifications: Notifications,
}

/// Overrides as they might arrive from a client: JSON with only the changed
/// leaf present.
const UPDATE: &str = r#"{"notifications": {"push": true, "quietHours": "22:00-07:00"}}"#;

fn apply(settings: &Settings, update: &str) -> anyhow::Result<Settings> {
    let partial: SettingsPartial = serde_json::from_str(update)?;
    Ok(deep_merge::merge_partial(settings, &partial)?)
}

fn main() -> anyhow::Result<()> {
    let settings = Settings {
        theme: "dark".to_owned(),
        notifications: Notifications {
            email: true,
            push: false,
            quiet_hours: None,
        },
    };
    let updated = apply(&settings, UPDATE)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", serde_json::to_string_pretty(&updated)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use anyhow::{Result, ensure};

    use super::{Notifications, Settings, UPDATE, apply};

    #[test]
    fn nested_update_keeps_sibling_preferences() -> Result<()> {
        let settings = Settings {
            theme: "dark".to_owned(),
            notifications: Notifications {
                email: true,
                push: false,
                quiet_hours: None,
            },
        };
        let updated = apply(&settings, UPDATE)?;
        ensure!(updated.theme == "dark", "theme was {}", updated.theme);
        ensure!(
            updated.notifications
                == Notifications {
                    email: true,
                    push: true,
                    quiet_hours: Some("22:00-07:00".to_owned()),
                },
            "unexpected notifications {:?}",
            updated.notifications
        );
        Ok(())
    }
}
