//! Form validation. Each function returns `None` when the input is acceptable and
//! `Some(message)` describing the problem otherwise.

use std::sync::LazyLock;

use regex::Regex;

const MAX_NAME_LENGTH: usize = 191;
const MIN_PASSWORD_LENGTH: usize = 8;

static USERNAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z0-9]([\w.-]+)[a-z0-9]$").expect("valid regex"));

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

static FQDN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([a-z0-9]([a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z]{2,63}$|^(\d{1,3}\.){3}\d{1,3}$")
        .expect("valid regex")
});

static CRON_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9*/,\-]+$").expect("valid regex"));

fn required(label: &str, value: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(format!("{} is required.", label))
    } else {
        None
    }
}

fn max_length(label: &str, value: &str, max: usize) -> Option<String> {
    if value.chars().count() > max {
        Some(format!("{} must not exceed {} characters.", label, max))
    } else {
        None
    }
}

pub fn validate_server_name(name: &str) -> Option<String> {
    required("Server name", name).or_else(|| max_length("Server name", name, MAX_NAME_LENGTH))
}

/// Backup names are optional; the panel generates one when left empty.
pub fn validate_backup_name(name: &str) -> Option<String> {
    max_length("Backup name", name, MAX_NAME_LENGTH)
}

pub fn validate_schedule_name(name: &str) -> Option<String> {
    required("Schedule name", name).or_else(|| max_length("Schedule name", name, MAX_NAME_LENGTH))
}

/// One of the five cron fields, e.g. `*/5` or `1-5`.
pub fn validate_cron_field(label: &str, value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return Some(format!("{} is required.", label));
    }
    if !CRON_FIELD.is_match(value) {
        return Some(format!("{} may only contain numbers and * / , -", label));
    }
    None
}

pub fn validate_email(email: &str) -> Option<String> {
    let email = email.trim();
    required("Email", email)
        .or_else(|| max_length("Email", email, MAX_NAME_LENGTH))
        .or_else(|| {
            if EMAIL.is_match(email) {
                None
            } else {
                Some("A valid email address must be provided.".to_string())
            }
        })
}

pub fn validate_username(username: &str) -> Option<String> {
    required("Username", username)
        .or_else(|| max_length("Username", username, MAX_NAME_LENGTH))
        .or_else(|| {
            if USERNAME.is_match(username) {
                None
            } else {
                Some(
                    "Username must start and end with alpha-numeric characters and contain only letters, numbers, dashes, underscores, and periods."
                        .to_string(),
                )
            }
        })
}

pub fn validate_password(password: &str) -> Option<String> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        Some(format!(
            "Password must be at least {} characters.",
            MIN_PASSWORD_LENGTH
        ))
    } else {
        None
    }
}

pub fn validate_password_confirmation(password: &str, confirmation: &str) -> Option<String> {
    if password != confirmation {
        Some("Password confirmation does not match the password you entered.".to_string())
    } else {
        None
    }
}

pub fn validate_fqdn(fqdn: &str) -> Option<String> {
    let fqdn = fqdn.trim();
    required("FQDN", fqdn).or_else(|| {
        if FQDN.is_match(fqdn) {
            None
        } else {
            Some("A valid domain name or IP address must be provided.".to_string())
        }
    })
}

/// Location short codes are 1-60 characters.
pub fn validate_location_short(short: &str) -> Option<String> {
    required("Short code", short).or_else(|| max_length("Short code", short, 60))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests required and length limits for names.
    ///
    /// Expected: blank and overlong names rejected, optional backup name accepted
    #[test]
    fn validates_names() {
        assert!(validate_server_name("Survival").is_none());
        assert_eq!(validate_server_name("   "), Some("Server name is required.".to_string()));
        assert!(validate_server_name(&"a".repeat(192)).is_some());
        assert!(validate_backup_name("").is_none());
        assert!(validate_schedule_name("").is_some());
    }

    /// Tests cron field characters.
    ///
    /// Expected: numbers, steps, ranges and lists accepted; letters rejected
    #[test]
    fn validates_cron_fields() {
        for value in ["*", "*/5", "1-5", "0,30", "15"] {
            assert!(validate_cron_field("Minute", value).is_none(), "{value}");
        }
        assert!(validate_cron_field("Minute", "").is_some());
        assert!(validate_cron_field("Day of week", "mon").is_some());
    }

    /// Tests account fields.
    ///
    /// Expected: well formed values accepted, malformed ones rejected
    #[test]
    fn validates_account_fields() {
        assert!(validate_email("admin@example.com").is_none());
        assert!(validate_email("admin@").is_some());
        assert!(validate_username("game.admin_1").is_none());
        assert!(validate_username("-admin").is_some());
        assert!(validate_username("ab").is_some());
        assert!(validate_password("short").is_some());
        assert!(validate_password("long enough").is_none());
        assert!(validate_password_confirmation("a", "b").is_some());
        assert!(validate_password_confirmation("same", "same").is_none());
    }

    /// Tests node addresses.
    ///
    /// Expected: domains and IPv4 accepted
    #[test]
    fn validates_fqdn() {
        assert!(validate_fqdn("node1.example.com").is_none());
        assert!(validate_fqdn("10.0.0.1").is_none());
        assert!(validate_fqdn("localhost").is_some());
        assert!(validate_fqdn("bad_host.example.com").is_some());
    }
}
