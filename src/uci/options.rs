//! UCI options.

use crate::tt::{DEFAULT_HASH_SIZE_MB, MAX_HASH_SIZE_MB, MIN_HASH_SIZE_MB};

/// Action the loop must take after an option changed.
pub enum UciOptionAction {
    ReinitHash(usize),
}

/// Engine configuration settable over UCI. `Hash` is the only option.
pub struct UciOptions {
    pub hash_mb: usize,
}

impl UciOptions {
    #[must_use]
    pub fn new() -> Self {
        UciOptions {
            hash_mb: DEFAULT_HASH_SIZE_MB,
        }
    }

    /// Print the identification block and option declarations.
    pub fn print(&self) {
        println!("id name {}", env!("CARGO_PKG_NAME"));
        println!("id author the castellan authors");
        println!(
            "option name Hash type spin default {} min {} max {}",
            self.hash_mb, MIN_HASH_SIZE_MB, MAX_HASH_SIZE_MB
        );
        println!("uciok");
    }

    /// Apply a `setoption` command. Unknown options are ignored.
    pub fn apply_setoption(&mut self, parts: &[String]) -> Option<UciOptionAction> {
        let (name, value) = parse_setoption(parts)?;
        if name == "Hash" {
            let mb: usize = value?.parse().ok()?;
            let mb = mb.clamp(MIN_HASH_SIZE_MB, MAX_HASH_SIZE_MB);
            self.hash_mb = mb;
            return Some(UciOptionAction::ReinitHash(mb));
        }
        None
    }
}

impl Default for UciOptions {
    fn default() -> Self {
        UciOptions::new()
    }
}

/// Split `setoption name <name> [value <value>]` into its halves. Multi-word
/// names and values are joined with single spaces.
fn parse_setoption(parts: &[String]) -> Option<(String, Option<String>)> {
    let name_index = parts.iter().position(|p| p == "name")?;
    let value_index = parts.iter().position(|p| p == "value");
    let name = match value_index {
        Some(v) if v > name_index + 1 => parts[name_index + 1..v].join(" "),
        None if name_index + 1 < parts.len() => parts[name_index + 1..].join(" "),
        _ => return None,
    };
    let value = value_index.and_then(|v| {
        if v + 1 < parts.len() {
            Some(parts[v + 1..].join(" "))
        } else {
            None
        }
    });
    Some((name, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|p| (*p).to_string()).collect()
    }

    #[test]
    fn test_hash_option_applies_and_clamps() {
        let mut options = UciOptions::new();
        assert_eq!(options.hash_mb, DEFAULT_HASH_SIZE_MB);

        let action =
            options.apply_setoption(&owned(&["setoption", "name", "Hash", "value", "256"]));
        assert!(matches!(action, Some(UciOptionAction::ReinitHash(256))));
        assert_eq!(options.hash_mb, 256);

        let action =
            options.apply_setoption(&owned(&["setoption", "name", "Hash", "value", "9999"]));
        assert!(matches!(
            action,
            Some(UciOptionAction::ReinitHash(MAX_HASH_SIZE_MB))
        ));

        let action =
            options.apply_setoption(&owned(&["setoption", "name", "Hash", "value", "0"]));
        assert!(matches!(
            action,
            Some(UciOptionAction::ReinitHash(MIN_HASH_SIZE_MB))
        ));
    }

    #[test]
    fn test_unknown_and_malformed_options_ignored() {
        let mut options = UciOptions::new();
        assert!(options
            .apply_setoption(&owned(&["setoption", "name", "Ponder", "value", "true"]))
            .is_none());
        assert!(options.apply_setoption(&owned(&["setoption"])).is_none());
        assert!(options
            .apply_setoption(&owned(&["setoption", "name", "Hash", "value", "lots"]))
            .is_none());
        assert_eq!(options.hash_mb, DEFAULT_HASH_SIZE_MB);
    }

    #[test]
    fn test_parse_setoption_multiword() {
        let (name, value) =
            parse_setoption(&owned(&["setoption", "name", "Clear", "Hash"])).unwrap();
        assert_eq!(name, "Clear Hash");
        assert_eq!(value, None);
    }
}
