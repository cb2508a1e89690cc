//! Identifier generation for help targets.

use std::sync::atomic::{AtomicU64, Ordering};

/// Prefix of every generated help identifier.
pub const HELP_ID_PREFIX: &str = "help_";

/// Generates unique help identifiers of the form `help_0`, `help_1`, ...
///
/// Identifiers are assigned monotonically and never reused. Each generator
/// owns its own counter; hosts that mutate several registries concurrently
/// and need process-wide uniqueness share a single generator via `Arc`.
/// The increment is atomic, so a shared generator never hands out the same
/// identifier twice.
#[derive(Debug, Default)]
pub struct HelpIdGenerator {
    counter: AtomicU64,
}

impl HelpIdGenerator {
    /// Creates a new generator starting at `help_0`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
        }
    }

    /// Returns the next identifier in the sequence.
    pub fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{HELP_ID_PREFIX}{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sequential_ids() {
        let ids = HelpIdGenerator::new();
        assert_eq!(ids.next_id(), "help_0");
        assert_eq!(ids.next_id(), "help_1");
        assert_eq!(ids.next_id(), "help_2");
    }

    #[test]
    fn test_independent_generators() {
        let a = HelpIdGenerator::new();
        let b = HelpIdGenerator::new();
        assert_eq!(a.next_id(), "help_0");
        assert_eq!(b.next_id(), "help_0");
    }

    #[test]
    fn test_shared_generator_is_unique() {
        use std::sync::Arc;

        let ids = Arc::new(HelpIdGenerator::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let ids = Arc::clone(&ids);
                std::thread::spawn(move || (0..100).map(|_| ids.next_id()).collect::<Vec<_>>())
            })
            .collect();

        let mut all: Vec<String> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 400);
    }
}
