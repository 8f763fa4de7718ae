//! In-memory wall of shame: who got shamed and how often.

use std::collections::HashMap;

use tracing::debug;

use crate::quotes;

#[derive(Debug, Clone, Copy)]
struct Entry {
    count: u32,
    /// Position of the player's first addition since the last clear.
    first_added: u64,
}

/// Offense counts per player, held for the lifetime of the handler instance.
///
/// Player names are case-sensitive and stored exactly as the platform
/// resolved them. Every stored player has a count of at least one.
#[derive(Debug, Default)]
pub struct LeaderboardStore {
    counts: HashMap<String, Entry>,
    next_order: u64,
}

impl LeaderboardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shame `player` once more and return the resulting count.
    pub fn add(&mut self, player: &str) -> u32 {
        let next_order = &mut self.next_order;
        let entry = self.counts.entry(player.to_string()).or_insert_with(|| {
            let entry = Entry {
                count: 0,
                first_added: *next_order,
            };
            *next_order += 1;
            entry
        });
        entry.count += 1;

        debug!(player, count = entry.count, "Player added to the wall");
        entry.count
    }

    /// The player with the highest count.
    ///
    /// Among players sharing the highest count, the one added first wins.
    pub fn worst(&self) -> Option<(String, u32)> {
        self.counts
            .iter()
            .max_by(|(_, a), (_, b)| {
                a.count
                    .cmp(&b.count)
                    .then_with(|| b.first_added.cmp(&a.first_added))
            })
            .map(|(player, entry)| (player.clone(), entry.count))
    }

    /// Wipe the wall. Calling it on an empty wall is a no-op.
    pub fn clear(&mut self) {
        debug!(players = self.counts.len(), "Wall cleaned");
        self.counts.clear();
        self.next_order = 0;
    }

    /// Second-chance message for `player`.
    ///
    /// Counts are left untouched: a removed player keeps their offenses.
    pub fn remove(&self, player: &str) -> String {
        quotes::second_chance(player)
    }

    pub fn count(&self, player: &str) -> Option<u32> {
        self.counts.get(player).map(|entry| entry.count)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_counts_every_call() {
        let mut store = LeaderboardStore::new();
        for expected in 1..=5 {
            assert_eq!(store.add("Waseem"), expected);
        }
        assert_eq!(store.count("Waseem"), Some(5));
    }

    #[test]
    fn test_add_leaves_other_players_alone() {
        let mut store = LeaderboardStore::new();
        store.add("A");
        store.add("A");
        store.add("B");
        assert_eq!(store.count("A"), Some(2));
        assert_eq!(store.count("B"), Some(1));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut store = LeaderboardStore::new();
        store.add("venelin");
        store.add("Venelin");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_worst_on_empty_store() {
        assert_eq!(LeaderboardStore::new().worst(), None);
    }

    #[test]
    fn test_worst_picks_highest_count() {
        let mut store = LeaderboardStore::new();
        store.add("B");
        for _ in 0..3 {
            store.add("A");
        }
        assert_eq!(store.worst(), Some(("A".to_string(), 3)));
    }

    #[test]
    fn test_worst_tie_goes_to_first_added() {
        let mut store = LeaderboardStore::new();
        for player in ["Carl", "Ana", "Bob"] {
            store.add(player);
            store.add(player);
        }
        assert_eq!(store.worst(), Some(("Carl".to_string(), 2)));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut store = LeaderboardStore::new();
        store.add("A");
        store.add("B");
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.worst(), None);

        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_tie_order_restarts_after_clear() {
        let mut store = LeaderboardStore::new();
        store.add("A");
        store.clear();
        store.add("B");
        store.add("A");
        assert_eq!(store.worst(), Some(("B".to_string(), 1)));
    }

    #[test]
    fn test_remove_keeps_count() {
        let mut store = LeaderboardStore::new();
        store.add("A");
        store.add("A");

        let message = store.remove("A");

        assert!(message.contains("A, try to stay out of the wall"));
        assert_eq!(store.count("A"), Some(2));
    }
}
