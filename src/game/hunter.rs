//! The hunter: the player's gold, item kit and treasure collection.
//!
//! Towns and shops only ever see a hunter through the [`Hunter`] trait; the
//! bundled [`HunterRecord`] is the record the session driver plays with.

/// Treasure kinds a town can hold. `dust` is flavor only and is never collected.
pub const TREASURES: [&str; 4] = ["a crown", "a trophy", "a gem", "dust"];

/// The worthless treasure kind.
pub const DUST: &str = "dust";

/// Treasures that count toward winning the game.
pub const COLLECTIBLE_TREASURES: [&str; 3] = ["a crown", "a trophy", "a gem"];

/// Operations a town or shop may perform on the hunter in it.
pub trait Hunter {
    fn name(&self) -> &str;
    fn has_item(&self, item: &str) -> bool;
    /// Add an item to the kit. Returns false if it was already there.
    fn add_item(&mut self, item: &str) -> bool;
    /// Remove an item from the kit. Returns false if it wasn't there.
    fn remove_item(&mut self, item: &str) -> bool;
    /// Apply a signed gold delta. Gold may go negative.
    fn change_gold(&mut self, delta: i32);
    fn gold(&self) -> i32;
    fn has_treasure(&self, kind: &str) -> bool;
    fn collect_treasure(&mut self, kind: &str);
    /// Samurai privilege: armed hunters with a sword win every brawl.
    fn is_armed_mode(&self) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HunterRecord {
    pub name: String,
    pub gold: i32,
    /// Item names, lowercased, no duplicates, in acquisition order
    pub kit: Vec<String>,
    pub treasures: Vec<String>,
    pub armed_mode: bool,
}

fn normalize(item: &str) -> String {
    item.trim().to_lowercase()
}

impl HunterRecord {
    pub fn new(name: impl Into<String>, gold: i32) -> Self {
        Self {
            name: name.into(),
            gold,
            kit: Vec::new(),
            treasures: Vec::new(),
            armed_mode: false,
        }
    }

    pub fn armed(mut self) -> Self {
        self.armed_mode = true;
        self
    }

    pub fn with_items(mut self, items: &[&str]) -> Self {
        for item in items {
            self.add_item(item);
        }
        self
    }

    pub fn kit_is_empty(&self) -> bool {
        self.kit.is_empty()
    }

    /// True once every collectible treasure has been gathered.
    pub fn has_all_treasures(&self) -> bool {
        COLLECTIBLE_TREASURES.iter().all(|t| self.has_treasure(t))
    }

    /// One-line inventory summary, e.g. `Ada: Gold 12 | Kit: rope, shovel | Treasures: a gem`.
    pub fn summary(&self) -> String {
        let kit = if self.kit.is_empty() {
            "none".to_string()
        } else {
            self.kit.join(", ")
        };
        let treasures = if self.treasures.is_empty() {
            "none".to_string()
        } else {
            self.treasures.join(", ")
        };
        format!(
            "{}: Gold {} | Kit: {} | Treasures: {}",
            self.name, self.gold, kit, treasures
        )
    }
}

impl Hunter for HunterRecord {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_item(&self, item: &str) -> bool {
        let wanted = normalize(item);
        self.kit.iter().any(|i| *i == wanted)
    }

    fn add_item(&mut self, item: &str) -> bool {
        if self.has_item(item) {
            return false;
        }
        self.kit.push(normalize(item));
        true
    }

    fn remove_item(&mut self, item: &str) -> bool {
        let wanted = normalize(item);
        match self.kit.iter().position(|i| *i == wanted) {
            Some(idx) => {
                self.kit.remove(idx);
                true
            }
            None => false,
        }
    }

    fn change_gold(&mut self, delta: i32) {
        self.gold = self.gold.saturating_add(delta);
    }

    fn gold(&self) -> i32 {
        self.gold
    }

    fn has_treasure(&self, kind: &str) -> bool {
        self.treasures.iter().any(|t| t == kind)
    }

    fn collect_treasure(&mut self, kind: &str) {
        if kind == DUST || self.has_treasure(kind) {
            return;
        }
        self.treasures.push(kind.to_string());
    }

    fn is_armed_mode(&self) -> bool {
        self.armed_mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kit_is_case_insensitive_and_deduplicated() {
        let mut h = HunterRecord::new("Ada", 10);
        assert!(h.add_item("Rope"));
        assert!(!h.add_item("rope"));
        assert!(h.has_item("ROPE"));
        assert_eq!(h.kit, vec!["rope".to_string()]);
        assert!(h.remove_item("rope"));
        assert!(!h.remove_item("rope"));
        assert!(h.kit_is_empty());
    }

    #[test]
    fn gold_can_go_negative() {
        let mut h = HunterRecord::new("Ada", 3);
        h.change_gold(-5);
        assert_eq!(h.gold(), -2);
    }

    #[test]
    fn dust_is_never_collected() {
        let mut h = HunterRecord::new("Ada", 0);
        h.collect_treasure(DUST);
        h.collect_treasure("a gem");
        h.collect_treasure("a gem");
        assert_eq!(h.treasures, vec!["a gem".to_string()]);
        assert!(!h.has_all_treasures());
        h.collect_treasure("a crown");
        h.collect_treasure("a trophy");
        assert!(h.has_all_treasures());
    }

    #[test]
    fn summary_lists_everything() {
        let h = HunterRecord::new("Ada", 7).with_items(&["shovel", "rope"]);
        assert_eq!(
            h.summary(),
            "Ada: Gold 7 | Kit: shovel, rope | Treasures: none"
        );
    }
}
