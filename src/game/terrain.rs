//! Terrain surrounding a town and the item needed to cross it.

use super::hunter::Hunter;
use super::rng::RandomSource;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerrainKind {
    Mountains,
    Ocean,
    Plains,
    Desert,
    Jungle,
    Marsh,
}

impl TerrainKind {
    pub const ALL: [TerrainKind; 6] = [
        TerrainKind::Mountains,
        TerrainKind::Ocean,
        TerrainKind::Plains,
        TerrainKind::Desert,
        TerrainKind::Jungle,
        TerrainKind::Marsh,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TerrainKind::Mountains => "Mountains",
            TerrainKind::Ocean => "Ocean",
            TerrainKind::Plains => "Plains",
            TerrainKind::Desert => "Desert",
            TerrainKind::Jungle => "Jungle",
            TerrainKind::Marsh => "Marsh",
        }
    }

    pub fn required_item(self) -> &'static str {
        match self {
            TerrainKind::Mountains => "rope",
            TerrainKind::Ocean => "boat",
            TerrainKind::Plains => "horse",
            TerrainKind::Desert => "water",
            TerrainKind::Jungle => "machete",
            TerrainKind::Marsh => "boot",
        }
    }
}

impl fmt::Display for TerrainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable terrain descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terrain {
    kind: TerrainKind,
}

impl Terrain {
    pub fn new(kind: TerrainKind) -> Self {
        Self { kind }
    }

    /// Roll one of the six kinds uniformly.
    pub fn roll<R: RandomSource>(rng: &mut R) -> Self {
        Self::new(*rng.pick(&TerrainKind::ALL))
    }

    pub fn kind(&self) -> TerrainKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn required_item(&self) -> &'static str {
        self.kind.required_item()
    }

    pub fn can_cross(&self, hunter: &dyn Hunter) -> bool {
        hunter.has_item(self.required_item())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::hunter::HunterRecord;
    use crate::game::rng::ScriptedRandom;

    #[test]
    fn every_kind_has_a_distinct_item() {
        let mut items: Vec<&str> = TerrainKind::ALL.iter().map(|k| k.required_item()).collect();
        items.sort_unstable();
        items.dedup();
        assert_eq!(items.len(), 6);
    }

    #[test]
    fn roll_maps_draw_to_kind() {
        let mut rng = ScriptedRandom::new().with_ints(&[0, 5]);
        assert_eq!(Terrain::roll(&mut rng).kind(), TerrainKind::Mountains);
        assert_eq!(Terrain::roll(&mut rng).kind(), TerrainKind::Marsh);
    }

    #[test]
    fn crossing_needs_the_item() {
        let t = Terrain::new(TerrainKind::Desert);
        let mut h = HunterRecord::new("Ada", 0);
        assert!(!t.can_cross(&h));
        h.add_item("Water");
        assert!(t.can_cross(&h));
    }
}
