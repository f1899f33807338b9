//! Test utilities & fixtures.
//! Towns built on scripted or seeded randomness, hunters behind shared handles.

use std::cell::RefCell;
use std::rc::Rc;

use treasure_hunter::config::Config;
use treasure_hunter::game::session::TownSource;
use treasure_hunter::game::{
    GeneralStore, HunterRecord, RandomSource, ScriptedRandom, SeededRandom, Shop, Town,
};

/// A general store stocked from the default configuration.
#[allow(dead_code)]
pub fn store() -> Rc<RefCell<dyn Shop>> {
    Rc::new(RefCell::new(GeneralStore::new(&Config::default().shop, false)))
}

/// Town whose draws are scripted. Construction takes the first int (terrain
/// index) and first float (toughness roll); arrival takes the next int (treasure index).
#[allow(dead_code)]
pub fn scripted_town(toughness: f64, ints: &[i32], floats: &[f64]) -> Town {
    let rng = ScriptedRandom::new().with_ints(ints).with_floats(floats);
    Town::new(store(), toughness, Box::new(rng))
}

#[allow(dead_code)]
pub fn seeded_town(toughness: f64, seed: u64) -> Town {
    Town::new(store(), toughness, Box::new(SeededRandom::new(seed)))
}

#[allow(dead_code)]
pub fn hunter(name: &str, gold: i32, items: &[&str]) -> Rc<RefCell<HunterRecord>> {
    Rc::new(RefCell::new(HunterRecord::new(name, gold).with_items(items)))
}

/// The hunter arrives at `town`; the caller keeps the typed handle for assertions.
#[allow(dead_code)]
pub fn arrive(town: &mut Town, hunter: &Rc<RefCell<HunterRecord>>) {
    town.hunter_arrives(hunter.clone());
}

/// Feed a session one scripted source per town, in order.
#[allow(dead_code)]
pub fn scripted_towns(scripts: Vec<ScriptedRandom>) -> TownSource {
    let mut towns = scripts.into_iter();
    Box::new(move |n| {
        let rng = towns
            .next()
            .unwrap_or_else(|| panic!("no scripted source for town {}", n));
        Box::new(rng) as Box<dyn RandomSource>
    })
}
