//! The town: everything a hunter can do between arriving and moving on.
//!
//! A town is single-use per visit. Its terrain and toughness are rolled when
//! it is built, its treasure when a hunter arrives, and its one-shot flags
//! (`treasure_found`, `dug_already`) never reset. Every action overwrites
//! [`Town::latest_news`], which is the only channel for reporting outcomes.
//!
//! Acting on a town before a hunter has arrived is a driver bug and panics.

use std::cell::{RefCell, RefMut};
use std::rc::Rc;

use super::hunter::{Hunter, DUST, TREASURES};
use super::rng::RandomSource;
use super::shop::Shop;
use super::terrain::Terrain;
use crate::logutil::one_line;

/// Toughness at which a town runs in easy mode.
pub const EASY_TOUGHNESS: f64 = 0.25;

/// Item that lets an armed hunter scare off any brawler.
pub const WEAPON: &str = "sword";

/// Item needed to dig for gold.
pub const SHOVEL: &str = "shovel";

/// Result of looking for trouble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrawlOutcome {
    /// Nobody wanted a fight.
    NoTrouble,
    /// The brawler ran from the hunter's weapon and dropped gold.
    Fled { gold: i32 },
    Won { gold: i32 },
    Lost { gold: i32 },
}

/// Decide a brawl.
///
/// Draw order: trouble gate, gold in `[1, 10]`, then (unless bypassed by a
/// weapon) the win gate. Easy towns win 75% of fights; otherwise the fight is
/// won when a fresh draw clears the same `no_trouble_chance` threshold.
pub fn resolve_brawl(
    weapon_bypass: bool,
    easy_mode: bool,
    tough_town: bool,
    rng: &mut dyn RandomSource,
) -> BrawlOutcome {
    let no_trouble_chance = if tough_town { 0.66 } else { 0.33 };
    if rng.next_f64() <= no_trouble_chance {
        return BrawlOutcome::NoTrouble;
    }
    let gold = rng.range_inclusive(1, 10);
    if weapon_bypass {
        return BrawlOutcome::Fled { gold };
    }
    let won = if easy_mode {
        rng.next_f64() > 0.25
    } else {
        rng.next_f64() > no_trouble_chance
    };
    if won {
        BrawlOutcome::Won { gold }
    } else {
        BrawlOutcome::Lost { gold }
    }
}

pub struct Town {
    hunter: Option<Rc<RefCell<dyn Hunter>>>,
    shop: Rc<RefCell<dyn Shop>>,
    terrain: Terrain,
    rng: Box<dyn RandomSource>,
    tough_town: bool,
    easy_mode: bool,
    treasure: Option<&'static str>,
    treasure_found: bool,
    dug_already: bool,
    last_message: String,
}

impl Town {
    /// Build a town. `toughness` in `[0, 1]` is the chance the town is rough;
    /// exactly [`EASY_TOUGHNESS`] turns on easy mode.
    pub fn new(
        shop: Rc<RefCell<dyn Shop>>,
        toughness: f64,
        mut rng: Box<dyn RandomSource>,
    ) -> Self {
        let terrain = Terrain::roll(&mut rng);
        let tough_town = rng.next_f64() < toughness;
        #[allow(clippy::float_cmp)]
        let easy_mode = toughness == EASY_TOUGHNESS;
        log::info!(
            "town: new town surrounded by {} (tough={}, easy={})",
            terrain.name(),
            tough_town,
            easy_mode
        );
        Self {
            hunter: None,
            shop,
            terrain,
            rng,
            tough_town,
            easy_mode,
            treasure: None,
            treasure_found: false,
            dug_already: false,
            last_message: String::new(),
        }
    }

    pub fn latest_news(&self) -> &str {
        &self.last_message
    }

    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    pub fn is_tough(&self) -> bool {
        self.tough_town
    }

    pub fn is_easy_mode(&self) -> bool {
        self.easy_mode
    }

    /// Treasure hidden here; `None` until a hunter arrives.
    pub fn treasure(&self) -> Option<&'static str> {
        self.treasure
    }

    pub fn treasure_found(&self) -> bool {
        self.treasure_found
    }

    pub fn dug_already(&self) -> bool {
        self.dug_already
    }

    pub fn has_hunter(&self) -> bool {
        self.hunter.is_some()
    }

    fn hunter(&self) -> RefMut<'_, dyn Hunter> {
        match &self.hunter {
            Some(h) => h.borrow_mut(),
            None => panic!("town action invoked before a hunter arrived"),
        }
    }

    fn set_news(&mut self, msg: String) {
        log::debug!("town: {}", one_line(&msg));
        self.last_message = msg;
    }

    pub fn hunter_arrives(&mut self, hunter: Rc<RefCell<dyn Hunter>>) {
        let mut msg = format!("Welcome to town, {}.", hunter.borrow().name());
        if self.tough_town {
            msg.push_str("\nIt's pretty rough around here, so watch yourself.");
        } else {
            msg.push_str("\nWe're just a sleepy little town with mild mannered folk.");
        }
        self.hunter = Some(hunter);
        let treasure = *self.rng.pick(&TREASURES);
        self.treasure = Some(treasure);
        log::debug!("town: treasure here is {}", treasure);
        self.set_news(msg);
    }

    /// Try to cross the surrounding terrain. Returns true if the hunter left.
    pub fn leave_town(&mut self) -> bool {
        let item = self.terrain.required_item();
        let terrain = self.terrain.name();
        let can_cross = self.terrain.can_cross(&*self.hunter());
        if !can_cross {
            let name = self.hunter().name().to_string();
            self.set_news(format!(
                "You can't leave town, {}. You don't have a {}.",
                name, item
            ));
            return false;
        }
        let mut msg = format!("You used your {} to cross the {}.", item, terrain);
        if self.item_breaks() {
            self.hunter().remove_item(item);
            msg.push_str(&format!("\nUnfortunately, you lost your {}.", item));
        }
        self.set_news(msg);
        true
    }

    fn item_breaks(&mut self) -> bool {
        if self.easy_mode {
            return false;
        }
        self.rng.next_f64() < 0.5
    }

    /// Hand a buy/sell choice to the shop. Clears the latest news; the shop's
    /// own reply is returned.
    pub fn enter_shop(&mut self, choice: &str) -> String {
        let mut hunter = match &self.hunter {
            Some(h) => h.borrow_mut(),
            None => panic!("town action invoked before a hunter arrived"),
        };
        self.last_message.clear();
        let reply = self.shop.borrow_mut().enter(&mut *hunter, choice);
        log::debug!("town: shop replied {}", one_line(&reply));
        reply
    }

    pub fn leave_shop(&mut self) {
        assert!(
            self.has_hunter(),
            "town action invoked before a hunter arrived"
        );
        self.set_news("You left the shop".to_string());
    }

    /// Go looking for a fight. Gold changes by 1..=10 when one happens.
    pub fn look_for_trouble(&mut self) {
        let weapon_bypass = {
            let h = self.hunter();
            h.is_armed_mode() && h.has_item(WEAPON)
        };
        let outcome = resolve_brawl(
            weapon_bypass,
            self.easy_mode,
            self.tough_town,
            self.rng.as_mut(),
        );
        let brawl = "You want trouble, stranger!  You got it!\nOof! Umph! Ow!\n";
        let msg = match outcome {
            BrawlOutcome::NoTrouble => "You couldn't find any trouble".to_string(),
            BrawlOutcome::Fled { gold } => {
                self.hunter().change_gold(gold);
                format!(
                    "{}The brawler ran away after seeing your sword\nGold was dropped! You collected {} gold.",
                    brawl, gold
                )
            }
            BrawlOutcome::Won { gold } => {
                self.hunter().change_gold(gold);
                format!(
                    "{}Okay, stranger! You proved yer mettle. Here, take my gold.\nYou won the brawl and receive {} gold.",
                    brawl, gold
                )
            }
            BrawlOutcome::Lost { gold } => {
                let remaining = {
                    let mut h = self.hunter();
                    h.change_gold(-gold);
                    h.gold()
                };
                let mut msg = format!(
                    "{}That'll teach you to go lookin' fer trouble in MY town! Now pay up!",
                    brawl
                );
                if remaining >= 0 {
                    msg.push_str(&format!("\nYou lost the brawl and pay {} gold.", gold));
                }
                msg
            }
        };
        self.set_news(msg);
    }

    /// Dig once per town with a shovel; half the time there's 1..=20 gold.
    pub fn dig_gold(&mut self) {
        if !self.hunter().has_item(SHOVEL) {
            self.set_news("You can't dig dirt without a shovel!".to_string());
            return;
        }
        if self.dug_already {
            self.set_news("You already dug for gold in this town".to_string());
            return;
        }
        self.dug_already = true;
        if self.rng.range_inclusive(0, 1) == 1 {
            let gold = self.rng.range_inclusive(1, 20);
            self.hunter().change_gold(gold);
            self.set_news(format!("You dug up {} gold!", gold));
        } else {
            self.set_news("You dug but only found dirt".to_string());
        }
    }

    pub fn search_for_treasure(&mut self) {
        if self.treasure_found {
            self.set_news("You have already searched this town.".to_string());
            return;
        }
        let treasure = match self.treasure {
            Some(t) => t,
            None => panic!("town searched before a hunter arrived"),
        };
        let already_held = self.hunter().has_treasure(treasure);
        if already_held {
            // Deliberately leaves treasure_found unset: the search can be retried.
            self.set_news(
                "You have already collected this treasure. Don't collect it again.".to_string(),
            );
            return;
        }
        if treasure != DUST {
            self.hunter().collect_treasure(treasure);
        }
        self.treasure_found = true;
        self.set_news(format!("You found {}!", treasure));
    }

    pub fn describe(&self) -> String {
        format!(
            "This nice little town is surrounded by {}.",
            self.terrain.name()
        )
    }
}

impl std::fmt::Display for Town {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}
