//! One game: a hunter travelling from town to town.
//!
//! The session is the driver loop in library form. It owns the hunter and the
//! general store, keeps the current [`Town`], and turns one terse command at a
//! time into a town action plus the text to show the player. When the hunter
//! crosses the terrain a fresh town is rolled and the hunter arrives there.
//!
//! The game is won once the crown, trophy and gem are all collected, and lost
//! when the hunter's gold drops below zero.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::hunter::{Hunter, HunterRecord};
use super::rng::{RandomSource, SeededRandom};
use super::shop::{GeneralStore, Shop};
use super::town::{Town, EASY_TOUGHNESS};
use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
    /// Normal towns, but the hunter is armed and the store sells swords.
    Samurai,
}

impl Difficulty {
    pub fn toughness(self) -> f64 {
        match self {
            Difficulty::Easy => EASY_TOUGHNESS,
            Difficulty::Normal | Difficulty::Samurai => 0.4,
            Difficulty::Hard => 0.75,
        }
    }

    pub fn starting_gold(self, base: i32) -> i32 {
        match self {
            Difficulty::Hard => base / 2,
            _ => base,
        }
    }

    pub fn is_armed(self) -> bool {
        matches!(self, Difficulty::Samurai)
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
            Difficulty::Samurai => "samurai",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown difficulty '{0}' (expected easy, normal, hard or samurai)")]
pub struct UnknownDifficulty(pub String);

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "e" | "easy" => Ok(Difficulty::Easy),
            "n" | "normal" => Ok(Difficulty::Normal),
            "h" | "hard" => Ok(Difficulty::Hard),
            "s" | "samurai" => Ok(Difficulty::Samurai),
            _ => Err(UnknownDifficulty(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `B [item]`: list wares, or buy one item
    Buy(Option<String>),
    /// `S [item]`: list buy-back offers, or sell one item
    Sell(Option<String>),
    LeaveShop,
    /// `M`: cross the terrain to the next town
    MoveOn,
    LookForTrouble,
    Dig,
    Hunt,
    Inventory,
    Help,
    Quit,
    Unknown(String),
}

/// Parse one line of player input. Never fails; junk becomes [`Command::Unknown`].
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();
    let mut it = trimmed.splitn(2, char::is_whitespace);
    let op = it.next().unwrap_or("").to_uppercase();
    let arg = it
        .next()
        .map(|a| a.trim().to_lowercase())
        .filter(|a| !a.is_empty());
    match op.as_str() {
        "B" | "BUY" => Command::Buy(arg),
        "S" | "SELL" => Command::Sell(arg),
        "X" | "EXIT" => Command::LeaveShop,
        "M" | "MOVE" => Command::MoveOn,
        "L" | "LOOK" => Command::LookForTrouble,
        "D" | "DIG" => Command::Dig,
        "H" | "HUNT" => Command::Hunt,
        "I" | "INV" => Command::Inventory,
        "?" | "HELP" => Command::Help,
        "Q" | "QUIT" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
    Quit,
}

/// Produces the random source for the n-th town of a game (0-based).
pub type TownSource = Box<dyn FnMut(u32) -> Box<dyn RandomSource>>;

fn help_text() -> &'static str {
    "Commands:\n\
B)uy [item] - list wares or buy an item\n\
S)ell [item] - list offers or sell an item\n\
X - leave the shop\n\
M)ove on - cross the terrain to the next town\n\
L)ook for trouble - brawl for gold\n\
D)ig for gold - needs a shovel, once per town\n\
H)unt for treasure - once per town\n\
I)nventory - show gold, kit and treasures\n\
Q)uit\n\
Goal: collect a crown, a trophy and a gem."
}

pub struct Session {
    hunter: Rc<RefCell<HunterRecord>>,
    shop: Rc<RefCell<GeneralStore>>,
    town: Town,
    difficulty: Difficulty,
    town_source: TownSource,
    towns_visited: u32,
    status: GameStatus,
    final_message: String,
}

impl Session {
    /// Start a seeded game. Each town gets its own source derived from the seed
    /// and the town's index, so a seed replays the same world.
    pub fn new(config: &Config, name: &str, difficulty: Difficulty, seed: u64) -> Self {
        log::info!("session: seed {} mode {} hunter {}", seed, difficulty, name);
        let source: TownSource = Box::new(move |n: u32| {
            let town_seed = seed.wrapping_add(u64::from(n).wrapping_mul(0x9e37_79b9_7f4a_7c15));
            Box::new(SeededRandom::new(town_seed)) as Box<dyn RandomSource>
        });
        Self::with_town_source(config, name, difficulty, source)
    }

    pub fn with_town_source(
        config: &Config,
        name: &str,
        difficulty: Difficulty,
        mut town_source: TownSource,
    ) -> Self {
        let mut record = HunterRecord::new(name, difficulty.starting_gold(config.game.starting_gold));
        record.armed_mode = difficulty.is_armed();
        let hunter = Rc::new(RefCell::new(record));
        let shop = Rc::new(RefCell::new(GeneralStore::new(
            &config.shop,
            difficulty.is_armed(),
        )));
        let town = Self::build_town(&hunter, &shop, difficulty, town_source(0));
        Self {
            hunter,
            shop,
            town,
            difficulty,
            town_source,
            towns_visited: 1,
            status: GameStatus::Playing,
            final_message: String::new(),
        }
    }

    fn build_town(
        hunter: &Rc<RefCell<HunterRecord>>,
        shop: &Rc<RefCell<GeneralStore>>,
        difficulty: Difficulty,
        rng: Box<dyn RandomSource>,
    ) -> Town {
        let shop: Rc<RefCell<dyn Shop>> = shop.clone();
        let mut town = Town::new(shop, difficulty.toughness(), rng);
        let hunter: Rc<RefCell<dyn Hunter>> = hunter.clone();
        town.hunter_arrives(hunter);
        town
    }

    /// Opening text: the town description and its welcome.
    pub fn intro(&self) -> String {
        format!("{}\n{}", self.town.describe(), self.town.latest_news())
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Playing
    }

    pub fn hunter(&self) -> Ref<'_, HunterRecord> {
        self.hunter.borrow()
    }

    pub fn town(&self) -> &Town {
        &self.town
    }

    pub fn towns_visited(&self) -> u32 {
        self.towns_visited
    }

    /// Compact status for the prompt, e.g. `Gold 12 | Town 2 | Desert`.
    pub fn status_line(&self) -> String {
        format!(
            "Gold {} | Town {} | {}",
            self.hunter.borrow().gold,
            self.towns_visited,
            self.town.terrain().name()
        )
    }

    /// Apply one command and return the text to show.
    pub fn handle(&mut self, raw: &str) -> String {
        let cmd = parse_command(raw);
        if self.is_over() {
            return match cmd {
                Command::Help => help_text().to_string(),
                _ => self.final_message.clone(),
            };
        }
        log::debug!("session: command {:?}", cmd);
        let out = match cmd {
            Command::Buy(item) => self.shop_choice("buy", item),
            Command::Sell(item) => self.shop_choice("sell", item),
            Command::LeaveShop => {
                self.town.leave_shop();
                self.town.latest_news().to_string()
            }
            Command::MoveOn => self.move_on(),
            Command::LookForTrouble => {
                self.town.look_for_trouble();
                self.town.latest_news().to_string()
            }
            Command::Dig => {
                self.town.dig_gold();
                self.town.latest_news().to_string()
            }
            Command::Hunt => {
                self.town.search_for_treasure();
                self.town.latest_news().to_string()
            }
            Command::Inventory => {
                format!("{}\n{}", self.hunter.borrow().summary(), self.town.describe())
            }
            Command::Help => return help_text().to_string(),
            Command::Quit => {
                self.finish(GameStatus::Quit, "Fare thee well!".to_string());
                return self.final_message.clone();
            }
            Command::Unknown(_) => "Bad cmd. Use ? for help.".to_string(),
        };
        self.check_game_over(out)
    }

    fn shop_choice(&mut self, verb: &str, item: Option<String>) -> String {
        let choice = match item {
            Some(item) => format!("{} {}", verb, item),
            None => verb.to_string(),
        };
        self.town.enter_shop(&choice)
    }

    fn move_on(&mut self) -> String {
        if !self.town.leave_town() {
            return self.town.latest_news().to_string();
        }
        let crossing = self.town.latest_news().to_string();
        let rng = (self.town_source)(self.towns_visited);
        self.town = Self::build_town(&self.hunter, &self.shop, self.difficulty, rng);
        self.towns_visited += 1;
        log::info!("session: arrived at town {}", self.towns_visited);
        format!("{}\n\n{}", crossing, self.intro())
    }

    fn check_game_over(&mut self, mut out: String) -> String {
        let (won, broke) = {
            let h = self.hunter.borrow();
            (h.has_all_treasures(), h.gold < 0)
        };
        if won {
            self.finish(
                GameStatus::Won,
                "Congratulations, you found the last of the three treasures. You win!".to_string(),
            );
        } else if broke {
            self.finish(
                GameStatus::Lost,
                "You're out of gold and in debt. Game over!".to_string(),
            );
        } else {
            return out;
        }
        out.push('\n');
        out.push_str(&self.final_message);
        out
    }

    fn finish(&mut self, status: GameStatus, message: String) {
        log::info!(
            "session: game over ({:?}) after {} towns: {}",
            status,
            self.towns_visited,
            self.hunter.borrow().summary()
        );
        self.status = status;
        self.final_message = message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_command_accepts_short_and_long_forms() {
        assert_eq!(parse_command("b"), Command::Buy(None));
        assert_eq!(parse_command(" BUY  Rope "), Command::Buy(Some("rope".into())));
        assert_eq!(parse_command("s horse"), Command::Sell(Some("horse".into())));
        assert_eq!(parse_command("x"), Command::LeaveShop);
        assert_eq!(parse_command("m"), Command::MoveOn);
        assert_eq!(parse_command("look"), Command::LookForTrouble);
        assert_eq!(parse_command("D"), Command::Dig);
        assert_eq!(parse_command("h"), Command::Hunt);
        assert_eq!(parse_command("i"), Command::Inventory);
        assert_eq!(parse_command("?"), Command::Help);
        assert_eq!(parse_command("q"), Command::Quit);
        assert_eq!(parse_command("dance"), Command::Unknown("dance".into()));
        assert_eq!(parse_command(""), Command::Unknown(String::new()));
    }

    #[test]
    fn difficulty_parses_and_maps_toughness() {
        assert_eq!("Easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("s".parse::<Difficulty>(), Ok(Difficulty::Samurai));
        assert!("brutal".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::Easy.toughness(), EASY_TOUGHNESS);
        assert_eq!(Difficulty::Hard.starting_gold(10), 5);
        assert!(Difficulty::Samurai.is_armed());
        assert!(!Difficulty::Normal.is_armed());
    }

    #[test]
    fn seeded_sessions_replay_identically() {
        let config = Config::default();
        let mut a = Session::new(&config, "Ada", Difficulty::Normal, 4242);
        let mut b = Session::new(&config, "Ada", Difficulty::Normal, 4242);
        assert_eq!(a.intro(), b.intro());
        for cmd in ["l", "l", "b shovel", "d", "h", "l"] {
            assert_eq!(a.handle(cmd), b.handle(cmd));
        }
        assert_eq!(*a.hunter(), *b.hunter());
    }

    #[test]
    fn samurai_mode_arms_hunter_and_stocks_swords() {
        let config = Config::default();
        let mut s = Session::new(&config, "Musashi", Difficulty::Samurai, 1);
        assert!(s.hunter().armed_mode);
        let reply = s.handle("b sword");
        assert!(reply.contains("sword"), "{}", reply);
        assert!(s.hunter().has_item("sword"));
    }

    #[test]
    fn quit_ends_game_and_sticks() {
        let config = Config::default();
        let mut s = Session::new(&config, "Ada", Difficulty::Easy, 9);
        assert_eq!(s.handle("q"), "Fare thee well!");
        assert_eq!(s.status(), GameStatus::Quit);
        assert_eq!(s.handle("l"), "Fare thee well!");
        assert!(s.handle("?").starts_with("Commands:"));
    }
}
