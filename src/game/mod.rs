//! # Game Core
//!
//! Towns, the hunter who visits them, and the shop that outfits the hunter.
//!
//! ## Components
//!
//! - [`town`] - the town state machine: arrival, brawls, digging, treasure, leaving
//! - [`terrain`] - the obstacle around a town and the item that crosses it
//! - [`hunter`] - the [`Hunter`] capability trait and the [`HunterRecord`] player record
//! - [`shop`] - the [`Shop`] collaborator trait and the [`GeneralStore`]
//! - [`rng`] - injected randomness ([`RandomSource`], seeded and scripted sources)
//! - [`session`] - the driver that plays town after town from typed commands
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  Session        │ ← parses commands, rolls the next town
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │  Town           │ ← one visit: actions, odds, latest news
//! └─────────────────┘
//!     │         │
//! ┌────────┐ ┌────────┐
//! │ Hunter │ │ Shop   │ ← collaborators behind traits
//! └────────┘ └────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use treasure_hunter::config::Config;
//! use treasure_hunter::game::{GeneralStore, HunterRecord, SeededRandom, Town};
//!
//! let config = Config::default();
//! let shop = Rc::new(RefCell::new(GeneralStore::new(&config.shop, false)));
//! let mut town = Town::new(shop, 0.4, Box::new(SeededRandom::new(7)));
//! let hunter = Rc::new(RefCell::new(HunterRecord::new("Ada", 10)));
//! town.hunter_arrives(hunter.clone());
//! town.look_for_trouble();
//! println!("{}", town.latest_news());
//! ```

pub mod errors;
pub mod hunter;
pub mod rng;
pub mod session;
pub mod shop;
pub mod terrain;
pub mod town;

pub use errors::ShopError;
pub use hunter::{Hunter, HunterRecord};
pub use rng::{RandomSource, ScriptedRandom, SeededRandom};
pub use session::{Command, Difficulty, GameStatus, Session};
pub use shop::{GeneralStore, Shop};
pub use terrain::{Terrain, TerrainKind};
pub use town::{resolve_brawl, BrawlOutcome, Town};
