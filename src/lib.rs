//! # Treasure Hunter
//!
//! A small text adventure. A hunter travels from town to town, outfitting at
//! the general store, brawling for gold, digging, and searching each town for
//! its hidden treasure. Every town is ringed by terrain that can only be crossed
//! with the right item.
//!
//! ## Features
//!
//! - **Town State Machine**: one-shot digging and searching per town, toughness-dependent brawls, item breakage on crossing.
//! - **Injected Randomness**: every roll goes through a [`game::RandomSource`]; seeded games replay exactly.
//! - **Difficulty Modes**: easy, normal, hard and samurai (armed hunter, swords for sale).
//! - **Terminal Driver**: a line-oriented game loop in the `treasure-hunter` binary.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use treasure_hunter::config::Config;
//! use treasure_hunter::game::{Difficulty, Session};
//!
//! let config = Config::load_or_default("config.toml");
//! let mut session = Session::new(&config, "Ada", Difficulty::Normal, 42);
//! println!("{}", session.intro());
//! println!("{}", session.handle("L"));
//! ```
//!
//! ## Module Organization
//!
//! - [`game`] - towns, terrain, the hunter, the shop and the session driver
//! - [`config`] - configuration management and validation
//! - [`validation`] - hunter name validation
//! - [`logutil`] - single-line log formatting

pub mod config;
pub mod game;
pub mod logutil;
pub mod validation;
