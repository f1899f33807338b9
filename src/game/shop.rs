//! Shop collaborator and the general store that backs it.
//!
//! A town hands every shop visit to a [`Shop`]; the shop does its own
//! bookkeeping on the hunter and produces the text the player sees.
//!
//! The bundled [`GeneralStore`] sells the crossing gear, a shovel, and (for
//! samurai games) a sword:
//! - `buy` / `b` lists wares with prices and the hunter's gold
//! - `buy <item>` purchases one, if affordable and not already owned
//! - `sell` / `s` lists what the store will buy back from the kit
//! - `sell <item>` sells one owned item at the markdown price

use std::collections::BTreeMap;

use super::errors::ShopError;
use super::hunter::Hunter;
use crate::config::ShopConfig;

pub trait Shop {
    /// Handle a buy/sell choice for the hunter and return the reply text.
    fn enter(&mut self, hunter: &mut dyn Hunter, choice: &str) -> String;
}

#[derive(Debug, Clone)]
pub struct GeneralStore {
    prices: BTreeMap<String, i32>,
    sell_markdown: f64,
    sells_weapons: bool,
}

/// Items gated behind `sells_weapons`.
const WEAPONS: [&str; 1] = ["sword"];

impl GeneralStore {
    pub fn new(config: &ShopConfig, sells_weapons: bool) -> Self {
        let prices = config
            .prices
            .iter()
            .map(|(k, v)| (k.trim().to_lowercase(), *v))
            .collect();
        Self {
            prices,
            sell_markdown: config.sell_markdown,
            sells_weapons,
        }
    }

    fn stocks(&self, item: &str) -> bool {
        self.sells_weapons || !WEAPONS.contains(&item)
    }

    /// Price of an item on the shelf, if stocked.
    pub fn price(&self, item: &str) -> Option<i32> {
        let key = item.trim().to_lowercase();
        if !self.stocks(&key) {
            return None;
        }
        self.prices.get(&key).copied()
    }

    /// Gold the store pays for an item: the shelf price scaled by the markdown, rounded down.
    pub fn buyback_price(&self, item: &str) -> Option<i32> {
        self.price(item)
            .map(|p| (f64::from(p) * self.sell_markdown).floor() as i32)
    }

    pub fn buy(&self, hunter: &mut dyn Hunter, item: &str) -> Result<i32, ShopError> {
        let key = item.trim().to_lowercase();
        let price = self
            .price(&key)
            .ok_or_else(|| ShopError::UnknownItem(key.clone()))?;
        if hunter.has_item(&key) {
            return Err(ShopError::AlreadyOwned(key));
        }
        if hunter.gold() < price {
            return Err(ShopError::InsufficientFunds {
                item: key,
                price,
                gold: hunter.gold(),
            });
        }
        hunter.change_gold(-price);
        hunter.add_item(&key);
        log::debug!("shop: {} bought {} for {}g", hunter.name(), key, price);
        Ok(price)
    }

    pub fn sell(&self, hunter: &mut dyn Hunter, item: &str) -> Result<i32, ShopError> {
        let key = item.trim().to_lowercase();
        let paid = self
            .buyback_price(&key)
            .ok_or_else(|| ShopError::UnknownItem(key.clone()))?;
        if !hunter.remove_item(&key) {
            return Err(ShopError::NotOwned(key));
        }
        hunter.change_gold(paid);
        log::debug!("shop: {} sold {} for {}g", hunter.name(), key, paid);
        Ok(paid)
    }

    fn wares(&self, hunter: &dyn Hunter) -> String {
        let mut out = format!("Welcome to the shop! You have {} gold.\nWe sell:", hunter.gold());
        for (item, price) in self.prices.iter().filter(|(i, _)| self.stocks(i)) {
            out.push_str(&format!("\n  {}: {} gold", item, price));
        }
        out
    }

    fn buyback_list(&self, hunter: &dyn Hunter) -> String {
        let offers: Vec<String> = self
            .prices
            .keys()
            .filter(|i| hunter.has_item(i))
            .filter_map(|i| self.buyback_price(i).map(|p| format!("\n  {}: {} gold", i, p)))
            .collect();
        if offers.is_empty() {
            return "You have nothing we want to buy.".to_string();
        }
        let mut out = String::from("We'll buy:");
        for line in offers {
            out.push_str(&line);
        }
        out
    }
}

impl Shop for GeneralStore {
    fn enter(&mut self, hunter: &mut dyn Hunter, choice: &str) -> String {
        let lowered = choice.trim().to_lowercase();
        let mut words = lowered.splitn(2, char::is_whitespace);
        let verb = words.next().unwrap_or("");
        let item = words.next().map(str::trim).unwrap_or("");
        match (verb, item) {
            ("buy" | "b", "") => self.wares(hunter),
            ("buy" | "b", item) => match self.buy(hunter, item) {
                Ok(price) => format!("Ye' got yerself a {}. Come again soon. (-{} gold)", item, price),
                Err(e) => e.to_string(),
            },
            ("sell" | "s", "") => self.buyback_list(hunter),
            ("sell" | "s", item) => match self.sell(hunter, item) {
                Ok(paid) => format!("Pleasure doin' business with you. (+{} gold)", paid),
                Err(e) => e.to_string(),
            },
            _ => "Usage: buy [item] | sell [item]".to_string(),
        }
    }
}
