use thiserror::Error;

/// Reasons a shop transaction can be refused. Shops render these into their
/// reply text; they never escape to the caller as failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShopError {
    /// The store does not stock this item.
    #[error("We ain't got none of those.")]
    UnknownItem(String),

    /// The hunter cannot afford the item.
    #[error("You need {price} gold for the {item} but only have {gold}.")]
    InsufficientFunds { item: String, price: i32, gold: i32 },

    /// Buying something the kit already holds.
    #[error("You already have a {0}.")]
    AlreadyOwned(String),

    /// Selling something the kit doesn't hold.
    #[error("You don't have a {0} to sell.")]
    NotOwned(String),
}
