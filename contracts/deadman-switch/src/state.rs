use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;
use cw_utils::{Duration, Expiration};

#[cw_serde]
pub struct Config {
    pub owner: Addr,
    pub recipient: Addr,
    /// How long a ping keeps the switch armed.
    pub timeout: Duration,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// When the recipient may withdraw. Pushed out by every ping.
pub const DEADLINE: Item<Expiration> = Item::new("deadline");
