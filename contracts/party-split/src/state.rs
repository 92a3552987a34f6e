use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin, Empty};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    /// Who instantiated the party and may pay the bill.
    pub host: Addr,
    /// The exact amount every attendee has to put in.
    pub deposit: Coin,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Everyone who paid the deposit. Append-only.
pub const ATTENDEES: Map<&Addr, Empty> = Map::new("attendees");
