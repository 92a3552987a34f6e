use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin, Empty, StdResult, Storage};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    /// Fixed, ordered owner set. Validated non-empty and duplicate-free
    /// at instantiation, never mutated afterwards.
    pub owners: Vec<Addr>,
    /// Distinct confirmations needed before a transaction may execute.
    /// Invariant: 0 < required <= owners.len().
    pub required: u64,
}

impl Config {
    pub fn is_owner(&self, addr: &Addr) -> bool {
        self.owners.iter().any(|o| o == addr)
    }
}

/// One proposed outgoing transfer. Destination and amount are fixed once
/// proposed; only `executed` ever changes, false -> true, exactly once.
#[cw_serde]
pub struct Transaction {
    pub destination: Addr,
    pub amount: Coin,
    pub executed: bool,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Total transactions ever proposed; the next id to assign.
pub const TRANSACTION_COUNT: Item<u64> = Item::new("transaction_count");

/// Append-only ledger, keyed by transaction id. Entries are never removed,
/// so an id stays valid for the lifetime of the contract.
pub const TRANSACTIONS: Map<u64, Transaction> = Map::new("transactions");

/// Which owner confirmed which transaction. Saving the same key twice is
/// how repeated confirmation stays idempotent.
pub const CONFIRMATIONS: Map<(u64, &Addr), Empty> = Map::new("confirmations");

/// Assigns ids 0, 1, 2, ... with no gaps.
pub fn next_id(store: &mut dyn Storage) -> StdResult<u64> {
    let id = TRANSACTION_COUNT.may_load(store)?.unwrap_or_default();
    TRANSACTION_COUNT.save(store, &(id + 1))?;
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    use cosmwasm_std::testing::MockStorage;

    #[test]
    fn ids_count_up_from_zero() {
        let mut storage = MockStorage::new();
        assert_eq!(0, next_id(&mut storage).unwrap());
        assert_eq!(1, next_id(&mut storage).unwrap());
        assert_eq!(2, next_id(&mut storage).unwrap());
        assert_eq!(3, TRANSACTION_COUNT.load(&storage).unwrap());
    }

    #[test]
    fn is_owner_checks_membership() {
        let cfg = Config {
            owners: vec![Addr::unchecked("alice"), Addr::unchecked("bob")],
            required: 2,
        };
        assert!(cfg.is_owner(&Addr::unchecked("alice")));
        assert!(cfg.is_owner(&Addr::unchecked("bob")));
        assert!(!cfg.is_owner(&Addr::unchecked("mallory")));
    }
}
