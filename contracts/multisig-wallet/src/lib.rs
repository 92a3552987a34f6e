/*!
A multisig wallet with a fixed set of owner addresses established at
instantiation. The contract holds native funds; any owner may propose an
outgoing transfer, and once a proposal has gathered the required number of
distinct owner confirmations (and the wallet can cover the amount) the
funds are paid out exactly once.

Proposals live in an append-only ledger indexed by a monotonically
increasing id, so an id stays meaningful forever and the ledger doubles as
an audit trail. Confirmations are set-membership per (id, owner) and can
never be double-counted or withdrawn.
*/

pub mod contract;
mod error;
mod integration_tests;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
