/*!
A wide-open judging tally for a hackathon. Anyone may register a project
and anyone may rate one; the winner is the project with the highest
average rating, with earlier registrations winning ties.

There is no access control: the tally is bookkeeping, not custody.
*/

pub mod contract;
mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
