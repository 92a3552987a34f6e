/*!
An equal-split bill payer. Every attendee RSVPs with exactly the same
deposit; when the host pays the venue, whatever is left in the pot is
refunded to the attendees in equal shares.
*/

pub mod contract;
mod error;
mod integration_tests;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
