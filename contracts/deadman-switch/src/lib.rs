/*!
A dead-man's switch. The owner parks funds here and names a recipient.
As long as the owner keeps pinging before the timeout runs out, nothing
happens; once the deadline passes, the recipient (and only the
recipient) may withdraw everything.
*/

pub mod contract;
mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
