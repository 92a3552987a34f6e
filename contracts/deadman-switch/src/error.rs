use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("only owner authorised")]
    NotOwner {},

    #[error("only recipient authorised")]
    NotRecipient {},

    #[error("too early")]
    TooEarly {},

    #[error("nothing to withdraw")]
    NothingToWithdraw {},
}
