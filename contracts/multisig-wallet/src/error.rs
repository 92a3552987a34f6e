use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("owners must be > 0")]
    NoOwners {},

    #[error("confirmations must be > 0")]
    ZeroRequired {},

    #[error("confirmations must be <= number of owners")]
    UnreachableThreshold {},

    #[error("duplicate owner: {owner}")]
    DuplicateOwner { owner: String },

    #[error("not an owner")]
    Unauthorized {},

    #[error("transaction {id} not found")]
    NotFound { id: u64 },

    #[error("transaction {id} already executed")]
    AlreadyExecuted { id: u64 },

    #[error("not enough confirmations")]
    InsufficientConfirmations {},

    #[error("not enough funds")]
    InsufficientFunds {},
}
