use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("project {id} not found")]
    NotFound { id: u64 },

    #[error("project title must not be empty")]
    EmptyTitle {},
}
