use cosmwasm_std::StdError;
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("exact deposit amount required")]
    WrongDeposit {},

    #[error("already on the list")]
    AlreadyOnList {},

    #[error("only the host may pay the bill")]
    Unauthorized {},

    #[error("nobody has rsvp'd yet")]
    NoAttendees {},

    #[error("not enough funds")]
    InsufficientFunds {},
}
