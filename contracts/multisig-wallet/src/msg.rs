use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Coin;

#[cw_serde]
pub struct InstantiateMsg {
    /// The fixed set of owner addresses, immutable after instantiation.
    pub owners: Vec<String>,
    /// How many distinct owner confirmations a transaction needs before
    /// it may be executed.
    pub required: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Top up the wallet. Callable by anyone; all attached funds are kept.
    /// (Plain bank sends to the contract address work as well.)
    Deposit {},
    /// Propose a new outgoing transfer. Only owners may propose.
    /// The new transaction id is returned in the "transaction_id" attribute
    /// and no confirmation is recorded for the proposer.
    Propose { destination: String, amount: Coin },
    /// Confirm the given transaction. Only owners may confirm; confirming
    /// twice is a no-op for the count. If this confirmation meets the
    /// threshold and the wallet balance covers the amount, the payout is
    /// executed within the same call.
    Confirm { id: u64 },
    /// Execute a transaction that already has enough confirmations, e.g.
    /// after funds arrived later than the votes. Only owners may execute.
    Execute { id: u64 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// How many distinct owners confirmed this transaction.
    #[returns(ConfirmationCountResponse)]
    ConfirmationCount { id: u64 },
    /// Whether the transaction has reached the confirmation threshold.
    #[returns(ConfirmedResponse)]
    IsConfirmed { id: u64 },
    /// Total number of transactions ever proposed.
    #[returns(TransactionCountResponse)]
    TransactionCount {},
    #[returns(TransactionResponse)]
    Transaction { id: u64 },
    #[returns(TransactionListResponse)]
    ListTransactions {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    /// The owner at the given position in the owner list.
    #[returns(OwnerResponse)]
    Owner { index: u32 },
    #[returns(OwnerListResponse)]
    ListOwners {},
    /// The confirmation threshold.
    #[returns(RequiredResponse)]
    Required {},
    /// The owners who confirmed this transaction, ascending by address.
    #[returns(ConfirmationListResponse)]
    ListConfirmations {
        id: u64,
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct ConfirmationCountResponse {
    pub count: u64,
}

#[cw_serde]
pub struct ConfirmedResponse {
    pub confirmed: bool,
}

#[cw_serde]
pub struct TransactionCountResponse {
    pub count: u64,
}

#[cw_serde]
pub struct TransactionResponse {
    pub id: u64,
    pub destination: String,
    pub amount: Coin,
    pub executed: bool,
}

#[cw_serde]
pub struct TransactionListResponse {
    pub transactions: Vec<TransactionResponse>,
}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: String,
}

#[cw_serde]
pub struct OwnerListResponse {
    pub owners: Vec<String>,
}

#[cw_serde]
pub struct RequiredResponse {
    pub required: u64,
}

#[cw_serde]
pub struct ConfirmationListResponse {
    pub confirmations: Vec<String>,
}
