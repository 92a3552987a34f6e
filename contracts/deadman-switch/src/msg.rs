use cosmwasm_schema::{cw_serde, QueryResponses};
use cw_utils::{Duration, Expiration};

#[cw_serde]
pub struct InstantiateMsg {
    /// Who may withdraw once the deadline has passed.
    pub recipient: String,
    /// How long each ping postpones the deadline, e.g. 52 weeks in
    /// seconds. The first deadline starts running at instantiation.
    pub timeout: Duration,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Owner-only sign of life; resets the deadline to now + timeout.
    Ping {},
    /// Recipient-only; sends the entire contract balance to the
    /// recipient once the deadline has passed.
    Withdraw {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(DeadlineResponse)]
    Deadline {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: String,
    pub recipient: String,
    pub timeout: Duration,
}

#[cw_serde]
pub struct DeadlineResponse {
    pub deadline: Expiration,
}
