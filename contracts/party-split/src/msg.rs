use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Coin, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    /// The exact deposit every attendee must attach to an Rsvp.
    pub deposit: Coin,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Join the party. The attached funds must be exactly the configured
    /// deposit, and each address may only join once.
    Rsvp {},
    /// Pay `amount` of the deposit denom to the venue and refund the rest
    /// of the pot to the attendees in equal shares. Host only.
    PayBill { venue: String, amount: Uint128 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(AttendeeListResponse)]
    ListAttendees {
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct ConfigResponse {
    pub host: String,
    pub deposit: Coin,
}

#[cw_serde]
pub struct AttendeeListResponse {
    pub attendees: Vec<String>,
}
