#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_binary, Addr, BankMsg, Binary, Coin, Deps, DepsMut, Empty, Env, MessageInfo, Order,
    Response, StdResult, Uint128,
};
use cw2::set_contract_version;
use cw_storage_plus::Bound;
use cw_utils::must_pay;

use crate::error::ContractError;
use crate::msg::{
    AttendeeListResponse, ConfigResponse, ExecuteMsg, InstantiateMsg, QueryMsg,
};
use crate::state::{Config, ATTENDEES, CONFIG};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:party-split";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> StdResult<Response> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    let cfg = Config {
        host: info.sender,
        deposit: msg.deposit,
    };
    CONFIG.save(deps.storage, &cfg)?;
    Ok(Response::default())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Rsvp {} => execute_rsvp(deps, info),
        ExecuteMsg::PayBill { venue, amount } => execute_pay_bill(deps, env, info, venue, amount),
    }
}

pub fn execute_rsvp(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let cfg = CONFIG.load(deps.storage)?;

    if ATTENDEES.has(deps.storage, &info.sender) {
        return Err(ContractError::AlreadyOnList {});
    }
    let paid = must_pay(&info, &cfg.deposit.denom)?;
    if paid != cfg.deposit.amount {
        return Err(ContractError::WrongDeposit {});
    }
    ATTENDEES.save(deps.storage, &info.sender, &Empty {})?;

    Ok(Response::new()
        .add_attribute("action", "rsvp")
        .add_attribute("sender", info.sender))
}

pub fn execute_pay_bill(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    venue: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let cfg = CONFIG.load(deps.storage)?;
    if info.sender != cfg.host {
        return Err(ContractError::Unauthorized {});
    }
    let venue = deps.api.addr_validate(&venue)?;

    let attendees: Vec<Addr> = ATTENDEES
        .keys(deps.storage, None, None, Order::Ascending)
        .collect::<StdResult<_>>()?;
    if attendees.is_empty() {
        return Err(ContractError::NoAttendees {});
    }

    let pot = deps
        .querier
        .query_balance(&env.contract.address, &cfg.deposit.denom)?;
    if pot.amount < amount {
        return Err(ContractError::InsufficientFunds {});
    }

    // whatever the bill leaves over goes back in equal shares; integer
    // division, so a few base units of dust may stay behind
    let remainder = pot.amount - amount;
    let share = remainder.multiply_ratio(1u128, attendees.len() as u128);

    let mut res = Response::new()
        .add_attribute("action", "pay_bill")
        .add_attribute("venue", venue.as_str())
        .add_attribute("amount", amount)
        .add_attribute("refund_each", share);
    if !amount.is_zero() {
        res = res.add_message(BankMsg::Send {
            to_address: venue.into_string(),
            amount: vec![coin_of(&cfg, amount)],
        });
    }
    if !share.is_zero() {
        for attendee in attendees {
            res = res.add_message(BankMsg::Send {
                to_address: attendee.into_string(),
                amount: vec![coin_of(&cfg, share)],
            });
        }
    }

    Ok(res)
}

fn coin_of(cfg: &Config, amount: Uint128) -> Coin {
    Coin {
        denom: cfg.deposit.denom.clone(),
        amount,
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_binary(&query_config(deps)?),
        QueryMsg::ListAttendees { start_after, limit } => {
            to_binary(&list_attendees(deps, start_after, limit)?)
        }
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let cfg = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        host: cfg.host.into_string(),
        deposit: cfg.deposit,
    })
}

// settings for pagination
const MAX_LIMIT: u32 = 30;
const DEFAULT_LIMIT: u32 = 10;

fn list_attendees(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<AttendeeListResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_addr = start_after
        .map(|s| deps.api.addr_validate(&s))
        .transpose()?;
    let start = start_addr.as_ref().map(Bound::exclusive);

    let attendees: StdResult<Vec<_>> = ATTENDEES
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|addr| addr.to_string()))
        .collect();

    Ok(AttendeeListResponse {
        attendees: attendees?,
    })
}
