#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_binary, BankMsg, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{ConfigResponse, DeadlineResponse, ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::{Config, CONFIG, DEADLINE};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:deadman-switch";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> StdResult<Response> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let cfg = Config {
        owner: info.sender,
        recipient: deps.api.addr_validate(&msg.recipient)?,
        timeout: msg.timeout,
    };
    CONFIG.save(deps.storage, &cfg)?;
    DEADLINE.save(deps.storage, &cfg.timeout.after(&env.block))?;

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
        ExecuteMsg::Ping {} => execute_ping(deps, env, info),
        ExecuteMsg::Withdraw {} => execute_withdraw(deps, env, info),
    }
}

pub fn execute_ping(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    let cfg = CONFIG.load(deps.storage)?;
    if info.sender != cfg.owner {
        return Err(ContractError::NotOwner {});
    }

    let deadline = cfg.timeout.after(&env.block);
    DEADLINE.save(deps.storage, &deadline)?;

    Ok(Response::new()
        .add_attribute("action", "ping")
        .add_attribute("deadline", deadline.to_string()))
}

pub fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let cfg = CONFIG.load(deps.storage)?;
    if info.sender != cfg.recipient {
        return Err(ContractError::NotRecipient {});
    }
    let deadline = DEADLINE.load(deps.storage)?;
    if !deadline.is_expired(&env.block) {
        return Err(ContractError::TooEarly {});
    }

    let balance = deps.querier.query_all_balances(&env.contract.address)?;
    if balance.is_empty() {
        return Err(ContractError::NothingToWithdraw {});
    }

    Ok(Response::new()
        .add_attribute("action", "withdraw")
        .add_attribute("recipient", info.sender)
        .add_message(BankMsg::Send {
            to_address: cfg.recipient.into_string(),
            amount: balance,
        }))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_binary(&query_config(deps)?),
        QueryMsg::Deadline {} => to_binary(&query_deadline(deps)?),
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let cfg = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: cfg.owner.into_string(),
        recipient: cfg.recipient.into_string(),
        timeout: cfg.timeout,
    })
}

fn query_deadline(deps: Deps) -> StdResult<DeadlineResponse> {
    let deadline = DEADLINE.load(deps.storage)?;
    Ok(DeadlineResponse { deadline })
}
