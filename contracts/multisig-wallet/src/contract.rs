#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_binary, BankMsg, Binary, Coin, Deps, DepsMut, Empty, Env, MessageInfo, Order, Response,
    StdError, StdResult, Storage,
};
use cw2::set_contract_version;
use cw_storage_plus::Bound;

use crate::error::ContractError;
use crate::msg::{
    ConfirmationCountResponse, ConfirmationListResponse, ConfirmedResponse, ExecuteMsg,
    InstantiateMsg, OwnerListResponse, OwnerResponse, QueryMsg, RequiredResponse,
    TransactionCountResponse, TransactionListResponse, TransactionResponse,
};
use crate::state::{
    next_id, Config, Transaction, CONFIG, CONFIRMATIONS, TRANSACTIONS, TRANSACTION_COUNT,
};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:multisig-wallet";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    if msg.owners.is_empty() {
        return Err(ContractError::NoOwners {});
    }
    if msg.required == 0 {
        return Err(ContractError::ZeroRequired {});
    }
    if msg.required > msg.owners.len() as u64 {
        return Err(ContractError::UnreachableThreshold {});
    }

    // a duplicate address would let one owner confirm with double weight
    let mut owners = Vec::with_capacity(msg.owners.len());
    for owner in msg.owners.iter() {
        let addr = deps.api.addr_validate(owner)?;
        if owners.contains(&addr) {
            return Err(ContractError::DuplicateOwner {
                owner: owner.clone(),
            });
        }
        owners.push(addr);
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let cfg = Config {
        owners,
        required: msg.required,
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
        ExecuteMsg::Deposit {} => execute_deposit(info),
        ExecuteMsg::Propose {
            destination,
            amount,
        } => execute_propose(deps, info, destination, amount),
        ExecuteMsg::Confirm { id } => execute_confirm(deps, env, info, id),
        ExecuteMsg::Execute { id } => execute_execute(deps, env, info, id),
    }
}

pub fn execute_deposit(info: MessageInfo) -> Result<Response, ContractError> {
    // funds attached to the call are credited by the bank module before we
    // run, so there is nothing to do beyond acknowledging them
    let deposited = info
        .funds
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(",");
    Ok(Response::new()
        .add_attribute("action", "deposit")
        .add_attribute("sender", info.sender)
        .add_attribute("deposited", deposited))
}

pub fn execute_propose(
    deps: DepsMut,
    info: MessageInfo,
    destination: String,
    amount: Coin,
) -> Result<Response, ContractError> {
    let cfg = CONFIG.load(deps.storage)?;
    if !cfg.is_owner(&info.sender) {
        return Err(ContractError::Unauthorized {});
    }

    let destination = deps.api.addr_validate(&destination)?;
    let tx = Transaction {
        destination,
        amount,
        executed: false,
    };
    let id = next_id(deps.storage)?;
    TRANSACTIONS.save(deps.storage, id, &tx)?;

    // the proposer's own confirmation is not recorded; proposing and
    // confirming are separate votes
    Ok(Response::new()
        .add_attribute("action", "propose")
        .add_attribute("sender", info.sender)
        .add_attribute("transaction_id", id.to_string()))
}

pub fn execute_confirm(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    id: u64,
) -> Result<Response, ContractError> {
    let cfg = CONFIG.load(deps.storage)?;
    if !cfg.is_owner(&info.sender) {
        return Err(ContractError::Unauthorized {});
    }
    let tx = TRANSACTIONS
        .may_load(deps.storage, id)?
        .ok_or(ContractError::NotFound { id })?;
    if tx.executed {
        return Err(ContractError::AlreadyExecuted { id });
    }

    // set insertion: a repeat confirmation overwrites itself and the count
    // stays unchanged
    CONFIRMATIONS.save(deps.storage, (id, &info.sender), &Empty {})?;
    let count = confirmation_count(deps.storage, id)?;

    let mut res = Response::new()
        .add_attribute("action", "confirm")
        .add_attribute("sender", info.sender)
        .add_attribute("transaction_id", id.to_string())
        .add_attribute("confirmations", count.to_string());

    // the threshold-reaching confirmation triggers the payout in the same
    // call, but only if the wallet can already cover it; otherwise the vote
    // stands and an explicit Execute picks it up once funds arrive
    if count >= cfg.required {
        let balance = deps
            .querier
            .query_balance(&env.contract.address, &tx.amount.denom)?;
        if balance.amount >= tx.amount.amount {
            let payout = start_payout(deps.storage, id, &tx)?;
            res = res.add_attribute("executed", "true").add_message(payout);
        }
    }

    Ok(res)
}

pub fn execute_execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    id: u64,
) -> Result<Response, ContractError> {
    let cfg = CONFIG.load(deps.storage)?;
    if !cfg.is_owner(&info.sender) {
        return Err(ContractError::Unauthorized {});
    }
    let tx = TRANSACTIONS
        .may_load(deps.storage, id)?
        .ok_or(ContractError::NotFound { id })?;
    if tx.executed {
        return Err(ContractError::AlreadyExecuted { id });
    }

    let count = confirmation_count(deps.storage, id)?;
    if count < cfg.required {
        return Err(ContractError::InsufficientConfirmations {});
    }

    let balance = deps
        .querier
        .query_balance(&env.contract.address, &tx.amount.denom)?;
    if balance.amount < tx.amount.amount {
        return Err(ContractError::InsufficientFunds {});
    }

    let payout = start_payout(deps.storage, id, &tx)?;
    Ok(Response::new()
        .add_attribute("action", "execute")
        .add_attribute("sender", info.sender)
        .add_attribute("transaction_id", id.to_string())
        .add_message(payout))
}

/// Marks the transaction executed and builds the outgoing transfer.
/// The flag is stored before the bank message is emitted, so a reentrant
/// call from the destination always observes the transaction as executed
/// and cannot trigger a second payout.
fn start_payout(storage: &mut dyn Storage, id: u64, tx: &Transaction) -> StdResult<BankMsg> {
    let executed = Transaction {
        executed: true,
        ..tx.clone()
    };
    TRANSACTIONS.save(storage, id, &executed)?;
    Ok(BankMsg::Send {
        to_address: tx.destination.to_string(),
        amount: vec![tx.amount.clone()],
    })
}

pub fn confirmation_count(storage: &dyn Storage, id: u64) -> StdResult<u64> {
    let owners = CONFIRMATIONS
        .prefix(id)
        .keys(storage, None, None, Order::Ascending)
        .collect::<StdResult<Vec<_>>>()?;
    Ok(owners.len() as u64)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::ConfirmationCount { id } => to_binary(&query_confirmation_count(deps, id)?),
        QueryMsg::IsConfirmed { id } => to_binary(&query_is_confirmed(deps, id)?),
        QueryMsg::TransactionCount {} => to_binary(&query_transaction_count(deps)?),
        QueryMsg::Transaction { id } => to_binary(&query_transaction(deps, id)?),
        QueryMsg::ListTransactions { start_after, limit } => {
            to_binary(&list_transactions(deps, start_after, limit)?)
        }
        QueryMsg::Owner { index } => to_binary(&query_owner(deps, index)?),
        QueryMsg::ListOwners {} => to_binary(&list_owners(deps)?),
        QueryMsg::Required {} => to_binary(&query_required(deps)?),
        QueryMsg::ListConfirmations {
            id,
            start_after,
            limit,
        } => to_binary(&list_confirmations(deps, id, start_after, limit)?),
    }
}

fn query_confirmation_count(deps: Deps, id: u64) -> StdResult<ConfirmationCountResponse> {
    // fails for an id that was never assigned
    TRANSACTIONS.load(deps.storage, id)?;
    let count = confirmation_count(deps.storage, id)?;
    Ok(ConfirmationCountResponse { count })
}

fn query_is_confirmed(deps: Deps, id: u64) -> StdResult<ConfirmedResponse> {
    TRANSACTIONS.load(deps.storage, id)?;
    let cfg = CONFIG.load(deps.storage)?;
    let count = confirmation_count(deps.storage, id)?;
    Ok(ConfirmedResponse {
        confirmed: count >= cfg.required,
    })
}

fn query_transaction_count(deps: Deps) -> StdResult<TransactionCountResponse> {
    let count = TRANSACTION_COUNT.may_load(deps.storage)?.unwrap_or_default();
    Ok(TransactionCountResponse { count })
}

fn query_transaction(deps: Deps, id: u64) -> StdResult<TransactionResponse> {
    let tx = TRANSACTIONS.load(deps.storage, id)?;
    Ok(map_transaction(id, tx))
}

fn map_transaction(id: u64, tx: Transaction) -> TransactionResponse {
    TransactionResponse {
        id,
        destination: tx.destination.into_string(),
        amount: tx.amount,
        executed: tx.executed,
    }
}

// settings for pagination
const MAX_LIMIT: u32 = 30;
const DEFAULT_LIMIT: u32 = 10;

fn list_transactions(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<TransactionListResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);
    let transactions: StdResult<Vec<_>> = TRANSACTIONS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(id, tx)| map_transaction(id, tx)))
        .collect();

    Ok(TransactionListResponse {
        transactions: transactions?,
    })
}

fn query_owner(deps: Deps, index: u32) -> StdResult<OwnerResponse> {
    let cfg = CONFIG.load(deps.storage)?;
    let owner = cfg
        .owners
        .get(index as usize)
        .ok_or_else(|| StdError::not_found("owner"))?;
    Ok(OwnerResponse {
        owner: owner.to_string(),
    })
}

fn list_owners(deps: Deps) -> StdResult<OwnerListResponse> {
    let cfg = CONFIG.load(deps.storage)?;
    Ok(OwnerListResponse {
        owners: cfg.owners.iter().map(|o| o.to_string()).collect(),
    })
}

fn query_required(deps: Deps) -> StdResult<RequiredResponse> {
    let cfg = CONFIG.load(deps.storage)?;
    Ok(RequiredResponse {
        required: cfg.required,
    })
}

fn list_confirmations(
    deps: Deps,
    id: u64,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<ConfirmationListResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_addr = start_after
        .map(|s| deps.api.addr_validate(&s))
        .transpose()?;
    let start = start_addr.as_ref().map(Bound::exclusive);

    let confirmations: StdResult<Vec<_>> = CONFIRMATIONS
        .prefix(id)
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|addr| addr.to_string()))
        .collect();

    Ok(ConfirmationListResponse {
        confirmations: confirmations?,
    })
}
