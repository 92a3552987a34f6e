#![cfg(test)]

use cosmwasm_std::{coin, coins, Addr, Coin, Empty, Uint128};
use cw_multi_test::{App, Contract, ContractWrapper, Executor};

use crate::contract::{execute, instantiate, query};
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg, TransactionResponse};
use crate::ContractError;

const DENOM: &str = "ustars";

fn mock_app(init_funds: &[(&str, Vec<Coin>)]) -> App {
    App::new(|router, _, storage| {
        for (addr, funds) in init_funds {
            router
                .bank
                .init_balance(storage, &Addr::unchecked(*addr), funds.clone())
                .unwrap();
        }
    })
}

pub fn contract_multisig() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(execute, instantiate, query);
    Box::new(contract)
}

fn instantiate_multisig(app: &mut App, owners: &[&str], required: u64) -> Addr {
    let code_id = app.store_code(contract_multisig());
    let msg = InstantiateMsg {
        owners: owners.iter().map(|s| s.to_string()).collect(),
        required,
    };
    app.instantiate_contract(
        code_id,
        Addr::unchecked(owners[0]),
        &msg,
        &[],
        "multisig wallet",
        None,
    )
    .unwrap()
}

fn balance(app: &App, addr: &str) -> Uint128 {
    app.wrap().query_balance(addr, DENOM).unwrap().amount
}

// 3 owners, threshold 2, wallet funded with 1000. The second confirmation
// fires the payout inside the confirming call.
#[test]
fn two_of_three_pays_out_on_second_confirmation() {
    let mut app = mock_app(&[("alice", coins(1000, DENOM))]);
    let multisig = instantiate_multisig(&mut app, &["alice", "bob", "carol"], 2);

    // alice funds the wallet
    app.execute_contract(
        Addr::unchecked("alice"),
        multisig.clone(),
        &ExecuteMsg::Deposit {},
        &coins(1000, DENOM),
    )
    .unwrap();
    assert_eq!(balance(&app, multisig.as_str()), Uint128::new(1000));

    // alice proposes a 500 transfer, id 0
    app.execute_contract(
        Addr::unchecked("alice"),
        multisig.clone(),
        &ExecuteMsg::Propose {
            destination: "beneficiary".to_string(),
            amount: coin(500, DENOM),
        },
        &[],
    )
    .unwrap();

    // first confirmation does not move funds
    app.execute_contract(
        Addr::unchecked("alice"),
        multisig.clone(),
        &ExecuteMsg::Confirm { id: 0 },
        &[],
    )
    .unwrap();
    assert_eq!(balance(&app, "beneficiary"), Uint128::zero());

    // the second one does
    app.execute_contract(
        Addr::unchecked("bob"),
        multisig.clone(),
        &ExecuteMsg::Confirm { id: 0 },
        &[],
    )
    .unwrap();
    assert_eq!(balance(&app, "beneficiary"), Uint128::new(500));
    assert_eq!(balance(&app, multisig.as_str()), Uint128::new(500));

    let tx: TransactionResponse = app
        .wrap()
        .query_wasm_smart(&multisig, &QueryMsg::Transaction { id: 0 })
        .unwrap();
    assert!(tx.executed);

    // replaying execution cannot drain the wallet again
    let err = app
        .execute_contract(
            Addr::unchecked("carol"),
            multisig.clone(),
            &ExecuteMsg::Execute { id: 0 },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::AlreadyExecuted { id: 0 }
    );
    assert_eq!(balance(&app, multisig.as_str()), Uint128::new(500));
    assert_eq!(balance(&app, "beneficiary"), Uint128::new(500));
}

// An empty wallet collects a full set of confirmations; the payout happens
// only via an explicit execute once funds have arrived.
#[test]
fn confirmed_transaction_executes_after_funding() {
    let mut app = mock_app(&[("bob", coins(1000, DENOM))]);
    let multisig = instantiate_multisig(&mut app, &["alice"], 1);

    app.execute_contract(
        Addr::unchecked("alice"),
        multisig.clone(),
        &ExecuteMsg::Propose {
            destination: "beneficiary".to_string(),
            amount: coin(500, DENOM),
        },
        &[],
    )
    .unwrap();

    // the vote is recorded even though the wallet cannot pay yet
    app.execute_contract(
        Addr::unchecked("alice"),
        multisig.clone(),
        &ExecuteMsg::Confirm { id: 0 },
        &[],
    )
    .unwrap();
    assert_eq!(balance(&app, "beneficiary"), Uint128::zero());

    let err = app
        .execute_contract(
            Addr::unchecked("alice"),
            multisig.clone(),
            &ExecuteMsg::Execute { id: 0 },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::InsufficientFunds {}
    );

    // anyone can top the wallet up, even a non-owner
    app.execute_contract(
        Addr::unchecked("bob"),
        multisig.clone(),
        &ExecuteMsg::Deposit {},
        &coins(1000, DENOM),
    )
    .unwrap();

    app.execute_contract(
        Addr::unchecked("alice"),
        multisig.clone(),
        &ExecuteMsg::Execute { id: 0 },
        &[],
    )
    .unwrap();
    assert_eq!(balance(&app, "beneficiary"), Uint128::new(500));
    assert_eq!(balance(&app, multisig.as_str()), Uint128::new(500));
}

// Plain bank sends also fund the wallet; no contract call is needed.
#[test]
fn bank_send_funds_the_wallet() {
    let mut app = mock_app(&[("alice", coins(300, DENOM))]);
    let multisig = instantiate_multisig(&mut app, &["alice", "bob"], 2);

    app.send_tokens(Addr::unchecked("alice"), multisig.clone(), &coins(300, DENOM))
        .unwrap();
    assert_eq!(balance(&app, multisig.as_str()), Uint128::new(300));
}
