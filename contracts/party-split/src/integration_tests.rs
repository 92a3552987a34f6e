#![cfg(test)]

use cosmwasm_std::{coin, coins, Addr, Uint128};
use cw_multi_test::{App, Contract, ContractWrapper, Executor};

use crate::contract::{execute, instantiate, query};
use crate::msg::{ExecuteMsg, InstantiateMsg};

const DENOM: &str = "ustars";
const DEPOSIT: u128 = 2_000_000;

const HOST: &str = "host";
const VENUE: &str = "venue";
const FRIENDS: [&str; 4] = ["anna", "bert", "carla", "dmitri"];

pub fn contract_party() -> Box<dyn Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(execute, instantiate, query);
    Box::new(contract)
}

/// Instantiates the party and lets all four friends rsvp their deposit.
fn setup_party() -> (App, Addr) {
    let mut app = App::new(|router, _, storage| {
        for friend in FRIENDS {
            router
                .bank
                .init_balance(storage, &Addr::unchecked(friend), coins(DEPOSIT, DENOM))
                .unwrap();
        }
    });

    let code_id = app.store_code(contract_party());
    let party = app
        .instantiate_contract(
            code_id,
            Addr::unchecked(HOST),
            &InstantiateMsg {
                deposit: coin(DEPOSIT, DENOM),
            },
            &[],
            "party",
            None,
        )
        .unwrap();

    for friend in FRIENDS {
        app.execute_contract(
            Addr::unchecked(friend),
            party.clone(),
            &ExecuteMsg::Rsvp {},
            &coins(DEPOSIT, DENOM),
        )
        .unwrap();
    }

    (app, party)
}

fn balance(app: &App, addr: &str) -> Uint128 {
    app.wrap().query_balance(addr, DENOM).unwrap().amount
}

fn pay_bill(app: &mut App, party: &Addr, amount: u128) {
    app.execute_contract(
        Addr::unchecked(HOST),
        party.clone(),
        &ExecuteMsg::PayBill {
            venue: VENUE.to_string(),
            amount: Uint128::new(amount),
        },
        &[],
    )
    .unwrap();
}

#[test]
fn full_pot_bill_means_no_refunds() {
    let (mut app, party) = setup_party();
    assert_eq!(balance(&app, party.as_str()), Uint128::new(4 * DEPOSIT));

    pay_bill(&mut app, &party, 4 * DEPOSIT);

    assert_eq!(balance(&app, VENUE), Uint128::new(4 * DEPOSIT));
    assert_eq!(balance(&app, party.as_str()), Uint128::zero());
    for friend in FRIENDS {
        assert_eq!(balance(&app, friend), Uint128::zero());
    }
}

#[test]
fn half_pot_bill_refunds_half_a_deposit_each() {
    let (mut app, party) = setup_party();

    pay_bill(&mut app, &party, 2 * DEPOSIT);

    assert_eq!(balance(&app, VENUE), Uint128::new(2 * DEPOSIT));
    assert_eq!(balance(&app, party.as_str()), Uint128::zero());
    for friend in FRIENDS {
        assert_eq!(balance(&app, friend), Uint128::new(DEPOSIT / 2));
    }
}

#[test]
fn small_bill_refunds_most_of_the_deposit() {
    let (mut app, party) = setup_party();

    // bill of one deposit over four friends: 1_500_000 back each
    pay_bill(&mut app, &party, DEPOSIT);

    assert_eq!(balance(&app, VENUE), Uint128::new(DEPOSIT));
    assert_eq!(balance(&app, party.as_str()), Uint128::zero());
    for friend in FRIENDS {
        assert_eq!(balance(&app, friend), Uint128::new(3 * DEPOSIT / 4));
    }
}
