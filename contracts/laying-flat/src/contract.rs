#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    coins, ensure, BankMsg, DepsMut, Env, Event, MessageInfo, Response, StdError,
};
use cw2::set_contract_version;
use cw_utils::may_pay;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg};
use crate::state::{
    Config, CONFIG, IS_PUBLIC_SALE_ACTIVE, MAX_SUPPLY, MINT_COUNTS, MINT_LIMIT_PER_WALLET,
    NATIVE_DENOM, PRICE, TOKEN_OWNERS, TOTAL_MINTED,
};

// version info for migration info
pub const CONTRACT_NAME: &str = "crates.io:laying-flat";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        owner: info.sender.clone(),
        base_uri: msg.base_uri,
        payout_address1: deps.api.addr_validate(&msg.payout_address1)?,
        payout_address2: deps.api.addr_validate(&msg.payout_address2)?,
    };
    CONFIG.save(deps.storage, &config)?;
    IS_PUBLIC_SALE_ACTIVE.save(deps.storage, &false)?;
    TOTAL_MINTED.save(deps.storage, &0u32)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", info.sender))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Mint { quantity } => execute_mint(deps, info, quantity),
        ExecuteMsg::SetPublicSaleActive { active } => {
            execute_set_public_sale_active(deps, info, active)
        }
        ExecuteMsg::Withdraw {} => execute_withdraw(deps, env, info),
    }
}

pub fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    quantity: u32,
) -> Result<Response, ContractError> {
    if quantity == 0 {
        return Err(ContractError::InvalidQuantity {});
    }

    if !IS_PUBLIC_SALE_ACTIVE.load(deps.storage)? {
        return Err(ContractError::SaleNotActive {});
    }

    let minted = MINT_COUNTS
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_default();
    if quantity > MINT_LIMIT_PER_WALLET.saturating_sub(minted) {
        return Err(ContractError::MintLimitExceeded {});
    }

    let total_minted = TOTAL_MINTED.load(deps.storage)?;
    if quantity > MAX_SUPPLY.saturating_sub(total_minted) {
        return Err(ContractError::SupplyExceeded {});
    }

    let payment = may_pay(&info, NATIVE_DENOM)?;
    let expected = PRICE * quantity as u128;
    if payment.u128() < expected {
        return Err(ContractError::InsufficientPayment {
            got: payment.u128(),
            expected,
        });
    }

    // all checks passed, commit the mint
    MINT_COUNTS.save(deps.storage, &info.sender, &(minted + quantity))?;
    TOTAL_MINTED.save(deps.storage, &(total_minted + quantity))?;

    let mut res = Response::new()
        .add_attribute("action", "mint")
        .add_attribute("sender", info.sender.clone());
    for token_id in (total_minted + 1)..=(total_minted + quantity) {
        TOKEN_OWNERS.save(deps.storage, token_id, &info.sender)?;
        res = res.add_event(
            Event::new("minted_an_nft")
                .add_attribute("buyer", info.sender.clone())
                .add_attribute("token_id", token_id.to_string()),
        );
    }

    Ok(res)
}

pub fn execute_set_public_sale_active(
    deps: DepsMut,
    info: MessageInfo,
    active: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if config.owner != info.sender {
        return Err(ContractError::NotOwner {});
    }

    IS_PUBLIC_SALE_ACTIVE.save(deps.storage, &active)?;

    let event = Event::new("set_public_sale_active")
        .add_attribute("active", active.to_string())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if config.owner != info.sender {
        return Err(ContractError::NotOwner {});
    }

    let balance = deps
        .querier
        .query_balance(env.contract.address, NATIVE_DENOM)?;
    if balance.amount.is_zero() {
        return Err(ContractError::ZeroBalance {});
    }

    // second payout gets the floored half, the first any odd remainder
    let second = balance.amount.u128() / 2;
    let first = balance.amount.u128() - second;

    let msgs = vec![
        BankMsg::Send {
            to_address: config.payout_address1.to_string(),
            amount: coins(first, NATIVE_DENOM),
        },
        BankMsg::Send {
            to_address: config.payout_address2.to_string(),
            amount: coins(second, NATIVE_DENOM),
        },
    ];

    let event = Event::new("withdraw")
        .add_attribute("amount", balance.amount.to_string())
        .add_attribute("payout_address1", config.payout_address1.to_string())
        .add_attribute("payout_address2", config.payout_address2.to_string());
    Ok(Response::new().add_event(event).add_messages(msgs))
}

#[cfg_attr(not(feature = "library"), entry_point)]
#[allow(clippy::cmp_owned)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let prev_contract_version = cw2::get_contract_version(deps.storage)?;

    ensure!(
        prev_contract_version.contract == CONTRACT_NAME,
        StdError::generic_err("Invalid contract name for migration")
    );

    ensure!(
        prev_contract_version.version < CONTRACT_VERSION.to_string(),
        StdError::generic_err("Must upgrade contract version")
    );

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new().add_event(
        Event::new("migrate")
            .add_attribute("from_version", prev_contract_version.version)
            .add_attribute("to_version", CONTRACT_VERSION),
    ))
}
