#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{coin, to_binary, Addr, Binary, Deps, Env, StdError, StdResult};
use cw721::{NumTokensResponse, OwnerOfResponse};

use crate::msg::{ConfigResponse, QueryMsg};
use crate::state::{
    CONFIG, IS_PUBLIC_SALE_ACTIVE, MAX_SUPPLY, MINT_COUNTS, MINT_LIMIT_PER_WALLET, NATIVE_DENOM,
    PRICE, TOKEN_OWNERS, TOKEN_URI_SUFFIX, TOTAL_MINTED,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_binary(&query_config(deps)?),
        QueryMsg::Owner {} => to_binary(&query_owner(deps)?),
        QueryMsg::SaleActive {} => to_binary(&query_sale_active(deps)?),
        QueryMsg::MintCount { address } => to_binary(&query_mint_count(deps, address)?),
        QueryMsg::TotalMinted {} => to_binary(&query_total_minted(deps)?),
        QueryMsg::OwnerOf { token_id } => to_binary(&query_owner_of(deps, token_id)?),
        QueryMsg::TokenUri { token_id } => to_binary(&query_token_uri(deps, token_id)?),
        QueryMsg::ContractUri {} => to_binary(&query_contract_uri(deps)?),
    }
}

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner.to_string(),
        max_supply: MAX_SUPPLY,
        price: coin(PRICE, NATIVE_DENOM),
        mint_limit_per_wallet: MINT_LIMIT_PER_WALLET,
        base_uri: config.base_uri,
        payout_address1: config.payout_address1.to_string(),
        payout_address2: config.payout_address2.to_string(),
        is_public_sale_active: IS_PUBLIC_SALE_ACTIVE.load(deps.storage)?,
        total_minted: TOTAL_MINTED.load(deps.storage)?,
    })
}

pub fn query_owner(deps: Deps) -> StdResult<String> {
    let config = CONFIG.load(deps.storage)?;
    Ok(config.owner.to_string())
}

pub fn query_sale_active(deps: Deps) -> StdResult<bool> {
    IS_PUBLIC_SALE_ACTIVE.load(deps.storage)
}

/// Count of tokens minted by a wallet, zero for wallets that never minted
pub fn query_mint_count(deps: Deps, address: String) -> StdResult<u32> {
    let addr = deps.api.addr_validate(&address)?;
    Ok(MINT_COUNTS.may_load(deps.storage, &addr)?.unwrap_or_default())
}

pub fn query_total_minted(deps: Deps) -> StdResult<NumTokensResponse> {
    Ok(NumTokensResponse {
        count: TOTAL_MINTED.load(deps.storage)? as u64,
    })
}

pub fn query_owner_of(deps: Deps, token_id: u32) -> StdResult<OwnerOfResponse> {
    let owner = load_token_owner(deps, token_id)?;
    Ok(OwnerOfResponse {
        owner: owner.to_string(),
        approvals: vec![],
    })
}

pub fn query_token_uri(deps: Deps, token_id: u32) -> StdResult<String> {
    let config = CONFIG.load(deps.storage)?;
    load_token_owner(deps, token_id)?;
    Ok(format!(
        "{}{}{}",
        config.base_uri, token_id, TOKEN_URI_SUFFIX
    ))
}

pub fn query_contract_uri(deps: Deps) -> StdResult<String> {
    let config = CONFIG.load(deps.storage)?;
    Ok(config.base_uri)
}

fn load_token_owner(deps: Deps, token_id: u32) -> StdResult<Addr> {
    TOKEN_OWNERS
        .may_load(deps.storage, token_id)?
        .ok_or_else(|| StdError::not_found(format!("token {}", token_id)))
}
