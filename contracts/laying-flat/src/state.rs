use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

/// 20
pub const MAX_SUPPLY: u32 = 20;
/// 2
pub const MINT_LIMIT_PER_WALLET: u32 = 2;
/// 0.1 STARS
pub const PRICE: u128 = 100_000;
pub const NATIVE_DENOM: &str = "ustars";

/// Appended to `base_uri` + token id to form per-token metadata URIs
pub const TOKEN_URI_SUFFIX: &str = ".token.json";

#[cw_serde]
pub struct Config {
    pub owner: Addr,
    pub base_uri: String,
    pub payout_address1: Addr,
    pub payout_address2: Addr,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Public sale gate, toggled only by the owner
pub const IS_PUBLIC_SALE_ACTIVE: Item<bool> = Item::new("is_public_sale_active");

/// Supply counter, also the last assigned token id
pub const TOTAL_MINTED: Item<u32> = Item::new("total_minted");

// Holds all minting wallets and their mint count
pub const MINT_COUNTS: Map<&Addr, u32> = Map::new("mint_counts");

/// Token id to owner, ids assigned sequentially starting at 1
pub const TOKEN_OWNERS: Map<u32, Addr> = Map::new("token_owners");
