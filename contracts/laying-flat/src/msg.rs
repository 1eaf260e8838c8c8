use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Coin;
use cw721::{NumTokensResponse, OwnerOfResponse};

#[cw_serde]
pub struct InstantiateMsg {
    pub base_uri: String,
    pub payout_address1: String,
    pub payout_address2: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Mint `quantity` tokens to the sender against the attached payment
    Mint { quantity: u32 },
    /// Open or close the public sale. Owner only.
    SetPublicSaleActive { active: bool },
    /// Split the full contract balance between the two payout addresses. Owner only.
    Withdraw {},
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(String)]
    Owner {},
    #[returns(bool)]
    SaleActive {},
    #[returns(u32)]
    MintCount { address: String },
    #[returns(NumTokensResponse)]
    TotalMinted {},
    #[returns(OwnerOfResponse)]
    OwnerOf { token_id: u32 },
    #[returns(String)]
    TokenUri { token_id: u32 },
    #[returns(String)]
    ContractUri {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: String,
    pub max_supply: u32,
    pub price: Coin,
    pub mint_limit_per_wallet: u32,
    pub base_uri: String,
    pub payout_address1: String,
    pub payout_address2: String,
    pub is_public_sale_active: bool,
    pub total_minted: u32,
}
