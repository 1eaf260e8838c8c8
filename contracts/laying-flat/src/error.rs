use cosmwasm_std::StdError;
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("Caller is not the owner")]
    NotOwner {},

    #[error("Sale is not active")]
    SaleNotActive {},

    #[error("Invalid mint quantity")]
    InvalidQuantity {},

    #[error("Minting limit exceeded")]
    MintLimitExceeded {},

    #[error("Exceeds max supply")]
    SupplyExceeded {},

    #[error("Insufficient payment, got: {got}, expected: {expected}")]
    InsufficientPayment { got: u128, expected: u128 },

    #[error("Nothing to withdraw")]
    ZeroBalance {},
}
