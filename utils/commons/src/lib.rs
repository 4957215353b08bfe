//! It exposes all common structs and types shared by the auction ledger and
//! the token custody contract.
#![cfg_attr(not(feature = "std"), no_std)]
pub use crate::{constants::*, errors::*, structs::*, types::*};
use concordium_cis2::*;
use concordium_std::*;

#[cfg(any(test, feature = "test"))]
pub mod test;

mod constants;
mod errors;
mod structs;
mod types;
