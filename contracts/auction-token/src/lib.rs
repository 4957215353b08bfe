//! CIS-2 fungible token contract holding the mints sold by the `MintAuction`
//! contract. The contract owner registers mints and mints units to any
//! address, including an auction contract which then holds them in custody.
#![cfg_attr(not(feature = "std"), no_std)]
use crate::structs::*;
use commons::*;
use concordium_cis2::*;
use concordium_std::*;

mod contract;
mod impls;
mod structs;
