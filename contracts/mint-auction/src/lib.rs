//! A mint auction smart contract.
//!
//! # Description
//! Every auction sells one unit of a CIS-2 fungible token mint, identified by
//! the token contract address and token ID. An instance keeps at most one
//! auction per mint.
//!
//! An auction is opened with `start` and accepts strictly increasing bids
//! until its end time. Bids are pledges: no CCD moves while bidding. Once the
//! end time is reached, the highest bidder settles the auction with `claim`,
//! attaching the winning bid. The contract then hands the unit it holds in
//! custody to the winner and forwards the payment to the auction treasury.
//! Units enter custody through the CIS-2 `onReceivingCIS2` hook.

#![cfg_attr(not(feature = "std"), no_std)]

mod contract;
mod custody;
mod events;
mod external;
mod state;
