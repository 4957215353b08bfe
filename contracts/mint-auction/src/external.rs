use commons::Token;
use concordium_std::*;

/// Parameter of the `start` function.
#[derive(Debug, Clone, Serialize, SchemaType)]
pub struct StartParams {
    /// Token mint to be auctioned.
    pub token: Token,
    /// Account receiving the winning bid.
    pub treasury: AccountAddress,
    /// Time the auction accepts bids, counted from the start.
    pub duration: Duration,
}

/// Parameter of the `bid` function.
#[derive(Debug, Clone, Serialize, SchemaType)]
pub struct BidParams {
    pub token: Token,
    /// Pledged amount, paid on claim.
    pub amount: Amount,
}

/// Phase of an auction at a given slot time.
#[derive(Debug, Clone, Copy, Serialize, SchemaType, PartialEq, Eq)]
pub enum AuctionPhase {
    /// Accepting bids.
    Open,
    /// Past the end time, waiting for the winner to claim.
    Closed,
    /// Settled.
    Claimed,
}

/// Auction data returned by every ledger function.
#[derive(Debug, Clone, Serialize, SchemaType, PartialEq, Eq)]
pub struct AuctionView {
    pub token: Token,
    pub treasury: AccountAddress,
    pub end_time: Timestamp,
    pub highest_bid: Amount,
    /// `None` until the first accepted bid.
    pub highest_bidder: Option<AccountAddress>,
    pub claimed: bool,
    /// Phase at the slot time of the call.
    pub phase: AuctionPhase,
}
