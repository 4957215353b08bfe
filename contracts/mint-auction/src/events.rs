use commons::{ContractTokenAmount, Token, BIDING_TAG, CLAIM_TAG, DEPOSIT_TAG, START_AUCTION_TAG};
use concordium_std::*;

/// Auction start event data.
#[derive(Debug, Serial)]
pub struct StartEvent<'a> {
    /// Auctioned token mint.
    pub token: &'a Token,
    /// Account receiving the winning bid.
    pub treasury: &'a AccountAddress,
    /// Time from which bids are no longer accepted.
    pub end_time: Timestamp,
}

/// Bid event data.
#[derive(Debug, Serial)]
pub struct BidEvent<'a> {
    pub token: &'a Token,
    /// Bidder account address.
    pub bidder: &'a AccountAddress,
    /// Bid amount.
    pub amount: Amount,
    /// Previous highest bidder, if any.
    pub outbid: Option<AccountAddress>,
}

/// Claim event data.
#[derive(Debug, Serial)]
pub struct ClaimEvent<'a> {
    pub token: &'a Token,
    /// Address of the auction winner.
    pub winner: &'a AccountAddress,
    /// Account the price was paid to.
    pub treasury: &'a AccountAddress,
    /// Winning auction bid.
    pub price: Amount,
}

/// Custody deposit event data.
#[derive(Debug, Serial)]
pub struct DepositEvent<'a> {
    pub token: &'a Token,
    /// Previous holder of the deposited units.
    pub from: &'a Address,
    pub amount: ContractTokenAmount,
}

/// Tagged Custom event to be serialized for the event log.
#[derive(Debug)]
pub enum AuctionEvents<'a> {
    Start(StartEvent<'a>),
    Bid(BidEvent<'a>),
    Claim(ClaimEvent<'a>),
    Deposit(DepositEvent<'a>),
}

impl<'a> AuctionEvents<'a> {
    pub fn start(token: &'a Token, treasury: &'a AccountAddress, end_time: Timestamp) -> Self {
        Self::Start(StartEvent {
            token,
            treasury,
            end_time,
        })
    }

    pub fn bid(
        token: &'a Token,
        bidder: &'a AccountAddress,
        amount: Amount,
        outbid: Option<AccountAddress>,
    ) -> Self {
        Self::Bid(BidEvent {
            token,
            bidder,
            amount,
            outbid,
        })
    }

    pub fn claim(
        token: &'a Token,
        winner: &'a AccountAddress,
        treasury: &'a AccountAddress,
        price: Amount,
    ) -> Self {
        Self::Claim(ClaimEvent {
            token,
            winner,
            treasury,
            price,
        })
    }

    pub fn deposit(token: &'a Token, from: &'a Address, amount: ContractTokenAmount) -> Self {
        Self::Deposit(DepositEvent {
            token,
            from,
            amount,
        })
    }
}

impl<'a> Serial for AuctionEvents<'a> {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            AuctionEvents::Start(event) => {
                out.write_u8(START_AUCTION_TAG)?;
                event.serial(out)
            }
            AuctionEvents::Bid(event) => {
                out.write_u8(BIDING_TAG)?;
                event.serial(out)
            }
            AuctionEvents::Claim(event) => {
                out.write_u8(CLAIM_TAG)?;
                event.serial(out)
            }
            AuctionEvents::Deposit(event) => {
                out.write_u8(DEPOSIT_TAG)?;
                event.serial(out)
            }
        }
    }
}
