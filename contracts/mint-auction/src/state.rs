use commons::{CustomContractError, Token};
use concordium_std::*;

use crate::external::{AuctionPhase, AuctionView};

/// Bidding and settlement record of a single token mint.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Auction {
    /// Account that receives the winning bid.
    pub treasury: AccountAddress,
    /// Bids are accepted strictly before this time, claims from it on.
    pub end_time: Timestamp,
    pub highest_bid: Amount,
    /// No bidder is recorded while the highest bid is zero.
    pub highest_bidder: Option<AccountAddress>,
    pub claimed: bool,
}

impl Auction {
    pub fn new(treasury: AccountAddress, end_time: Timestamp) -> Self {
        Self {
            treasury,
            end_time,
            highest_bid: Amount::zero(),
            highest_bidder: None,
            claimed: false,
        }
    }

    /// Get auction phase at given slot_time
    pub fn phase(&self, slot_time: Timestamp) -> AuctionPhase {
        if self.claimed {
            AuctionPhase::Claimed
        } else if slot_time < self.end_time {
            AuctionPhase::Open
        } else {
            AuctionPhase::Closed
        }
    }

    fn view(&self, token: Token, slot_time: Timestamp) -> AuctionView {
        AuctionView {
            token,
            treasury: self.treasury,
            end_time: self.end_time,
            highest_bid: self.highest_bid,
            highest_bidder: self.highest_bidder,
            claimed: self.claimed,
            phase: self.phase(slot_time),
        }
    }
}

/// Outcome of a successful claim. The winning bid MUST be forwarded to the
/// treasury and the auctioned unit to the winner.
#[must_use]
#[derive(Debug, PartialEq, Eq)]
pub struct Settlement {
    pub winner: AccountAddress,
    pub treasury: AccountAddress,
    pub price: Amount,
}

/// The contract state.
#[derive(Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Auctions by token mint.
    pub auctions: StateMap<Token, Auction, S>,
    /// Accounts that deposited the auctioned unit of a token mint.
    pub deposits: StateMap<Token, AccountAddress, S>,
}

// Every transition checks all of its preconditions before writing.
impl<S: HasStateApi> State<S> {
    /// Create a new state with no auctions.
    pub fn new(state_builder: &mut StateBuilder<S>) -> Self {
        State {
            auctions: state_builder.new_map(),
            deposits: state_builder.new_map(),
        }
    }

    /// Open the auction of `token`. Once its unit was deposited, only the
    /// depositor may start it.
    pub fn start(
        &mut self,
        token: Token,
        treasury: AccountAddress,
        duration: Duration,
        slot_time: Timestamp,
        caller: Address,
    ) -> Result<AuctionView, CustomContractError> {
        // One auction per mint, ever
        ensure!(
            self.auctions.get(&token).is_none(),
            CustomContractError::AlreadyInitialized
        );
        if let Some(depositor) = self.deposits.get(&token) {
            ensure!(
                caller.matches_account(&depositor),
                CustomContractError::Unauthorized
            );
        }
        ensure!(duration.millis() > 0, CustomContractError::InvalidDuration);
        let end_time = slot_time
            .checked_add(duration)
            .ok_or(CustomContractError::InvalidDuration)?;

        let auction = Auction::new(treasury, end_time);
        let view = auction.view(token.clone(), slot_time);
        self.auctions.insert(token, auction);

        Ok(view)
    }

    /// Record a new highest bid. Returns the bidder that got outbid, if any.
    pub fn bid(
        &mut self,
        token: &Token,
        slot_time: Timestamp,
        bidder: AccountAddress,
        amount: Amount,
    ) -> Result<Option<AccountAddress>, CustomContractError> {
        let mut auction = self
            .auctions
            .get_mut(token)
            .ok_or(CustomContractError::UnknownToken)?;

        match auction.phase(slot_time) {
            AuctionPhase::Open => (),
            AuctionPhase::Closed | AuctionPhase::Claimed => {
                bail!(CustomContractError::AuctionEnded)
            }
        }

        // Ties lose
        ensure!(
            amount > auction.highest_bid,
            CustomContractError::BidTooLow
        );

        auction.highest_bid = amount;
        Ok(auction.highest_bidder.replace(bidder))
    }

    /// Mark the auction as settled by `claimant`, who attached `payment`.
    pub fn claim(
        &mut self,
        token: &Token,
        slot_time: Timestamp,
        claimant: AccountAddress,
        payment: Amount,
    ) -> Result<Settlement, CustomContractError> {
        let mut auction = self
            .auctions
            .get_mut(token)
            .ok_or(CustomContractError::UnknownToken)?;

        ensure!(
            slot_time >= auction.end_time,
            CustomContractError::NotEnded
        );
        ensure!(
            auction.highest_bidder == Some(claimant),
            CustomContractError::NotHighestBidder
        );
        ensure!(!auction.claimed, CustomContractError::AlreadyClaimed);
        ensure!(
            payment == auction.highest_bid,
            CustomContractError::PaymentMismatch
        );

        auction.claimed = true;

        Ok(Settlement {
            winner: claimant,
            treasury: auction.treasury,
            price: auction.highest_bid,
        })
    }

    /// Record `depositor` as the seller of the single unit held for `token`.
    pub fn deposit(
        &mut self,
        token: Token,
        depositor: AccountAddress,
    ) -> Result<(), CustomContractError> {
        if let Some(auction) = self.auctions.get(&token) {
            ensure!(!auction.claimed, CustomContractError::AlreadyClaimed);
        }
        ensure!(
            self.deposits.get(&token).is_none(),
            CustomContractError::AlreadyDeposited
        );

        self.deposits.insert(token, depositor);
        Ok(())
    }

    pub fn view(
        &self,
        token: &Token,
        slot_time: Timestamp,
    ) -> Result<AuctionView, CustomContractError> {
        self.auctions
            .get(token)
            .map(|auction| auction.view(token.clone(), slot_time))
            .ok_or(CustomContractError::UnknownToken)
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use concordium_cis2::TokenIdVec;
    use test_infrastructure::*;

    const TREASURY: AccountAddress = AccountAddress([1u8; 32]);
    const ALICE: AccountAddress = AccountAddress([2u8; 32]);
    const BOB: AccountAddress = AccountAddress([3u8; 32]);
    const START: u64 = 1_000;
    const END: u64 = 6_000;

    fn token() -> Token {
        Token::new(
            ContractAddress {
                index: 7,
                subindex: 0,
            },
            TokenIdVec(vec![0, 1]),
        )
    }

    fn at(millis: u64) -> Timestamp {
        Timestamp::from_timestamp_millis(millis)
    }

    fn micro(amount: u64) -> Amount {
        Amount::from_micro_ccd(amount)
    }

    fn started_state(state_builder: &mut TestStateBuilder) -> State<TestStateApi> {
        let mut state = State::new(state_builder);
        state
            .start(
                token(),
                TREASURY,
                Duration::from_millis(END - START),
                at(START),
                Address::Account(TREASURY),
            )
            .expect_report("Starting auction should pass");
        state
    }

    fn stored(state: &State<TestStateApi>) -> Auction {
        state
            .auctions
            .get(&token())
            .map(|auction| (*auction).clone())
            .expect_report("Auction should exist")
    }

    #[concordium_test]
    fn test_phase_boundaries() {
        let mut auction = Auction::new(TREASURY, at(END));
        claim_eq!(auction.phase(at(END - 1)), AuctionPhase::Open);
        claim_eq!(auction.phase(at(END)), AuctionPhase::Closed);
        auction.claimed = true;
        claim_eq!(auction.phase(at(END + 1)), AuctionPhase::Claimed);
    }

    #[concordium_test]
    fn test_start_overflowing_end_time() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = State::new(&mut state_builder);

        let result = state.start(
            token(),
            TREASURY,
            Duration::from_millis(u64::MAX),
            at(START),
            Address::Account(TREASURY),
        );

        claim_eq!(result, Err(CustomContractError::InvalidDuration));
        claim!(state.auctions.get(&token()).is_none());
    }

    /// Accepted bids form a strictly increasing sequence; everything else is
    /// rejected without touching the record.
    #[concordium_test]
    fn test_bids_strictly_increase() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = started_state(&mut state_builder);

        let attempts = [
            (ALICE, 0, false),
            (ALICE, 10, true),
            (BOB, 10, false),
            (BOB, 11, true),
            (ALICE, 5, false),
            (ALICE, 500, true),
            (BOB, 499, false),
            (BOB, 500, false),
        ];

        let mut previous = Amount::zero();
        for (bidder, amount, accepted) in attempts.iter() {
            let before = stored(&state);
            let result = state.bid(&token(), at(START + 1), *bidder, micro(*amount));
            let after = stored(&state);

            if *accepted {
                claim_eq!(result, Ok(before.highest_bidder));
                claim!(after.highest_bid > previous, "Accepted bid must raise the price");
                claim_eq!(after.highest_bidder, Some(*bidder));
                previous = after.highest_bid;
            } else {
                claim_eq!(result, Err(CustomContractError::BidTooLow));
                claim_eq!(after, before, "Rejected bid must not change the auction");
            }
            claim_eq!(after.highest_bidder.is_none(), after.highest_bid == Amount::zero());
        }

        claim_eq!(previous, micro(500));
    }

    #[concordium_test]
    fn test_failed_claim_keeps_auction() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = started_state(&mut state_builder);
        state
            .bid(&token(), at(START), ALICE, micro(200))
            .expect_report("Bid should pass");
        let before = stored(&state);

        claim_eq!(
            state.claim(&token(), at(END - 1), ALICE, micro(200)),
            Err(CustomContractError::NotEnded)
        );
        claim_eq!(
            state.claim(&token(), at(END), BOB, micro(200)),
            Err(CustomContractError::NotHighestBidder)
        );
        claim_eq!(
            state.claim(&token(), at(END), ALICE, micro(199)),
            Err(CustomContractError::PaymentMismatch)
        );
        claim_eq!(stored(&state), before);

        claim_eq!(
            state.claim(&token(), at(END), ALICE, micro(200)),
            Ok(Settlement {
                winner: ALICE,
                treasury: TREASURY,
                price: micro(200),
            })
        );
        claim!(stored(&state).claimed);

        // A settled auction stays settled
        claim_eq!(
            state.claim(&token(), at(END), ALICE, micro(200)),
            Err(CustomContractError::AlreadyClaimed)
        );
        claim!(stored(&state).claimed);
    }

    #[concordium_test]
    fn test_unknown_token() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = State::new(&mut state_builder);

        claim_eq!(
            state.bid(&token(), at(START), ALICE, micro(1)),
            Err(CustomContractError::UnknownToken)
        );
        claim_eq!(
            state.claim(&token(), at(END), ALICE, micro(1)),
            Err(CustomContractError::UnknownToken)
        );
        claim_eq!(
            state.view(&token(), at(START)),
            Err(CustomContractError::UnknownToken)
        );
    }

    #[concordium_test]
    fn test_deposit_once() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = State::new(&mut state_builder);

        claim_eq!(state.deposit(token(), ALICE), Ok(()));
        claim_eq!(
            state.deposit(token(), BOB),
            Err(CustomContractError::AlreadyDeposited)
        );
        claim_eq!(state.deposits.get(&token()).map(|depositor| *depositor), Some(ALICE));

        // Only the depositor opens the auction of a deposited unit
        claim_eq!(
            state
                .start(
                    token(),
                    BOB,
                    Duration::from_millis(END - START),
                    at(START),
                    Address::Account(BOB),
                )
                .map(|_| ()),
            Err(CustomContractError::Unauthorized)
        );
        claim!(state.auctions.get(&token()).is_none());
        claim!(state
            .start(
                token(),
                TREASURY,
                Duration::from_millis(END - START),
                at(START),
                Address::Account(ALICE),
            )
            .is_ok());
    }

    #[concordium_test]
    fn test_deposit_after_claim() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = started_state(&mut state_builder);
        state
            .bid(&token(), at(START), ALICE, micro(200))
            .expect_report("Bid should pass");
        state
            .claim(&token(), at(END), ALICE, micro(200))
            .expect_report("Claim should pass");

        claim_eq!(
            state.deposit(token(), BOB),
            Err(CustomContractError::AlreadyClaimed)
        );
        claim!(state.deposits.get(&token()).is_none());
    }
}
