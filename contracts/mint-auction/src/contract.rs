use commons::{ContractTokenAmount, CustomContractError, OnReceivingParams, Token};
use concordium_std::*;

use crate::custody;
use crate::events::*;
use crate::external::*;
use crate::state::State;

/// Units of the mint sold by one auction.
const AUCTIONED_UNITS: u64 = 1;

/// Initialize the auction contract with no auctions.
#[init(contract = "MintAuction")]
fn contract_init<S: HasStateApi>(
    _ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    Ok(State::new(state_builder))
}

/// Open the auction of a token mint. The auction accepts bids for the given
/// duration, starting at the current slot time.
///
/// It rejects if:
/// - Fails to parse `StartParams` parameters.
/// - An auction for the mint was already started.
/// - The unit of the mint was deposited by another account.
/// - The duration is zero or the end time is out of range.
/// - Fails to log `Start` event.
#[receive(
    mutable,
    contract = "MintAuction",
    name = "start",
    parameter = "StartParams",
    return_value = "AuctionView",
    enable_logger
)]
fn contract_start<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ReceiveResult<AuctionView> {
    let params = StartParams::deserial(&mut ctx.parameter_cursor())?;

    let view = host.state_mut().start(
        params.token,
        params.treasury,
        params.duration,
        ctx.metadata().slot_time(),
        ctx.sender(),
    )?;

    logger.log(&AuctionEvents::start(
        &view.token,
        &view.treasury,
        view.end_time,
    ))?;

    Ok(view)
}

/// Pledge a new highest bid. No CCD is transferred; the winner pays on claim.
///
/// It rejects if:
/// - Fails to parse `BidParams` parameters.
/// - Sender is a contract.
/// - No auction exists for the mint.
/// - The auction end time has been reached.
/// - The amount is not higher than the current highest bid.
/// - Fails to log `Bid` event.
#[receive(
    mutable,
    contract = "MintAuction",
    name = "bid",
    parameter = "BidParams",
    return_value = "AuctionView",
    enable_logger
)]
fn contract_bid<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ReceiveResult<AuctionView> {
    let params = BidParams::deserial(&mut ctx.parameter_cursor())?;

    let bidder = if let Address::Account(bidder) = ctx.sender() {
        bidder
    } else {
        bail!(CustomContractError::OnlyAccountAddress.into());
    };

    let slot_time = ctx.metadata().slot_time();
    let outbid = host
        .state_mut()
        .bid(&params.token, slot_time, bidder, params.amount)?;

    logger.log(&AuctionEvents::bid(
        &params.token,
        &bidder,
        params.amount,
        outbid,
    ))?;

    let view = host.state().view(&params.token, slot_time)?;
    Ok(view)
}

/// Settle the auction. The highest bidder attaches the winning bid, which is
/// forwarded to the treasury, and receives the auctioned unit from the
/// contract's custody.
///
/// It rejects if:
/// - Fails to parse `Token` parameter.
/// - Sender is a contract.
/// - No auction exists for the mint.
/// - The auction end time has not been reached.
/// - Sender is not the highest bidder.
/// - The auction was already claimed.
/// - The attached amount differs from the winning bid.
/// - The custody contract rejects the token transfer.
/// - Fails to transfer the price to the treasury.
/// - Fails to log `Claim` event.
#[receive(
    mutable,
    payable,
    contract = "MintAuction",
    name = "claim",
    parameter = "Token",
    return_value = "AuctionView",
    enable_logger
)]
fn contract_claim<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    amount: Amount,
    logger: &mut impl HasLogger,
) -> ReceiveResult<AuctionView> {
    let token = Token::deserial(&mut ctx.parameter_cursor())?;

    let claimant = if let Address::Account(claimant) = ctx.sender() {
        claimant
    } else {
        bail!(CustomContractError::OnlyAccountAddress.into());
    };

    let slot_time = ctx.metadata().slot_time();
    let settlement = host
        .state_mut()
        .claim(&token, slot_time, claimant, amount)?;

    // Hand the auctioned unit over to the winner
    custody::transfer(
        host,
        &token,
        Address::Contract(ctx.self_address()),
        settlement.winner,
        ContractTokenAmount::from(AUCTIONED_UNITS),
    )?;

    host.invoke_transfer(&settlement.treasury, settlement.price)?;

    logger.log(&AuctionEvents::claim(
        &token,
        &settlement.winner,
        &settlement.treasury,
        settlement.price,
    ))?;

    let view = host.state().view(&token, slot_time)?;
    Ok(view)
}

/// View the auction of a token mint.
///
/// It rejects if:
/// - Fails to parse `Token` parameter.
/// - No auction exists for the mint.
#[receive(
    contract = "MintAuction",
    name = "view",
    parameter = "Token",
    return_value = "AuctionView"
)]
fn contract_view<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<AuctionView> {
    let token = Token::deserial(&mut ctx.parameter_cursor())?;
    let view = host.state().view(&token, ctx.metadata().slot_time())?;
    Ok(view)
}

/// CIS-2 hook taking the auctioned unit of a mint into custody. The depositing
/// account becomes the only one allowed to start the auction.
///
/// It rejects if:
/// - Sender is not a contract.
/// - Fails to parse `OnReceivingParams` parameters.
/// - More than one unit is transferred.
/// - The previous owner is a contract.
/// - The unit of the mint was already deposited.
/// - The auction of the mint was already claimed.
/// - Fails to log `Deposit` event.
#[receive(
    mutable,
    contract = "MintAuction",
    name = "onReceivingCIS2",
    parameter = "OnReceivingParams",
    enable_logger
)]
fn contract_on_receiving_cis2<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ReceiveResult<()> {
    let contract = if let Address::Contract(sender) = ctx.sender() {
        sender
    } else {
        bail!(CustomContractError::ContractOnly.into());
    };

    let params = OnReceivingParams::deserial(&mut ctx.parameter_cursor())?;
    // Do not take anything into custody if no tokens were transferred
    if params.amount == ContractTokenAmount::from(0) {
        return Ok(());
    }
    // An auction releases exactly one unit
    ensure!(
        params.amount == ContractTokenAmount::from(AUCTIONED_UNITS),
        CustomContractError::Unsupported.into()
    );

    let depositor = if let Address::Account(depositor) = params.from {
        depositor
    } else {
        bail!(CustomContractError::Unsupported.into());
    };

    let token = Token::new(contract, params.token_id);
    host.state_mut().deposit(token.clone(), depositor)?;

    logger.log(&AuctionEvents::deposit(&token, &params.from, params.amount))?;

    Ok(())
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use commons::{test::transfer_mock, TRANSFER_ENTRYPOINT};
    use concordium_cis2::{AdditionalData, OnReceivingCis2Params, Receiver, TokenIdVec};
    use test_infrastructure::*;

    const SELLER: AccountAddress = AccountAddress([0u8; 32]);
    const TREASURY: AccountAddress = AccountAddress([1u8; 32]);
    const ALICE: AccountAddress = AccountAddress([2u8; 32]);
    const BOB: AccountAddress = AccountAddress([3u8; 32]);
    const TOKEN_CONTRACT: ContractAddress = ContractAddress {
        index: 1,
        subindex: 0,
    };
    const SELF_ADDRESS: ContractAddress = ContractAddress {
        index: 2,
        subindex: 0,
    };
    const START: u64 = 1_000;
    const DURATION: u64 = 5_000;
    const END: u64 = START + DURATION;

    type Host = TestHost<State<TestStateApi>>;

    fn mint_token() -> Token {
        Token::new(TOKEN_CONTRACT, TokenIdVec(vec![0, 1]))
    }

    fn micro(amount: u64) -> Amount {
        Amount::from_micro_ccd(amount)
    }

    fn expect_error<T>(result: ReceiveResult<T>, error: CustomContractError, msg: &str) {
        claim_eq!(result.err(), Some(Reject::from(error)), "{}", msg);
    }

    fn receive_ctx<'a>(sender: Address, slot_time: u64, parameter: &'a [u8]) -> TestReceiveContext<'a> {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(sender);
        ctx.set_self_address(SELF_ADDRESS);
        ctx.set_metadata_slot_time(Timestamp::from_timestamp_millis(slot_time));
        ctx.set_parameter(parameter);
        ctx
    }

    fn new_host() -> Host {
        let ctx = TestInitContext::empty();
        let mut state_builder = TestStateBuilder::new();
        let state =
            contract_init(&ctx, &mut state_builder).expect_report("Initialization should pass");
        TestHost::new(state, state_builder)
    }

    fn start_params(token: Token, treasury: AccountAddress, duration: u64) -> Vec<u8> {
        to_bytes(&StartParams {
            token,
            treasury,
            duration: Duration::from_millis(duration),
        })
    }

    fn start_auction(host: &mut Host, logger: &mut TestLogger) -> AuctionView {
        let bytes = start_params(mint_token(), TREASURY, DURATION);
        let ctx = receive_ctx(Address::Account(SELLER), START, &bytes);
        contract_start(&ctx, host, logger).expect_report("Starting auction should pass")
    }

    fn place_bid(
        host: &mut Host,
        logger: &mut TestLogger,
        bidder: AccountAddress,
        amount: u64,
        slot_time: u64,
    ) -> ReceiveResult<AuctionView> {
        let bytes = to_bytes(&BidParams {
            token: mint_token(),
            amount: micro(amount),
        });
        let ctx = receive_ctx(Address::Account(bidder), slot_time, &bytes);
        contract_bid(&ctx, host, logger)
    }

    fn claim_as(
        host: &mut Host,
        logger: &mut TestLogger,
        claimant: AccountAddress,
        payment: u64,
        slot_time: u64,
    ) -> ReceiveResult<AuctionView> {
        let bytes = to_bytes(&mint_token());
        let ctx = receive_ctx(Address::Account(claimant), slot_time, &bytes);
        contract_claim(&ctx, host, micro(payment), logger)
    }

    /// Custody accepts exactly one unit moving from this contract to `winner`.
    fn expect_unit_transfer_to(host: &mut Host, winner: AccountAddress) {
        host.setup_mock_entrypoint(
            TOKEN_CONTRACT,
            OwnedEntrypointName::new_unchecked(TRANSFER_ENTRYPOINT.into()),
            transfer_mock(move |transfer| {
                transfer.token_id == mint_token().id
                    && transfer.amount == ContractTokenAmount::from(1)
                    && transfer.from == Address::Contract(SELF_ADDRESS)
                    && matches!(transfer.to, Receiver::Account(to) if to == winner)
            }),
        );
    }

    fn deposit_params(from: Address, amount: u64) -> Vec<u8> {
        to_bytes(&OnReceivingCis2Params {
            token_id: mint_token().id,
            amount: ContractTokenAmount::from(amount),
            from,
            data: AdditionalData::empty(),
        })
    }

    fn deposit(
        host: &mut Host,
        logger: &mut TestLogger,
        from: Address,
        amount: u64,
    ) -> ReceiveResult<()> {
        let bytes = deposit_params(from, amount);
        let ctx = receive_ctx(Address::Contract(TOKEN_CONTRACT), START, &bytes);
        contract_on_receiving_cis2(&ctx, host, logger)
    }

    #[concordium_test]
    fn test_init() {
        let host = new_host();
        claim_eq!(
            host.state().auctions.iter().count(),
            0,
            "No auction should exist after initialization"
        );
    }

    #[concordium_test]
    fn test_start() {
        let mut host = new_host();
        let mut logger = TestLogger::init();

        let view = start_auction(&mut host, &mut logger);

        claim_eq!(
            view,
            AuctionView {
                token: mint_token(),
                treasury: TREASURY,
                end_time: Timestamp::from_timestamp_millis(END),
                highest_bid: Amount::zero(),
                highest_bidder: None,
                claimed: false,
                phase: AuctionPhase::Open,
            }
        );
        claim_eq!(logger.logs.len(), 1, "Only one event should be logged");
        claim_eq!(
            logger.logs[0],
            to_bytes(&AuctionEvents::start(
                &mint_token(),
                &TREASURY,
                Timestamp::from_timestamp_millis(END)
            )),
            "Incorrect event emitted"
        );
    }

    #[concordium_test]
    fn test_start_twice() {
        let mut host = new_host();
        let mut logger = TestLogger::init();
        start_auction(&mut host, &mut logger);

        let bytes = start_params(mint_token(), BOB, DURATION * 2);
        let ctx = receive_ctx(Address::Account(BOB), START + 10, &bytes);
        expect_error(
            contract_start(&ctx, &mut host, &mut logger),
            CustomContractError::AlreadyInitialized,
            "Starting a second auction for the mint should fail",
        );

        let bytes = to_bytes(&mint_token());
        let ctx = receive_ctx(Address::Account(BOB), START + 10, &bytes);
        let view = contract_view(&ctx, &host).expect_report("View should pass");
        claim_eq!(view.treasury, TREASURY, "Treasury must not be replaced");
        claim_eq!(view.end_time, Timestamp::from_timestamp_millis(END));
        claim_eq!(logger.logs.len(), 1);
    }

    #[concordium_test]
    fn test_start_zero_duration() {
        let mut host = new_host();
        let mut logger = TestLogger::init();

        let bytes = start_params(mint_token(), TREASURY, 0);
        let ctx = receive_ctx(Address::Account(SELLER), START, &bytes);
        expect_error(
            contract_start(&ctx, &mut host, &mut logger),
            CustomContractError::InvalidDuration,
            "Zero duration should be rejected",
        );
        claim_eq!(host.state().auctions.iter().count(), 0);
    }

    /// One leader, a lower bid, early and foreign claims, settlement, a
    /// repeated claim and a late bid.
    #[concordium_test]
    fn test_auction_bid_and_claim() {
        let mut host = new_host();
        let mut logger = TestLogger::init();
        start_auction(&mut host, &mut logger);
        expect_unit_transfer_to(&mut host, ALICE);

        let view = place_bid(&mut host, &mut logger, ALICE, 200_000, START + 1)
            .expect_report("Bidding should pass");
        claim_eq!(view.highest_bid, micro(200_000));
        claim_eq!(view.highest_bidder, Some(ALICE));

        expect_error(
            place_bid(&mut host, &mut logger, ALICE, 100_000, START + 2),
            CustomContractError::BidTooLow,
            "Lower bid should fail",
        );

        // The winning bid is attached to the claim call
        host.set_self_balance(micro(200_000));

        expect_error(
            claim_as(&mut host, &mut logger, ALICE, 200_000, START + 1_000),
            CustomContractError::NotEnded,
            "Claiming before the end time should fail",
        );
        expect_error(
            claim_as(&mut host, &mut logger, BOB, 200_000, END),
            CustomContractError::NotHighestBidder,
            "Claiming by another account should fail",
        );
        claim!(
            !host.transfer_occurred(&TREASURY, micro(200_000)),
            "Rejected claims must not pay the treasury"
        );

        let view = claim_as(&mut host, &mut logger, ALICE, 200_000, END)
            .expect_report("Claiming at the end time should pass");
        claim!(view.claimed);
        claim_eq!(view.phase, AuctionPhase::Claimed);
        claim!(
            host.transfer_occurred(&TREASURY, micro(200_000)),
            "Treasury should receive the winning bid"
        );
        claim!(
            logger.logs.contains(&to_bytes(&AuctionEvents::claim(
                &mint_token(),
                &ALICE,
                &TREASURY,
                micro(200_000)
            ))),
            "Expected a claim event"
        );

        expect_error(
            claim_as(&mut host, &mut logger, ALICE, 200_000, END + 1),
            CustomContractError::AlreadyClaimed,
            "Claiming a second time should fail",
        );
        expect_error(
            place_bid(&mut host, &mut logger, ALICE, 600_000, END + 1),
            CustomContractError::AuctionEnded,
            "Bidding after the end time should fail",
        );
    }

    #[concordium_test]
    fn test_outbid() {
        let mut host = new_host();
        let mut logger = TestLogger::init();
        start_auction(&mut host, &mut logger);

        place_bid(&mut host, &mut logger, ALICE, 100, START).expect_report("Bidding should pass");
        let view =
            place_bid(&mut host, &mut logger, BOB, 300, START + 1).expect_report("Bidding should pass");
        claim_eq!(view.highest_bidder, Some(BOB));
        claim_eq!(view.highest_bid, micro(300));
        claim_eq!(
            logger.logs.last(),
            Some(&to_bytes(&AuctionEvents::bid(
                &mint_token(),
                &BOB,
                micro(300),
                Some(ALICE)
            ))),
            "Bid event should name the outbid account"
        );

        // Ties are rejected, also for the current leader
        expect_error(
            place_bid(&mut host, &mut logger, ALICE, 300, START + 2),
            CustomContractError::BidTooLow,
            "Equal bid should fail",
        );
        expect_error(
            place_bid(&mut host, &mut logger, BOB, 300, START + 2),
            CustomContractError::BidTooLow,
            "Equal bid should fail",
        );
    }

    #[concordium_test]
    fn test_bid_zero() {
        let mut host = new_host();
        let mut logger = TestLogger::init();
        start_auction(&mut host, &mut logger);

        expect_error(
            place_bid(&mut host, &mut logger, ALICE, 0, START),
            CustomContractError::BidTooLow,
            "Bidding zero should fail",
        );

        let bytes = to_bytes(&mint_token());
        let ctx = receive_ctx(Address::Account(ALICE), START, &bytes);
        let view = contract_view(&ctx, &host).expect_report("View should pass");
        claim_eq!(view.highest_bidder, None);
    }

    #[concordium_test]
    fn test_bid_at_end_time() {
        let mut host = new_host();
        let mut logger = TestLogger::init();
        start_auction(&mut host, &mut logger);

        place_bid(&mut host, &mut logger, ALICE, 10, END - 1)
            .expect_report("Bidding right before the end should pass");
        expect_error(
            place_bid(&mut host, &mut logger, BOB, 1_000, END),
            CustomContractError::AuctionEnded,
            "Bidding at the end time should fail",
        );

        let bytes = to_bytes(&mint_token());
        let ctx = receive_ctx(Address::Account(BOB), END, &bytes);
        let view = contract_view(&ctx, &host).expect_report("View should pass");
        claim_eq!(view.highest_bid, micro(10), "Late bid must not change the price");
        claim_eq!(view.highest_bidder, Some(ALICE), "Late bid must not change the leader");
    }

    #[concordium_test]
    fn test_bid_unknown_token() {
        let mut host = new_host();
        let mut logger = TestLogger::init();

        expect_error(
            place_bid(&mut host, &mut logger, ALICE, 10, START),
            CustomContractError::UnknownToken,
            "Bidding without an auction should fail",
        );
    }

    #[concordium_test]
    fn test_bid_from_contract() {
        let mut host = new_host();
        let mut logger = TestLogger::init();
        start_auction(&mut host, &mut logger);

        let bytes = to_bytes(&BidParams {
            token: mint_token(),
            amount: micro(10),
        });
        let ctx = receive_ctx(Address::Contract(TOKEN_CONTRACT), START, &bytes);
        expect_error(
            contract_bid(&ctx, &mut host, &mut logger),
            CustomContractError::OnlyAccountAddress,
            "Contracts should not be able to bid",
        );
    }

    #[concordium_test]
    fn test_claim_without_bids() {
        let mut host = new_host();
        let mut logger = TestLogger::init();
        start_auction(&mut host, &mut logger);

        expect_error(
            claim_as(&mut host, &mut logger, SELLER, 0, END),
            CustomContractError::NotHighestBidder,
            "Nobody can claim an auction without bids",
        );
    }

    #[concordium_test]
    fn test_claim_payment_mismatch() {
        let mut host = new_host();
        let mut logger = TestLogger::init();
        start_auction(&mut host, &mut logger);
        expect_unit_transfer_to(&mut host, ALICE);
        place_bid(&mut host, &mut logger, ALICE, 500, START).expect_report("Bidding should pass");

        host.set_self_balance(micro(400));
        expect_error(
            claim_as(&mut host, &mut logger, ALICE, 400, END),
            CustomContractError::PaymentMismatch,
            "Underpaying claim should fail",
        );
        host.set_self_balance(micro(600));
        expect_error(
            claim_as(&mut host, &mut logger, ALICE, 600, END),
            CustomContractError::PaymentMismatch,
            "Overpaying claim should fail",
        );

        let bytes = to_bytes(&mint_token());
        let ctx = receive_ctx(Address::Account(ALICE), END, &bytes);
        let view = contract_view(&ctx, &host).expect_report("View should pass");
        claim!(!view.claimed);
        claim_eq!(view.phase, AuctionPhase::Closed);
    }

    #[concordium_test]
    fn test_claim_custody_rejects() {
        let mut host = new_host();
        let mut logger = TestLogger::init();
        start_auction(&mut host, &mut logger);
        // Custody only accepts transfers to Bob, so the unit cannot reach Alice
        expect_unit_transfer_to(&mut host, BOB);
        place_bid(&mut host, &mut logger, ALICE, 500, START).expect_report("Bidding should pass");

        host.set_self_balance(micro(500));
        let result = host.with_rollback(|host| claim_as(host, &mut logger, ALICE, 500, END));

        claim!(result.is_err(), "Claim should fail if the unit cannot be delivered");
        claim!(
            !host.transfer_occurred(&TREASURY, micro(500)),
            "Treasury must not be paid for an undelivered unit"
        );

        let bytes = to_bytes(&mint_token());
        let ctx = receive_ctx(Address::Account(ALICE), END, &bytes);
        let view = contract_view(&ctx, &host).expect_report("View should pass");
        claim!(!view.claimed, "Failed claim must leave the auction unclaimed");
        claim_eq!(view.phase, AuctionPhase::Closed);
    }

    #[concordium_test]
    fn test_view_unknown_token() {
        let host = new_host();

        let bytes = to_bytes(&mint_token());
        let ctx = receive_ctx(Address::Account(ALICE), START, &bytes);
        expect_error(
            contract_view(&ctx, &host),
            CustomContractError::UnknownToken,
            "Viewing a missing auction should fail",
        );
    }

    #[concordium_test]
    fn test_deposit() {
        let mut host = new_host();
        let mut logger = TestLogger::init();

        deposit(&mut host, &mut logger, Address::Account(SELLER), 1)
            .expect_report("Deposit should pass");

        claim_eq!(
            logger.logs,
            vec![to_bytes(&AuctionEvents::deposit(
                &mint_token(),
                &Address::Account(SELLER),
                ContractTokenAmount::from(1)
            ))]
        );
        claim_eq!(host.state().deposits.get(&mint_token()).map(|depositor| *depositor), Some(SELLER));

        let bytes = deposit_params(Address::Account(SELLER), 1);
        let ctx = receive_ctx(Address::Account(SELLER), START, &bytes);
        expect_error(
            contract_on_receiving_cis2(&ctx, &mut host, &mut logger),
            CustomContractError::ContractOnly,
            "Only token contracts may deposit",
        );
    }

    #[concordium_test]
    fn test_deposit_zero_amount() {
        let mut host = new_host();
        let mut logger = TestLogger::init();

        deposit(&mut host, &mut logger, Address::Account(SELLER), 0)
            .expect_report("Empty transfer should be accepted");

        claim!(logger.logs.is_empty(), "No deposit event expected");
        claim!(host.state().deposits.get(&mint_token()).is_none());
    }

    #[concordium_test]
    fn test_deposit_unsupported() {
        let mut host = new_host();
        let mut logger = TestLogger::init();

        expect_error(
            deposit(&mut host, &mut logger, Address::Account(SELLER), 2),
            CustomContractError::Unsupported,
            "Depositing more than one unit should fail",
        );
        expect_error(
            deposit(&mut host, &mut logger, Address::Contract(TOKEN_CONTRACT), 1),
            CustomContractError::Unsupported,
            "Depositing from a contract should fail",
        );

        claim!(host.state().deposits.get(&mint_token()).is_none(), "Nothing should be deposited");
        claim!(logger.logs.is_empty());
    }

    #[concordium_test]
    fn test_deposit_then_start() {
        let mut host = new_host();
        let mut logger = TestLogger::init();
        deposit(&mut host, &mut logger, Address::Account(SELLER), 1)
            .expect_report("Deposit should pass");

        expect_error(
            deposit(&mut host, &mut logger, Address::Account(BOB), 1),
            CustomContractError::AlreadyDeposited,
            "Depositing the unit twice should fail",
        );

        let bytes = start_params(mint_token(), BOB, DURATION);
        let ctx = receive_ctx(Address::Account(BOB), START, &bytes);
        expect_error(
            contract_start(&ctx, &mut host, &mut logger),
            CustomContractError::Unauthorized,
            "Only the depositor should start the auction",
        );
        claim_eq!(host.state().auctions.iter().count(), 0);

        let view = start_auction(&mut host, &mut logger);
        claim_eq!(view.treasury, TREASURY);
    }

    #[concordium_test]
    fn test_deposit_after_claim() {
        let mut host = new_host();
        let mut logger = TestLogger::init();
        start_auction(&mut host, &mut logger);
        expect_unit_transfer_to(&mut host, ALICE);
        place_bid(&mut host, &mut logger, ALICE, 500, START).expect_report("Bidding should pass");
        host.set_self_balance(micro(500));
        claim_as(&mut host, &mut logger, ALICE, 500, END).expect_report("Claim should pass");

        expect_error(
            deposit(&mut host, &mut logger, Address::Account(SELLER), 1),
            CustomContractError::AlreadyClaimed,
            "Depositing into a claimed auction should fail",
        );
        claim!(host.state().deposits.get(&mint_token()).is_none());
    }
}
