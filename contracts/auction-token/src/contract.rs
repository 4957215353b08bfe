use super::*;

/// Initialize contract instance with no token types initially.
#[init(contract = "AuctionToken")]
fn init<S: HasStateApi>(
    _ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    // Construct the initial contract state.
    let state = State::empty(state_builder);
    Ok(state)
}

/// Register a new token mint with zero supply.
/// Logs a `TokenMetadata` event.
///
/// It rejects if:
/// - The sender is not the contract instance owner.
/// - Fails to parse parameter.
/// - The token ID already exists.
/// - Fails to log TokenMetadata event.
#[receive(
    contract = "AuctionToken",
    name = "createToken",
    parameter = "CreateTokenParams",
    mutable,
    enable_logger
)]
fn create_token<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    ensure!(
        ctx.sender().matches_account(&ctx.owner()),
        ContractError::Unauthorized
    );

    let params: CreateTokenParams = ctx.parameter_cursor().get()?;
    let token_id = params.token_id.clone();
    let metadata_url = MetadataUrl {
        url: params.metadata_url.clone(),
        hash: None,
    };

    host.state_mut().create_token(params)?;

    logger.log(&Cis2Event::<ContractTokenId, ContractTokenAmount>::TokenMetadata(
        TokenMetadataEvent {
            token_id,
            metadata_url,
        },
    ))?;

    Ok(())
}

/// Mint units of an existing token mint to the given address.
/// Logs a `Mint` event.
///
/// It rejects if:
/// - The sender is not the contract instance owner.
/// - Fails to parse parameter.
/// - The token ID does not exist.
/// - The supply would overflow.
/// - Fails to log Mint event.
#[receive(
    contract = "AuctionToken",
    name = "mint",
    parameter = "MintParams",
    mutable,
    enable_logger
)]
fn mint<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    ensure!(
        ctx.sender().matches_account(&ctx.owner()),
        ContractError::Unauthorized
    );

    let params: MintParams = ctx.parameter_cursor().get()?;

    let (state, state_builder) = host.state_and_builder();
    state.mint(&params, state_builder)?;

    logger.log(&Cis2Event::Mint(MintEvent {
        token_id: params.token_id,
        amount: params.amount,
        owner: params.owner,
    }))?;

    Ok(())
}

/// Execute a list of token transfers, in the order of the list.
///
/// Logs a `Transfer` event for each transfer in the list.
/// Invokes the receive hook of each contract receiving a transfer.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Any of the transfers fail to be executed, which could be if:
///     - The `token_id` does not exist.
///     - The sender is not the owner of the token, or an operator for this
///       specific `token_id` and `from` address.
///     - The `from` address holds less than the transferred amount.
/// - Fails to log event.
/// - Any of the contracts receiving a transfer choose to reject.
#[receive(
    contract = "AuctionToken",
    name = "transfer",
    parameter = "TransferParameter",
    mutable,
    enable_logger
)]
fn transfer<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let TransferParams(transfers): TransferParameter = ctx.parameter_cursor().get()?;
    let sender = ctx.sender();

    for transfer in transfers {
        let (state, state_builder) = host.state_and_builder();
        // Authenticate the sender for this transfer
        ensure!(
            transfer.from == sender || state.is_operator(&sender, &transfer.from),
            ContractError::Unauthorized
        );

        let to_address = transfer.to.address();
        // Update the contract state
        state.transfer(&transfer, state_builder)?;

        // Log transfer event
        logger.log(&Cis2Event::Transfer(TransferEvent {
            token_id: transfer.token_id.clone(),
            amount: transfer.amount,
            from: transfer.from,
            to: to_address,
        }))?;

        if let Receiver::Contract(address, entrypoint_name) = transfer.to {
            let parameter: OnReceivingParams = OnReceivingCis2Params {
                token_id: transfer.token_id,
                amount: transfer.amount,
                from: transfer.from,
                data: transfer.data,
            };

            host.invoke_contract(
                &address,
                &parameter,
                entrypoint_name.as_entrypoint_name(),
                Amount::zero(),
            )?;
        }
    }
    Ok(())
}

/// Enable or disable addresses as operators of the sender address.
/// Logs an `UpdateOperator` event.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Fails to log event.
#[receive(
    contract = "AuctionToken",
    name = "updateOperator",
    parameter = "UpdateOperatorParams",
    mutable,
    enable_logger
)]
fn update_operator<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let UpdateOperatorParams(params) = ctx.parameter_cursor().get()?;
    let sender = ctx.sender();

    let (state, state_builder) = host.state_and_builder();
    for param in params {
        // Update the operator in the state.
        match param.update {
            OperatorUpdate::Add => state.add_operator(&sender, &param.operator, state_builder),
            OperatorUpdate::Remove => state.remove_operator(&sender, &param.operator),
        }

        // Log the appropriate event
        logger.log(
            &Cis2Event::<ContractTokenId, ContractTokenAmount>::UpdateOperator(
                UpdateOperatorEvent {
                    owner: sender,
                    operator: param.operator,
                    update: param.update,
                },
            ),
        )?;
    }

    Ok(())
}

/// Takes a list of queries. Each query is an owner address and some address to
/// check as an operator of the owner address.
///
/// It rejects if:
/// - It fails to parse the parameter.
#[receive(
    contract = "AuctionToken",
    name = "operatorOf",
    parameter = "OperatorOfQueryParams",
    return_value = "OperatorOfQueryResponse"
)]
fn operator_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<OperatorOfQueryResponse> {
    let params: OperatorOfQueryParams = ctx.parameter_cursor().get()?;
    let state = host.state();
    let response: Vec<bool> = params
        .queries
        .iter()
        .map(|query| state.is_operator(&query.address, &query.owner))
        .collect();

    Ok(OperatorOfQueryResponse::from(response))
}

/// Get the balance of given token IDs and addresses. Addresses that never
/// held a token have a balance of zero.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Any of the queried `token_id` does not exist.
#[receive(
    contract = "AuctionToken",
    name = "balanceOf",
    parameter = "ContractBalanceOfQueryParams",
    return_value = "ContractBalanceOfQueryResponse"
)]
fn balance_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<ContractBalanceOfQueryResponse> {
    let params: ContractBalanceOfQueryParams = ctx.parameter_cursor().get()?;
    let mut response = Vec::with_capacity(params.queries.len());
    let state = host.state();
    for query in params.queries {
        let amount = state.balance(&query.token_id, &query.address)?;
        response.push(amount);
    }

    Ok(ContractBalanceOfQueryResponse::from(response))
}

/// Get the metadata URLs of the given token IDs.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Any of the queried `token_id` does not exist.
#[receive(
    contract = "AuctionToken",
    name = "tokenMetadata",
    parameter = "ContractTokenMetadataQueryParams",
    return_value = "TokenMetadataQueryResponse"
)]
fn token_metadata<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<TokenMetadataQueryResponse> {
    let params: ContractTokenMetadataQueryParams = ctx.parameter_cursor().get()?;
    let mut response = Vec::with_capacity(params.queries.len());
    let state = host.state();
    for token_id in params.queries {
        let info = state.token_info(&token_id)?;
        response.push(info.metadata_url());
    }

    Ok(TokenMetadataQueryResponse::from(response))
}

/// View a registered token mint.
#[receive(
    contract = "AuctionToken",
    name = "viewToken",
    parameter = "ContractTokenId",
    return_value = "TokenInfo"
)]
fn view_token<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<TokenInfo> {
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;
    host.state().token_info(&token_id)
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use commons::test::receive_hook_mock;
    use test_infrastructure::*;

    const ACCOUNT_0: AccountAddress = AccountAddress([0u8; 32]);
    const ADDRESS_0: Address = Address::Account(ACCOUNT_0);
    const ACCOUNT_1: AccountAddress = AccountAddress([1u8; 32]);
    const ADDRESS_1: Address = Address::Account(ACCOUNT_1);
    const AUCTION: ContractAddress = ContractAddress {
        index: 2,
        subindex: 0,
    };
    const METADATA_URL: &str = "https://example.org/mint.json";

    fn token_0() -> ContractTokenId {
        TokenIdVec(vec![0, 1])
    }

    fn token_1() -> ContractTokenId {
        TokenIdVec(vec![42, 84, 168])
    }

    fn create_params(token_id: ContractTokenId) -> CreateTokenParams {
        CreateTokenParams {
            token_id,
            metadata_url: METADATA_URL.into(),
            decimals: 0,
        }
    }

    /// Test helper function which creates a contract state with two tokens with
    /// id `token_0` owned by `ADDRESS_0` and id `token_1` owned by `ADDRESS_1`
    fn initial_state<S: HasStateApi>(
        state_builder: &mut StateBuilder<S>,
        quantity: ContractTokenAmount,
    ) -> State<S> {
        let mut state = State::empty(state_builder);

        for (token_id, owner) in [(token_0(), ADDRESS_0), (token_1(), ADDRESS_1)].iter() {
            state
                .create_token(create_params(token_id.clone()))
                .expect_report("Failed to create token");
            state
                .mint(
                    &MintParams {
                        token_id: token_id.clone(),
                        owner: *owner,
                        amount: quantity,
                    },
                    state_builder,
                )
                .expect_report("Failed to mint token");
        }

        state
    }

    fn transfer_params(
        from: Address,
        to: Receiver,
        amount: ContractTokenAmount,
    ) -> TransferParameter {
        TransferParams(vec![Transfer {
            token_id: token_0(),
            amount,
            from,
            to,
            data: AdditionalData::empty(),
        }])
    }

    /// Test initialization succeeds.
    #[concordium_test]
    fn test_init() {
        let ctx = TestInitContext::empty();
        let mut builder = TestStateBuilder::new();

        let result = init(&ctx, &mut builder);

        let state = result.expect_report("Contract initialization failed");

        claim_eq!(
            state.tokens.iter().count(),
            0,
            "No token should be initialized"
        );
    }

    /// Test creating a mint registers it with zero supply and logs its
    /// metadata.
    #[concordium_test]
    fn test_create_token() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);
        ctx.set_owner(ACCOUNT_0);

        let parameter_bytes = to_bytes(&CreateTokenParams {
            token_id: token_0(),
            metadata_url: METADATA_URL.into(),
            decimals: 9,
        });
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = State::empty(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        let result: ContractResult<()> = create_token(&ctx, &mut host, &mut logger);
        claim!(result.is_ok(), "Results in rejection");

        let parameter_bytes = to_bytes(&token_0());
        ctx.set_parameter(&parameter_bytes);
        let info = view_token(&ctx, &host).expect_report("Token is expected to exist");
        claim_eq!(
            info,
            TokenInfo {
                metadata_url: METADATA_URL.into(),
                decimals: 9,
                supply: ContractTokenAmount::from(0),
            }
        );

        claim_eq!(logger.logs.len(), 1, "Only one event should be logged");
        claim_eq!(
            logger.logs[0],
            to_bytes(
                &Cis2Event::<ContractTokenId, ContractTokenAmount>::TokenMetadata(
                    TokenMetadataEvent {
                        token_id: token_0(),
                        metadata_url: MetadataUrl {
                            url: METADATA_URL.into(),
                            hash: None,
                        },
                    }
                )
            ),
            "Incorrect event emitted"
        );
    }

    /// Test creating a mint fails for senders other than the owner and for
    /// existing token ids.
    #[concordium_test]
    fn test_create_token_rejected() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_1);
        ctx.set_owner(ACCOUNT_0);

        let parameter_bytes = to_bytes(&create_params(token_0()));
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder, ContractTokenAmount::from(1));
        let mut host = TestHost::new(state, state_builder);

        let result: ContractResult<()> = create_token(&ctx, &mut host, &mut logger);
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Unauthorized,
            "Error is expected to be Unauthorized"
        );

        ctx.set_sender(ADDRESS_0);
        let result: ContractResult<()> = create_token(&ctx, &mut host, &mut logger);
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Custom(CustomContractError::TokenIdAlreadyExists),
            "Error is expected to be TokenIdAlreadyExists"
        );
        claim_eq!(logger.logs.len(), 0, "No event should be logged");
    }

    /// Test minting, ensuring the new tokens are owned by the given address,
    /// the supply grows and the appropriate events are logged.
    #[concordium_test]
    fn test_mint() {
        let quantity_2 = ContractTokenAmount::from(2);
        let quantity_5 = ContractTokenAmount::from(5);

        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);
        ctx.set_owner(ACCOUNT_0);

        let parameter_bytes = to_bytes(&MintParams {
            token_id: token_0(),
            owner: Address::Contract(AUCTION),
            amount: quantity_2,
        });
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder, ContractTokenAmount::from(3));
        let mut host = TestHost::new(state, state_builder);

        let result: ContractResult<()> = mint(&ctx, &mut host, &mut logger);

        claim!(result.is_ok(), "Results in rejection");

        let balance = host
            .state()
            .balance(&token_0(), &Address::Contract(AUCTION))
            .expect_report("Token is expected to exist");
        claim_eq!(
            balance,
            quantity_2,
            "Tokens should be owned by the auction contract"
        );
        let info = host
            .state()
            .token_info(&token_0())
            .expect_report("Token is expected to exist");
        claim_eq!(info.supply, quantity_5, "Supply should include both mints");

        claim_eq!(
            logger.logs,
            vec![to_bytes(&Cis2Event::Mint(MintEvent {
                owner: Address::Contract(AUCTION),
                token_id: token_0(),
                amount: quantity_2,
            }))],
            "Expected an event for minting token_0"
        );
    }

    /// Test minting fails for senders other than the owner and for unknown
    /// token ids.
    #[concordium_test]
    fn test_mint_rejected() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_1);
        ctx.set_owner(ACCOUNT_0);

        let parameter_bytes = to_bytes(&MintParams {
            token_id: TokenIdVec(vec![7]),
            owner: ADDRESS_1,
            amount: ContractTokenAmount::from(1),
        });
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder, ContractTokenAmount::from(1));
        let mut host = TestHost::new(state, state_builder);

        let result: ContractResult<()> = mint(&ctx, &mut host, &mut logger);
        claim_eq!(result, Err(ContractError::Unauthorized));

        ctx.set_sender(ADDRESS_0);
        let result: ContractResult<()> = mint(&ctx, &mut host, &mut logger);
        claim_eq!(result, Err(ContractError::InvalidTokenId));
    }

    /// Test minting past the representable supply fails and keeps balances.
    #[concordium_test]
    fn test_mint_supply_overflow() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder, ContractTokenAmount::from(u64::MAX));

        let result = state.mint(
            &MintParams {
                token_id: token_0(),
                owner: ADDRESS_1,
                amount: ContractTokenAmount::from(1),
            },
            &mut state_builder,
        );

        claim_eq!(
            result,
            Err(ContractError::Custom(CustomContractError::SupplyOverflow))
        );
        claim_eq!(
            state.balance(&token_0(), &ADDRESS_1),
            Ok(ContractTokenAmount::from(0))
        );
    }

    /// Test transfer succeeds, when `from` is the sender.
    #[concordium_test]
    fn test_transfer_account() {
        let quantity_1 = ContractTokenAmount::from(1);
        let quantity_100 = ContractTokenAmount::from(100);

        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);

        let parameter = transfer_params(ADDRESS_0, Receiver::from_account(ACCOUNT_1), quantity_1);
        let parameter_bytes = to_bytes(&parameter);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder, quantity_100);
        let mut host = TestHost::new(state, state_builder);

        let result: ContractResult<()> = self::transfer(&ctx, &mut host, &mut logger);
        claim!(result.is_ok(), "Results in rejection");

        claim_eq!(
            host.state().balance(&token_0(), &ADDRESS_0),
            Ok(ContractTokenAmount::from(99))
        );
        claim_eq!(host.state().balance(&token_0(), &ADDRESS_1), Ok(quantity_1));

        claim_eq!(logger.logs.len(), 1, "Only one event should be logged");
        claim_eq!(
            logger.logs[0],
            to_bytes(&Cis2Event::Transfer(TransferEvent {
                from: ADDRESS_0,
                to: ADDRESS_1,
                token_id: token_0(),
                amount: quantity_1,
            })),
            "Incorrect event emitted"
        )
    }

    /// Test transfer token fails, when sender is neither the owner or an
    /// operator of the owner.
    #[concordium_test]
    fn test_transfer_not_authorized() {
        let quantity_1 = ContractTokenAmount::from(1);

        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_1);

        let parameter = transfer_params(ADDRESS_0, Receiver::from_account(ACCOUNT_1), quantity_1);
        let parameter_bytes = to_bytes(&parameter);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder, quantity_1);
        let mut host = TestHost::new(state, state_builder);

        let result: ContractResult<()> = self::transfer(&ctx, &mut host, &mut logger);
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Unauthorized,
            "Error is expected to be Unauthorized"
        )
    }

    /// Test transfer fails when the owner holds less than the amount, and a
    /// zero transfer leaves balances untouched.
    #[concordium_test]
    fn test_transfer_insufficient_funds() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);

        let parameter = transfer_params(
            ADDRESS_0,
            Receiver::from_account(ACCOUNT_1),
            ContractTokenAmount::from(3),
        );
        let parameter_bytes = to_bytes(&parameter);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder, ContractTokenAmount::from(2));
        let mut host = TestHost::new(state, state_builder);

        let result: ContractResult<()> = self::transfer(&ctx, &mut host, &mut logger);
        claim_eq!(result, Err(ContractError::InsufficientFunds));

        // Account 1 never held token_0
        ctx.set_sender(ADDRESS_1);
        let parameter = transfer_params(
            ADDRESS_1,
            Receiver::from_account(ACCOUNT_0),
            ContractTokenAmount::from(1),
        );
        let parameter_bytes = to_bytes(&parameter);
        ctx.set_parameter(&parameter_bytes);
        let result: ContractResult<()> = self::transfer(&ctx, &mut host, &mut logger);
        claim_eq!(result, Err(ContractError::InsufficientFunds));

        let parameter = transfer_params(
            ADDRESS_1,
            Receiver::from_account(ACCOUNT_0),
            ContractTokenAmount::from(0),
        );
        let parameter_bytes = to_bytes(&parameter);
        ctx.set_parameter(&parameter_bytes);
        let result: ContractResult<()> = self::transfer(&ctx, &mut host, &mut logger);
        claim!(result.is_ok(), "Zero transfer should pass");
        claim_eq!(
            host.state().balance(&token_0(), &ADDRESS_0),
            Ok(ContractTokenAmount::from(2))
        );
    }

    /// Test transfer succeeds when sender is not the owner, but is an operator
    /// of the owner.
    #[concordium_test]
    fn test_operator_transfer() {
        let quantity_2 = ContractTokenAmount::from(2);
        let quantity_3 = ContractTokenAmount::from(3);

        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_1);

        let parameter = transfer_params(ADDRESS_0, Receiver::from_account(ACCOUNT_1), quantity_2);
        let parameter_bytes = to_bytes(&parameter);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder, quantity_3);
        state.add_operator(&ADDRESS_0, &ADDRESS_1, &mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        let result: ContractResult<()> = self::transfer(&ctx, &mut host, &mut logger);

        claim!(result.is_ok(), "Results in rejection");

        claim_eq!(
            host.state().balance(&token_0(), &ADDRESS_0),
            Ok(ContractTokenAmount::from(1)),
            "Token owner balance should be decreased by the transferred amount."
        );
        claim_eq!(
            host.state().balance(&token_0(), &ADDRESS_1),
            Ok(quantity_2),
            "Token receiver balance should be increased by the transferred amount."
        );
    }

    /// Test the auction contract can hand a unit it holds to the winner.
    #[concordium_test]
    fn test_transfer_from_custody() {
        let quantity_1 = ContractTokenAmount::from(1);

        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Contract(AUCTION));

        let parameter = transfer_params(
            Address::Contract(AUCTION),
            Receiver::from_account(ACCOUNT_1),
            quantity_1,
        );
        let parameter_bytes = to_bytes(&parameter);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let mut state = State::empty(&mut state_builder);
        state
            .create_token(create_params(token_0()))
            .expect_report("Failed to create token");
        state
            .mint(
                &MintParams {
                    token_id: token_0(),
                    owner: Address::Contract(AUCTION),
                    amount: quantity_1,
                },
                &mut state_builder,
            )
            .expect_report("Failed to mint token");
        let mut host = TestHost::new(state, state_builder);

        let result: ContractResult<()> = self::transfer(&ctx, &mut host, &mut logger);
        claim!(result.is_ok(), "Results in rejection");

        claim_eq!(
            host.state().balance(&token_0(), &Address::Contract(AUCTION)),
            Ok(ContractTokenAmount::from(0))
        );
        claim_eq!(
            host.state().balance(&token_0(), &ADDRESS_1),
            Ok(quantity_1),
            "Winner balance should increase by one"
        );
    }

    /// Test transferring to a contract notifies its receive hook.
    #[concordium_test]
    fn test_transfer_to_contract() {
        let quantity_1 = ContractTokenAmount::from(1);

        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);

        let parameter = transfer_params(
            ADDRESS_0,
            Receiver::from_contract(
                AUCTION,
                OwnedEntrypointName::new_unchecked(ON_RECEIVING_CIS2_ENTRYPOINT.into()),
            ),
            quantity_1,
        );
        let parameter_bytes = to_bytes(&parameter);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder, quantity_1);
        let mut host = TestHost::new(state, state_builder);
        host.setup_mock_entrypoint(
            AUCTION,
            OwnedEntrypointName::new_unchecked(ON_RECEIVING_CIS2_ENTRYPOINT.into()),
            receive_hook_mock(move |params| {
                params.token_id == token_0() && params.amount == quantity_1 && params.from == ADDRESS_0
            }),
        );

        let result: ContractResult<()> = self::transfer(&ctx, &mut host, &mut logger);
        claim!(result.is_ok(), "Results in rejection");

        claim_eq!(
            host.state().balance(&token_0(), &Address::Contract(AUCTION)),
            Ok(quantity_1),
            "Auction contract should hold the unit"
        );
        claim_eq!(
            logger.logs[0],
            to_bytes(&Cis2Event::Transfer(TransferEvent {
                from: ADDRESS_0,
                to: Address::Contract(AUCTION),
                token_id: token_0(),
                amount: quantity_1,
            }))
        );
    }

    /// Test adding an operator succeeds and the appropriate event is logged.
    #[concordium_test]
    fn test_add_operator() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);

        let update = UpdateOperator {
            update: OperatorUpdate::Add,
            operator: ADDRESS_1,
        };
        let parameter = UpdateOperatorParams(vec![update]);
        let parameter_bytes = to_bytes(&parameter);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = State::empty(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        let result: ContractResult<()> = update_operator(&ctx, &mut host, &mut logger);

        claim!(result.is_ok(), "Results in rejection");

        let parameter_bytes = to_bytes(&OperatorOfQueryParams {
            queries: vec![
                OperatorOfQuery {
                    owner: ADDRESS_0,
                    address: ADDRESS_1,
                },
                OperatorOfQuery {
                    owner: ADDRESS_1,
                    address: ADDRESS_0,
                },
            ],
        });
        ctx.set_parameter(&parameter_bytes);
        let response = operator_of(&ctx, &host).expect_report("Query should pass");
        claim_eq!(response.0, vec![true, false]);

        claim_eq!(logger.logs.len(), 1, "One event should be logged");
        claim_eq!(
            logger.logs[0],
            to_bytes(
                &Cis2Event::<ContractTokenId, ContractTokenAmount>::UpdateOperator(
                    UpdateOperatorEvent {
                        owner: ADDRESS_0,
                        operator: ADDRESS_1,
                        update: OperatorUpdate::Add,
                    }
                )
            ),
            "Incorrect event emitted"
        )
    }

    /// Test balance queries report zero for unknown holders and fail for
    /// unknown tokens.
    #[concordium_test]
    fn test_balance_of() {
        let mut ctx = TestReceiveContext::empty();
        let parameter_bytes = to_bytes(&ContractBalanceOfQueryParams {
            queries: vec![
                BalanceOfQuery {
                    token_id: token_0(),
                    address: ADDRESS_0,
                },
                BalanceOfQuery {
                    token_id: token_0(),
                    address: Address::Contract(AUCTION),
                },
            ],
        });
        ctx.set_parameter(&parameter_bytes);

        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder, ContractTokenAmount::from(4));
        let host = TestHost::new(state, state_builder);

        let response = balance_of(&ctx, &host).expect_report("Query should pass");
        claim_eq!(
            response.0,
            vec![ContractTokenAmount::from(4), ContractTokenAmount::from(0)]
        );

        let parameter_bytes = to_bytes(&ContractBalanceOfQueryParams {
            queries: vec![BalanceOfQuery {
                token_id: TokenIdVec(vec![7]),
                address: ADDRESS_0,
            }],
        });
        ctx.set_parameter(&parameter_bytes);
        claim_eq!(
            balance_of(&ctx, &host).err(),
            Some(ContractError::InvalidTokenId)
        );
    }

    /// Test metadata queries return the registered URLs.
    #[concordium_test]
    fn test_token_metadata() {
        let mut ctx = TestReceiveContext::empty();
        let parameter_bytes = to_bytes(&ContractTokenMetadataQueryParams {
            queries: vec![token_0(), token_1()],
        });
        ctx.set_parameter(&parameter_bytes);

        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder, ContractTokenAmount::from(1));
        let host = TestHost::new(state, state_builder);

        let response = token_metadata(&ctx, &host).expect_report("Query should pass");
        let url = || MetadataUrl {
            url: METADATA_URL.into(),
            hash: None,
        };
        claim_eq!(
            to_bytes(&response),
            to_bytes(&TokenMetadataQueryResponse::from(vec![url(), url()]))
        );
    }
}
