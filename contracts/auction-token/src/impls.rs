use super::*;

impl<S: HasStateApi> AddressState<S> {
    fn empty(state_builder: &mut StateBuilder<S>) -> Self {
        Self {
            balances: state_builder.new_map(),
            operators: state_builder.new_set(),
        }
    }
}

impl TokenInfo {
    pub fn new(metadata_url: String, decimals: u8) -> Self {
        Self {
            metadata_url,
            decimals,
            supply: 0.into(),
        }
    }

    pub fn metadata_url(&self) -> MetadataUrl {
        MetadataUrl {
            url: self.metadata_url.clone(),
            hash: None,
        }
    }
}

// Functions for creating, updating and querying the contract state.
impl<S: HasStateApi> State<S> {
    /// Creates a empty state with no tokens.
    pub fn empty(state_builder: &mut StateBuilder<S>) -> Self {
        State {
            state: state_builder.new_map(),
            tokens: state_builder.new_map(),
        }
    }

    /// Register a new token mint with zero supply.
    pub fn create_token(&mut self, params: CreateTokenParams) -> ContractResult<()> {
        ensure!(
            !self.contains_token(&params.token_id),
            CustomContractError::TokenIdAlreadyExists.into()
        );

        self.tokens.insert(
            params.token_id,
            TokenInfo::new(params.metadata_url, params.decimals),
        );
        Ok(())
    }

    /// Credit `amount` units of an existing mint to `owner`.
    pub fn mint(
        &mut self,
        params: &MintParams,
        state_builder: &mut StateBuilder<S>,
    ) -> ContractResult<()> {
        let mut info = self
            .tokens
            .get_mut(&params.token_id)
            .ok_or(ContractError::InvalidTokenId)?;

        // Balances never exceed the supply, so only the supply is checked
        info.supply = info
            .supply
            .0
            .checked_add(params.amount.0)
            .map(TokenAmountU64)
            .ok_or(CustomContractError::SupplyOverflow)?;

        let mut owner_state = self
            .state
            .entry(params.owner)
            .or_insert_with(|| AddressState::empty(state_builder));
        let mut balance = owner_state
            .balances
            .entry(params.token_id.clone())
            .or_insert_with(|| 0.into());
        *balance += params.amount;

        Ok(())
    }

    /// Check that the token ID currently exists in this contract.
    #[inline(always)]
    fn contains_token(&self, token_id: &ContractTokenId) -> bool {
        self.tokens.get(token_id).is_some()
    }

    /// Get the current balance of a given token ID for a given address.
    /// Results in an error if the token ID does not exist in the state.
    pub fn balance(
        &self,
        token_id: &ContractTokenId,
        address: &Address,
    ) -> ContractResult<ContractTokenAmount> {
        ensure!(self.contains_token(token_id), ContractError::InvalidTokenId);

        let balance = self
            .state
            .get(address)
            .map(|address_state| {
                address_state
                    .balances
                    .get(token_id)
                    .map(|balance| *balance)
                    .unwrap_or_else(|| 0.into())
            })
            .unwrap_or_else(|| 0.into());
        Ok(balance)
    }

    /// Check if an address is an operator of a given owner address.
    pub fn is_operator(&self, address: &Address, owner: &Address) -> bool {
        self.state
            .get(owner)
            .map(|address_state| address_state.operators.contains(address))
            .unwrap_or(false)
    }

    pub fn token_info(&self, token_id: &ContractTokenId) -> ContractResult<TokenInfo> {
        self.tokens
            .get(token_id)
            .map(|info| (*info).clone())
            .ok_or(ContractError::InvalidTokenId)
    }

    /// Update the state with a transfer.
    /// Results in an error if the token ID does not exist in the state or if
    /// the from address have insufficient tokens to do the transfer.
    pub fn transfer(
        &mut self,
        transfer: &Transfer<ContractTokenId, ContractTokenAmount>,
        state_builder: &mut StateBuilder<S>,
    ) -> ContractResult<()> {
        ensure!(
            self.contains_token(&transfer.token_id),
            ContractError::InvalidTokenId
        );

        // A zero transfer does not modify the state.
        if transfer.amount == 0.into() {
            return Ok(());
        }

        {
            let mut from_state = self
                .state
                .entry(transfer.from)
                .occupied_or(ContractError::InsufficientFunds)?;
            let mut from_balance = from_state
                .balances
                .entry(transfer.token_id.clone())
                .occupied_or(ContractError::InsufficientFunds)?;
            ensure!(
                *from_balance >= transfer.amount,
                ContractError::InsufficientFunds
            );
            *from_balance -= transfer.amount;
        }

        let mut to_state = self
            .state
            .entry(transfer.to.address())
            .or_insert_with(|| AddressState::empty(state_builder));
        let mut to_balance = to_state
            .balances
            .entry(transfer.token_id.clone())
            .or_insert_with(|| 0.into());
        *to_balance += transfer.amount;

        Ok(())
    }

    /// Update the state adding a new operator for a given address.
    /// Succeeds even if the `operator` is already an operator for the
    /// `address`.
    pub fn add_operator(
        &mut self,
        owner: &Address,
        operator: &Address,
        state_builder: &mut StateBuilder<S>,
    ) {
        let mut owner_state = self
            .state
            .entry(*owner)
            .or_insert_with(|| AddressState::empty(state_builder));
        owner_state.operators.insert(*operator);
    }

    /// Update the state removing an operator for a given address.
    /// Succeeds even if the `operator` is _not_ an operator for the `address`.
    pub fn remove_operator(&mut self, owner: &Address, operator: &Address) {
        self.state
            .get_mut(owner)
            .map(|mut address_state| address_state.operators.remove(operator));
    }
}
