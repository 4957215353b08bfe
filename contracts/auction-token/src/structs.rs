use super::*;

/// The state for each address.
#[derive(Serial, DeserialWithState, Deletable, StateClone)]
#[concordium(state_parameter = "S")]
pub struct AddressState<S: HasStateApi> {
    /// Balance per token mint.
    pub balances: StateMap<ContractTokenId, ContractTokenAmount, S>,
    /// The address which are currently enabled as operators for this address.
    pub operators: StateSet<Address, S>,
}

/// Registered token mint.
#[derive(Debug, Serialize, SchemaType, Clone, PartialEq, Eq)]
pub struct TokenInfo {
    pub metadata_url: String,
    /// Number of decimals of the unit, fixed at creation.
    pub decimals: u8,
    /// Total amount minted so far.
    pub supply: ContractTokenAmount,
}

/// The contract state.
#[derive(Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// The state for each address.
    pub state: StateMap<Address, AddressState<S>, S>,
    /// All registered token mints.
    pub tokens: StateMap<ContractTokenId, TokenInfo, S>,
}

/// Parameter of the `createToken` function.
#[derive(Debug, Serialize, SchemaType, Clone)]
pub struct CreateTokenParams {
    pub token_id: ContractTokenId,
    pub metadata_url: String,
    pub decimals: u8,
}

/// Parameter of the `mint` function.
#[derive(Debug, Serialize, SchemaType, Clone)]
pub struct MintParams {
    pub token_id: ContractTokenId,
    /// Address credited with the minted units.
    pub owner: Address,
    pub amount: ContractTokenAmount,
}
