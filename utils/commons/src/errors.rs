use super::*;

/// The custom errors the contracts can produce.
#[derive(Serialize, Debug, PartialEq, Eq, Reject, SchemaType)]
pub enum CustomContractError {
    /// Failed parsing the parameter (Error code: -1).
    #[from(ParseError)]
    ParseParams,
    /// Failed logging: Log is full (Error code: -2).
    LogFull,
    /// Failed logging: Log is malformed (Error code: -3).
    LogMalformed,
    /// Failing to create a token because its ID already exists in this
    /// contract (Error code: -4).
    TokenIdAlreadyExists,
    /// No auction exists for the token (Error code: -5).
    UnknownToken,
    /// Only account addresses can bid or claim (Error code: -6).
    OnlyAccountAddress,
    /// This function must only be called by a contract (Error code: -7)
    ContractOnly,
    /// Unauthorized (Error code: -8)
    Unauthorized,
    /// An auction for this token was already started (Error code: -9)
    AlreadyInitialized,
    /// Duration is zero or ends past the representable time (Error code: -10)
    InvalidDuration,
    /// Raised if a bid is placed at or after the auction end time
    /// (Error code: -11)
    AuctionEnded,
    /// Raised if bid is not higher than the highest amount (Error code: -12)
    BidTooLow,
    /// Raised if there is an attempt to claim before the auction end time
    /// (Error code: -13)
    NotEnded,
    /// Raised if the claimant is not the highest bidder (Error code: -14)
    NotHighestBidder,
    /// Raised if the auction was already settled (Error code: -15)
    AlreadyClaimed,
    /// Amount attached to a claim is not the winning bid (Error code: -16)
    PaymentMismatch,
    /// Failed to invoke a contract (Error code: -17).
    InvokeContractError,
    /// Failed to invoke a transfer (Error code: -18).
    InvokeTransferError,
    /// Minting would overflow the token supply (Error code: -19).
    SupplyOverflow,
    /// Only single units deposited by accounts are accepted (Error code: -20)
    Unsupported,
    /// The auctioned unit of this token was already deposited
    /// (Error code: -21)
    AlreadyDeposited,
}

/// Mapping the logging errors to CustomContractError.
impl From<LogError> for CustomContractError {
    fn from(le: LogError) -> Self {
        match le {
            LogError::Full => Self::LogFull,
            LogError::Malformed => Self::LogMalformed,
        }
    }
}

/// Mapping errors related to contract invocations to CustomContractError.
impl<T> From<CallContractError<T>> for CustomContractError {
    fn from(_cce: CallContractError<T>) -> Self {
        Self::InvokeContractError
    }
}

/// Mapping CustomContractError to ContractError
impl From<CustomContractError> for ContractError {
    fn from(c: CustomContractError) -> Self {
        Cis2Error::Custom(c)
    }
}

/// Mapping errors related to transfer invocations to CustomContractError.
impl From<TransferError> for CustomContractError {
    fn from(_te: TransferError) -> Self {
        Self::InvokeTransferError
    }
}
