/// Tag for the Custom Start Auction event.
pub const START_AUCTION_TAG: u8 = u8::MAX - 23;

/// Tag for the Custom Biding event.
pub const BIDING_TAG: u8 = u8::MAX - 11;

/// Tag for the Custom Claim event.
pub const CLAIM_TAG: u8 = u8::MAX - 12;

/// Tag for the Custom Deposit event.
pub const DEPOSIT_TAG: u8 = u8::MAX - 24;

/// Name of the CIS-2 transfer entrypoint invoked on the token custody contract.
pub const TRANSFER_ENTRYPOINT: &str = "transfer";

/// Name of the CIS-2 hook entrypoint of contracts receiving tokens.
pub const ON_RECEIVING_CIS2_ENTRYPOINT: &str = "onReceivingCIS2";

#[concordium_std::concordium_cfg_test]
mod tests {
    use super::*;
    use concordium_std::*;

    #[concordium_test]
    fn test_auction_tags_are_distinct() {
        let tags = [START_AUCTION_TAG, BIDING_TAG, CLAIM_TAG, DEPOSIT_TAG];
        for (i, tag) in tags.iter().enumerate() {
            claim!(
                !tags[i + 1..].contains(tag),
                "Every auction event needs its own tag"
            );
        }
        // The top five tags belong to the CIS-2 standard events
        claim!(tags.iter().all(|tag| *tag <= u8::MAX - 5));
    }
}
