//! Host mocks shared by the contracts' unit tests. Enabled by the `test`
//! feature.
use crate::{ContractTokenAmount, ContractTokenId, OnReceivingParams, TransferParameter};
use concordium_cis2::{Transfer, TransferParams};
use concordium_std::test_infrastructure::MockFn;
use concordium_std::*;

/// Mock of a CIS-2 `transfer` entrypoint. Traps unless the batch is
/// non-empty and every transfer satisfies `check`.
pub fn transfer_mock<S>(
    check: impl Fn(&Transfer<ContractTokenId, ContractTokenAmount>) -> bool + 'static,
) -> MockFn<S> {
    MockFn::new(move |parameter, _, _, _state| {
        let TransferParams(transfers) = TransferParameter::deserial(&mut Cursor::new(parameter))
            .map_err(|_| CallContractError::Trap)?;
        if transfers.is_empty() || !transfers.iter().all(|transfer| check(transfer)) {
            return Err(CallContractError::Trap);
        }
        Ok((false, Some(())))
    })
}

/// Mock of an `onReceivingCIS2` hook. Traps unless the notification
/// satisfies `check`.
pub fn receive_hook_mock<S>(check: impl Fn(&OnReceivingParams) -> bool + 'static) -> MockFn<S> {
    MockFn::new(move |parameter, _, _, _state| {
        let params = OnReceivingParams::deserial(&mut Cursor::new(parameter))
            .map_err(|_| CallContractError::Trap)?;
        if !check(&params) {
            return Err(CallContractError::Trap);
        }
        Ok((false, Some(())))
    })
}
