//! Calls into the token custody contract.
use commons::{ContractTokenAmount, Token, TransferParameter, TRANSFER_ENTRYPOINT};
use concordium_cis2::{AdditionalData, Receiver, Transfer, TransferParams};
use concordium_std::*;

use crate::state::State;

/// Transfer `amount` units of the `token` mint owned by `from` to the `to`
/// account. Rejects if the custody contract rejects the transfer.
pub fn transfer<S: HasStateApi>(
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    token: &Token,
    from: Address,
    to: AccountAddress,
    amount: ContractTokenAmount,
) -> ReceiveResult<()> {
    let parameter: TransferParameter = TransferParams(vec![Transfer {
        token_id: token.id.clone(),
        amount,
        from,
        to: Receiver::Account(to),
        data: AdditionalData::empty(),
    }]);

    host.invoke_contract(
        &token.contract,
        &parameter,
        EntrypointName::new_unchecked(TRANSFER_ENTRYPOINT),
        Amount::zero(),
    )?;

    Ok(())
}
