//! Outbound payments that a recipient cannot block
//!
//! A refund or a proceeds payment is first attempted as a plain transfer of
//! the payment asset. The attempt runs as an isolated sub-invocation, so a
//! recipient that cannot receive (frozen trustline, deauthorized balance)
//! only fails that sub-invocation. The amount is then deposited into the
//! wrapped asset on the recipient's behalf, where they can withdraw it later.

use crate::{events, storage, AuctionError};
use auction_interface::WrappedAssetClient;
use shared_utils::ErrorHelper;
use soroban_sdk::auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation};
use soroban_sdk::{token, vec, Address, Env, IntoVal, Symbol, Vec};

/// How a payment reached its recipient
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Payout {
    /// The payment asset was transferred directly
    Direct,
    /// The amount was credited as a wrapped-asset balance
    Credited,
}

/// Pay `amount` of the escrowed payment asset to `to`, crediting the wrapped
/// asset instead when the direct transfer fails
pub fn pay_with_fallback(e: &Env, to: &Address, amount: i128) -> Result<Payout, AuctionError> {
    let payment_token = storage::get_payment_token(e)?;
    let house = e.current_contract_address();

    let direct = token::Client::new(e, &payment_token).try_transfer(&house, to, &amount);
    if let Ok(Ok(())) = direct {
        return Ok(Payout::Direct);
    }

    let wrapped_asset = storage::get_wrapped_asset(e)?;
    authorize_deposit(e, &payment_token, &wrapped_asset, amount);
    WrappedAssetClient::new(e, &wrapped_asset).deposit_for(&house, to, &amount);

    ErrorHelper::log_warning(
        e,
        "auction_house::disburser",
        "direct transfer failed, amount credited as wrapped asset",
    );
    events::payment_credited(e, to, amount);

    Ok(Payout::Credited)
}

/// The wrapped asset pulls the underlying from the house, one call below
/// the house's direct invocation, so that transfer is pre-authorized here.
fn authorize_deposit(e: &Env, payment_token: &Address, wrapped_asset: &Address, amount: i128) {
    let house = e.current_contract_address();
    e.authorize_as_current_contract(vec![
        e,
        InvokerContractAuthEntry::Contract(SubContractInvocation {
            context: ContractContext {
                contract: payment_token.clone(),
                fn_name: Symbol::new(e, "transfer"),
                args: (house, wrapped_asset.clone(), amount).into_val(e),
            },
            sub_invocations: Vec::new(e),
        }),
    ]);
}
