//! Request signature: the sole authentication mechanism the processor
//! trusts.
//!
//! The digest is SHA-512 over a delimiter-free concatenation of credential
//! and request fields whose order depends on the action family. Any deviation
//! from the published order is rejected remotely as a 1003/1123-class
//! signature failure, so the order lives in one data table below.

use error_stack::report;
use masking::PeekInterface;
use sha2::{Digest, Sha512};

use crate::{
    auth::PaycometAuth,
    errors::{ClientError, CustomResult},
    request::MerchantData,
    types::Action,
};

#[derive(Clone, Copy, Debug)]
enum SignedField {
    Login,
    UserId,
    CardToken,
    Terminal,
    Amount,
    OrderId,
    AuthCode,
    Pan,
    Cvv,
    JetToken,
    JetId,
    SecretKey,
}

/// Concatenation order per action family. Adding an action is a data change.
fn signed_field_order(action: Action) -> &'static [SignedField] {
    use SignedField::*;
    match action {
        Action::ExecutePurchase | Action::CreatePreauthorization => &[
            Login, UserId, CardToken, Terminal, Amount, OrderId, SecretKey,
        ],
        Action::PreauthorizationConfirm | Action::PreauthorizationCancel => &[
            Login, UserId, CardToken, Terminal, OrderId, Amount, SecretKey,
        ],
        Action::ExecuteRefund => &[
            Login, UserId, CardToken, Terminal, AuthCode, OrderId, SecretKey,
        ],
        Action::AddUser => &[Login, Pan, Cvv, Terminal, SecretKey],
        Action::AddUserToken => &[Login, JetToken, JetId, Terminal, SecretKey],
        Action::InfoUser | Action::RemoveUser => &[Login, UserId, CardToken, Terminal, SecretKey],
    }
}

fn required<'a>(
    value: Option<&'a str>,
    field_name: &'static str,
) -> CustomResult<&'a str, ClientError> {
    value.ok_or_else(|| report!(ClientError::MissingRequiredField { field_name }))
}

fn field_value<'a>(
    field: SignedField,
    auth: &'a PaycometAuth,
    data: &'a MerchantData,
) -> CustomResult<&'a str, ClientError> {
    match field {
        SignedField::Login => Ok(auth.merchant_code.peek()),
        SignedField::Terminal => Ok(auth.terminal.peek()),
        SignedField::SecretKey => Ok(auth.secret_key.peek()),
        SignedField::JetId => required(auth.jet_id.as_ref().map(|v| v.peek().as_str()), "jet_id"),
        SignedField::UserId => required(data.user_id.as_deref(), "user_id"),
        SignedField::CardToken => required(
            data.card_token.as_ref().map(|v| v.peek().as_str()),
            "card_token",
        ),
        SignedField::Amount => required(data.amount.as_deref(), "amount"),
        SignedField::OrderId => required(data.order_id.as_deref(), "order_id"),
        SignedField::AuthCode => required(data.auth_code.as_deref(), "auth_code"),
        SignedField::Pan => required(data.pan.as_ref().map(|v| v.peek().as_str()), "pan"),
        SignedField::Cvv => required(data.cvv.as_ref().map(|v| v.peek().as_str()), "cvv"),
        SignedField::JetToken => required(
            data.jet_token.as_ref().map(|v| v.peek().as_str()),
            "jet_token",
        ),
    }
}

/// Lowercase hex SHA-512 over the action's field concatenation. Deterministic
/// by construction; nothing time- or randomness-dependent enters the payload.
pub(crate) fn sign(
    action: Action,
    auth: &PaycometAuth,
    data: &MerchantData,
) -> CustomResult<String, ClientError> {
    let mut payload = String::new();
    for field in signed_field_order(action) {
        payload.push_str(field_value(*field, auth, data)?);
    }
    Ok(hex::encode(Sha512::digest(payload.as_bytes())))
}
