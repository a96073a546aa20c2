//! Authorization-token codec.
//!
//! The processor hands back opaque continuation handles as a pipe-delimited
//! pair with no type tag on the wire. Internally the two shapes are kept as
//! distinct types so an identity token cannot be passed where an order token
//! belongs; the wire text stays the untyped `a|b` pair for compatibility.

use std::{collections::HashMap, str::FromStr};

use masking::{PeekInterface, Secret};
use thiserror::Error;

pub(crate) const TOKEN_DELIMITER: char = '|';

/// The wire text did not split into exactly two parts. Neither component may
/// contain the delimiter; processor-issued identifiers never do.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("authorization token is not a pipe-delimited pair")]
pub struct TokenParseError;

fn split_pair(value: &str) -> Result<(String, String), TokenParseError> {
    let mut parts = value.split(TOKEN_DELIMITER);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(first), Some(second), None) => Ok((first.to_owned(), second.to_owned())),
        _ => Err(TokenParseError),
    }
}

/// Identity-scoped token: a stored-card reference under a processor user id.
/// Produced by the tokenization and card-management operations.
#[derive(Clone, Debug)]
pub struct IdentityToken {
    pub user_id: String,
    pub card_token: Secret<String>,
}

impl IdentityToken {
    pub fn new(user_id: impl Into<String>, card_token: Secret<String>) -> Self {
        Self {
            user_id: user_id.into(),
            card_token,
        }
    }

    /// Untyped wire text, `{userId}|{cardToken}`.
    pub fn encode(&self) -> String {
        format!(
            "{}{TOKEN_DELIMITER}{}",
            self.user_id,
            self.card_token.peek()
        )
    }
}

impl FromStr for IdentityToken {
    type Err = TokenParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (user_id, card_token) = split_pair(value)?;
        Ok(Self::new(user_id, Secret::new(card_token)))
    }
}

/// Order-scoped token: a merchant order reference plus the processor's
/// authorization code. Produced by the payment operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderToken {
    pub order_id: String,
    pub auth_code: String,
}

impl OrderToken {
    pub fn new(order_id: impl Into<String>, auth_code: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            auth_code: auth_code.into(),
        }
    }

    /// Untyped wire text, `{orderId}|{authCode}`.
    pub fn encode(&self) -> String {
        format!("{}{TOKEN_DELIMITER}{}", self.order_id, self.auth_code)
    }
}

impl FromStr for OrderToken {
    type Err = TokenParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (order_id, auth_code) = split_pair(value)?;
        Ok(Self::new(order_id, auth_code))
    }
}

/// Either continuation shape, as inferred from a decoded reply.
#[derive(Clone, Debug)]
pub enum AuthorizationToken {
    Identity(IdentityToken),
    Order(OrderToken),
}

impl AuthorizationToken {
    pub fn encode(&self) -> String {
        match self {
            Self::Identity(token) => token.encode(),
            Self::Order(token) => token.encode(),
        }
    }

    /// Derives the token from collected response fields. The shape is
    /// determined solely by which fields are present: the identity pair is
    /// tried first, then the order pair. Neither pair present is not an
    /// error; lookup-style operations succeed without a continuation token.
    pub(crate) fn from_response_fields(fields: &HashMap<String, String>) -> Option<Self> {
        if let (Some(user_id), Some(card_token)) =
            (fields.get("ds_iduser"), fields.get("ds_token_user"))
        {
            return Some(Self::Identity(IdentityToken::new(
                user_id.clone(),
                Secret::new(card_token.clone()),
            )));
        }
        if let (Some(order_id), Some(auth_code)) = (
            fields.get("ds_merchant_order"),
            fields.get("ds_merchant_authcode"),
        ) {
            return Some(Self::Order(OrderToken::new(
                order_id.clone(),
                auth_code.clone(),
            )));
        }
        None
    }
}
