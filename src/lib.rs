//! Client adapter for the PAYCOMET XML Bankstore SOAP API.
//!
//! Translates the fixed Bankstore operation set (tokenize, purchase,
//! authorize, capture, void, refund, verify, card lookup and delete) into
//! signed SOAP envelopes, exchanges them over an injected transport and
//! decodes the replies into a uniform [`OperationResult`].
//!
//! Processor rejections are values, not errors: a non-zero result code comes
//! back as a failed result carrying the catalog message and numeric code.
//! `Err` is reserved for local validation, encoding/decoding and transport
//! problems.
//!
//! ```no_run
//! use masking::Secret;
//! use paycomet::{Card, ClientError, CustomResult, MinorUnit, Paycomet, PaycometAuth, RequestOptions};
//!
//! # async fn run() -> CustomResult<(), ClientError> {
//! let auth = PaycometAuth::new(
//!     Secret::new("merchant".to_string()),
//!     Secret::new("secret-key".to_string()),
//!     Secret::new("1".to_string()),
//!     Secret::new("203.0.113.10".to_string()),
//! )?;
//! let client = Paycomet::new(auth)?;
//!
//! let card = Card {
//!     number: Secret::new("4539232076648253".to_string()),
//!     exp_month: Secret::new("5".to_string()),
//!     exp_year: Secret::new("2021".to_string()),
//!     cvv: Secret::new("123".to_string()),
//! };
//! let tokenized = client.add_user(&card, &RequestOptions::default()).await?;
//! if let Some(paycomet::AuthorizationToken::Identity(identity)) = tokenized.authorization {
//!     let options = RequestOptions {
//!         order_id: Some("42".to_string()),
//!         ..RequestOptions::default()
//!     };
//!     let charged = client.purchase(MinorUnit::new(1300), &identity, &options).await?;
//!     println!("{}: {}", charged.success, charged.message);
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod catalog;
pub mod client;
pub mod consts;
pub mod errors;
mod request;
mod response;
pub mod scrub;
mod signature;
pub mod token;
pub mod transport;
pub mod types;

pub use self::{
    auth::PaycometAuth,
    client::Paycomet,
    errors::{ClientError, CustomResult, TransportError},
    scrub::scrub,
    token::{AuthorizationToken, IdentityToken, OrderToken, TokenParseError},
    transport::{ReqwestTransport, Transport},
    types::{Action, Card, MinorUnit, OperationResult, RequestOptions},
};
