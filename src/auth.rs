//! Merchant credential set.

use error_stack::report;
use masking::{PeekInterface, Secret};

use crate::errors::{ClientError, CustomResult};

/// Credentials identifying one merchant terminal. Immutable for the client's
/// lifetime; the secret key never appears on the wire, only in the request
/// signature.
#[derive(Clone, Debug)]
pub struct PaycometAuth {
    pub(crate) merchant_code: Secret<String>,
    pub(crate) secret_key: Secret<String>,
    pub(crate) terminal: Secret<String>,
    pub(crate) originating_ip: Secret<String>,
    /// Required only by the JET tokenization flow.
    pub(crate) jet_id: Option<Secret<String>>,
}

impl PaycometAuth {
    /// Builds the credential set, rejecting blank required members. A blank
    /// credential is a misconfigured client, not an operational outcome.
    pub fn new(
        merchant_code: Secret<String>,
        secret_key: Secret<String>,
        terminal: Secret<String>,
        originating_ip: Secret<String>,
    ) -> CustomResult<Self, ClientError> {
        for (value, field_name) in [
            (&merchant_code, "merchant_code"),
            (&secret_key, "secret_key"),
            (&terminal, "terminal"),
            (&originating_ip, "originating_ip"),
        ] {
            if value.peek().trim().is_empty() {
                return Err(report!(ClientError::MissingRequiredField { field_name }));
            }
        }
        Ok(Self {
            merchant_code,
            secret_key,
            terminal,
            originating_ip,
            jet_id: None,
        })
    }

    pub fn with_jet_id(mut self, jet_id: Secret<String>) -> Self {
        self.jet_id = Some(jet_id);
        self
    }
}
