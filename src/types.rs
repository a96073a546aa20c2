//! Request and response types shared across the operation set.

use std::{collections::HashMap, fmt};

use error_stack::report;
use masking::{PeekInterface, Secret};

use crate::{
    errors::{ClientError, CustomResult},
    token::AuthorizationToken,
};

/// Bankstore operation names. The snake_case rendering is both the body
/// element name and the `SOAPAction` header value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Action {
    AddUser,
    AddUserToken,
    InfoUser,
    RemoveUser,
    ExecutePurchase,
    CreatePreauthorization,
    PreauthorizationConfirm,
    PreauthorizationCancel,
    ExecuteRefund,
}

/// Raw card data for tokenization. Never persisted by the adapter.
#[derive(Clone, Debug)]
pub struct Card {
    pub number: Secret<String>,
    pub exp_month: Secret<String>,
    pub exp_year: Secret<String>,
    pub cvv: Secret<String>,
}

impl Card {
    /// Wire expiry: two-digit month followed by two-digit year, so month `5`
    /// of `2021` becomes `0521`.
    pub(crate) fn expiry_mmyy(&self) -> CustomResult<Secret<String>, ClientError> {
        let month = self
            .exp_month
            .peek()
            .trim()
            .parse::<u32>()
            .map_err(|_| report!(ClientError::InvalidDataFormat { field_name: "exp_month" }))?;
        if !(1..=12).contains(&month) {
            return Err(report!(ClientError::InvalidDataFormat {
                field_name: "exp_month"
            }));
        }
        let year = self.exp_year.peek().trim();
        let year_suffix = match year.len() {
            2 => year,
            4 => &year[2..],
            _ => {
                return Err(report!(ClientError::InvalidDataFormat {
                    field_name: "exp_year"
                }))
            }
        };
        Ok(Secret::new(format!("{month:02}{year_suffix}")))
    }
}

/// Integer amount in the currency's minor units (cents for EUR).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct MinorUnit(i64);

impl MinorUnit {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn get_amount_as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for MinorUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Optional per-operation fields. Blank values are treated as absent and
/// never reach the wire.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    /// Merchant order reference. Required by purchase and authorize.
    pub order_id: Option<String>,
    /// Overrides the default EUR currency. Alphabetic codes are checked
    /// against the processor's list; purely numeric codes pass through.
    pub currency: Option<String>,
    pub description: Option<String>,
    pub owner: Option<String>,
    /// Risk scoring value, 0-100.
    pub scoring: Option<u8>,
    /// Free-form JSON blob with client details.
    pub client_data: Option<String>,
    pub merchant_descriptor: Option<String>,
    pub sca_exception: Option<String>,
    pub trx_type: Option<String>,
    pub escrow_targets: Option<String>,
    pub user_interaction: Option<String>,
}

/// Uniform outcome of one Bankstore exchange.
///
/// A processor rejection is a successful decode with `success == false`;
/// callers inspect the result rather than catching errors.
#[derive(Clone, Debug)]
pub struct OperationResult {
    pub success: bool,
    /// Catalog message for the result code, in the processor's language.
    pub message: String,
    /// Response fields keyed by lower-cased element name. Empty on failure;
    /// the processor does not populate result fields on error.
    pub fields: HashMap<String, String>,
    /// Numeric processor code, present only on failure.
    pub error_code: Option<u32>,
    /// Continuation token, present on success when the reply carries either
    /// token shape. Lookup-style operations may succeed without one.
    pub authorization: Option<AuthorizationToken>,
}
