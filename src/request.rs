//! Request assembly: merchant data fields and the SOAP envelope.

use error_stack::{report, ResultExt};
use masking::{PeekInterface, Secret};
use serde::{Serialize, Serializer};

use crate::{
    auth::PaycometAuth,
    consts,
    errors::{ClientError, CustomResult},
    signature,
    token::{IdentityToken, OrderToken},
    types::{Action, Card, MinorUnit, RequestOptions},
};

/// Serializes a secret member into the request body. The body is the one
/// place credential and card values are exposed; transcripts of it go
/// through [`crate::scrub`] before logging.
fn peeked<S: Serializer>(value: &Secret<String>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(value.peek())
}

fn peeked_opt<S: Serializer>(
    value: &Option<Secret<String>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(secret) => serializer.serialize_str(secret.peek()),
        None => serializer.serialize_none(),
    }
}

/// Field set of one action body. Struct order is the wire order; every
/// optional member is skipped entirely when absent rather than emitted as an
/// empty element, which is what the remote API expects.
#[derive(Debug, Serialize)]
pub(crate) struct MerchantData {
    #[serde(rename = "DS_MERCHANT_TERMINAL", serialize_with = "peeked")]
    pub(crate) terminal: Secret<String>,
    #[serde(rename = "DS_MERCHANT_MERCHANTCODE", serialize_with = "peeked")]
    pub(crate) merchant_code: Secret<String>,
    #[serde(rename = "DS_ORIGINAL_IP", serialize_with = "peeked")]
    pub(crate) original_ip: Secret<String>,
    #[serde(
        rename = "DS_MERCHANT_JETID",
        skip_serializing_if = "Option::is_none",
        serialize_with = "peeked_opt"
    )]
    pub(crate) jet_id: Option<Secret<String>>,
    /// Computed last, once every signable field has its final value.
    #[serde(
        rename = "DS_MERCHANT_MERCHANTSIGNATURE",
        skip_serializing_if = "Option::is_none",
        serialize_with = "peeked_opt"
    )]
    pub(crate) signature: Option<Secret<String>>,
    #[serde(rename = "DS_MERCHANT_CURRENCY", skip_serializing_if = "Option::is_none")]
    pub(crate) currency: Option<String>,
    #[serde(rename = "DS_MERCHANT_AMOUNT", skip_serializing_if = "Option::is_none")]
    pub(crate) amount: Option<String>,
    #[serde(rename = "DS_MERCHANT_ORDER", skip_serializing_if = "Option::is_none")]
    pub(crate) order_id: Option<String>,
    #[serde(
        rename = "DS_MERCHANT_JETTOKEN",
        skip_serializing_if = "Option::is_none",
        serialize_with = "peeked_opt"
    )]
    pub(crate) jet_token: Option<Secret<String>>,
    #[serde(rename = "DS_IDUSER", skip_serializing_if = "Option::is_none")]
    pub(crate) user_id: Option<String>,
    #[serde(
        rename = "DS_TOKEN_USER",
        skip_serializing_if = "Option::is_none",
        serialize_with = "peeked_opt"
    )]
    pub(crate) card_token: Option<Secret<String>>,
    #[serde(rename = "DS_MERCHANT_AUTHCODE", skip_serializing_if = "Option::is_none")]
    pub(crate) auth_code: Option<String>,
    #[serde(
        rename = "DS_MERCHANT_PAN",
        skip_serializing_if = "Option::is_none",
        serialize_with = "peeked_opt"
    )]
    pub(crate) pan: Option<Secret<String>>,
    #[serde(
        rename = "DS_MERCHANT_EXPIRYDATE",
        skip_serializing_if = "Option::is_none",
        serialize_with = "peeked_opt"
    )]
    pub(crate) expiry_date: Option<Secret<String>>,
    #[serde(
        rename = "DS_MERCHANT_CVV2",
        skip_serializing_if = "Option::is_none",
        serialize_with = "peeked_opt"
    )]
    pub(crate) cvv: Option<Secret<String>>,
    #[serde(
        rename = "DS_MERCHANT_PRODUCTDESCRIPTION",
        skip_serializing_if = "Option::is_none"
    )]
    pub(crate) description: Option<String>,
    #[serde(rename = "DS_MERCHANT_OWNER", skip_serializing_if = "Option::is_none")]
    pub(crate) owner: Option<String>,
    #[serde(rename = "DS_MERCHANT_SCORING", skip_serializing_if = "Option::is_none")]
    pub(crate) scoring: Option<String>,
    #[serde(rename = "DS_MERCHANT_DATA", skip_serializing_if = "Option::is_none")]
    pub(crate) client_data: Option<String>,
    #[serde(
        rename = "DS_MERCHANT_MERCHANTDESCRIPTOR",
        skip_serializing_if = "Option::is_none"
    )]
    pub(crate) merchant_descriptor: Option<String>,
    #[serde(
        rename = "DS_MERCHANT_SCA_EXCEPTION",
        skip_serializing_if = "Option::is_none"
    )]
    pub(crate) sca_exception: Option<String>,
    #[serde(rename = "DS_MERCHANT_TRX_TYPE", skip_serializing_if = "Option::is_none")]
    pub(crate) trx_type: Option<String>,
    #[serde(rename = "DS_ESCROW_TARGETS", skip_serializing_if = "Option::is_none")]
    pub(crate) escrow_targets: Option<String>,
    #[serde(rename = "DS_USER_INTERACTION", skip_serializing_if = "Option::is_none")]
    pub(crate) user_interaction: Option<String>,
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

impl MerchantData {
    pub(crate) fn from_auth(auth: &PaycometAuth) -> Self {
        Self {
            terminal: auth.terminal.clone(),
            merchant_code: auth.merchant_code.clone(),
            original_ip: auth.originating_ip.clone(),
            jet_id: auth.jet_id.clone(),
            signature: None,
            currency: None,
            amount: None,
            order_id: None,
            jet_token: None,
            user_id: None,
            card_token: None,
            auth_code: None,
            pan: None,
            expiry_date: None,
            cvv: None,
            description: None,
            owner: None,
            scoring: None,
            client_data: None,
            merchant_descriptor: None,
            sca_exception: None,
            trx_type: None,
            escrow_targets: None,
            user_interaction: None,
        }
    }

    pub(crate) fn set_card(&mut self, card: &Card) -> CustomResult<(), ClientError> {
        self.expiry_date = Some(card.expiry_mmyy()?);
        self.pan = Some(card.number.clone());
        self.cvv = Some(card.cvv.clone());
        Ok(())
    }

    pub(crate) fn set_identity(&mut self, token: &IdentityToken) {
        self.user_id = Some(token.user_id.clone());
        self.card_token = Some(token.card_token.clone());
    }

    pub(crate) fn set_order(&mut self, token: &OrderToken) {
        self.order_id = Some(token.order_id.clone());
        self.auth_code = Some(token.auth_code.clone());
    }

    pub(crate) fn set_amount(
        &mut self,
        amount: MinorUnit,
        options: &RequestOptions,
    ) -> CustomResult<(), ClientError> {
        self.amount = Some(amount.to_string());
        let currency = options
            .currency
            .as_deref()
            .and_then(non_blank)
            .unwrap_or_else(|| consts::DEFAULT_CURRENCY.to_owned());
        self.currency = Some(currency_code(&currency)?);
        Ok(())
    }

    pub(crate) fn apply_options(&mut self, options: &RequestOptions) {
        self.order_id = options.order_id.as_deref().and_then(non_blank);
        self.description = options.description.as_deref().and_then(non_blank);
        self.owner = options.owner.as_deref().and_then(non_blank);
        self.scoring = options.scoring.map(|value| value.to_string());
        self.client_data = options.client_data.as_deref().and_then(non_blank);
        self.merchant_descriptor = options.merchant_descriptor.as_deref().and_then(non_blank);
        self.sca_exception = options.sca_exception.as_deref().and_then(non_blank);
        self.trx_type = options.trx_type.as_deref().and_then(non_blank);
        self.escrow_targets = options.escrow_targets.as_deref().and_then(non_blank);
        self.user_interaction = options.user_interaction.as_deref().and_then(non_blank);
    }
}

/// Normalizes a currency value: purely numeric processor codes pass through
/// unchanged, alphabetic codes must be on the supported list.
pub(crate) fn currency_code(currency: &str) -> CustomResult<String, ClientError> {
    if !currency.is_empty() && currency.chars().all(|c| c.is_ascii_digit()) {
        return Ok(currency.to_owned());
    }
    let upper = currency.to_uppercase();
    if consts::CURRENCY_CODES.contains(&upper.as_str()) {
        Ok(upper)
    } else {
        Err(report!(ClientError::InvalidCurrency(currency.to_owned())))
    }
}

/// Signs the resolved field set and wraps it into the SOAP 1.1 envelope the
/// Bankstore endpoint expects.
pub(crate) fn build_envelope(
    action: Action,
    auth: &PaycometAuth,
    mut data: MerchantData,
) -> CustomResult<String, ClientError> {
    data.signature = Some(Secret::new(signature::sign(action, auth, &data)?));
    let body = quick_xml::se::to_string_with_root(&action.to_string(), &data)
        .change_context(ClientError::RequestEncodingFailed)?;
    Ok(format!(
        r#"<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/"><SOAP-ENV:Header/><SOAP-ENV:Body>{body}</SOAP-ENV:Body></SOAP-ENV:Envelope>"#
    ))
}

pub(crate) fn headers(action: Action) -> Vec<(String, String)> {
    vec![
        (
            consts::CONTENT_TYPE.to_string(),
            consts::CONTENT_TYPE_XML.to_string(),
        ),
        (consts::SOAP_ACTION.to_string(), action.to_string()),
    ]
}
