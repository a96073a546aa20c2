//! Wire-level constants for the Bankstore endpoint.

use crate::types::MinorUnit;

/// Production Bankstore endpoint. The processor serves test terminals on the
/// same URL, keyed by the credential set.
pub const BANKSTORE_URL: &str = "https://api.paycomet.com/gateway/xml-bankstore?wsdl";

pub(crate) const CONTENT_TYPE: &str = "Content-Type";
pub(crate) const CONTENT_TYPE_XML: &str = "text/xml";
pub(crate) const SOAP_ACTION: &str = "SOAPAction";

/// Placeholder written over sensitive values in scrubbed transcripts.
pub const FILTERED_PLACEHOLDER: &str = "[FILTERED]";

/// Amount authorized (and subsequently voided) by a verify call.
pub(crate) const VERIFY_AMOUNT: MinorUnit = MinorUnit::new(100);

/// Currencies the processor accepts by alphabetic code. Purely numeric
/// currency codes bypass this list.
pub(crate) const CURRENCY_CODES: &[&str] = &["EUR", "USD", "GBP", "JPY"];

pub(crate) const DEFAULT_CURRENCY: &str = "EUR";
