//! Reply decoding into the uniform [`OperationResult`].

use std::collections::HashMap;

use error_stack::{report, ResultExt};

use crate::{
    catalog,
    errors::{ClientError, CustomResult},
    token::AuthorizationToken,
    types::{Action, OperationResult},
};

/// Decodes one Bankstore reply.
///
/// The `{action}Response` element is located by local name so namespace
/// prefixes do not matter. A reply missing that element, missing
/// `DS_ERROR_ID`, or carrying a non-numeric code is a malformed response and
/// a hard error; it is never treated as success.
pub(crate) fn decode(raw: &str, action: Action) -> CustomResult<OperationResult, ClientError> {
    let document = roxmltree::Document::parse(raw)
        .change_context(ClientError::ResponseDeserializationFailed)
        .attach_printable("reply is not well-formed XML")?;

    let response_tag = format!("{action}Response");
    let response = document
        .descendants()
        .find(|node| node.is_element() && node.tag_name().name() == response_tag)
        .ok_or_else(|| report!(ClientError::ResponseDeserializationFailed))
        .attach_printable_lazy(|| format!("missing {response_tag} element"))?;

    let code_text = response
        .children()
        .find(|node| node.is_element() && node.tag_name().name() == "DS_ERROR_ID")
        .and_then(|node| node.text())
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| report!(ClientError::ResponseDeserializationFailed))
        .attach_printable("missing DS_ERROR_ID element")?;
    let code = code_text
        .parse::<u32>()
        .change_context(ClientError::ResponseDeserializationFailed)
        .attach_printable("DS_ERROR_ID is not numeric")?;

    let message = catalog::response_text(code).to_owned();

    // The processor does not populate result fields on error, so collection
    // happens only on the success path.
    if code != 0 {
        return Ok(OperationResult {
            success: false,
            message,
            fields: HashMap::new(),
            error_code: Some(code),
            authorization: None,
        });
    }

    let mut fields = HashMap::new();
    for child in response.children().filter(|node| node.is_element()) {
        fields.insert(
            child.tag_name().name().to_lowercase(),
            child.text().unwrap_or_default().to_owned(),
        );
    }
    let authorization = AuthorizationToken::from_response_fields(&fields);

    Ok(OperationResult {
        success: true,
        message,
        fields,
        error_code: None,
        authorization,
    })
}
