//! End-to-end operation tests against a canned-reply transport.
//!
//! Scenarios mirror the processor's remote acceptance suite: tokenize,
//! purchase with extended options, authorize then capture, purchase then
//! refund, void, verify and the documented failure paths.

use std::{
    collections::VecDeque,
    str::FromStr,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use masking::{PeekInterface, Secret};
use paycomet::{
    AuthorizationToken, Card, ClientError, CustomResult, IdentityToken, MinorUnit, OrderToken,
    Paycomet, PaycometAuth, RequestOptions, Transport, TransportError,
};

#[derive(Debug, Clone)]
struct SentRequest {
    url: String,
    body: String,
    headers: Vec<(String, String)>,
}

/// Transport double that replays canned Bankstore replies and records every
/// outgoing request.
#[derive(Default)]
struct MockTransport {
    replies: Mutex<VecDeque<String>>,
    requests: Mutex<Vec<SentRequest>>,
}

impl MockTransport {
    fn with_replies(replies: impl IntoIterator<Item = String>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn sent(&self) -> Vec<SentRequest> {
        self.requests.lock().expect("requests lock").clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn post(
        &self,
        url: &str,
        body: String,
        headers: Vec<(String, String)>,
    ) -> CustomResult<String, TransportError> {
        self.requests.lock().expect("requests lock").push(SentRequest {
            url: url.to_string(),
            body,
            headers,
        });
        Ok(self
            .replies
            .lock()
            .expect("replies lock")
            .pop_front()
            .expect("a canned reply for every request"))
    }
}

fn test_auth() -> PaycometAuth {
    PaycometAuth::new(
        Secret::new("merchant".to_string()),
        Secret::new("sekrit".to_string()),
        Secret::new("1".to_string()),
        Secret::new("127.0.0.1".to_string()),
    )
    .expect("valid credentials")
    .with_jet_id(Secret::new("jet1".to_string()))
}

fn client(transport: Arc<MockTransport>) -> Paycomet {
    Paycomet::with_transport(test_auth(), transport).with_endpoint("https://bankstore.test/xml")
}

fn test_card() -> Card {
    Card {
        number: Secret::new("4539232076648253".to_string()),
        exp_month: Secret::new("5".to_string()),
        exp_year: Secret::new("2021".to_string()),
        cvv: Secret::new("123".to_string()),
    }
}

fn identity() -> IdentityToken {
    IdentityToken::new("7", Secret::new("cardtok".to_string()))
}

fn order_options(order_id: &str) -> RequestOptions {
    RequestOptions {
        order_id: Some(order_id.to_string()),
        ..RequestOptions::default()
    }
}

fn soap_reply(action: &str, inner: &str) -> String {
    format!(
        r#"<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/"><SOAP-ENV:Body><SOAP-ENV:{action}Response>{inner}</SOAP-ENV:{action}Response></SOAP-ENV:Body></SOAP-ENV:Envelope>"#
    )
}

fn success_reply(action: &str, extra: &str) -> String {
    soap_reply(action, &format!("<DS_ERROR_ID>0</DS_ERROR_ID>{extra}"))
}

fn failure_reply(action: &str, code: u32) -> String {
    soap_reply(action, &format!("<DS_ERROR_ID>{code}</DS_ERROR_ID>"))
}

#[tokio::test]
async fn add_user_sends_card_fields_and_returns_identity_token() {
    let transport = MockTransport::with_replies([success_reply(
        "add_user",
        "<DS_IDUSER>12</DS_IDUSER><DS_TOKEN_USER>tok99</DS_TOKEN_USER>",
    )]);
    let client = client(Arc::clone(&transport));

    let result = client
        .add_user(&test_card(), &RequestOptions::default())
        .await
        .expect("exchange succeeds");

    assert!(result.success);
    assert_eq!(result.message, "Sin error");
    match result.authorization.expect("identity token") {
        AuthorizationToken::Identity(token) => {
            assert_eq!(token.encode(), "12|tok99");
        }
        other => panic!("expected identity token, got {other:?}"),
    }

    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].url, "https://bankstore.test/xml");
    assert!(sent[0].body.contains("<add_user>"));
    assert!(sent[0]
        .body
        .contains("<DS_MERCHANT_PAN>4539232076648253</DS_MERCHANT_PAN>"));
    assert!(sent[0]
        .body
        .contains("<DS_MERCHANT_EXPIRYDATE>0521</DS_MERCHANT_EXPIRYDATE>"));
    assert!(sent[0].body.contains("<DS_MERCHANT_CVV2>123</DS_MERCHANT_CVV2>"));
    assert!(sent[0]
        .headers
        .contains(&("Content-Type".to_string(), "text/xml".to_string())));
    assert!(sent[0]
        .headers
        .contains(&("SOAPAction".to_string(), "add_user".to_string())));
}

#[tokio::test]
async fn add_user_token_sends_jet_fields() {
    let transport = MockTransport::with_replies([success_reply(
        "add_user_token",
        "<DS_IDUSER>3</DS_IDUSER><DS_TOKEN_USER>tok3</DS_TOKEN_USER>",
    )]);
    let client = client(Arc::clone(&transport));

    let result = client
        .add_user_token(Secret::new("jtok".to_string()), &RequestOptions::default())
        .await
        .expect("exchange succeeds");
    assert!(result.success);

    let body = &transport.sent()[0].body;
    assert!(body.contains("<DS_MERCHANT_JETTOKEN>jtok</DS_MERCHANT_JETTOKEN>"));
    assert!(body.contains("<DS_MERCHANT_JETID>jet1</DS_MERCHANT_JETID>"));
}

#[tokio::test]
async fn purchase_without_order_id_fails_before_any_network_call() {
    let transport = MockTransport::with_replies([]);
    let client = client(Arc::clone(&transport));

    let error = client
        .purchase(MinorUnit::new(1300), &identity(), &RequestOptions::default())
        .await
        .expect_err("local validation failure");
    assert!(matches!(
        error.current_context(),
        ClientError::MissingRequiredField {
            field_name: "order_id"
        }
    ));
    assert!(transport.sent().is_empty());
}

#[tokio::test]
async fn purchase_with_unknown_currency_fails_before_any_network_call() {
    let transport = MockTransport::with_replies([]);
    let client = client(Arc::clone(&transport));

    let options = RequestOptions {
        currency: Some("AUD".to_string()),
        ..order_options("42")
    };
    let error = client
        .purchase(MinorUnit::new(1300), &identity(), &options)
        .await
        .expect_err("local validation failure");
    assert!(matches!(
        error.current_context(),
        ClientError::InvalidCurrency(currency) if currency == "AUD"
    ));
    assert!(transport.sent().is_empty());
}

#[tokio::test]
async fn purchase_returns_an_order_token_consumable_by_capture() {
    let transport = MockTransport::with_replies([
        success_reply(
            "execute_purchase",
            "<DS_MERCHANT_ORDER>42</DS_MERCHANT_ORDER><DS_MERCHANT_AUTHCODE>AUTH9</DS_MERCHANT_AUTHCODE><DS_MERCHANT_AMOUNT>1300</DS_MERCHANT_AMOUNT>",
        ),
        success_reply(
            "preauthorization_confirm",
            "<DS_MERCHANT_ORDER>42</DS_MERCHANT_ORDER><DS_MERCHANT_AUTHCODE>AUTH9</DS_MERCHANT_AUTHCODE>",
        ),
    ]);
    let client = client(Arc::clone(&transport));

    let purchase = client
        .purchase(MinorUnit::new(1300), &identity(), &order_options("42"))
        .await
        .expect("exchange succeeds");
    assert!(purchase.success);

    let wire_token = purchase.authorization.expect("order token").encode();
    assert_eq!(wire_token, "42|AUTH9");

    // The wire text round-trips through the typed decoder into capture.
    let order = OrderToken::from_str(&wire_token).expect("two parts");
    assert_eq!(order.order_id, "42");
    assert_eq!(order.auth_code, "AUTH9");

    let capture = client
        .capture(
            MinorUnit::new(1300),
            &order,
            &identity(),
            &RequestOptions::default(),
        )
        .await
        .expect("exchange succeeds");
    assert!(capture.success);

    let body = &transport.sent()[1].body;
    assert!(body.contains("<preauthorization_confirm>"));
    assert!(body.contains("<DS_MERCHANT_ORDER>42</DS_MERCHANT_ORDER>"));
    assert!(body.contains("<DS_MERCHANT_AUTHCODE>AUTH9</DS_MERCHANT_AUTHCODE>"));
    assert!(body.contains("<DS_IDUSER>7</DS_IDUSER>"));
    assert!(body.contains("<DS_TOKEN_USER>cardtok</DS_TOKEN_USER>"));
}

#[tokio::test]
async fn purchase_with_extended_options_emits_them() {
    let transport = MockTransport::with_replies([success_reply(
        "execute_purchase",
        "<DS_MERCHANT_ORDER>42</DS_MERCHANT_ORDER><DS_MERCHANT_AUTHCODE>A</DS_MERCHANT_AUTHCODE>",
    )]);
    let client = client(Arc::clone(&transport));

    let options = RequestOptions {
        description: Some("This is a product description".to_string()),
        owner: Some("This is a transaction description".to_string()),
        scoring: Some(10),
        client_data: Some(r#"{"field1":"client info"}"#.to_string()),
        merchant_descriptor: Some("merchant info for invoice".to_string()),
        ..order_options("42")
    };
    client
        .purchase(MinorUnit::new(1300), &identity(), &options)
        .await
        .expect("exchange succeeds");

    let body = &transport.sent()[0].body;
    assert!(body.contains(
        "<DS_MERCHANT_PRODUCTDESCRIPTION>This is a product description</DS_MERCHANT_PRODUCTDESCRIPTION>"
    ));
    assert!(body.contains("<DS_MERCHANT_OWNER>This is a transaction description</DS_MERCHANT_OWNER>"));
    assert!(body.contains("<DS_MERCHANT_SCORING>10</DS_MERCHANT_SCORING>"));
    assert!(body.contains("<DS_MERCHANT_DATA>"));
    assert!(body
        .contains("<DS_MERCHANT_MERCHANTDESCRIPTOR>merchant info for invoice</DS_MERCHANT_MERCHANTDESCRIPTOR>"));
}

#[tokio::test]
async fn failed_purchase_surfaces_the_catalog_message() {
    let transport = MockTransport::with_replies([failure_reply("execute_purchase", 1001)]);
    let client = client(Arc::clone(&transport));

    let result = client
        .purchase(MinorUnit::new(1300), &identity(), &order_options("42"))
        .await
        .expect("exchange succeeds");
    assert!(!result.success);
    assert_eq!(result.error_code, Some(1001));
    assert_eq!(result.message, "Usuario no encontrado. Contacte con PAYCOMET");
    assert!(result.fields.is_empty());
    assert!(result.authorization.is_none());
}

#[tokio::test]
async fn refund_emits_the_refund_family_fields() {
    let transport = MockTransport::with_replies([success_reply(
        "execute_refund",
        "<DS_MERCHANT_ORDER>42</DS_MERCHANT_ORDER><DS_MERCHANT_AUTHCODE>AUTH9</DS_MERCHANT_AUTHCODE>",
    )]);
    let client = client(Arc::clone(&transport));

    let refund = client
        .refund(
            MinorUnit::new(1299),
            &OrderToken::new("42", "AUTH9"),
            &identity(),
            &RequestOptions::default(),
        )
        .await
        .expect("exchange succeeds");
    assert!(refund.success);

    let sent = transport.sent();
    assert!(sent[0].body.contains("<execute_refund>"));
    assert!(sent[0]
        .body
        .contains("<DS_MERCHANT_AMOUNT>1299</DS_MERCHANT_AMOUNT>"));
    assert!(sent[0]
        .headers
        .contains(&("SOAPAction".to_string(), "execute_refund".to_string())));
}

#[tokio::test]
async fn void_cancels_a_preauthorization() {
    let transport = MockTransport::with_replies([success_reply(
        "preauthorization_cancel",
        "<DS_MERCHANT_ORDER>42</DS_MERCHANT_ORDER><DS_MERCHANT_AUTHCODE>AUTH9</DS_MERCHANT_AUTHCODE>",
    )]);
    let client = client(Arc::clone(&transport));

    let void = client
        .void(
            &OrderToken::new("42", "AUTH9"),
            &identity(),
            MinorUnit::new(1300),
            &RequestOptions::default(),
        )
        .await
        .expect("exchange succeeds");
    assert!(void.success);
    assert!(transport.sent()[0].body.contains("<preauthorization_cancel>"));
}

#[tokio::test]
async fn info_user_succeeds_without_a_continuation_token() {
    let transport = MockTransport::with_replies([success_reply(
        "info_user",
        "<DS_MERCHANT_PAN>453923...8253</DS_MERCHANT_PAN><DS_CARD_BRAND>VISA</DS_CARD_BRAND>",
    )]);
    let client = client(Arc::clone(&transport));

    let result = client
        .info_user(&identity(), &RequestOptions::default())
        .await
        .expect("exchange succeeds");
    assert!(result.success);
    assert_eq!(
        result.fields.get("ds_card_brand").map(String::as_str),
        Some("VISA")
    );
    assert!(result.authorization.is_none());
}

#[tokio::test]
async fn verify_authorizes_then_voids_and_reports_the_authorize_result() {
    let transport = MockTransport::with_replies([
        success_reply(
            "create_preauthorization",
            "<DS_MERCHANT_ORDER>42</DS_MERCHANT_ORDER><DS_MERCHANT_AUTHCODE>AUTH9</DS_MERCHANT_AUTHCODE>",
        ),
        success_reply(
            "preauthorization_cancel",
            "<DS_MERCHANT_ORDER>42</DS_MERCHANT_ORDER><DS_MERCHANT_AUTHCODE>AUTH9</DS_MERCHANT_AUTHCODE>",
        ),
    ]);
    let client = client(Arc::clone(&transport));

    let result = client
        .verify(&identity(), &order_options("42"))
        .await
        .expect("exchange succeeds");
    assert!(result.success);

    let sent = transport.sent();
    assert_eq!(sent.len(), 2);
    assert!(sent[0].body.contains("<create_preauthorization>"));
    assert!(sent[0].body.contains("<DS_MERCHANT_AMOUNT>100</DS_MERCHANT_AMOUNT>"));
    assert!(sent[1].body.contains("<preauthorization_cancel>"));
    assert!(sent[1].body.contains("<DS_MERCHANT_AMOUNT>100</DS_MERCHANT_AMOUNT>"));
}

#[tokio::test]
async fn failed_verify_skips_the_void() {
    let transport = MockTransport::with_replies([failure_reply("create_preauthorization", 1001)]);
    let client = client(Arc::clone(&transport));

    let result = client
        .verify(&identity(), &order_options("42"))
        .await
        .expect("exchange succeeds");
    assert!(!result.success);
    assert_eq!(result.error_code, Some(1001));
    assert_eq!(transport.sent().len(), 1);
}

#[tokio::test]
async fn transcripts_scrub_the_stored_card_token() {
    let transport = MockTransport::with_replies([success_reply(
        "execute_purchase",
        "<DS_MERCHANT_ORDER>42</DS_MERCHANT_ORDER><DS_MERCHANT_AUTHCODE>AUTH9</DS_MERCHANT_AUTHCODE>",
    )]);
    let client = client(Arc::clone(&transport));

    let token = identity();
    client
        .purchase(MinorUnit::new(1300), &token, &order_options("42"))
        .await
        .expect("exchange succeeds");

    let transcript = paycomet::scrub(&transport.sent()[0].body);
    assert!(!transcript.contains(token.card_token.peek()));
    assert!(transcript.contains("<DS_TOKEN_USER>[FILTERED]</DS_TOKEN_USER>"));
}

#[tokio::test]
async fn malformed_reply_is_a_decode_error_not_success() {
    let transport = MockTransport::with_replies(["<html>gateway timeout</html>".to_string()]);
    let client = client(Arc::clone(&transport));

    let error = client
        .purchase(MinorUnit::new(1300), &identity(), &order_options("42"))
        .await
        .expect_err("decode failure");
    assert!(matches!(
        error.current_context(),
        ClientError::ResponseDeserializationFailed
    ));
}
