//! The Bankstore client and its operation set.

use std::sync::Arc;

use error_stack::{report, ResultExt};
use masking::Secret;

use crate::{
    auth::PaycometAuth,
    consts,
    errors::{ClientError, CustomResult},
    request::{self, MerchantData},
    response, scrub,
    token::{AuthorizationToken, IdentityToken, OrderToken},
    transport::{ReqwestTransport, Transport},
    types::{Action, Card, MinorUnit, OperationResult, RequestOptions},
};

/// Stateless adapter for the PAYCOMET XML Bankstore SOAP API.
///
/// Each operation independently builds one signed envelope, performs one
/// exchange through the injected transport and decodes one reply; nothing is
/// cached or shared between calls, so one client may serve concurrent
/// callers.
pub struct Paycomet {
    auth: PaycometAuth,
    transport: Arc<dyn Transport>,
    endpoint: String,
}

impl Paycomet {
    /// Client with the default reqwest transport against the production
    /// endpoint.
    pub fn new(auth: PaycometAuth) -> CustomResult<Self, ClientError> {
        let transport = ReqwestTransport::new().change_context(ClientError::NetworkFailure)?;
        Ok(Self::with_transport(auth, Arc::new(transport)))
    }

    /// Client with an injected transport, for tests and custom stacks.
    pub fn with_transport(auth: PaycometAuth, transport: Arc<dyn Transport>) -> Self {
        Self {
            auth,
            transport,
            endpoint: consts::BANKSTORE_URL.to_owned(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Tokenizes raw card data into an identity token.
    pub async fn add_user(
        &self,
        card: &Card,
        options: &RequestOptions,
    ) -> CustomResult<OperationResult, ClientError> {
        let mut data = MerchantData::from_auth(&self.auth);
        data.apply_options(options);
        data.set_card(card)?;
        self.commit(Action::AddUser, data).await
    }

    /// Tokenizes an externally captured JET token. Requires the JET id
    /// credential.
    pub async fn add_user_token(
        &self,
        jet_token: Secret<String>,
        options: &RequestOptions,
    ) -> CustomResult<OperationResult, ClientError> {
        let mut data = MerchantData::from_auth(&self.auth);
        data.apply_options(options);
        data.jet_token = Some(jet_token);
        self.commit(Action::AddUserToken, data).await
    }

    /// Looks up the stored card behind an identity token.
    pub async fn info_user(
        &self,
        identity: &IdentityToken,
        options: &RequestOptions,
    ) -> CustomResult<OperationResult, ClientError> {
        let mut data = MerchantData::from_auth(&self.auth);
        data.apply_options(options);
        data.set_identity(identity);
        self.commit(Action::InfoUser, data).await
    }

    /// Deletes the stored card behind an identity token.
    pub async fn remove_user(
        &self,
        identity: &IdentityToken,
        options: &RequestOptions,
    ) -> CustomResult<OperationResult, ClientError> {
        let mut data = MerchantData::from_auth(&self.auth);
        data.apply_options(options);
        data.set_identity(identity);
        self.commit(Action::RemoveUser, data).await
    }

    /// Charges a stored card. `options.order_id` is required; on success the
    /// result carries the order token for capture-independent refunds.
    pub async fn purchase(
        &self,
        amount: MinorUnit,
        identity: &IdentityToken,
        options: &RequestOptions,
    ) -> CustomResult<OperationResult, ClientError> {
        self.payment(Action::ExecutePurchase, amount, identity, options)
            .await
    }

    /// Preauthorizes an amount on a stored card. `options.order_id` is
    /// required; the returned order token is consumed by capture or void.
    pub async fn authorize(
        &self,
        amount: MinorUnit,
        identity: &IdentityToken,
        options: &RequestOptions,
    ) -> CustomResult<OperationResult, ClientError> {
        self.payment(Action::CreatePreauthorization, amount, identity, options)
            .await
    }

    /// Confirms a preauthorization. The order token alone does not carry the
    /// identity pair, so the identity token from tokenization is a separate
    /// argument.
    pub async fn capture(
        &self,
        amount: MinorUnit,
        order: &OrderToken,
        identity: &IdentityToken,
        options: &RequestOptions,
    ) -> CustomResult<OperationResult, ClientError> {
        let mut data = MerchantData::from_auth(&self.auth);
        data.apply_options(options);
        data.set_identity(identity);
        data.set_order(order);
        data.set_amount(amount, options)?;
        self.commit(Action::PreauthorizationConfirm, data).await
    }

    /// Cancels a preauthorization for the given amount.
    pub async fn void(
        &self,
        order: &OrderToken,
        identity: &IdentityToken,
        amount: MinorUnit,
        options: &RequestOptions,
    ) -> CustomResult<OperationResult, ClientError> {
        let mut data = MerchantData::from_auth(&self.auth);
        data.apply_options(options);
        data.set_identity(identity);
        data.set_order(order);
        data.set_amount(amount, options)?;
        self.commit(Action::PreauthorizationCancel, data).await
    }

    /// Refunds against a purchase's order token.
    pub async fn refund(
        &self,
        amount: MinorUnit,
        order: &OrderToken,
        identity: &IdentityToken,
        options: &RequestOptions,
    ) -> CustomResult<OperationResult, ClientError> {
        let mut data = MerchantData::from_auth(&self.auth);
        data.apply_options(options);
        data.set_amount(amount, options)?;
        data.set_identity(identity);
        data.set_order(order);
        self.commit(Action::ExecuteRefund, data).await
    }

    /// Verifies a stored card by authorizing a nominal amount and voiding it
    /// again. The authorize outcome is the verification result; the void
    /// outcome is ignored.
    pub async fn verify(
        &self,
        identity: &IdentityToken,
        options: &RequestOptions,
    ) -> CustomResult<OperationResult, ClientError> {
        let authorization = self
            .authorize(consts::VERIFY_AMOUNT, identity, options)
            .await?;
        if !authorization.success {
            return Ok(authorization);
        }
        if let Some(AuthorizationToken::Order(order)) = &authorization.authorization {
            if let Err(error) = self
                .void(order, identity, consts::VERIFY_AMOUNT, options)
                .await
            {
                tracing::warn!(?error, "verify void failed; reporting the authorize result");
            }
        }
        Ok(authorization)
    }

    async fn payment(
        &self,
        action: Action,
        amount: MinorUnit,
        identity: &IdentityToken,
        options: &RequestOptions,
    ) -> CustomResult<OperationResult, ClientError> {
        let mut data = MerchantData::from_auth(&self.auth);
        data.apply_options(options);
        if data.order_id.is_none() {
            return Err(report!(ClientError::MissingRequiredField {
                field_name: "order_id"
            }));
        }
        data.set_identity(identity);
        data.set_amount(amount, options)?;
        self.commit(action, data).await
    }

    async fn commit(
        &self,
        action: Action,
        data: MerchantData,
    ) -> CustomResult<OperationResult, ClientError> {
        let body = request::build_envelope(action, &self.auth, data)?;
        tracing::debug!(action = %action, request = %scrub::scrub(&body), "bankstore request");
        let reply = self
            .transport
            .post(&self.endpoint, body, request::headers(action))
            .await
            .change_context(ClientError::NetworkFailure)?;
        tracing::debug!(action = %action, response = %scrub::scrub(&reply), "bankstore reply");
        response::decode(&reply, action)
    }
}
