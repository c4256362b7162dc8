pub mod transformers;

use common_utils::{errors::CustomResult, ext_traits::ByteSliceExt};
use error_stack::ResultExt;
use portal_env::logger;

use self::transformers as finix;
use crate::{configs::settings, core::errors::ConnectorError};

/// The outbound surface of the Finix gateway. Kept behind a trait so the
/// request flows can run against a scripted double in tests.
#[async_trait::async_trait]
pub trait FinixGateway: Send + Sync {
    /// Move money from a tokenized instrument to a department's gateway
    /// merchant. A business decline is a successful call returning a
    /// transfer in the `FAILED` state, not an error.
    async fn create_transfer(
        &self,
        request: finix::FinixTransferRequest,
    ) -> CustomResult<finix::FinixTransferResponse, ConnectorError>;

    /// Tokenize a stored wallet instrument for a gateway identity.
    async fn create_payment_instrument(
        &self,
        request: finix::FinixInstrumentRequest,
    ) -> CustomResult<finix::FinixInstrumentResponse, ConnectorError>;
}

/// HTTP client for the Finix REST API. Authenticates with basic auth and
/// pins the API version per request.
#[derive(Clone)]
pub struct FinixClient {
    base_url: String,
    username: String,
    password: String,
    version: String,
    client: reqwest::Client,
}

impl FinixClient {
    pub fn new(conf: &settings::Finix) -> Self {
        Self {
            base_url: conf.base_url.trim_end_matches('/').to_string(),
            username: conf.username.clone(),
            password: conf.password.clone(),
            version: conf.version.clone(),
            client: reqwest::Client::new(),
        }
    }

    async fn post<Req, Res>(&self, path: &str, body: &Req) -> CustomResult<Res, ConnectorError>
    where
        Req: serde::Serialize,
        Res: serde::de::DeserializeOwned,
    {
        logger::debug!(tag = ?logger::Tag::ApiOutgoingRequest, path, "calling gateway");

        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .basic_auth(&self.username, Some(&self.password))
            .header("Finix-Version", &self.version)
            .json(body)
            .send()
            .await
            .change_context(ConnectorError::ConnectionFailure)?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .change_context(ConnectorError::ConnectionFailure)?;

        if !status.is_success() {
            let gateway_error: Result<finix::FinixErrorResponse, _> =
                bytes.parse_struct("FinixErrorResponse");
            logger::warn!(
                status = status.as_u16(),
                error = ?gateway_error,
                "gateway returned an error response"
            );
            return Err(error_stack::report!(ConnectorError::UnexpectedResponse {
                status_code: status.as_u16(),
            }));
        }

        bytes
            .parse_struct(std::any::type_name::<Res>())
            .change_context(ConnectorError::ResponseDeserializationFailed)
    }
}

#[async_trait::async_trait]
impl FinixGateway for FinixClient {
    async fn create_transfer(
        &self,
        request: finix::FinixTransferRequest,
    ) -> CustomResult<finix::FinixTransferResponse, ConnectorError> {
        self.post("/transfers", &request).await
    }

    async fn create_payment_instrument(
        &self,
        request: finix::FinixInstrumentRequest,
    ) -> CustomResult<finix::FinixInstrumentResponse, ConnectorError> {
        self.post("/payment_instruments", &request).await
    }
}
