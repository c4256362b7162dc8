use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use common_utils::types::MinorUnit;
pub use common_utils::errors::CustomResult;

use crate::services::ApplicationResponse;

pub type RouterResult<T> = CustomResult<T, ApiErrorResponse>;
pub type RouterResponse<T> = CustomResult<ApplicationResponse<T>, ApiErrorResponse>;

/// Errors surfaced to API callers. Every variant maps onto one HTTP status
/// code and one stable machine-readable error code.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiErrorResponse {
    #[error("API key is missing or invalid")]
    Unauthorized,
    #[error("Access to the requested resource is forbidden")]
    AccessForbidden,
    #[error("{resource} was not found")]
    ResourceNotFound { resource: &'static str },
    #[error("Record is not payable: expected status {expected}, found {found}")]
    InvalidRecordState { expected: String, found: String },
    #[error("Claimed total {claimed} does not match the expected total {expected}")]
    AmountMismatch {
        expected: MinorUnit,
        claimed: MinorUnit,
    },
    #[error("The selected payment instrument is disabled")]
    InstrumentDisabled,
    #[error("{message}")]
    PreconditionFailed { message: &'static str },
    #[error("The requested time falls outside the facility's operating hours")]
    OutsideOperatingHours,
    #[error("{message}")]
    InvalidInterval { message: &'static str },
    #[error("The requested time slot is already booked")]
    SlotTaken,
    #[error("Webhook signature is missing or invalid")]
    WebhookSignatureInvalid,
    #[error("Webhook body could not be parsed")]
    WebhookBodyInvalid,
    #[error("Payment gateway declined the transfer: {code}")]
    GatewayError { code: String, message: String },
    #[error("Payment gateway could not be reached")]
    GatewayUnreachable,
    #[error("Something went wrong")]
    InternalServerError,
}

impl ApiErrorResponse {
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Unauthorized
            | Self::AccessForbidden
            | Self::ResourceNotFound { .. }
            | Self::InvalidRecordState { .. }
            | Self::AmountMismatch { .. }
            | Self::InstrumentDisabled
            | Self::PreconditionFailed { .. }
            | Self::OutsideOperatingHours
            | Self::InvalidInterval { .. }
            | Self::SlotTaken
            | Self::WebhookSignatureInvalid
            | Self::WebhookBodyInvalid => "invalid_request",
            Self::GatewayError { .. } | Self::GatewayUnreachable => "gateway",
            Self::InternalServerError => "api",
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized => "PT_01",
            Self::AccessForbidden => "PT_02",
            Self::ResourceNotFound { .. } => "PT_03",
            Self::InvalidRecordState { .. } => "PT_04",
            Self::AmountMismatch { .. } => "PT_05",
            Self::InstrumentDisabled => "PT_06",
            Self::PreconditionFailed { .. } => "PT_07",
            Self::OutsideOperatingHours => "PT_08",
            Self::InvalidInterval { .. } => "PT_09",
            Self::SlotTaken => "PT_10",
            Self::WebhookSignatureInvalid => "PT_11",
            Self::WebhookBodyInvalid => "PT_12",
            Self::GatewayError { .. } => "PT_13",
            Self::GatewayUnreachable => "PT_14",
            Self::InternalServerError => "PT_00",
        }
    }
}

impl ResponseError for ApiErrorResponse {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized | Self::WebhookSignatureInvalid => StatusCode::UNAUTHORIZED,
            Self::AccessForbidden => StatusCode::FORBIDDEN,
            Self::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            Self::InvalidRecordState { .. }
            | Self::AmountMismatch { .. }
            | Self::InstrumentDisabled
            | Self::PreconditionFailed { .. }
            | Self::OutsideOperatingHours
            | Self::InvalidInterval { .. }
            | Self::WebhookBodyInvalid => StatusCode::BAD_REQUEST,
            Self::SlotTaken => StatusCode::CONFLICT,
            Self::GatewayError { .. } | Self::GatewayUnreachable => StatusCode::BAD_GATEWAY,
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(api_models::errors::ErrorResponse::new(
            self.error_type(),
            self.error_code(),
            self,
        ))
    }
}

/// Errors of the storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Value not found: {0}")]
    ValueNotFound(String),
    #[error("Duplicate value: {entity}")]
    DuplicateValue { entity: &'static str },
    #[error("Mock DB error")]
    MockDbError,
}

impl StorageError {
    pub fn is_db_not_found(&self) -> bool {
        matches!(self, Self::ValueNotFound(_))
    }

    pub fn is_db_unique_violation(&self) -> bool {
        matches!(self, Self::DuplicateValue { .. })
    }
}

/// Errors while talking to the payment gateway.
#[derive(Debug, thiserror::Error)]
pub enum ConnectorError {
    #[error("Failed to encode gateway request")]
    RequestEncodingFailed,
    #[error("Failed to reach the gateway")]
    ConnectionFailure,
    #[error("Failed to deserialize gateway response")]
    ResponseDeserializationFailed,
    #[error("Gateway returned an unexpected response: {status_code}")]
    UnexpectedResponse { status_code: u16 },
}

/// Errors raised before the server starts serving.
#[derive(Debug, thiserror::Error)]
pub enum ApplicationError {
    #[error("Invalid configuration value: {0}")]
    InvalidConfigurationValueError(String),
    #[error("Failed to load configuration: {0}")]
    ConfigurationError(#[from] config::ConfigError),
    #[error("Server error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Conversions from storage errors to API errors, keeping the not-found
/// case distinguishable.
pub trait StorageErrorExt<T, E> {
    #[track_caller]
    fn to_not_found_response(self, not_found_response: ApiErrorResponse) -> RouterResult<T>;

    #[track_caller]
    fn to_duplicate_response(self, duplicate_response: ApiErrorResponse) -> RouterResult<T>;
}

impl<T> StorageErrorExt<T, StorageError> for CustomResult<T, StorageError> {
    fn to_not_found_response(self, not_found_response: ApiErrorResponse) -> RouterResult<T> {
        self.map_err(|err| {
            if err.current_context().is_db_not_found() {
                err.change_context(not_found_response)
            } else {
                err.change_context(ApiErrorResponse::InternalServerError)
            }
        })
    }

    fn to_duplicate_response(self, duplicate_response: ApiErrorResponse) -> RouterResult<T> {
        self.map_err(|err| {
            if err.current_context().is_db_unique_violation() {
                err.change_context(duplicate_response)
            } else {
                err.change_context(ApiErrorResponse::InternalServerError)
            }
        })
    }
}
