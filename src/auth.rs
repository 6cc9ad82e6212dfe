// Registration and login: payload shapes, the backend seam and input helpers.
// Transport and token storage belong to whoever implements `AuthBackend`.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::error::{FormField, Reason, ValidationError};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout after {0}ms")]
    Timeout(u64),

    #[error("API error: {status_code} - {message}")]
    ApiResponseError {
        status_code: u16,
        message: String,
        is_retryable: bool,
    },

    #[error("Session expired or invalid credentials")]
    Unauthorized,

    #[error("Other error: {0}")]
    Other(String),
}

impl ApiError {
    // Shown upstream as a generic "try again" message
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::NetworkError(_) | ApiError::Timeout(_) => true,
            ApiError::ApiResponseError { is_retryable, .. } => *is_retryable,
            ApiError::Unauthorized | ApiError::Other(_) => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub timeout_ms: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self { timeout_ms: 10_000 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(rename = "cep")]
    pub postal_code: String,
    #[serde(rename = "numero")]
    pub number: String,
    #[serde(rename = "complemento")]
    pub complement: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterCredentials {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
    pub cpf: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    #[serde(rename = "data_nascimento", default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(rename = "endereco", default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    pub cpf: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    #[serde(rename = "usuario")]
    pub user: UserResponse,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub message: String,
    #[serde(rename = "usuario", default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
}

// Remote account service as seen by the app core
#[async_trait]
pub trait AuthBackend: Send + Sync + 'static {
    async fn login(&self, credentials: LoginCredentials) -> Result<LoginResponse, ApiError>;

    async fn submit_registration(&self, payload: RegisterCredentials) -> Result<Receipt, ApiError>;
}

// Wraps a backend with the request deadline and logging the screens expect
pub struct AuthService<B: AuthBackend> {
    backend: B,
    config: AuthConfig,
}

impl<B: AuthBackend> AuthService<B> {
    pub fn new(backend: B, config: AuthConfig) -> Self {
        Self { backend, config }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    async fn with_deadline<T, F>(&self, call: F) -> Result<T, ApiError>
    where
        F: std::future::Future<Output = Result<T, ApiError>>,
    {
        let deadline = Duration::from_millis(self.config.timeout_ms);
        match tokio::time::timeout(deadline, call).await {
            Ok(result) => result,
            Err(_) => Err(ApiError::Timeout(self.config.timeout_ms)),
        }
    }

    pub async fn login(&self, credentials: LoginCredentials) -> Result<LoginResponse, ApiError> {
        let email = credentials.email.clone();
        tracing::debug!(%email, "login request");

        let result = self.with_deadline(self.backend.login(credentials)).await;
        match &result {
            Ok(response) => tracing::debug!(%email, user = %response.user.id, "login succeeded"),
            Err(err) => tracing::warn!(%email, error = %err, "login failed"),
        }
        result
    }

    pub async fn register(&self, form: &RegistrationForm) -> Result<Receipt, RegistrationError> {
        let payload = form.to_payload()?;
        let email = payload.email.clone();
        tracing::debug!(%email, "registration request");

        let receipt = self
            .with_deadline(self.backend.submit_registration(payload))
            .await
            .map_err(|err| {
                tracing::warn!(%email, error = %err, "registration failed");
                err
            })?;
        Ok(receipt)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

// Sign-up screen state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub cpf: String,
    pub phone: String,
    pub birth_date: Option<NaiveDate>,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            (FormField::Username, &self.username),
            (FormField::Email, &self.email),
            (FormField::Password, &self.password),
            (FormField::PasswordConfirmation, &self.confirm_password),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ValidationError::required(*field));
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::new(
                FormField::PasswordConfirmation,
                Reason::PasswordMismatch,
            ));
        }
        Ok(())
    }

    // CPF and phone travel as bare digits regardless of the display mask
    pub fn to_payload(&self) -> Result<RegisterCredentials, ValidationError> {
        self.validate()?;
        Ok(RegisterCredentials {
            name: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            cpf: only_digits(&self.cpf),
            phone: only_digits(&self.phone),
            birth_date: self.birth_date,
            address: None,
        })
    }
}

pub fn only_digits(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Masks up to 11 digits as `000.000.000-00`, growing as the user types.
pub fn format_cpf(text: &str) -> String {
    let digits: String = only_digits(text).chars().take(11).collect();
    let part = |from: usize, to: usize| &digits[from.min(digits.len())..to.min(digits.len())];

    match digits.len() {
        0..=3 => digits.clone(),
        4..=6 => format!("{}.{}", part(0, 3), part(3, 6)),
        7..=9 => format!("{}.{}.{}", part(0, 3), part(3, 6), part(6, 9)),
        _ => format!("{}.{}.{}-{}", part(0, 3), part(3, 6), part(6, 9), part(9, 11)),
    }
}

/// Masks a Brazilian phone number as `(00)00000-0000`.
pub fn format_phone_display(text: &str) -> String {
    let digits: String = only_digits(text).chars().take(11).collect();
    if digits.len() <= 2 {
        return digits;
    }
    let (area, rest) = digits.split_at(2);
    if rest.len() <= 5 {
        return format!("({}){}", area, rest);
    }
    let (first, second) = rest.split_at(5);
    format!("({}){}-{}", area, first, second)
}
