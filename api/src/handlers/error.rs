//! Domain-error to HTTP-response mapping.
//!
//! Every failing endpoint goes through [`handle_domain_error`], so all
//! error bodies share the `ErrorResponse` shape. Token failures never
//! reveal which check rejected the token beyond the error code.

use actix_web::HttpResponse;
use validator::ValidationErrors;

use sd_core::errors::{AuthError, DomainError, TokenError, ValidationError};
use sd_shared::types::response::ErrorResponse;

/// Convert a domain error to the appropriate HTTP response
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    log::error!("Domain error: {:?}", error);

    match error {
        DomainError::Auth(auth_error) => match auth_error {
            AuthError::InvalidCredentials => HttpResponse::Unauthorized().json(
                ErrorResponse::new("invalid_credentials", auth_error.to_string()),
            ),
            AuthError::EmailTaken { .. } => HttpResponse::BadRequest()
                .json(ErrorResponse::new("email_taken", auth_error.to_string())),
            AuthError::PasswordPolicy { .. } => HttpResponse::BadRequest()
                .json(ErrorResponse::new("password_policy", auth_error.to_string())),
            AuthError::UserNotFound => HttpResponse::NotFound()
                .json(ErrorResponse::new("user_not_found", auth_error.to_string())),
            AuthError::InsufficientPermissions => HttpResponse::Forbidden().json(
                ErrorResponse::new("insufficient_permissions", auth_error.to_string()),
            ),
        },
        DomainError::Token(token_error) => {
            let code = match token_error {
                TokenError::Expired => "token_expired",
                TokenError::InvalidSignature => "invalid_signature",
                TokenError::AudienceMismatch => "audience_mismatch",
                TokenError::InvalidFormat => "invalid_token_format",
                TokenError::GenerationFailed => "token_generation_failed",
            };
            if matches!(token_error, TokenError::GenerationFailed) {
                HttpResponse::InternalServerError()
                    .json(ErrorResponse::new(code, token_error.to_string()))
            } else {
                HttpResponse::Unauthorized()
                    .json(ErrorResponse::new(code, token_error.to_string()))
            }
        }
        DomainError::ValidationErr(validation_error) => {
            let code = match validation_error {
                ValidationError::RequiredField { .. } => "required_field",
                ValidationError::InvalidFormat { .. } => "invalid_format",
                ValidationError::OutOfRange { .. } => "out_of_range",
                ValidationError::InvalidEmail => "invalid_email",
                ValidationError::DuplicateValue { .. } => "duplicate_value",
            };
            HttpResponse::BadRequest()
                .json(ErrorResponse::new(code, validation_error.to_string()))
        }
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorResponse::new("validation_error", message))
        }
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(
            ErrorResponse::new("not_found", format!("{} not found", resource)),
        ),
        DomainError::Unauthorized => HttpResponse::Unauthorized()
            .json(ErrorResponse::new("unauthorized", "Unauthorized access")),
        DomainError::Configuration { message } => {
            // Should never reach a request handler; startup treats it as fatal
            log::error!("Configuration error surfaced at request time: {}", message);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "internal_error",
                "An internal server error occurred",
            ))
        }
        DomainError::Database { message } => {
            log::error!("Database error: {}", message);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "internal_error",
                "An internal server error occurred",
            ))
        }
        DomainError::Internal { message } => {
            log::error!("Internal error: {}", message);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "internal_error",
                "An internal server error occurred",
            ))
        }
    }
}

/// Flatten validator errors into one human-readable message
///
/// Individual violations are joined with " # " so a single string can
/// carry all of them.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let detail = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| error.code.to_string());
            messages.push(format!("{}: {}", field, detail));
        }
    }
    messages.sort();
    messages.join(" # ")
}
