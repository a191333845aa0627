/**
 * Form Relay Handlers
 *
 * This module implements POST /api/contact and POST /api/subscribe.
 * Both validate the submission, then relay it as JSON to the hosted
 * form service. Nothing about a submission is stored locally.
 *
 * # Validation
 *
 * Checks run in the order the site's forms present the fields, and the
 * error messages are the same strings the forms show:
 *
 * - Contact: name, email, message
 * - Subscribe: name, email
 *
 * # Relay
 *
 * A submission that passes validation is forwarded verbatim. If the
 * form service cannot be reached or answers with a non-2xx status, the
 * client gets `502 {"error": "Form submission failed."}`.
 */

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};

use crate::content::client::ContentClient;
use crate::error::ServiceError;

/// Contact form submission
#[derive(Deserialize, Serialize, Debug)]
pub struct ContactRequest {
    /// Sender name (required)
    pub name: String,
    /// Sender email (required, must look like an address)
    pub email: String,
    /// Optional subject line; empty or missing becomes "General Inquiry"
    #[serde(default)]
    pub subject: Option<String>,
    /// Message body (required)
    pub message: String,
}

/// Newsletter signup submission
#[derive(Deserialize, Serialize, Debug)]
pub struct SubscribeRequest {
    /// Subscriber name (required)
    pub name: String,
    /// Subscriber email (required, must look like an address)
    pub email: String,
}

/// Validate email format
///
/// Accepts strings with no whitespace, exactly one '@', a non-empty
/// local part, and a dot somewhere inside the domain with at least one
/// character on each side.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // An interior dot: not the first character of the domain, not the last.
    domain
        .bytes()
        .enumerate()
        .any(|(i, b)| b == b'.' && i > 0 && i + 1 < domain.len())
}

/// Contact handler
///
/// POST /api/contact. Validates the submission and relays it to the
/// contact inbox with an empty subject replaced by "General Inquiry".
///
/// # Errors
///
/// * `400 Bad Request` - If a required field is missing or the email is malformed
/// * `502 Bad Gateway` - If the form service rejects the relay
pub async fn submit_contact(
    State(content): State<ContentClient>,
    Json(request): Json<ContactRequest>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    if request.name.trim().is_empty() {
        tracing::warn!("Contact submission without a name");
        return Err(ServiceError::Validation {
            message: "Please enter your name.",
        });
    }
    if !is_valid_email(&request.email) {
        tracing::warn!("Contact submission with invalid email: {}", request.email);
        return Err(ServiceError::Validation {
            message: "Please enter a valid email address.",
        });
    }
    if request.message.trim().is_empty() {
        tracing::warn!("Contact submission without a message");
        return Err(ServiceError::Validation {
            message: "Please enter your message.",
        });
    }

    let subject = request
        .subject
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or("General Inquiry");

    let payload = serde_json::json!({
        "name": request.name,
        "email": request.email,
        "subject": subject,
        "message": request.message,
    });
    content.submit_contact_form(&payload).await?;

    tracing::info!("Contact message relayed for: {}", request.email);

    Ok(Json(serde_json::json!({
        "message": "Thank you for your message. We'll get back to you soon."
    })))
}

/// Subscribe handler
///
/// POST /api/subscribe. Validates the signup and relays it to the
/// newsletter inbox.
///
/// # Errors
///
/// * `400 Bad Request` - If the name is missing or the email is malformed
/// * `502 Bad Gateway` - If the form service rejects the relay
pub async fn subscribe_newsletter(
    State(content): State<ContentClient>,
    Json(request): Json<SubscribeRequest>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    if request.name.trim().is_empty() {
        tracing::warn!("Newsletter signup without a name");
        return Err(ServiceError::Validation {
            message: "Please enter your name.",
        });
    }
    if !is_valid_email(&request.email) {
        tracing::warn!("Newsletter signup with invalid email: {}", request.email);
        return Err(ServiceError::Validation {
            message: "Please enter a valid email address.",
        });
    }

    let payload = serde_json::json!({
        "name": request.name,
        "email": request.email,
    });
    content.submit_newsletter_form(&payload).await?;

    tracing::info!("Newsletter signup relayed for: {}", request.email);

    Ok(Json(serde_json::json!({
        "message": "You're now subscribed to our newsletter. Check your inbox for the latest updates!"
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::client::ContentEndpoints;
    use proptest::prelude::*;

    /// Endpoints that are never reached; validation rejects first.
    fn offline_client() -> ContentClient {
        ContentClient::new(ContentEndpoints {
            sports_catalog: "http://127.0.0.1:1".to_string(),
            exercise_catalog: "http://127.0.0.1:1".to_string(),
            contact_form: "http://127.0.0.1:1".to_string(),
            newsletter_form: "http://127.0.0.1:1".to_string(),
        })
    }

    fn contact(name: &str, email: &str, subject: Option<&str>, message: &str) -> ContactRequest {
        ContactRequest {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.map(String::from),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_is_valid_email_accepts_plain_addresses() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last@mail.example.com"));
    }

    #[test]
    fn test_is_valid_email_rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@example."));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("spaced user@example.com"));
        assert!(!is_valid_email(" user@example.com"));
    }

    #[tokio::test]
    async fn test_contact_requires_name_first() {
        // Name and email are both bad; the name error wins because the
        // checks run in form order.
        let result = submit_contact(
            State(offline_client()),
            Json(contact("   ", "bad-email", None, "hello")),
        )
        .await;

        let err = result.unwrap_err();
        assert_eq!(err.message(), "Please enter your name.");
    }

    #[tokio::test]
    async fn test_contact_rejects_invalid_email() {
        let result = submit_contact(
            State(offline_client()),
            Json(contact("Ana", "not-an-email", None, "hello")),
        )
        .await;

        let err = result.unwrap_err();
        assert_eq!(err.message(), "Please enter a valid email address.");
    }

    #[tokio::test]
    async fn test_contact_rejects_blank_message() {
        let result = submit_contact(
            State(offline_client()),
            Json(contact("Ana", "ana@example.com", None, "  \t ")),
        )
        .await;

        let err = result.unwrap_err();
        assert_eq!(err.message(), "Please enter your message.");
    }

    #[tokio::test]
    async fn test_subscribe_validates_name_then_email() {
        let missing_name = subscribe_newsletter(
            State(offline_client()),
            Json(SubscribeRequest {
                name: String::new(),
                email: "ana@example.com".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(missing_name.message(), "Please enter your name.");

        let bad_email = subscribe_newsletter(
            State(offline_client()),
            Json(SubscribeRequest {
                name: "Ana".to_string(),
                email: "nope".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(bad_email.message(), "Please enter a valid email address.");
    }

    #[tokio::test]
    async fn test_unreachable_form_service_maps_to_relay_error() {
        // Valid submission, but nothing is listening on the endpoint.
        let result = submit_contact(
            State(offline_client()),
            Json(contact("Ana", "ana@example.com", Some("Hi"), "hello")),
        )
        .await;

        assert!(matches!(result.unwrap_err(), ServiceError::FormRelay));
    }

    proptest! {
        #[test]
        fn well_formed_addresses_are_accepted(
            email in "[a-z0-9]{1,8}@[a-z0-9]{1,8}\\.[a-z]{2,4}",
        ) {
            prop_assert!(is_valid_email(&email));
        }

        #[test]
        fn accepted_addresses_have_the_expected_shape(input in "\\PC{0,40}") {
            if is_valid_email(&input) {
                prop_assert!(!input.chars().any(char::is_whitespace));
                prop_assert_eq!(input.matches('@').count(), 1);
                let (_, domain) = input.split_once('@').unwrap();
                prop_assert!(domain.contains('.'));
            }
        }
    }
}
