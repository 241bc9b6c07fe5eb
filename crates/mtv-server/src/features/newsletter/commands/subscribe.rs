//! Subscribe-to-newsletter command
//!
//! The duplicate check runs against registered user accounts, not against
//! existing subscriptions, so the same address can subscribe repeatedly
//! unless it belongs to a user.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::response::SubscriptionBody;
use crate::features::shared::validation::{validate_email, EmailValidationError};
use crate::store::models::NewSubscription;
use crate::store::ContentStore;

/// Command to subscribe an email address to the newsletter
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscribeCommand {
    pub email: String,
}

/// Errors that can occur when subscribing
#[derive(Debug, thiserror::Error)]
pub enum SubscribeError {
    #[error("Invalid subscription data: {0}")]
    InvalidBody(String),

    #[error("Email validation failed: {0}")]
    EmailValidation(#[from] EmailValidationError),

    #[error("Email already subscribed")]
    AlreadySubscribed(String),
}

/// Handler for the subscribe command
#[tracing::instrument(skip(store, body))]
pub async fn handle(
    store: Arc<ContentStore>,
    body: serde_json::Value,
) -> Result<SubscriptionBody, SubscribeError> {
    let command: SubscribeCommand =
        serde_json::from_value(body).map_err(|e| SubscribeError::InvalidBody(e.to_string()))?;

    validate_email(&command.email)?;

    if store.get_user_by_email(&command.email).await.is_some() {
        return Err(SubscribeError::AlreadySubscribed(command.email));
    }

    let subscription = store
        .create_subscription(NewSubscription {
            email: command.email,
        })
        .await;

    tracing::info!(
        subscription_id = subscription.id,
        email = %subscription.email,
        "Newsletter subscription created"
    );

    Ok(SubscriptionBody {
        subscription,
        message: "Successfully subscribed to newsletter".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::models::NewUser;
    use serde_json::json;

    #[tokio::test]
    async fn test_subscription_created() {
        let store = Arc::new(ContentStore::seeded());

        let body = handle(store.clone(), json!({ "email": "fan@example.com" }))
            .await
            .unwrap();
        assert_eq!(body.subscription.email, "fan@example.com");
        assert_eq!(body.message, "Successfully subscribed to newsletter");

        // Subscriptions are append-only; re-subscribing is allowed.
        let again = handle(store, json!({ "email": "fan@example.com" }))
            .await
            .unwrap();
        assert!(again.subscription.id > body.subscription.id);
    }

    #[tokio::test]
    async fn test_registered_user_email_rejected() {
        let store = Arc::new(ContentStore::seeded());
        store
            .create_user(NewUser {
                username: "taken".to_string(),
                password: "hunter2".to_string(),
                email: "taken@example.com".to_string(),
            })
            .await;

        let result = handle(store, json!({ "email": "taken@example.com" })).await;
        assert!(matches!(result, Err(SubscribeError::AlreadySubscribed(_))));
    }

    #[tokio::test]
    async fn test_invalid_email_rejected() {
        let store = Arc::new(ContentStore::seeded());
        for email in ["", "not-an-email", "a@b", "two@@example.com"] {
            let result = handle(store.clone(), json!({ "email": email })).await;
            assert!(
                matches!(result, Err(SubscribeError::EmailValidation(_))),
                "{email:?} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn test_malformed_body_rejected() {
        let store = Arc::new(ContentStore::seeded());
        let result = handle(store.clone(), json!({})).await;
        assert!(matches!(result, Err(SubscribeError::InvalidBody(_))));

        let result = handle(store, json!({ "email": 42 })).await;
        assert!(matches!(result, Err(SubscribeError::InvalidBody(_))));
    }
}
