//! Checkout Session
//!
//! Response shape of `POST /pay/{id}/checkout`. The session is consumed
//! immediately for a full-page redirect and never persisted.

use serde::{Deserialize, Serialize};

/// A provider-hosted checkout the user gets redirected into
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSession {
    /// URL of the provider's hosted payment page
    pub checkout_url: String,

    /// Backend's payment attempt id, useful in logs when a redirect is
    /// reported as broken
    #[serde(default)]
    pub attempt_id: Option<String>,
}
