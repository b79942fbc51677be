//! Purchase confirmation payload.
//!
//! The payment backend reports a completed checkout handoff as a small JSON
//! object with snake_case keys. [`PurchaseData`] is the decoded, immutable
//! in-memory form.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// A decoded purchase confirmation.
///
/// All three fields are required on the wire; decoding fails rather than
/// defaulting any of them, so a constructed value is always complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseData {
    /// URL to resume or complete the purchase flow.
    pub redirect_link: String,
    /// Opaque identifier assigned by the payment service.
    pub purchase_id: i64,
    /// Merchant-assigned order identifier.
    pub order_reference: String,
}

impl PurchaseData {
    /// Decodes a purchase confirmation from a raw JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`PaylinkError::Decode`](crate::PaylinkError::Decode) if the
    /// payload is not valid JSON, a required key is missing, or a value has
    /// the wrong type.
    pub fn decode(payload: &str) -> crate::Result<Self> {
        serde_json::from_str(payload).map_err(|e| {
            debug!("rejected purchase payload: {e}");
            e.into()
        })
    }

    /// Decodes a purchase confirmation from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Same conditions as [`decode`](Self::decode).
    pub fn decode_value(payload: Value) -> crate::Result<Self> {
        serde_json::from_value(payload).map_err(|e| {
            debug!("rejected purchase payload: {e}");
            e.into()
        })
    }

    /// Encodes the record back into its wire representation.
    ///
    /// Produces exactly the three snake_case keys the backend uses, so
    /// decode followed by encode reproduces the original payload.
    pub fn encode(&self) -> Value {
        serde_json::json!({
            "redirect_link": self.redirect_link,
            "purchase_id": self.purchase_id,
            "order_reference": self.order_reference,
        })
    }

    /// Encodes the record as JSON text.
    pub fn encode_string(&self) -> String {
        self.encode().to_string()
    }
}
