//! Embeddable purchase SDK.
//!
//! Two independent pieces: [`PurchaseData`], the decoded form of a purchase
//! confirmation payload received from the payment backend, and
//! [`PurchaseButton`], a minimal button component a host application embeds
//! to trigger a purchase flow. Fetching the payload and acting on a button
//! activation are both the host's responsibility.

pub mod error;
pub mod models;
pub mod ui;

pub use error::{PaylinkError, Result};
pub use models::PurchaseData;
pub use ui::PurchaseButton;
