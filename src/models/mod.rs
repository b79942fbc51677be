//! Wire models exchanged with the payment backend.

pub mod purchase;

pub use purchase::PurchaseData;
