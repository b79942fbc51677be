//! Embeddable purchase button.
//!
//! The component produces a backend-agnostic [`View`] description and
//! forwards user activations to a host-supplied callback. A Ratatui
//! renderer for terminal hosts lives in [`button`].

pub mod button;
pub mod view;

pub use button::PurchaseButton;
pub use view::View;
