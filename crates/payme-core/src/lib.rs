//! # payme-core
//!
//! Presentation domain for the payme invoice pay page.
//!
//! The backend owns the invoice lifecycle; this crate only models what the
//! pay page needs to display one invoice and start a checkout:
//!
//! ```text
//! ┌─────────────────┐  normalize   ┌───────────┐   labels   ┌──────────┐
//! │ InvoiceResponse │─────────────▶│  Invoice  │───────────▶│ pay page │
//! │   (wire JSON)   │              │ (defaults │            │  slots   │
//! └─────────────────┘              │ resolved) │            └──────────┘
//!                                  └───────────┘
//! ```
//!
//! Everything here is pure and target-independent, so it unit-tests natively
//! while the frontend crate compiles it to wasm32.

pub mod checkout;
pub mod error;
pub mod invoice;
pub mod money;
pub mod route;
pub mod status;

pub use checkout::CheckoutSession;
pub use error::{PayError, Result};
pub use invoice::{Invoice, InvoiceResponse, Money};
pub use money::format_money;
pub use route::invoice_id_from_path;
pub use status::StatusTone;
