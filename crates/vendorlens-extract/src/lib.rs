//! VendorLens Extract: turns a free-text vendor email thread into a
//! structured [`VendorRecord`].

pub mod extract;
pub mod forwarding;
pub mod record;

pub use extract::catalog::Category;
pub use extract::{extract, validate_submission};
pub use forwarding::describe_forwarding_workflow;
pub use record::{Logistics, Pricing, Standards, VendorRecord};
