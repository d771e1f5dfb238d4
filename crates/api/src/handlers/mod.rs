//! Request handlers, one module per resource.
//!
//! Every handler validates its input, performs exactly one repository
//! call, and shapes the result into a JSON response. Database faults are
//! converted by [`crate::error::AppError`] and never leak raw.

pub mod anime;
pub mod books;
pub mod todos;
