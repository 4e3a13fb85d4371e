//! Domain value objects and types.
//!
//! Type-safe wrappers for company symbols. Translation to the EDGAR ticker
//! form happens at construction time, so an invalid symbol cannot reach the
//! filing workflow.

pub mod errors;
pub mod ticker;

pub use errors::ValidationError;
pub use ticker::{load_company_list, parse_company_list, Company, EdgarTicker};
