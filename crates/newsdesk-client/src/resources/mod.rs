//! Per-resource call-sites
//!
//! One thin client per configuration collection. Each operation constructs
//! a dispatcher tagged with its kind and class and issues the matching verb
//! against the collection or item path — pass-through only, no response
//! transformation and no client-side validation of payloads.

mod agencies;
mod categories;
mod nrcs;
mod shares;

pub use agencies::AgenciesClient;
pub use categories::CategoriesClient;
pub use nrcs::NrcsClient;
pub use shares::SharesClient;
