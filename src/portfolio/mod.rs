//! Static portfolio records and the views built from them.
//!
//! Everything here is read-only: the records feed the canned catalog
//! responses and the context bundle sent to the remote model.

mod context;
mod experiences;
mod links;
mod projects;

pub use context::{ContactDetails, ContextBundle, ContextMeta, PortfolioSummary};
pub use experiences::EXPERIENCES;
pub use links::{OWNER_NAME, SOCIAL_LINKS};
pub use projects::{FEATURED_PROJECTS, OTHER_PROJECTS};
