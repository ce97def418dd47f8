mod identity;
mod selection;

pub use identity::IdentityFilter;
pub use selection::{TakeFirstFilter, TakeKFilter};
