mod cookies;
mod destination;

pub mod constants;

pub use cookies::find as cookie;
pub use destination::{divert, Destination, Visit};
