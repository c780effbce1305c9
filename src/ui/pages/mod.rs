//! Application pages
//!
//! - Landing page (the only real route)
//! - Not found page for everything else

mod landing;
mod not_found;

pub use landing::LandingPage;
pub use not_found::NotFoundPage;
