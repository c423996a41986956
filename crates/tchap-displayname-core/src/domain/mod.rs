pub mod email;
pub mod name;
pub mod org;

pub use email::{split_email, EmailParts};
pub use name::capitalize_name;
pub use org::{Organization, TCHAP_ADMIN};
