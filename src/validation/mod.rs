//! Field validators.
//!
//! Stateless predicates for the three text fields of a contact. The store
//! does not call these itself; front-ends run them before `add`/`update`.

pub mod email;
pub mod input;
pub mod name;
pub mod phone;

pub use email::validate_email;
pub use input::ContactInput;
pub use name::validate_name;
pub use phone::validate_phone;
