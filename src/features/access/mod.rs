//! Static role-based access policy.
//!
//! Every mutating operation names the [`Capability`] it needs and checks it
//! once through [`authorize`]. Roles form a closed set; there is no
//! per-record authorization beyond the assignment ownership check done by
//! the validation workflow.

mod policy;
mod role;

pub use policy::{
    authorize, can_assign, can_create_complaint_or_photo, can_validate, Capability,
};
pub use role::Role;
