//! Validation primitives shared by every aggregate.
//!
//! - [`Notification`]: ordered accumulator of [`ValidationError`]s
//! - [`Validator`]: per-aggregate rule set writing into a notification
//! - [`rules`]: reusable Result-returning field predicates

mod notification;
pub mod rules;

pub use notification::{Notification, ValidationError};

/// A set of field rules for one aggregate type.
///
/// Implementations must be pure: they read the fields they were built from and
/// append one error per violated field, in declaration order.
pub trait Validator {
    fn validate(&self, handler: &mut Notification);
}
