/*!
 * # Authorization Module
 *
 * Role handling for the order-management views. Authentication itself is
 * owned by an external provider; this module only consumes the profile it
 * supplies and selects the view a user is entitled to.
 */

pub mod roles;

pub use roles::{select_view, ManagementView, UserProfile, UserRole};
