//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by owner: `page` is what the page shell holds, `upload` is
//! local to the upload widget, and `toast` is the app-wide notification queue.
//! All three are plain structs so their transitions can be unit tested.

pub mod page;
pub mod toast;
pub mod upload;
