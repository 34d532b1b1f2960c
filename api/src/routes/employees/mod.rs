//! Employee CRUD route handlers
//!
//! Every route here sits behind the bearer-token middleware; any
//! authenticated identity may call them.

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod search;
pub mod update;
