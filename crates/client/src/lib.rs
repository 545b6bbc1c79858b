//! Client-side state machines for the mobile shell: optimistic cache
//! patching with explicit rollback, the follow toggle, and feed page
//! lifetime tracking. Pure state, no I/O; the shell owns the transport.

pub mod feed;
pub mod follow;
pub mod reconcile;
