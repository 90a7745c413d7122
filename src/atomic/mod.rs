//! Single-slot cells for publishing a value to concurrent readers.
//!
//! Each cell holds one reference, or nothing, and offers only `load` and
//! `store`. A `store` releases everything the writer did before it, and a
//! `load` that sees the stored reference acquires all of it, so readers never
//! observe a partially built value.
//!
//! - [`AtomicRef`] holds a borrowed `&'a T` in a single atomic pointer. The
//!   cell never owns or frees the pointee; the lifetime keeps it alive for
//!   every reader.
//! - [`AtomicShared`] holds an `Arc<T>` for callers that publish owned values
//!   and want reference counting to decide when they are freed.
//!
//! Neither cell offers compare-and-swap or any other read-modify-write.

mod reference;
mod shared;
mod traits;

#[cfg(test)]
mod tests;

pub use reference::AtomicRef;
pub use shared::AtomicShared;
pub use traits::PublishCell;
