//! Mounted file store enumeration from `df` and `mount` output.
//!
//! The usage report and the mount table are parsed separately, joined on the
//! volume name, filtered through a [`filter::FilterPolicy`] and probed for
//! capacity. Host access goes through the traits in [`sys`].

pub mod collectors;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod sys;
pub mod util;

pub use collectors::filestore::FileStoreEnumerator;
pub use error::CollectError;
pub use models::filestore::FileStore;
