pub mod descriptors;
pub mod filestore;
pub mod mounts;
pub mod usage;
