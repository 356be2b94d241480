pub mod filestore;
pub mod mount;
