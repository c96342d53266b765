//! Stored object kinds and their identity
//!
//! Everything the repository stores is an object identified by the SHA-1 of
//! its serialization. There are two kinds:
//!
//! - **Blob**: raw byte content of one file version
//! - **Commit**: a snapshot record (flat path → blob map, parent links,
//!   author, message, timestamp)
//!
//! Both serialize as `<type> <size>\0<content>`; the type tag keeps a blob
//! and a commit with byte-identical payloads from ever sharing a hash.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
