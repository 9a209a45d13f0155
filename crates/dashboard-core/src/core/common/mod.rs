//! Building blocks shared by every domain: the result type and its error
//! codes, client-side pagination, HTTP failure classification and the
//! helpers datasources use to talk to the transport.

pub mod error_mapping;
pub mod pagination;
pub(crate) mod remote;
pub mod result;
pub mod status;
