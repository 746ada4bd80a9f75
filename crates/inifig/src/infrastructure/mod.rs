//! Infrastructure layer for inifig.
//!
//! Contains OS-facing adapters: file storage and platform config paths.
//!
//! **Dependency rule**: this layer may depend on `inifig_core`, but MUST NOT
//! import the `application` layer.

pub mod paths;
pub mod storage;
