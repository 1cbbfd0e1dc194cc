//! Token validation for the API boundary.
//!
//! Login, registration, and token issuance are an external collaborator's
//! concern; the façade only validates bearer tokens and extracts the caller
//! identity.

pub mod jwt;
