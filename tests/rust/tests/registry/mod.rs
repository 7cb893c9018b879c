//! Registry client integration tests
