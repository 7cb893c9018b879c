//! Tool registration and dispatch integration tests

mod tools;
