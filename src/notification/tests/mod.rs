//! Unit tests for notification dispatch.
