//! Unit tests for the Scrum workflow.
