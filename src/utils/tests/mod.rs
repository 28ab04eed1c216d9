//! Unit tests for the utility modules
