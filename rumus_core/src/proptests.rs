//! Property-based tests for the formula engine, validator, and formatter.
