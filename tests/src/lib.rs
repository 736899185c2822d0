//! Integration tests for the reception client live under `tests/`.
