//! Property-based tests across the engineering, arithmetic and median code.
