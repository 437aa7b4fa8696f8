//! Diesel table definitions for the SQLite store.
//!
//! Kept in step with the DDL in `bootstrap.rs` by hand; there is no
//! migration runner.

diesel::table! {
    /// Registered accounts.
    ///
    /// `username` and `email` each carry a UNIQUE constraint.
    users (id) {
        /// Auto-incremented primary key, never reused.
        id -> BigInt,
        /// Login name, stored verbatim.
        username -> Text,
        /// Contact address, stored verbatim.
        email -> Text,
        /// Lowercase hex SHA-256 digest of the password.
        password -> Text,
    }
}
