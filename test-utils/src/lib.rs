//! Guild Mirror Test Utils
//!
//! Provides shared testing utilities for the guild mirror. The crate builds valid Serenity
//! model objects (guilds, roles, channels, permission overwrites) by deserializing JSON shaped
//! like Discord's REST responses, so conversion code can be tested without a live connection.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_guild, test_role_json, TestRole};
//!
//! #[test]
//! fn converts_guild() {
//!     let everyone = test_role_json(123456789, "@everyone", 0, 0, TestRole::default());
//!     let guild = create_test_guild(123456789, "Test Guild", None, vec![everyone], Default::default());
//!     // Convert and assert...
//! }
//! ```

pub mod serenity;
