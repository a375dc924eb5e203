//! YES API Test Utils
//!
//! Shared testing utilities for the API's repository, service and HTTP tests. Tests get an
//! in-memory SQLite database whose tables are generated from the SeaORM entities, plus
//! factories that insert rows with sensible defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn deletes_inactive_session() -> Result<(), DbErr> {
//!     let test = TestBuilder::new().with_session_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let session = factory::session::create_session(db).await?;
//!     // ...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
