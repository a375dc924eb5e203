//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*` shorthand for
//! quick default creation. Defaults are unique per call so tests never collide on the
//! schema's unique columns.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let year = factory::academic_year::create_academic_year(&db).await?;
//! let session = factory::session::SessionFactory::new(&db)
//!     .year(&year)
//!     .active(true)
//!     .build()
//!     .await?;
//! ```

pub mod academic_year;
pub mod business;
pub mod helpers;
pub mod interaction;
pub mod session;
pub mod user;

pub use academic_year::create_academic_year;
pub use business::create_business;
pub use session::create_session;
pub use user::create_user;
