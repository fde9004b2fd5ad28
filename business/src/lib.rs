//! Non-rendering logic of the user data grid.
//!
//! - [`UserGrid`]: record sets, load status, the single editing cursor and the
//!   validation banner
//! - [`TableState`]: the table-state adapter (filter, sort, paging, column
//!   sizing and visibility), deriving a [`TableView`] from the working set
//! - [`UsersLoader`]: the one-shot fetch of the user collection
//!
//! The UI crate only reads these types and forwards gestures to them.

mod config;
mod editing;
mod fetch_service;
mod grid;
mod loader;
mod record;
pub mod table;
mod validate;

pub use config::{BusinessConfig, ConfigError};
pub use editing::{ActiveEdit, CellEditor, EditCursor};
pub use fetch_service::{EhttpFetcher, FetchService};
#[cfg(any(test, feature = "test-utils"))]
pub use fetch_service::MockFetcher;
pub use grid::{CommitOutcome, LoadState, UserGrid};
pub use loader::{FetchError, LoadResult, UsersLoader, decode_users};
pub use record::{RecordId, UserField, UserRecord};
pub use table::{ColumnSort, SortDirection, TableState, TableView};
pub use validate::{ValidationError, validate_email, validate_phone};
