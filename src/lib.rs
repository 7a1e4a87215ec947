pub mod account;
pub mod catalog;
pub mod config;
pub mod decimal;
pub mod earner;
pub mod errors;
pub mod events;

// re-export key types
pub use account::{Account, AccountId, AccountView};
pub use catalog::{CatalogClient, CatalogError, Product};
pub use config::{LoanPolicy, WorkTerms};
pub use decimal::{Money, Rate};
pub use earner::{Earner, TransferReceipt};
pub use errors::{Result, ValidationError};
pub use events::{Event, EventStore};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
