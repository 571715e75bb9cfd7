//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each
//! service owns one feature area: credentials, balances, wager
//! settlement, the session state machine, and event logging.

mod auth;
pub mod logging;
mod session;
mod slot;
mod wallet;

pub use auth::AuthService;
pub use logging::{EntryPoint, LogEvent, LoggingService};
pub use session::{Reply, Session, PROMPT, WELCOME};
pub use slot::SlotGame;
pub use wallet::WalletService;
