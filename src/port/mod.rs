//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams between the pipeline and the outside world. Adapters
//! implement them; the application layer only ever talks to the traits.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!     ┌──────────────┤  (cycle, dedup, enrich) ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     │                   │             │                     │
//!     ▼                   ▼             ▼                     ▼
//! ┌─────────┐      ┌────────────┐ ┌───────────┐        ┌───────────┐
//! │ Source  │      │ MarketData │ │ SeenStore │        │ Notifier  │
//! │ Adapter │      │  Adapter   │ │  Adapter  │        │ Adapters  │
//! └─────────┘      └────────────┘ └───────────┘        └───────────┘
//! ```

pub mod outbound;

pub use outbound::market_data::MarketCapProvider;
pub use outbound::notifier::{Alert, LogNotifier, Notifier, NotifierRegistry, NullNotifier};
pub use outbound::source::DisclosureSource;
pub use outbound::store::SeenStore;
