//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!        ┌──────────────┐      ┌─────────────────────────┐
//!        │  CLI adapter │ ───▶ │ Application (scanner,   │
//!        └──────────────┘      │ detector) + Domain      │
//!                              └────────────┬────────────┘
//!                                           │ OddsFeed
//!                                           ▼
//!                              ┌─────────────────────────┐
//!                              │ Odds API / file replay  │
//!                              └─────────────────────────┘
//! ```

pub mod outbound;
