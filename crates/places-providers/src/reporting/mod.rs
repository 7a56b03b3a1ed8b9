//! Validation Reporter Implementations
//!
//! | Provider | Description |
//! |----------|-------------|
//! | TracingValidationReporter | Structured log events |
//! | CollectingReporter | In-memory list, for callers and tests |

pub mod collecting;
pub mod tracing;

pub use collecting::{CollectingReporter, Report};
pub use self::tracing::TracingValidationReporter;
