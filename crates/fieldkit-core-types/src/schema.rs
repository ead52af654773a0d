//! Canonical schema constants for structured logging and events
//!
//! These constants keep log fields consistent between the store, the admin
//! helpers and the test capture layer.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Record identifiers
pub const FIELD_MODEL: &str = "model";
pub const FIELD_PK: &str = "pk";
pub const FIELD_ACCESSOR: &str = "accessor";
pub const FIELD_SITE: &str = "site";

// State transitions
pub const FIELD_DELETED_STATE: &str = "deleted_state";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
