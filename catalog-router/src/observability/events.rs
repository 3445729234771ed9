//! Canonical structured event names used across `catalog-router`.

// Template lookup events.
pub const TEMPLATE_RESOLVED: &str = "template_resolved";
pub const TEMPLATE_LOOKUP_FAILED: &str = "template_lookup_failed";

// Hierarchy resolution events.
pub const HIERARCHY_RESOLVED: &str = "hierarchy_resolved";
pub const HIERARCHY_CYCLE_DETECTED: &str = "hierarchy_cycle_detected";
pub const HIERARCHY_DEPTH_EXCEEDED: &str = "hierarchy_depth_exceeded";
pub const HIERARCHY_ANCESTOR_LOOKUP_FAILED: &str = "hierarchy_ancestor_lookup_failed";

// Translator events.
pub const TRANSLATION_SKIPPED_SAME_LOCALE: &str = "translation_skipped_same_locale";
pub const TRANSLATION_BATCH_OK: &str = "translation_batch_ok";
pub const TRANSLATION_BATCH_RETRY: &str = "translation_batch_retry";
pub const TRANSLATION_BATCH_FAILED: &str = "translation_batch_failed";

// Binding fan-out and registration events.
pub const BINDING_SET_EMPTY: &str = "binding_set_empty";
pub const BINDING_ROUTE_BUILT: &str = "binding_route_built";
pub const BINDING_ROUTE_SKIPPED: &str = "binding_route_skipped";
pub const BINDING_SET_PARTIAL: &str = "binding_set_partial";
pub const ROUTES_REGISTER_START: &str = "routes_register_start";
pub const ROUTES_REGISTER_OK: &str = "routes_register_ok";
pub const ROUTES_REGISTER_FAILED: &str = "routes_register_failed";
pub const URL_INDEX_SAVE_FAILED: &str = "url_index_save_failed";

// Search canonical events.
pub const CANONICAL_DECODE_OK: &str = "canonical_decode_ok";
pub const CANONICAL_DECODE_FAILED: &str = "canonical_decode_failed";
pub const CANONICAL_FIELD_LOOKUP_FAILED: &str = "canonical_field_lookup_failed";
pub const CANONICAL_SINK_FAILED: &str = "canonical_sink_failed";

// Top-level event handling.
pub const EVENT_PROCESSED: &str = "event_processed";
pub const EVENT_DROPPED: &str = "event_dropped";
