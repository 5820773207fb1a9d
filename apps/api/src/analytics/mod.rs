// Usage analytics: records `content_generated` events forwarded by the
// analytics exporter. Errors stay inside this module.

pub mod handlers;
pub mod models;
pub mod recorder;
