//! API constants

/// Prefix every HTTP route is nested under
pub const API_PREFIX: &str = "/api";

/// Path the OpenAPI document is served at
pub const OPENAPI_PATH: &str = "/api/openapi.json";

/// Path of the RapiDoc UI
pub const DOCS_PATH: &str = "/docs";
