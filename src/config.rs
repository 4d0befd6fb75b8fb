/// Configuration constants for the TEO API
pub mod api {
    /// Default API endpoint host
    pub const HOST: &str = "teo.tencentcloudapi.com";

    /// Service name used in the TC3 credential scope
    pub const SERVICE: &str = "teo";

    /// API version sent in the X-TC-Version header
    pub const VERSION: &str = "2022-01-06";

    /// Default page size for offset/limit list requests
    pub const DEFAULT_PAGE_SIZE: i64 = 100;

    /// Maximum number of concurrent detail requests (multi-ID get)
    pub const MAX_CONCURRENT_REQUESTS: usize = 10;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Environment variable for the secret ID
    pub const SECRET_ID_ENV_VAR: &str = "TENCENTCLOUD_SECRET_ID";

    /// Environment variable for the secret key
    pub const SECRET_KEY_ENV_VAR: &str = "TENCENTCLOUD_SECRET_KEY";

    /// Environment variable for the region
    pub const REGION_ENV_VAR: &str = "TENCENTCLOUD_REGION";

    /// Path to the shared credentials file (relative to HOME)
    pub const FILE_PATH: &str = ".tencentcloud/credentials";

    /// Profile section read from the credentials file
    pub const DEFAULT_PROFILE: &str = "default";
}

/// Client-side rate limiting defaults
pub mod ratelimit {
    /// Sustained requests per second allowed per API action
    pub const DEFAULT_RATE: f64 = 20.0;

    /// Burst capacity per API action
    pub const DEFAULT_BURST: f64 = 20.0;
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
