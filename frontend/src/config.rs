pub struct Config {
    pub api_base_url: &'static str,
    /// Compared in the browser only; this gates the UI, not the API.
    pub management_passcode: &'static str,
    pub storage_key: &'static str,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            api_base_url: "/api",
            management_passcode: "0880",
            storage_key: "goal-voting-store",
        }
    }
}

pub const CONFIG: Config = Config::new();
