use shared::Principal;

/// Connection settings for the external services.
///
/// Built once in `main` and handed down through props; nothing in the app
/// reads global mutable state.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    /// Custody identity that contributions are paid to.
    pub custody_principal: Principal,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000".to_string(),
            custody_principal: Principal::from("rrkah-fqaaa-aaaaa-aaaaq-cai"),
        }
    }
}
