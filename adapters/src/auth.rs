//! Authentication header construction

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use integration_core::AuthConfig;

/// Headers carrying the configured credentials
pub fn auth_headers(auth: &AuthConfig) -> Vec<(String, String)> {
    match auth {
        AuthConfig::Basic { username, password } => {
            let encoded = STANDARD.encode(format!("{}:{}", username, password));
            vec![("Authorization".to_string(), format!("Basic {}", encoded))]
        }
        AuthConfig::ApiKey { key, header } => vec![(header.clone(), key.clone())],
        AuthConfig::Oauth2 { access_token } => vec![(
            "Authorization".to_string(),
            format!("Bearer {}", access_token),
        )],
    }
}
