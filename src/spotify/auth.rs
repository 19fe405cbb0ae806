use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::header::AUTHORIZATION;
use serde_json::Value;

use super::Spotify;
use crate::{
    config::Credentials,
    error::{Error, Result},
    types::Token,
};

impl Spotify {
    /// Obtains an application access token using the client-credentials flow.
    ///
    /// Sends a single `POST` to the configured token endpoint with a form body
    /// of `grant_type=client_credentials` and the credential pair in a
    /// `Basic` authorization header. The credentials are validated when
    /// [`Credentials`] is built, so an empty id or secret never reaches this
    /// point.
    ///
    /// # Returns
    ///
    /// - `Ok(Token)` - Token with the `access_token` of the response
    /// - `Err(Error::Authentication)` - The endpoint answered with a
    ///   non-success status, or the body carried no usable `access_token`
    /// - `Err(Error::Request)` - Network or transport failure
    ///
    /// No retries are made and the token is not cached.
    ///
    /// # Example
    ///
    /// ```
    /// let credentials = Credentials::new("client-id", "client-secret")?;
    /// let token = spotify.obtain_token(&credentials).await?;
    /// println!("Token expires in {} seconds", token.expires_in);
    /// ```
    pub async fn obtain_token(&self, credentials: &Credentials) -> Result<Token> {
        let response = self
            .http
            .post(&self.config.token_url)
            .header(AUTHORIZATION, basic_authorization(credentials))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Error::Authentication {
                status,
                message: describe_error(&body),
            });
        }

        let token: Token = serde_json::from_str(&body).map_err(|e| Error::Authentication {
            status,
            message: format!("unexpected token response: {}", e),
        })?;

        if token.access_token.is_empty() {
            return Err(Error::Authentication {
                status,
                message: "token response carried an empty access_token".to_string(),
            });
        }

        Ok(token)
    }
}

pub fn basic_authorization(credentials: &Credentials) -> String {
    let pair = format!(
        "{}:{}",
        credentials.client_id(),
        credentials.client_secret()
    );
    format!("Basic {}", STANDARD.encode(pair))
}

// Spotify answers `{"error": "...", "error_description": "..."}` on failures
fn describe_error(body: &str) -> String {
    let Ok(json) = serde_json::from_str::<Value>(body) else {
        return body.trim().to_string();
    };

    json["error_description"]
        .as_str()
        .or_else(|| json["error"].as_str())
        .map(str::to_string)
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_header_encodes_id_and_secret() {
        let credentials = Credentials::new("client", "secret").unwrap();
        // base64("client:secret")
        assert_eq!(
            basic_authorization(&credentials),
            "Basic Y2xpZW50OnNlY3JldA=="
        );
    }

    #[test]
    fn error_description_is_preferred() {
        let body = r#"{"error":"invalid_client","error_description":"Invalid client secret"}"#;
        assert_eq!(describe_error(body), "Invalid client secret");

        assert_eq!(describe_error(r#"{"error":"invalid_client"}"#), "invalid_client");
        assert_eq!(describe_error("Bad Gateway\n"), "Bad Gateway");
    }
}
