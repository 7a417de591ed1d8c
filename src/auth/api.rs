//! HTTP calls against the /api/auth endpoints

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// The signed-in user's profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
struct AuthBody {
    token: Option<String>,
    user: Option<User>,
    error: Option<String>,
}

pub async fn login(
    client: &reqwest::Client,
    base_url: &str,
    email: &str,
    password: &str,
) -> Result<(String, User)> {
    let url = format!("{}/api/auth/login", base_url);
    let response = client
        .post(&url)
        .json(&serde_json::json!({ "email": email, "password": password }))
        .send()
        .await
        .context("Failed to send login request")?;

    parse_auth_response(response, "Login failed").await
}

pub async fn register(
    client: &reqwest::Client,
    base_url: &str,
    name: &str,
    email: &str,
    password: &str,
) -> Result<(String, User)> {
    let url = format!("{}/api/auth/register", base_url);
    let response = client
        .post(&url)
        .json(&serde_json::json!({ "name": name, "email": email, "password": password }))
        .send()
        .await
        .context("Failed to send registration request")?;

    parse_auth_response(response, "Registration failed").await
}

/// Validate a token and fetch the profile it belongs to
pub async fn profile(client: &reqwest::Client, base_url: &str, token: &str) -> Result<User> {
    let url = format!("{}/api/auth/profile", base_url);
    let response = client
        .get(&url)
        .bearer_auth(token)
        .send()
        .await
        .context("Failed to send profile request")?;

    if !response.status().is_success() {
        bail!("Failed to fetch profile (status {})", response.status());
    }

    response
        .json()
        .await
        .context("Failed to parse profile response")
}

/// A response without a token is a failure even on a 2xx status; surface the
/// server's `error` text when it sent one.
async fn parse_auth_response(response: reqwest::Response, fallback: &str) -> Result<(String, User)> {
    let ok = response.status().is_success();
    let body: AuthBody = response
        .json()
        .await
        .context("Failed to parse auth response")?;

    match (ok, body.token, body.user) {
        (true, Some(token), Some(user)) => Ok((token, user)),
        (_, _, _) => bail!("{}", body.error.unwrap_or_else(|| fallback.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_accepts_mongo_id() {
        let user: User =
            serde_json::from_str(r#"{"_id": "u1", "name": "Jo", "email": "jo@example.com"}"#)
                .unwrap();
        assert_eq!(user.id, "u1");

        let user: User =
            serde_json::from_str(r#"{"id": "u2", "name": "Sam", "email": "sam@example.com"}"#)
                .unwrap();
        assert_eq!(user.id, "u2");
    }
}
