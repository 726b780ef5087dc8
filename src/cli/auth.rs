use crate::{config::Config, error, spotify, success, utils::describe_error};

use super::spinner;

/// Requests an application token and prints it, which confirms that the
/// configured client id and secret are accepted.
pub async fn token(config: &Config, json: bool) {
    let pb = spinner("Requesting access token...");
    let result = spotify::request_access_token(config).await;
    pb.finish_and_clear();

    let token = match result {
        Ok(token) => token,
        Err(e) => error!("{}", describe_error(&e)),
    };

    if json {
        super::print_json(&serde_json::json!({ "accessToken": token.as_str() }));
    } else {
        success!("Access token: {}", token);
    }
}
