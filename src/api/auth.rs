//! Authentication session operations

use serde::Serialize;

use crate::OktaClient;
use crate::error::Error;
use crate::model::AuthTransaction;

#[derive(Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

impl OktaClient {
    /// Exchanges a username and password for an authentication transaction.
    ///
    /// On success the transaction carries a one-time session token. The
    /// request authenticates with the posted credentials; the client's API
    /// token is not sent.
    pub async fn session_token(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthTransaction, Error> {
        let url = self.endpoint("authn");
        let (transaction, _) = self
            .post_json(&url, &Credentials { username, password }, false)
            .await?;
        Ok(transaction)
    }
}
