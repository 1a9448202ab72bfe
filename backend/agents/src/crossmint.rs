//! Crossmint wallet and payment operations.
//!
//! Each handler issues exactly one outbound call to the Crossmint API and
//! passes the upstream response (or failure) back to the caller. Requires
//! both project id and client secret from process configuration.

use anyhow::Context;
use boxscore_config::Config;
use boxscore_core::BoxscoreError;
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

/// Thin client over the Crossmint REST API.
#[derive(Debug)]
pub struct CrossmintClient {
    client: Client,
    project_id: String,
    client_secret: String,
    base_url: String,
}

impl CrossmintClient {
    /// Build from process configuration; fails if either credential is
    /// missing (never echoes the values back).
    pub fn from_config(config: &Config) -> Result<Self, BoxscoreError> {
        let project_id = config
            .crossmint_project_id
            .clone()
            .ok_or(BoxscoreError::ConfigMissing("Crossmint"))?;
        let client_secret = config
            .crossmint_client_secret
            .clone()
            .ok_or(BoxscoreError::ConfigMissing("Crossmint"))?;

        let base_url = if config.crossmint_environment == "production" {
            "https://api.crossmint.com".to_string()
        } else {
            "https://staging.crossmint.com".to_string()
        };

        Ok(Self {
            client: Client::new(),
            project_id,
            client_secret,
            base_url,
        })
    }

    #[cfg(test)]
    fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, BoxscoreError> {
        debug!(path, "Crossmint request");
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .header("Content-Type", "application/json")
            .header("X-Project-Id", &self.project_id)
            .header("X-Client-Secret", &self.client_secret)
            .json(&body)
            .send()
            .await
            .context("Crossmint HTTP request failed")?;

        read_json(response).await
    }

    async fn get(&self, path: &str) -> Result<Value, BoxscoreError> {
        debug!(path, "Crossmint request");
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .header("X-Project-Id", &self.project_id)
            .header("X-Client-Secret", &self.client_secret)
            .send()
            .await
            .context("Crossmint HTTP request failed")?;

        read_json(response).await
    }

    pub async fn create_wallet(&self, user_id: &str) -> Result<Value, BoxscoreError> {
        // Polygon keeps fees low for small fan payments.
        self.post("/v1/wallets", json!({ "userId": user_id, "chain": "polygon" }))
            .await
    }

    pub async fn get_balance(&self, user_id: &str) -> Result<Value, BoxscoreError> {
        self.get(&format!("/v1/wallets/{user_id}/balance")).await
    }

    pub async fn send_payment(
        &self,
        user_id: &str,
        amount: &str,
        currency: &str,
    ) -> Result<Value, BoxscoreError> {
        self.post(
            &format!("/v1/wallets/{user_id}/send"),
            json!({
                "amount": amount,
                "currency": currency,
                "to": "0x0000000000000000000000000000000000000000",
            }),
        )
        .await
    }

    pub async fn create_payment_intent(
        &self,
        user_id: &str,
        agent_id: &str,
        amount: &str,
        currency: &str,
        description: &str,
    ) -> Result<Value, BoxscoreError> {
        self.post(
            "/v1/payments/intents",
            json!({
                "userId": user_id,
                "amount": amount,
                "currency": currency,
                "description": description,
                "metadata": {
                    "agentId": agent_id,
                    "service": "sports-intelligence-agent",
                    "timestamp": Utc::now().to_rfc3339(),
                },
            }),
        )
        .await
    }
}

async fn read_json(response: reqwest::Response) -> Result<Value, BoxscoreError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(BoxscoreError::Upstream {
            status: status.as_u16(),
            body,
        });
    }
    response
        .json()
        .await
        .context("Failed to parse Crossmint response")
        .map_err(BoxscoreError::Other)
}

#[derive(Debug, Deserialize)]
struct WalletParams {
    #[serde(default)]
    action: String,
    #[serde(rename = "userId", default)]
    user_id: String,
    #[serde(default)]
    amount: String,
    #[serde(default = "default_currency")]
    currency: String,
}

#[derive(Debug, Deserialize)]
struct PaymentParams {
    #[serde(rename = "userId", default)]
    user_id: String,
    #[serde(rename = "agentId", default)]
    agent_id: String,
    #[serde(default)]
    amount: String,
    #[serde(default = "default_currency")]
    currency: String,
    #[serde(default)]
    description: Option<String>,
}

fn default_currency() -> String {
    "USDC".to_string()
}

/// Wallet management: create, balance check, send.
pub async fn handle_wallet(params: Value, config: &Config) -> Result<Value, BoxscoreError> {
    let params: WalletParams =
        serde_json::from_value(params).map_err(|e| BoxscoreError::InvalidParams(e.to_string()))?;
    let client = CrossmintClient::from_config(config)?;

    match params.action.as_str() {
        "create_wallet" => client.create_wallet(&params.user_id).await,
        "get_balance" => client.get_balance(&params.user_id).await,
        "send_payment" => {
            client
                .send_payment(&params.user_id, &params.amount, &params.currency)
                .await
        }
        _ => Err(BoxscoreError::InvalidParams("Invalid action".to_string())),
    }
}

/// Payment intent creation for premium agent access.
pub async fn handle_payment(params: Value, config: &Config) -> Result<Value, BoxscoreError> {
    let params: PaymentParams =
        serde_json::from_value(params).map_err(|e| BoxscoreError::InvalidParams(e.to_string()))?;
    let client = CrossmintClient::from_config(config)?;

    let description = params
        .description
        .unwrap_or_else(|| format!("Premium access to {} agent", params.agent_id));

    let intent = client
        .create_payment_intent(
            &params.user_id,
            &params.agent_id,
            &params.amount,
            &params.currency,
            &description,
        )
        .await?;

    Ok(json!({
        "success": true,
        "paymentIntent": intent,
        "message": "Payment intent created successfully",
    }))
}
