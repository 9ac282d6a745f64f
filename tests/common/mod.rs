#![allow(dead_code)]

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use dashboard_api::config::AppConfig;
use dashboard_api::{app, AppState};

pub struct TestServer {
    pub base_url: String,
    pub client: Client,
}

impl TestServer {
    /// Boot the router on a free port with a private in-memory database.
    pub async fn spawn() -> Result<Self> {
        Self::spawn_with(AppConfig::testing()).await
    }

    /// Boot the router on a free port with `config`; only the port is overridden.
    pub async fn spawn_with(mut config: AppConfig) -> Result<Self> {
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        config.server.port = port;
        let bind_addr = config.bind_addr();

        let state = AppState::from_config(config).await?;
        let listener = tokio::net::TcpListener::bind(&bind_addr)
            .await
            .with_context(|| format!("failed to bind {}", bind_addr))?;

        tokio::spawn(async move {
            let _ = axum::serve(listener, app(state)).await;
        });

        let server = Self {
            base_url: format!("http://{}", bind_addr),
            client: Client::new(),
        };
        server.wait_ready(Duration::from_secs(10)).await?;
        Ok(server)
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            if let Ok(resp) = self.client.get(self.url("/health")).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<reqwest::Response> {
        Ok(self
            .client
            .post(self.url("/api/register"))
            .json(&json!({ "username": username, "email": email, "password": password }))
            .send()
            .await?)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<reqwest::Response> {
        Ok(self
            .client
            .post(self.url("/api/login"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?)
    }

    /// Register `username` and return its bearer token.
    pub async fn token_for(&self, username: &str) -> Result<String> {
        let resp = self
            .register(username, &format!("{}@example.com", username), "p1")
            .await?;
        anyhow::ensure!(resp.status() == StatusCode::CREATED, "register failed: {}", resp.status());
        let body: Value = resp.json().await?;
        body["token"]
            .as_str()
            .map(str::to_string)
            .context("register response had no token")
    }

    pub async fn get(&self, path: &str, token: &str) -> Result<reqwest::Response> {
        Ok(self.client.get(self.url(path)).bearer_auth(token).send().await?)
    }

    pub async fn post(&self, path: &str, token: &str, body: Value) -> Result<reqwest::Response> {
        Ok(self.client.post(self.url(path)).bearer_auth(token).json(&body).send().await?)
    }

    pub async fn put(&self, path: &str, token: &str, body: Value) -> Result<reqwest::Response> {
        Ok(self.client.put(self.url(path)).bearer_auth(token).json(&body).send().await?)
    }

    pub async fn delete(&self, path: &str, token: &str) -> Result<reqwest::Response> {
        Ok(self.client.delete(self.url(path)).bearer_auth(token).send().await?)
    }
}
