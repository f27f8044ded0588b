use bot_logging::bot_debug;
use homework_core::PollError;
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde_json::Value;

#[async_trait::async_trait]
pub trait HomeworkApi: Send + Sync {
    /// Fetches homework updates made since `from_date` (Unix seconds).
    ///
    /// Makes exactly one request; retrying is the caller's business.
    async fn fetch(&self, from_date: i64) -> Result<Value, PollError>;
}

/// Client for the Practicum homework-status endpoint.
#[derive(Clone)]
pub struct PracticumClient {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            token: token.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn transport_error(&self, message: impl Into<String>) -> PollError {
        PollError::Transport {
            endpoint: self.endpoint.clone(),
            message: message.into(),
        }
    }
}

#[async_trait::async_trait]
impl HomeworkApi for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<Value, PollError> {
        let mut url = reqwest::Url::parse(&self.endpoint)
            .map_err(|err| self.transport_error(format!("invalid endpoint: {err}")))?;
        url.query_pairs_mut()
            .append_pair("from_date", &from_date.to_string());

        bot_debug!("Requesting homework statuses from_date={}", from_date);
        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .send()
            .await
            .map_err(|err| self.transport_error(describe_reqwest_error(&err)))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(PollError::UpstreamStatus {
                endpoint: self.endpoint.clone(),
                code: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| self.transport_error(describe_reqwest_error(&err)))?;
        let decoded: Value = serde_json::from_slice(&body)
            .map_err(|err| PollError::malformed_body(err.to_string(), &body))?;
        bot_debug!("Homework statuses received ({} bytes)", body.len());
        Ok(decoded)
    }
}

fn describe_reqwest_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        return format!("timeout: {err}");
    }
    if err.is_connect() {
        return format!("connection failed: {err}");
    }
    err.to_string()
}
