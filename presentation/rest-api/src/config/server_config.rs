use std::env;

const DEFAULT_IP: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// HTTP listener settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: 8080; unparsable values fall back to it)
    pub fn from_env() -> Self {
        let ip = env::var("SERVICE_IP").unwrap_or_else(|_| DEFAULT_IP.to_string());
        let port = parse_port(env::var("SERVICE_PORT").ok().as_deref());

        Self { ip, port }
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

fn parse_port(raw: Option<&str>) -> u16 {
    match raw.map(str::parse::<u16>) {
        Some(Ok(port)) => port,
        Some(Err(e)) => {
            tracing::warn!("Invalid SERVICE_PORT ({e}), using {DEFAULT_PORT}");
            DEFAULT_PORT
        }
        None => DEFAULT_PORT,
    }
}
