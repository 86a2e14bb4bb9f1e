//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8086;
pub const DEFAULT_QR_SIZE: u32 = 300;
pub const DEFAULT_FARMER_ADDRESS: &str = "0x742d35Cc6634C0532925a3b844Bc454e4438f44e";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub port: u16,
    /// Ledger address stamped on every registered product.
    pub farmer_address: String,
    /// Minimum edge length of generated QR images, in pixels.
    pub qr_size: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_owned(),
            port: DEFAULT_PORT,
            farmer_address: DEFAULT_FARMER_ADDRESS.to_owned(),
            qr_size: DEFAULT_QR_SIZE,
        }
    }
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `PORT`: default 8086
    /// - `FARMER_ADDRESS`: default demo ledger address
    /// - `QR_SIZE`: default 300
    ///
    /// Unparseable numbers fall back to their defaults with a warning.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let text = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_owned())
        };

        Self {
            bind_addr: text("BIND_ADDR", DEFAULT_BIND_ADDR),
            port: parse_or_default("PORT", lookup("PORT"), DEFAULT_PORT),
            farmer_address: text("FARMER_ADDRESS", DEFAULT_FARMER_ADDRESS),
            qr_size: parse_or_default("QR_SIZE", lookup("QR_SIZE"), DEFAULT_QR_SIZE).max(64),
        }
    }

    #[must_use]
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn parse_or_default<T: std::str::FromStr + Copy + std::fmt::Display>(key: &str, raw: Option<String>, default: T) -> T {
    let Some(raw) = raw else {
        return default;
    };
    raw.trim().parse::<T>().unwrap_or_else(|_| {
        tracing::warn!(%key, value = %raw, %default, "invalid value, using default");
        default
    })
}
