use anyhow::Context;

/// Environment variable names checked for the connection string, in order.
const CONNECTION_STRING_VARS: &[&str] = &["DATABASE_URL", "PostgreSQL_ConnectionString"];

#[derive(Debug, Clone)]
pub struct Config {
    /// `None` when unset or blank. Every inventory route answers 500 in that case.
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    /// Normalised to either `""` or `"/segment"`.
    pub route_prefix: String,
    pub function_key: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = CONNECTION_STRING_VARS
            .iter()
            .find_map(|key| non_blank(lookup(*key)));

        Ok(Self {
            database_url,
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            route_prefix: normalize_prefix(&lookup("ROUTE_PREFIX").unwrap_or_else(|| "api".to_string())),
            function_key: non_blank(lookup("FUNCTION_KEY")),
        })
    }

    /// Full path for a route under the configured prefix.
    pub fn route(&self, path: &str) -> String {
        format!("{}{}", self.route_prefix, path)
    }

    /// Path of the prefix root, used by the unrouted list/delete variants.
    pub fn root_route(&self) -> String {
        if self.route_prefix.is_empty() {
            "/".to_string()
        } else {
            self.route_prefix.clone()
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
