use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub runtime: RuntimeConfig,
    #[serde(default)]
    pub complaints: ComplaintsConfig,
    #[serde(default)]
    pub jobs: JobsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self { worker_threads: Some(4) }
    }
}

/// Staff / complaints service (Service A).
#[derive(Debug, Clone, Deserialize)]
pub struct ComplaintsConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_complaints_port")]
    pub port: u16,
    /// JSON array of staff records; the service refuses to start without it.
    #[serde(default = "default_users_file")]
    pub users_file: String,
    /// Age after which a pending complaint is escalated.
    #[serde(default = "default_escalation_after_days")]
    pub escalation_after_days: u32,
}

impl Default for ComplaintsConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_complaints_port(),
            users_file: default_users_file(),
            escalation_after_days: default_escalation_after_days(),
        }
    }
}

/// Job board service (Service B).
#[derive(Debug, Clone, Deserialize)]
pub struct JobsConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_jobs_port")]
    pub port: u16,
    /// Comma-separated CORS allow-list; unset means permissive.
    #[serde(default)]
    pub allowed_origins: Option<String>,
}

impl Default for JobsConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_jobs_port(), allowed_origins: None }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_complaints_port() -> u16 { 5000 }
fn default_jobs_port() -> u16 { 10000 }
fn default_users_file() -> String { "users.json".to_string() }
fn default_escalation_after_days() -> u32 { 3 }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load `config.toml` (or `CONFIG_PATH`) if present, otherwise start from
    /// defaults; then apply environment overrides and validate.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = match load_default() {
            Ok(cfg) => cfg,
            Err(e) => match e.downcast_ref::<std::io::Error>() {
                Some(io) if io.kind() == std::io::ErrorKind::NotFound => AppConfig::default(),
                _ => return Err(e),
            },
        };
        cfg.apply_env(|key| std::env::var(key).ok());
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Override fields from environment variables. `lookup` is injected so the
    /// override rules can be exercised without touching the process env.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("COMPLAINTS_HOST") { self.complaints.host = v; }
        if let Some(p) = lookup("COMPLAINTS_PORT").and_then(|p| p.parse::<u16>().ok()) {
            self.complaints.port = p;
        }
        if let Some(v) = lookup("USERS_FILE") { self.complaints.users_file = v; }
        if let Some(d) = lookup("ESCALATION_AFTER_DAYS").and_then(|d| d.parse::<u32>().ok()) {
            self.complaints.escalation_after_days = d;
        }
        if let Some(v) = lookup("JOBS_HOST") { self.jobs.host = v; }
        if let Some(p) = lookup("JOBS_PORT").and_then(|p| p.parse::<u16>().ok()) {
            self.jobs.port = p;
        }
        if let Some(v) = lookup("ALLOWED_ORIGINS") { self.jobs.allowed_origins = Some(v); }
        if let Some(w) = lookup("TOKIO_WORKER_THREADS").and_then(|w| w.parse::<usize>().ok()) {
            self.runtime.worker_threads = Some(w);
        }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        // 归一化运行时线程数
        match self.runtime.worker_threads {
            Some(0) | None => self.runtime.worker_threads = Some(4),
            Some(_) => {}
        }
        normalize_bind("complaints", &mut self.complaints.host, self.complaints.port)?;
        normalize_bind("jobs", &mut self.jobs.host, self.jobs.port)?;
        if self.complaints.users_file.trim().is_empty() {
            return Err(anyhow!("complaints.users_file must not be empty"));
        }
        if self.complaints.escalation_after_days == 0 {
            return Err(anyhow!("complaints.escalation_after_days must be >= 1"));
        }
        if let Some(o) = &self.jobs.allowed_origins {
            if o.trim().is_empty() { self.jobs.allowed_origins = None; }
        }
        Ok(())
    }
}

impl ComplaintsConfig {
    pub fn bind_addr(&self) -> String { format!("{}:{}", self.host, self.port) }
}

impl JobsConfig {
    pub fn bind_addr(&self) -> String { format!("{}:{}", self.host, self.port) }
}

fn normalize_bind(section: &str, host: &mut String, port: u16) -> Result<()> {
    if host.trim().is_empty() {
        *host = default_host();
    }
    if port == 0 {
        return Err(anyhow!("{section}.port must be in 1..=65535"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_match_service_conventions() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.complaints.bind_addr(), "0.0.0.0:5000");
        assert_eq!(cfg.complaints.users_file, "users.json");
        assert_eq!(cfg.complaints.escalation_after_days, 3);
        assert_eq!(cfg.jobs.bind_addr(), "0.0.0.0:10000");
        assert!(cfg.jobs.allowed_origins.is_none());
    }

    #[test]
    fn partial_toml_keeps_defaults() -> Result<()> {
        let cfg = parse("[complaints]\nport = 6000\n\n[jobs]\nallowed_origins = \"https://a.example\"\n")?;
        assert_eq!(cfg.complaints.port, 6000);
        assert_eq!(cfg.complaints.users_file, "users.json");
        assert_eq!(cfg.jobs.port, 10000);
        assert_eq!(cfg.jobs.allowed_origins.as_deref(), Some("https://a.example"));
        Ok(())
    }

    #[test]
    fn env_overrides_file_values() -> Result<()> {
        let env: HashMap<&str, &str> = [
            ("COMPLAINTS_PORT", "7001"),
            ("USERS_FILE", "/srv/staff.json"),
            ("ESCALATION_AFTER_DAYS", "5"),
            ("ALLOWED_ORIGINS", "https://x.example,https://y.example"),
            ("JOBS_PORT", "not-a-port"),
        ]
        .into_iter()
        .collect();
        let mut cfg = AppConfig::default();
        cfg.apply_env(|k| env.get(k).map(|v| v.to_string()));
        cfg.normalize_and_validate()?;
        assert_eq!(cfg.complaints.port, 7001);
        assert_eq!(cfg.complaints.users_file, "/srv/staff.json");
        assert_eq!(cfg.complaints.escalation_after_days, 5);
        assert_eq!(cfg.jobs.port, 10000);
        assert_eq!(cfg.jobs.allowed_origins.as_deref(), Some("https://x.example,https://y.example"));
        Ok(())
    }

    #[test]
    fn validation_rejects_zero_port_and_threshold() {
        let mut cfg = AppConfig::default();
        cfg.complaints.port = 0;
        assert!(cfg.normalize_and_validate().is_err());

        let mut cfg = AppConfig::default();
        cfg.complaints.escalation_after_days = 0;
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn blank_origins_normalize_to_permissive() -> Result<()> {
        let mut cfg = AppConfig::default();
        cfg.jobs.allowed_origins = Some("  ".into());
        cfg.runtime.worker_threads = Some(0);
        cfg.normalize_and_validate()?;
        assert!(cfg.jobs.allowed_origins.is_none());
        assert_eq!(cfg.runtime.worker_threads, Some(4));
        Ok(())
    }
}
