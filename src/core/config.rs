use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub lifecycle: LifecycleConfig,
    pub gamification: GamificationConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

/// Report lifecycle behaviour
#[derive(Debug, Clone)]
pub struct LifecycleConfig {
    /// Reject status changes outside the transition graph
    pub enforce_transitions: bool,
    /// Probability that the random verifier marks a report as verified
    pub verification_probability: f64,
    /// Load the demo reports at startup
    pub seed_fixtures: bool,
}

#[derive(Debug, Clone)]
pub struct GamificationConfig {
    pub points_per_submission: u32,
    /// Directory for per-profile JSON stats. In-memory storage when unset.
    pub stats_dir: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            lifecycle: LifecycleConfig::from_env()?,
            gamification: GamificationConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

fn parse_bool(name: &str, default: bool) -> Result<bool, String> {
    match env::var(name) {
        Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            other => Err(format!("{} must be a boolean, got '{}'", name, other)),
        },
        Err(_) => Ok(default),
    }
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 1024 * 1024; // 1MB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl LifecycleConfig {
    const DEFAULT_VERIFICATION_PROBABILITY: f64 = 0.7;

    pub fn from_env() -> Result<Self, String> {
        let enforce_transitions = parse_bool("LIFECYCLE_ENFORCE_TRANSITIONS", true)?;
        let seed_fixtures = parse_bool("SEED_FIXTURES", true)?;

        let verification_probability = env::var("VERIFICATION_PROBABILITY")
            .unwrap_or_else(|_| Self::DEFAULT_VERIFICATION_PROBABILITY.to_string())
            .parse::<f64>()
            .map_err(|_| "VERIFICATION_PROBABILITY must be a valid number".to_string())?;

        if !(0.0..=1.0).contains(&verification_probability) {
            return Err("VERIFICATION_PROBABILITY must be between 0 and 1".to_string());
        }

        Ok(Self {
            enforce_transitions,
            verification_probability,
            seed_fixtures,
        })
    }
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            enforce_transitions: true,
            verification_probability: Self::DEFAULT_VERIFICATION_PROBABILITY,
            seed_fixtures: true,
        }
    }
}

impl GamificationConfig {
    const DEFAULT_POINTS_PER_SUBMISSION: u32 = 10;

    pub fn from_env() -> Result<Self, String> {
        let points_per_submission = env::var("POINTS_PER_SUBMISSION")
            .unwrap_or_else(|_| Self::DEFAULT_POINTS_PER_SUBMISSION.to_string())
            .parse::<u32>()
            .map_err(|_| "POINTS_PER_SUBMISSION must be a valid number".to_string())?;

        let stats_dir = env::var("USER_STATS_DIR")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            points_per_submission,
            stats_dir,
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "TrafficBondhu API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "Citizen traffic incident reporting API".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}
