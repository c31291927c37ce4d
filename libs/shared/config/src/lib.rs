use std::env;
use std::str::FromStr;
use tracing::warn;

pub const DEFAULT_SLOT_STEP_MINUTES: i32 = 15;
pub const DEFAULT_MIN_ID_DIGITS: usize = 10;
pub const DEFAULT_MAX_ID_DIGITS: usize = 13;

/// Granularity used when walking candidate start times inside a working window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotPolicy {
    pub step_minutes: i32,
}

impl Default for SlotPolicy {
    fn default() -> Self {
        Self {
            step_minutes: DEFAULT_SLOT_STEP_MINUTES,
        }
    }
}

/// Score weights and identifier shape used by the scan-to-client matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchPolicy {
    pub full_name_weight: u32,
    pub reversed_name_weight: u32,
    pub token_contained_weight: u32,
    pub token_exact_weight: u32,
    pub token_prefix_weight: u32,
    pub min_id_digits: usize,
    pub max_id_digits: usize,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            full_name_weight: 10,
            reversed_name_weight: 9,
            token_contained_weight: 1,
            token_exact_weight: 3,
            token_prefix_weight: 2,
            min_id_digits: DEFAULT_MIN_ID_DIGITS,
            max_id_digits: DEFAULT_MAX_ID_DIGITS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    pub slot_policy: SlotPolicy,
    pub match_policy: MatchPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 3000,
            slot_policy: SlotPolicy::default(),
            match_policy: MatchPolicy::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let server_host = env::var("SERVER_HOST")
            .unwrap_or_else(|_| {
                warn!("SERVER_HOST not set, using default");
                defaults.server_host.clone()
            });

        let server_port = parse_var("SERVER_PORT", defaults.server_port);

        let slot_policy = SlotPolicy {
            step_minutes: parse_var("SLOT_STEP_MINUTES", defaults.slot_policy.step_minutes),
        };

        let match_policy = MatchPolicy {
            min_id_digits: parse_var("MATCH_MIN_ID_DIGITS", defaults.match_policy.min_id_digits),
            max_id_digits: parse_var("MATCH_MAX_ID_DIGITS", defaults.match_policy.max_id_digits),
            ..defaults.match_policy
        };

        let mut config = Self {
            server_host,
            server_port,
            slot_policy,
            match_policy,
        };

        if !config.is_valid() {
            warn!("Invalid scheduling/matching configuration, falling back to default policies");
            config.slot_policy = SlotPolicy::default();
            config.match_policy = MatchPolicy::default();
        }

        config
    }

    pub fn is_valid(&self) -> bool {
        self.slot_policy.step_minutes > 0
            && self.match_policy.min_id_digits > 0
            && self.match_policy.min_id_digits <= self.match_policy.max_id_digits
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_var<T>(name: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} has invalid value {:?}, using default {}", name, raw, default);
            default
        }),
        Err(_) => default,
    }
}
