use std::env;

#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        Self::parse(&env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string()))
    }

    pub fn parse(origins: &str) -> Self {
        let allowed_origins = origins
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self { allowed_origins }
    }

    /// `*` anywhere in the list opens CORS to every origin.
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_drops_empty_entries() {
        let config = CorsConfig::parse(" http://localhost:5173 ,, https://brevity.app ");
        assert_eq!(
            config.allowed_origins,
            vec!["http://localhost:5173", "https://brevity.app"]
        );
        assert!(!config.allows_any_origin());
    }

    #[test]
    fn test_wildcard() {
        assert!(CorsConfig::parse("*").allows_any_origin());
        assert!(CorsConfig::parse("http://localhost:5173,*").allows_any_origin());
    }
}
