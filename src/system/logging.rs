use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogConfig;
use crate::errors::CacheError;

pub fn init_logging(config: &LogConfig) -> Result<(), CacheError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let result = match config.format.as_str() {
        "json" => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json())
            .try_init(),
        _ => {
            // pretty format (default)
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .try_init()
        }
    };

    result.map_err(|e| CacheError::Internal(format!("Failed to initialize logging: {}", e)))?;

    tracing::info!("Logging initialized with level: {}", config.level);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::init_logging;
    use crate::config::LogConfig;
    use crate::errors::CacheError;

    #[test]
    fn test_init_logging_is_not_reentrant() {
        let config = LogConfig::default();

        // 首次初始化成功，重复初始化报错而不是 panic
        init_logging(&config).expect("First init failed");

        let err = init_logging(&config).unwrap_err();
        assert!(matches!(err, CacheError::Internal(_)));
    }
}
