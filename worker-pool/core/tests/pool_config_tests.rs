use std::time::Duration;
use worker_pool_core::{DelayRange, PoolConfig, PoolError};

#[test]
fn test_missing_fields_fall_back_to_defaults() {
    let config = PoolConfig::from_json(r#"{ "num_workers": 5 }"#).unwrap();

    assert_eq!(config.num_workers, 5);
    assert_eq!(config.queue_capacity, 16);
    assert_eq!(config.factor, 2);
    assert_eq!(config.timeout(), None);
    assert_eq!(config.work_delay_ms, None);
}

#[test]
fn test_full_config_parses() {
    let config = PoolConfig::from_json(
        r#"{
            "num_workers": 3,
            "queue_capacity": 4,
            "timeout_ms": 2000,
            "factor": 3,
            "work_delay_ms": { "min_ms": 100, "max_ms": 600 }
        }"#,
    )
    .unwrap();

    assert_eq!(config.timeout(), Some(Duration::from_secs(2)));
    assert_eq!(config.factor, 3);
    assert_eq!(config.work_delay_ms, Some(DelayRange::new(100, 600)));
}

#[test]
fn test_zero_workers_rejected() {
    let err = PoolConfig::from_json(r#"{ "num_workers": 0 }"#).unwrap_err();
    assert!(matches!(err, PoolError::InvalidConfig(_)));
}

#[test]
fn test_zero_capacity_rejected() {
    let err = PoolConfig::default()
        .with_queue_capacity(0)
        .validate()
        .unwrap_err();
    assert!(matches!(err, PoolError::InvalidConfig(_)));
}

#[test]
fn test_inverted_delay_rejected() {
    let err = PoolConfig::from_json(r#"{ "work_delay_ms": { "min_ms": 50, "max_ms": 10 } }"#)
        .unwrap_err();
    assert!(matches!(err, PoolError::InvalidConfig(_)));
}

#[test]
fn test_malformed_json_is_parse_error() {
    let err = PoolConfig::from_json("{ num_workers: ").unwrap_err();
    assert!(matches!(err, PoolError::ConfigParse(_)));
}

#[test]
fn test_missing_file_is_read_error() {
    let err = PoolConfig::load("/definitely/not/here/config.json").unwrap_err();
    assert!(matches!(err, PoolError::ConfigRead { .. }));
}

#[test]
fn test_builders_override_fields() {
    let config = PoolConfig::default()
        .with_workers(8)
        .with_timeout(Duration::from_millis(250));

    assert_eq!(config.num_workers, 8);
    assert_eq!(config.timeout_ms, Some(250));
    assert!(config.validate().is_ok());
}

#[test]
fn test_huge_timeout_saturates_instead_of_wrapping() {
    let config = PoolConfig::default().with_timeout(Duration::MAX);
    assert_eq!(config.timeout_ms, Some(u64::MAX));
}
