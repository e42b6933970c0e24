use std::collections::HashMap;

use reumacal_api::{Config, StoreKind};

fn config(vars: &[(&str, &str)]) -> eyre::Result<Config> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|name| vars.get(name).cloned())
}

#[test]
fn defaults_to_memory_store_under_lambda() {
    let config = config(&[]).unwrap();
    assert_eq!(config.store, StoreKind::Memory);
    assert_eq!(config.bucket, "reumacal");
    assert_eq!(config.listen_addr, None);
}

#[test]
fn reads_s3_bucket_and_listen_addr() {
    let config = config(&[
        ("REUMACAL_STORE", "s3"),
        ("REUMACAL_BUCKET", "scores-prod"),
        ("REUMACAL_LISTEN_ADDR", "127.0.0.1:3000"),
    ])
    .unwrap();
    assert_eq!(config.store, StoreKind::S3);
    assert_eq!(config.bucket, "scores-prod");
    assert_eq!(config.listen_addr, Some("127.0.0.1:3000".parse().unwrap()));
}

#[test]
fn rejects_unknown_store_and_bad_address() {
    let err = config(&[("REUMACAL_STORE", "dynamo")]).unwrap_err();
    assert!(err.to_string().contains("dynamo"));

    let err = config(&[("REUMACAL_LISTEN_ADDR", "localhost")]).unwrap_err();
    assert!(err.to_string().contains("REUMACAL_LISTEN_ADDR"));
}
