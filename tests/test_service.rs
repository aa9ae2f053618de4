//! Service-level scenarios: validation gates, document round-trips, and the
//! basic entry lifecycle over both backends.

mod common;

use addrbook_service::{AddressBookService, BackendConfig, StoreError};
use common::{entry_doc_suite, full_entry_doc};
use serde_json::json;

async fn service_for(config: &BackendConfig) -> AddressBookService {
    addrbook_service::logging::init_logging("error");
    let service = AddressBookService::from_config(config).unwrap();
    service.start().await.unwrap();
    service
}

/// create -> read -> update -> read -> delete -> NotFound.
async fn run_basic_lifecycle(service: &AddressBookService) {
    let nickname = service
        .create_address(json!({"full_name": "Ann"}))
        .await
        .unwrap();

    let doc = service.get_address(&nickname).await.unwrap();
    assert_eq!(doc["full_name"], "Ann");

    service
        .update_address(&nickname, json!({"full_name": "Ann B"}))
        .await
        .unwrap();
    let doc = service.get_address(&nickname).await.unwrap();
    assert_eq!(doc["full_name"], "Ann B");

    service.delete_address(&nickname).await.unwrap();
    assert!(matches!(
        service.get_address(&nickname).await.unwrap_err(),
        StoreError::NotFound(_)
    ));

    service.stop().await.unwrap();
}

#[tokio::test]
async fn test_basic_lifecycle_memory() {
    let service = service_for(&BackendConfig::Memory).await;
    run_basic_lifecycle(&service).await;
}

#[tokio::test]
async fn test_basic_lifecycle_filesystem() {
    let store_dir = tempfile::tempdir().unwrap();
    let service = service_for(&BackendConfig::Fs {
        store_dir: store_dir.path().to_path_buf(),
    })
    .await;
    run_basic_lifecycle(&service).await;
}

#[tokio::test]
async fn test_create_empty_document_rejected() {
    let service = service_for(&BackendConfig::Memory).await;

    let err = service.create_address(json!({})).await.unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
}

#[tokio::test]
async fn test_stored_documents_round_trip() -> anyhow::Result<()> {
    let service = service_for(&BackendConfig::Memory).await;

    let nickname = service.create_address(full_entry_doc()).await?;
    let stored = service.get_address(&nickname).await?;
    assert_eq!(stored, full_entry_doc());

    // What came out goes back in unchanged.
    service.update_address(&nickname, stored.clone()).await?;
    assert_eq!(service.get_address(&nickname).await?, stored);
    Ok(())
}

#[tokio::test]
async fn test_get_all_addresses_completeness() {
    let service = service_for(&BackendConfig::Memory).await;

    let mut nicknames = Vec::new();
    for (_, doc) in entry_doc_suite() {
        nicknames.push(service.create_address(doc).await.unwrap());
    }
    assert_eq!(service.get_all_addresses().await.unwrap().len(), 2);

    service.delete_address(&nicknames[0]).await.unwrap();

    let remaining = service.get_all_addresses().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].0, nicknames[1]);
}

#[tokio::test]
async fn test_filesystem_service_on_regular_file_path() {
    let tmp = tempfile::tempdir().unwrap();
    let file_path = tmp.path().join("not-a-dir.txt");
    std::fs::write(&file_path, "plain file").unwrap();

    let err = AddressBookService::from_config(&BackendConfig::Fs {
        store_dir: file_path,
    })
    .unwrap_err();
    assert!(matches!(err, StoreError::Configuration(_)));
}
