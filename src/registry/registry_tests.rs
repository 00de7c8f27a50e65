use super::*;
use crate::store::{MemoryCollection, MemoryPostTable};
use crate::utils::SystemClock;

fn table() -> Arc<MemoryPostTable> {
    Arc::new(MemoryPostTable::new(Arc::new(SystemClock)))
}

fn collection(table: &Arc<MemoryPostTable>, name: &str) -> Arc<dyn Collection> {
    Arc::new(MemoryCollection::new(name, Arc::clone(table)))
}

#[test]
fn test_registry_lookup() {
    let table = table();
    let registry = TypeRegistry::builder()
        .register("book", Some("create_books"), collection(&table, "book"))
        .unwrap()
        .register("film", None, collection(&table, "film"))
        .unwrap()
        .build();

    assert_eq!(registry.len(), 2);
    assert!(registry.contains("book"));
    assert!(!registry.contains("page"));
    assert_eq!(
        registry.get("book").and_then(RegisteredType::create_capability),
        Some("create_books")
    );
    assert_eq!(registry.get("film").and_then(RegisteredType::create_capability), None);
    assert_eq!(registry.names(), vec!["book", "film"]);
    assert_eq!(registry.collection("film").map(|c| c.post_type()), Some("film"));
}

#[test]
fn test_registry_rejects_duplicate_type() {
    let table = table();
    let result = TypeRegistry::builder()
        .register("book", None, collection(&table, "book"))
        .unwrap()
        .register("book", Some("create_books"), collection(&table, "book"));
    assert_eq!(
        result.unwrap_err(),
        RegistryError::DuplicateType("book".to_string())
    );
}

#[test]
fn test_registry_rejects_mismatched_collection() {
    let table = table();
    let result = TypeRegistry::builder().register("book", None, collection(&table, "film"));
    assert!(matches!(
        result,
        Err(RegistryError::CollectionMismatch { .. })
    ));
}

#[test]
fn test_empty_registry() {
    let registry = TypeRegistry::default();
    assert!(registry.is_empty());
    assert!(registry.get("book").is_none());
}
