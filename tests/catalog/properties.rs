//! Property checks over arbitrary painting lists.

use art_gallery::{Author, Catalog, CatalogDocument, InMemoryDocumentStore, Painting};
use proptest::prelude::*;

fn catalog_of(ids: &[String]) -> Catalog<InMemoryDocumentStore> {
    let paintings = ids
        .iter()
        .map(|id| Painting::new(id.clone(), format!("Painting {id}"), "vango"))
        .collect();
    let doc = CatalogDocument::new(vec![Author::new("vango", "Vincent van Gogh")], paintings, vec![]);
    Catalog::open(InMemoryDocumentStore::with_document(&doc).unwrap()).unwrap()
}

fn unique_ids() -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set("[a-z0-9]{1,6}", 1..12)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
}

proptest! {
    #[test]
    fn delete_removes_exactly_the_target(ids in unique_ids(), pick in any::<prop::sample::Index>()) {
        let catalog = catalog_of(&ids);
        let target = &ids[pick.index(ids.len())];

        prop_assert!(catalog.delete_painting(target).unwrap());

        let expected: Vec<&String> = ids.iter().filter(|id| *id != target).collect();
        let remaining: Vec<String> = catalog
            .list_paintings()
            .unwrap()
            .into_iter()
            .map(|v| v.id)
            .collect();
        prop_assert_eq!(remaining.iter().collect::<Vec<_>>(), expected);
        prop_assert!(!catalog.delete_painting(target).unwrap());
    }

    #[test]
    fn double_toggle_is_identity(ids in unique_ids(), pick in any::<prop::sample::Index>()) {
        let catalog = catalog_of(&ids);
        let target = &ids[pick.index(ids.len())];
        let before = catalog.snapshot().unwrap();

        prop_assert!(catalog.toggle_favorite(target).unwrap());
        prop_assert!(catalog.toggle_favorite(target).unwrap());
        prop_assert_eq!(catalog.snapshot().unwrap(), before);
    }

    #[test]
    fn search_is_case_insensitive(query in "[a-zA-Z ]{0,8}") {
        let catalog = catalog_of(&["a".to_string(), "b".to_string()]);
        prop_assert_eq!(
            catalog.search_paintings(&query.to_uppercase()).unwrap(),
            catalog.search_paintings(&query.to_lowercase()).unwrap()
        );
    }
}
