use std::collections::HashSet;
use std::sync::{Arc, Mutex};

mod support;

use chrono::Utc;
use sluggable_core::application::ports::util::SlugGenerator;
use sluggable_core::domain::errors::{DomainError, DomainResult};
use sluggable_core::domain::record::{CollectionName, FieldName, NewRecord, RecordStore};
use sluggable_core::domain::slug::{SlugAssignment, SlugService, is_slug_form};
use sluggable_core::infrastructure::repositories::InMemoryRecordStore;
use sluggable_core::infrastructure::util::DefaultSlugGenerator;

use support::{COLLECTION, FailingStore, organization_config};

fn service_on(store: Arc<dyn RecordStore>) -> SlugService {
    SlugService::new(store, Arc::new(DefaultSlugGenerator), organization_config())
}

fn service() -> SlugService {
    service_on(Arc::new(InMemoryRecordStore::new()))
}

#[test]
fn normalize_is_idempotent_and_canonical() {
    let svc = service();
    let samples = [
        "Hello, World!",
        "  padded  ",
        "a--b__c",
        "ÀÉÎÕÜ çñ",
        "100% Pure & Simple",
        "already-normal",
        "",
        "***",
    ];
    for s in samples {
        let once = svc.normalize(s);
        assert_eq!(svc.normalize(&once), once, "normalize not idempotent for {s:?}");
        assert!(!once.starts_with('-') && !once.ends_with('-'), "{once:?}");
        assert!(!once.contains("--"), "{once:?}");
        assert!(once.is_empty() || is_slug_form(&once), "{once:?}");
    }
}

#[tokio::test]
async fn collision_sequence_skips_to_first_free_counter() {
    let svc = service();
    let taken: HashSet<&str> = ["hello-world", "hello-world-1", "hello-world-2"].into();
    let check = move |candidate: &str| -> DomainResult<bool> { Ok(taken.contains(candidate)) };

    let slug = svc
        .generate_unique_slug(Some("Hello, World!"), &check)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(slug.as_str(), "hello-world-3");
}

#[tokio::test]
async fn checks_each_candidate_in_order() {
    let svc = service();
    let seen = Mutex::new(Vec::new());
    let check = |candidate: &str| -> DomainResult<bool> {
        let mut seen = seen.lock().unwrap();
        seen.push(candidate.to_string());
        Ok(seen.len() < 3)
    };

    let slug = svc
        .generate_unique_slug(Some("Acme"), &check)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(slug.as_str(), "acme-2");
    assert_eq!(*seen.lock().unwrap(), vec!["acme", "acme-1", "acme-2"]);
}

#[tokio::test]
async fn result_is_free_and_differs_from_taken_base() {
    let svc = service();
    for existing in [vec![], vec!["acme-inc"], vec!["acme-inc", "acme-inc-1"]] {
        let taken: HashSet<String> = existing.iter().map(|s| (*s).to_string()).collect();
        let check = |candidate: &str| -> DomainResult<bool> { Ok(taken.contains(candidate)) };
        let slug = svc
            .generate_unique_slug(Some("Acme Inc."), &check)
            .await
            .unwrap()
            .unwrap();
        assert!(!taken.contains(slug.as_str()));
        if taken.contains("acme-inc") {
            assert_ne!(slug.as_str(), "acme-inc");
        }
    }
}

#[tokio::test]
async fn no_source_means_no_slug_and_no_lookup() {
    let svc = service();
    let check = |_: &str| -> DomainResult<bool> { panic!("existence check must not run") };
    assert!(svc.generate_unique_slug(None, &check).await.unwrap().is_none());
    assert!(svc.generate_unique_slug(Some(""), &check).await.unwrap().is_none());
}

#[tokio::test]
async fn store_scope_checks_configured_collection() {
    let store = Arc::new(InMemoryRecordStore::new());
    let slug_field = FieldName::new("slug").unwrap();

    let mut elsewhere = NewRecord::new(CollectionName::new("people").unwrap(), Utc::now())
        .with_field(&slug_field, "acme");
    elsewhere.mark_unique(&slug_field);
    store.insert(elsewhere).await.unwrap();

    let svc = service_on(store.clone());
    let slug = svc
        .generate_unique_slug(Some("Acme"), &svc.store_scope())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(slug.as_str(), "acme");

    let mut record = NewRecord::new(CollectionName::new(COLLECTION).unwrap(), Utc::now())
        .with_field(&FieldName::new("name").unwrap(), "Acme");
    let outcome = svc.apply_on_create(&mut record, &svc.store_scope()).await.unwrap();
    assert!(matches!(outcome, SlugAssignment::Generated(ref s) if s.as_str() == "acme"));
    store.insert(record).await.unwrap();

    let slug = svc
        .generate_unique_slug(Some("ACME"), &svc.store_scope())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(slug.as_str(), "acme-1");
}

#[tokio::test]
async fn store_failure_propagates_from_generation_and_lookup() {
    let svc = service_on(Arc::new(FailingStore));

    let err = svc
        .generate_unique_slug(Some("Acme"), &svc.store_scope())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Persistence(_)));

    let err = svc.find_by_slug("acme").await.unwrap_err();
    assert!(matches!(err, DomainError::Persistence(_)));

    let err = svc.find_by_slug_or_fail("acme").await.unwrap_err();
    assert!(matches!(err, DomainError::Persistence(_)));
}

struct UpperGenerator;

impl SlugGenerator for UpperGenerator {
    fn slugify(&self, input: &str) -> String {
        input.to_uppercase()
    }
}

#[tokio::test]
async fn normalization_goes_through_generator_port() {
    let svc = SlugService::new(
        Arc::new(InMemoryRecordStore::new()),
        Arc::new(UpperGenerator),
        organization_config(),
    );
    let check = |_: &str| -> DomainResult<bool> { Ok(false) };
    let slug = svc
        .generate_unique_slug(Some("abc"), &check)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(slug.as_str(), "ABC");
}
