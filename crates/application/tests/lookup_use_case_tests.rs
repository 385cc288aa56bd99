mod helpers;

use helpers::mock_resolver::MockDnsResolver;
use std::sync::Arc;
use zonecheck_application::{CheckBatchUseCase, CheckDomainUseCase};
use zonecheck_domain::Disposition;

fn single(resolver: &MockDnsResolver) -> CheckDomainUseCase {
    CheckDomainUseCase::new(Arc::new(resolver.clone()))
}

fn batch(resolver: &MockDnsResolver) -> CheckBatchUseCase {
    CheckBatchUseCase::new(Arc::new(resolver.clone()))
}

#[tokio::test]
async fn single_lookup_defaults_to_ns() {
    let resolver = MockDnsResolver::new();
    resolver
        .set_disposition("example.test", Disposition::Secure)
        .await;

    let line = single(&resolver)
        .execute("example.test", None)
        .await
        .unwrap();

    assert_eq!(line, "example.test,\"\",secure,\"\"");

    let calls = resolver.calls().await;
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].record_type, "NS");
    assert!(calls[0].strict);
}

#[tokio::test]
async fn single_lookup_unrecognised_token_defaults_to_ns() {
    let resolver = MockDnsResolver::new();
    single(&resolver)
        .execute("example.test", Some("NOT-A-TYPE"))
        .await
        .unwrap();

    assert_eq!(resolver.calls().await[0].record_type, "NS");
}

#[tokio::test]
async fn single_lookup_honours_explicit_token() {
    let resolver = MockDnsResolver::new();
    single(&resolver)
        .execute("example.test", Some("aaaa"))
        .await
        .unwrap();

    assert_eq!(resolver.calls().await[0].record_type, "AAAA");
}

#[tokio::test]
async fn single_lookup_trims_name() {
    let resolver = MockDnsResolver::new();
    single(&resolver)
        .execute("  example.test \n", None)
        .await
        .unwrap();

    assert_eq!(resolver.calls().await[0].name, "example.test");
}

#[tokio::test]
async fn single_lookup_surfaces_resolver_status() {
    let resolver = MockDnsResolver::new();
    resolver
        .set_disposition("broken.test", Disposition::Insecure)
        .await;
    resolver.set_status("broken.test", "SERVFAIL").await;

    let line = single(&resolver).execute("broken.test", None).await.unwrap();
    assert_eq!(line, "broken.test,SERVFAIL,insecure,\"\"");
}

#[tokio::test]
async fn transport_failure_propagates() {
    let resolver = MockDnsResolver::new();
    resolver.set_should_fail(true).await;

    let result = single(&resolver).execute("example.test", None).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn batch_queries_ns_without_strict_mode() {
    let resolver = MockDnsResolver::new();
    batch(&resolver)
        .execute(vec!["a.test".to_string(), "b.test".to_string()])
        .await
        .unwrap();

    let calls = resolver.calls().await;
    assert_eq!(calls.len(), 2);
    for call in &calls {
        assert_eq!(call.record_type, "NS");
        assert!(!call.strict);
    }
    // Resolved strictly in input order.
    assert_eq!(calls[0].name, "a.test");
    assert_eq!(calls[1].name, "b.test");
}

#[tokio::test]
async fn batch_moves_bogus_line_first() {
    let resolver = MockDnsResolver::new();
    resolver.set_disposition("a.test", Disposition::Secure).await;
    resolver
        .set_disposition(
            "b.test",
            Disposition::Bogus {
                reason: "chain broken".to_string(),
            },
        )
        .await;
    resolver
        .set_disposition("c.test", Disposition::Insecure)
        .await;

    let lines = batch(&resolver)
        .execute(vec![
            "a.test".to_string(),
            "b.test".to_string(),
            "c.test".to_string(),
        ])
        .await
        .unwrap();

    assert_eq!(
        lines,
        vec![
            "b.test,\"\",bogus,chain broken",
            "a.test,\"\",secure,\"\"",
            "c.test,\"\",insecure,\"\"",
        ]
    );
}

#[tokio::test]
async fn batch_reverses_bogus_lines_among_themselves() {
    let resolver = MockDnsResolver::new();
    let bogus = |reason: &str| Disposition::Bogus {
        reason: reason.to_string(),
    };
    resolver.set_disposition("one.test", Disposition::Secure).await;
    resolver.set_disposition("two.test", bogus("rrsig expired")).await;
    resolver.set_disposition("three.test", Disposition::NoData).await;
    resolver.set_disposition("four.test", bogus("no DS match")).await;
    resolver
        .set_disposition("five.test", Disposition::Insecure)
        .await;

    let lines = batch(&resolver)
        .execute(
            ["one", "two", "three", "four", "five"]
                .iter()
                .map(|n| format!("{n}.test"))
                .collect(),
        )
        .await
        .unwrap();

    let names: Vec<&str> = lines.iter().map(|l| l.split(',').next().unwrap()).collect();
    assert_eq!(
        names,
        vec!["four.test", "two.test", "one.test", "three.test", "five.test"]
    );
}

#[tokio::test]
async fn batch_failure_on_any_name_propagates() {
    let resolver = MockDnsResolver::new();
    resolver.set_should_fail(true).await;

    let result = batch(&resolver).execute(vec!["a.test".to_string()]).await;
    assert!(result.is_err());
}
