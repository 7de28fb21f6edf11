//! Template service integration tests
//!
//! Exercise the façade through the public API, including concurrent
//! creation of the same template ID.

use std::collections::HashSet;
use std::sync::Arc;

use message_template_service::config::StorageConfig;
use message_template_service::template::{
    create_template_store, CreateTemplateRequest, Parameters, Template, TemplateError,
    TemplateService,
};

fn create_service() -> TemplateService {
    let store = create_template_store(&StorageConfig::default(), None);
    TemplateService::new(store)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_create_yields_one_success() {
    let service = Arc::new(create_service());

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .create(CreateTemplateRequest::new("shared", format!("version {}", i)))
                    .await
            })
        })
        .collect();

    let mut created = Vec::new();
    let mut duplicates = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(template) => created.push(template),
            Err(TemplateError::Duplicate(id)) => {
                assert_eq!(id, "shared");
                duplicates += 1;
            }
            Err(e) => panic!("unexpected error: {}", e),
        }
    }

    assert_eq!(created.len(), 1);
    assert_eq!(duplicates, 15);

    // The stored text is the one the winner wrote
    let rendered = service.render("shared", &Parameters::new()).await.unwrap();
    assert_eq!(rendered.text, created[0].text);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_list_concurrent_with_creates_sees_whole_records() {
    let service = Arc::new(create_service());

    let writer = {
        let service = service.clone();
        tokio::spawn(async move {
            for i in 0..200 {
                service
                    .create(CreateTemplateRequest::new(
                        format!("t-{}", i),
                        format!("text-{}", i),
                    ))
                    .await
                    .unwrap();
            }
        })
    };

    for _ in 0..20 {
        for template in service.list().await.unwrap() {
            let suffix = template.id.trim_start_matches("t-");
            assert_eq!(template.text, format!("text-{}", suffix));
        }
        tokio::task::yield_now().await;
    }

    writer.await.unwrap();
    assert_eq!(service.list().await.unwrap().len(), 200);
}

#[tokio::test]
async fn test_list_twice_returns_same_set() {
    let service = create_service();
    for (id, text) in [("one", "1"), ("two", "2 $x")] {
        service
            .create(CreateTemplateRequest::new(id, text))
            .await
            .unwrap();
    }

    let first: HashSet<Template> = service.list().await.unwrap().into_iter().collect();
    let second: HashSet<Template> = service.list().await.unwrap().into_iter().collect();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_render_never_runs_for_missing_template() {
    let service = create_service();

    let mut parameters = Parameters::new();
    parameters.insert("name".to_string(), "ignored".to_string());

    let result = service.render("absent", &parameters).await;
    assert_eq!(result, Err(TemplateError::NotFound("absent".to_string())));
}
