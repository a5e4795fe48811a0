use crate::models::Testimonial;
use crate::tests::create_test_service;
use serde_json::{Map, Value, json};

fn as_map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {}", other),
    }
}

#[tokio::test]
async fn test_testimonials_create_and_list() {
    let service = create_test_service();
    for i in 0..2 {
        service
            .create_testimonial(Testimonial {
                name: format!("Donor {}", i),
                title: "Wonderful cause".to_string(),
                description: "Happy to help".to_string(),
            })
            .await
            .unwrap();
    }

    let testimonials = service.list_testimonials().await.unwrap();
    assert_eq!(testimonials.len(), 2);
    assert_eq!(testimonials[0]["name"], "Donor 0");
    assert_eq!(testimonials[1]["name"], "Donor 1");
}

#[tokio::test]
async fn test_volunteers_store_free_form_fields() {
    let service = create_test_service();
    let volunteer = as_map(json!({
        "name": "Sam",
        "image": "https://example.com/sam.png",
        "birthDate": "1990-01-01",
        "contactNo": "555-0100",
        "email": "sam@example.com",
        "address": "12 Main St"
    }));
    service.create_volunteer(volunteer).await.unwrap();

    let volunteers = service.list_volunteers().await.unwrap();
    assert_eq!(volunteers.len(), 1);
    assert_eq!(volunteers[0]["name"], "Sam");
    assert_eq!(volunteers[0]["birthDate"], "1990-01-01");
    // Storage assigns an opaque string id
    assert!(volunteers[0]["_id"].is_string());
}

#[tokio::test]
async fn test_comments_accept_any_shape() {
    let service = create_test_service();
    service
        .create_comment(as_map(json!({ "text": "Great work!", "rating": 5 })))
        .await
        .unwrap();
    service
        .create_comment(as_map(json!({ "author": "anon" })))
        .await
        .unwrap();

    let comments = service.list_comments().await.unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0]["text"], "Great work!");
    assert_eq!(comments[0]["rating"], 5);
    assert_eq!(comments[1]["author"], "anon");
}

#[tokio::test]
async fn test_collections_are_independent() {
    let service = create_test_service();
    service
        .create_comment(as_map(json!({ "text": "hi" })))
        .await
        .unwrap();

    assert!(service.list_volunteers().await.unwrap().is_empty());
    assert!(service.list_supplies().await.unwrap().is_empty());
    assert_eq!(service.list_comments().await.unwrap().len(), 1);
}
