use crate::models::Supply;
use crate::tests::create_test_service;

fn sample_supply(title: &str) -> Supply {
    Supply {
        image: "https://example.com/blanket.png".to_string(),
        category: "Clothing".to_string(),
        title: title.to_string(),
        description: "Warm blankets for winter".to_string(),
        amount: 120.0,
    }
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let service = create_test_service();
    let ack = service.create_supply(sample_supply("Blankets")).await.unwrap();
    assert!(ack.acknowledged);

    let doc = service.get_supply(&ack.inserted_id).await.unwrap().unwrap();
    assert_eq!(doc["title"], "Blankets");
    assert_eq!(doc["category"], "Clothing");
    assert_eq!(doc["image"], "https://example.com/blanket.png");
    assert_eq!(doc["description"], "Warm blankets for winter");
    assert_eq!(doc["amount"], 120.0);
    assert_eq!(doc["_id"], ack.inserted_id.as_str());
}

#[tokio::test]
async fn test_get_unknown_id_returns_none() {
    let service = create_test_service();
    assert!(service.get_supply("no-such-id").await.unwrap().is_none());
    // Malformed ids are just unmatched lookups, not errors
    assert!(service.get_supply("!!!").await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_then_get_returns_none() {
    let service = create_test_service();
    let ack = service.create_supply(sample_supply("Blankets")).await.unwrap();

    let deleted = service.delete_supply(&ack.inserted_id).await.unwrap();
    assert!(deleted.acknowledged);
    assert_eq!(deleted.deleted_count, 1);

    assert!(service.get_supply(&ack.inserted_id).await.unwrap().is_none());

    // Deleting again reports a count of 0, still a success
    let again = service.delete_supply(&ack.inserted_id).await.unwrap();
    assert_eq!(again.deleted_count, 0);
}

#[tokio::test]
async fn test_list_returns_all_in_insertion_order() {
    let service = create_test_service();
    for i in 0..3 {
        service
            .create_supply(sample_supply(&format!("Supply {}", i)))
            .await
            .unwrap();
    }

    let supplies = service.list_supplies().await.unwrap();
    assert_eq!(supplies.len(), 3);
    for (i, doc) in supplies.iter().enumerate() {
        assert_eq!(doc["title"], format!("Supply {}", i));
    }
}
