//! Unit tests for BR API types

use super::*;
use serde_json::json;

#[test]
fn test_envelope_deserialization() {
    let envelope: Envelope = serde_json::from_value(json!({
        "status": "Ok",
        "players": {"1": {"name": "A"}}
    }))
    .unwrap();

    assert_eq!(envelope.status, Some(json!("Ok")));
    assert!(envelope.players.is_some());
}

#[test]
fn test_envelope_missing_fields_default_to_none() {
    let envelope: Envelope = serde_json::from_value(json!({})).unwrap();
    assert!(envelope.status.is_none());
    assert!(envelope.players.is_none());
}

#[test]
fn test_collection_keeps_api_order() {
    let players = json!({
        "900": {"name": "Zed"},
        "100": {"name": "Abe"},
        "500": {"name": "Max"}
    });

    let collection = PlayerCollection::from_value(Some(players)).unwrap();
    let keys: Vec<&str> = collection.iter().map(|p| p.key.as_str()).collect();
    assert_eq!(keys, vec!["900", "100", "500"]);
}

#[test]
fn test_collection_empty_forms() {
    for players in [None, Some(json!(null)), Some(json!({})), Some(json!([]))] {
        let collection = PlayerCollection::from_value(players).unwrap();
        assert!(collection.is_empty());
        assert_eq!(collection.len(), 0);
    }
}

#[test]
fn test_collection_from_array_uses_id_or_index() {
    let players = json!([
        {"id": 42, "name": "With Id"},
        {"name": "Without Id"}
    ]);

    let collection = PlayerCollection::from_value(Some(players)).unwrap();
    let keys: Vec<&str> = collection.iter().map(|p| p.key.as_str()).collect();
    assert_eq!(keys, vec!["42", "1"]);
}

#[test]
fn test_collection_rejects_unexpected_shapes() {
    let err = PlayerCollection::from_value(Some(json!("nope"))).unwrap_err();
    assert!(matches!(err, BrError::MalformedResponse { .. }));

    let err = PlayerCollection::from_value(Some(json!({"1": 5}))).unwrap_err();
    assert!(err.to_string().contains("player 1"));
}

#[test]
fn test_raw_player_present_folds_null() {
    let player = RawPlayer::new(
        "7",
        json!({"name": "Smith", "csr": null})
            .as_object()
            .cloned()
            .unwrap(),
    );

    assert_eq!(player.get("csr"), Some(&json!(null)));
    assert_eq!(player.present("csr"), None);
    assert_eq!(player.get("energy"), None);
    assert_eq!(player.label(), "Smith (7)");
}

#[test]
fn test_player_record_serialization_shape() {
    let record = PlayerRecord {
        name: Some("Smith".to_string()),
        age: 24,
        nationality: Some("NZ".to_string()),
        csr: 1500,
        energy: 80,
        skills: Skills {
            stamina: json!(70),
            handling: json!(60),
            attack: json!(55),
            defense: json!(65),
            speed: Value::Null,
        },
        contract_until: "2025-06-01".to_string(),
    };

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["name"], "Smith");
    assert_eq!(json["csr"], 1500);
    assert_eq!(json["skills"]["handling"], 60);
    assert!(json["skills"]["speed"].is_null());
    assert_eq!(json["contract_until"], "2025-06-01");
}
