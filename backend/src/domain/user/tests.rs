//! Tests for the user record model.

use super::*;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[fixture]
fn full_payload() -> Value {
    json!({
        "id": 999,
        "name": "Carlos Mendes",
        "account": {
            "id": 4,
            "number": "03.456789-1",
            "agency": "5060",
            "balance": 3200.75,
            "limit": 3000.0
        },
        "card": { "id": 4, "number": "xxxx xxxx xxxx 3333", "limit": 8000.0 },
        "features": [{ "id": 1, "icon": "💸", "description": "PIX Instantâneo" }],
        "news": [{ "icon": "🤖", "description": "Invista no seu futuro." }],
        "nickname": "ignored"
    })
}

#[rstest]
#[case("1", Some(1))]
#[case("42", Some(42))]
#[case("abc", None)]
#[case("-1", None)]
#[case("", None)]
#[case("1.5", None)]
fn user_id_parses_unsigned_integers(#[case] raw: &str, #[case] expected: Option<u64>) {
    assert_eq!(raw.parse::<UserId>().ok().map(UserId::get), expected);
}

#[rstest]
fn user_id_successor_stops_at_the_end_of_the_range() {
    assert_eq!(UserId::new(1).successor(), Some(UserId::new(2)));
    assert_eq!(UserId::new(u64::MAX).successor(), None);
}

#[rstest]
fn draft_ignores_client_ids_and_unknown_fields(full_payload: Value) {
    let draft: UserDraft = serde_json::from_value(full_payload).expect("payload parses");

    assert_eq!(draft.name, "Carlos Mendes");
    assert_eq!(draft.account.as_ref().map(|a| a.agency.as_str()), Some("5060"));
    assert_eq!(draft.news.first().and_then(|n| n.id), None);
}

#[rstest]
fn draft_defaults_optional_sections() {
    let draft: UserDraft = serde_json::from_value(json!({ "name": "Ana" })).expect("parses");
    assert_eq!(draft, UserDraft::named("Ana"));
}

#[rstest]
fn draft_rejects_mistyped_fields() {
    let result = serde_json::from_value::<UserDraft>(json!({ "name": "Ana", "features": {} }));
    assert!(result.is_err());
}

#[rstest]
fn user_omits_absent_account_and_card() {
    let user = User::from_draft(UserId::new(1), UserDraft::named("Ana"));

    let value = serde_json::to_value(&user).expect("serialises");

    assert_eq!(
        value,
        json!({ "id": 1, "name": "Ana", "features": [], "news": [] })
    );
}

#[rstest]
fn user_keeps_every_section_from_the_draft(full_payload: Value) {
    let draft: UserDraft = serde_json::from_value(full_payload).expect("payload parses");

    let user = User::from_draft(UserId::new(3), draft.clone());

    assert_eq!(user.id(), UserId::new(3));
    assert_eq!(user.name(), draft.name);
    assert_eq!(user.account(), draft.account.as_ref());
    assert_eq!(user.card(), draft.card.as_ref());
    assert_eq!(user.features(), draft.features.as_slice());
    assert_eq!(user.news(), draft.news.as_slice());
}
