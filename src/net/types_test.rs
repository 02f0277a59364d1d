use super::*;

#[test]
fn project_list_item_tolerates_missing_updated_at() {
    let item: ProjectListItem = serde_json::from_value(serde_json::json!({
        "id": "p-1",
        "name": "Token sale"
    }))
    .unwrap();
    assert_eq!(item.id, "p-1");
    assert_eq!(item.name, "Token sale");
    assert_eq!(item.updated_at, None);
}

#[test]
fn sync_up_request_serializes_both_flags() {
    let body = IpfsSyncUpRequest { keep_state: true, include_build_info: false };
    assert_eq!(
        serde_json::to_value(body).unwrap(),
        serde_json::json!({ "keep_state": true, "include_build_info": false })
    );
}

#[test]
fn sync_up_response_reads_hash() {
    let resp: IpfsSyncUpResponse = serde_json::from_str(r#"{"hash":"QmYwAPJzv5CZsnA"}"#).unwrap();
    assert_eq!(resp.hash, "QmYwAPJzv5CZsnA");
}

#[test]
fn sync_up_response_without_hash_is_rejected() {
    let resp = serde_json::from_str::<IpfsSyncUpResponse>(r#"{"ok":true}"#);
    assert!(resp.is_err());
}

#[test]
fn user_avatar_defaults_to_none() {
    let user: User = serde_json::from_str(r#"{"id":"u-1","name":"Ada"}"#).unwrap();
    assert_eq!(user.avatar_url, None);
}
