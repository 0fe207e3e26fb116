mod common;

use httpmock::prelude::*;
use migadu_client::Identity;
use serde_json::json;

fn identity(local_part: &str) -> Identity {
    Identity {
        local_part: local_part.to_string(),
        domain_name: "example.com".to_string(),
        address: format!("{local_part}@example.com"),
        name: "Sales".to_string(),
        may_send: true,
        may_receive: true,
        ..Default::default()
    }
}

#[tokio::test]
async fn get_identities_of_mailbox() {
    let server = MockServer::start_async().await;
    let want = vec![identity("sales"), identity("billing")];
    let body = json!({ "identities": want });
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/domains/example.com/mailboxes/test/identities");
            then.status(200).json_body(body);
        })
        .await;

    let got = common::client(&server)
        .get_identities("example.com", "test")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(got, want);
}

#[tokio::test]
async fn get_identities_empty_idna() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/domains/xn--ho-hia.de/mailboxes/seb/identities");
            then.status(200).json_body(json!({}));
        })
        .await;

    let got = common::client(&server)
        .get_identities("hoß.de", "seb")
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(got.is_empty());
}

#[tokio::test]
async fn get_identity_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/domains/example.com/mailboxes/test/identities/sales");
            then.status(404);
        })
        .await;

    let err = common::client(&server)
        .get_identity("example.com", "test", "sales")
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn create_identity_posts_to_mailbox() {
    let server = MockServer::start_async().await;
    let want = identity("sales");
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/domains/example.com/mailboxes/test/identities")
                .json_body_partial(r#"{ "local_part": "sales" }"#);
            then.status(200).json_body_obj(&want);
        })
        .await;

    let input = Identity {
        local_part: "sales".to_string(),
        ..Default::default()
    };
    let got = common::client(&server)
        .create_identity("example.com", "test", &input)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(got, want);
}

#[tokio::test]
async fn update_and_delete_identity() {
    let server = MockServer::start_async().await;
    let want = Identity {
        footer_active: true,
        footer_plain_body: "Sales team".to_string(),
        ..identity("sales")
    };
    let update = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/domains/example.com/mailboxes/test/identities/sales");
            then.status(200).json_body_obj(&want);
        })
        .await;
    let delete = server
        .mock_async(|when, then| {
            when.method(DELETE)
                .path("/domains/example.com/mailboxes/test/identities/sales");
            then.status(200).json_body_obj(&want);
        })
        .await;
    let client = common::client(&server);

    let updated = client
        .update_identity("example.com", "test", "sales", &want)
        .await
        .unwrap();
    let deleted = client
        .delete_identity("example.com", "test", "sales")
        .await
        .unwrap();

    update.assert_async().await;
    delete.assert_async().await;
    assert_eq!(updated, want);
    assert_eq!(deleted, want);
}

#[tokio::test]
async fn identity_writes_not_found() {
    let server = MockServer::start_async().await;
    for (method, path) in [
        (POST, "/domains/example.com/mailboxes/test/identities"),
        (PUT, "/domains/example.com/mailboxes/test/identities/sales"),
        (DELETE, "/domains/example.com/mailboxes/test/identities/sales"),
    ] {
        server
            .mock_async(move |when, then| {
                when.method(method).path(path);
                then.status(404);
            })
            .await;
    }
    let client = common::client(&server);

    let created = client
        .create_identity("example.com", "test", &Identity::default())
        .await;
    let updated = client
        .update_identity("example.com", "test", "sales", &Identity::default())
        .await;
    let deleted = client.delete_identity("example.com", "test", "sales").await;

    assert!(created.unwrap_err().is_not_found());
    assert!(updated.unwrap_err().is_not_found());
    assert!(deleted.unwrap_err().is_not_found());
}
