//! `generate-keys`, `kid`, `fields` and `about`

mod common;

use common::{FIXED_KEY_ID, FIXED_PRIVATE_KEY_PEM, FIXED_PUBLIC_KEY_PEM, Session, parse_json};
use keytool::{KeyKind, derive_key_id, is_valid_pem_key};
use keytool_cli::cli::{Commands, FieldsAction};
use keytool_cli::cli::key_ops::{PRIVATE_KEY_FILE, PUBLIC_KEY_FILE};
use keytool_cli::error::CliError;
use keytool_cli::store::{Field, FieldStore};

#[tokio::test]
async fn test_generate_keys_remembers_both_halves() {
    let mut session = Session::new();

    let (result, output) = session
        .run(true, Commands::GenerateKeys { out_dir: None })
        .await;
    assert!(result.is_ok());

    let json = parse_json(&output);
    let public_pem = session.store.get_field(Field::PublicKey).unwrap();
    let private_pem = session.store.get_field(Field::PrivateKey).unwrap();
    assert!(is_valid_pem_key(KeyKind::Public, &public_pem));
    assert!(is_valid_pem_key(KeyKind::Private, &private_pem));
    assert_eq!(json["public_key"], public_pem.as_str());
    assert_eq!(json["private_key"], private_pem.as_str());
    assert_eq!(json["kid"], derive_key_id(&public_pem).unwrap().as_str());
}

#[tokio::test]
async fn test_generate_keys_writes_pem_files() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("keys");
    let mut session = Session::new();

    let (result, output) = session
        .run(
            true,
            Commands::GenerateKeys {
                out_dir: Some(out_dir.clone()),
            },
        )
        .await;
    assert!(result.is_ok());

    let public_pem = std::fs::read_to_string(out_dir.join(PUBLIC_KEY_FILE)).unwrap();
    let private_pem = std::fs::read_to_string(out_dir.join(PRIVATE_KEY_FILE)).unwrap();
    assert_eq!(session.store.get_field(Field::PublicKey), Some(public_pem.clone()));
    assert_eq!(session.store.get_field(Field::PrivateKey), Some(private_pem));

    let json = parse_json(&output);
    assert_eq!(json["kid"], derive_key_id(&public_pem).unwrap().as_str());
    assert!(json.get("private_key").is_none());

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(out_dir.join(PRIVATE_KEY_FILE))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}

#[tokio::test]
async fn test_kid_from_file_and_from_store() {
    let dir = tempfile::tempdir().unwrap();
    let public_path = dir.path().join("public.pem");
    std::fs::write(&public_path, FIXED_PUBLIC_KEY_PEM).unwrap();
    let mut session = Session::new();

    let (result, output) = session
        .run(
            false,
            Commands::Kid {
                public_key: Some(public_path),
            },
        )
        .await;
    assert!(result.is_ok());
    assert_eq!(output.trim(), FIXED_KEY_ID);

    session
        .store
        .set_field(Field::PublicKey, FIXED_PUBLIC_KEY_PEM)
        .unwrap();
    let (result, output) = session.run(true, Commands::Kid { public_key: None }).await;
    assert!(result.is_ok());
    assert_eq!(parse_json(&output)["kid"], FIXED_KEY_ID);
}

#[tokio::test]
async fn test_kid_rejects_private_key() {
    let mut session = Session::new();
    session
        .store
        .set_field(Field::PublicKey, FIXED_PRIVATE_KEY_PEM)
        .unwrap();

    let (result, _) = session.run(false, Commands::Kid { public_key: None }).await;
    match result {
        Err(CliError::Validation(messages)) => {
            assert_eq!(messages.len(), 1);
            assert!(messages[0].starts_with("publicKey: "));
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fields_show_redacts_private_key() {
    let mut session = Session::new();
    session.store.set_field(Field::ProductId, "wp-shown").unwrap();
    session
        .store
        .set_field(Field::PrivateKey, FIXED_PRIVATE_KEY_PEM)
        .unwrap();

    let (result, output) = session
        .run(
            true,
            Commands::Fields {
                action: FieldsAction::Show,
            },
        )
        .await;
    assert!(result.is_ok());
    let json = parse_json(&output);
    assert_eq!(json["fields"]["productId"], "wp-shown");
    assert_eq!(json["fields"]["privateKey"], "<redacted>");
    assert!(json["fields"]["deviceId"].is_null());
    assert!(!output.contains("BEGIN PRIVATE KEY"));

    let (_, plain) = session
        .run(
            false,
            Commands::Fields {
                action: FieldsAction::Show,
            },
        )
        .await;
    assert!(plain.contains("productId: wp-shown"));
    assert!(plain.contains("deviceId: (not set)"));
    assert!(!plain.contains("BEGIN PRIVATE KEY"));
}

#[tokio::test]
async fn test_fields_clear_forgets_everything() {
    let mut session = Session::new();
    session.store.set_field(Field::ProductId, "wp-gone").unwrap();
    session.store.set_field(Field::DeviceId, "wd-gone").unwrap();

    let (result, _) = session
        .run(
            false,
            Commands::Fields {
                action: FieldsAction::Clear,
            },
        )
        .await;
    assert!(result.is_ok());
    for field in Field::ALL {
        assert!(session.store.get_field(field).is_none());
    }
}

#[tokio::test]
async fn test_about_mentions_the_centralized_model() {
    let mut session = Session::new();
    let (result, output) = session.run(false, Commands::About).await;
    assert!(result.is_ok());
    assert!(output.contains("centralized model"));
    assert!(output.contains("https://docs.nabto.com/"));
}
