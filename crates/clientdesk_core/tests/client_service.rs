use clientdesk_core::db::{open_db, open_db_in_memory};
use clientdesk_core::model::validation::{COMPANY_NAME_REQUIRED, STATE_INVALID};
use clientdesk_core::{Client, ClientService, RepoError, SqliteClientRepository};

fn blank_optional_fields(company_name: &str) -> Client {
    Client {
        website_url: Some(String::new()),
        phone_number: Some(String::new()),
        street_address: Some(String::new()),
        city: Some(String::new()),
        state: Some(String::new()),
        zip_code: Some(String::new()),
        ..Client::new(company_name)
    }
}

#[test]
fn validate_create_read_end_to_end() {
    let conn = open_db_in_memory().unwrap();
    let service = ClientService::new(SqliteClientRepository::try_new(&conn).unwrap());

    let client = blank_optional_fields("Acme");
    assert!(service.validate_client(&client).is_empty());

    let id = service.create_client(&client).unwrap();
    assert!(id > 0);

    let loaded = service.get_client(id).unwrap();
    assert_eq!(loaded.company_name, "Acme");
    assert_eq!(loaded.id, Some(id));
    assert!(loaded.same_identity(&Client::with_id(id, "Other Name")));
}

#[test]
fn invalid_submission_is_redisplayed_without_persisting() {
    let conn = open_db_in_memory().unwrap();
    let service = ClientService::new(SqliteClientRepository::try_new(&conn).unwrap());

    let submitted = Client {
        zip_code: Some("abc".to_string()),
        ..blank_optional_fields("   ")
    };
    let errors = service.validate_client(&submitted);
    assert_eq!(
        errors,
        vec![
            COMPANY_NAME_REQUIRED.to_string(),
            "Zip Code must be five digits or ZIP+4".to_string(),
        ]
    );
    // Caller-side protocol: persistence only happens on an empty error list.
    if errors.is_empty() {
        service.create_client(&submitted).unwrap();
    }

    assert!(service.list_clients().unwrap().is_empty());
}

#[test]
fn validate_is_deterministic() {
    let conn = open_db_in_memory().unwrap();
    let service = ClientService::new(SqliteClientRepository::try_new(&conn).unwrap());

    let client = Client {
        phone_number: Some("phone".to_string()),
        state: Some("XYZ".to_string()),
        ..Client::new("")
    };
    let first = service.validate_client(&client);
    let second = service.validate_client(&client);

    assert_eq!(first, second);
    let mut sorted = first.clone();
    sorted.sort();
    assert_eq!(first, sorted);
}

#[test]
fn company_name_message_only_for_blank_names() {
    let conn = open_db_in_memory().unwrap();
    let service = ClientService::new(SqliteClientRepository::try_new(&conn).unwrap());

    for name in ["", " ", "\t"] {
        let errors = service.validate_client(&Client::new(name));
        assert!(errors.iter().any(|message| message == COMPANY_NAME_REQUIRED));
    }
    for name in ["A", " Acme ", "Initech LLC"] {
        let errors = service.validate_client(&Client::new(name));
        assert!(!errors.iter().any(|message| message == COMPANY_NAME_REQUIRED));
    }
}

#[test]
fn edit_flow_updates_and_lists_in_order() {
    let conn = open_db_in_memory().unwrap();
    let service = ClientService::new(SqliteClientRepository::try_new(&conn).unwrap());

    let beta = service.create_client(&Client::new("Beta")).unwrap();
    let gamma = service.create_client(&Client::new("Gamma")).unwrap();

    let mut edited = service.get_client(gamma).unwrap();
    edited.company_name = "Alpha".to_string();
    assert!(service.validate_client(&edited).is_empty());
    service.update_client(&edited).unwrap();

    let names = service
        .list_clients()
        .unwrap()
        .into_iter()
        .map(|client| (client.id.unwrap(), client.company_name))
        .collect::<Vec<_>>();
    assert_eq!(
        names,
        vec![(gamma, "Alpha".to_string()), (beta, "Beta".to_string())]
    );
}

#[test]
fn delete_then_read_reports_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = ClientService::new(SqliteClientRepository::try_new(&conn).unwrap());

    let id = service.create_client(&Client::new("Acme")).unwrap();
    service.delete_client(id).unwrap();
    service.delete_client(id).unwrap();

    assert!(matches!(
        service.get_client(id),
        Err(RepoError::NotFound(missing)) if missing == id
    ));
}

#[test]
fn records_survive_reopening_file_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clientdesk.db");

    let id = {
        let conn = open_db(&path).unwrap();
        let service = ClientService::new(SqliteClientRepository::try_new(&conn).unwrap());
        service.create_client(&Client::new("Durable")).unwrap()
    };

    let conn = open_db(&path).unwrap();
    let service = ClientService::new(SqliteClientRepository::try_new(&conn).unwrap());
    assert_eq!(service.get_client(id).unwrap().company_name, "Durable");
}

#[test]
fn padded_values_are_checked_as_they_would_be_stored() {
    let conn = open_db_in_memory().unwrap();
    let service = ClientService::new(SqliteClientRepository::try_new(&conn).unwrap());

    let submitted = Client {
        city: Some(format!("{}{}", "c".repeat(50), "   ")),
        state: Some(" ca \n".to_string()),
        ..Client::new(format!("{} ", "x".repeat(50)))
    };
    let errors = service.validate_client(&submitted);
    assert_eq!(
        errors,
        vec![
            "City must be at most 50 characters".to_string(),
            "Company Name must be at most 50 characters".to_string(),
            STATE_INVALID.to_string(),
        ]
    );
    if errors.is_empty() {
        service.create_client(&submitted).unwrap();
    }

    assert!(service.list_clients().unwrap().is_empty());
}
