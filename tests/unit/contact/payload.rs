use super::*;

fn filled() -> ContactFields {
    ContactFields {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        subject: "Hello".to_owned(),
        message: "Let's build something.".to_owned(),
    }
}

#[test]
fn payload_has_exactly_the_relay_fields() {
    let payload = ContactPayload::new("key-123", &filled());
    let json = serde_json::to_value(&payload).unwrap();
    let obj = json.as_object().unwrap();
    let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        ["access_key", "email", "from_name", "message", "name", "subject"]
    );
    assert_eq!(obj["from_name"], "Ada");
    assert_eq!(obj["access_key"], "key-123");
}

#[test]
fn response_tolerates_missing_fields() {
    let r: RelayResponse = serde_json::from_str("{}").unwrap();
    assert!(!r.success);
    assert_eq!(r.message, None);

    let r: RelayResponse =
        serde_json::from_str(r#"{"success":true,"message":"Email sent","data":{}}"#).unwrap();
    assert!(r.success);
    assert_eq!(r.message.as_deref(), Some("Email sent"));
}

#[test]
fn all_fields_are_required() {
    filled().validate().unwrap();

    let mut f = filled();
    f.subject = "   ".to_owned();
    let err = f.validate().unwrap_err();
    assert!(err.to_string().contains("subject is required"));
}

#[test]
fn email_needs_local_and_domain() {
    for bad in ["ada", "@example.com", "ada@", "a@b@c"] {
        let f = ContactFields {
            email: bad.to_owned(),
            ..filled()
        };
        assert!(f.validate().is_err(), "{bad}");
    }
}
