use rolodex_core::{
    Address, Attribute, Event, EventId, HasAttributes, JobApplication, JobApplicationId,
    JobHistory, Organization, OrganizationId, Person, PersonId, User, UserId,
};
use serde_json::{json, Value};

fn owner() -> UserId {
    UserId::from("user1")
}

fn roundtrip<T>(value: &T) -> (Value, T)
where
    T: serde::Serialize + serde::de::DeserializeOwned,
{
    let json = serde_json::to_value(value).unwrap();
    let decoded = serde_json::from_value(json.clone()).unwrap();
    (json, decoded)
}

fn keys(value: &Value) -> Vec<&str> {
    let mut keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    keys
}

fn fully_populated_person() -> Person {
    let mut person = Person::with_id(PersonId::from("person1"), owner(), "Ada", "Lovelace");
    person.middle_name = Some("King".to_string());
    person.nick_name = Some("Enchantress of Numbers".to_string());
    person.location = Some("London".to_string());
    person.phone = Some("+44 20 0000 0000".to_string());
    person.email = Some("ada@example.org".to_string());
    person.address = Some(Address {
        street: Some("12 St James's Square".to_string()),
        city: Some("London".to_string()),
        state: Some("Westminster".to_string()),
        country: Some("UK".to_string()),
        zip_code: Some("SW1Y 4JH".to_string()),
    });
    let mut job = JobHistory::new(OrganizationId::from("org1"), "Analyst", "1842-09-01");
    job.end_date = Some("1843-07-01".to_string());
    job.push_attr("project", "Notes on the Analytical Engine");
    person.job_history.push(job);
    person.push_attr("color", "blue");
    person
}

#[test]
fn user_uses_document_field_names() {
    let user = User::with_id(UserId::from("u1"), "ada@example.org", "Ada", "Lovelace");
    let (json, decoded) = roundtrip(&user);

    assert_eq!(
        json,
        json!({
            "_id": "u1",
            "email": "ada@example.org",
            "firstName": "Ada",
            "lastName": "Lovelace"
        })
    );
    assert_eq!(decoded, user);
}

#[test]
fn organization_roundtrips_with_empty_and_populated_attrs() {
    let mut org = Organization::with_id(OrganizationId::from("org1"), owner(), "Acme", "Berlin");
    let (json, decoded) = roundtrip(&org);
    assert_eq!(keys(&json), vec!["_id", "attrs", "location", "name", "owner"]);
    assert_eq!(json["attrs"], json!([]));
    assert_eq!(decoded, org);

    org.push_attr("industry", "anvils");
    let (_, decoded) = roundtrip(&org);
    assert_eq!(decoded, org);
}

#[test]
fn person_with_all_fields_roundtrips() {
    let person = fully_populated_person();
    let (json, decoded) = roundtrip(&person);

    assert_eq!(
        keys(&json),
        vec![
            "_id",
            "address",
            "attrs",
            "email",
            "firstName",
            "jobHistory",
            "lastName",
            "location",
            "middleName",
            "nickName",
            "owner",
            "phone",
        ]
    );
    assert_eq!(json["address"]["zipCode"], "SW1Y 4JH");
    assert_eq!(json["jobHistory"][0]["companyID"], "org1");
    assert_eq!(json["jobHistory"][0]["endDate"], "1843-07-01");
    assert_eq!(decoded, person);
}

#[test]
fn person_with_optional_fields_unset_omits_them() {
    let person = Person::with_id(PersonId::from("person2"), owner(), "Charles", "Babbage");
    let (json, decoded) = roundtrip(&person);

    assert_eq!(
        keys(&json),
        vec!["_id", "attrs", "firstName", "jobHistory", "lastName", "owner"]
    );
    assert_eq!(json["jobHistory"], json!([]));
    assert_eq!(decoded, person);
}

#[test]
fn empty_optional_string_is_kept_as_empty_not_omitted() {
    let mut person = Person::with_id(PersonId::from("person3"), owner(), "Grace", "Hopper");
    person.middle_name = Some(String::new());
    let (json, decoded) = roundtrip(&person);

    assert_eq!(json["middleName"], "");
    assert!(json.get("nickName").is_none());
    assert_eq!(decoded.middle_name, Some(String::new()));
    assert_eq!(decoded, person);
}

#[test]
fn address_omits_unset_parts() {
    let mut person = Person::with_id(PersonId::from("person3"), owner(), "Mary", "Somerville");
    person.address = Some(Address {
        city: Some("Edinburgh".to_string()),
        ..Address::default()
    });

    let (json, decoded) = roundtrip(&person);
    assert_eq!(json["address"], json!({ "city": "Edinburgh" }));
    assert_eq!(decoded, person);
}

#[test]
fn attribute_order_and_duplicate_keys_survive_roundtrip() {
    let mut event = Event::with_id(EventId::from("evt1"), owner(), "Coffee", "tomorrow", "");
    event.attrs = vec![
        Attribute::new("tag", "b"),
        Attribute::new("place", "cafe"),
        Attribute::new("tag", "a"),
        Attribute::new("tag", "b"),
    ];

    let (json, decoded) = roundtrip(&event);
    assert_eq!(
        json["attrs"],
        json!([
            { "key": "tag", "value": "b" },
            { "key": "place", "value": "cafe" },
            { "key": "tag", "value": "a" },
            { "key": "tag", "value": "b" }
        ])
    );
    assert_eq!(decoded.attrs, event.attrs);
    assert_eq!(decoded.attrs_named("tag").collect::<Vec<_>>(), vec!["b", "a", "b"]);
}

#[test]
fn job_history_entries_for_same_company_stay_distinct() {
    let company = OrganizationId::from("org1");
    let mut person = Person::with_id(PersonId::from("person4"), owner(), "Grace", "Hopper");
    person
        .job_history
        .push(JobHistory::new(company.clone(), "Lieutenant", "1943"));
    let mut later = JobHistory::new(company.clone(), "Rear Admiral", "1983");
    later.end_date = Some("1986".to_string());
    person.job_history.push(later);

    let (_, decoded) = roundtrip(&person);
    assert_eq!(decoded.job_history.len(), 2);
    assert_eq!(decoded.job_history[0].title, "Lieutenant");
    assert!(decoded.job_history[0].is_current());
    assert_eq!(decoded.job_history[1].title, "Rear Admiral");
    assert_eq!(decoded.job_history[1].end_date.as_deref(), Some("1986"));
    assert_eq!(decoded.jobs_at(&company).count(), 2);
}

#[test]
fn ada_lovelace_document_omits_unset_optionals() {
    let mut person = Person::with_id(PersonId::from("p1"), owner(), "Ada", "Lovelace");
    person.job_history.push(JobHistory::new(
        OrganizationId::from("org1"),
        "Engineer",
        "2020-01-01",
    ));
    person.attrs.push(Attribute::new("color", "blue"));

    let (json, decoded) = roundtrip(&person);
    assert_eq!(
        json,
        json!({
            "_id": "p1",
            "owner": "user1",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "jobHistory": [
                {
                    "companyID": "org1",
                    "title": "Engineer",
                    "startDate": "2020-01-01",
                    "attrs": []
                }
            ],
            "attrs": [{ "key": "color", "value": "blue" }]
        })
    );
    assert_eq!(decoded, person);
}

#[test]
fn job_application_keeps_empty_link_sequences() {
    let app = JobApplication::with_id(
        JobApplicationId::from("app1"),
        owner(),
        "Engineer",
        OrganizationId::from("org1"),
        "Analytical Engines Ltd",
    );

    let (json, decoded) = roundtrip(&app);
    assert_eq!(
        json,
        json!({
            "_id": "app1",
            "owner": "user1",
            "jobTitle": "Engineer",
            "companyID": "org1",
            "companyName": "Analytical Engines Ltd",
            "notes": "",
            "eventIDs": [],
            "people": [],
            "attrs": []
        })
    );
    assert_eq!(decoded, app);
}

#[test]
fn job_application_links_roundtrip_in_order() {
    let mut app = JobApplication::with_id(
        JobApplicationId::from("app2"),
        owner(),
        "Engineer",
        OrganizationId::from("org1"),
        "Analytical Engines Ltd",
    );
    app.notes = "referred by Charles".to_string();
    app.event_ids = vec![EventId::from("evt2"), EventId::from("evt1")];
    app.people = vec![PersonId::from("recruiter"), PersonId::from("manager")];
    app.push_attr("salary", "negotiable");

    let (json, decoded) = roundtrip(&app);
    assert_eq!(json["eventIDs"], json!(["evt2", "evt1"]));
    assert_eq!(json["people"], json!(["recruiter", "manager"]));
    assert_eq!(decoded, app);
}

#[test]
fn null_and_missing_sequences_decode_as_empty() {
    let value = json!({
        "_id": "app3",
        "owner": "user1",
        "jobTitle": "Engineer",
        "companyID": "org1",
        "companyName": "Acme",
        "notes": "",
        "eventIDs": null,
        "attrs": null
    });

    let app: JobApplication = serde_json::from_value(value).unwrap();
    assert!(app.event_ids.is_empty());
    assert!(app.people.is_empty());
    assert!(app.attrs.is_empty());

    let reencoded = serde_json::to_value(&app).unwrap();
    assert_eq!(reencoded["eventIDs"], json!([]));
    assert_eq!(reencoded["people"], json!([]));
}

#[test]
fn missing_required_field_fails_to_decode() {
    let value = json!({
        "_id": "org9",
        "owner": "user1",
        "location": "Paris",
        "attrs": []
    });

    let err = serde_json::from_value::<Organization>(value).unwrap_err();
    assert!(err.to_string().contains("name"), "unexpected error: {err}");
}

#[test]
fn unknown_fields_are_ignored() {
    let value = json!({
        "_id": "evt9",
        "owner": "user1",
        "name": "Birthday",
        "date": "March 3rd",
        "notes": "bring cake",
        "attrs": [],
        "legacyColor": "red"
    });

    let event: Event = serde_json::from_value(value).unwrap();
    assert_eq!(event.name, "Birthday");
    assert_eq!(event.date, "March 3rd");
}
