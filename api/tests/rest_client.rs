//! Wire-level tests of the REST client against a mock backend.

use api::models::{DoctorFields, EntityKind, ImageSource};
use api::{ApiError, Draft, Editor, ImageMode, RestClient, SelectedFile, SubmitError};
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, body_string, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn doctor_json(id: &str, name: &str, city: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "specialty": "Oftalmologia Geral",
        "city": city,
        "contact_info": "(91) 98888-0000",
        "image_url": "",
    })
}

#[tokio::test]
async fn list_doctors_passes_the_city_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/doctors"))
        .and(query_param("city", "Belém"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([doctor_json("d1", "Dra. Ana", "Belém")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(server.uri());
    let doctors = client.list_doctors(Some("Belém")).await.unwrap();

    assert_eq!(doctors.len(), 1);
    assert_eq!(doctors[0].id, "d1");
    assert_eq!(doctors[0].fields.city, "Belém");
    // Legacy records carry no provenance attribute.
    assert_eq!(doctors[0].fields.image_source, ImageSource::Url);
}

#[tokio::test]
async fn clearing_the_filter_issues_an_unfiltered_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/doctors"))
        .and(query_param_is_missing("city"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(2)
        .mount(&server)
        .await;

    let client = RestClient::new(server.uri());
    assert!(client.list_doctors(None).await.unwrap().is_empty());
    // An empty filter string counts as no filter.
    assert!(client.list_doctors(Some("")).await.unwrap().is_empty());
}

#[tokio::test]
async fn url_mode_sends_the_typed_image_url_unmodified() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/doctors"))
        .and(header("authorization", "Bearer t0k3n"))
        .and(body_json(json!({
            "name": "Dra. Ana",
            "specialty": "Retina",
            "city": "Belém",
            "contact_info": "(91) 98888-0000",
            "image_url": "https://example.com/ana.jpg",
            "image_source": "url",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(doctor_json("d1", "Dra. Ana", "Belém")))
        .expect(1)
        .mount(&server)
        .await;

    let editor = Editor::Creating {
        draft: Draft::Doctor(DoctorFields {
            name: "Dra. Ana".into(),
            specialty: "Retina".into(),
            city: "Belém".into(),
            contact_info: "(91) 98888-0000".into(),
            image_url: "https://example.com/ana.jpg".into(),
            image_source: ImageSource::Url,
        }),
        image_mode: ImageMode::Url,
    };

    let client = RestClient::new(server.uri());
    client.submit(&editor, None, "t0k3n").await.unwrap();
}

#[tokio::test]
async fn upload_mode_uploads_first_and_substitutes_the_hosted_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .and(header("authorization", "Bearer t0k3n"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"url": "/uploads/abc.png"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/doctors"))
        .and(body_partial_json(json!({
            "image_url": format!("{}/uploads/abc.png", server.uri()),
            "image_source": "upload",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(doctor_json("d1", "Dra. Ana", "Belém")))
        .expect(1)
        .mount(&server)
        .await;

    let mut editor = Editor::create(EntityKind::Doctors);
    if let Some(Draft::Doctor(fields)) = editor.draft_mut() {
        fields.name = "Dra. Ana".into();
        fields.specialty = "Retina".into();
        fields.city = "Belém".into();
        fields.contact_info = "(91) 98888-0000".into();
    }

    let file = SelectedFile {
        name: "abc.png".into(),
        bytes: vec![0x89, 0x50, 0x4e, 0x47],
    };

    let client = RestClient::new(server.uri());
    client.submit(&editor, Some(&file), "t0k3n").await.unwrap();
}

#[tokio::test]
async fn a_failed_upload_aborts_the_whole_submit() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .respond_with(ResponseTemplate::new(500).set_body_string("disk full"))
        .expect(1)
        .mount(&server)
        .await;
    // The record payload must never be sent.
    Mock::given(method("POST"))
        .and(path("/api/doctors"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let editor = Editor::create(EntityKind::Doctors);
    let file = SelectedFile {
        name: "abc.png".into(),
        bytes: vec![1, 2, 3],
    };

    let client = RestClient::new(server.uri());
    let err = client.submit(&editor, Some(&file), "t0k3n").await.unwrap_err();
    assert!(matches!(
        err,
        SubmitError::Upload(ApiError::Backend { status: 500, .. })
    ));
}

#[tokio::test]
async fn login_sends_form_encoded_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("username=admin%40spo.com&password=s3cret"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"access_token": "tok-1", "token_type": "bearer"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(server.uri());
    let token = client.login("admin@spo.com", "s3cret").await.unwrap();
    assert_eq!(token, "tok-1");
}

#[tokio::test]
async fn invalid_credentials_surface_as_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Incorrect username or password"})))
        .mount(&server)
        .await;

    let client = RestClient::new(server.uri());
    let err = client.login("admin@spo.com", "wrong").await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));
}

#[tokio::test]
async fn delete_issues_exactly_one_call_for_the_id() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/events/e7"))
        .and(header("authorization", "Bearer t0k3n"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Event deleted successfully"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(server.uri());
    client
        .delete_record(EntityKind::Events, "e7", "t0k3n")
        .await
        .unwrap();
}

#[tokio::test]
async fn update_puts_to_the_record_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/doctors/d9"))
        .and(header("authorization", "Bearer t0k3n"))
        .and(body_partial_json(json!({"name": "Dr. João"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(doctor_json("d9", "Dr. João", "Marabá")))
        .expect(1)
        .mount(&server)
        .await;

    let mut draft = Draft::Doctor(DoctorFields::default());
    if let Draft::Doctor(fields) = &mut draft {
        fields.name = "Dr. João".into();
        fields.city = "Marabá".into();
    }

    let client = RestClient::new(server.uri());
    client.update_record("d9", &draft, "t0k3n").await.unwrap();
}

#[tokio::test]
async fn stale_token_on_a_mutation_is_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/doctors/d1"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = RestClient::new(server.uri());
    let err = client
        .delete_record(EntityKind::Doctors, "d1", "expired")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));
}
