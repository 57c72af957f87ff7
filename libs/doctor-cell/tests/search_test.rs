use assert_matches::assert_matches;
use serde_json::json;
use wiremock::{MockServer, Mock, ResponseTemplate};
use wiremock::matchers::{method, path, query_param};

use doctor_cell::handlers::search_doctors;
use doctor_cell::models::{DoctorSearchFilters, SearchOutcome};
use doctor_cell::render::{NO_DOCTORS_MESSAGE, SEARCH_ERROR_MESSAGE};
use doctor_cell::services::DoctorSearchService;
use shared_models::PortalError;
use shared_utils::html::loading_spinner;
use shared_utils::page::{ids, Page};
use shared_utils::test_utils::{MemoryPage, MockHospitalResponses, TestConfig};

fn search_page(specialization: &str, date: &str) -> MemoryPage {
    let page = MemoryPage::patient_dashboard();
    page.set_value(ids::SPECIALIZATION, specialization).unwrap();
    page.set_value(ids::APPOINTMENT_DATE, date).unwrap();
    page
}

#[tokio::test]
async fn test_search_service_decodes_doctors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search_doctors"))
        .and(query_param("specialization", "Cardio"))
        .and(query_param("date", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockHospitalResponses::doctor_list()))
        .mount(&mock_server)
        .await;

    let service = DoctorSearchService::new(&TestConfig::for_server(mock_server.uri()).to_app_config());
    let doctors = service
        .search_doctors(&DoctorSearchFilters::new("Cardio", ""))
        .await
        .unwrap();

    assert_eq!(doctors.len(), 2);
    assert_eq!(doctors[0].name, "asmith");
    assert_eq!(doctors[0].consultation_fee, Some(150.0));
    assert_eq!(doctors[1].experience, None);
}

#[tokio::test]
async fn test_search_renders_cards() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search_doctors"))
        .and(query_param("specialization", "Pedia"))
        .and(query_param("date", "2025-06-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockHospitalResponses::doctor_list()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let page = search_page("Pedia", "2025-06-01");
    let service = DoctorSearchService::new(&TestConfig::for_server(mock_server.uri()).to_app_config());

    let outcome = search_doctors(&page, &service).await.unwrap();

    assert_eq!(outcome, SearchOutcome::Found(2));
    let html = page.inner_html(ids::DOCTOR_RESULTS).unwrap();
    assert_eq!(html.matches("Book Appointment").count(), 2);
    assert!(html.contains("<strong>Fee:</strong> $0"));
    assert!(html.contains("<strong>Experience:</strong> N/A years"));
}

#[tokio::test]
async fn test_search_shows_spinner_first() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search_doctors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let page = search_page("", "");
    let service = DoctorSearchService::new(&TestConfig::for_server(mock_server.uri()).to_app_config());

    search_doctors(&page, &service).await.unwrap();

    let history = page.html_history(ids::DOCTOR_RESULTS);
    assert_eq!(history.len(), 2);
    assert_eq!(history[0], loading_spinner());
}

#[tokio::test]
async fn test_search_empty_list_shows_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search_doctors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let page = search_page("Dermatology", "");
    let service = DoctorSearchService::new(&TestConfig::for_server(mock_server.uri()).to_app_config());

    let outcome = search_doctors(&page, &service).await.unwrap();

    assert_eq!(outcome, SearchOutcome::Empty);
    let html = page.inner_html(ids::DOCTOR_RESULTS).unwrap();
    assert!(html.contains(NO_DOCTORS_MESSAGE));
    assert!(!html.contains("card"));
}

#[tokio::test]
async fn test_search_malformed_body_shows_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search_doctors"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let page = search_page("Cardio", "");
    let service = DoctorSearchService::new(&TestConfig::for_server(mock_server.uri()).to_app_config());

    let outcome = search_doctors(&page, &service).await.unwrap();

    assert_eq!(outcome, SearchOutcome::Failed);
    let html = page.inner_html(ids::DOCTOR_RESULTS).unwrap();
    assert!(html.contains(SEARCH_ERROR_MESSAGE));
    assert!(html.contains("alert-danger"));
    assert!(page.alerts().is_empty());
}

#[tokio::test]
async fn test_search_network_failure_shows_error() {
    let page = search_page("Cardio", "");
    let service = DoctorSearchService::new(&TestConfig::unreachable().to_app_config());

    let outcome = search_doctors(&page, &service).await.unwrap();

    assert_eq!(outcome, SearchOutcome::Failed);
    assert!(page.inner_html(ids::DOCTOR_RESULTS).unwrap().contains(SEARCH_ERROR_MESSAGE));
}

#[tokio::test]
async fn test_search_without_results_container_is_a_page_error() {
    let page = MemoryPage::new()
        .with_input(ids::SPECIALIZATION, "")
        .with_input(ids::APPOINTMENT_DATE, "");
    let service = DoctorSearchService::new(&TestConfig::unreachable().to_app_config());

    let result = search_doctors(&page, &service).await;

    assert_matches!(result, Err(PortalError::MissingElement(ref id)) if id == "doctorResults");
}
