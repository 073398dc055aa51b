use reqwest::StatusCode;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};
use yr_forecast::Error;

use crate::helpers::{
    check_response_format, mount_varsel, request_count, spawn_service, varsel_response,
    varsel_url, varsel_xml, VARSEL_PATH,
};

#[tokio::test]
async fn can_load_forecast_from_url() {
    let server = MockServer::start().await;
    mount_varsel(&server).await;
    let service = spawn_service();

    let forecast = service.load_from_url(&varsel_url(&server)).await.unwrap();

    check_response_format(&forecast);
    assert_eq!(
        forecast.describe().unwrap(),
        "Current weather for Gol: Regn og torden, 20 degrees C"
    );
}

#[tokio::test]
async fn second_load_within_ttl_is_served_from_cache() {
    let server = MockServer::start().await;
    mount_varsel(&server).await;
    let service = spawn_service();
    let url = varsel_url(&server);

    let first = service.load_from_url(&url).await.unwrap();
    assert_eq!(request_count(&server).await, 1);

    let second = service.load_from_url(&url).await.unwrap();
    assert_eq!(request_count(&server).await, 1);
    assert_eq!(first, second);
}

#[tokio::test]
async fn invalidate_cache_forces_refetch() {
    let server = MockServer::start().await;
    mount_varsel(&server).await;
    let service = spawn_service();
    let url = varsel_url(&server);

    service.load_from_url(&url).await.unwrap();
    service.load_from_url(&url).await.unwrap();
    assert_eq!(request_count(&server).await, 1);

    service.invalidate_cache().await;
    assert!(service.cache.is_empty().await);

    let forecast = service.load_from_url(&url).await.unwrap();
    assert_eq!(request_count(&server).await, 2);
    check_response_format(&forecast);
}

#[tokio::test]
async fn server_error_is_returned_and_not_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(VARSEL_PATH))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_varsel(&server).await;
    let service = spawn_service();
    let url = varsel_url(&server);

    let err = service.load_from_url(&url).await.unwrap_err();
    assert!(matches!(err, Error::Http(StatusCode::INTERNAL_SERVER_ERROR)));
    assert!(service.cache.is_empty().await);

    let forecast = service.load_from_url(&url).await.unwrap();
    assert_eq!(request_count(&server).await, 2);
    check_response_format(&forecast);
}

#[tokio::test]
async fn only_status_200_is_accepted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(VARSEL_PATH))
        .respond_with(ResponseTemplate::new(203).set_body_bytes(varsel_xml()))
        .mount(&server)
        .await;
    let service = spawn_service();

    let err = service
        .load_from_url(&varsel_url(&server))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Http(StatusCode::NON_AUTHORITATIVE_INFORMATION)));
    assert!(service.cache.is_empty().await);
}

#[tokio::test]
async fn malformed_body_does_not_poison_cache() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(VARSEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<weatherdata><location>"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_varsel(&server).await;
    let service = spawn_service();
    let url = varsel_url(&server);

    let err = service.load_from_url(&url).await.unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
    assert!(service.cache.is_empty().await);

    let forecast = service.load_from_url(&url).await.unwrap();
    assert_eq!(request_count(&server).await, 2);
    check_response_format(&forecast);
}

#[tokio::test]
async fn unreachable_endpoint_is_a_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let service = spawn_service();

    let err = service
        .load_from_url(&format!("http://{}{}", addr, VARSEL_PATH))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Network(_)));
    assert!(service.cache.is_empty().await);
}

#[tokio::test]
async fn cache_is_keyed_by_exact_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(VARSEL_PATH))
        .respond_with(varsel_response())
        .mount(&server)
        .await;
    let service = spawn_service();
    let url = varsel_url(&server);

    service.load_from_url(&url).await.unwrap();
    service
        .load_from_url(&format!("{}?lang=nb", url))
        .await
        .unwrap();

    assert_eq!(request_count(&server).await, 2);
    assert_eq!(service.cache.len().await, 2);
}
