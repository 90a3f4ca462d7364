use super::*;

#[test]
fn endpoints_are_built_from_base() {
    let api = ApiClient::new("/api");
    assert_eq!(api.token_endpoint(), "/api/token/");
    assert_eq!(api.register_endpoint(), "/api/user/register/");
    assert_eq!(api.houses_endpoint(), "/api/houses/");
    assert_eq!(api.house_endpoint(42), "/api/houses/42/");
}

#[test]
fn trailing_slash_on_base_is_ignored() {
    let api = ApiClient::new("https://houses.example.com/api/");
    assert_eq!(api.houses_endpoint(), "https://houses.example.com/api/houses/");
}

#[test]
fn bearer_formats_authorization_header() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[test]
fn check_status_classifies_responses() {
    assert_eq!(check_status(200), Ok(()));
    assert_eq!(check_status(201), Ok(()));
    assert_eq!(check_status(204), Ok(()));
    assert_eq!(check_status(401), Err(ApiError::Unauthorized));
    assert_eq!(check_status(400), Err(ApiError::Status(400)));
    assert_eq!(check_status(500), Err(ApiError::Status(500)));
}

#[test]
fn api_error_messages() {
    assert_eq!(ApiError::Status(404).to_string(), "request failed: 404");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}

#[test]
fn base_is_stored_without_trailing_slash() {
    assert_eq!(ApiClient::new("/api/").base(), "/api");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_the_browser() {
    let api = ApiClient::new("/api");
    let creds = Credentials { username: "alice".to_owned(), password: "pw".to_owned() };
    let result = futures::executor::block_on(api.obtain_token(&creds));
    assert_eq!(result, Err(ApiError::Unavailable));
}
