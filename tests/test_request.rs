use myownwebserver::http::request::{Method, Request};

fn request(method: Method) -> Request {
    Request {
        method,
        target: "/index.html".to_string(),
        version: "HTTP/1.1".to_string(),
    }
}

#[test]
fn test_method_from_token() {
    assert_eq!(Method::from_token("GET"), Method::GET);
    assert_eq!(Method::from_token("POST"), Method::Other("POST".to_string()));
    assert_eq!(Method::from_token("Get"), Method::Other("Get".to_string()));
    assert_eq!(Method::from_token(""), Method::Other(String::new()));
}

#[test]
fn test_method_display_round_trips_token() {
    assert_eq!(Method::GET.to_string(), "GET");
    assert_eq!(Method::from_token("PATCH").to_string(), "PATCH");
}

#[test]
fn test_request_is_get() {
    assert!(request(Method::GET).is_get());
    assert!(!request(Method::Other("HEAD".to_string())).is_get());
}

#[test]
fn test_request_clone() {
    let req = request(Method::GET);
    let cloned = req.clone();

    assert_eq!(req, cloned);
    assert_eq!(cloned.target, "/index.html");
}
