//! Admin signup/signin helpers

use axum::{http::header::SET_COOKIE, Router};
use serde_json::{json, Value};

use super::http::{post_json, send};

pub const TEST_PASSWORD: &str = "Abc123!@";

/// Complete signup body for `id_number`
pub fn signup_body(id_number: &str, password: &str, confirm: &str) -> Value {
    json!({
        "firstName": "Grace",
        "middleName": "Brewster",
        "lastName": "Hopper",
        "email": format!("{}@example.com", id_number.to_lowercase()),
        "idNumber": id_number,
        "password": password,
        "confirmPassword": confirm,
    })
}

/// Sign up and sign in, returning the `Cookie` header value to send back
pub async fn signed_in_cookie(router: &Router, id_number: &str) -> String {
    let signup = post_json(
        "/adminAuth/adminSignup",
        &signup_body(id_number, TEST_PASSWORD, TEST_PASSWORD),
        None,
    );
    assert!(send(router, signup).await.status().is_success());

    let signin = post_json(
        "/adminAuth/adminSignin",
        &json!({ "idNumber": id_number, "password": TEST_PASSWORD }),
        None,
    );
    let response = send(router, signin).await;
    assert!(response.status().is_success());

    let set_cookie = response
        .headers()
        .get(SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .expect("signin must set a cookie");
    cookie_pair(set_cookie)
}

/// `name=value` part of a `Set-Cookie` header
pub fn cookie_pair(set_cookie: &str) -> String {
    set_cookie
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}
