use super::*;

/// Tests a token signed with the configured secret is accepted.
///
/// Expected: Ok(Claims) carrying the user's public id and member flag
#[test]
fn accepts_valid_token() -> Result<(), AppError> {
    let keys = TokenKeys::new(b"test-secret");
    let token = keys.sign(&user("USER000001"))?;
    let headers = bearer(&token);

    let claims = AuthGuard::new(&keys, &headers).require()?;

    assert_eq!(claims.user_id, "USER000001");
    assert!(claims.member);

    Ok(())
}

/// Tests a request without an Authorization header.
///
/// Expected: Err(MissingToken)
#[test]
fn rejects_missing_header() {
    let keys = TokenKeys::new(b"test-secret");
    let headers = HeaderMap::new();

    let result = AuthGuard::new(&keys, &headers).require();

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Tests an Authorization header using a scheme other than Bearer.
///
/// Expected: Err(MissingToken)
#[test]
fn rejects_non_bearer_scheme() {
    let keys = TokenKeys::new(b"test-secret");
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));

    let result = AuthGuard::new(&keys, &headers).require();

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Tests a token signed with a different secret.
///
/// Expected: Err(InvalidToken)
#[test]
fn rejects_foreign_signature() -> Result<(), AppError> {
    let token = TokenKeys::new(b"other-secret").sign(&user("USER000001"))?;
    let keys = TokenKeys::new(b"test-secret");
    let headers = bearer(&token);

    let result = AuthGuard::new(&keys, &headers).require();

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}
