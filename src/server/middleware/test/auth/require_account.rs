use super::*;

/// Tests the token owner acting on their own account.
///
/// Expected: Ok(Claims)
#[test]
fn allows_own_account() -> Result<(), AppError> {
    let keys = TokenKeys::new(b"test-secret");
    let headers = bearer(&keys.sign(&user("USER000001"))?);

    let claims = AuthGuard::new(&keys, &headers).require_account("USER000001")?;

    assert_eq!(claims.user_id, "USER000001");

    Ok(())
}

/// Tests a valid token used against another user's account.
///
/// Expected: Err(AccessDenied) naming both accounts
#[test]
fn denies_other_account() -> Result<(), AppError> {
    let keys = TokenKeys::new(b"test-secret");
    let headers = bearer(&keys.sign(&user("USER000001"))?);

    let result = AuthGuard::new(&keys, &headers).require_account("USER000002");

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied {
            token_user,
            target_user,
        })) => {
            assert_eq!(token_user, "USER000001");
            assert_eq!(target_user, "USER000002");
        }
        other => panic!("expected AccessDenied, got {:?}", other.map(|c| c.user_id)),
    }

    Ok(())
}
