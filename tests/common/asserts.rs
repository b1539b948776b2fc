use csrf_guard_rs::{CsrfError, Verdict};

pub fn assert_allowed(verdict: Verdict) {
    assert_eq!(verdict, Verdict::Allow, "expected request to be allowed");
}

pub fn assert_denied(verdict: Verdict) {
    assert_eq!(verdict, Verdict::Deny, "expected request to be denied");
}

pub fn assert_forbidden(result: Result<(), CsrfError>) {
    match result {
        Err(error) => assert_eq!(error.status_code(), 403),
        Ok(()) => panic!("expected CSRF rejection, got success"),
    }
}
