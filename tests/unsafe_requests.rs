mod common;

use csrf_guard_rs::constants::method;
use common::asserts::{assert_allowed, assert_denied, assert_forbidden};
use common::builders::{REQUEST_ORIGIN, guard, post, request};

mod evaluate {
    use super::*;

    #[test]
    fn should_allow_json_post_when_origin_matches_request_origin_then_pass() {
        let guard = guard().build();

        let verdict = post()
            .content_type("application/json")
            .origin(REQUEST_ORIGIN)
            .evaluate(&guard);

        assert_allowed(verdict);
    }

    #[test]
    fn should_deny_when_cross_site_without_origin_or_referer_then_reject_with_403() {
        let guard = guard().build();
        let request = post().sec_fetch_site("cross-site");

        assert_denied(request.evaluate(&guard));
        assert_forbidden(request.check(&guard));
    }

    #[test]
    fn should_deny_when_no_trust_headers_present_then_reject() {
        let guard = guard().build();

        assert_denied(post().evaluate(&guard));
    }

    #[test]
    fn should_deny_when_origin_differs_and_nothing_else_passes_then_reject() {
        let guard = guard().build();

        let verdict = post()
            .content_type("text/plain")
            .origin("http://evil.example")
            .evaluate(&guard);

        assert_denied(verdict);
    }

    #[test]
    fn should_allow_when_only_same_origin_sec_fetch_site_passes_then_pass() {
        let guard = guard().build();

        let verdict = post()
            .origin("http://evil.example")
            .sec_fetch_site("same-origin")
            .evaluate(&guard);

        assert_allowed(verdict);
    }

    #[test]
    fn should_allow_when_only_referer_passes_then_pass() {
        let guard = guard().build();

        let verdict = post()
            .content_type("multipart/form-data; boundary=----x")
            .referer("http://localhost/account/settings")
            .sec_fetch_site("cross-site")
            .evaluate(&guard);

        assert_allowed(verdict);
    }

    #[test]
    fn should_deny_when_referer_on_other_port_then_reject() {
        let guard = guard().build();

        let verdict = post().referer("http://localhost:3000/form").evaluate(&guard);

        assert_denied(verdict);
    }

    #[test]
    fn should_deny_when_referer_is_not_a_url_then_reject() {
        let guard = guard().build();

        let verdict = post().referer("::garbage::").evaluate(&guard);

        assert_denied(verdict);
    }

    #[test]
    fn should_deny_when_sec_fetch_site_token_is_invalid_then_reject() {
        let guard = guard().build();

        let verdict = post().sec_fetch_site("same-origin-ish").evaluate(&guard);

        assert_denied(verdict);
    }

    #[test]
    fn should_deny_when_headers_padded_with_whitespace_then_compare_as_given() {
        let guard = guard().build();

        assert_denied(post().origin(" http://localhost").evaluate(&guard));
        assert_denied(post().sec_fetch_site(" same-origin ").evaluate(&guard));
    }

    #[test]
    fn should_protect_every_unsafe_method_when_no_signal_passes_then_reject() {
        let guard = guard().build();

        for verb in [method::POST, method::PUT, method::PATCH, method::DELETE, "post"] {
            assert_denied(request(verb).evaluate(&guard));
        }
    }
}

mod check_referer {
    use super::*;

    #[test]
    fn should_deny_when_referer_disabled_and_cross_site_without_origin_then_reject() {
        let guard = guard().check_referer(false).build();

        let verdict = post()
            .sec_fetch_site("cross-site")
            .referer("http://localhost/form")
            .evaluate(&guard);

        assert_denied(verdict);
    }

    #[test]
    fn should_keep_allowing_when_referer_disabled_and_origin_passes_then_pass() {
        let guard = guard().check_referer(false).build();

        let verdict = post()
            .origin(REQUEST_ORIGIN)
            .referer("http://evil.example/")
            .evaluate(&guard);

        assert_allowed(verdict);
    }

    #[test]
    fn should_not_relax_validation_when_referer_disabled_then_keep_denying() {
        let enabled = guard().build();
        let disabled = guard().check_referer(false).build();
        let request = post()
            .origin("http://evil.example")
            .referer("http://evil.example/")
            .sec_fetch_site("cross-site");

        assert_denied(request.evaluate(&enabled));
        assert_denied(request.evaluate(&disabled));
    }
}
