//! FormattedError rendering tests
//!
//! The rendering contract is an exact literal: opening bold tag, the wrapped
//! message verbatim, closing bold tag, line-break tag, newline. No escaping.

use rstest::rstest;
use purist::{FormattedError, render_html};

#[rstest]
#[case("SMTP connect() failed")]
#[case("could not instantiate mail function")]
#[case("x")]
fn error_message_matches_exact_template(#[case] message: &str) {
    let err = FormattedError::new(message);
    assert_eq!(
        err.error_message(),
        format!("<strong>{message}</strong><br />\n")
    );
}

#[test]
fn error_message_literal_shape() {
    let rendered = FormattedError::new("boom").error_message();
    assert!(rendered.starts_with("<strong>"));
    assert!(rendered.ends_with("</strong><br />\n"));
}

#[test]
fn no_escaping_is_performed() {
    let err = FormattedError::new("<script>");
    assert_eq!(err.error_message(), "<strong><script></strong><br />\n");

    let err = FormattedError::new(r#"a & b < c "quoted""#);
    assert_eq!(
        err.error_message(),
        "<strong>a & b < c \"quoted\"</strong><br />\n"
    );
}

#[test]
fn empty_message_renders_empty_wrapper() {
    let err = FormattedError::new("");
    assert_eq!(err.error_message(), "<strong></strong><br />\n");
}

#[test]
fn rendering_does_not_change_the_wrapped_message() {
    let err = FormattedError::new("stable");

    for _ in 0..3 {
        assert_eq!(err.error_message(), "<strong>stable</strong><br />\n");
        assert_eq!(err.message(), "stable");
        assert_eq!(err.to_string(), "stable");
    }
}

#[test]
fn render_html_agrees_with_error_message() {
    let err = FormattedError::new("same template");
    assert_eq!(err.error_message(), render_html("same template"));
}

#[test]
fn cause_is_carried_not_suppressed() {
    let io = std::io::Error::other("transport down");
    let err = FormattedError::with_source("mail send failed", io);

    // Display stays the raw message; the cause stays reachable for reporting.
    assert_eq!(err.to_string(), "mail send failed");
    let source = std::error::Error::source(&err).expect("cause should be reachable");
    assert_eq!(source.to_string(), "transport down");

    // The rendering is unaffected by the presence of a cause.
    assert_eq!(
        err.error_message(),
        "<strong>mail send failed</strong><br />\n"
    );
}
