//! Mock SIMBAD service helpers built on wiremock
//!
//! Every helper mounts against the classic `sim-id` endpoint path and
//! matches on the decoded `Ident` query parameter, so one server can serve
//! different answers for different catalog numbers.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Serve an HTML page for one identifier.
pub async fn mount_object(server: &MockServer, ident: &str, html: String) {
    Mock::given(method("GET"))
        .and(path("/simbad/sim-id"))
        .and(query_param("Ident", ident))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(server)
        .await;
}

/// Serve an HTTP error status for one identifier.
pub async fn mount_status(server: &MockServer, ident: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path("/simbad/sim-id"))
        .and(query_param("Ident", ident))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Serve an HTTP error status exactly once, then fall through to whatever
/// was mounted after this mock. Used to script a transient outage.
pub async fn mount_status_once(server: &MockServer, ident: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path("/simbad/sim-id"))
        .and(query_param("Ident", ident))
        .respond_with(ResponseTemplate::new(status))
        .up_to_n_times(1)
        .mount(server)
        .await;
}
