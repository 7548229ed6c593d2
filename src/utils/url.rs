// src/utils/url.rs

//! Candidate URL rendering and redirect inspection.

use url::form_urlencoded;

/// Expand `{id}`, `{gid}` and `{sheet}` placeholders in a candidate template.
///
/// The sheet name lands in a query string, so it is form-encoded.
///
/// # Examples
/// ```
/// use sheetpost::utils::url::render_template;
///
/// assert_eq!(
///     render_template("https://host/d/{id}/tq?sheet={sheet}", "abc", "0", "My Posts"),
///     "https://host/d/abc/tq?sheet=My+Posts"
/// );
/// ```
pub fn render_template(template: &str, id: &str, gid: &str, sheet: &str) -> String {
    let sheet: String = form_urlencoded::byte_serialize(sheet.as_bytes()).collect();
    template
        .replace("{id}", id)
        .replace("{gid}", gid)
        .replace("{sheet}", &sheet)
}

/// Whether the effective response URL points at one of the sign-in hosts.
pub fn is_login_redirect(final_url: &str, login_hosts: &[String]) -> bool {
    match url::Url::parse(final_url) {
        Ok(parsed) => parsed.host_str().is_some_and(|host| {
            login_hosts
                .iter()
                .any(|login| host.eq_ignore_ascii_case(login))
        }),
        Err(_) => login_hosts
            .iter()
            .any(|login| final_url.contains(login.as_str())),
    }
}
