use url::{Host, Url};

/// Which URL schemes a variant accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemePolicy {
    /// `http` and `https` only.
    WebOnly,
    /// `http`, `https` and `ftp`.
    WebAndFtp,
}

/// Syntactic validation of a candidate website address.
///
/// Accepts absolute URLs with an allowed scheme and a domain-name or IPv4
/// host. Port, path, query and fragment are all optional. Invalid input is a
/// normal `false` result, never an error; no network access is performed.
pub fn is_valid_url(candidate: &str, policy: SchemePolicy) -> bool {
    let parsed = match Url::parse(candidate) {
        Ok(parsed) => parsed,
        Err(_) => return false,
    };

    let scheme_allowed = match parsed.scheme() {
        "http" | "https" => true,
        "ftp" => policy == SchemePolicy::WebAndFtp,
        _ => false,
    };
    if !scheme_allowed {
        return false;
    }

    matches!(parsed.host(), Some(Host::Domain(_)) | Some(Host::Ipv4(_)))
}
