use url::form_urlencoded;
use url::Url;

use super::helpers::nonempty;
use crate::record::RecordId;
use crate::token::DUPLICATE_ACTION;

/// Builds admin URLs relative to the configured admin base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminUrls {
    base: Url,
}

impl AdminUrls {
    /// `base` is the admin root, e.g. `https://example.org/wp-admin/`. A
    /// missing trailing slash is added.
    pub fn new(base: &str) -> Result<Self, url::ParseError> {
        let mut base = base.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        Ok(Self {
            base: Url::parse(&base)?,
        })
    }

    #[must_use]
    pub fn base(&self) -> &str {
        self.base.as_str()
    }

    /// `admin.php?action=duplicate&post=<id>&nonce=<token>`
    #[must_use]
    pub fn duplicate_url(&self, id: RecordId, nonce: &str) -> String {
        let mut url = self.page("admin.php");
        url.query_pairs_mut()
            .append_pair("action", DUPLICATE_ACTION)
            .append_pair("post", &id.to_string())
            .append_pair("nonce", nonce);
        url.into()
    }

    /// `post.php?post=<id>&action=edit`
    #[must_use]
    pub fn edit_url(&self, id: RecordId) -> String {
        let mut url = self.page("post.php");
        url.query_pairs_mut()
            .append_pair("post", &id.to_string())
            .append_pair("action", "edit");
        url.into()
    }

    fn page(&self, name: &str) -> Url {
        self.base.join(name).unwrap_or_else(|_| self.base.clone())
    }
}

/// Parameters of an inbound duplicate request, as found in the query string.
/// Empty values are treated as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicateRequest {
    pub action: Option<String>,
    pub post: Option<String>,
    pub nonce: Option<String>,
}

impl DuplicateRequest {
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let mut request = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let slot = match &*key {
                "action" => &mut request.action,
                "post" => &mut request.post,
                "nonce" => &mut request.nonce,
                _ => continue,
            };
            *slot = nonempty(value.into_owned());
        }
        request
    }

    /// Parse the query part of a full URL.
    pub fn from_url(url: &str) -> Result<Self, url::ParseError> {
        let url = Url::parse(url)?;
        Ok(Self::from_query(url.query().unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u64) -> RecordId {
        RecordId::new(n).unwrap()
    }

    #[test]
    fn test_duplicate_url_shape() {
        let urls = AdminUrls::new("https://example.org/wp-admin").unwrap();
        assert_eq!(
            urls.duplicate_url(id(42), "abc123"),
            "https://example.org/wp-admin/admin.php?action=duplicate&post=42&nonce=abc123"
        );
    }

    #[test]
    fn test_edit_url_shape() {
        let urls = AdminUrls::new("https://example.org/wp-admin/").unwrap();
        assert_eq!(
            urls.edit_url(id(43)),
            "https://example.org/wp-admin/post.php?post=43&action=edit"
        );
    }

    #[test]
    fn test_invalid_base_is_rejected() {
        assert!(AdminUrls::new("not a url").is_err());
    }

    #[test]
    fn test_request_round_trips_through_url() {
        let urls = AdminUrls::new("http://localhost:8088/").unwrap();
        let request = DuplicateRequest::from_url(&urls.duplicate_url(id(7), "n0nce")).unwrap();
        assert_eq!(request.action.as_deref(), Some(DUPLICATE_ACTION));
        assert_eq!(request.post.as_deref(), Some("7"));
        assert_eq!(request.nonce.as_deref(), Some("n0nce"));
    }

    #[test]
    fn test_request_empty_values_are_missing() {
        let request = DuplicateRequest::from_query("action=duplicate&post=&nonce=");
        assert_eq!(request.post, None);
        assert_eq!(request.nonce, None);
    }

    #[test]
    fn test_request_ignores_unknown_keys_and_decodes() {
        let request = DuplicateRequest::from_query("foo=bar&post=42&nonce=a%20b");
        assert_eq!(request.action, None);
        assert_eq!(request.post.as_deref(), Some("42"));
        assert_eq!(request.nonce.as_deref(), Some("a b"));
    }
}
