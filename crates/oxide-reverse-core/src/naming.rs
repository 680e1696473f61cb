//! Table and column name to Go identifier mapping.

/// Initialisms kept fully upper-case by [`GonicMapper`].
const COMMON_INITIALISMS: &[&str] = &[
    "ACL", "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS", "ID",
    "IP", "JSON", "LHS", "QPS", "RAM", "RHS", "RPC", "SLA", "SMTP", "SQL", "SSH", "TCP", "TLS",
    "TTL", "UDP", "UI", "UID", "UUID", "URI", "URL", "UTF8", "VM", "XML", "XMPP", "XSRF", "XSS",
];

/// Converts raw database names into identifiers for generated code.
pub trait NameMapper {
    /// Returns the identifier for a table or column name.
    fn to_identifier(&self, name: &str) -> String;
}

/// `user_id` -> `UserId`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnakeMapper;

impl NameMapper for SnakeMapper {
    fn to_identifier(&self, name: &str) -> String {
        let mut result = String::with_capacity(name.len());
        let mut capitalize_next = true;
        for ch in name.chars() {
            if ch == '_' {
                capitalize_next = true;
            } else if capitalize_next {
                result.push(ch.to_ascii_uppercase());
                capitalize_next = false;
            } else {
                result.push(ch);
            }
        }
        result
    }
}

/// Leaves names untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct SameMapper;

impl NameMapper for SameMapper {
    fn to_identifier(&self, name: &str) -> String {
        name.to_string()
    }
}

/// Like [`SnakeMapper`], but words that are common initialisms are written
/// upper-case: `user_id` -> `UserID`, `api_url` -> `APIURL`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GonicMapper;

impl NameMapper for GonicMapper {
    fn to_identifier(&self, name: &str) -> String {
        let mut result = String::with_capacity(name.len());
        for word in name.split('_').filter(|w| !w.is_empty()) {
            let upper = word.to_ascii_uppercase();
            if COMMON_INITIALISMS.contains(&upper.as_str()) {
                result.push_str(&upper);
            } else {
                let mut chars = word.chars();
                if let Some(first) = chars.next() {
                    result.push(first.to_ascii_uppercase());
                    result.extend(chars.map(|c| c.to_ascii_lowercase()));
                }
            }
        }
        result
    }
}

/// Strips a table-name prefix before delegating to another mapper.
#[derive(Debug, Clone)]
pub struct PrefixMapper<M> {
    prefix: String,
    inner: M,
}

impl<M: NameMapper> PrefixMapper<M> {
    /// Wraps `inner`, removing `prefix` from names that start with it.
    #[must_use]
    pub fn new(prefix: impl Into<String>, inner: M) -> Self {
        Self {
            prefix: prefix.into(),
            inner,
        }
    }
}

impl<M: NameMapper> NameMapper for PrefixMapper<M> {
    fn to_identifier(&self, name: &str) -> String {
        let stripped = name.strip_prefix(self.prefix.as_str()).unwrap_or(name);
        self.inner.to_identifier(stripped)
    }
}

impl<M: NameMapper + ?Sized> NameMapper for Box<M> {
    fn to_identifier(&self, name: &str) -> String {
        (**self).to_identifier(name)
    }
}

/// Lower-cases the first character: `UserId` -> `userId`.
#[must_use]
pub fn un_title(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
