use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;

use crate::PastebinError;
use crate::formats::format_for_extension;

/// Developer API key identifying the calling application.
///
/// Required on every API call. The library never reads the process environment itself;
/// resolve the key once at the entry point via [`DevKey::resolve`] and pass it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevKey {
    key: String,
}

impl DevKey {
    /// Construct a key wrapper from an already-validated value.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Resolve a developer key from an explicit value with an environment-sourced fallback.
    ///
    /// An explicit non-empty value wins; otherwise the fallback is used. Empty strings count
    /// as absent in both positions. Fails with [`PastebinError::MissingDevKey`] before any
    /// network activity when neither is available.
    pub fn resolve(
        explicit: Option<String>,
        fallback: Option<String>,
    ) -> Result<Self, PastebinError> {
        explicit
            .filter(|key| !key.is_empty())
            .or_else(|| fallback.filter(|key| !key.is_empty()))
            .map(Self::new)
            .ok_or(PastebinError::MissingDevKey)
    }

    /// Borrow the underlying key string.
    pub fn as_str(&self) -> &str {
        &self.key
    }
}

/// Paste access-control level.
///
/// Sent to the service as its ordinal value in the `api_paste_private` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Listed publicly.
    Public,
    /// Reachable by link only.
    Unlisted,
    /// Visible to the owning account only.
    #[default]
    Private,
}

impl Visibility {
    /// The service's numeric encoding for this level.
    pub fn ordinal(self) -> u8 {
        match self {
            Visibility::Public => 0,
            Visibility::Unlisted => 1,
            Visibility::Private => 2,
        }
    }
}

impl FromStr for Visibility {
    type Err = PastebinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "public" => Ok(Visibility::Public),
            "unlisted" => Ok(Visibility::Unlisted),
            "private" => Ok(Visibility::Private),
            other => Err(PastebinError::InvalidChoice(format!(
                "unknown visibility '{other}', expected public, unlisted or private"
            ))),
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Visibility::Public => "public",
            Visibility::Unlisted => "unlisted",
            Visibility::Private => "private",
        };
        f.write_str(name)
    }
}

/// Paste lifetime, from the service's fixed vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpireDate {
    Never,
    TenMinutes,
    OneHour,
    OneDay,
    OneWeek,
    TwoWeeks,
    OneMonth,
    SixMonths,
    OneYear,
}

impl ExpireDate {
    /// The service's token for this lifetime.
    pub fn as_str(self) -> &'static str {
        match self {
            ExpireDate::Never => "N",
            ExpireDate::TenMinutes => "10M",
            ExpireDate::OneHour => "1H",
            ExpireDate::OneDay => "1D",
            ExpireDate::OneWeek => "1W",
            ExpireDate::TwoWeeks => "2W",
            ExpireDate::OneMonth => "1M",
            ExpireDate::SixMonths => "6M",
            ExpireDate::OneYear => "1Y",
        }
    }
}

impl FromStr for ExpireDate {
    type Err = PastebinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "N" => Ok(ExpireDate::Never),
            "10M" => Ok(ExpireDate::TenMinutes),
            "1H" => Ok(ExpireDate::OneHour),
            "1D" => Ok(ExpireDate::OneDay),
            "1W" => Ok(ExpireDate::OneWeek),
            "2W" => Ok(ExpireDate::TwoWeeks),
            "1M" => Ok(ExpireDate::OneMonth),
            "6M" => Ok(ExpireDate::SixMonths),
            "1Y" => Ok(ExpireDate::OneYear),
            other => Err(PastebinError::InvalidChoice(format!(
                "unknown expire date '{other}', expected one of N, 10M, 1H, 1D, 1W, 2W, 1M, 6M, 1Y"
            ))),
        }
    }
}

impl fmt::Display for ExpireDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A paste to be created.
///
/// Optional fields left unset are omitted from the outgoing form entirely; the service
/// distinguishes an absent field from an empty one.
#[derive(Debug, Clone)]
pub struct PasteRequest {
    dev_key: DevKey,
    content: String,
    name: Option<String>,
    description: Option<String>,
    format: Option<String>,
    user_key: Option<String>,
    visibility: Visibility,
    expire_date: Option<ExpireDate>,
}

impl PasteRequest {
    /// A paste from inline content, with no name, description or format.
    pub fn new(dev_key: DevKey, content: impl Into<String>) -> Self {
        Self {
            dev_key,
            content: content.into(),
            name: None,
            description: None,
            format: None,
            user_key: None,
            visibility: Visibility::default(),
            expire_date: None,
        }
    }

    /// A paste from a file on disk.
    ///
    /// The paste name defaults to the path's file name (extension retained) and the format
    /// is inferred from the lowercased extension where the service has a matching syntax
    /// tag. Both can be overridden afterwards with [`with_name`](Self::with_name) and
    /// [`with_format`](Self::with_format).
    pub fn from_file(dev_key: DevKey, path: impl AsRef<Path>) -> Result<Self, PastebinError> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or(PastebinError::InvalidFileName)?
            .to_string();
        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| format_for_extension(&ext.to_ascii_lowercase()))
            .map(str::to_string);
        let content = fs::read_to_string(path)?;

        Ok(Self {
            name: Some(name),
            format,
            ..Self::new(dev_key, content)
        })
    }

    /// Set the paste name shown by the service.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the paste description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the syntax format tag, replacing any inferred value.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Attach a user session key so the paste belongs to that account.
    pub fn with_user_key(mut self, user_key: impl Into<String>) -> Self {
        self.user_key = Some(user_key.into());
        self
    }

    /// Set the access-control level.
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Set the paste lifetime.
    pub fn with_expire_date(mut self, expire_date: ExpireDate) -> Self {
        self.expire_date = Some(expire_date);
        self
    }

    pub(crate) fn form(&self) -> PasteForm<'_> {
        PasteForm {
            api_dev_key: self.dev_key.as_str(),
            api_user_key: self.user_key.as_deref(),
            api_paste_code: &self.content,
            api_option: "paste",
            api_paste_name: self.name.as_deref(),
            api_paste_description: self.description.as_deref(),
            api_paste_format: self.format.as_deref(),
            api_paste_private: self.visibility.ordinal(),
            api_paste_expire_date: self.expire_date.map(ExpireDate::as_str),
        }
    }
}

/// A login attempt. All three fields are required by the service.
#[derive(Clone)]
pub struct LoginRequest {
    dev_key: DevKey,
    username: String,
    password: String,
}

impl LoginRequest {
    pub fn new(
        dev_key: DevKey,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            dev_key,
            username: username.into(),
            password: password.into(),
        }
    }

    pub(crate) fn form(&self) -> LoginForm<'_> {
        LoginForm {
            api_dev_key: self.dev_key.as_str(),
            api_user_name: &self.username,
            api_user_password: &self.password,
        }
    }
}

// The password stays out of diagnostic output.
impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("dev_key", &self.dev_key)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Wire form for paste creation. Absent optional fields are left out of the body.
#[derive(Debug, Serialize)]
pub(crate) struct PasteForm<'a> {
    pub(crate) api_dev_key: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) api_user_key: Option<&'a str>,
    pub(crate) api_paste_code: &'a str,
    pub(crate) api_option: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) api_paste_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) api_paste_description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) api_paste_format: Option<&'a str>,
    pub(crate) api_paste_private: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) api_paste_expire_date: Option<&'a str>,
}

/// Wire form for the login endpoint. Exactly three fields, none optional.
#[derive(Debug, Serialize)]
pub(crate) struct LoginForm<'a> {
    pub(crate) api_dev_key: &'a str,
    pub(crate) api_user_name: &'a str,
    pub(crate) api_user_password: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dev_key() -> DevKey {
        DevKey::new("K")
    }

    #[test]
    fn explicit_key_overrides_fallback() {
        let key = DevKey::resolve(Some("explicit".into()), Some("abc123".into())).unwrap();
        assert_eq!(key.as_str(), "explicit");
    }

    #[test]
    fn fallback_key_used_when_explicit_absent() {
        let key = DevKey::resolve(None, Some("abc123".into())).unwrap();
        assert_eq!(key.as_str(), "abc123");
    }

    #[test]
    fn empty_explicit_key_falls_through() {
        let key = DevKey::resolve(Some(String::new()), Some("abc123".into())).unwrap();
        assert_eq!(key.as_str(), "abc123");
    }

    #[test]
    fn missing_key_is_detected() {
        let err = DevKey::resolve(None, None).unwrap_err();
        assert!(matches!(err, PastebinError::MissingDevKey));
    }

    #[test]
    fn visibility_ordinals_match_service_encoding() {
        assert_eq!(Visibility::Public.ordinal(), 0);
        assert_eq!(Visibility::Unlisted.ordinal(), 1);
        assert_eq!(Visibility::Private.ordinal(), 2);
    }

    #[test]
    fn visibility_parses_choice_names() {
        assert_eq!("public".parse::<Visibility>().unwrap(), Visibility::Public);
        assert_eq!("UNLISTED".parse::<Visibility>().unwrap(), Visibility::Unlisted);
        assert!("secret".parse::<Visibility>().is_err());
    }

    #[test]
    fn default_visibility_is_private() {
        assert_eq!(Visibility::default(), Visibility::Private);
    }

    #[test]
    fn expire_date_tokens_round_trip() {
        let tokens = ["N", "10M", "1H", "1D", "1W", "2W", "1M", "6M", "1Y"];
        for token in tokens {
            let parsed = token.parse::<ExpireDate>().unwrap();
            assert_eq!(parsed.as_str(), token);
        }
    }

    #[test]
    fn expire_date_rejects_unknown_tokens() {
        assert!("2Y".parse::<ExpireDate>().is_err());
        assert!("".parse::<ExpireDate>().is_err());
    }

    #[test]
    fn unset_optionals_are_left_out_of_the_form() {
        let request = PasteRequest::new(dev_key(), "hello");
        let form = request.form();
        assert!(form.api_paste_name.is_none());
        assert!(form.api_paste_description.is_none());
        assert!(form.api_paste_format.is_none());
        assert!(form.api_user_key.is_none());
        assert!(form.api_paste_expire_date.is_none());
        assert_eq!(form.api_option, "paste");
        assert_eq!(form.api_paste_private, 2);
    }

    #[test]
    fn setters_populate_the_form() {
        let request = PasteRequest::new(dev_key(), "hello")
            .with_name("x.py")
            .with_description("a script")
            .with_format("python")
            .with_user_key("session")
            .with_visibility(Visibility::Unlisted)
            .with_expire_date(ExpireDate::OneWeek);
        let form = request.form();
        assert_eq!(form.api_dev_key, "K");
        assert_eq!(form.api_paste_code, "hello");
        assert_eq!(form.api_paste_name, Some("x.py"));
        assert_eq!(form.api_paste_description, Some("a script"));
        assert_eq!(form.api_paste_format, Some("python"));
        assert_eq!(form.api_user_key, Some("session"));
        assert_eq!(form.api_paste_private, 1);
        assert_eq!(form.api_paste_expire_date, Some("1W"));
    }

    #[test]
    fn from_file_derives_name_and_format() {
        let path = std::env::temp_dir().join("report.md");
        fs::write(&path, "# title").unwrap();

        let request = PasteRequest::from_file(dev_key(), &path).unwrap();
        let form = request.form();
        assert_eq!(form.api_paste_name, Some("report.md"));
        assert_eq!(form.api_paste_format, Some("markdown"));
        assert_eq!(form.api_paste_code, "# title");

        fs::remove_file(&path).ok();
    }

    #[test]
    fn from_file_leaves_format_unset_for_unknown_extension() {
        let path = std::env::temp_dir().join("notes.xyz");
        fs::write(&path, "plain").unwrap();

        let request = PasteRequest::from_file(dev_key(), &path).unwrap();
        let form = request.form();
        assert_eq!(form.api_paste_name, Some("notes.xyz"));
        assert!(form.api_paste_format.is_none());

        fs::remove_file(&path).ok();
    }

    #[test]
    fn explicit_format_overrides_inferred() {
        let path = std::env::temp_dir().join("script.py");
        fs::write(&path, "print()").unwrap();

        let request = PasteRequest::from_file(dev_key(), &path)
            .unwrap()
            .with_format("text");
        assert_eq!(request.form().api_paste_format, Some("text"));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn login_form_has_exactly_the_three_fields() {
        let request = LoginRequest::new(dev_key(), "alice", "secret");
        let form = request.form();
        assert_eq!(form.api_dev_key, "K");
        assert_eq!(form.api_user_name, "alice");
        assert_eq!(form.api_user_password, "secret");
    }

    #[test]
    fn login_debug_redacts_password() {
        let request = LoginRequest::new(dev_key(), "alice", "secret");
        let debug = format!("{request:?}");
        assert!(!debug.contains("secret"));
        assert!(debug.contains("alice"));
    }
}
