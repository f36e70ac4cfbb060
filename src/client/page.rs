//! Classification of ABN Lookup result pages.
//!
//! The registry answers every query with an HTML page. Which page it is gets
//! decided from three places: the `div.process-message` banner, the `<title>`,
//! and the `span[itemprop=legalName]` element of the details table.

use crate::error::{AbnLookupError, AbnResult};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static PROCESS_MESSAGE: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("div.process-message").expect("Failed to parse process message selector")
});

static TITLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("title").expect("Failed to parse title selector"));

static LEGAL_NAME: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("span[itemprop=legalName]").expect("Failed to parse legal name selector")
});

const NO_RECORD_MESSAGE: &str = "No record found matching ABN";
const INVALID_ABN_MESSAGE: &str = "The number entered is not a valid ABN";
const CURRENT_DETAILS_TITLE: &str = "Current details for ABN";

/// What a registry page says about the ABN that was queried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryPage {
    /// Current details page; carries the legal name (possibly empty)
    Found { legal_name: String },
    /// "No record found matching ABN"
    NotFound,
    /// "The number entered is not a valid ABN"
    InvalidAbn,
    /// Anything else
    Unknown,
}

impl RegistryPage {
    /// Parse and classify a response body.
    pub fn from_body(body: &str) -> AbnResult<Self> {
        let document = parse_document(body)?;
        Ok(Self::classify(&document))
    }

    /// Classify an already parsed document.
    ///
    /// The banner is consulted first: a not-found or invalid banner wins even if the
    /// page title looks like a details page.
    pub fn classify(document: &Html) -> Self {
        let message = select_text(document, &PROCESS_MESSAGE);

        if message.contains(NO_RECORD_MESSAGE) {
            return Self::NotFound;
        }

        if message.contains(INVALID_ABN_MESSAGE) {
            return Self::InvalidAbn;
        }

        let title = select_text(document, &TITLE);
        if !title.trim_start().starts_with(CURRENT_DETAILS_TITLE) {
            return Self::Unknown;
        }

        Self::Found {
            legal_name: select_text(document, &LEGAL_NAME).trim().to_string(),
        }
    }

    /// Turn the page into the legal name, or the error the page stands for.
    pub fn into_legal_name(self) -> AbnResult<String> {
        match self {
            Self::Found { legal_name } => Ok(legal_name),
            Self::NotFound => Err(AbnLookupError::RecordNotFound),
            Self::InvalidAbn => Err(AbnLookupError::InvalidAbn),
            Self::Unknown => Err(AbnLookupError::UnknownResponse),
        }
    }
}

/// Parse a response body as an HTML document.
///
/// html5ever recovers from any malformed markup, so the only body we refuse is
/// one with nothing in it.
fn parse_document(body: &str) -> AbnResult<Html> {
    if body.trim().is_empty() {
        return Err(AbnLookupError::Parse("empty response body".to_string()));
    }

    Ok(Html::parse_document(body))
}

/// Concatenated text of every element matching `selector`.
fn select_text(document: &Html, selector: &Selector) -> String {
    document
        .select(selector)
        .flat_map(|element| element.text())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details_page(name: &str) -> String {
        format!(
            r#"<html><head><title>Current details for ABN 87 007 382 032 | ABN Lookup</title></head>
            <body><table><tr><th>Entity name:</th>
            <td itemprop="legalEntity"><span itemprop="legalName">{}</span></td></tr></table></body></html>"#,
            name
        )
    }

    #[test]
    fn test_classify_found() {
        let page = RegistryPage::from_body(&details_page("MOVING DATA PTY LTD")).unwrap();
        assert_eq!(
            page,
            RegistryPage::Found {
                legal_name: "MOVING DATA PTY LTD".to_string()
            }
        );
    }

    #[test]
    fn test_legal_name_is_trimmed() {
        let page = RegistryPage::from_body(&details_page("\n   MOVING DATA PTY LTD  \n")).unwrap();
        assert_eq!(page.into_legal_name().unwrap(), "MOVING DATA PTY LTD");
    }

    #[test]
    fn test_found_without_legal_name_is_empty() {
        let body = "<html><head><title>Current details for ABN 51 824 753 556</title></head><body></body></html>";
        let page = RegistryPage::from_body(body).unwrap();
        assert_eq!(page.into_legal_name().unwrap(), "");
    }

    #[test]
    fn test_classify_not_found() {
        let body = r#"<html><head><title>ABN Lookup</title></head><body>
            <div class="process-message"><p>No record found matching ABN 51 824 999 396.</p></div>
            </body></html>"#;
        let page = RegistryPage::from_body(body).unwrap();
        assert_eq!(page, RegistryPage::NotFound);
        assert!(matches!(
            page.into_legal_name(),
            Err(AbnLookupError::RecordNotFound)
        ));
    }

    #[test]
    fn test_classify_invalid_abn() {
        let body = r#"<html><head><title>ABN Lookup</title></head><body>
            <div class="process-message">The number entered is not a valid ABN.</div>
            </body></html>"#;
        let page = RegistryPage::from_body(body).unwrap();
        assert_eq!(page, RegistryPage::InvalidAbn);
    }

    #[test]
    fn test_banner_takes_precedence_over_title() {
        let body = r#"<html><head><title>Current details for ABN 51 824 999 396</title></head><body>
            <div class="process-message">No record found matching ABN 51 824 999 396</div>
            <span itemprop="legalName">SHOULD NOT BE USED</span>
            </body></html>"#;
        assert_eq!(RegistryPage::from_body(body).unwrap(), RegistryPage::NotFound);
    }

    #[test]
    fn test_message_outside_banner_is_ignored() {
        let body = r#"<html><head><title>Search | ABN Lookup</title></head><body>
            <p>No record found matching ABN</p>
            </body></html>"#;
        assert_eq!(RegistryPage::from_body(body).unwrap(), RegistryPage::Unknown);
    }

    #[test]
    fn test_classify_unknown() {
        let body = "<html><head><title>Site maintenance</title></head><body>Back soon</body></html>";
        let page = RegistryPage::from_body(body).unwrap();
        assert_eq!(page, RegistryPage::Unknown);
        assert!(matches!(
            page.into_legal_name(),
            Err(AbnLookupError::UnknownResponse)
        ));
    }

    #[test]
    fn test_title_with_leading_whitespace() {
        let body = "<html><head><title>\n  Current details for ABN 51 824 753 556</title></head>\
            <body><span itemprop=\"legalName\">AUSTRALIAN TAXATION OFFICE</span></body></html>";
        let page = RegistryPage::from_body(body).unwrap();
        assert_eq!(page.into_legal_name().unwrap(), "AUSTRALIAN TAXATION OFFICE");
    }

    #[test]
    fn test_empty_body_is_parse_error() {
        assert!(matches!(
            RegistryPage::from_body(""),
            Err(AbnLookupError::Parse(_))
        ));
        assert!(matches!(
            RegistryPage::from_body("  \r\n "),
            Err(AbnLookupError::Parse(_))
        ));
    }
}
