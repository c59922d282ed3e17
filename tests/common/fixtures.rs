//! Canned SIMBAD HTML pages for mock-server tests
//!
//! The builders mirror the markup shape of the classic `sim-id` endpoint
//! closely enough for the extraction patterns: the NAME anchor row, the
//! spectral-type table cell, and the V row of the flux table.

/// A page describing one object, with all three extractable fields.
pub fn object_page(name: &str, spectral: &str, vmag: &str) -> String {
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

/// An object page whose flux table has no V row.
pub fn magnitudeless_page(name: &str, spectral: &str) -> String {
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
         </HTML>\n"
    )
}

/// The page the service renders for an identifier it does not know.
pub fn not_found_page(ident: &str) -> String {
    format!("<HTML><BODY>Identifier not found in the database : {ident}</BODY></HTML>\n")
}
