//! Regex vocabulary shared by the identity builder and the section segmenter.
//!
//! Compiled once at startup into a `Patterns` value and borrowed read-only
//! for every document afterwards.

use regex::Regex;

/// Capitalized word followed by one or more space-separated alphabetic words.
const NAME: &str = r"[A-Z][A-Za-z]*(?: [A-Za-z]+)+";

/// Optional scheme, optional single subdomain label, `linkedin.com/in/<handle>`.
const LINKEDIN: &str = r"(?:https?://)?(?:\w+\.)?linkedin\.com/in/[A-Za-z0-9_-]+/?";

/// Separator-tolerant phone shape: `+CC (AAA) BBB CC CC` and friends.
const PHONE: &str =
    r"(?:\+ *\d{1,2})?[\s.-]*(?:\(* *\d{3} *\)*)[\s.-]*\d{3}[\s.-]*\d{2}[\s.-]*\d{2}[\s.-]*";

const EMAIL: &str = r"[A-Za-z0-9.*_-]+@[A-Za-z0-9.*_-]*";

/// Year-like token: four digits starting with 1 or 2, anywhere in the line.
const YEAR: &str = r"[12][0-9]{3}";

/// Decoder residue such as `\xe2\x80\x93` or `\u00a` runs.
const ENCODING_ESCAPE: &str = r"(?:\\[a-z0-9]{3})+";

#[derive(Debug, Clone)]
pub struct Patterns {
    pub name: Regex,
    pub linkedin: Regex,
    pub phone: Regex,
    pub email: Regex,
    pub year: Regex,
    pub encoding_escape: Regex,
}

impl Patterns {
    pub fn compile() -> Result<Self, regex::Error> {
        Ok(Self {
            name: Regex::new(NAME)?,
            linkedin: Regex::new(LINKEDIN)?,
            phone: Regex::new(PHONE)?,
            email: Regex::new(EMAIL)?,
            year: Regex::new(YEAR)?,
            encoding_escape: Regex::new(ENCODING_ESCAPE)?,
        })
    }
}
