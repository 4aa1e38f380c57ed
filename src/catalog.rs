//! Static reference data - pattern library, cheat sheet, and challenges
//!
//! The data consumers show alongside the tracer: a library of commonly used
//! patterns, a token cheat sheet, and a set of practice challenges with
//! match/reject example lists. All of it is plain serializable data; the only
//! logic here is [`Challenge::check`], which evaluates a candidate pattern
//! against a challenge's examples using the host engine.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// A named, categorized pattern from the library
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryPattern {
    pub name: &'static str,
    pub pattern: &'static str,
    pub category: &'static str,
}

/// One token entry in the cheat sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheatSheetEntry {
    pub token: &'static str,
    pub description: &'static str,
    pub example: &'static str,
}

/// A titled group of cheat sheet entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheatSheetGroup {
    pub title: &'static str,
    pub entries: Vec<CheatSheetEntry>,
}

/// A practice challenge: a description plus strings the pattern must match
/// and strings it must reject
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Challenge {
    pub name: &'static str,
    pub description: &'static str,
    pub should_match: Vec<&'static str>,
    pub should_reject: Vec<&'static str>,
}

/// The outcome of checking one example string against a candidate pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseResult {
    pub input: String,
    /// Whether the case behaved as the challenge requires
    pub passed: bool,
}

/// The full evaluation of a candidate pattern against a challenge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChallengeReport {
    pub matched: Vec<CaseResult>,
    pub rejected: Vec<CaseResult>,
}

impl ChallengeReport {
    /// Whether every match and reject case passed
    pub fn solved(&self) -> bool {
        self.matched.iter().chain(&self.rejected).all(|c| c.passed)
    }
}

impl Challenge {
    /// Evaluate a candidate pattern against this challenge's examples
    ///
    /// Uses the host engine; an uncompilable pattern is the caller's error and
    /// propagates.
    pub fn check(&self, pattern: &str) -> Result<ChallengeReport, regex::Error> {
        let re = Regex::new(pattern)?;
        let matched = self
            .should_match
            .iter()
            .map(|input| CaseResult {
                input: input.to_string(),
                passed: re.is_match(input),
            })
            .collect();
        let rejected = self
            .should_reject
            .iter()
            .map(|input| CaseResult {
                input: input.to_string(),
                passed: !re.is_match(input),
            })
            .collect();
        Ok(ChallengeReport { matched, rejected })
    }
}

static PATTERN_LIBRARY: Lazy<Vec<LibraryPattern>> = Lazy::new(|| {
    vec![
        LibraryPattern {
            name: "Email",
            pattern: r"^[\w.-]+@([\w-]+\.)+[\w-]{2,4}$",
            category: "Web",
        },
        LibraryPattern {
            name: "IPv4 Address",
            pattern: r"^(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$",
            category: "Network",
        },
        LibraryPattern {
            name: "Username",
            pattern: r"^[a-zA-Z0-9_-]{3,16}$",
            category: "User Data",
        },
        LibraryPattern {
            name: "URL (HTTP/S)",
            pattern: r"https?://(www\.)?[-a-zA-Z0-9@:%._\+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_\+.~#?&//=]*)",
            category: "Web",
        },
        LibraryPattern {
            name: "Slug (URL-friendly)",
            pattern: r"^[a-z0-9]+(?:-[a-z0-9]+)*$",
            category: "Web",
        },
        LibraryPattern {
            name: "Date (YYYY-MM-DD)",
            pattern: r"^\d{4}-(0[1-9]|1[0-2])-(0[1-9]|[12]\d|3[01])$",
            category: "Data",
        },
        LibraryPattern {
            name: "Hex Color Code",
            pattern: r"^#?([a-fA-F0-9]{6}|[a-fA-F0-9]{3})$",
            category: "Graphics",
        },
        LibraryPattern {
            name: "US Phone Number",
            pattern: r"^(?:\(\d{3}\)|\d{3})[-.\s]?\d{3}[-.\s]?\d{4}$",
            category: "User Data",
        },
        LibraryPattern {
            name: "JSON Web Token (JWT)",
            pattern: r"^[A-Za-z0-9-_=]+\.[A-Za-z0-9-_=]+\.?[A-Za-z0-9-_.+/=]*$",
            category: "Security",
        },
        LibraryPattern {
            name: "Credit Card (Visa, MC, Amex)",
            pattern: r"^(?:4[0-9]{12}(?:[0-9]{3})?|5[1-5][0-9]{14}|3[47][0-9]{13})$",
            category: "Security",
        },
        LibraryPattern {
            name: "UUID",
            pattern: r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$",
            category: "Data",
        },
    ]
});

static CHEAT_SHEET: Lazy<Vec<CheatSheetGroup>> = Lazy::new(|| {
    vec![
        CheatSheetGroup {
            title: "Characters",
            entries: vec![
                CheatSheetEntry {
                    token: r"\d",
                    description: "Any digit",
                    example: "d1g1t",
                },
                CheatSheetEntry {
                    token: r"\w",
                    description: "Any word character",
                    example: "a_b-c",
                },
                CheatSheetEntry {
                    token: r"\s",
                    description: "Any whitespace",
                    example: "a b",
                },
                CheatSheetEntry {
                    token: ".",
                    description: "Any character",
                    example: "a.c",
                },
            ],
        },
        CheatSheetGroup {
            title: "Quantifiers",
            entries: vec![
                CheatSheetEntry {
                    token: "*",
                    description: "0 or more",
                    example: "a*",
                },
                CheatSheetEntry {
                    token: "+",
                    description: "1 or more",
                    example: "a+",
                },
                CheatSheetEntry {
                    token: "?",
                    description: "0 or 1",
                    example: "a?",
                },
                CheatSheetEntry {
                    token: "{n,m}",
                    description: "Range",
                    example: "a{1,2}",
                },
            ],
        },
        CheatSheetGroup {
            title: "Anchors & Boundaries",
            entries: vec![
                CheatSheetEntry {
                    token: "^",
                    description: "Start of string",
                    example: "^a",
                },
                CheatSheetEntry {
                    token: "$",
                    description: "End of string",
                    example: "a$",
                },
                CheatSheetEntry {
                    token: r"\b",
                    description: "Word boundary",
                    example: r"\bword\b",
                },
            ],
        },
        CheatSheetGroup {
            title: "Groups & Lookarounds",
            entries: vec![
                CheatSheetEntry {
                    token: "(...)",
                    description: "Capturing group",
                    example: "(ab)c",
                },
                CheatSheetEntry {
                    token: "(?:...)",
                    description: "Non-capturing group",
                    example: "(?:ab)c",
                },
            ],
        },
    ]
});

static CHALLENGES: Lazy<Vec<Challenge>> = Lazy::new(|| {
    vec![
        Challenge {
            name: "Simple Start",
            description: "Match strings that contain \"abc\".",
            should_match: vec!["abc", "zzabcde", "xyzabc"],
            should_reject: vec!["acb", "xyz", "ab c"],
        },
        Challenge {
            name: "Three Numbers",
            description: "Match exactly three consecutive digits.",
            should_match: vec!["123", "a456b", "987"],
            should_reject: vec!["12", "1a2"],
        },
        Challenge {
            name: "Hex Colors",
            description: "Match 3 or 6-digit hex color codes.",
            should_match: vec!["#FFF", "#ff0000", "#AABBCC"],
            should_reject: vec!["#12345", "FFF", "AABBGG"],
        },
        Challenge {
            name: "HTML Tags",
            description: "Match simple opening and closing HTML tags.",
            should_match: vec!["<p>", "</div>", "<span>"],
            should_reject: vec!["<p", "div>", "<span/>"],
        },
        Challenge {
            name: "File Names",
            description: "Match valid file names (alphanumeric, dots, underscores).",
            should_match: vec!["image.jpg", "doc_1.pdf", "archive.zip"],
            should_reject: vec!["file name.txt", "image/jpg", "doc|1.pdf"],
        },
    ]
});

/// The library of commonly used patterns
pub fn pattern_library() -> &'static [LibraryPattern] {
    &PATTERN_LIBRARY
}

/// The token cheat sheet
pub fn cheat_sheet() -> &'static [CheatSheetGroup] {
    &CHEAT_SHEET
}

/// The practice challenges
pub fn challenges() -> &'static [Challenge] {
    &CHALLENGES
}
