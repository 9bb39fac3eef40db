//! Attribute type substitution
//!
//! Diagrams show language-neutral spellings for a fixed set of built-in
//! types. Anything not in the table is shown as written.

/// Fixed substitution table
const SUBSTITUTIONS: &[(&str, &str)] = &[
    ("int", "number"),
    ("short", "number"),
    ("long", "number"),
    ("long long", "number"),
    ("unsigned", "number"),
    ("unsigned int", "number"),
    ("unsigned short", "number"),
    ("unsigned long", "number"),
    ("signed", "number"),
    ("size_t", "number"),
    ("std::size_t", "number"),
    ("float", "number"),
    ("double", "number"),
    ("long double", "number"),
    ("bool", "boolean"),
    ("string", "string"),
    ("std::string", "string"),
];

/// Display spelling of an attribute type
pub fn display_type(spelling: &str) -> &str {
    let spelling = spelling.trim();
    SUBSTITUTIONS
        .iter()
        .find(|(from, _)| *from == spelling)
        .map(|(_, to)| *to)
        .unwrap_or(spelling)
}
