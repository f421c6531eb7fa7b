//! Symbol mangling and identifier validation
//!
//! A logical name such as `icons/a.png` becomes the linker symbol
//! `<prefix>icons_a_png`. The same symbol is referenced by the assembly label
//! and by the header's extern declaration, so both emitters must go through
//! [`mangle`].

use crate::error::{GenError, Result};
use serde::{Deserialize, Serialize};

/// What to do with characters that cannot appear in a symbol or C++ identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPolicy {
    /// Fail the run with [`GenError::InvalidIdentifier`].
    #[default]
    Reject,
    /// Replace each offending byte with `_` and its two hex digits.
    Escape,
}

/// Map a logical resource name to its raw symbol name.
///
/// Replaces every `/` and `.` with `_`. Nothing else is touched; use
/// [`mangle_checked`] to get a symbol that is guaranteed to be valid.
pub fn mangle(prefix: &str, name: &str) -> String {
    let mut symbol = String::with_capacity(prefix.len() + name.len());
    symbol.push_str(prefix);
    symbol.extend(name.chars().map(|c| match c {
        '/' | '.' => '_',
        other => other,
    }));
    symbol
}

/// Mangle and then validate (or escape) the result according to `policy`.
pub fn mangle_checked(prefix: &str, name: &str, policy: SymbolPolicy) -> Result<String> {
    sanitize(&mangle(prefix, name), policy)
}

/// Identifier used for a resource inside its namespace: the file name with
/// `.` replaced by `_`.
pub fn resource_identifier(file_name: &str, policy: SymbolPolicy) -> Result<String> {
    sanitize(&file_name.replace('.', "_"), policy)
}

/// Identifier used for a namespace derived from a directory component.
pub fn namespace_identifier(component: &str, policy: SymbolPolicy) -> Result<String> {
    sanitize(component, policy)
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// C++ keywords and alternative operator tokens; none may name a namespace,
/// an object or an extern symbol in the generated header.
const CXX_RESERVED: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool", "break",
    "case", "catch", "char", "char8_t", "char16_t", "char32_t", "class", "compl", "concept",
    "const", "consteval", "constexpr", "constinit", "const_cast", "continue", "co_await",
    "co_return", "co_yield", "decltype", "default", "delete", "do", "double", "dynamic_cast",
    "else", "enum", "explicit", "export", "extern", "false", "float", "for", "friend", "goto",
    "if", "inline", "int", "long", "mutable", "namespace", "new", "noexcept", "not", "not_eq",
    "nullptr", "operator", "or", "or_eq", "private", "protected", "public", "register",
    "reinterpret_cast", "requires", "return", "short", "signed", "sizeof", "static",
    "static_assert", "static_cast", "struct", "switch", "template", "this", "thread_local",
    "throw", "true", "try", "typedef", "typeid", "typename", "union", "unsigned", "using",
    "virtual", "void", "volatile", "wchar_t", "while", "xor", "xor_eq",
];

pub fn is_reserved_word(ident: &str) -> bool {
    CXX_RESERVED.contains(&ident)
}

/// Check `raw` against `[A-Za-z_][A-Za-z0-9_]*`, escaping or rejecting per `policy`.
pub fn sanitize(raw: &str, policy: SymbolPolicy) -> Result<String> {
    if raw.is_empty() {
        return Err(GenError::InvalidIdentifier {
            name: raw.to_string(),
            reason: "identifier is empty".to_string(),
        });
    }

    let starts_with_digit = raw.starts_with(|c: char| c.is_ascii_digit());

    match policy {
        SymbolPolicy::Reject => {
            if let Some(bad) = raw.chars().find(|c| !is_ident_char(*c)) {
                return Err(GenError::InvalidIdentifier {
                    name: raw.to_string(),
                    reason: format!("character {:?} is not allowed", bad),
                });
            }
            if starts_with_digit {
                return Err(GenError::InvalidIdentifier {
                    name: raw.to_string(),
                    reason: "identifier starts with a digit".to_string(),
                });
            }
            if is_reserved_word(raw) {
                return Err(GenError::InvalidIdentifier {
                    name: raw.to_string(),
                    reason: "identifier is a C++ keyword".to_string(),
                });
            }
            Ok(raw.to_string())
        }
        SymbolPolicy::Escape if is_reserved_word(raw) => Ok(format!("_{}", raw)),
        SymbolPolicy::Escape => {
            let mut out = String::with_capacity(raw.len() + 1);
            if starts_with_digit {
                out.push('_');
            }
            for c in raw.chars() {
                if is_ident_char(c) {
                    out.push(c);
                } else {
                    let mut buf = [0u8; 4];
                    for byte in c.encode_utf8(&mut buf).bytes() {
                        out.push('_');
                        out.push_str(&hex::encode([byte]));
                    }
                }
            }
            Ok(out)
        }
    }
}
