/// Default shape token substituted for literal value text.
pub const DEFAULT_PLACEHOLDER: &str = "<value>";

/// Default wildcard character, copied through verbatim.
pub const DEFAULT_WILDCARD: char = '*';

/// Abstracts attribute values down to their wildcard shape.
///
/// Every maximal run of non-wildcard characters becomes one placeholder, so
/// `John` and `Jane` both become `<value>` while `Jo*n` becomes
/// `<value>*<value>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueNormalizer {
    placeholder: String,
    wildcard: char,
}

impl Default for ValueNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEHOLDER, DEFAULT_WILDCARD)
    }
}

impl ValueNormalizer {
    pub fn new(placeholder: impl Into<String>, wildcard: char) -> Self {
        Self {
            placeholder: placeholder.into(),
            wildcard,
        }
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn wildcard(&self) -> char {
        self.wildcard
    }

    pub fn normalize(&self, raw: &str) -> String {
        let mut out = String::with_capacity(raw.len());
        let mut in_literal = false;

        for c in raw.chars() {
            if c == self.wildcard {
                if in_literal {
                    out.push_str(&self.placeholder);
                    in_literal = false;
                }
                out.push(c);
            } else {
                in_literal = true;
            }
        }

        // Close a literal run that reaches the end of the value
        if in_literal {
            out.push_str(&self.placeholder);
        }

        out
    }
}

/// Normalizes a value with the default placeholder and wildcard.
pub fn normalize_value(raw: &str) -> String {
    ValueNormalizer::default().normalize(raw)
}
