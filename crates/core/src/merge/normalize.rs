//! Value normalization for merged fields
//!
//! Two source-data artifacts are flattened here: oxidation states stored
//! as a comma-delimited string, and classification text stored with
//! literal `\uXXXX` escape sequences.

use thiserror::Error;

/// Raised when the oxidation-state list contains a non-numeric token
#[derive(Debug, Clone, PartialEq, Error)]
#[error("non-numeric oxidation state token {token:?}")]
pub struct ParseError {
    /// The offending token, spaces already stripped
    pub token: String,
}

/// Parse a comma-separated list of integers, ignoring embedded spaces
///
/// An empty input yields an empty list, and empty tokens (doubled or
/// trailing commas) are dropped. A non-numeric token is an error rather
/// than being skipped: downstream consumers expect well-formed arrays,
/// so partial success is worse than an explicit failure.
pub fn parse_oxidation_states(input: &str) -> Result<Vec<i32>, ParseError> {
    let compact: String = input.chars().filter(|c| *c != ' ').collect();

    compact
        .split(',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<i32>().map_err(|_| ParseError {
                token: token.to_string(),
            })
        })
        .collect()
}

/// Decode literal `\uXXXX` escape sequences into Unicode text
///
/// Handles UTF-16 surrogate pairs; a lone surrogate decodes to U+FFFD.
/// Common single-character escapes are decoded too; anything else passes
/// through verbatim, so this is a normalizer rather than a validator.
pub fn decode_unicode_escapes(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '\\' || i + 1 >= chars.len() {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        match chars[i + 1] {
            'u' => match parse_hex4(&chars, i + 2) {
                Some(unit) => {
                    i += 6;
                    if (0xD800..0xDC00).contains(&unit) {
                        let low = if chars.get(i) == Some(&'\\') && chars.get(i + 1) == Some(&'u')
                        {
                            parse_hex4(&chars, i + 2)
                        } else {
                            None
                        };
                        match low {
                            Some(low) if (0xDC00..0xE000).contains(&low) => {
                                i += 6;
                                let combined = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
                                out.push(char::from_u32(combined).unwrap_or('\u{FFFD}'));
                            }
                            _ => out.push('\u{FFFD}'),
                        }
                    } else if (0xDC00..0xE000).contains(&unit) {
                        out.push('\u{FFFD}');
                    } else {
                        out.push(char::from_u32(unit).unwrap_or('\u{FFFD}'));
                    }
                }
                None => {
                    out.push('\\');
                    i += 1;
                }
            },
            'n' => {
                out.push('\n');
                i += 2;
            }
            't' => {
                out.push('\t');
                i += 2;
            }
            'r' => {
                out.push('\r');
                i += 2;
            }
            '\\' => {
                out.push('\\');
                i += 2;
            }
            _ => {
                out.push('\\');
                i += 1;
            }
        }
    }

    out
}

fn parse_hex4(chars: &[char], start: usize) -> Option<u32> {
    if start + 4 > chars.len() {
        return None;
    }
    let hex: String = chars[start..start + 4].iter().collect();
    u32::from_str_radix(&hex, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_signed_tokens_with_spaces() {
        assert_eq!(parse_oxidation_states(" -1, +1 ").unwrap(), vec![-1, 1]);
        assert_eq!(parse_oxidation_states("-3,-2,-1,1,2,3").unwrap(), vec![
            -3, -2, -1, 1, 2, 3
        ]);
    }

    #[test]
    fn test_parse_empty_input_and_tokens() {
        assert_eq!(parse_oxidation_states("").unwrap(), Vec::<i32>::new());
        assert_eq!(parse_oxidation_states("   ").unwrap(), Vec::<i32>::new());
        assert_eq!(parse_oxidation_states("1,,2,").unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_parse_rejects_non_numeric_tokens() {
        let err = parse_oxidation_states("1, x, 2").unwrap_err();
        assert_eq!(err.token, "x");
        assert!(parse_oxidation_states("1.5").is_err());
    }

    #[test]
    fn test_decode_basic_escape() {
        // Subscript two, as stored in the source classification text
        assert_eq!(decode_unicode_escapes("H\\u2082O"), "H\u{2082}O");
        assert_eq!(decode_unicode_escapes("plain text"), "plain text");
    }

    #[test]
    fn test_decode_surrogate_pair() {
        assert_eq!(decode_unicode_escapes("\\ud83d\\ude00"), "\u{1F600}");
    }

    #[test]
    fn test_decode_lone_surrogate_is_replacement() {
        assert_eq!(decode_unicode_escapes("\\ud83d!"), "\u{FFFD}!");
        assert_eq!(decode_unicode_escapes("\\ude00"), "\u{FFFD}");
    }

    #[test]
    fn test_decode_malformed_sequences_pass_through() {
        assert_eq!(decode_unicode_escapes("\\u20"), "\\u20");
        assert_eq!(decode_unicode_escapes("\\uzzzz"), "\\uzzzz");
        assert_eq!(decode_unicode_escapes("C:\\path"), "C:\\path");
        assert_eq!(decode_unicode_escapes("trailing\\"), "trailing\\");
    }

    #[test]
    fn test_decode_single_char_escapes() {
        assert_eq!(decode_unicode_escapes("a\\nb\\tc"), "a\nb\tc");
        assert_eq!(decode_unicode_escapes("a\\\\u2082"), "a\\u2082");
    }
}
