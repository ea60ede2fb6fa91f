//! The string-level masking pipeline.
//!
//! [`mask_str`] runs the built-in detectors over a string in a fixed order and
//! obfuscates every match, with partial-reveal rules tuned per pattern:
//!
//! 1. **Emails** keep the first two characters of the local part and the full
//!    domain, so logs stay readable without exposing the address.
//! 2. **Secret tokens** keep the assignment phrase (`api_key=`, `Bearer `) and
//!    replace only the value.
//! 3. **Generic patterns** (credit cards, connection strings, IPv4 addresses)
//!    are replaced outright with a filler capped at ten characters, which also
//!    hides the true length of long secrets.
//!
//! Each stage operates on the previous stage's output. Filler characters no
//! longer satisfy any pattern, so already-masked regions are never re-matched.
//! Every stage is a total function: no input can make masking fail.

use std::iter::repeat_n;

use regex::Captures;

use crate::pattern::PatternKind;

/// Leading characters of an email local part left visible.
const EMAIL_VISIBLE_PREFIX: usize = 2;

/// Fixed filler length replacing the rest of an email local part.
const EMAIL_FILLER_LEN: usize = 5;

/// Fixed filler length replacing a secret token value.
const SECRET_FILLER_LEN: usize = 10;

/// Upper bound on filler length for generic pattern matches.
const GENERIC_FILLER_CAP: usize = 10;

/// Masks every sensitive pattern found in `text`, using `mask_char` as the
/// filler unit.
///
/// ```
/// use hide_pii::mask_str;
///
/// assert_eq!(mask_str("alex.smith@gmail.com", '*'), "al*****@gmail.com");
/// assert_eq!(mask_str("Bearer 1a2b3c4d5e6f", '*'), "Bearer **********");
/// assert_eq!(mask_str("no secrets here", '*'), "no secrets here");
/// ```
#[must_use]
pub fn mask_str(text: &str, mask_char: char) -> String {
    let masked = mask_emails(text, mask_char);
    let masked = mask_secret_tokens(&masked, mask_char);

    // Generic patterns run last so secret-phrase context wins over bare
    // digit runs inside a token value.
    [
        PatternKind::CreditCard,
        PatternKind::ConnectionString,
        PatternKind::Ipv4,
    ]
    .into_iter()
    .fold(masked, |text, kind| mask_generic(&text, kind, mask_char))
}

fn filler(mask_char: char, len: usize) -> String {
    repeat_n(mask_char, len).collect()
}

/// Email stage: `alice@example.com` becomes `al*****@example.com`. Local parts
/// shorter than the visible prefix are revealed as-is, still followed by the
/// fixed-length filler.
fn mask_emails(text: &str, mask_char: char) -> String {
    PatternKind::Email
        .regex()
        .replace_all(text, |caps: &Captures<'_>| {
            match caps[0].split_once('@') {
                Some((local, domain)) => {
                    let visible: String = local.chars().take(EMAIL_VISIBLE_PREFIX).collect();
                    format!("{visible}{}@{domain}", filler(mask_char, EMAIL_FILLER_LEN))
                }
                // Unreachable: the pattern requires an `@`.
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Secret-token stage: the captured value is replaced by a fixed-length
/// filler, the assignment phrase and any trailing delimiter stay verbatim.
fn mask_secret_tokens(text: &str, mask_char: char) -> String {
    PatternKind::SecretToken
        .regex()
        .replace_all(text, |caps: &Captures<'_>| {
            format!("{}{}", &caps[1], filler(mask_char, SECRET_FILLER_LEN))
        })
        .into_owned()
}

/// Generic stage: the whole match is replaced by a filler of
/// `min(match_len, 10)` characters.
fn mask_generic(text: &str, kind: PatternKind, mask_char: char) -> String {
    kind.regex()
        .replace_all(text, |caps: &Captures<'_>| {
            filler(mask_char, caps[0].chars().count().min(GENERIC_FILLER_CAP))
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_email_keeping_prefix_and_domain() {
        assert_eq!(mask_str("alex.smith@gmail.com", '*'), "al*****@gmail.com");
        assert_eq!(
            mask_str("Contact: john.doe@test.com", '*'),
            "Contact: jo*****@test.com"
        );
    }

    #[test]
    fn masks_email_with_short_local_part() {
        // Whatever exists of the local part stays visible; the filler length
        // is fixed either way.
        assert_eq!(mask_str("a@b.com", '*'), "a*****@b.com");
    }

    #[test]
    fn masks_every_email_occurrence() {
        let masked = mask_str("from alice@example.com to bob@example.com", '*');
        assert_eq!(masked, "from al*****@example.com to bo*****@example.com");
    }

    #[test]
    fn leaves_non_email_text_unchanged() {
        assert_eq!(mask_str("user at example dot com", '*'), "user at example dot com");
        assert_eq!(mask_str("half@baked", '*'), "half@baked");
    }

    #[test]
    fn masks_secret_token_value_preserving_prefix() {
        assert_eq!(mask_str("Bearer 1a2b3c4d5e6f7g8h9i0j", '*'), "Bearer **********");
        assert_eq!(mask_str("api_key=123-456", '*'), "api_key=**********");
        assert_eq!(mask_str("password: hunter2", '*'), "password: **********");
    }

    #[test]
    fn secret_token_keeps_trailing_quote() {
        assert_eq!(mask_str(r#"pwd='hunter2' rest"#, '*'), r#"pwd='**********' rest"#);
    }

    #[test]
    fn masks_credit_card_with_capped_filler() {
        // 16 digits mask down to the 10-character cap.
        assert_eq!(mask_str("card 4111111111111111 ok", '*'), "card ********** ok");
        // Amex: 15 digits, still capped.
        assert_eq!(mask_str("378282246310005", '*'), "**********");
    }

    #[test]
    fn masks_short_ipv4_to_its_own_length() {
        assert_eq!(mask_str("host 10.0.0.1 up", '*'), "host ******** up");
        assert_eq!(mask_str("1.2.3.4", '*'), "*******");
    }

    #[test]
    fn masks_long_ipv4_with_capped_filler() {
        // 15 characters, capped to 10.
        assert_eq!(mask_str("255.255.255.255", '*'), "**********");
    }

    #[test]
    fn masks_connection_string_credentials() {
        let masked = mask_str("db at mongodb://admin:p@ss@host/db", '*');
        assert!(!masked.contains("p@ss"), "credentials leaked: {masked}");
        assert!(!masked.contains("admin"), "user leaked: {masked}");
        assert_eq!(masked, "db at **********");
    }

    #[test]
    fn respects_custom_mask_char() {
        assert_eq!(mask_str("alex.smith@gmail.com", '#'), "al#####@gmail.com");
        assert_eq!(mask_str("Bearer abc123def456", '#'), "Bearer ##########");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(mask_str("", '*'), "");
    }

    #[test]
    fn stages_compose_over_mixed_content() {
        let masked = mask_str("user bob@mail.com api_key=s3cr3t from 10.0.0.1", '*');
        assert_eq!(masked, "user bo*****@mail.com api_key=********** from ********");
    }
}
