use validator::ValidationError;

/// Canonicalize a WhatsApp number for storage and lookup.
///
/// Formatting characters are stripped, a leading `00` becomes `+`, and a bare
/// 10-digit Indian mobile number (first digit 6-9) gains the `+91` prefix.
/// Returns `None` when the result is not `+` followed by 8 to 15 digits.
pub fn normalize_whatsapp(raw: &str) -> Option<String> {
    let mut cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')' | '.'))
        .collect();

    if let Some(rest) = cleaned.strip_prefix("00") {
        cleaned = format!("+{rest}");
    }

    let digits = cleaned.strip_prefix('+').unwrap_or(&cleaned);
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let normalized = if cleaned.starts_with('+') {
        cleaned.clone()
    } else if digits.len() == 10 && digits.starts_with(['6', '7', '8', '9']) {
        format!("+91{digits}")
    } else {
        return None;
    };

    let len = normalized.len() - 1;
    if (8..=15).contains(&len) {
        Some(normalized)
    } else {
        None
    }
}

pub fn validate_whatsapp(number: &str) -> Result<(), ValidationError> {
    if normalize_whatsapp(number).is_some() {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_whatsapp_number"))
    }
}
