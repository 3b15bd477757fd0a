//! Meeting-feedback questionnaire validation.

use crate::error::CoreError;

/// Lowest accepted rating.
pub const MIN_VALUTAZIONE: i32 = 1;
/// Highest accepted rating.
pub const MAX_VALUTAZIONE: i32 = 5;
/// Maximum length of the free-text comment.
pub const MAX_COMMENTO_LEN: usize = 254;

/// Validate a questionnaire submission.
pub fn valida_questionario(valutazione: i32, commento: Option<&str>) -> Result<(), CoreError> {
    if !(MIN_VALUTAZIONE..=MAX_VALUTAZIONE).contains(&valutazione) {
        return Err(CoreError::Validation {
            field: "valutazione",
            message: "Valutazione fuori intervallo".to_string(),
        });
    }

    if let Some(commento) = commento {
        if commento.len() > MAX_COMMENTO_LEN {
            return Err(CoreError::Validation {
                field: "commento",
                message: "Lunghezza commento errata".to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratings_in_range_pass() {
        for valutazione in MIN_VALUTAZIONE..=MAX_VALUTAZIONE {
            assert!(valida_questionario(valutazione, None).is_ok());
        }
    }

    #[test]
    fn ratings_out_of_range_fail() {
        assert!(valida_questionario(0, None).is_err());
        assert!(valida_questionario(6, None).is_err());
        assert!(valida_questionario(-1, None).is_err());
    }

    #[test]
    fn comment_within_limit_passes() {
        let commento = "a".repeat(MAX_COMMENTO_LEN);
        assert!(valida_questionario(3, Some(&commento)).is_ok());
    }

    #[test]
    fn overlong_comment_fails() {
        let commento = "a".repeat(MAX_COMMENTO_LEN + 1);
        let err = valida_questionario(3, Some(&commento)).unwrap_err();
        match err {
            CoreError::Validation { field, .. } => assert_eq!(field, "commento"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
