#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("invalid hex color: {0:?}")]
    InvalidHexFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_hex_display() {
        let err = ColorError::InvalidHexFormat("clearcolor".into());
        assert_eq!(err.to_string(), "invalid hex color: \"clearcolor\"");
    }

    #[test]
    fn invalid_hex_display_empty_input() {
        let err = ColorError::InvalidHexFormat(String::new());
        assert_eq!(err.to_string(), "invalid hex color: \"\"");
    }

    #[test]
    fn result_alias_carries_color_error() {
        let res: crate::Result<()> = Err(ColorError::InvalidHexFormat("#zz".into()));
        assert!(matches!(res, Err(ColorError::InvalidHexFormat(ref s)) if s == "#zz"));
    }
}
