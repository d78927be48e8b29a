//! Keyframe animation names.

use serde_json::Value;

use crate::StyleError;
use crate::json::kind;

/// How a keyframes block is named.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum KeyframesName {
    /// Derive the name from the content hash of the keyframe stops.
    #[default]
    Auto,
    /// Use the caller's name verbatim.
    Named(String),
}

impl KeyframesName {
    /// Resolve the optional leading argument of a dynamic `keyframes` call.
    ///
    /// `None` (argument omitted) selects [`KeyframesName::Auto`]; anything
    /// other than a string is rejected.
    pub fn from_value(value: Option<&Value>) -> Result<Self, StyleError> {
        match value {
            None => Ok(Self::Auto),
            Some(Value::String(name)) => Ok(Self::Named(name.clone())),
            Some(other) => Err(StyleError::InvalidAnimationName { found: kind(other) }),
        }
    }

    /// The explicit name, if any.
    pub fn as_named(&self) -> Option<&str> {
        match self {
            Self::Auto => None,
            Self::Named(name) => Some(name),
        }
    }
}

impl From<&str> for KeyframesName {
    fn from(name: &str) -> Self {
        Self::Named(name.to_owned())
    }
}

impl From<String> for KeyframesName {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn omitted_name_is_auto() {
        assert_eq!(KeyframesName::from_value(None), Ok(KeyframesName::Auto));
    }

    #[test]
    fn string_name_is_kept_verbatim() {
        let name = json!("custom-name-here");
        assert_eq!(
            KeyframesName::from_value(Some(&name)),
            Ok(KeyframesName::Named("custom-name-here".into()))
        );
    }

    #[test]
    fn non_string_name_is_rejected() {
        for bad in [json!(42), json!(null), json!({"from": {}}), json!(["a"])] {
            let err = KeyframesName::from_value(Some(&bad)).unwrap_err();
            assert!(matches!(err, StyleError::InvalidAnimationName { .. }), "{bad}");
        }
    }
}
