use super::PropertyValue;

/// A query as sent to the store: text plus named arguments.
///
/// Literal values are never inlined into `query_string`.
#[derive(Debug, Clone, PartialEq)]
pub struct GqlQuery {
    pub query_string: String,
    pub named_args: Vec<(String, PropertyValue)>,
    pub allow_literal: bool,
}

impl GqlQuery {
    pub fn new(query_string: impl Into<String>) -> Self {
        Self {
            query_string: query_string.into(),
            named_args: vec![],
            allow_literal: false,
        }
    }

    pub fn arg(&self, name: &str) -> Option<&PropertyValue> {
        self.named_args
            .iter()
            .find(|(arg, _)| arg == name)
            .map(|(_, value)| value)
    }
}
