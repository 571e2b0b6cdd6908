use crate::shared::error::EinvError;
use crate::shared::Result;

/// Maximum length for a solution identifier (security limit)
const MAX_SOLUTION_ID_LENGTH: usize = 255;

/// NewType wrapper for the identifier of the solution being created
///
/// The identifier ends up both as a URL path segment of the export call and
/// as the `<id>.json` artifact name, so anything that could escape either is
/// rejected up front.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SolutionId(String);

impl SolutionId {
    pub fn new(id: String) -> Result<Self> {
        if id.is_empty() {
            return Err(invalid("Solution ID cannot be empty"));
        }

        if id.len() > MAX_SOLUTION_ID_LENGTH {
            return Err(invalid(format!(
                "Solution ID is too long ({} bytes). Maximum allowed: {} bytes",
                id.len(),
                MAX_SOLUTION_ID_LENGTH
            )));
        }

        if id.chars().any(char::is_whitespace) {
            return Err(invalid("Solution ID cannot contain whitespace"));
        }

        if id.contains('/') || id.contains('\\') {
            return Err(invalid(
                "Solution ID contains path separators which are not allowed",
            ));
        }

        if id.contains("..") {
            return Err(invalid("Solution ID contains '..' which is not allowed"));
        }

        if id.contains('#') || id.contains('?') || id.contains('@') {
            return Err(invalid("Solution ID contains URL-unsafe characters"));
        }

        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SolutionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn invalid(message: impl Into<String>) -> anyhow::Error {
    EinvError::Validation {
        message: message.into(),
    }
    .into()
}
