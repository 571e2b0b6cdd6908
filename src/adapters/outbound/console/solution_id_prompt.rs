use crate::consolidation::domain::SolutionId;
use crate::ports::outbound::{RunLogger, SolutionIdProvider};
use crate::shared::error::EinvError;
use crate::shared::Result;
use std::cell::RefCell;
use std::io::BufRead;

/// Prompt shown before reading the solution id
pub const SOLUTION_ID_PROMPT: &str = "Provide a solutionId based on the tracklist!..";

/// FixedSolutionId adapter returning an identifier given up front
/// (e.g. `--solution-id`)
pub struct FixedSolutionId {
    value: String,
}

impl FixedSolutionId {
    pub fn new(value: String) -> Self {
        Self { value }
    }
}

impl SolutionIdProvider for FixedSolutionId {
    fn solution_id(&self) -> Result<SolutionId> {
        SolutionId::new(self.value.clone())
    }
}

/// PromptSolutionIdProvider adapter asking the user for the identifier
///
/// The first whitespace-delimited token typed is used; blank lines are
/// skipped. End of input without a token is an error.
pub struct PromptSolutionIdProvider<R, L> {
    input: RefCell<R>,
    logger: L,
}

impl<R: BufRead, L: RunLogger> PromptSolutionIdProvider<R, L> {
    pub fn new(input: R, logger: L) -> Self {
        Self {
            input: RefCell::new(input),
            logger,
        }
    }

    fn read_token(&self) -> Result<Option<String>> {
        let mut input = self.input.borrow_mut();
        let mut line = String::new();
        loop {
            line.clear();
            let read = input.read_line(&mut line).map_err(|e| EinvError::Validation {
                message: format!("Failed to read solution ID from input: {}", e),
            })?;
            if read == 0 {
                return Ok(None);
            }
            if let Some(token) = line.split_whitespace().next() {
                return Ok(Some(token.to_string()));
            }
        }
    }
}

impl<R: BufRead, L: RunLogger> SolutionIdProvider for PromptSolutionIdProvider<R, L> {
    fn solution_id(&self) -> Result<SolutionId> {
        self.logger.info(SOLUTION_ID_PROMPT);

        match self.read_token()? {
            Some(token) => SolutionId::new(token),
            None => Err(EinvError::Validation {
                message: "No solution ID was provided (input ended)".to_string(),
            }
            .into()),
        }
    }
}
