use serde::Deserialize;

use crate::error::CoreError;

/// Number of question/answer pairs every submission must carry.
pub const QA_COUNT: usize = 5;

/// Raw submission body as received over the wire.
///
/// Every field is optional so that an incomplete body deserializes and is
/// then rejected by [`ReportSubmission::validate`] with the fixed validation
/// message, rather than by the JSON layer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportSubmission {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub questions: Option<Vec<String>>,
    #[serde(default)]
    pub answers: Option<Vec<String>>,
}

impl ReportSubmission {
    /// Check the submission shape and pair questions with answers.
    ///
    /// The name only has to be non-empty; a whitespace-only name is accepted
    /// as present. Both sequences must hold exactly [`QA_COUNT`] entries.
    pub fn validate(self) -> Result<ReportRequest, CoreError> {
        let name = self.name.filter(|n| !n.is_empty()).ok_or(CoreError::InvalidInput)?;

        let (Some(questions), Some(answers)) = (self.questions, self.answers) else {
            return Err(CoreError::InvalidInput);
        };
        if questions.len() != QA_COUNT || answers.len() != QA_COUNT {
            return Err(CoreError::InvalidInput);
        }

        let qa = questions
            .into_iter()
            .zip(answers)
            .enumerate()
            .map(|(i, (question, answer))| QaItem {
                index: i + 1,
                question,
                answer,
            })
            .collect();

        Ok(ReportRequest { name, qa })
    }
}

/// A validated request: a name plus exactly five ordered QA pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    name: String,
    qa: Vec<QaItem>,
}

impl ReportRequest {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn qa(&self) -> &[QaItem] {
        &self.qa
    }

    /// Filesystem-safe form of the name, used for output file names.
    pub fn safe_name(&self) -> String {
        super::report::safe_name(&self.name)
    }
}

/// One question and its answer. `index` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QaItem {
    pub index: usize,
    pub question: String,
    pub answer: String,
}
