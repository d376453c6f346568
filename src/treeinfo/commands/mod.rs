use crate::model::Annotation;
use crate::set::DistributeResult;
use crate::store::WriteReport;
use crate::validation::{CleanResult, ValidationResult};
use std::collections::BTreeMap;

pub mod add;
pub mod clean;
pub mod distribute;
pub mod gather;
pub mod helpers;
pub mod remove;
pub mod show;
pub mod update;
pub mod validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Effective annotations keyed by root-relative target path.
    pub gathered: BTreeMap<String, Annotation>,
    pub validation: Option<ValidationResult>,
    pub clean: Option<CleanResult>,
    pub distribution: Option<DistributeResult>,
    pub written_files: Vec<String>,
    pub deleted_files: Vec<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_gathered(mut self, gathered: BTreeMap<String, Annotation>) -> Self {
        self.gathered = gathered;
        self
    }

    pub fn with_validation(mut self, validation: ValidationResult) -> Self {
        self.validation = Some(validation);
        self
    }

    pub fn with_clean(mut self, clean: CleanResult) -> Self {
        self.clean = Some(clean);
        self
    }

    pub fn with_distribution(mut self, distribution: DistributeResult) -> Self {
        self.distribution = Some(distribution);
        self
    }

    pub fn record_writes(&mut self, report: WriteReport) {
        self.written_files.extend(report.written);
        self.deleted_files.extend(report.deleted);
    }
}
