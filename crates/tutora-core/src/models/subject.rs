use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The five lesson subjects tutora can generate content for.
///
/// Serialized with the human-readable names — they are the wire strings
/// the model sees in its schema instructions and the UI shows in pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Subject {
    #[serde(rename = "Visual Arts")]
    VisualArts,
    #[serde(rename = "Performing Arts")]
    PerformingArts,
    Coding,
    #[serde(rename = "Financial Literacy")]
    FinancialLiteracy,
    Science,
}

impl Subject {
    pub const ALL: [Subject; 5] = [
        Subject::VisualArts,
        Subject::PerformingArts,
        Subject::Coding,
        Subject::FinancialLiteracy,
        Subject::Science,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Subject::VisualArts => "Visual Arts",
            Subject::PerformingArts => "Performing Arts",
            Subject::Coding => "Coding",
            Subject::FinancialLiteracy => "Financial Literacy",
            Subject::Science => "Science",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Subject {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Subject::ALL
            .into_iter()
            .find(|subject| subject.name() == s)
            .ok_or_else(|| CoreError::UnknownSubject(s.to_string()))
    }
}

/// Programming languages a Coding lesson can target.
///
/// Only meaningful when the request subject is [`Subject::Coding`]; the
/// prompt builder falls back to JavaScript when none is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ProgrammingLanguage {
    JavaScript,
    Python,
    Java,
    #[serde(rename = "C++")]
    Cpp,
    #[serde(rename = "C#")]
    CSharp,
    Ruby,
    Go,
    Rust,
    Swift,
    Scratch,
}

impl ProgrammingLanguage {
    pub fn name(&self) -> &'static str {
        match self {
            ProgrammingLanguage::JavaScript => "JavaScript",
            ProgrammingLanguage::Python => "Python",
            ProgrammingLanguage::Java => "Java",
            ProgrammingLanguage::Cpp => "C++",
            ProgrammingLanguage::CSharp => "C#",
            ProgrammingLanguage::Ruby => "Ruby",
            ProgrammingLanguage::Go => "Go",
            ProgrammingLanguage::Rust => "Rust",
            ProgrammingLanguage::Swift => "Swift",
            ProgrammingLanguage::Scratch => "Scratch",
        }
    }
}

impl fmt::Display for ProgrammingLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProgrammingLanguage {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const ALL: [ProgrammingLanguage; 10] = [
            ProgrammingLanguage::JavaScript,
            ProgrammingLanguage::Python,
            ProgrammingLanguage::Java,
            ProgrammingLanguage::Cpp,
            ProgrammingLanguage::CSharp,
            ProgrammingLanguage::Ruby,
            ProgrammingLanguage::Go,
            ProgrammingLanguage::Rust,
            ProgrammingLanguage::Swift,
            ProgrammingLanguage::Scratch,
        ];
        ALL.into_iter()
            .find(|lang| lang.name() == s)
            .ok_or_else(|| CoreError::UnknownProgrammingLanguage(s.to_string()))
    }
}
