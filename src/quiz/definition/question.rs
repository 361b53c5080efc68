use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref NULL_MARKER_REGEX: Regex = Regex::new(
        r"^(?:|#N/A|#N/A N/A|#NA|-1\.#IND|-1\.#QNAN|-NaN|-nan|1\.#IND|1\.#QNAN|<NA>|N/A|NA|NULL|NaN|None|n/a|nan|null)$"
    )
    .unwrap();
}

fn sanitize(cell: Option<&String>) -> Option<String> {
    let cell = cell?.trim();
    if NULL_MARKER_REGEX.is_match(cell) {
        None
    } else {
        Some(cell.to_owned())
    }
}

/// One row of a raw table, mapped by position. Cells that are absent or hold
/// a null marker are `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawQuestion {
    pub question: Option<String>,
    pub option_a: Option<String>,
    pub option_b: Option<String>,
    pub option_c: Option<String>,
    pub option_d: Option<String>,
    pub answer: Option<String>,
}

impl RawQuestion {
    pub fn from_row(row: &[String]) -> Self {
        RawQuestion {
            question: sanitize(row.get(0)),
            option_a: sanitize(row.get(1)),
            option_b: sanitize(row.get(2)),
            option_c: sanitize(row.get(3)),
            option_d: sanitize(row.get(4)),
            answer: sanitize(row.get(5)),
        }
    }

    pub fn into_question(self) -> Option<Question> {
        Some(Question::new(
            self.question?,
            self.option_a?,
            self.option_b?,
            self.option_c?,
            self.option_d?,
            self.answer?,
        ))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "Question")]
    pub question: String,
    #[serde(rename = "A")]
    pub option_a: String,
    #[serde(rename = "B")]
    pub option_b: String,
    #[serde(rename = "C")]
    pub option_c: String,
    #[serde(rename = "D")]
    pub option_d: String,
    #[serde(rename = "Answer")]
    pub answer: String,
}

impl Question {
    pub fn new<S: Into<String>>(question: S, a: S, b: S, c: S, d: S, answer: S) -> Self {
        Question {
            question: question.into(),
            option_a: a.into(),
            option_b: b.into(),
            option_c: c.into(),
            option_d: d.into(),
            answer: answer.into(),
        }
    }

    pub fn options(&self) -> [(char, &str); 4] {
        [
            ('A', self.option_a.as_str()),
            ('B', self.option_b.as_str()),
            ('C', self.option_c.as_str()),
            ('D', self.option_d.as_str()),
        ]
    }
}
