//! Message format

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// How the body of an email should be interpreted by a renderer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MessageFormat {
    /// Plain text
    #[default]
    Plain,

    /// HTML markup
    Html,

    /// Rich text document
    Rich,
}

/// The message format is not one of the known literals
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid message format \"{0}\", expected one of: plain, html, rich")]
pub struct MessageFormatError(pub String);

impl MessageFormat {
    /// The literal stored in the database and sent over the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Html => "html",
            Self::Rich => "rich",
        }
    }
}

impl FromStr for MessageFormat {
    type Err = MessageFormatError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "plain" => Ok(Self::Plain),
            "html" => Ok(Self::Html),
            "rich" => Ok(Self::Rich),
            other => Err(MessageFormatError(other.to_string())),
        }
    }
}

impl fmt::Display for MessageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
