use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub const MAX_TITLE_LEN: usize = 200;
pub const MAX_DESCRIPTION_LEN: usize = 1000;

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTask {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl CreateTask {
    pub fn validated(self) -> Result<(String, Option<String>), AppError> {
        let title = clean_title(&self.title)?;
        let description = clean_description(self.description)?;
        Ok((title, description))
    }
}

/// Partial update: absent fields (including JSON null) leave the stored value
/// untouched.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl UpdateTask {
    pub fn validated(self) -> Result<Self, AppError> {
        let title = self.title.map(|t| clean_title(&t)).transpose()?;
        let description = clean_description(self.description)?;
        Ok(Self {
            title,
            description,
            completed: self.completed,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub status: Option<String>,
}

/// Narrows a task list to completed, pending, or all. Anything other than the
/// two recognized strings means "all".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Pending,
}

impl StatusFilter {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("completed") => StatusFilter::Completed,
            Some("pending") => StatusFilter::Pending,
            _ => StatusFilter::All,
        }
    }

    pub fn as_completed(self) -> Option<bool> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Completed => Some(true),
            StatusFilter::Pending => Some(false),
        }
    }

    pub fn query_value(self) -> Option<&'static str> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Completed => Some("completed"),
            StatusFilter::Pending => Some("pending"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Completed => "completed",
            StatusFilter::Pending => "pending",
        }
    }
}

fn clean_title(raw: &str) -> Result<String, AppError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(AppError::Validation("Title is required".into()));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(AppError::Validation(format!(
            "Title must be at most {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(title.to_string())
}

fn clean_description(raw: Option<String>) -> Result<Option<String>, AppError> {
    let Some(description) = raw else {
        return Ok(None);
    };
    let description = description.trim();
    if description.is_empty() {
        return Ok(None);
    }
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(AppError::Validation(format!(
            "Description must be at most {MAX_DESCRIPTION_LEN} characters"
        )));
    }
    Ok(Some(description.to_string()))
}
