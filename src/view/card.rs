use crate::types::ProjectRecord;

pub const PRIVATE_NOTICE: &str = "Private client project, write-up available upon request.";
pub const GITHUB_LABEL: &str = "GitHub Repository";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardFooter {
    PrivateNotice,
    Github(String),
    Empty,
}

impl CardFooter {
    /// Text shown in the footer, if any.
    pub fn text(&self) -> Option<&'static str> {
        match self {
            CardFooter::PrivateNotice => Some(PRIVATE_NOTICE),
            CardFooter::Github(_) => Some(GITHUB_LABEL),
            CardFooter::Empty => None,
        }
    }
}

/// A project as it appears in the projects listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectCard {
    pub title: String,
    pub tags: Vec<String>,
    pub description: String,
    pub footer: CardFooter,
    pub details_href: String,
}

impl From<&ProjectRecord> for ProjectCard {
    fn from(record: &ProjectRecord) -> Self {
        let footer = if record.is_private {
            CardFooter::PrivateNotice
        } else {
            record
                .github_link()
                .map(|url| CardFooter::Github(url.to_string()))
                .unwrap_or(CardFooter::Empty)
        };
        ProjectCard {
            title: record.title.clone(),
            tags: record.tags.clone(),
            description: record.description.clone(),
            footer,
            details_href: format!("/project/{}", record.slug),
        }
    }
}

pub fn cards(records: &[ProjectRecord]) -> Vec<ProjectCard> {
    records.iter().map(ProjectCard::from).collect()
}
