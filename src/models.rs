use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Input focus: which part of the screen receives typed characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusArea {
    Page,
    Chat,
    Form,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Typography,
    UxUi,
    ThreeD,
    WebDevelopment,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Typography,
        Category::UxUi,
        Category::ThreeD,
        Category::WebDevelopment,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Typography => "Typography",
            Category::UxUi => "UX/UI",
            Category::ThreeD => "3D Design",
            Category::WebDevelopment => "Web Development",
        }
    }
}

/// Gallery filter value. `All` is the sentinel shown first in the filter bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Filter bar order.
    pub const CHOICES: [CategoryFilter; 5] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Typography),
        CategoryFilter::Only(Category::UxUi),
        CategoryFilter::Only(Category::ThreeD),
        CategoryFilter::Only(Category::WebDevelopment),
    ];

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct ProcessShot {
    pub url: &'static str,
    pub caption: &'static str,
}

/// Case-study write-up attached to some projects.
#[derive(Debug, PartialEq)]
pub struct CaseStudy {
    pub role: &'static str,
    pub timeline: &'static str,
    pub tools: &'static [&'static str],
    pub concept_title: &'static str,
    pub concept_description: &'static str,
    pub grid_title: &'static str,
    pub grid_description: &'static str,
    pub process_gallery: &'static [ProcessShot],
}

#[derive(Debug, PartialEq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub category: Category,
    pub image_url: &'static str,
    pub description: &'static str,
    pub case_study: Option<CaseStudy>,
}

#[derive(Debug, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Hobby {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

/// Result of the inspiration flow. Field names match the structured response schema.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inspiration {
    pub topic: String,
    pub challenge: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    pub sent_at: DateTime<Local>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(ChatRole::User, text.into())
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, text.into())
    }

    fn new(role: ChatRole, text: String) -> Self {
        Self {
            role,
            text,
            sent_at: Local::now(),
        }
    }

    pub fn author_label(&self) -> &'static str {
        match self.role {
            ChatRole::User => "You",
            ChatRole::Assistant => "Assistant",
        }
    }
}

/// Payload posted to the form-intake endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}
