use std::collections::HashSet;

use crate::domain::actor::value_objects::Capability;
use crate::domain::article::entity::Article;

fn has_capability(capabilities: &HashSet<Capability>, resource: &str, action: &str) -> bool {
    capabilities.iter().any(|cap| cap.matches(resource, action))
}

/// Ownership is name-based: the article's stored `author` string must equal
/// the actor's display name. Renaming an actor does not retroactively
/// transfer ownership of their prior articles.
fn owns(article: &Article, display_name: &str) -> bool {
    article.author == display_name
}

pub struct CanUpdateArticleSpec<'a> {
    capabilities: &'a HashSet<Capability>,
    article: &'a Article,
    display_name: &'a str,
}

impl<'a> CanUpdateArticleSpec<'a> {
    pub fn new(
        capabilities: &'a HashSet<Capability>,
        article: &'a Article,
        display_name: &'a str,
    ) -> Self {
        Self {
            capabilities,
            article,
            display_name,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        has_capability(self.capabilities, "articles", "update:any")
            || (has_capability(self.capabilities, "articles", "update:own")
                && owns(self.article, self.display_name))
    }
}

pub struct CanDeleteArticleSpec<'a> {
    capabilities: &'a HashSet<Capability>,
    article: &'a Article,
    display_name: &'a str,
}

impl<'a> CanDeleteArticleSpec<'a> {
    pub fn new(
        capabilities: &'a HashSet<Capability>,
        article: &'a Article,
        display_name: &'a str,
    ) -> Self {
        Self {
            capabilities,
            article,
            display_name,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        has_capability(self.capabilities, "articles", "delete:any")
            || (has_capability(self.capabilities, "articles", "delete:own")
                && owns(self.article, self.display_name))
    }
}

pub struct CanRemoveImageSpec<'a> {
    capabilities: &'a HashSet<Capability>,
    article: &'a Article,
    display_name: &'a str,
}

impl<'a> CanRemoveImageSpec<'a> {
    pub fn new(
        capabilities: &'a HashSet<Capability>,
        article: &'a Article,
        display_name: &'a str,
    ) -> Self {
        Self {
            capabilities,
            article,
            display_name,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        has_capability(self.capabilities, "images", "delete:any")
            || (has_capability(self.capabilities, "images", "delete:own")
                && owns(self.article, self.display_name))
    }
}
