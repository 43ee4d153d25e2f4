use std::sync::Arc;

use tracing::debug;

use crate::{
    composition::{
        composition::Composition,
        template::{DynTemplate, Template, TemplateInfo},
    },
    foundation::error::{StudioError, StudioResult},
    templates,
};

/// Registry of templates addressable by kebab-case id or PascalCase name.
#[derive(Clone, Default)]
pub struct Catalog {
    entries: Vec<Arc<dyn DynTemplate>>,
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|e| e.info().id))
            .finish()
    }
}

/// `MotivationReel`, `motivation-reel` and `motivation_reel` all normalize to `motivationreel`.
fn normalize(id: &str) -> String {
    id.trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every built-in template.
    pub fn builtin() -> Self {
        let mut c = Self::new();
        templates::register_builtin(&mut c);
        c
    }

    /// Add a template; a later registration with the same id replaces the earlier one.
    pub fn register<T: Template>(&mut self, template: T) {
        let id = normalize(Template::info(&template).id);
        self.entries.retain(|e| normalize(e.info().id) != id);
        self.entries.push(Arc::new(template));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> StudioResult<&Arc<dyn DynTemplate>> {
        let key = normalize(id);
        self.entries
            .iter()
            .find(|e| {
                let info = e.info();
                normalize(info.id) == key || normalize(info.name) == key
            })
            .ok_or_else(|| StudioError::not_found(format!("composition '{id}'")))
    }

    pub fn list(&self) -> Vec<TemplateInfo> {
        self.entries.iter().map(|e| e.info()).collect()
    }

    pub fn instantiate(
        &self,
        id: &str,
        props: Option<&serde_json::Value>,
    ) -> StudioResult<Composition> {
        let entry = Arc::clone(self.get(id)?);
        debug!(id, "instantiating composition");
        entry.instantiate(props)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/catalog.rs"]
mod tests;
