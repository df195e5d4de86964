//! Person service

use tracing::info;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{palette_color, Person};
use crate::storage::Storage;

/// Service for household member management
pub struct PersonService<'a> {
    storage: &'a Storage,
}

impl<'a> PersonService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn list(&self) -> BudgetResult<Vec<Person>> {
        Ok(self.storage.document.snapshot()?.people)
    }

    /// Find a person by ID, name, or ID prefix
    pub fn find(&self, identifier: &str) -> BudgetResult<Option<Person>> {
        Ok(self
            .storage
            .document
            .snapshot()?
            .find_person(identifier)
            .cloned())
    }

    /// Add a person; the color defaults to the next palette entry
    pub fn add(&self, name: &str, color: Option<&str>) -> BudgetResult<Person> {
        let name = name.trim();

        let person = self.storage.document.update(|doc| {
            if doc.people.iter().any(|p| p.name.eq_ignore_ascii_case(name)) {
                return Err(BudgetError::Duplicate {
                    entity_type: "Person",
                    identifier: name.to_string(),
                });
            }

            let color = color.unwrap_or_else(|| palette_color(doc.people.len()));
            let person = Person::new(name, color);
            person
                .validate()
                .map_err(|e| BudgetError::Validation(e.to_string()))?;

            doc.people.push(person.clone());
            Ok(person)
        })?;
        self.storage.document.save()?;

        info!(person = %person.id, name = %person.name, "added person");
        Ok(person)
    }

    /// Rename and/or recolor a person
    pub fn update(
        &self,
        identifier: &str,
        name: Option<&str>,
        color: Option<&str>,
    ) -> BudgetResult<Person> {
        if name.is_none() && color.is_none() {
            return Err(BudgetError::Validation(
                "Nothing to update: pass a new name or color".into(),
            ));
        }

        let person = self.storage.document.update(|doc| {
            let id = doc
                .find_person(identifier)
                .map(|p| p.id.clone())
                .ok_or_else(|| BudgetError::person_not_found(identifier))?;

            if let Some(name) = name.map(str::trim) {
                if doc
                    .people
                    .iter()
                    .any(|p| p.id != id && p.name.eq_ignore_ascii_case(name))
                {
                    return Err(BudgetError::Duplicate {
                        entity_type: "Person",
                        identifier: name.to_string(),
                    });
                }
            }

            let person = doc
                .people
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or_else(|| BudgetError::person_not_found(identifier))?;

            let mut updated = person.clone();
            if let Some(name) = name {
                updated.name = name.trim().to_string();
            }
            if let Some(color) = color {
                updated.color = color.to_string();
            }
            updated
                .validate()
                .map_err(|e| BudgetError::Validation(e.to_string()))?;

            *person = updated.clone();
            Ok(updated)
        })?;
        self.storage.document.save()?;

        info!(
            person = %person.id,
            name = %person.name,
            color = %person.color,
            "updated person"
        );
        Ok(person)
    }

    /// Remove a person
    ///
    /// Shares that reference them are left in place and display as unknown.
    pub fn remove(&self, identifier: &str) -> BudgetResult<Person> {
        let person = self.storage.document.update(|doc| {
            let idx = doc
                .find_person(identifier)
                .and_then(|found| doc.people.iter().position(|p| p.id == found.id))
                .ok_or_else(|| BudgetError::person_not_found(identifier))?;
            Ok(doc.people.remove(idx))
        })?;
        self.storage.document.save()?;

        info!(person = %person.id, name = %person.name, "removed person");
        Ok(person)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BudgetPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_add_people_cycles_palette() {
        let (_temp_dir, storage) = create_test_storage();
        let service = PersonService::new(&storage);

        let alex = service.add("Alex", None).unwrap();
        let sam = service.add("Sam", Some("#abc")).unwrap();
        assert_eq!(alex.color, palette_color(0));
        assert_eq!(sam.color, "#abc");
        assert_eq!(service.list().unwrap().len(), 2);
    }

    #[test]
    fn test_add_rejects_duplicates_and_bad_input() {
        let (_temp_dir, storage) = create_test_storage();
        let service = PersonService::new(&storage);

        service.add("Alex", None).unwrap();
        assert!(matches!(
            service.add("alex", None),
            Err(BudgetError::Duplicate { .. })
        ));
        assert!(service.add("", None).unwrap_err().is_validation());
        assert!(service.add("Sam", Some("red")).unwrap_err().is_validation());
    }

    #[test]
    fn test_update_person() {
        let (_temp_dir, storage) = create_test_storage();
        let service = PersonService::new(&storage);

        let alex = service.add("Alex", None).unwrap();
        service.add("Sam", None).unwrap();

        let renamed = service.update("alex", Some(" Alexis "), None).unwrap();
        assert_eq!(renamed.id, alex.id);
        assert_eq!(renamed.name, "Alexis");
        assert_eq!(renamed.color, alex.color);

        let recolored = service.update("Alexis", None, Some("#123456")).unwrap();
        assert_eq!(recolored.color, "#123456");
        assert_eq!(service.find(alex.id.as_str()).unwrap().unwrap(), recolored);

        // Same name in a different case is not a clash with itself
        service.update("Alexis", Some("ALEXIS"), None).unwrap();
    }

    #[test]
    fn test_update_person_rejects_bad_input() {
        let (_temp_dir, storage) = create_test_storage();
        let service = PersonService::new(&storage);

        service.add("Alex", None).unwrap();
        service.add("Sam", None).unwrap();

        assert!(matches!(
            service.update("Alex", Some("sam"), None),
            Err(BudgetError::Duplicate { .. })
        ));
        assert!(service
            .update("Alex", None, Some("blue"))
            .unwrap_err()
            .is_validation());
        assert!(service.update("Alex", None, None).unwrap_err().is_validation());
        assert!(service
            .update("Nobody", Some("Kim"), None)
            .unwrap_err()
            .is_not_found());
        assert_eq!(service.find("Alex").unwrap().unwrap().name, "Alex");
    }

    #[test]
    fn test_remove_person() {
        let (_temp_dir, storage) = create_test_storage();
        let service = PersonService::new(&storage);

        let alex = service.add("Alex", None).unwrap();
        service.remove(alex.id.short()).unwrap();
        assert!(service.find("Alex").unwrap().is_none());
        assert!(service.remove("Alex").unwrap_err().is_not_found());
    }
}
