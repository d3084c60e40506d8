use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::ListingStore;

pub fn run<S: ListingStore>(store: &S, id: &str) -> Result<CmdResult> {
    let property = store.get_property(id)?;
    let mut result = CmdResult::default().with_listed_properties(vec![property]);
    result.total = 1;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;
    use crate::model::{AddedDate, Property};
    use crate::store::memory::InMemoryStore;

    fn store() -> InMemoryStore {
        InMemoryStore::with_properties(vec![
            Property::new("prop1", "House", 750000.0, 3, "BR5 1AA", AddedDate::new(12, "October", 2022)),
            Property::new("prop2", "Flat", 399995.0, 2, "BR6 2BB", AddedDate::new(14, "September", 2022)),
        ])
    }

    #[test]
    fn shows_property_by_id() {
        let result = run(&store(), "prop2").unwrap();
        assert_eq!(result.listed_properties.len(), 1);
        assert_eq!(result.listed_properties[0].kind, "Flat");
    }

    #[test]
    fn unknown_id_is_not_found() {
        let err = run(&store(), "prop9").unwrap_err();
        assert!(matches!(err, SearchError::PropertyNotFound(ref id) if id == "prop9"));
    }
}
