//! Mock repository implementation for isolating services in tests.

use mockall::mock;

use crate::domain::template::PageTemplate;
use crate::domain::types::TemplateId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{SearchCriteria, SearchResult, TemplateReader};

mock! {
    pub Repository {}

    impl TemplateReader for Repository {
        fn get_by_id(&self, id: TemplateId) -> RepositoryResult<Option<PageTemplate>>;
        fn get_list(&self, criteria: SearchCriteria) -> RepositoryResult<SearchResult>;
    }
}
