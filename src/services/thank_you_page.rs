use std::collections::BTreeMap;

use crate::criteria::CriteriaBuilder;
use crate::domain::types::TemplateId;
use crate::dto::thank_you_page::{ListTemplatesArgs, TemplateEntry, TemplateListResponse};
use crate::pagination::PageInfo;
use crate::repository::TemplateReader;
use crate::services::{FeatureGate, ServiceError, ServiceResult};

/// Resolves the paginated thank-you-page list query.
///
/// The criteria builder decides what the passthrough argument keys mean, but
/// the page window always comes from the validated `currentPage`/`pageSize`
/// arguments, whatever the builder produced. `page_info` echoes the paging the
/// repository reports back, while the page-count arithmetic sticks to the
/// requested values.
pub fn list_thank_you_pages<G, B, R>(
    gate: &G,
    builder: &B,
    repo: &R,
    field_name: &str,
    args: ListTemplatesArgs,
) -> ServiceResult<TemplateListResponse>
where
    G: FeatureGate + ?Sized,
    B: CriteriaBuilder + ?Sized,
    R: TemplateReader + ?Sized,
{
    if !gate.is_enabled() {
        return Err(ServiceError::FeatureDisabled);
    }
    if args.current_page < 1 {
        return Err(ServiceError::InvalidArgument(
            "currentPage must be greater than 0".to_string(),
        ));
    }
    if args.page_size < 1 {
        return Err(ServiceError::InvalidArgument(
            "pageSize must be greater than 0".to_string(),
        ));
    }

    let requested_page = args.current_page as usize;
    let requested_size = args.page_size as usize;

    let criteria = builder
        .build(field_name, &args)
        .paginate(requested_page, requested_size);
    let result = repo.get_list(criteria)?;

    let mut items = BTreeMap::new();
    for template in result.items {
        let id = template.id;
        let condition = repo.data_model_to_array(&template.condition);
        items.insert(id, TemplateEntry::from_model(template, condition));
    }

    // The repository may echo a page size of 0.
    let total_pages = if result.criteria.page_size == 0 {
        0
    } else {
        result.total_count.div_ceil(requested_size)
    };

    if result.total_count > 0 && requested_page > total_pages {
        return Err(ServiceError::OutOfRange {
            current_page: result.criteria.current_page,
            total_pages,
        });
    }

    Ok(TemplateListResponse {
        total_count: result.total_count,
        items,
        page_info: PageInfo {
            page_size: result.criteria.page_size,
            current_page: result.criteria.current_page,
            total_pages,
        },
    })
}

/// Fetches a single template by id in its reshaped response form.
pub fn get_thank_you_page<G, R>(
    gate: &G,
    repo: &R,
    id: TemplateId,
) -> ServiceResult<Option<TemplateEntry>>
where
    G: FeatureGate + ?Sized,
    R: TemplateReader + ?Sized,
{
    if !gate.is_enabled() {
        return Err(ServiceError::FeatureDisabled);
    }

    let Some(template) = repo.get_by_id(id)? else {
        return Ok(None);
    };
    let condition = repo.data_model_to_array(&template.condition);
    Ok(Some(TemplateEntry::from_model(template, condition)))
}
