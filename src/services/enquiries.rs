use crate::domain::types::CelebrityName;
use crate::dto::enquiries::EnquiryDto;
use crate::forms::enquiries::{EnquiryForm, EnquiryFormPayload};
use crate::notifier::EnquiryNotifier;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{CelebrityReader, EnquiryListQuery, EnquiryReader, EnquiryWriter};
use crate::services::import_export::{DownloadFile, DownloadFormat, render_download_file};

use super::{OperatorAccess, ServiceError, ServiceResult};

const EXPORT_HEADERS: [&str; 8] = [
    "id",
    "created_at",
    "celebrity_id",
    "celebrity_name",
    "user_name",
    "email",
    "contact",
    "purpose",
];

/// Validate, store and announce a new enquiry.
///
/// Nothing is stored when validation fails. Once stored, the enquiry is
/// handed to `notifier`; a notification failure is logged and does not
/// change the result.
pub async fn submit_enquiry<R, N>(
    form: EnquiryForm,
    repo: &R,
    notifier: &N,
) -> ServiceResult<EnquiryDto>
where
    R: CelebrityReader + EnquiryWriter,
    N: EnquiryNotifier + ?Sized,
{
    let payload = EnquiryFormPayload::try_from(form)?;

    let current_name: CelebrityName = match repo.get_celebrity_by_id(payload.celebrity_id) {
        Ok(Some(celebrity)) => celebrity.name,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get celebrity {}: {e}", payload.celebrity_id);
            return Err(ServiceError::Internal);
        }
    };

    let new_enquiry = payload.into_new_enquiry(current_name);
    let enquiry = match repo.create_enquiry(&new_enquiry) {
        Ok(enquiry) => enquiry,
        Err(e) => {
            log::error!("Failed to create enquiry: {e}");
            return Err(ServiceError::Internal);
        }
    };

    log::info!(
        "Stored enquiry {} for celebrity {}",
        enquiry.id,
        enquiry.celebrity_id
    );

    if let Err(e) = notifier.notify(&enquiry).await {
        log::error!("Failed to send notification for enquiry {}: {e}", enquiry.id);
    }

    Ok(enquiry.into())
}

pub fn list_enquiries<R>(
    page: usize,
    _access: OperatorAccess,
    repo: &R,
) -> ServiceResult<Paginated<EnquiryDto>>
where
    R: EnquiryReader,
{
    let page = page.max(1);
    let query = EnquiryListQuery::default().paginate(page, DEFAULT_ITEMS_PER_PAGE);
    match repo.list_enquiries(query) {
        Ok((total, enquiries)) => Ok(Paginated::new(
            enquiries.into_iter().map(EnquiryDto::from).collect(),
            page,
            total,
            DEFAULT_ITEMS_PER_PAGE,
        )),
        Err(e) => {
            log::error!("Failed to list enquiries: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Every stored enquiry as a CSV or XLSX download, newest first.
pub fn export_enquiries<R>(
    format: &str,
    _access: OperatorAccess,
    repo: &R,
) -> ServiceResult<DownloadFile>
where
    R: EnquiryReader,
{
    let format = DownloadFormat::try_from(format)
        .map_err(|e| ServiceError::Form(e.to_string()))?;

    let enquiries = match repo.list_enquiries(EnquiryListQuery::default()) {
        Ok((_total, enquiries)) => enquiries,
        Err(e) => {
            log::error!("Failed to list enquiries for export: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let rows = enquiries
        .into_iter()
        .map(|e| {
            vec![
                e.id.to_string(),
                e.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
                e.celebrity_id.to_string(),
                e.celebrity_name.into_inner(),
                e.user_name.into_inner(),
                e.email.into_inner(),
                e.contact.into_inner(),
                e.purpose.into_inner(),
            ]
        })
        .collect::<Vec<_>>();

    render_download_file("enquiries", format, &EXPORT_HEADERS, &rows).map_err(|e| {
        log::error!("Failed to render enquiry export: {e}");
        ServiceError::Internal
    })
}
