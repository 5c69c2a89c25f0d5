use serde::Serialize;
use thiserror::Error;

use crate::domain::types::ContactNumber;
use crate::forms::import_export::ParsedUpload;
use crate::repository::CelebrityWriter;
use crate::repository::errors::RepositoryError;

use super::{OperatorAccess, ServiceResult};

/// Row-level upload error used for operator reporting.
#[derive(Debug, Clone, Serialize)]
pub struct UploadRowError {
    pub row_number: usize,
    pub slug: Option<String>,
    pub message: String,
}

/// Aggregated upload outcome report.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UploadReport {
    pub total_rows: usize,
    pub created: usize,
    pub skipped: usize,
    pub errors: Vec<UploadRowError>,
}

impl UploadReport {
    pub fn with_total(total_rows: usize) -> Self {
        Self {
            total_rows,
            ..Self::default()
        }
    }

    pub fn push_error(
        &mut self,
        row_number: usize,
        slug: Option<String>,
        message: impl Into<String>,
    ) {
        self.skipped += 1;
        self.errors.push(UploadRowError {
            row_number,
            slug,
            message: message.into(),
        });
    }
}

/// Create one celebrity per parsed row. Invalid rows and duplicate slugs are
/// reported and skipped; the remaining rows are still imported.
pub fn import_celebrities<R>(
    upload: &ParsedUpload,
    _access: OperatorAccess,
    repo: &R,
) -> ServiceResult<UploadReport>
where
    R: CelebrityWriter,
{
    let mut report = UploadReport::with_total(upload.rows.len());

    for row in &upload.rows {
        let celebrity = match row.to_new_celebrity() {
            Ok(celebrity) => celebrity,
            Err(e) => {
                report.push_error(row.row_number, None, e.to_string());
                continue;
            }
        };

        match repo.create_celebrity(&celebrity) {
            Ok(_) => report.created += 1,
            Err(RepositoryError::ConstraintViolation(_)) => {
                report.push_error(
                    row.row_number,
                    Some(celebrity.slug.to_string()),
                    "slug already exists",
                );
            }
            Err(e) => {
                log::error!("Failed to import row {}: {e}", row.row_number);
                report.push_error(
                    row.row_number,
                    Some(celebrity.slug.to_string()),
                    "failed to store row",
                );
            }
        }
    }

    log::info!(
        "Celebrity import finished: {} created, {} skipped of {}",
        report.created,
        report.skipped,
        report.total_rows
    );
    Ok(report)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadFormat {
    Csv,
    Xlsx,
}

impl TryFrom<&str> for DownloadFormat {
    type Error = DownloadError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "xlsx" => Ok(Self::Xlsx),
            other => Err(DownloadError::InvalidFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DownloadFile {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("invalid download format: {0}")]
    InvalidFormat(String),
    #[error("failed to render csv")]
    CsvRender,
    #[error("failed to render xlsx")]
    XlsxRender,
}

pub fn render_download_file(
    base_name: &str,
    format: DownloadFormat,
    headers: &[&str],
    rows: &[Vec<String>],
) -> Result<DownloadFile, DownloadError> {
    match format {
        DownloadFormat::Csv => {
            let mut writer = csv::Writer::from_writer(vec![]);
            writer
                .write_record(headers)
                .map_err(|_| DownloadError::CsvRender)?;
            for row in rows {
                let escaped_row: Vec<String> =
                    row.iter().map(|value| escape_formula_cell(value)).collect();
                writer
                    .write_record(&escaped_row)
                    .map_err(|_| DownloadError::CsvRender)?;
            }
            let bytes = writer.into_inner().map_err(|_| DownloadError::CsvRender)?;
            Ok(DownloadFile {
                file_name: format!("{base_name}.csv"),
                content_type: "text/csv; charset=utf-8",
                bytes,
            })
        }
        DownloadFormat::Xlsx => {
            let mut workbook = rust_xlsxwriter::Workbook::new();
            let worksheet = workbook.add_worksheet();

            for (col_idx, header) in headers.iter().enumerate() {
                worksheet
                    .write_string(0, col_idx as u16, *header)
                    .map_err(|_| DownloadError::XlsxRender)?;
            }

            for (row_idx, row) in rows.iter().enumerate() {
                let sheet_row = (row_idx + 1) as u32;
                for (col_idx, value) in row.iter().enumerate() {
                    worksheet
                        .write_string(sheet_row, col_idx as u16, escape_formula_cell(value))
                        .map_err(|_| DownloadError::XlsxRender)?;
                }
            }

            let bytes = workbook
                .save_to_buffer()
                .map_err(|_| DownloadError::XlsxRender)?;
            Ok(DownloadFile {
                file_name: format!("{base_name}.xlsx"),
                content_type: "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
                bytes,
            })
        }
    }
}

/// Prefix cells a spreadsheet would evaluate as formulas.
///
/// Phone numbers such as `+91 98765 43210` hold only digits and separators
/// and are written as-is.
fn escape_formula_cell(value: &str) -> String {
    match value.chars().next() {
        Some('+' | '-') if ContactNumber::new(value).is_ok() => value.to_string(),
        Some('=' | '+' | '-' | '@') => format!("'{value}"),
        _ => value.to_string(),
    }
}
