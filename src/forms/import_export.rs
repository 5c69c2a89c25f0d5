use std::collections::{HashMap, HashSet};
use std::io::{Read, Seek, SeekFrom};

use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};
use calamine::{Data, Reader, open_workbook_auto};
use thiserror::Error;

use crate::domain::celebrity::NewCelebrity;
use crate::domain::types::{
    Biography, Category, CelebrityName, EventType, Gender, ImageRef, Language, Location,
    SocialLink, TypeConstraintError,
};
use crate::forms::celebrities::{parse_tags, resolve_slug};

const REQUIRED_HEADERS: [&str; 6] = ["name", "category", "image", "bio", "gender", "location"];

const OPTIONAL_HEADERS: [&str; 5] = [
    "slug",
    "social_links",
    "languages",
    "event_types",
    "is_featured",
];

/// Separator for list-valued cells, e.g. `Hindi;English`.
pub const LIST_SEPARATOR: char = ';';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadFormat {
    Csv,
    Xlsx,
}

impl TryFrom<&str> for UploadFormat {
    type Error = UploadParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "xlsx" => Ok(Self::Xlsx),
            other => Err(UploadParseError::InvalidFormat(other.to_string())),
        }
    }
}

#[derive(MultipartForm)]
pub struct UploadCelebritiesForm {
    #[multipart(limit = "10MB")]
    pub file: TempFile,
    pub format: Text<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUploadRow {
    pub row_number: usize,
    pub values: HashMap<String, String>,
}

impl ParsedUploadRow {
    fn value(&self, header: &str) -> &str {
        self.values.get(header).map_or("", String::as_str)
    }

    fn list(&self, header: &str) -> Vec<String> {
        self.value(header)
            .split(LIST_SEPARATOR)
            .map(|item| item.trim().to_string())
            .collect()
    }

    /// Build an insertable celebrity from the row's cells.
    pub fn to_new_celebrity(&self) -> Result<NewCelebrity, TypeConstraintError> {
        let name = self.value("name");
        let slug = Some(self.value("slug").to_string());
        Ok(NewCelebrity {
            slug: resolve_slug(slug, name)?,
            name: CelebrityName::new(name)?,
            category: Category::try_from(self.value("category"))
                .or_else(|err| Category::from_slug(self.value("category")).ok_or(err))?,
            image: ImageRef::new(self.value("image"))?,
            bio: Biography::new(self.value("bio"))?,
            social_links: parse_tags(self.list("social_links"), SocialLink::new)?,
            gender: Gender::new(self.value("gender"))?,
            languages: parse_tags(self.list("languages"), Language::new)?,
            location: Location::new(self.value("location"))?,
            event_types: parse_tags(self.list("event_types"), EventType::new)?,
            is_featured: parse_flag(self.value("is_featured"))?,
        })
    }
}

fn parse_flag(value: &str) -> Result<bool, TypeConstraintError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "false" | "0" | "no" => Ok(false),
        "true" | "1" | "yes" => Ok(true),
        other => Err(TypeConstraintError::InvalidValue(format!(
            "is_featured must be true or false, got {other}"
        ))),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUpload {
    pub format: UploadFormat,
    pub headers: Vec<String>,
    pub rows: Vec<ParsedUploadRow>,
}

#[derive(Debug, Error)]
pub enum UploadParseError {
    #[error("invalid upload format: {0}")]
    InvalidFormat(String),
    #[error("uploaded file is missing")]
    MissingFile,
    #[error("uploaded file extension does not match selected format")]
    ExtensionMismatch,
    #[error("uploaded file content type does not match selected format")]
    ContentTypeMismatch,
    #[error("failed to read uploaded file")]
    ReadFailed,
    #[error("failed to parse CSV")]
    CsvParseFailed,
    #[error("failed to parse XLSX")]
    XlsxParseFailed,
    #[error("uploaded file has no worksheet")]
    XlsxMissingSheet,
    #[error("header validation failed: {0}")]
    HeaderValidation(String),
}

impl From<std::io::Error> for UploadParseError {
    fn from(_: std::io::Error) -> Self {
        Self::ReadFailed
    }
}

impl From<csv::Error> for UploadParseError {
    fn from(_: csv::Error) -> Self {
        Self::CsvParseFailed
    }
}

impl From<calamine::Error> for UploadParseError {
    fn from(_: calamine::Error) -> Self {
        Self::XlsxParseFailed
    }
}

pub fn parse_upload(form: &mut UploadCelebritiesForm) -> Result<ParsedUpload, UploadParseError> {
    let format = UploadFormat::try_from(form.format.as_str())?;

    validate_file_meta(form, format)?;

    let (headers, rows) = match format {
        UploadFormat::Csv => {
            let file = form.file.file.as_file_mut();
            file.seek(SeekFrom::Start(0))?;
            let mut content = String::new();
            file.read_to_string(&mut content)?;
            read_csv_rows(&content)?
        }
        UploadFormat::Xlsx => parse_xlsx_rows(form)?,
    };

    build_upload(format, headers, rows)
}

/// Parse CSV text that is already in memory, e.g. a seed file.
pub fn parse_csv_str(content: &str) -> Result<ParsedUpload, UploadParseError> {
    let (headers, rows) = read_csv_rows(content)?;
    build_upload(UploadFormat::Csv, headers, rows)
}

fn build_upload(
    format: UploadFormat,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
) -> Result<ParsedUpload, UploadParseError> {
    let normalized_headers = normalize_headers(headers)?;
    validate_headers(&normalized_headers)?;

    let parsed_rows = rows
        .into_iter()
        .enumerate()
        .filter(|(_, row)| row.iter().any(|cell| !cell.trim().is_empty()))
        .map(|(idx, row)| {
            let mut values = HashMap::new();
            for (col_idx, header) in normalized_headers.iter().enumerate() {
                let value = row.get(col_idx).cloned().unwrap_or_default();
                values.insert(header.clone(), value.trim().to_string());
            }
            ParsedUploadRow {
                row_number: idx + 2,
                values,
            }
        })
        .collect::<Vec<_>>();

    Ok(ParsedUpload {
        format,
        headers: normalized_headers,
        rows: parsed_rows,
    })
}

fn normalize_headers(headers: Vec<String>) -> Result<Vec<String>, UploadParseError> {
    let normalized = headers
        .into_iter()
        .map(|header| header.trim().to_ascii_lowercase())
        .collect::<Vec<_>>();

    if normalized.is_empty() {
        return Err(UploadParseError::HeaderValidation(
            "missing header row".to_string(),
        ));
    }

    if normalized.iter().any(|header| header.is_empty()) {
        return Err(UploadParseError::HeaderValidation(
            "header contains empty column name".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for header in &normalized {
        if !seen.insert(header.clone()) {
            return Err(UploadParseError::HeaderValidation(format!(
                "duplicate header column: {header}"
            )));
        }
    }

    Ok(normalized)
}

fn validate_headers(headers: &[String]) -> Result<(), UploadParseError> {
    let header_set = headers.iter().map(String::as_str).collect::<HashSet<_>>();

    let missing = REQUIRED_HEADERS
        .iter()
        .filter(|header| !header_set.contains(*header))
        .copied()
        .collect::<Vec<_>>();
    if !missing.is_empty() {
        return Err(UploadParseError::HeaderValidation(format!(
            "missing required columns: {}",
            missing.join(",")
        )));
    }

    for header in headers {
        let known = REQUIRED_HEADERS.contains(&header.as_str())
            || OPTIONAL_HEADERS.contains(&header.as_str());
        if !known {
            return Err(UploadParseError::HeaderValidation(format!(
                "unsupported column: {header}"
            )));
        }
    }

    Ok(())
}

fn validate_file_meta(
    form: &UploadCelebritiesForm,
    format: UploadFormat,
) -> Result<(), UploadParseError> {
    let Some(file_name) = form.file.file_name.as_ref() else {
        return Err(UploadParseError::MissingFile);
    };

    let extension_ok = match format {
        UploadFormat::Csv => file_name.to_ascii_lowercase().ends_with(".csv"),
        UploadFormat::Xlsx => file_name.to_ascii_lowercase().ends_with(".xlsx"),
    };

    if !extension_ok {
        return Err(UploadParseError::ExtensionMismatch);
    }

    if let Some(content_type) = form.file.content_type.as_ref() {
        let mime = content_type.essence_str();
        let content_type_ok = match format {
            UploadFormat::Csv => matches!(
                mime,
                "text/csv" | "application/csv" | "application/vnd.ms-excel"
            ),
            UploadFormat::Xlsx => {
                mime == "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        };

        if !content_type_ok {
            return Err(UploadParseError::ContentTypeMismatch);
        }
    }

    Ok(())
}

fn read_csv_rows(content: &str) -> Result<(Vec<String>, Vec<Vec<String>>), UploadParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::None)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()?
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|s| s.to_string()).collect());
    }

    Ok((headers, rows))
}

fn parse_xlsx_rows(
    form: &mut UploadCelebritiesForm,
) -> Result<(Vec<String>, Vec<Vec<String>>), UploadParseError> {
    let path = form.file.file.path().to_path_buf();
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(UploadParseError::XlsxMissingSheet)??;

    let mut iter = range.rows();
    let Some(header_row) = iter.next() else {
        return Err(UploadParseError::HeaderValidation(
            "missing header row".to_string(),
        ));
    };

    let headers = header_row.iter().map(cell_to_string).collect::<Vec<_>>();

    let mut rows = Vec::new();
    for row in iter {
        rows.push(row.iter().map(cell_to_string).collect::<Vec<_>>());
    }

    Ok((headers, rows))
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        _ => cell.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = "\
name,category,image,bio,gender,location,languages,event_types,is_featured
Priya Sharma,Singers,/assets/celebrities/priya.jpg,Playback singer,Female,Mumbai,Hindi;English;Tamil,Wedding;Concert,true
Dr. Arun Sharma,motivational-speakers,/assets/celebrities/arun.jpg,Leadership coach,Male,Pune,English,Corporate,
";

    #[test]
    fn parses_rows_with_lists_and_flags() {
        let upload = parse_csv_str(SEED).unwrap();
        assert_eq!(upload.rows.len(), 2);
        assert_eq!(upload.rows[0].row_number, 2);

        let priya = upload.rows[0].to_new_celebrity().unwrap();
        assert_eq!(priya.slug, "priya-sharma");
        assert_eq!(priya.languages.len(), 3);
        assert!(priya.is_featured);

        let arun = upload.rows[1].to_new_celebrity().unwrap();
        assert_eq!(arun.slug, "dr-arun-sharma");
        assert_eq!(arun.category, Category::MotivationalSpeakers);
        assert!(!arun.is_featured);
        assert!(arun.social_links.is_empty());
    }

    #[test]
    fn rejects_missing_required_column() {
        let err = parse_csv_str("name,category\nPriya,Singers\n")
            .unwrap_err()
            .to_string();
        assert!(err.contains("missing required columns"));
        assert!(err.contains("image"));
    }

    #[test]
    fn rejects_unknown_column() {
        let headers = ["name", "category", "image", "bio", "gender", "location", "fee"]
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>();
        let err = validate_headers(&headers).unwrap_err().to_string();
        assert!(err.contains("unsupported column: fee"));
    }

    #[test]
    fn header_names_are_case_insensitive() {
        let upload = parse_csv_str(
            "Name,Category,Image,Bio,Gender,Location\nNeha Patel,Influencers,/n.jpg,Creator,Female,Ahmedabad\n",
        )
        .unwrap();
        assert_eq!(upload.headers[0], "name");
    }

    #[test]
    fn invalid_flag_is_reported_for_the_row() {
        let upload = parse_csv_str(
            "name,category,image,bio,gender,location,is_featured\nNeha Patel,Influencers,/n.jpg,Creator,Female,Ahmedabad,maybe\n",
        )
        .unwrap();
        assert!(upload.rows[0].to_new_celebrity().is_err());
    }
}
