use chrono::Utc;
use diesel::prelude::*;

use crate::domain::enquiry::{Enquiry, NewEnquiry};
use crate::models::enquiry::{Enquiry as DbEnquiry, NewEnquiry as DbNewEnquiry};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, EnquiryListQuery, EnquiryReader, EnquiryWriter};

impl EnquiryReader for DieselRepository {
    fn list_enquiries(&self, query: EnquiryListQuery) -> RepositoryResult<(usize, Vec<Enquiry>)> {
        use crate::schema::enquiries;

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = enquiries::table.into_boxed::<diesel::sqlite::Sqlite>();
            if let Some(celebrity_id) = query.celebrity_id {
                items = items.filter(enquiries::celebrity_id.eq(celebrity_id.get()));
            }
            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder();
        if let Some(pagination) = &query.pagination {
            items = items.offset(pagination.offset()).limit(pagination.limit());
        }

        let items = items
            .order((enquiries::created_at.desc(), enquiries::id.desc()))
            .load::<DbEnquiry>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Enquiry>, _>>()?;

        Ok((total, items))
    }
}

impl EnquiryWriter for DieselRepository {
    fn create_enquiry(&self, enquiry: &NewEnquiry) -> RepositoryResult<Enquiry> {
        use crate::schema::enquiries;

        let mut conn = self.conn()?;
        let db_enquiry = DbNewEnquiry::new(enquiry, Utc::now().naive_utc());

        let created = diesel::insert_into(enquiries::table)
            .values(&db_enquiry)
            .returning(DbEnquiry::as_returning())
            .get_result::<DbEnquiry>(&mut conn)?;

        Ok(created.try_into()?)
    }
}
