use diesel::prelude::*;

use crate::domain::celebrity::{Celebrity, NewCelebrity};
use crate::domain::types::{CelebrityId, Slug};
use crate::models::celebrity::{Celebrity as DbCelebrity, NewCelebrity as DbNewCelebrity};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CelebrityReader, CelebrityWriter, DieselRepository};

impl CelebrityReader for DieselRepository {
    fn list_celebrities(&self) -> RepositoryResult<Vec<Celebrity>> {
        use crate::schema::celebrities;

        let mut conn = self.conn()?;

        let items = celebrities::table
            .order(celebrities::id.asc())
            .load::<DbCelebrity>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Celebrity>, _>>()?;

        Ok(items)
    }

    fn get_celebrity_by_id(&self, id: CelebrityId) -> RepositoryResult<Option<Celebrity>> {
        use crate::schema::celebrities;

        let mut conn = self.conn()?;

        let celebrity = celebrities::table
            .filter(celebrities::id.eq(id.get()))
            .first::<DbCelebrity>(&mut conn)
            .optional()?;

        let celebrity = celebrity.map(TryInto::try_into).transpose()?;
        Ok(celebrity)
    }

    fn get_celebrity_by_slug(&self, slug: &Slug) -> RepositoryResult<Option<Celebrity>> {
        use crate::schema::celebrities;

        let mut conn = self.conn()?;

        let celebrity = celebrities::table
            .filter(celebrities::slug.eq(slug.as_str()))
            .first::<DbCelebrity>(&mut conn)
            .optional()?;

        let celebrity = celebrity.map(TryInto::try_into).transpose()?;
        Ok(celebrity)
    }
}

impl CelebrityWriter for DieselRepository {
    fn create_celebrity(&self, celebrity: &NewCelebrity) -> RepositoryResult<Celebrity> {
        use crate::schema::celebrities;

        let mut conn = self.conn()?;
        let db_celebrity = DbNewCelebrity::from(celebrity);

        let created = diesel::insert_into(celebrities::table)
            .values(&db_celebrity)
            .returning(DbCelebrity::as_returning())
            .get_result::<DbCelebrity>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn increment_views(&self, id: CelebrityId) -> RepositoryResult<usize> {
        use crate::schema::celebrities;

        let mut conn = self.conn()?;

        let affected = diesel::update(celebrities::table.filter(celebrities::id.eq(id.get())))
            .set(celebrities::views.eq(celebrities::views + 1))
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn increment_likes(&self, id: CelebrityId) -> RepositoryResult<usize> {
        use crate::schema::celebrities;

        let mut conn = self.conn()?;

        let affected = diesel::update(celebrities::table.filter(celebrities::id.eq(id.get())))
            .set(celebrities::likes.eq(celebrities::likes + 1))
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn decrement_likes(&self, id: CelebrityId) -> RepositoryResult<usize> {
        use crate::schema::celebrities;

        let mut conn = self.conn()?;

        let affected = diesel::update(
            celebrities::table
                .filter(celebrities::id.eq(id.get()))
                .filter(celebrities::likes.gt(0)),
        )
        .set(celebrities::likes.eq(celebrities::likes - 1))
        .execute(&mut conn)?;

        Ok(affected)
    }
}
