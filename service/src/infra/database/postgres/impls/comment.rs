//! [`Comment`]-related [`Database`] implementations.

use common::operations::{By, Insert, Select};
use tracerr::Traced;

use crate::{
    domain::{comment, link, Comment},
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
};

impl<C> Database<Select<By<Option<Comment>, comment::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<Comment>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Comment>, comment::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();

        const SQL: &str = "\
            SELECT id, text, link_id \
            FROM comments \
            WHERE id = $1::INT4";
        Ok(self
            .query_opt(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())?
            .map(|row| Comment {
                id: row.get("id"),
                text: row.get("text"),
                link_id: row.get("link_id"),
            }))
    }
}

impl<C> Database<Select<By<Vec<Comment>, link::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<Comment>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Comment>, link::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let link_id = by.into_inner();

        const SQL: &str = "\
            SELECT id, text, link_id \
            FROM comments \
            WHERE link_id = $1::INT4";
        Ok(self
            .query(SQL, &[&link_id])
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .map(|row| Comment {
                id: row.get("id"),
                text: row.get("text"),
                link_id: row.get("link_id"),
            })
            .collect())
    }
}

impl<C> Database<Insert<comment::New>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Comment;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(new): Insert<comment::New>,
    ) -> Result<Self::Ok, Self::Err> {
        let comment::New { text, link_id } = new;

        const SQL: &str = "\
            INSERT INTO comments (text, link_id) \
            VALUES ($1::VARCHAR, $2::INT4) \
            RETURNING id, text, link_id";
        self.query_one(SQL, &[&text, &link_id])
            .await
            .map_err(tracerr::wrap!())
            .map(|row| Comment {
                id: row.get("id"),
                text: row.get("text"),
                link_id: row.get("link_id"),
            })
    }
}
