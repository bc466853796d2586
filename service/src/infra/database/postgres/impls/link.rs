//! [`Link`]-related [`Database`] implementations.

use common::operations::{By, Insert, Select};
use tracerr::Traced;

use crate::{
    domain::{link, Link},
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
};

impl<C> Database<Select<By<Vec<Link>, ()>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<Link>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Link>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        const SQL: &str = "\
            SELECT id, description, url \
            FROM links";
        Ok(self
            .query(SQL, &[])
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .map(|row| Link {
                id: row.get("id"),
                description: row.get("description"),
                url: row.get("url"),
            })
            .collect())
    }
}

impl<C> Database<Insert<link::New>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Link;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(new): Insert<link::New>,
    ) -> Result<Self::Ok, Self::Err> {
        let link::New { description, url } = new;

        const SQL: &str = "\
            INSERT INTO links (description, url) \
            VALUES ($1::VARCHAR, $2::VARCHAR) \
            RETURNING id, description, url";
        self.query_one(SQL, &[&description, &url])
            .await
            .map_err(tracerr::wrap!())
            .map(|row| Link {
                id: row.get("id"),
                description: row.get("description"),
                url: row.get("url"),
            })
    }
}
