//! [`Query`] collection related to [`Link`]s.

use common::operations::By;

use crate::domain::Link;
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries the feed of all [`Link`]s in the storage retrieval order.
pub type Feed = DatabaseQuery<By<Vec<Link>, ()>>;

impl Feed {
    /// Creates a new [`Feed`] query.
    #[must_use]
    pub fn all() -> Self {
        Self::by(())
    }
}

#[cfg(test)]
mod spec {
    use common::operations::{By, Select};
    use tracerr::Traced;

    use crate::{
        domain::{link, Link},
        infra::database,
        Query as _, Service,
    };

    use super::Feed;

    /// [`Database`][0] stub returning a fixed pair of [`Link`]s.
    ///
    /// [0]: crate::infra::Database
    #[derive(Clone, Copy, Debug)]
    struct Db;

    impl common::Handler<Select<By<Vec<Link>, ()>>> for Db {
        type Ok = Vec<Link>;
        type Err = Traced<database::Error>;

        async fn execute(
            &self,
            _: Select<By<Vec<Link>, ()>>,
        ) -> Result<Self::Ok, Self::Err> {
            Ok([(1, "first"), (2, "second")]
                .into_iter()
                .map(|(id, description)| Link {
                    id: id.into(),
                    description: description.into(),
                    url: format!("https://example.com/{id}").into(),
                })
                .collect())
        }
    }

    #[tokio::test]
    async fn preserves_storage_retrieval_order() {
        let links = Service::new(Db).execute(Feed::all()).await.unwrap();

        assert_eq!(
            links.iter().map(|l| l.id).collect::<Vec<_>>(),
            [link::Id::from(1), link::Id::from(2)],
        );
    }
}
