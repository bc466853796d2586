//! [`Query`] collection related to [`Comment`]s.

use common::operations::By;

use crate::domain::{comment, link, Comment};
#[cfg(doc)]
use crate::{domain::Link, Query};

use super::DatabaseQuery;

/// Queries a [`Comment`] by its [`comment::Id`].
pub type ById = DatabaseQuery<By<Option<Comment>, comment::Id>>;

/// Queries all [`Comment`]s posted to a [`Link`] by its [`link::Id`].
pub type ByLink = DatabaseQuery<By<Vec<Comment>, link::Id>>;

#[cfg(test)]
mod spec {
    use common::operations::{By, Select};
    use tracerr::Traced;

    use crate::{
        domain::{comment, link, Comment},
        infra::database,
        Query as _, Service,
    };

    use super::{ById, ByLink};

    /// [`Database`][0] stub holding a single [`Comment`] posted to a single
    /// [`Link`].
    ///
    /// [0]: crate::infra::Database
    #[derive(Clone, Copy, Debug)]
    struct Db;

    impl Db {
        fn comment() -> Comment {
            Comment {
                id: 1.into(),
                text: "nice".into(),
                link_id: 1.into(),
            }
        }
    }

    impl common::Handler<Select<By<Option<Comment>, comment::Id>>> for Db {
        type Ok = Option<Comment>;
        type Err = Traced<database::Error>;

        async fn execute(
            &self,
            Select(by): Select<By<Option<Comment>, comment::Id>>,
        ) -> Result<Self::Ok, Self::Err> {
            Ok((by.into_inner() == Self::comment().id)
                .then(Self::comment))
        }
    }

    impl common::Handler<Select<By<Vec<Comment>, link::Id>>> for Db {
        type Ok = Vec<Comment>;
        type Err = Traced<database::Error>;

        async fn execute(
            &self,
            Select(by): Select<By<Vec<Comment>, link::Id>>,
        ) -> Result<Self::Ok, Self::Err> {
            Ok((by.into_inner() == Self::comment().link_id)
                .then(Self::comment)
                .into_iter()
                .collect())
        }
    }

    #[tokio::test]
    async fn finds_comment_by_its_id() {
        let comment = Service::new(Db)
            .execute(ById::by(1.into()))
            .await
            .unwrap()
            .expect("`Comment` to be found");

        assert_eq!(comment.id, 1.into());
        assert_eq!(comment.text.to_string(), "nice");
    }

    #[tokio::test]
    async fn resolves_to_absence_when_no_comment_matches() {
        let comment =
            Service::new(Db).execute(ById::by(999.into())).await.unwrap();

        assert!(comment.is_none(), "unexpected `Comment`: {comment:?}");
    }

    #[tokio::test]
    async fn lists_comments_of_a_link() {
        let comments =
            Service::new(Db).execute(ByLink::by(1.into())).await.unwrap();

        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].text.to_string(), "nice");
    }

    #[tokio::test]
    async fn lists_no_comments_for_a_link_without_any() {
        let comments =
            Service::new(Db).execute(ByLink::by(2.into())).await.unwrap();

        assert!(comments.is_empty(), "unexpected `Comment`s: {comments:?}");
    }
}
