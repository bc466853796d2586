//! [`Command`] for posting a new [`Comment`].

use common::operations::Insert;
use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::{comment::Text, Link};
use crate::{
    domain::{comment, link, Comment},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for posting a new [`Comment`] to a [`Link`].
#[derive(Clone, Debug)]
pub struct PostComment {
    /// [`link::Id`] of the [`Link`] to post a new [`Comment`] to.
    pub link_id: link::Id,

    /// [`Text`] of a new [`Comment`].
    pub text: comment::Text,
}

impl<Db> Command<PostComment> for Service<Db>
where
    Db: Database<
        Insert<comment::New>,
        Ok = Comment,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Comment;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: PostComment) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let PostComment { link_id, text } = cmd;

        self.database()
            .execute(Insert(comment::New { text, link_id }))
            .await
            .map_err(|e| {
                // The only foreign key a `Comment` carries is the one
                // referencing its `Link`.
                if matches!(
                    e.as_ref(),
                    database::Error::ForeignKeyViolation(_),
                ) {
                    tracerr::new!(E::LinkNotExists(link_id))
                } else {
                    tracerr::map_from_and_wrap!(=> E)(e)
                }
            })
    }
}

/// Error of [`PostComment`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    ///
    /// [`Database`]: crate::infra::Database
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Link`] to post a [`Comment`] to does not exist.
    #[display("`Link` with `{_0}` ID does not exist")]
    LinkNotExists(#[error(not(source))] link::Id),
}

#[cfg(test)]
mod spec {
    use common::operations::Insert;
    use tracerr::Traced;

    use crate::{
        domain::{comment, Comment},
        infra::database,
        Command as _, Service,
    };

    use super::{ExecutionError, PostComment};

    /// [`Database`][0] stub either assigning the predefined ID to inserted
    /// [`Comment`]s, or failing with the predefined error.
    ///
    /// [0]: crate::infra::Database
    #[derive(Clone, Copy, Debug)]
    enum Db {
        Assign(i32),
        ForeignKeyViolation,
        #[cfg(feature = "postgres")]
        Unavailable,
    }

    impl common::Handler<Insert<comment::New>> for Db {
        type Ok = Comment;
        type Err = Traced<database::Error>;

        async fn execute(
            &self,
            Insert(new): Insert<comment::New>,
        ) -> Result<Self::Ok, Self::Err> {
            let comment::New { text, link_id } = new;
            match self {
                Self::Assign(id) => Ok(Comment {
                    id: (*id).into(),
                    text,
                    link_id,
                }),
                Self::ForeignKeyViolation => {
                    Err(tracerr::new!(database::Error::ForeignKeyViolation(
                        "comments_link_id_fkey".into(),
                    )))
                }
                #[cfg(feature = "postgres")]
                Self::Unavailable => {
                    Err(tracerr::new!(database::Error::Postgres(
                        database::postgres::connection::PoolError::Closed
                            .into(),
                    )))
                }
            }
        }
    }

    #[tokio::test]
    async fn returns_created_comment_with_assigned_id() {
        let service = Service::new(Db::Assign(1));

        let comment = service
            .execute(PostComment {
                link_id: 7.into(),
                text: "nice".into(),
            })
            .await
            .unwrap();

        assert_eq!(comment.id, 1.into());
        assert_eq!(comment.link_id, 7.into());
        assert_eq!(comment.text.to_string(), "nice");
    }

    #[tokio::test]
    async fn reports_missing_link_on_foreign_key_violation() {
        let service = Service::new(Db::ForeignKeyViolation);

        let err = service
            .execute(PostComment {
                link_id: 999.into(),
                text: "x".into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::LinkNotExists(id) if *id == 999.into(),
        ));
    }

    #[cfg(feature = "postgres")]
    #[tokio::test]
    async fn passes_other_database_errors_through() {
        let service = Service::new(Db::Unavailable);

        let err = service
            .execute(PostComment {
                link_id: 1.into(),
                text: "x".into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::Db(_)));
    }
}
