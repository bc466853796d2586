//! [`Command`] for posting a new [`Link`].

use common::operations::Insert;
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::link::{Description, Url};
use crate::{
    domain::{link, Link},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for posting a new [`Link`].
#[derive(Clone, Debug)]
pub struct PostLink {
    /// [`Url`] of a new [`Link`].
    pub url: link::Url,

    /// [`Description`] of a new [`Link`].
    pub description: link::Description,
}

impl<Db> Command<PostLink> for Service<Db>
where
    Db: Database<Insert<link::New>, Ok = Link, Err = Traced<database::Error>>,
{
    type Ok = Link;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: PostLink) -> Result<Self::Ok, Self::Err> {
        let PostLink { url, description } = cmd;

        self.database()
            .execute(Insert(link::New { description, url }))
            .await
            .map_err(tracerr::wrap!())
    }
}

/// Error of [`PostLink`] [`Command`] execution.
pub type ExecutionError = database::Error;

#[cfg(test)]
mod spec {
    use common::operations::Insert;
    use tracerr::Traced;

    use crate::{
        domain::{link, Link},
        infra::database,
        Command as _, Service,
    };

    use super::PostLink;

    /// [`Database`][0] stub assigning the predefined ID to inserted [`Link`]s.
    ///
    /// [0]: crate::infra::Database
    #[derive(Clone, Copy, Debug)]
    struct Db(i32);

    impl common::Handler<Insert<link::New>> for Db {
        type Ok = Link;
        type Err = Traced<database::Error>;

        async fn execute(
            &self,
            Insert(new): Insert<link::New>,
        ) -> Result<Self::Ok, Self::Err> {
            let link::New { description, url } = new;
            Ok(Link {
                id: self.0.into(),
                description,
                url,
            })
        }
    }

    #[tokio::test]
    async fn returns_created_link_with_assigned_id() {
        let service = Service::new(Db(1));

        let link = service
            .execute(PostLink {
                url: "https://example.com".into(),
                description: "Example".into(),
            })
            .await
            .unwrap();

        assert_eq!(link.id, 1.into());
        assert_eq!(link.url.to_string(), "https://example.com");
        assert_eq!(link.description.to_string(), "Example");
    }
}
