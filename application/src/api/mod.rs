//! GraphQL API definitions.

pub mod comment;
pub mod link;
mod mutation;
mod query;

use juniper::EmptySubscription;

use crate::Context;

pub use self::{
    comment::Comment, link::Link, mutation::Mutation, query::Query,
};

/// GraphQL schema.
pub type Schema =
    juniper::RootNode<'static, Query, Mutation, EmptySubscription<Context>>;

#[cfg(test)]
mod spec {
    use juniper::{graphql_value, EmptySubscription, Variables};
    use service::infra::Postgres;

    use crate::{config, Context, Service};

    use super::{Mutation, Query, Schema};

    fn schema() -> Schema {
        Schema::new(Query, Mutation, EmptySubscription::new())
    }

    /// Builds a [`Context`] over a lazily connecting [`Postgres`] client.
    ///
    /// No connection is established unless some resolver reaches for the
    /// database.
    fn context() -> Context {
        let conf = config::Postgres::default().into();
        let postgres = Postgres::new(&conf).expect("`Postgres` client");
        Context::new(Service::new(postgres))
    }

    #[tokio::test]
    async fn info_returns_api_description() {
        let (res, errors) = juniper::execute(
            "{ info }",
            None,
            &schema(),
            &Variables::new(),
            &context(),
        )
        .await
        .unwrap();

        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
        assert_eq!(
            res,
            graphql_value!({"info": "This is the API of a Hackernews Clone"}),
        );
    }

    #[tokio::test]
    async fn comment_with_non_numeric_id_resolves_to_absence() {
        let (res, errors) = juniper::execute(
            r#"{ comment(id: "not-a-number") { id } }"#,
            None,
            &schema(),
            &Variables::new(),
            &context(),
        )
        .await
        .unwrap();

        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
        assert_eq!(res, graphql_value!({"comment": null}));
    }

    #[tokio::test]
    async fn post_comment_with_non_numeric_link_id_reports_missing_link() {
        let (_, errors) = juniper::execute(
            r#"mutation { postComment(linkId: "ghost", text: "hi") { id } }"#,
            None,
            &schema(),
            &Variables::new(),
            &context(),
        )
        .await
        .unwrap();

        assert_eq!(errors.len(), 1);
        assert!(
            format!("{errors:?}").contains(
                "Cannot post comment on non-existing link with id 'ghost'.",
            ),
            "unexpected errors: {errors:?}",
        );
    }
}
