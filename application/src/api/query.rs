//! GraphQL [`Query`]s definitions.

use juniper::{graphql_object, ID};
use service::{domain, query, Query as _};

use crate::{api, AsError, Context, Error};

/// Root of all GraphQL queries.
#[derive(Clone, Copy, Debug)]
pub struct Query;

impl Query {
    /// Name of the [`tracing::Span`] for the queries.
    pub(crate) const SPAN_NAME: &'static str = "GraphQL query";
}

#[graphql_object(context = Context)]
impl Query {
    /// Returns the description of this API.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "info",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub fn info() -> &'static str {
        "This is the API of a Hackernews Clone"
    }

    /// Fetches all the posted `Link`s.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "feed",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn feed(ctx: &Context) -> Result<Vec<api::Link>, Error> {
        ctx.service()
            .execute(query::link::Feed::all())
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|links| links.into_iter().map(Into::into).collect())
    }

    /// Returns the `Comment` with the specified ID, if any exists.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "comment",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn comment(
        id: ID,
        ctx: &Context,
    ) -> Result<Option<api::Comment>, Error> {
        // No `Comment` can be identified by a non-numeric ID.
        let Ok(id) = id.parse::<domain::comment::Id>() else {
            return Ok(None);
        };

        ctx.service()
            .execute(query::comment::ById::by(id))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|comment| comment.map(Into::into))
    }
}
