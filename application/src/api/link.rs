//! [`Link`]-related definitions.

use derive_more::From;
use juniper::{graphql_object, ID};
use service::{domain, query, Query as _};

use crate::{api, AsError, Context, Error};

/// A link posted to the aggregator.
#[derive(Clone, Debug, From)]
pub struct Link(domain::Link);

#[graphql_object(context = Context)]
impl Link {
    /// Unique identifier of this `Link`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Link.id",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn id(&self) -> ID {
        ID::new(self.0.id.to_string())
    }

    /// Description of this `Link`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Link.description",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn description(&self) -> &str {
        self.0.description.as_ref()
    }

    /// URL of this `Link`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Link.url",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn url(&self) -> &str {
        self.0.url.as_ref()
    }

    /// `Comment`s posted to this `Link`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Link.comments",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn comments(
        &self,
        ctx: &Context,
    ) -> Result<Option<Vec<api::Comment>>, Error> {
        ctx.service()
            .execute(query::comment::ByLink::by(self.0.id))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|comments| {
                Some(comments.into_iter().map(Into::into).collect())
            })
    }
}
