//! [`Comment`]-related definitions.

use derive_more::From;
use juniper::{graphql_object, ID};
use service::domain;

use crate::{api, Context};

/// A comment posted to a `Link`.
#[derive(Clone, Debug, From)]
pub struct Comment(domain::Comment);

#[graphql_object(context = Context)]
impl Comment {
    /// Unique identifier of this `Comment`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Comment.id",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn id(&self) -> ID {
        ID::new(self.0.id.to_string())
    }

    /// Text of this `Comment`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Comment.text",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn text(&self) -> &str {
        self.0.text.as_ref()
    }
}
