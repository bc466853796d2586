//! GraphQL [`Mutation`]s definitions.

use std::fmt;

use juniper::{graphql_object, ID};
use service::{command, domain, Command as _};

use crate::{api, AsError, Context, Error};

/// Root of all GraphQL mutations.
#[derive(Clone, Copy, Debug)]
pub struct Mutation;

impl Mutation {
    /// Name of the [`tracing::Span`] for the mutations.
    const SPAN_NAME: &'static str = "GraphQL mutation";
}

#[graphql_object(context = Context)]
impl Mutation {
    /// Posts a new `Link` with the provided URL and description.
    #[tracing::instrument(
        skip_all,
        fields(
            description = %description,
            gql.name = "postLink",
            otel.name = Self::SPAN_NAME,
            url = %url,
        ),
    )]
    pub async fn post_link(
        url: String,
        description: String,
        ctx: &Context,
    ) -> Result<api::Link, Error> {
        ctx.service()
            .execute(command::PostLink {
                url: url.into(),
                description: description.into(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Posts a new `Comment` to the `Link` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `LINK_NOT_EXISTS` - the `Link` with the specified ID does not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "postComment",
            link_id = %link_id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn post_comment(
        link_id: ID,
        text: String,
        ctx: &Context,
    ) -> Result<api::Comment, Error> {
        use command::post_comment::ExecutionError as E;

        // No `Link` can be identified by a non-numeric ID.
        let Ok(id) = link_id.parse::<domain::link::Id>() else {
            return Err(ctx.error()(non_existing_link(&link_id)));
        };

        ctx.service()
            .execute(command::PostComment {
                link_id: id,
                text: text.into(),
            })
            .await
            .map_err(|e| match e.as_ref() {
                // The error message interpolates the ID as the client sent it.
                E::LinkNotExists(_) => non_existing_link(&link_id),
                E::Db(_) => e.into_error(),
            })
            .map_err(ctx.error())
            .map(Into::into)
    }
}

/// Returns an [`Error`] of posting a `Comment` to a non-existing `Link`.
fn non_existing_link(id: &impl fmt::Display) -> Error {
    Error {
        code: "LINK_NOT_EXISTS",
        status_code: http::StatusCode::BAD_REQUEST,
        message: format!(
            "Cannot post comment on non-existing link with id '{id}'.",
        ),
        backtrace: None,
    }
}

impl AsError for command::post_comment::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            command::post_comment::ExecutionError::LinkNotExists(id) => {
                Some(non_existing_link(id))
            }
            command::post_comment::ExecutionError::Db(e) => e.try_as_error(),
        }
    }
}
