//! Item streams over paging list operations

use super::strategies::OffsetPaginator;
use super::types::{Page, PaginationState};
use crate::error::{Error, Result};
use crate::http::{Context, DetailedResponse};
use crate::models::{ActionLite, JobLite, WorkspaceActivity, WorkspaceResponse};
use crate::service::{
    ListActionsOptions, ListJobsOptions, ListWorkspaceActivitiesOptions, ListWorkspacesOptions,
    SchematicsV1,
};
use futures::stream::{self, Stream, TryStreamExt};
use std::future::Future;
use std::pin::Pin;
use tracing::debug;

/// Stream of items fetched page by page
pub type ItemStream<'a, T> = Pin<Box<dyn Stream<Item = Result<T>> + Send + 'a>>;

/// Drive `fetch` from `start` until the paginator reports the last page
///
/// The first error ends the stream after being yielded.
pub fn paginate<'a, P, F, Fut>(
    paginator: OffsetPaginator,
    start: i64,
    fetch: F,
) -> ItemStream<'a, P::Item>
where
    P: Page + Send + 'a,
    P::Item: Send + 'a,
    F: FnMut(i64, i64) -> Fut + Send + 'a,
    Fut: Future<Output = Result<P>> + Send + 'a,
{
    let state = PaginationState::with_offset(start);
    let pages = stream::try_unfold((state, fetch), move |(mut state, mut fetch)| async move {
        if state.done {
            return Ok::<_, Error>(None);
        }

        let page = fetch(state.offset, paginator.limit).await?;
        let total = page.total_count();
        let items = page.into_items();

        let next = paginator.process_page(items.len(), total, &mut state);
        debug!(
            "Fetched page {} ({} items, {} total), next: {:?}",
            state.pages,
            items.len(),
            state.total_fetched,
            next
        );

        Ok(Some((stream::iter(items.into_iter().map(Ok::<_, Error>)), (state, fetch))))
    });

    Box::pin(pages.try_flatten())
}

fn start_of(offset: Option<i64>, limit: Option<i64>) -> (i64, OffsetPaginator) {
    (
        offset.unwrap_or(0),
        OffsetPaginator::new(limit.unwrap_or_default()),
    )
}

impl SchematicsV1 {
    /// Every workspace, starting at `options.offset` and fetching
    /// `options.limit` per page
    pub fn list_workspaces_pager(
        &self,
        options: &ListWorkspacesOptions,
    ) -> ItemStream<'_, WorkspaceResponse> {
        self.list_workspaces_pager_with_context(Context::background(), options)
    }

    pub fn list_workspaces_pager_with_context(
        &self,
        ctx: Context,
        options: &ListWorkspacesOptions,
    ) -> ItemStream<'_, WorkspaceResponse> {
        let (start, paginator) = start_of(options.offset, options.limit);
        let options = options.clone();
        paginate(paginator, start, move |offset, limit| {
            let page = options.clone().offset(offset).limit(limit);
            let ctx = ctx.clone();
            async move {
                self.list_workspaces_with_context(&ctx, &page)
                    .await
                    .map(DetailedResponse::into_result)
            }
        })
    }

    /// Every activity of a workspace
    pub fn list_workspace_activities_pager(
        &self,
        options: &ListWorkspaceActivitiesOptions,
    ) -> ItemStream<'_, WorkspaceActivity> {
        self.list_workspace_activities_pager_with_context(Context::background(), options)
    }

    pub fn list_workspace_activities_pager_with_context(
        &self,
        ctx: Context,
        options: &ListWorkspaceActivitiesOptions,
    ) -> ItemStream<'_, WorkspaceActivity> {
        let (start, paginator) = start_of(options.offset, options.limit);
        let options = options.clone();
        paginate(paginator, start, move |offset, limit| {
            let page = options.clone().offset(offset).limit(limit);
            let ctx = ctx.clone();
            async move {
                self.list_workspace_activities_with_context(&ctx, &page)
                    .await
                    .map(DetailedResponse::into_result)
            }
        })
    }

    /// Every action
    pub fn list_actions_pager(&self, options: &ListActionsOptions) -> ItemStream<'_, ActionLite> {
        self.list_actions_pager_with_context(Context::background(), options)
    }

    pub fn list_actions_pager_with_context(
        &self,
        ctx: Context,
        options: &ListActionsOptions,
    ) -> ItemStream<'_, ActionLite> {
        let (start, paginator) = start_of(options.offset, options.limit);
        let options = options.clone();
        paginate(paginator, start, move |offset, limit| {
            let page = options.clone().offset(offset).limit(limit);
            let ctx = ctx.clone();
            async move {
                self.list_actions_with_context(&ctx, &page)
                    .await
                    .map(DetailedResponse::into_result)
            }
        })
    }

    /// Every job
    pub fn list_jobs_pager(&self, options: &ListJobsOptions) -> ItemStream<'_, JobLite> {
        self.list_jobs_pager_with_context(Context::background(), options)
    }

    pub fn list_jobs_pager_with_context(
        &self,
        ctx: Context,
        options: &ListJobsOptions,
    ) -> ItemStream<'_, JobLite> {
        let (start, paginator) = start_of(options.offset, options.limit);
        let options = options.clone();
        paginate(paginator, start, move |offset, limit| {
            let page = options.clone().offset(offset).limit(limit);
            let ctx = ctx.clone();
            async move {
                self.list_jobs_with_context(&ctx, &page)
                    .await
                    .map(DetailedResponse::into_result)
            }
        })
    }
}
