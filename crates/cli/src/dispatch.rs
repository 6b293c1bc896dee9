//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching resource client call.
//! - Print each result as pretty JSON.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Client construction or teardown (see `main()`).

use anyhow::{Context, Result};
use futures::TryStreamExt;
use mode_client::{BatchQuery, IncludeSpaces, ModeClient};

use crate::args::{
    AccountCommand, BatchCommand, Commands, DefinitionsCommand, QueriesCommand, QueryRunsCommand,
    ReportsCommand, RunsCommand, SpacesCommand, space_filter,
};
use crate::output::print_json;

/// Run one command against a connected client.
pub(crate) async fn run_command(client: &ModeClient, command: Commands) -> Result<()> {
    match command {
        Commands::Account { command } => account(client, command).await,
        Commands::Spaces { command } => spaces(client, command).await,
        Commands::Reports { command } => reports(client, command).await,
        Commands::Queries { command } => queries(client, command).await,
        Commands::Runs { command } => runs(client, command).await,
        Commands::QueryRuns { command } => query_runs(client, command).await,
        Commands::Definitions { command } => definitions(client, command).await,
        Commands::Batch { command } => batch(client, command).await,
    }
}

async fn account(client: &ModeClient, command: AccountCommand) -> Result<()> {
    match command {
        AccountCommand::Get { account } => {
            let username = account.unwrap_or_else(|| client.workspace().to_string());
            let account = client
                .account()
                .get(&username)
                .await
                .with_context(|| format!("Failed to get account {username}"))?;
            print_json(&account)
        }
    }
}

async fn spaces(client: &ModeClient, command: SpacesCommand) -> Result<()> {
    match command {
        SpacesCommand::List { all } => {
            let spaces = client
                .spaces()
                .list(space_filter(all))
                .await
                .context("Failed to list spaces")?;
            print_json(&spaces)
        }
        SpacesCommand::Get { space } => {
            let space = client
                .spaces()
                .get(&space)
                .await
                .with_context(|| format!("Failed to get space {space}"))?;
            print_json(&space)
        }
    }
}

async fn reports(client: &ModeClient, command: ReportsCommand) -> Result<()> {
    let reports = client.reports();
    match command {
        ReportsCommand::Get { report } => {
            let found = reports
                .get(&report)
                .await
                .with_context(|| format!("Failed to get report {report}"))?;
            print_json(&found)
        }
        ReportsCommand::List(args) => {
            let options = args.listing.to_options();
            let listed = match (&args.space, &args.data_source) {
                (Some(space), _) => reports
                    .list_for_space(space, &options)
                    .await
                    .with_context(|| format!("Failed to list reports in space {space}"))?,
                (None, Some(source)) => reports
                    .list_using_data_source(source, &options)
                    .await
                    .with_context(|| format!("Failed to list reports using data source {source}"))?,
                (None, None) => anyhow::bail!("either --space or --data-source is required"),
            };
            print_json(&listed)
        }
        ReportsCommand::Archive { report } => {
            let archived = reports
                .archive(&report)
                .await
                .with_context(|| format!("Failed to archive report {report}"))?;
            print_json(&archived)
        }
        ReportsCommand::Unarchive { report } => {
            let restored = reports
                .unarchive(&report)
                .await
                .with_context(|| format!("Failed to unarchive report {report}"))?;
            print_json(&restored)
        }
    }
}

async fn queries(client: &ModeClient, command: QueriesCommand) -> Result<()> {
    match command {
        QueriesCommand::List { report } => {
            let queries = client
                .queries()
                .list(&report)
                .await
                .with_context(|| format!("Failed to list queries of report {report}"))?;
            print_json(&queries)
        }
        QueriesCommand::Get { report, query } => {
            let query = client
                .queries()
                .get(&report, &query)
                .await
                .with_context(|| format!("Failed to get query {query} of report {report}"))?;
            print_json(&query)
        }
    }
}

async fn runs(client: &ModeClient, command: RunsCommand) -> Result<()> {
    let runs = client.report_runs();
    match command {
        RunsCommand::List { report, listing } => {
            let page = runs
                .list(&report, &listing.to_options())
                .await
                .with_context(|| format!("Failed to list runs of report {report}"))?;
            print_json(&page)
        }
        RunsCommand::Get { report, run } => {
            let found = runs
                .get(&report, &run)
                .await
                .with_context(|| format!("Failed to get run {run} of report {report}"))?;
            print_json(&found)
        }
        RunsCommand::Create { report, params } => {
            let parameters = RunsCommand::parameters(params);
            let created = runs
                .create(&report, &parameters)
                .await
                .with_context(|| format!("Failed to start a run of report {report}"))?;
            print_json(&created)
        }
        RunsCommand::Clone { report, run } => {
            let cloned = runs
                .clone_run(&report, &run)
                .await
                .with_context(|| format!("Failed to clone run {run} of report {report}"))?;
            print_json(&cloned)
        }
    }
}

async fn query_runs(client: &ModeClient, command: QueryRunsCommand) -> Result<()> {
    match command {
        QueryRunsCommand::List { report, run } => {
            let listed = client
                .query_runs()
                .list(&report, &run)
                .await
                .with_context(|| format!("Failed to list query runs of run {run}"))?;
            print_json(&listed)
        }
        QueryRunsCommand::Get {
            report,
            run,
            query_run,
        } => {
            let found = client
                .query_runs()
                .get(&report, &run, &query_run)
                .await
                .with_context(|| format!("Failed to get query run {query_run}"))?;
            print_json(&found)
        }
    }
}

async fn definitions(client: &ModeClient, command: DefinitionsCommand) -> Result<()> {
    match command {
        DefinitionsCommand::List { filter, tokens } => {
            let listed = client
                .definitions()
                .list(filter.as_deref(), tokens.as_slice())
                .await
                .context("Failed to list definitions")?;
            print_json(&listed)
        }
        DefinitionsCommand::Get { definition } => {
            let found = client
                .definitions()
                .get(&definition)
                .await
                .with_context(|| format!("Failed to get definition {definition}"))?;
            print_json(&found)
        }
    }
}

async fn batch(client: &ModeClient, command: BatchCommand) -> Result<()> {
    let batch = client.batch_queries()?;
    match command {
        BatchCommand::Queries {
            page,
            per_page,
            all_spaces,
            all_pages,
        } => {
            let include_spaces = all_spaces.then_some(IncludeSpaces::All);
            if all_pages {
                let queries: Vec<BatchQuery> = batch
                    .stream_all(per_page, include_spaces)
                    .try_collect()
                    .await
                    .context("Failed to list batch queries")?;
                print_json(&queries)
            } else {
                let listed = batch
                    .list(page, per_page, include_spaces)
                    .await
                    .with_context(|| format!("Failed to list batch queries page {page}"))?;
                print_json(&listed)
            }
        }
    }
}
