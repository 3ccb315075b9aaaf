//! Implementation of `topo search`.

use std::process::ExitCode;

use topo_match::Matcher;
use topo_session::RevealController;
use topo_tree::flatten;
use tracing::debug;

use crate::cli::{
    args::SearchCommand,
    context::CommandContext,
    output::{print_results, print_results_json},
};

/// Runs a single search and prints the first window of matches.
pub async fn run(ctx: &CommandContext, cmd: &SearchCommand) -> ExitCode {
    let params = match ctx.search_params(&cmd.params) {
        Ok(params) => params,
        Err(code) => return code,
    };
    let source = match ctx.topic_source(&cmd.source) {
        Ok(source) => source,
        Err(code) => return code,
    };
    let topics = match ctx.load_topics(source.as_ref()).await {
        Ok(topics) => topics,
        Err(code) => return code,
    };

    let query = cmd.query.join(" ");
    let matcher = Matcher::with_records(params.matcher, flatten(&topics));
    let parsed = matcher.parse(&query);
    let results = matcher.search_query(&parsed);
    debug!(
        profile = %params.profile,
        mode = parsed.mode(),
        total = results.len(),
        "search complete"
    );

    let shown = if cmd.all {
        &results[..]
    } else {
        let mut reveal = RevealController::new(params.window);
        reveal.reset(results.len());
        reveal.visible(&results)
    };

    if cmd.json {
        return print_results_json(&query, parsed.mode(), shown, results.len());
    }
    print_results(shown, results.len());
    ExitCode::SUCCESS
}
