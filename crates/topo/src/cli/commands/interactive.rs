//! Implementation of `topo interactive`.
//!
//! Each line read from stdin is either new query text or a `:command`. Lines are turned
//! into [`UiEvent`]s by a reader task and fed to a [`SearchSession`], which prints the
//! result list whenever it opens or changes.

use std::{process::ExitCode, time::Duration};

use tokio::{
    io::{self, AsyncBufReadExt, BufReader},
    sync::{mpsc, watch},
};
use topo_session::{ResultsView, SearchBox, SearchSession, TopicStatus, UiEvent, UiSink};
use topo_tree::SearchRecord;
use tracing::debug;

use crate::cli::{
    args::InteractiveCommand,
    context::CommandContext,
    output::{breadcrumb, dim, header, print_results, success, warning},
};

/// Capacity of the reader-to-session event channel.
const EVENT_BUFFER: usize = 64;

/// Command summary printed by `:help`.
const HELP: &str = "\
  <text>     replace the query
  :more      reveal more results
  :enter     choose the best match
  :pick N    choose result N
  :blur      hide results
  :focus     show results again
  :quit      exit";

/// One line of terminal input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    /// New query text.
    Input(String),
    /// `:more`
    More,
    /// `:enter`
    Enter,
    /// `:pick N`, one-based.
    Pick(usize),
    /// `:blur`
    Blur,
    /// `:focus`
    Focus,
    /// `:quit`
    Quit,
    /// `:help`
    Help,
    /// Anything else starting with `:`.
    Invalid(String),
}

/// Classifies a line of input.
fn parse_line(line: &str) -> Line {
    let line = line.trim_end_matches(['\r', '\n']);
    let Some(command) = line.strip_prefix(':') else {
        return Line::Input(line.to_string());
    };

    let mut words = command.split_whitespace();
    match (words.next(), words.next(), words.next()) {
        (Some("more" | "m"), None, None) => Line::More,
        (Some("enter" | "e"), None, None) => Line::Enter,
        (Some("pick" | "p"), Some(n), None) => match n.parse::<usize>() {
            Ok(n) if n > 0 => Line::Pick(n),
            _ => Line::Invalid(line.to_string()),
        },
        (Some("blur"), None, None) => Line::Blur,
        (Some("focus"), None, None) => Line::Focus,
        (Some("quit" | "q"), None, None) => Line::Quit,
        (Some("help" | "h" | "?"), None, None) => Line::Help,
        _ => Line::Invalid(line.to_string()),
    }
}

/// The list last printed, used to skip identical redraws.
#[derive(Debug, PartialEq, Eq)]
struct Printed {
    /// Query text.
    query: String,
    /// Keys of the visible records.
    keys: Vec<i64>,
    /// Total matches.
    total: usize,
}

/// Prints session output to the terminal and shares state with the reader task.
struct TerminalUi {
    /// Topic availability, watched by the reader.
    status: watch::Sender<TopicStatus>,
    /// Records currently on screen, for `:pick`.
    visible: watch::Sender<Vec<SearchRecord>>,
    /// What the open list last showed.
    printed: Option<Printed>,
}

impl UiSink for TerminalUi {
    fn render(&mut self, view: &ResultsView<'_>) {
        if !view.results_open() {
            self.printed = None;
            self.visible.send_replace(Vec::new());
            return;
        }

        let printed = Printed {
            query: view.query.to_string(),
            keys: view.visible.iter().map(|r| r.key).collect(),
            total: view.total,
        };
        if self.printed.as_ref() == Some(&printed) {
            return;
        }

        let noun = if view.total == 1 { "match" } else { "matches" };
        println!(
            "{}",
            header(&format!("{} {noun} for \"{}\"", view.total, view.query))
        );
        print_results(view.visible, view.total);
        self.visible.send_replace(view.visible.to_vec());
        self.printed = Some(printed);
    }

    fn committed(&mut self, record: &SearchRecord) {
        println!(
            "{} {} {}",
            success("selected"),
            breadcrumb(&record.breadcrumb),
            dim(&format!("#{}", record.value))
        );
        self.printed = None;
    }

    fn topics_changed(&mut self, status: &TopicStatus) {
        match status {
            TopicStatus::Loading => eprintln!("{}", dim("loading topics...")),
            TopicStatus::Unavailable(reason) => {
                eprintln!("{}", warning(&format!("topics unavailable: {reason}")));
            }
            TopicStatus::Idle | TopicStatus::Ready => {}
        }
        self.status.send_replace(status.clone());
    }
}

/// Runs a search session on stdin until end of input or `:quit`.
pub async fn run(ctx: &CommandContext, cmd: &InteractiveCommand) -> ExitCode {
    let mut params = match ctx.search_params(&cmd.params) {
        Ok(params) => params,
        Err(code) => return code,
    };
    if let Some(ms) = cmd.debounce_ms {
        params.debounce = Duration::from_millis(ms);
    }
    let source = match ctx.topic_source(&cmd.source) {
        Ok(source) => source,
        Err(code) => return code,
    };
    debug!(
        profile = %params.profile,
        window = params.window,
        debounce = ?params.debounce,
        "starting session"
    );

    let (event_tx, event_rx) = mpsc::channel(EVENT_BUFFER);
    let (status_tx, status_rx) = watch::channel(TopicStatus::Idle);
    let (visible_tx, visible_rx) = watch::channel(Vec::new());

    let mut ui = TerminalUi {
        status: status_tx,
        visible: visible_tx,
        printed: None,
    };
    let search_box = SearchBox::new(params.matcher, params.window, params.debounce);
    let mut session = SearchSession::new(search_box, source);

    eprintln!("{}", dim("Type to search. :help lists commands."));
    let reader = tokio::spawn(read_events(event_tx, status_rx, visible_rx));
    session.run(event_rx, &mut ui).await;

    match reader.await {
        Ok(Ok(())) => ExitCode::SUCCESS,
        Ok(Err(e)) => {
            eprintln!("error: failed to read input: {e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: input task failed: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Forwards stdin lines to the session once topics have been fetched.
///
/// Returning drops `events`, which ends the session.
async fn read_events(
    events: mpsc::Sender<UiEvent>,
    mut status: watch::Receiver<TopicStatus>,
    visible: watch::Receiver<Vec<SearchRecord>>,
) -> io::Result<()> {
    let loaded = status
        .wait_for(|s| !matches!(s, TopicStatus::Idle | TopicStatus::Loading))
        .await
        .is_ok();
    if !loaded {
        debug!("session ended before topics were fetched");
        return Ok(());
    }

    let mut lines = BufReader::new(io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let event = match parse_line(&line) {
            Line::Input(text) => UiEvent::InputChanged(text),
            Line::More => UiEvent::RequestMore,
            Line::Enter => UiEvent::Commit,
            Line::Blur => UiEvent::BlurOutside,
            Line::Focus => UiEvent::Focus,
            Line::Pick(n) => {
                let record = visible.borrow().get(n - 1).cloned();
                match record {
                    Some(record) => UiEvent::SelectResult(record),
                    None => {
                        eprintln!("{}", warning(&format!("no result {n} on screen")));
                        continue;
                    }
                }
            }
            Line::Quit => break,
            Line::Help => {
                eprintln!("{HELP}");
                continue;
            }
            Line::Invalid(text) => {
                eprintln!(
                    "{}",
                    warning(&format!("unknown command '{text}'; :help lists commands"))
                );
                continue;
            }
        };
        if events.send(event).await.is_err() {
            break;
        }
    }
    Ok(())
}
