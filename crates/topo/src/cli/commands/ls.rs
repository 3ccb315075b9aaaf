//! Implementation of `topo ls`.

use std::process::ExitCode;

use topo_tree::{TopicNode, node_count};

use crate::cli::{
    args::LsCommand,
    context::CommandContext,
    output::{dim, subheader},
};

/// Lists every topic, indented by depth.
pub async fn run(ctx: &CommandContext, cmd: &LsCommand) -> ExitCode {
    let source = match ctx.topic_source(&cmd.source) {
        Ok(source) => source,
        Err(code) => return code,
    };
    let topics = match ctx.load_topics(source.as_ref()).await {
        Ok(topics) => topics,
        Err(code) => return code,
    };

    if topics.is_empty() {
        println!("{}", dim("No topics."));
        return ExitCode::SUCCESS;
    }

    for topic in topics.iter().flat_map(TopicNode::iter_preorder) {
        println!("{}", topic_line(topic, cmd.long));
    }

    let count = node_count(&topics);
    let noun = if count == 1 { "topic" } else { "topics" };
    println!("{}", dim(&format!("{count} {noun}")));
    ExitCode::SUCCESS
}

/// Formats one listing line.
fn topic_line(topic: &TopicNode, long: bool) -> String {
    let indent = "  ".repeat(topic.depth().saturating_sub(1));
    let mut line = format!(
        "{indent}{} {}",
        subheader(topic.label()),
        dim(&format!("#{}", topic.id))
    );
    if long {
        line.push_str(&dim(&format!("  {}", topic.path)));
        let flags = flags(topic);
        if !flags.is_empty() {
            line.push_str(&dim(&format!(" [{}]", flags.join(", "))));
        }
    }
    line
}

/// Collects the notable metadata of a topic.
fn flags(topic: &TopicNode) -> Vec<String> {
    let mut flags = Vec::new();
    if !topic.is_visible {
        flags.push("not visible".to_string());
    }
    if topic.is_hidden {
        flags.push("hidden".to_string());
    }
    if topic.is_adultonly {
        flags.push("adult only".to_string());
    }
    if topic.priority != 0 {
        flags.push(format!("priority {}", topic.priority));
    }
    flags
}

#[cfg(test)]
mod tests {
    use topo_highlight::strip_ansi;

    use super::*;

    #[test]
    fn lines_indent_by_depth() {
        let topic = TopicNode::new(3, "science/physics/quantum");
        assert_eq!(strip_ansi(&topic_line(&topic, false)), "    quantum #3");
    }

    #[test]
    fn untitled_topics_use_last_segment() {
        let topic = TopicNode {
            title: String::new(),
            ..TopicNode::new(2, "science/physics")
        };
        assert_eq!(strip_ansi(&topic_line(&topic, false)), "  physics #2");
    }

    #[test]
    fn long_lines_show_path_and_flags() {
        let topic = TopicNode {
            is_visible: true,
            is_adultonly: true,
            priority: 2,
            ..TopicNode::new(7, "arts")
        };
        assert_eq!(
            strip_ansi(&topic_line(&topic, true)),
            "arts #7  arts [adult only, priority 2]"
        );
    }
}
