/// Failures that can escape the collectors.
///
/// Malformed command output never produces one of these; only a collaborator
/// that cannot do its job at all (a command that will not start, a pattern
/// that will not compile) does.
#[derive(Debug, thiserror::Error)]
pub enum CollectError {
    #[error("empty command line")]
    EmptyCommand,

    #[error("failed to run `{command}`: {source}")]
    Command {
        command: String,
        #[source]
        source:  std::io::Error,
    },

    #[error("invalid pattern `{pattern}`: {reason}")]
    Pattern {
        pattern: String,
        reason:  String,
    },
}

pub type Result<T> = std::result::Result<T, CollectError>;
